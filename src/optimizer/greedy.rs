use super::partition::BySlot;
use super::{Pick, SlotAssignment};
use crate::model::SlotCategory;
use crate::scorer::Scorer;

/// Picks the best-scoring item of every slot independently. Ties go to the
/// first item in input order. Empty slots stay missing and get a warning.
pub fn assign<'a>(by_slot: &BySlot<'a>, scorer: &Scorer) -> (SlotAssignment<'a>, Vec<String>) {
    let mut assignment = SlotAssignment::default();
    let mut warnings = Vec::new();

    for slot in SlotCategory::all() {
        let candidates = by_slot.get(slot);
        if candidates.is_empty() {
            warnings.push(format!("Missing slot: {}", slot));
            continue;
        }

        let mut best: Option<Pick<'a>> = None;
        for &item in candidates {
            let score = scorer.score(item);
            let better = match &best {
                Some(b) => score.total > b.score.total,
                None => true,
            };
            if better {
                best = Some(Pick { item, score });
            }
        }
        assignment.replace(slot, best);
    }

    (assignment, warnings)
}

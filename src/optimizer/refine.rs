use super::partition::BySlot;
use super::{OptimizationOptions, Pick, SlotAssignment};
use crate::model::SlotCategory;
use crate::scorer::Scorer;
use std::ptr;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefineStats {
    pub passes_run: usize,
    pub swaps: usize,
}

/// Bounded single-slot substitution search.
///
/// Each pass walks the filled slots in slot order and tries the top
/// `options.top_n` candidates (by individual score) in place of the current
/// pick. The first swap that raises the set total by more than
/// `options.epsilon` is kept. Stops after `options.passes` passes or after a
/// pass without any swap. The total never decreases.
pub fn refine<'a>(
    assignment: &mut SlotAssignment<'a>,
    by_slot: &BySlot<'a>,
    scorer: &Scorer,
    options: &OptimizationOptions,
) -> RefineStats {
    let mut stats = RefineStats::default();

    for pass in 0..options.passes {
        stats.passes_run += 1;
        let mut improved = false;

        for slot in SlotCategory::all() {
            let candidates = by_slot.get(slot);
            let current = match assignment.get(slot) {
                Some(p) if !candidates.is_empty() => p.item,
                _ => continue,
            };

            let mut scored: Vec<Pick<'a>> = candidates
                .iter()
                .map(|&item| Pick {
                    item,
                    score: scorer.score(item),
                })
                .collect();
            scored.sort_by(|a, b| b.score.total.total_cmp(&a.score.total));
            scored.truncate(options.top_n);

            let base_total = assignment.total();

            for cand in scored {
                if ptr::eq(cand.item, current) {
                    continue;
                }
                let prev = assignment.replace(slot, Some(cand));
                let new_total = assignment.total();
                if new_total > base_total + options.epsilon {
                    debug!(
                        "pass {}: {} swap raised total {} -> {}",
                        pass, slot, base_total, new_total
                    );
                    stats.swaps += 1;
                    improved = true;
                    break;
                }
                assignment.replace(slot, prev);
            }
        }

        if !improved {
            break;
        }
    }

    stats
}

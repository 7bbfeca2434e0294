use super::SlotAssignment;
use crate::matching::MatchCriteria;
use crate::model::{Effect, Side, SlotCategory};
use crate::scorer::Contribution;
use serde::{Deserialize, Serialize};

/// Details of a filled slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotPick {
    pub score: f64,
    pub contributions: Vec<Contribution>,
    pub effects: Vec<Effect>,
    pub unknown_ignored: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotOutput {
    pub slot: SlotCategory,
    pub missing: bool,
    #[serde(flatten)]
    pub pick: Option<SlotPick>,
}

impl SlotOutput {
    pub fn score(&self) -> f64 {
        self.pick.as_ref().map(|p| p.score).unwrap_or(0.0)
    }
}

/// Best set found for one side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    pub side: Side,
    pub criteria: MatchCriteria,
    /// Normalized phrases the items were scored against.
    pub phrases: Vec<String>,
    pub strategy: String,
    pub total: f64,
    pub warnings: Vec<String>,
    pub slots: Vec<SlotOutput>,
}

impl OptimizationResult {
    pub fn slot(&self, slot: SlotCategory) -> Option<&SlotOutput> {
        self.slots.iter().find(|s| s.slot == slot)
    }
}

pub struct ResultContext<'c> {
    pub side: Side,
    pub criteria: &'c MatchCriteria,
    pub phrases: &'c [String],
    pub strategy: &'c str,
}

pub fn build(
    ctx: ResultContext<'_>,
    assignment: &SlotAssignment<'_>,
    warnings: Vec<String>,
) -> OptimizationResult {
    let slots: Vec<SlotOutput> = SlotCategory::all()
        .map(|slot| match assignment.get(slot) {
            None => SlotOutput {
                slot,
                missing: true,
                pick: None,
            },
            Some(p) => SlotOutput {
                slot,
                missing: false,
                pick: Some(SlotPick {
                    score: p.score.total,
                    contributions: p.score.contributions.clone(),
                    effects: p.item.effects.clone(),
                    unknown_ignored: p.score.unknown_ignored,
                }),
            },
        })
        .collect();

    OptimizationResult {
        side: ctx.side,
        criteria: ctx.criteria.clone(),
        phrases: ctx.phrases.to_vec(),
        strategy: ctx.strategy.to_string(),
        total: slots.iter().map(SlotOutput::score).sum(),
        warnings,
        slots,
    }
}

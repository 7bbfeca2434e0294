pub mod greedy;
pub mod partition;
pub mod refine;
pub mod result;

pub use self::partition::{partition, BySlot};
pub use self::refine::RefineStats;
pub use self::result::{OptimizationResult, SlotOutput, SlotPick};
use crate::config::SearchParams;
use crate::error::GfResult;
use crate::matching::MatchCriteria;
use crate::model::{Item, Side, SlotCategory, SLOT_COUNT};
use crate::scorer::{ItemScore, Scorer, ScoringStrategy};
use tracing::debug;

/// Candidates tried per slot during refinement. Keeps a pass cheap on
/// inventories with thousands of items per slot.
pub const TOP_N: usize = 40;
/// Refinement passes after the greedy pick.
pub const DEFAULT_PASSES: usize = 1;
/// Minimum gain for a swap to count, so equal totals never oscillate.
pub const IMPROVEMENT_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationOptions {
    pub passes: usize,
    pub top_n: usize,
    pub epsilon: f64,
    /// Lets a free-text target containing "unknown" match unknown effects.
    pub allow_unknown_in_target: bool,
}

impl Default for OptimizationOptions {
    fn default() -> Self {
        Self {
            passes: DEFAULT_PASSES,
            top_n: TOP_N,
            epsilon: IMPROVEMENT_EPSILON,
            allow_unknown_in_target: true,
        }
    }
}

impl From<&SearchParams> for OptimizationOptions {
    fn from(params: &SearchParams) -> Self {
        Self {
            passes: params.passes,
            top_n: params.top_n,
            epsilon: IMPROVEMENT_EPSILON,
            allow_unknown_in_target: !params.no_unknown_target,
        }
    }
}

/// An item chosen for a slot together with its score.
#[derive(Debug, Clone)]
pub struct Pick<'a> {
    pub item: &'a Item,
    pub score: ItemScore,
}

/// At most one pick per slot. Borrowed from the caller's items, which are
/// never modified.
#[derive(Debug, Clone, Default)]
pub struct SlotAssignment<'a> {
    picks: [Option<Pick<'a>>; SLOT_COUNT],
}

impl<'a> SlotAssignment<'a> {
    pub fn get(&self, slot: SlotCategory) -> Option<&Pick<'a>> {
        self.picks[slot.index()].as_ref()
    }

    /// Sets the slot and returns the previous occupant.
    pub fn replace(&mut self, slot: SlotCategory, pick: Option<Pick<'a>>) -> Option<Pick<'a>> {
        std::mem::replace(&mut self.picks[slot.index()], pick)
    }

    /// Sum of pick scores. Missing slots add nothing.
    pub fn total(&self) -> f64 {
        self.picks.iter().flatten().map(|p| p.score.total).sum()
    }

    pub fn filled(&self) -> usize {
        self.picks.iter().flatten().count()
    }
}

/// Greedy + bounded local search over one criteria/strategy pair.
pub struct Optimizer {
    criteria: MatchCriteria,
    scorer: Scorer,
    options: OptimizationOptions,
}

impl Optimizer {
    /// Fails with `NoKeywordsConfigured` when the criteria yield no phrases.
    pub fn new(
        criteria: MatchCriteria,
        strategy: ScoringStrategy,
        options: OptimizationOptions,
    ) -> GfResult<Self> {
        let phrases = criteria.phrase_set(options.allow_unknown_in_target)?;
        Ok(Self {
            criteria,
            scorer: Scorer::new(phrases, strategy),
            options,
        })
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    pub fn options(&self) -> &OptimizationOptions {
        &self.options
    }

    pub fn run(&self, items: &[Item], side: Side) -> OptimizationResult {
        let by_slot = partition(items, side);
        let (mut assignment, warnings) = greedy::assign(&by_slot, &self.scorer);
        let greedy_total = assignment.total();

        let stats = refine::refine(&mut assignment, &by_slot, &self.scorer, &self.options);
        debug!(
            "{}: {} candidates, greedy {} -> refined {} ({} passes, {} swaps)",
            side,
            by_slot.len(),
            greedy_total,
            assignment.total(),
            stats.passes_run,
            stats.swaps
        );

        result::build(
            result::ResultContext {
                side,
                criteria: &self.criteria,
                phrases: &self.scorer.phrases.phrases,
                strategy: self.scorer.strategy.name(),
            },
            &assignment,
            warnings,
        )
    }
}

pub mod maxima;
pub mod types;

pub use self::maxima::{AttributeMax, MaximaTable};
pub use self::types::{Contribution, ItemScore};
use crate::matching::PhraseSet;
use crate::model::Item;
use crate::util::finite_or_zero;

pub const FULL_PURITY: f64 = 100.0;

/// How a matched effect value turns into score.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ScoringStrategy {
    /// Matched values are summed as-is.
    #[default]
    Additive,
    /// Matched values are clamped to the attribute maximum, weighted, then
    /// scaled by `purity` percent. Attributes without a maximum keep their
    /// raw value (still purity-scaled).
    MaximaWeighted { maxima: MaximaTable, purity: f64 },
}

impl ScoringStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Additive => "additive",
            Self::MaximaWeighted { .. } => "maxima-weighted",
        }
    }

    fn effect_value(&self, effect_name: &str, value: f64) -> f64 {
        match self {
            Self::Additive => value,
            Self::MaximaWeighted { maxima, purity } => {
                let factor = purity.clamp(0.0, FULL_PURITY) / FULL_PURITY;
                let base = match maxima.get(effect_name) {
                    Some(m) => m.clamp_and_score(value),
                    None => value,
                };
                base * factor
            }
        }
    }
}

/// Scores items against one phrase set with one strategy.
#[derive(Debug, Clone)]
pub struct Scorer {
    pub phrases: PhraseSet,
    pub strategy: ScoringStrategy,
}

impl Scorer {
    pub fn new(phrases: PhraseSet, strategy: ScoringStrategy) -> Self {
        Self { phrases, strategy }
    }

    pub fn additive(phrases: PhraseSet) -> Self {
        Self::new(phrases, ScoringStrategy::Additive)
    }

    pub fn score(&self, item: &Item) -> ItemScore {
        let mut score = ItemScore::default();

        for effect in &item.effects {
            let name = effect.name.to_lowercase();
            if effect.is_unknown() && !self.phrases.include_unknown {
                score.unknown_ignored += 1;
                continue;
            }

            let Some(matched_by) = self.phrases.first_match(&name) else {
                continue;
            };

            let value = finite_or_zero(
                self.strategy
                    .effect_value(&effect.name, finite_or_zero(effect.value)),
            );
            score.total += value;
            score.contributions.push(Contribution {
                effect_name: effect.name.clone(),
                value,
                matched_by: matched_by.to_string(),
            });
        }

        score
    }
}

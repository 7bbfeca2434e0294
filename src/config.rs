use crate::error::{GearForgeError, GfResult};
use crate::model::Side;
use crate::optimizer::{DEFAULT_PASSES, TOP_N};
use crate::scorer::{MaximaTable, ScoringStrategy, FULL_PURITY};
use clap::{Args, ValueEnum};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
    #[command(flatten)]
    pub scoring: ScoringParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Local-search passes after the greedy pick
    #[arg(long, default_value_t = DEFAULT_PASSES)]
    pub passes: usize,
    /// Candidates per slot tried during local search
    #[arg(long, default_value_t = TOP_N)]
    pub top_n: usize,
    /// Never let a free-text target match unknown effects
    #[arg(long, default_value_t = false)]
    pub no_unknown_target: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            passes: DEFAULT_PASSES,
            top_n: TOP_N,
            no_unknown_target: false,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    #[default]
    Additive,
    MaximaWeighted,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringParams {
    #[arg(long, value_enum, default_value_t = StrategyKind::Additive)]
    pub strategy: StrategyKind,
    /// Maxima JSON used by the maxima-weighted strategy
    #[arg(long)]
    pub maxima: Option<String>,
    /// Purity percentage applied by the maxima-weighted strategy
    #[arg(long, default_value_t = FULL_PURITY)]
    pub purity: f64,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::Additive,
            maxima: None,
            purity: FULL_PURITY,
        }
    }
}

impl ScoringParams {
    pub fn build_strategy(&self) -> GfResult<ScoringStrategy> {
        match self.strategy {
            StrategyKind::Additive => Ok(ScoringStrategy::Additive),
            StrategyKind::MaximaWeighted => {
                let path = self.maxima.as_ref().ok_or_else(|| {
                    GearForgeError::Config(
                        "--maxima is required for the maxima-weighted strategy".to_string(),
                    )
                })?;
                if !self.purity.is_finite() {
                    return Err(GearForgeError::Config(format!(
                        "invalid purity {}",
                        self.purity
                    )));
                }
                info!("⚖️  Loading maxima from: {}", path);
                let maxima = MaximaTable::load_from_file(path)?;
                Ok(ScoringStrategy::MaximaWeighted {
                    maxima,
                    purity: self.purity.clamp(0.0, FULL_PURITY),
                })
            }
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SideSelection {
    #[default]
    Commander,
    Castellan,
    Both,
}

impl SideSelection {
    pub fn sides(self) -> Vec<Side> {
        match self {
            Self::Commander => vec![Side::Commander],
            Self::Castellan => vec![Side::Castellan],
            Self::Both => vec![Side::Commander, Side::Castellan],
        }
    }
}

impl From<Side> for SideSelection {
    fn from(side: Side) -> Self {
        match side {
            Side::Commander => Self::Commander,
            Side::Castellan => Self::Castellan,
        }
    }
}

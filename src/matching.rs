use crate::error::{GearForgeError, GfResult};
use crate::util::normalize_whitespace;
use serde::{Deserialize, Serialize};

/// Free-text tokens must be longer than this to become phrases.
pub const MIN_TOKEN_LEN: usize = 2;

/// What a set of effects is matched against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum MatchCriteria {
    /// Curated keyword list, usually a preset (`label` is the preset mode).
    Keywords { label: String, phrases: Vec<String> },
    /// A single target string typed by the user.
    #[serde(rename_all = "camelCase")]
    FreeText { target_label: String },
}

impl MatchCriteria {
    pub fn keywords(label: impl Into<String>, phrases: Vec<String>) -> Self {
        Self::Keywords {
            label: label.into(),
            phrases,
        }
    }

    pub fn free_text(target: impl Into<String>) -> Self {
        Self::FreeText {
            target_label: target.into(),
        }
    }

    /// Short label used in reports and export file names.
    pub fn label(&self) -> &str {
        match self {
            Self::Keywords { label, .. } => label,
            Self::FreeText { target_label } => target_label,
        }
    }

    /// Builds the phrase set. `allow_unknown_in_target` controls whether a
    /// free-text target mentioning "unknown" makes unknown effects eligible.
    pub fn phrase_set(&self, allow_unknown_in_target: bool) -> GfResult<PhraseSet> {
        match self {
            Self::Keywords { label, phrases } => {
                let set = PhraseSet::from_keywords(phrases);
                if set.is_empty() {
                    return Err(GearForgeError::NoKeywordsConfigured(format!(
                        "mode '{}'",
                        label
                    )));
                }
                Ok(set)
            }
            Self::FreeText { target_label } => {
                let set = PhraseSet::from_target(target_label, allow_unknown_in_target);
                if set.is_empty() {
                    return Err(GearForgeError::NoKeywordsConfigured(
                        "an empty free-text target".to_string(),
                    ));
                }
                Ok(set)
            }
        }
    }
}

/// Normalized match phrases. Always lowercase, whitespace-collapsed and
/// non-empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhraseSet {
    pub phrases: Vec<String>,
    pub include_unknown: bool,
}

impl PhraseSet {
    pub fn from_keywords<S: AsRef<str>>(keywords: &[S]) -> Self {
        let phrases = keywords
            .iter()
            .map(|k| normalize_whitespace(k.as_ref()).to_lowercase())
            .filter(|p| !p.is_empty())
            .collect();
        Self {
            phrases,
            include_unknown: false,
        }
    }

    pub fn from_target(target: &str, allow_unknown_in_target: bool) -> Self {
        let normalized = normalize_whitespace(target).to_lowercase();
        let mut phrases: Vec<String> = normalized
            .split(' ')
            .filter(|t| t.chars().count() > MIN_TOKEN_LEN)
            .map(str::to_string)
            .collect();
        if phrases.is_empty() && !normalized.is_empty() {
            phrases.push(normalized.clone());
        }
        Self {
            phrases,
            include_unknown: allow_unknown_in_target && normalized.contains("unknown"),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// First phrase contained in `lowercase_name`.
    pub fn first_match(&self, lowercase_name: &str) -> Option<&str> {
        self.phrases
            .iter()
            .find(|p| lowercase_name.contains(p.as_str()))
            .map(String::as_str)
    }
}

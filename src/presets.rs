use crate::error::{GearForgeError, GfResult};
use crate::matching::MatchCriteria;
use crate::model::Side;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

const PVP: &[&str] = &[
    "melee",
    "range",
    "unit strength",
    "wall",
    "gate",
    "moat",
    "protection",
];

/// Keyword lists per side and mode.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetBook {
    sides: BTreeMap<Side, Vec<Preset>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub mode: String,
    pub keywords: Vec<String>,
}

impl Preset {
    fn new(mode: &str, keywords: &[&str]) -> Self {
        Self {
            mode: mode.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl Default for PresetBook {
    fn default() -> Self {
        let mut sides = BTreeMap::new();
        sides.insert(
            Side::Commander,
            vec![
                Preset::new("PVP", PVP),
                Preset::new("Nomad", &["nomad"]),
                Preset::new("Beri", &["berimond", "beri"]),
                Preset::new("Samurai", &["samurai"]),
            ],
        );
        sides.insert(
            Side::Castellan,
            vec![Preset::new("PVP", PVP), Preset::new("NPC", &["npc"])],
        );
        Self { sides }
    }
}

impl PresetBook {
    /// Reads `{ "Commander": { "PVP": [...] }, ... }`. Modes from a file are
    /// kept in alphabetical order.
    pub fn from_json(json: &str) -> GfResult<Self> {
        let raw: BTreeMap<Side, serde_json::Map<String, serde_json::Value>> =
            serde_json::from_str(json)?;
        let mut sides = BTreeMap::new();
        for (side, modes) in raw {
            let mut presets = Vec::with_capacity(modes.len());
            for (mode, keywords) in modes {
                let keywords: Vec<String> = serde_json::from_value(keywords)?;
                presets.push(Preset { mode, keywords });
            }
            sides.insert(side, presets);
        }
        Ok(Self { sides })
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> GfResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn modes(&self, side: Side) -> &[Preset] {
        self.sides.get(&side).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Side, &Preset)> {
        self.sides
            .iter()
            .flat_map(|(side, presets)| presets.iter().map(move |p| (*side, p)))
    }

    /// Case-insensitive mode lookup.
    pub fn find(&self, side: Side, mode: &str) -> Option<&Preset> {
        self.modes(side)
            .iter()
            .find(|p| p.mode.eq_ignore_ascii_case(mode.trim()))
    }

    /// Keyword criteria for `side`/`mode`. Unknown modes and empty keyword
    /// lists are configuration errors.
    pub fn criteria(&self, side: Side, mode: &str) -> GfResult<MatchCriteria> {
        let preset = self
            .find(side, mode)
            .filter(|p| p.keywords.iter().any(|k| !k.trim().is_empty()))
            .ok_or_else(|| {
                GearForgeError::NoKeywordsConfigured(format!("{} / {}", side, mode))
            })?;
        Ok(MatchCriteria::keywords(
            preset.mode.clone(),
            preset.keywords.clone(),
        ))
    }
}

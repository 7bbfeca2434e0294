use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt::Display;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Equipment slot an item occupies. Declaration order is the fixed slot order
/// used everywhere results are built or printed.
///
/// Item labels parse case-sensitively (`"Weapon"`); the CLI accepts any case.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
    ValueEnum,
)]
pub enum SlotCategory {
    Armor,
    Weapon,
    Helmet,
    Artifact,
    Looks,
    Hero,
}

pub const SLOT_COUNT: usize = 6;

impl SlotCategory {
    /// Type code used by the inventory export.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Armor),
            2 => Some(Self::Weapon),
            3 => Some(Self::Helmet),
            4 => Some(Self::Artifact),
            5 => Some(Self::Looks),
            6 => Some(Self::Hero),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn all() -> impl Iterator<Item = SlotCategory> {
        SlotCategory::iter()
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
    ValueEnum,
)]
pub enum Side {
    Commander,
    Castellan,
}

impl Side {
    /// Side code used by the inventory export.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Castellan),
            2 => Some(Self::Commander),
            _ => None,
        }
    }
}

pub const UNKNOWN_EFFECT_PREFIX: &str = "Unknown effect";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    pub name: String,
    pub value: f64,
    /// Code exactly as found in the export, fractional ones included.
    pub code: Number,
}

impl Effect {
    pub fn new(name: impl Into<String>, value: f64, code: i64) -> Self {
        Self {
            name: name.into(),
            value,
            code: code.into(),
        }
    }

    pub fn unknown(code: i64, value: f64) -> Self {
        Self::new(unknown_effect_name(code), value, code)
    }

    pub fn is_unknown(&self) -> bool {
        self.name
            .to_lowercase()
            .starts_with(&UNKNOWN_EFFECT_PREFIX.to_lowercase())
    }
}

pub fn unknown_effect_name(code: impl Display) -> String {
    format!("{} ({})", UNKNOWN_EFFECT_PREFIX, code)
}

/// A normalized inventory item. The export's internal identifier is never
/// part of this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Slot category name, or an "Unknown type (N)" placeholder.
    pub slot: String,
    /// Side name, or an "Unknown side (N)" placeholder.
    pub side: String,
    pub effects: Vec<Effect>,
}

impl Item {
    pub fn new(slot: SlotCategory, side: Side, effects: Vec<Effect>) -> Self {
        Self {
            slot: slot.to_string(),
            side: side.to_string(),
            effects,
        }
    }

    pub fn slot_category(&self) -> Option<SlotCategory> {
        self.slot.parse().ok()
    }

    pub fn faction(&self) -> Option<Side> {
        self.side.parse().ok()
    }

    pub fn is_side(&self, side: Side) -> bool {
        self.faction() == Some(side)
    }
}

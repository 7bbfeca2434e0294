use crate::effects::EffectCatalog;
use crate::error::{GearForgeError, GfResult};
use crate::model::{unknown_effect_name, Effect, Item, Side, SlotCategory};
use crate::util::safe_number;
use serde_json::{Number, Value};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

// Row layout of the export. Index 0 is the internal item id and is never read.
const ROW_TYPE: usize = 1;
const ROW_SIDE: usize = 2;
const ROW_EFFECTS: usize = 5;

#[derive(Debug, Clone, Default)]
pub struct InventoryLoad {
    pub items: Vec<Item>,
    pub unknown_effects: usize,
    pub raw_rows: usize,
}

pub fn parse_inventory(json: &str, catalog: &EffectCatalog) -> GfResult<InventoryLoad> {
    let value: Value = serde_json::from_str(json)?;
    normalize_inventory(&value, catalog)
}

pub fn load_inventory<P: AsRef<Path>>(path: P, catalog: &EffectCatalog) -> GfResult<InventoryLoad> {
    let content = fs::read_to_string(&path)?;
    let load = parse_inventory(&content, catalog)?;
    info!(
        "Loaded {} items (raw rows: {}). Unknown effects encountered: {}.",
        load.items.len(),
        load.raw_rows,
        load.unknown_effects
    );
    Ok(load)
}

/// Converts the raw export (`{"I": [[id, type, side, _, _, effects, ...], ...]}`)
/// into normalized items.
pub fn normalize_inventory(json: &Value, catalog: &EffectCatalog) -> GfResult<InventoryLoad> {
    let raw = json
        .get("I")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            GearForgeError::InvalidInventory(
                "expected top-level key \"I\" as an array".to_string(),
            )
        })?;

    let mut items = Vec::with_capacity(raw.len());
    let mut unknown_effects = 0;

    for row in raw {
        let Some(row) = row.as_array() else {
            continue;
        };

        let type_id = row.get(ROW_TYPE).map(safe_number).unwrap_or(0.0);
        let side_id = row.get(ROW_SIDE).map(safe_number).unwrap_or(0.0);

        let slot = match exact_code(type_id).and_then(SlotCategory::from_code) {
            Some(s) => s.to_string(),
            None => format!("Unknown type ({})", code_label(type_id)),
        };
        let side = match exact_code(side_id).and_then(Side::from_code) {
            Some(s) => s.to_string(),
            None => format!("Unknown side ({})", code_label(side_id)),
        };

        let mut effects = Vec::new();
        if let Some(entries) = row.get(ROW_EFFECTS).and_then(Value::as_array) {
            for entry in entries {
                let Some(entry) = entry.as_array() else {
                    continue;
                };
                if entry.is_empty() {
                    continue;
                }
                let raw_code = safe_number(&entry[0]);
                let value = match entry.get(2) {
                    Some(Value::Array(vals)) => vals.first().map(safe_number).unwrap_or(0.0),
                    Some(v) => safe_number(v),
                    None => 0.0,
                };

                let (name, code) = match exact_code(raw_code) {
                    Some(code) if catalog.is_known(code) => (catalog.name_for(code), Number::from(code)),
                    exact => {
                        unknown_effects += 1;
                        let code = match exact {
                            Some(code) => Number::from(code),
                            None => Number::from_f64(raw_code).unwrap_or_else(|| Number::from(0)),
                        };
                        (unknown_effect_name(&code), code)
                    }
                };
                effects.push(Effect { name, value, code });
            }
        }

        items.push(Item {
            slot,
            side,
            effects,
        });
    }

    debug!("Normalized {} of {} inventory rows", items.len(), raw.len());

    Ok(InventoryLoad {
        items,
        unknown_effects,
        raw_rows: raw.len(),
    })
}

/// Integer code for lookups. Fractional or out-of-range numbers have none.
fn exact_code(n: f64) -> Option<i64> {
    if n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 {
        Some(n as i64)
    } else {
        None
    }
}

fn code_label(n: f64) -> String {
    if n == 0.0 {
        "?".to_string()
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_row_is_normalized() {
        let json = r#"{"I": [[489950016, 2, 1, 5, -1, [[10005, 72, [85.6]], [99999, 1, [12.3]]], -1, -1, 0, -1]]}"#;
        let load = parse_inventory(json, &EffectCatalog::new_with_defaults()).unwrap();
        assert_eq!(load.raw_rows, 1);
        assert_eq!(load.unknown_effects, 1);

        let item = &load.items[0];
        assert_eq!(item.slot, "Weapon");
        assert_eq!(item.side, "Castellan");
        assert_eq!(item.effects[0], Effect::new("wall protection", 85.6, 10005));
        assert_eq!(item.effects[1].name, "Unknown effect (99999)");
    }

    #[test]
    fn fractional_codes_are_never_truncated() {
        let json = r#"{"I": [[1, 2.5, 2, 0, -1, [[108.7, 0, [10]]], -1], [2, 2, 1.5, 0, -1, [[108, 0, [4]]]]]}"#;
        let load = parse_inventory(json, &EffectCatalog::new_with_defaults()).unwrap();
        assert_eq!(load.unknown_effects, 1);

        let item = &load.items[0];
        assert_eq!(item.slot, "Unknown type (2.5)");
        assert_eq!(item.slot_category(), None);
        assert_eq!(item.effects[0].name, "Unknown effect (108.7)");
        assert_eq!(item.effects[0].code.as_f64(), Some(108.7));
        assert!(item.effects[0].is_unknown());

        let item = &load.items[1];
        assert_eq!(item.side, "Unknown side (1.5)");
        assert_eq!(item.effects[0].code.as_i64(), Some(108));
    }

    #[test]
    fn missing_top_level_array_is_rejected() {
        let err = parse_inventory(r#"{"items": []}"#, &EffectCatalog::default()).unwrap_err();
        assert!(matches!(err, GearForgeError::InvalidInventory(_)));
    }
}

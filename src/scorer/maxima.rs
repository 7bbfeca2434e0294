use crate::error::{GearForgeError, GfResult};
use crate::util::normalize_whitespace;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Upper bound and weight for one effect attribute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttributeMax {
    pub max: f64,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

impl AttributeMax {
    /// Clamps `value` into `[0, max]` and applies the weight.
    pub fn clamp_and_score(&self, value: f64) -> f64 {
        let max = self.max.max(0.0);
        value.clamp(0.0, max) * self.weight
    }
}

/// Per-attribute maxima, keyed by lowercase effect name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaximaTable {
    entries: HashMap<String, AttributeMax>,
    keys: Vec<String>,
}

impl MaximaTable {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> GfResult<Self> {
        let content = fs::read_to_string(&path)?;
        let value: Value = serde_json::from_str(&content)?;
        let table = Self::from_json(&value)?;
        info!(
            "Loaded {} maxima entries from {:?}",
            table.len(),
            path.as_ref()
        );
        Ok(table)
    }

    /// Reads `name -> max` or `name -> {max, weight}` entries from the top
    /// level and from nested `max` / `maxima` objects.
    pub fn from_json(value: &Value) -> GfResult<Self> {
        let root = value.as_object().ok_or_else(|| {
            GearForgeError::Config("maxima JSON must be an object".to_string())
        })?;

        let mut table = Self::default();
        table.keys = detected_keys(value);
        table.read_object(root);
        for nested in ["max", "maxima"] {
            if let Some(obj) = root.get(nested).and_then(Value::as_object) {
                table.read_object(obj);
            }
        }
        Ok(table)
    }

    fn read_object(&mut self, obj: &Map<String, Value>) {
        for (name, raw) in obj {
            let entry = match raw {
                Value::Number(n) => n.as_f64().map(|max| AttributeMax { max, weight: 1.0 }),
                Value::Object(_) => serde_json::from_value::<AttributeMax>(raw.clone()).ok(),
                _ => None,
            };
            match entry {
                Some(e) if e.max.is_finite() && e.weight.is_finite() => self.insert(name, e),
                _ => debug!("Ignoring non-numeric maxima entry '{}'", name),
            }
        }
    }

    pub fn insert(&mut self, name: &str, entry: AttributeMax) {
        self.entries.insert(attribute_key(name), entry);
    }

    pub fn get(&self, effect_name: &str) -> Option<&AttributeMax> {
        self.entries.get(&attribute_key(effect_name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys found in the source JSON, sorted, for debugging a maxima file.
    pub fn detected_keys(&self) -> &[String] {
        &self.keys
    }
}

fn attribute_key(name: &str) -> String {
    normalize_whitespace(name).to_lowercase()
}

fn detected_keys(value: &Value) -> Vec<String> {
    let mut keys = BTreeSet::new();
    match value {
        Value::Object(root) => {
            keys.extend(root.keys().cloned());
            for nested in ["max", "maxima"] {
                if let Some(obj) = root.get(nested).and_then(Value::as_object) {
                    keys.extend(obj.keys().map(|k| format!("{}.{}", nested, k)));
                }
            }
        }
        Value::Array(arr) => {
            keys.extend((0..arr.len().min(200)).map(|i| format!("idx:{}", i)));
        }
        _ => {}
    }
    keys.into_iter().collect()
}

/// Human readable summary of a maxima JSON document.
pub fn key_summary(value: &Value) -> String {
    let kind = match value {
        Value::Array(_) => "array",
        Value::Object(_) => "object",
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
    };

    let mut lines = vec!["maxima.json summary:".to_string(), format!("type: {}", kind)];
    if let Value::Object(root) = value {
        let top: Vec<&str> = root.keys().map(String::as_str).collect();
        let more = if top.len() > 200 { " …" } else { "" };
        lines.push(format!(
            "top-level keys: {}{}",
            top.iter().take(200).copied().collect::<Vec<_>>().join(", "),
            more
        ));
    }
    lines.push(String::new());
    lines.push("Detected keys (debug):".to_string());
    lines.push(detected_keys(value).join("\n"));
    lines.join("\n")
}

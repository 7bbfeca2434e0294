use crate::error::GfResult;
use crate::model::unknown_effect_name;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Effect code to display name lookup.
#[derive(Debug, Clone, Default)]
pub struct EffectCatalog {
    names: HashMap<i64, String>,
}

impl EffectCatalog {
    pub fn new_with_defaults() -> Self {
        let defaults = [
            (10005, "wall protection"),
            (10006, "gate protection"),
            (10109, "melee unit strength when attacking"),
            (10111, "range unit strength when attacking"),
            (110, "wall protection"),
            (111, "gate protection"),
            (112, "moat protection"),
            (108, "melee unit strength when attacking"),
            (109, "range unit strength when attacking"),
        ];

        let mut catalog = Self::default();
        for (code, name) in defaults {
            catalog.insert(code, name);
        }
        catalog
    }

    pub fn insert(&mut self, code: i64, name: impl Into<String>) {
        self.names.insert(code, name.into());
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Resolved name, or the "Unknown effect (CODE)" placeholder.
    pub fn name_for(&self, code: i64) -> String {
        match self.names.get(&code) {
            Some(name) => name.clone(),
            None => unknown_effect_name(code),
        }
    }

    pub fn is_known(&self, code: i64) -> bool {
        self.names.contains_key(&code)
    }

    /// Reads `code,name` rows (with a header) on top of the current table.
    /// Rows that do not parse are skipped.
    pub fn extend_from_csv<R: Read>(&mut self, reader: R) -> GfResult<usize> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(true)
            .from_reader(reader);

        let mut loaded = 0;
        let mut skipped = 0;

        for (row_idx, result) in rdr.records().enumerate() {
            let rec = result?;
            if rec.len() < 2 {
                skipped += 1;
                continue;
            }
            let code: i64 = match rec[0].trim().parse() {
                Ok(c) => c,
                Err(_) => {
                    debug!("[Row {}] invalid effect code '{}'", row_idx + 1, &rec[0]);
                    skipped += 1;
                    continue;
                }
            };
            let name = rec[1].trim();
            if name.is_empty() {
                skipped += 1;
                continue;
            }
            self.insert(code, name);
            loaded += 1;
        }

        if skipped > 0 {
            debug!("Skipped {} invalid rows in effect catalog.", skipped);
        }
        Ok(loaded)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> GfResult<Self> {
        let file = File::open(path)?;
        let mut catalog = Self::new_with_defaults();
        catalog.extend_from_csv(file)?;
        Ok(catalog)
    }
}

use crate::error::GfResult;
use crate::optimizer::OptimizationResult;
use crate::util::safe_filename;
use serde::Serialize;
use serde_json::Number;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

pub const EXPORT_NOTE: &str = "No internal item IDs are included.";

/// Downloadable form of a result: the result itself plus a timestamp.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPayload<'a> {
    #[serde(flatten)]
    pub result: &'a OptimizationResult,
    pub generated_at: String,
    pub note: &'static str,
}

impl<'a> ExportPayload<'a> {
    pub fn new(result: &'a OptimizationResult) -> Self {
        Self {
            result,
            generated_at: chrono::Utc::now().to_rfc3339(),
            note: EXPORT_NOTE,
        }
    }
}

pub fn to_json_string(result: &OptimizationResult) -> GfResult<String> {
    Ok(serde_json::to_string_pretty(&ExportPayload::new(result))?)
}

pub fn file_stem(result: &OptimizationResult) -> String {
    format!(
        "gge_set_{}_{}",
        safe_filename(&result.side.to_string()),
        safe_filename(result.criteria.label())
    )
}

pub fn write_json<W: Write>(result: &OptimizationResult, writer: W) -> GfResult<()> {
    let mut writer = BufWriter::new(writer);
    serde_json::to_writer_pretty(&mut writer, &ExportPayload::new(result))?;
    writer.flush()?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    side: String,
    slot: String,
    missing: bool,
    slot_score: f64,
    effect: &'a str,
    value: Option<f64>,
    code: Option<&'a Number>,
    matched_by: &'a str,
}

/// One row per (slot, effect) of the chosen item; missing slots get a
/// single empty row.
pub fn write_csv<W: Write>(result: &OptimizationResult, writer: W) -> GfResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    let side = result.side.to_string();

    for slot in &result.slots {
        let Some(pick) = &slot.pick else {
            wtr.serialize(CsvRow {
                side: side.clone(),
                slot: slot.slot.to_string(),
                missing: true,
                slot_score: 0.0,
                effect: "",
                value: None,
                code: None,
                matched_by: "",
            })?;
            continue;
        };

        for effect in &pick.effects {
            let matched_by = pick
                .contributions
                .iter()
                .find(|c| c.effect_name == effect.name)
                .map(|c| c.matched_by.as_str())
                .unwrap_or("");
            wtr.serialize(CsvRow {
                side: side.clone(),
                slot: slot.slot.to_string(),
                missing: false,
                slot_score: pick.score,
                effect: &effect.name,
                value: Some(effect.value),
                code: Some(&effect.code),
                matched_by,
            })?;
        }
    }

    wtr.flush()?;
    Ok(())
}

/// Writes `<dir>/gge_set_<side>_<label>.json` (and `.csv` when asked) and
/// returns the written paths.
pub fn export_to_dir<P: AsRef<Path>>(
    result: &OptimizationResult,
    dir: P,
    with_csv: bool,
) -> GfResult<Vec<PathBuf>> {
    std::fs::create_dir_all(&dir)?;
    let stem = file_stem(result);
    let mut written = Vec::new();

    let json_path = dir.as_ref().join(format!("{}.json", stem));
    write_json(result, File::create(&json_path)?)?;
    info!("💾 Exported {}", json_path.display());
    written.push(json_path);

    if with_csv {
        let csv_path = dir.as_ref().join(format!("{}.csv", stem));
        write_csv(result, File::create(&csv_path)?)?;
        info!("💾 Exported {}", csv_path.display());
        written.push(csv_path);
    }

    Ok(written)
}

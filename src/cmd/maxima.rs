use clap::Args;
use gearforge::scorer::maxima::{key_summary, MaximaTable};
use gearforge::GfResult;
use serde_json::Value;
use std::fs;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct MaximaArgs {
    #[arg(short, long, default_value = "maxima.json")]
    pub maxima: String,
}

pub fn run(args: MaximaArgs) -> GfResult<()> {
    let content = fs::read_to_string(&args.maxima)?;
    let value: Value = serde_json::from_str(&content)?;

    println!("{}", key_summary(&value));

    match MaximaTable::from_json(&value) {
        Ok(table) => info!("{} usable maxima entries", table.len()),
        Err(e) => info!("Not usable for weighted scoring: {}", e),
    }
    Ok(())
}

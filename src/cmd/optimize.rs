use crate::reports;
use crate::Context;
use clap::Args;
use gearforge::api::{OptimizationRequest, Session};
use gearforge::config::{Config, SideSelection};
use gearforge::export;
use gearforge::matching::MatchCriteria;
use gearforge::optimizer::OptimizationOptions;
use gearforge::GfResult;
use std::fs;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct OptimizeArgs {
    /// Inventory export (JSON with a top-level "I" array)
    #[arg(short, long)]
    pub inventory: String,

    #[arg(short, long, value_enum, default_value_t = SideSelection::Commander)]
    pub side: SideSelection,

    /// Preset mode, e.g. PVP, Nomad, NPC
    #[arg(short, long, default_value = "PVP")]
    pub mode: String,

    /// Free-text target; replaces the preset keywords
    #[arg(short, long)]
    pub target: Option<String>,

    #[command(flatten)]
    pub config: Config,

    /// Directory to write the JSON result(s) into
    #[arg(short, long)]
    pub export: Option<String>,

    /// Also write a CSV breakdown next to the JSON export
    #[arg(long, default_value_t = false)]
    pub csv: bool,
}

pub fn run(args: OptimizeArgs, ctx: &Context) -> GfResult<()> {
    let strategy = args.config.scoring.build_strategy()?;
    let options = OptimizationOptions::from(&args.config.search);

    // Presets are per side, so keyword mode builds one request per side.
    let requests = match &args.target {
        Some(target) => vec![OptimizationRequest {
            sides: args.side,
            criteria: MatchCriteria::free_text(target.clone()),
            strategy,
            options,
        }],
        None => args
            .side
            .sides()
            .into_iter()
            .map(|side| -> GfResult<OptimizationRequest> {
                Ok(OptimizationRequest {
                    sides: side.into(),
                    criteria: ctx.presets.criteria(side, &args.mode)?,
                    strategy: strategy.clone(),
                    options: options.clone(),
                })
            })
            .collect::<GfResult<Vec<_>>>()?,
    };

    info!("📂 Loading inventory: {}", args.inventory);
    let content = fs::read_to_string(&args.inventory)?;
    let mut session = Session::new();
    session.load_inventory(&content, &ctx.catalog)?;
    reports::print_stats(&session.stats());

    let results = session.compute_all(&requests)?;
    for result in results {
        reports::print_result(result);
        if let Some(dir) = &args.export {
            export::export_to_dir(result, dir, args.csv)?;
        }
    }

    Ok(())
}

use clap::{Parser, Subcommand};
use gearforge::effects::EffectCatalog;
use gearforge::presets::PresetBook;
use gearforge::GfResult;
use std::process;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// CSV of `code,name` rows added to the built-in effect names
    #[arg(global = true, long)]
    effects: Option<String>,

    /// JSON preset book replacing the built-in presets
    #[arg(global = true, long)]
    presets: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the best item set for a side
    Optimize(cmd::optimize::OptimizeArgs),
    /// List and filter inventory items
    List(cmd::list::ListArgs),
    /// Show the configured presets
    Presets,
    /// Summarize the keys of a maxima file
    Maxima(cmd::maxima::MaximaArgs),
}

pub struct Context {
    pub catalog: EffectCatalog,
    pub presets: PresetBook,
}

fn load_context(cli: &Cli) -> GfResult<Context> {
    let catalog = match &cli.effects {
        Some(path) => {
            info!("📂 Loading effect names: {}", path);
            EffectCatalog::load_from_file(path)?
        }
        None => EffectCatalog::new_with_defaults(),
    };

    let presets = match &cli.presets {
        Some(path) => {
            info!("📂 Loading presets: {}", path);
            PresetBook::load_from_file(path)?
        }
        None => PresetBook::default(),
    };

    if catalog.is_empty() {
        warn!("⚠️  Effect catalog is empty; every effect will be unknown.");
    }

    Ok(Context { catalog, presets })
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_target(false)
        .init();

    let ctx = load_context(&cli).unwrap_or_else(|e| {
        error!("❌ {}", e);
        process::exit(1);
    });

    let outcome = match cli.command {
        Commands::Optimize(args) => cmd::optimize::run(args, &ctx),
        Commands::List(args) => cmd::list::run(args, &ctx),
        Commands::Presets => {
            reports::print_presets(&ctx.presets);
            Ok(())
        }
        Commands::Maxima(args) => cmd::maxima::run(args),
    };

    if let Err(e) = outcome {
        error!("❌ {}", e);
        process::exit(1);
    }
}

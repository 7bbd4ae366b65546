//! Mixmax - Command Line Interface
//!
//! This is the main entry point for the mix optimization tool.
//! Run with `--help` to see all available options.

use clap::Parser;
use serde::Serialize;
use std::error::Error;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

use mixmax::{
    data::load_catalog,
    display::{display_catalog, display_depth_progress, display_no_result, display_outcome},
    models::{OptimizeFor, SearchParams},
    optimizer::find_best_sequence,
    rules::addiction,
    MixError,
};

/// Command-line arguments for Mixmax.
#[derive(Parser, Debug)]
#[command(name = "mixmax")]
#[command(author, version, about = "Find the best mixing sequence for a base product", long_about = None)]
struct Args {
    /// Path to the ingredient catalog CSV
    #[arg(long, default_value = "data/ingredients.csv")]
    data: PathBuf,

    /// Base product to mix on (Weed, Meth or Cocaine)
    #[arg(short, long, default_value = "Meth")]
    base: String,

    /// Optimization target (profit or cost)
    #[arg(short, long, default_value = "profit")]
    optimize: String,

    /// Minimum number of mixing steps
    #[arg(long, default_value = "1")]
    min_steps: usize,

    /// Maximum number of mixing steps
    #[arg(long, default_value = "5")]
    max_steps: usize,

    /// Total search timeout in seconds, shared across all depths
    #[arg(short, long, default_value = "30.0")]
    timeout: f64,

    /// Restrict the search to these ingredients (comma-separated)
    #[arg(long, value_delimiter = ',')]
    ingredients: Vec<String>,

    /// Steer the search toward these effects (comma-separated)
    #[arg(long, value_delimiter = ',')]
    effects: Vec<String>,

    /// Emit the result as JSON instead of the text report
    #[arg(long, default_value = "false")]
    json: bool,

    /// Print the loaded catalog and exit
    #[arg(long, default_value = "false")]
    list: bool,
}

/// Machine-readable result payload for `--json`.
#[derive(Serialize)]
struct JsonReport<'a> {
    found: bool,
    base: &'a str,
    sequence: &'a [String],
    effects: &'a [String],
    cost: f64,
    profit: f64,
    addiction: u32,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let catalog = load_catalog(&args.data)?;

    if args.list {
        display_catalog(&catalog);
        return Ok(());
    }

    let optimize_for: OptimizeFor = args.optimize.parse()?;
    if !args.timeout.is_finite() || args.timeout <= 0.0 {
        return Err(MixError::InvalidConfiguration(format!(
            "timeout must be positive, got {}",
            args.timeout
        ))
        .into());
    }

    let params = SearchParams {
        optimize_for,
        base: args.base.clone(),
        min_steps: args.min_steps,
        max_steps: args.max_steps,
        allowed_ingredients: args.ingredients.clone(),
        desired_effects: args.effects.clone(),
        timeout: Duration::from_secs_f64(args.timeout),
    };

    if !args.json {
        println!("Mixmax - Mix Optimizer");
        println!("================================================================");
        println!();
        println!("Configuration:");
        println!("  Base:       {}", args.base);
        println!("  Optimize:   {}", args.optimize);
        println!("  Steps:      {} to {}", args.min_steps, args.max_steps);
        println!("  Timeout:    {:.1}s", args.timeout);
        if !args.ingredients.is_empty() {
            println!("  Allowed:    {}", args.ingredients.join(", "));
        }
        if !args.effects.is_empty() {
            println!("  Desired:    {}", args.effects.join(", "));
        }
        println!();
        println!("Loaded {} ingredients.", catalog.ingredient_count());
        println!();
    }

    let cancel = AtomicBool::new(false);
    let mut depth_times: Vec<(usize, Duration)> = Vec::new();

    let json_mode = args.json;
    let best = find_best_sequence(&catalog, &params, &cancel, |report| {
        if !json_mode {
            display_depth_progress(&report);
        }
        depth_times.push((report.depth, report.elapsed));
    })?;

    let best_addiction = addiction(&catalog, &best.sequence);

    if args.json {
        let report = JsonReport {
            found: !best.is_none(),
            base: &args.base,
            sequence: &best.sequence,
            effects: &best.effects,
            cost: best.cost,
            profit: if best.is_none() { 0.0 } else { best.profit },
            addiction: best_addiction,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if !depth_times.is_empty() {
        println!();
        println!("Timing per depth:");
        for (depth, elapsed) in &depth_times {
            println!("  Depth {}: {:.3}s", depth, elapsed.as_secs_f64());
        }
    }

    if best.is_none() {
        display_no_result();
    } else {
        display_outcome(&catalog, &best, &args.base, best_addiction);
    }

    Ok(())
}

//! Project every scenario of a CSV file in parallel
//!
//! Outputs one row per scenario with the coerced inputs, final value and profit

use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use finance_edu::projection::{load_scenarios, project_batch, write_outcomes};
use finance_edu::PlatformConfig;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scenario CSV (name,initial_amount,months,periodic_rate_percent,monthly_contribution)
    input: PathBuf,

    /// Where to write the results
    #[arg(long, default_value = "scenario_projection_output.csv")]
    output: PathBuf,

    /// Optional JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = PlatformConfig::load_or_default(args.config.as_deref())
        .context("Failed to load configuration")?;

    let start = Instant::now();
    println!("Loading scenarios from {}...", args.input.display());
    let scenarios = load_scenarios(&args.input)
        .with_context(|| format!("Failed to load {}", args.input.display()))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    println!("Running projections...");
    let proj_start = Instant::now();
    let outcomes = project_batch(&scenarios, &config.projection);
    println!("Projections complete in {:?}", proj_start.elapsed());

    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    write_outcomes(file, &outcomes)?;

    let total_final: f64 = outcomes.iter().map(|o| o.result.final_value).sum();
    let total_profit: f64 = outcomes.iter().map(|o| o.result.total_profit).sum();

    println!("\n=== Summary ===");
    println!("Scenarios: {}", outcomes.len());
    println!("Total final value: {:.2}", total_final);
    println!("Total profit: {:.2}", total_profit);
    if let Some(best) = outcomes
        .iter()
        .max_by(|a, b| a.result.total_profit.total_cmp(&b.result.total_profit))
    {
        println!("Best scenario: {} ({:.2})", best.name, best.result.total_profit);
    }
    println!("\nOutput written to: {}", args.output.display());
    println!("Total time: {:?}", start.elapsed());

    Ok(())
}

//! Run one investment simulation from the command line
//!
//! Fields are passed as raw text and coerced exactly like the simulator form:
//! anything missing or unreadable falls back to the configured defaults.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use finance_edu::dates::format_br;
use finance_edu::projection::{schedule_iter, ProjectionForm};
use finance_edu::simulator::{format_brl, recent_history, InvestmentType, Simulator, SimulatorForm};
use finance_edu::{MockStore, PlatformConfig};

/// Rows printed by `--schedule` before the table is cut short
const MAX_SCHEDULE_ROWS: u32 = 600;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Initial amount (R$)
    #[arg(long, allow_hyphen_values = true)]
    initial_amount: Option<String>,

    /// Horizon in months
    #[arg(long, allow_hyphen_values = true)]
    months: Option<String>,

    /// Monthly rate in percent
    #[arg(long, allow_hyphen_values = true)]
    rate: Option<String>,

    /// Monthly contribution (R$)
    #[arg(long, allow_hyphen_values = true)]
    contribution: Option<String>,

    /// renda-fixa, acoes or fundos-imobiliarios
    #[arg(long)]
    investment_type: Option<String>,

    /// Print the month-by-month table
    #[arg(long)]
    schedule: bool,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,

    /// Optional JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = PlatformConfig::load_or_default(args.config.as_deref())
        .context("Failed to load configuration")?;

    let investment_type = match args.investment_type.as_deref() {
        Some(id) => match InvestmentType::from_id(id) {
            Some(kind) => Some(kind),
            None => bail!("Unknown investment type '{}'", id),
        },
        None => None,
    };

    let form = SimulatorForm {
        investment_type,
        fields: ProjectionForm::new(
            args.initial_amount.as_deref(),
            args.months.as_deref(),
            args.rate.as_deref(),
            args.contribution.as_deref(),
        ),
    };

    let mut store = MockStore::seeded();
    let simulator = Simulator::new(&config);
    let today = chrono::Local::now().date_naive();
    let summary = simulator.simulate(&form, &mut store.simulations, today)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("=== Resultado da Simulação ===");
    for (label, value) in summary.lines() {
        println!("{:<22} {}", label, value);
    }

    if args.schedule {
        println!();
        println!("{:>5} | {:>16} | {:>14} | {:>16} | {:>14}", "Mês", "Rendimento", "Aportes", "Total", "Lucro");
        for row in schedule_iter(&summary.input).take(MAX_SCHEDULE_ROWS as usize) {
            println!(
                "{:>5} | {:>16} | {:>14} | {:>16} | {:>14}",
                row.month,
                format_brl(row.growth_value),
                format_brl(row.contributed),
                format_brl(row.total_value),
                format_brl(row.profit)
            );
        }
        if summary.input.months > MAX_SCHEDULE_ROWS {
            println!(
                "... {} meses omitidos (mostrando os primeiros {})",
                summary.input.months - MAX_SCHEDULE_ROWS,
                MAX_SCHEDULE_ROWS
            );
        }
    }

    println!();
    println!("=== Histórico de Simulações ===");
    for record in recent_history(&store.simulations, config.history_limit) {
        println!(
            "{}  {:<20} {:>14} -> {:>14}",
            format_br(record.date),
            record.investment_type.label(),
            format_brl(record.initial_amount),
            format_brl(record.final_value)
        );
    }

    Ok(())
}

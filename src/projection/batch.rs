//! Batch projections over scenario files
//!
//! A scenario file is a CSV with the header
//! `name,initial_amount,months,periodic_rate_percent,monthly_contribution`.
//! Numeric columns are read as raw text and coerced like the simulator form,
//! so blank or malformed cells fall back to the defaults.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::{compute, ProjectionDefaults, ProjectionForm, ProjectionInput, ProjectionResult};
use crate::error::Result;

/// One row of a scenario file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub initial_amount: Option<String>,
    #[serde(default)]
    pub months: Option<String>,
    #[serde(default)]
    pub periodic_rate_percent: Option<String>,
    #[serde(default)]
    pub monthly_contribution: Option<String>,
}

impl Scenario {
    pub fn form(&self) -> ProjectionForm {
        ProjectionForm {
            initial_amount: self.initial_amount.clone(),
            months: self.months.clone(),
            periodic_rate_percent: self.periodic_rate_percent.clone(),
            monthly_contribution: self.monthly_contribution.clone(),
        }
    }
}

/// Coerced inputs and result for one scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioOutcome {
    pub name: String,
    pub input: ProjectionInput,
    pub result: ProjectionResult,
}

/// Project every scenario in parallel. Output order matches input order.
pub fn project_batch(scenarios: &[Scenario], defaults: &ProjectionDefaults) -> Vec<ScenarioOutcome> {
    scenarios
        .par_iter()
        .map(|scenario| {
            let input = scenario.form().to_input(defaults);
            ScenarioOutcome {
                name: scenario.name.clone(),
                input,
                result: compute(&input),
            }
        })
        .collect()
}

/// Load scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>> {
    let file = File::open(path)?;
    load_scenarios_from_reader(file)
}

/// Load scenarios from any reader
pub fn load_scenarios_from_reader<R: Read>(reader: R) -> Result<Vec<Scenario>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(reader);

    let mut scenarios = Vec::new();
    for record in rdr.deserialize() {
        let scenario: Scenario = record?;
        scenarios.push(scenario);
    }

    log::info!("Loaded {} scenarios", scenarios.len());
    Ok(scenarios)
}

/// Write outcomes as CSV with two-decimal monetary columns
pub fn write_outcomes<W: Write>(writer: W, outcomes: &[ScenarioOutcome]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record([
        "name",
        "initial_amount",
        "months",
        "periodic_rate_percent",
        "monthly_contribution",
        "final_value",
        "total_profit",
    ])?;

    for outcome in outcomes {
        wtr.write_record([
            outcome.name.clone(),
            format!("{:.2}", outcome.input.initial_amount),
            outcome.input.months.to_string(),
            format!("{}", outcome.input.periodic_rate_percent),
            format!("{:.2}", outcome.input.monthly_contribution),
            format!("{:.2}", outcome.result.final_value),
            format!("{:.2}", outcome.result.total_profit),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIOS: &str = "\
name,initial_amount,months,periodic_rate_percent,monthly_contribution
padrao,1000,12,0.8,200
sem_prazo,1000,0,5,500
so_aportes,0,10,0,100
em_branco,,,,
";

    #[test]
    fn test_load_and_project() {
        let scenarios = load_scenarios_from_reader(SCENARIOS.as_bytes()).expect("valid csv");
        assert_eq!(scenarios.len(), 4);
        assert_eq!(scenarios[3].initial_amount, None);

        let outcomes = project_batch(&scenarios, &ProjectionDefaults::default());
        let names: Vec<&str> = outcomes.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["padrao", "sem_prazo", "so_aportes", "em_branco"]);

        assert!((outcomes[0].result.final_value - 3500.34).abs() < 0.01);
        assert_eq!(outcomes[1].result.final_value, 1000.0);
        assert_eq!(outcomes[2].result.total_profit, 0.0);

        // Blank row behaves exactly like the default scenario
        assert_eq!(outcomes[3].input, ProjectionInput::default());
        assert_eq!(outcomes[3].result, outcomes[0].result);
    }

    #[test]
    fn test_write_outcomes() {
        let scenarios = load_scenarios_from_reader(SCENARIOS.as_bytes()).expect("valid csv");
        let outcomes = project_batch(&scenarios[..1], &ProjectionDefaults::default());

        let mut buf = Vec::new();
        write_outcomes(&mut buf, &outcomes).expect("write to memory");
        let text = String::from_utf8(buf).expect("utf8 output");
        let mut lines = text.lines();

        assert_eq!(
            lines.next(),
            Some("name,initial_amount,months,periodic_rate_percent,monthly_contribution,final_value,total_profit")
        );
        assert_eq!(lines.next(), Some("padrao,1000.00,12,0.8,200.00,3500.34,100.34"));
        assert_eq!(lines.next(), None);
    }
}

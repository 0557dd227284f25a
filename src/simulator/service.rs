//! Simulator runs and the simulation history

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{format_brl, InvestmentType};
use crate::config::PlatformConfig;
use crate::dates::ymd;
use crate::error::Result;
use crate::projection::{compute, ProjectionDefaults, ProjectionForm, ProjectionInput, ProjectionResult};
use crate::store::{Record, Repository};

/// Simulator screen state: the chosen investment plus the four raw fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulatorForm {
    #[serde(default, alias = "investmentType")]
    pub investment_type: Option<InvestmentType>,
    #[serde(flatten)]
    pub fields: ProjectionForm,
}

impl SimulatorForm {
    /// The "Simular" button is enabled once an investment is chosen and the
    /// initial amount, months and rate are filled. The contribution is optional.
    pub fn can_submit(&self) -> bool {
        self.investment_type.is_some()
            && ProjectionForm::is_filled(&self.fields.initial_amount)
            && ProjectionForm::is_filled(&self.fields.months)
            && ProjectionForm::is_filled(&self.fields.periodic_rate_percent)
    }
}

/// Everything the results screen shows for one run
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationSummary {
    pub investment_type: InvestmentType,
    pub input: ProjectionInput,
    pub result: ProjectionResult,
}

impl SimulationSummary {
    /// Labelled, formatted rows of the summary card
    pub fn lines(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Tipo de Investimento", self.investment_type.label().to_string()),
            ("Valor Inicial", format_brl(self.input.initial_amount)),
            ("Aporte Mensal", format_brl(self.input.monthly_contribution)),
            ("Tempo", format!("{} meses", self.input.months)),
            ("Valor Final Estimado", format_brl(self.result.final_value)),
            ("Lucro Total", format_brl(self.result.total_profit)),
        ]
    }
}

/// A past simulation listed under the results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRecord {
    pub id: u32,
    pub date: NaiveDate,
    pub investment_type: InvestmentType,
    pub initial_amount: f64,
    pub final_value: f64,
}

impl Record for SimulationRecord {
    const ENTITY: &'static str = "simulation";

    fn id(&self) -> u32 {
        self.id
    }
}

pub struct Simulator {
    defaults: ProjectionDefaults,
    history_limit: usize,
}

impl Simulator {
    pub fn new(config: &PlatformConfig) -> Self {
        Self {
            defaults: config.projection.clone(),
            history_limit: config.history_limit,
        }
    }

    /// Coerce the form and project it without recording anything.
    /// Without a chosen investment the run is labelled as Renda Fixa.
    pub fn summarize(&self, form: &SimulatorForm) -> SimulationSummary {
        let input = form.fields.to_input(&self.defaults);
        SimulationSummary {
            investment_type: form.investment_type.unwrap_or(InvestmentType::RendaFixa),
            input,
            result: compute(&input),
        }
    }

    /// Run the simulation and append it to `history`, dropping the oldest
    /// records beyond the configured limit
    pub fn simulate<R: Repository<SimulationRecord>>(
        &self,
        form: &SimulatorForm,
        history: &mut R,
        today: NaiveDate,
    ) -> Result<SimulationSummary> {
        let summary = self.summarize(form);
        let id = history.next_id();
        history.insert(SimulationRecord {
            id,
            date: today,
            investment_type: summary.investment_type,
            initial_amount: summary.input.initial_amount,
            final_value: summary.result.final_value,
        });

        while history.len() > self.history_limit {
            let oldest = history
                .list()
                .into_iter()
                .min_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));
            match oldest {
                Some(record) => {
                    history.remove(record.id)?;
                }
                None => break,
            }
        }

        log::info!(
            "Simulation {} over {} months: final={:.2} profit={:.2}",
            summary.investment_type.id(),
            summary.input.months,
            summary.result.final_value,
            summary.result.total_profit
        );
        Ok(summary)
    }
}

/// Most recent simulations first
pub fn recent_history<R: Repository<SimulationRecord>>(repo: &R, limit: usize) -> Vec<SimulationRecord> {
    let mut records = repo.list();
    records.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    records.truncate(limit);
    records
}

pub fn mock_simulations() -> Vec<SimulationRecord> {
    vec![
        SimulationRecord {
            id: 1,
            date: ymd(2025, 1, 15),
            investment_type: InvestmentType::RendaFixa,
            initial_amount: 1000.0,
            final_value: 1096.0,
        },
        SimulationRecord {
            id: 2,
            date: ymd(2025, 1, 10),
            investment_type: InvestmentType::Acoes,
            initial_amount: 2500.0,
            final_value: 2750.0,
        },
        SimulationRecord {
            id: 3,
            date: ymd(2025, 1, 5),
            investment_type: InvestmentType::FundosImobiliarios,
            initial_amount: 5000.0,
            final_value: 5420.0,
        },
    ]
}

//! Investment projection: form coercion, the projection formula, monthly
//! schedules and batch runs over scenario files

mod input;
mod calculator;
pub mod batch;

pub use input::{ProjectionDefaults, ProjectionForm, ProjectionInput};
pub use calculator::{compute, schedule, schedule_iter, ProjectionResult, ProjectionRow};
pub use batch::{Scenario, ScenarioOutcome, project_batch, load_scenarios, load_scenarios_from_reader, write_outcomes};

// ============================================================================
// Default Simulation Inputs
// ============================================================================
// Applied whenever a form field is missing, empty, unparseable or negative.
// - Rate is expressed in percentage points per month (0.8 means 0.8%)
// - Contributions are added linearly, only the initial amount compounds

/// Default initial amount (R$ 1.000)
pub const DEFAULT_INITIAL_AMOUNT: f64 = 1000.0;

/// Default duration in months
pub const DEFAULT_MONTHS: u32 = 12;

/// Default monthly growth rate in percent (0.8% a.m.)
pub const DEFAULT_PERIODIC_RATE_PERCENT: f64 = 0.8;

/// Default monthly contribution (R$ 200)
pub const DEFAULT_MONTHLY_CONTRIBUTION: f64 = 200.0;

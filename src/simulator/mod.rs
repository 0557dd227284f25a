//! Investment simulator: the form, the run that records history, and
//! currency display

mod investment;
mod service;
pub mod format;

pub use investment::InvestmentType;
pub use service::{
    SimulationRecord, SimulationSummary, Simulator, SimulatorForm, mock_simulations, recent_history,
};
pub use format::format_brl;

//! Core of a financial-education platform
//!
//! The investment simulator's projection formula, plus the records and
//! commands behind the lesson, certificate and user screens. Every screen
//! reads and writes through the repositories in [`store`]; the demo data
//! lives in memory and resets with the store.

pub mod catalog;
pub mod certificates;
pub mod config;
pub mod dates;
pub mod error;
pub mod notice;
pub mod projection;
pub mod simulator;
pub mod store;
pub mod support;
pub mod users;
pub mod validation;

pub use config::PlatformConfig;
pub use error::{PlatformError, Result};
pub use notice::{Notice, NoticeLevel};
pub use projection::{compute, ProjectionInput, ProjectionResult};
pub use store::{InMemoryRepository, MockStore, Record, Repository};

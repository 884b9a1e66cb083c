//! Validated simulation front end and KPI evaluation.
//!
//! `Simulator` checks a request, enforces the horizon limit, resolves the
//! effective policy and runs it. `SimulationKpi` summarizes the outcome.
//!
//! # Configuration
//!
//! `SimulationConfig` selects the `Algorithm` (with its quantum or priority
//! direction), priority mode, and the horizon limit. Every config type is
//! serde-serializable so hosts can accept it over the wire.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2-5.3

mod config;
mod engine;
mod kpi;

pub use config::{Algorithm, SimulationConfig, DEFAULT_MAX_HORIZON};
pub use engine::{SimulationError, SimulationRequest, Simulator};
pub use kpi::SimulationKpi;

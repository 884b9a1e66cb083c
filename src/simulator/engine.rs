//! Checked simulation entry point.
//!
//! # Algorithm
//!
//! 1. Validate processes and policy parameters.
//! 2. Reject requests whose worst-case horizon overflows `i64` or exceeds the
//!    configured limit.
//! 3. Resolve the effective policy (priority mode may reroute it).
//! 4. Run the engine and return its result.

use std::fmt;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::{Algorithm, SimulationConfig};
use crate::models::{Process, SimulationResult};
use crate::validation::{validate_request, ValidationError};

/// Input container for a simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to simulate, in display order.
    pub processes: Vec<Process>,
    /// Policy and limits.
    #[serde(default)]
    pub config: SimulationConfig,
}

impl SimulationRequest {
    /// Creates a request with the default configuration.
    pub fn new(processes: Vec<Process>) -> Self {
        Self {
            processes,
            config: SimulationConfig::default(),
        }
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the policy, keeping the rest of the configuration.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.config.algorithm = algorithm;
        self
    }

    /// Worst-case end of the simulation: latest arrival plus all work.
    ///
    /// No engine clock ever passes this value. `None` if it does not fit
    /// in an `i64`.
    pub fn horizon(&self) -> Option<i64> {
        let last_arrival = self
            .processes
            .iter()
            .map(|p| p.arrival_time)
            .max()
            .unwrap_or(0);
        self.processes
            .iter()
            .try_fold(last_arrival, |acc, p| acc.checked_add(p.burst_time))
    }
}

/// Why a simulation was not run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// The request failed validation.
    InvalidInput(Vec<ValidationError>),
    /// The worst-case horizon is beyond the configured limit.
    HorizonExceeded {
        /// Worst-case horizon of the request.
        horizon: i64,
        /// Configured limit.
        limit: i64,
    },
    /// The worst-case horizon does not fit in the simulation clock.
    HorizonOverflow,
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidInput(errors) => {
                write!(f, "invalid simulation input: ")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{e}")?;
                }
                Ok(())
            }
            SimulationError::HorizonExceeded { horizon, limit } => write!(
                f,
                "simulation horizon {horizon} exceeds the limit of {limit} time units"
            ),
            SimulationError::HorizonOverflow => {
                f.write_str("simulation horizon overflows the simulation clock")
            }
        }
    }
}

impl std::error::Error for SimulationError {}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SimulationError::InvalidInput(errors)
    }
}

/// Validating front end to the policy engines.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::Process;
/// use cpu_schedule::simulator::{Algorithm, SimulationConfig, Simulator};
///
/// let processes = vec![
///     Process::new("1", 0, 5).with_name("P1"),
///     Process::new("2", 1, 3).with_name("P2"),
///     Process::new("3", 2, 8).with_name("P3"),
/// ];
/// let simulator = Simulator::new()
///     .with_config(SimulationConfig::new().with_algorithm(Algorithm::Srtf));
///
/// let result = simulator.run(&processes).unwrap();
/// assert_eq!(result.gantt_chart.len(), 4);
/// assert_eq!(result.process("1").unwrap().completion_time, 8);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Creates a simulator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Validates and simulates `processes` under this simulator's config.
    pub fn run(&self, processes: &[Process]) -> Result<SimulationResult, SimulationError> {
        let request = SimulationRequest {
            processes: processes.to_vec(),
            config: self.config.clone(),
        };
        Self::run_request(&request)
    }

    /// Validates and simulates a self-contained request.
    pub fn run_request(request: &SimulationRequest) -> Result<SimulationResult, SimulationError> {
        if let Err(errors) = validate_request(request) {
            warn!("rejecting simulation request: {} validation errors", errors.len());
            return Err(errors.into());
        }

        // Checked even without a limit: engine clocks must not overflow.
        let Some(horizon) = request.horizon() else {
            warn!("rejecting simulation request: horizon overflows i64");
            return Err(SimulationError::HorizonOverflow);
        };
        if let Some(limit) = request.config.max_horizon {
            if horizon > limit {
                warn!("rejecting simulation request: horizon {horizon} > {limit}");
                return Err(SimulationError::HorizonExceeded { horizon, limit });
            }
        }

        let algorithm = request.config.effective_algorithm();
        if algorithm != request.config.algorithm {
            debug!(
                "priority mode: {:?} runs as {:?}",
                request.config.algorithm, algorithm
            );
        }

        let policy = algorithm.policy();
        debug!(
            "simulating {} processes with {}",
            request.processes.len(),
            policy.name()
        );
        Ok(policy.simulate(&request.processes))
    }
}

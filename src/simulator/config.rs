//! Simulation configuration.
//!
//! Selects the policy and its parameters, and sets the limits a host wants
//! enforced before any engine runs.

use serde::{Deserialize, Serialize};

use crate::policies::{
    Fcfs, Priority, PriorityOrder, PriorityPreemptive, RoundRobin, SchedulingPolicy, Sjf, Srtf,
    DEFAULT_QUANTUM,
};

/// Default limit on the worst-case simulated horizon (time units).
pub const DEFAULT_MAX_HORIZON: i64 = 1_000_000;

fn default_quantum() -> i64 {
    DEFAULT_QUANTUM
}

/// Scheduling policy selection with its parameters.
///
/// Serializes as a tagged object, e.g. `{"type": "roundRobin", "quantum": 2}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Algorithm {
    /// First-Come-First-Served.
    #[default]
    Fcfs,
    /// Shortest Job First (non-preemptive).
    Sjf,
    /// Shortest Remaining Time First.
    Srtf,
    /// Round Robin.
    RoundRobin {
        #[serde(default = "default_quantum")]
        quantum: i64,
    },
    /// Priority (non-preemptive).
    Priority {
        #[serde(default)]
        order: PriorityOrder,
    },
    /// Priority (preemptive).
    PriorityPreemptive {
        #[serde(default)]
        order: PriorityOrder,
    },
}

impl Algorithm {
    /// Round Robin with the default quantum.
    pub fn round_robin() -> Self {
        Algorithm::RoundRobin {
            quantum: DEFAULT_QUANTUM,
        }
    }

    /// Builds the policy engine for this selection.
    pub fn policy(&self) -> Box<dyn SchedulingPolicy> {
        match *self {
            Algorithm::Fcfs => Box::new(Fcfs),
            Algorithm::Sjf => Box::new(Sjf),
            Algorithm::Srtf => Box::new(Srtf),
            Algorithm::RoundRobin { quantum } => Box::new(RoundRobin::new(quantum)),
            Algorithm::Priority { order } => Box::new(Priority::new(order)),
            Algorithm::PriorityPreemptive { order } => Box::new(PriorityPreemptive::new(order)),
        }
    }

    /// Whether the policy ranks by priority.
    pub fn uses_priority(&self) -> bool {
        matches!(
            self,
            Algorithm::Priority { .. } | Algorithm::PriorityPreemptive { .. }
        )
    }

    /// All six policies with default parameters.
    pub fn all() -> [Algorithm; 6] {
        [
            Algorithm::Fcfs,
            Algorithm::Sjf,
            Algorithm::Srtf,
            Algorithm::round_robin(),
            Algorithm::Priority {
                order: PriorityOrder::default(),
            },
            Algorithm::PriorityPreemptive {
                order: PriorityOrder::default(),
            },
        ]
    }
}

/// Simulation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationConfig {
    /// Selected policy.
    pub algorithm: Algorithm,
    /// Priority mode. When on, every process must carry a priority and
    /// non-priority selections run as non-preemptive priority scheduling.
    pub use_priority: bool,
    /// Direction used when priority mode reroutes a non-priority selection.
    /// Explicit priority selections keep their own `order`.
    pub priority_order: PriorityOrder,
    /// Upper bound on `max arrival + total burst`. `None` = unlimited.
    pub max_horizon: Option<i64>,
}

impl SimulationConfig {
    /// Creates the default configuration (FCFS, no priority mode).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the policy.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Turns priority mode on or off.
    pub fn with_use_priority(mut self, use_priority: bool) -> Self {
        self.use_priority = use_priority;
        self
    }

    /// Sets the direction used for rerouted selections.
    pub fn with_priority_order(mut self, order: PriorityOrder) -> Self {
        self.priority_order = order;
        self
    }

    /// Sets the horizon limit.
    pub fn with_max_horizon(mut self, max_horizon: i64) -> Self {
        self.max_horizon = Some(max_horizon);
        self
    }

    /// Removes the horizon limit.
    pub fn without_horizon_limit(mut self) -> Self {
        self.max_horizon = None;
        self
    }

    /// The policy that will actually run.
    ///
    /// In priority mode, FCFS, SJF, SRTF and Round Robin selections are
    /// replaced by non-preemptive priority scheduling.
    pub fn effective_algorithm(&self) -> Algorithm {
        if self.use_priority && !self.algorithm.uses_priority() {
            Algorithm::Priority {
                order: self.priority_order,
            }
        } else {
            self.algorithm
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            use_priority: false,
            priority_order: PriorityOrder::default(),
            max_horizon: Some(DEFAULT_MAX_HORIZON),
        }
    }
}

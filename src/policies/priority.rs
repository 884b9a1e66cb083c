//! Priority policies.
//!
//! Whether a larger or a smaller number wins is a run parameter
//! ([`PriorityOrder`]), not a property of the process.
//!
//! # Undefined Priority
//! A process without a priority takes the worst value for the active
//! direction ([`UNDEFINED_PRIORITY_HIGHER_FIRST`] /
//! [`UNDEFINED_PRIORITY_LOWER_FIRST`]) and additionally ranks after every
//! process that has one, so a missing priority never wins over a set one.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.4

use std::fmt;

use serde::{Deserialize, Serialize};

use super::driver::{run_to_completion, run_unit_ticks};
use super::SchedulingPolicy;
use crate::models::{Process, SimulationResult};

/// Fallback priority under [`PriorityOrder::HigherFirst`].
pub const UNDEFINED_PRIORITY_HIGHER_FIRST: i32 = 0;

/// Fallback priority under [`PriorityOrder::LowerFirst`].
pub const UNDEFINED_PRIORITY_LOWER_FIRST: i32 = 999;

/// Which end of the priority scale wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriorityOrder {
    /// Larger number = more urgent.
    HigherFirst,
    /// Smaller number = more urgent (Unix nice-style).
    #[default]
    LowerFirst,
}

impl PriorityOrder {
    /// Value an undefined priority is treated as.
    pub fn undefined_priority(self) -> i32 {
        match self {
            PriorityOrder::HigherFirst => UNDEFINED_PRIORITY_HIGHER_FIRST,
            PriorityOrder::LowerFirst => UNDEFINED_PRIORITY_LOWER_FIRST,
        }
    }

    /// Priority value with the fallback applied.
    pub fn effective_priority(self, priority: Option<i32>) -> i32 {
        priority.unwrap_or_else(|| self.undefined_priority())
    }

    /// Ranking key (lower = runs first).
    pub fn rank(self, priority: Option<i32>) -> (bool, i64) {
        let value = i64::from(self.effective_priority(priority));
        let directed = match self {
            PriorityOrder::HigherFirst => -value,
            PriorityOrder::LowerFirst => value,
        };
        (priority.is_none(), directed)
    }

    /// Whether `a` strictly beats `b`.
    pub fn outranks(self, a: Option<i32>, b: Option<i32>) -> bool {
        self.rank(a) < self.rank(b)
    }

    /// Human-readable description of the direction.
    pub fn description(self) -> &'static str {
        match self {
            PriorityOrder::HigherFirst => "Higher Number = Higher Priority",
            PriorityOrder::LowerFirst => "Lower Number = Higher Priority",
        }
    }
}

impl fmt::Display for PriorityOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriorityOrder::HigherFirst => f.write_str("higher-first"),
            PriorityOrder::LowerFirst => f.write_str("lower-first"),
        }
    }
}

/// Non-preemptive priority scheduling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Priority {
    pub order: PriorityOrder,
}

impl Priority {
    pub fn new(order: PriorityOrder) -> Self {
        Self { order }
    }
}

impl SchedulingPolicy for Priority {
    fn name(&self) -> &'static str {
        "Priority"
    }

    fn label(&self) -> String {
        format!(
            "Priority Scheduling (Non-Preemptive) - {}",
            self.order.description()
        )
    }

    fn is_preemptive(&self) -> bool {
        false
    }

    fn uses_priority(&self) -> bool {
        true
    }

    fn simulate(&self, processes: &[Process]) -> SimulationResult {
        let order = self.order;
        run_to_completion(processes, self.label(), |w| order.rank(w.process.priority))
    }
}

/// Preemptive priority scheduling, re-evaluated every time unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriorityPreemptive {
    pub order: PriorityOrder,
}

impl PriorityPreemptive {
    pub fn new(order: PriorityOrder) -> Self {
        Self { order }
    }
}

impl SchedulingPolicy for PriorityPreemptive {
    fn name(&self) -> &'static str {
        "PriorityPreemptive"
    }

    fn label(&self) -> String {
        format!(
            "Priority Scheduling (Preemptive) - {}",
            self.order.description()
        )
    }

    fn is_preemptive(&self) -> bool {
        true
    }

    fn uses_priority(&self) -> bool {
        true
    }

    fn simulate(&self, processes: &[Process]) -> SimulationResult {
        let order = self.order;
        run_unit_ticks(processes, self.label(), |w| order.rank(w.process.priority))
    }
}

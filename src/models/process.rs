//! Process model.
//!
//! A process is a unit of CPU work with an arrival time, a burst time, and
//! an optional priority. Processes are the only input to the policy engines.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.1

use serde::{Deserialize, Serialize};

/// A CPU process to be simulated.
///
/// # Time Representation
/// All times are integer time units relative to the simulation epoch (t=0).
/// What a unit means (ms, ticks) is up to the consumer.
///
/// # Priority
/// The meaning of the priority value ("higher wins" or "lower wins") is not
/// a process attribute; it is chosen per run with
/// [`PriorityOrder`](crate::policies::PriorityOrder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    /// Unique process identifier (caller-assigned).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Time the process enters the ready state (>= 0).
    pub arrival_time: i64,
    /// Total CPU time required (>= 1).
    pub burst_time: i64,
    /// Scheduling priority. `None` = not set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

impl Process {
    /// Creates a new process. The name defaults to the ID.
    pub fn new(id: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            arrival_time,
            burst_time,
            priority: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Removes the scheduling priority.
    pub fn without_priority(mut self) -> Self {
        self.priority = None;
        self
    }

    /// Whether a priority value is set.
    #[inline]
    pub fn has_priority(&self) -> bool {
        self.priority.is_some()
    }
}

/// Per-process outcome of a simulation run.
///
/// Extends the input [`Process`] with the times decided by the engine.
/// Serializes flat (process fields and metrics side by side).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResult {
    /// The simulated process, unchanged.
    #[serde(flatten)]
    pub process: Process,
    /// First time the process was granted the CPU.
    pub start_time: i64,
    /// Time the last unit of work finished.
    pub completion_time: i64,
    /// completion - arrival.
    pub turnaround_time: i64,
    /// turnaround - burst.
    pub waiting_time: i64,
    /// start - arrival.
    pub response_time: i64,
}

impl ProcessResult {
    /// Derives all metrics from the first start and the completion time.
    pub fn finalize(process: Process, start_time: i64, completion_time: i64) -> Self {
        let turnaround_time = completion_time - process.arrival_time;
        let waiting_time = turnaround_time - process.burst_time;
        let response_time = start_time - process.arrival_time;
        Self {
            process,
            start_time,
            completion_time,
            turnaround_time,
            waiting_time,
            response_time,
        }
    }

    /// Process identifier.
    #[inline]
    pub fn id(&self) -> &str {
        &self.process.id
    }

    /// Display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.process.name
    }

    /// Whether the derived metrics are mutually consistent.
    pub fn is_consistent(&self) -> bool {
        self.turnaround_time == self.completion_time - self.process.arrival_time
            && self.waiting_time == self.turnaround_time - self.process.burst_time
            && self.response_time <= self.waiting_time
            && self.response_time >= 0
            && self.waiting_time >= 0
    }
}

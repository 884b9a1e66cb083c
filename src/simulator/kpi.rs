//! Simulation summary metrics (KPIs).
//!
//! Aggregates a [`SimulationResult`] into the figures usually compared
//! across policies.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest segment end |
//! | Busy Time | Sum of segment lengths |
//! | Idle Time | Makespan - busy time |
//! | CPU Utilization | Busy time / makespan |
//! | Throughput | Processes / makespan |
//! | Avg Waiting | Mean of turnaround - burst |
//! | Avg Turnaround | Mean of completion - arrival |
//! | Avg Response | Mean of first start - arrival |
//! | Context Switches | Transitions between different processes |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::{ProcessResult, SimulationResult};

/// Summary of one simulation run.
///
/// Time values are in simulation time units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationKpi {
    /// Latest completion time.
    pub makespan: i64,
    /// Time the CPU spent executing processes.
    pub busy_time: i64,
    /// Time the CPU spent idle between t=0 and the makespan.
    pub idle_time: i64,
    /// Busy fraction of the makespan (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Mean response time.
    pub avg_response_time: f64,
    /// Number of times the CPU switched to a different process.
    pub context_switches: usize,
}

impl SimulationKpi {
    /// Computes KPIs from a simulation result.
    pub fn calculate(result: &SimulationResult) -> Self {
        let makespan = result.makespan();
        let busy_time = result.busy_time();

        let context_switches = result
            .gantt_chart
            .windows(2)
            .filter(|w| w[0].process_id != w[1].process_id)
            .count();

        let (cpu_utilization, throughput) = if makespan > 0 {
            (
                busy_time as f64 / makespan as f64,
                result.processes.len() as f64 / makespan as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            makespan,
            busy_time,
            idle_time: makespan - busy_time,
            cpu_utilization,
            throughput,
            avg_waiting_time: mean(&result.processes, |p| p.waiting_time),
            avg_turnaround_time: mean(&result.processes, |p| p.turnaround_time),
            avg_response_time: mean(&result.processes, |p| p.response_time),
            context_switches,
        }
    }

    /// CPU utilization as a percentage (0.0..100.0).
    pub fn cpu_utilization_percent(&self) -> f64 {
        self.cpu_utilization * 100.0
    }
}

fn mean(processes: &[ProcessResult], metric: impl Fn(&ProcessResult) -> i64) -> f64 {
    if processes.is_empty() {
        return 0.0;
    }
    let total: i64 = processes.iter().map(metric).sum();
    total as f64 / processes.len() as f64
}

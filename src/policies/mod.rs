//! CPU scheduling policy engines.
//!
//! Six deterministic engines with one contract: a non-empty slice of valid
//! processes in, a [`SimulationResult`] out. Engines never mutate the input,
//! never fail, and keep no state between calls.
//!
//! | Policy | Preemptive | Ranking |
//! |--------|-----------|---------|
//! | [`Fcfs`] | no | arrival time |
//! | [`Sjf`] | no | burst time |
//! | [`Srtf`] | every tick | remaining time |
//! | [`RoundRobin`] | every quantum | FIFO queue |
//! | [`Priority`] | no | priority |
//! | [`PriorityPreemptive`] | every tick | priority |
//!
//! # Tie-Breaking
//! Equal ranking keys always go to the process listed first in the input.
//!
//! # Usage
//!
//! ```
//! use cpu_schedule::models::Process;
//! use cpu_schedule::policies::{self, SchedulingPolicy, Srtf};
//!
//! let processes = vec![
//!     Process::new("P1", 0, 5),
//!     Process::new("P2", 1, 3),
//! ];
//! let result = Srtf.simulate(&processes);
//! assert_eq!(result.gantt_chart.len(), 3);
//! assert_eq!(policies::fcfs(&processes).gantt_chart.len(), 2);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod driver;
mod fcfs;
mod priority;
mod round_robin;
mod shortest;
mod state;

pub use fcfs::Fcfs;
pub use priority::{
    Priority, PriorityOrder, PriorityPreemptive, UNDEFINED_PRIORITY_HIGHER_FIRST,
    UNDEFINED_PRIORITY_LOWER_FIRST,
};
pub use round_robin::{RoundRobin, DEFAULT_QUANTUM};
pub use shortest::{Sjf, Srtf};

use crate::models::{Process, SimulationResult};
use std::fmt::Debug;

/// A CPU scheduling policy.
///
/// Implementations are pure: the same input always yields the same result,
/// and concurrent calls on different inputs need no coordination.
pub trait SchedulingPolicy: Send + Sync + Debug {
    /// Short name (e.g., "FCFS", "RR").
    fn name(&self) -> &'static str;

    /// Display label, including parameters.
    fn label(&self) -> String;

    /// Whether a running process can lose the CPU before finishing.
    fn is_preemptive(&self) -> bool;

    /// Whether the policy reads process priorities.
    fn uses_priority(&self) -> bool {
        false
    }

    /// Runs the policy over `processes`.
    ///
    /// # Preconditions
    /// Non-empty input, unique IDs, arrival >= 0, burst >= 1. Use
    /// [`validate_processes`](crate::validation::validate_processes) first.
    fn simulate(&self, processes: &[Process]) -> SimulationResult;
}

/// First-Come-First-Served.
pub fn fcfs(processes: &[Process]) -> SimulationResult {
    Fcfs.simulate(processes)
}

/// Shortest Job First (non-preemptive).
pub fn sjf(processes: &[Process]) -> SimulationResult {
    Sjf.simulate(processes)
}

/// Shortest Remaining Time First.
pub fn srtf(processes: &[Process]) -> SimulationResult {
    Srtf.simulate(processes)
}

/// Round Robin with the given time quantum.
pub fn round_robin(processes: &[Process], quantum: i64) -> SimulationResult {
    RoundRobin::new(quantum).simulate(processes)
}

/// Non-preemptive priority scheduling.
pub fn priority(processes: &[Process], order: PriorityOrder) -> SimulationResult {
    Priority::new(order).simulate(processes)
}

/// Preemptive priority scheduling.
pub fn priority_preemptive(processes: &[Process], order: PriorityOrder) -> SimulationResult {
    PriorityPreemptive::new(order).simulate(processes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workload::{generate, WorkloadSpec};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn all_policies() -> Vec<Box<dyn SchedulingPolicy>> {
        vec![
            Box::new(Fcfs),
            Box::new(Sjf),
            Box::new(Srtf),
            Box::new(RoundRobin::new(1)),
            Box::new(RoundRobin::new(3)),
            Box::new(Priority::new(PriorityOrder::HigherFirst)),
            Box::new(Priority::new(PriorityOrder::LowerFirst)),
            Box::new(PriorityPreemptive::new(PriorityOrder::HigherFirst)),
            Box::new(PriorityPreemptive::new(PriorityOrder::LowerFirst)),
        ]
    }

    fn check_invariants(policy: &dyn SchedulingPolicy, processes: &[Process]) {
        let r = policy.simulate(processes);
        let name = policy.label();

        // Every input exactly once, in input order
        assert_eq!(r.processes.len(), processes.len(), "{name}");
        for (out, inp) in r.processes.iter().zip(processes) {
            assert_eq!(&out.process, inp, "{name}");
        }

        // Executed time equals burst time
        for p in processes {
            assert_eq!(r.executed_time(&p.id), p.burst_time, "{name} {}", p.id);
        }

        // Time-ordered, non-overlapping
        assert!(r.is_well_formed(), "{name}");

        // Metric identities
        for p in &r.processes {
            assert!(p.is_consistent(), "{name} {}", p.id());
            assert!(p.turnaround_time >= 0 && p.completion_time >= 0, "{name}");
            assert!(p.start_time >= p.process.arrival_time, "{name}");
        }

        // Nothing runs before it arrives
        for s in &r.gantt_chart {
            let arrival = r.process(&s.process_id).unwrap().process.arrival_time;
            assert!(s.start_time >= arrival, "{name}");
        }
    }

    #[test]
    fn test_invariants_on_random_workloads() {
        let mut rng = StdRng::seed_from_u64(42);
        let spec = WorkloadSpec::new(8)
            .with_arrival_range(0, 12)
            .with_burst_range(1, 6)
            .with_priority_range(0, 4);

        for _ in 0..50 {
            let processes = generate(&spec, &mut rng);
            for policy in all_policies() {
                check_invariants(policy.as_ref(), &processes);
            }
        }
    }

    #[test]
    fn test_invariants_without_priorities() {
        let mut rng = StdRng::seed_from_u64(7);
        let spec = WorkloadSpec::new(6).with_arrival_range(0, 20);

        for _ in 0..20 {
            let processes = generate(&spec, &mut rng);
            for policy in all_policies() {
                check_invariants(policy.as_ref(), &processes);
            }
        }
    }

    #[test]
    fn test_large_quantum_degenerates_to_fcfs() {
        let mut rng = StdRng::seed_from_u64(3);
        let spec = WorkloadSpec::new(10).with_burst_range(1, 9);

        for _ in 0..20 {
            let processes = generate(&spec, &mut rng);
            let max_burst = processes.iter().map(|p| p.burst_time).max().unwrap();
            let rr = round_robin(&processes, max_burst);
            let fc = fcfs(&processes);
            assert_eq!(rr.gantt_chart, fc.gantt_chart);
            assert_eq!(rr.processes, fc.processes);
        }
    }

    #[test]
    fn test_preemptive_engines_complete_started_processes() {
        let mut rng = StdRng::seed_from_u64(11);
        let spec = WorkloadSpec::new(12).with_priority_range(1, 3);

        for _ in 0..20 {
            let processes = generate(&spec, &mut rng);
            for r in [
                srtf(&processes),
                priority_preemptive(&processes, PriorityOrder::LowerFirst),
            ] {
                assert_eq!(r.processes.len(), processes.len());
                for p in &r.processes {
                    assert!(p.completion_time > p.start_time);
                }
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let mut rng = StdRng::seed_from_u64(99);
        let processes = generate(&WorkloadSpec::new(15).with_priority_range(0, 9), &mut rng);
        for policy in all_policies() {
            assert_eq!(policy.simulate(&processes), policy.simulate(&processes));
        }
    }

    #[test]
    fn test_convenience_functions() {
        let processes = vec![
            Process::new("1", 0, 5),
            Process::new("2", 1, 3),
            Process::new("3", 2, 8),
        ];
        assert_eq!(fcfs(&processes).makespan(), 16);
        assert_eq!(sjf(&processes).makespan(), 16);
        assert_eq!(srtf(&processes).makespan(), 16);
        assert_eq!(round_robin(&processes, 2).makespan(), 16);
        assert_eq!(priority(&processes, PriorityOrder::LowerFirst).makespan(), 16);
        assert_eq!(
            priority_preemptive(&processes, PriorityOrder::HigherFirst).makespan(),
            16
        );
    }

    #[test]
    fn test_policy_metadata() {
        assert_eq!(Fcfs.name(), "FCFS");
        assert!(!Sjf.is_preemptive());
        assert!(Srtf.is_preemptive());
        assert!(!RoundRobin::default().uses_priority());
        assert!(Priority::default().uses_priority());
        assert_eq!(RoundRobin::default().quantum, DEFAULT_QUANTUM);
    }
}

//! First-Come-First-Served.

use log::trace;

use super::driver::finish;
use super::state::{Completions, Timeline, WorkingProcess};
use super::SchedulingPolicy;
use crate::models::{Process, SimulationResult};

/// First-Come-First-Served.
///
/// Runs processes in arrival order, each to completion. Equal arrivals keep
/// the caller's order (stable sort).
///
/// # Reference
/// Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.1
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn label(&self) -> String {
        "First Come First Serve (FCFS)".to_string()
    }

    fn is_preemptive(&self) -> bool {
        false
    }

    fn simulate(&self, processes: &[Process]) -> SimulationResult {
        let mut work = WorkingProcess::from_slice(processes);
        let mut timeline = Timeline::new();
        let mut completions = Completions::new(processes.len());

        let mut order: Vec<usize> = (0..work.len()).collect();
        order.sort_by_key(|&i| processes[i].arrival_time);

        let mut clock: i64 = 0;
        for i in order {
            let w = &mut work[i];
            let start = clock.max(w.process.arrival_time);
            if start > clock {
                trace!("FCFS: idle {clock}..{start}");
            }
            w.start_at(start);
            let ran = w.run_for(w.remaining);
            clock = start + ran;
            timeline.record(w.process, start, clock);
            completions.complete(w, clock);
        }

        finish(self.label(), timeline, completions, clock)
    }
}

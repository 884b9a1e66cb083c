//! Round Robin.
//!
//! # Algorithm
//!
//! 1. Processes are stable-sorted by arrival; a cursor tracks who has arrived.
//! 2. The head of a FIFO ready queue runs for `min(quantum, remaining)`.
//! 3. Processes that arrived during the slice are enqueued **before** the
//!    preempted process goes back to the tail.
//! 4. An empty queue with pending arrivals jumps the clock forward.
//!
//! Every slice is its own Gantt segment.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.3

use std::collections::VecDeque;

use log::trace;

use super::driver::finish;
use super::state::{Completions, Timeline, WorkingProcess};
use super::SchedulingPolicy;
use crate::models::{Process, SimulationResult};

/// Default time quantum.
pub const DEFAULT_QUANTUM: i64 = 2;

/// Round Robin with a fixed time quantum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    /// Maximum slice length (>= 1).
    pub quantum: i64,
}

impl RoundRobin {
    /// Creates a Round Robin policy with the given quantum.
    pub fn new(quantum: i64) -> Self {
        Self { quantum }
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self::new(DEFAULT_QUANTUM)
    }
}

/// Arrival-ordered cursor over the input.
struct Arrivals<'p> {
    processes: &'p [Process],
    order: Vec<usize>,
    next: usize,
}

impl<'p> Arrivals<'p> {
    fn new(processes: &'p [Process]) -> Self {
        let mut order: Vec<usize> = (0..processes.len()).collect();
        order.sort_by_key(|&i| processes[i].arrival_time);
        Self {
            processes,
            order,
            next: 0,
        }
    }

    fn has_pending(&self) -> bool {
        self.next < self.order.len()
    }

    fn peek_time(&self) -> Option<i64> {
        self.order
            .get(self.next)
            .map(|&i| self.processes[i].arrival_time)
    }

    /// Moves everything that has arrived by `clock` into the queue.
    fn admit(&mut self, clock: i64, queue: &mut VecDeque<usize>) {
        while let Some(&i) = self.order.get(self.next) {
            if self.processes[i].arrival_time > clock {
                break;
            }
            queue.push_back(i);
            self.next += 1;
        }
    }
}

impl SchedulingPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn label(&self) -> String {
        format!("Round Robin (Time Quantum: {})", self.quantum)
    }

    fn is_preemptive(&self) -> bool {
        true
    }

    fn simulate(&self, processes: &[Process]) -> SimulationResult {
        let label = self.label();
        // A non-positive quantum would never make progress.
        let quantum = self.quantum.max(1);

        let mut work = WorkingProcess::from_slice(processes);
        let mut timeline = Timeline::new();
        let mut completions = Completions::new(processes.len());
        let mut arrivals = Arrivals::new(processes);
        let mut ready: VecDeque<usize> = VecDeque::new();
        let mut clock: i64 = 0;

        arrivals.admit(clock, &mut ready);

        while !ready.is_empty() || arrivals.has_pending() {
            if ready.is_empty() {
                if let Some(t) = arrivals.peek_time() {
                    trace!("{label}: idle {clock}..{t}");
                    clock = clock.max(t);
                }
                arrivals.admit(clock, &mut ready);
            }

            let Some(i) = ready.pop_front() else {
                break;
            };
            let w = &mut work[i];
            if w.start_at(clock) {
                trace!("{label}: {} first dispatched at {clock}", w.process.id);
            }

            let start = clock;
            clock += w.run_for(quantum);
            timeline.record(w.process, start, clock);

            // Arrivals during the slice queue ahead of the preempted process.
            arrivals.admit(clock, &mut ready);

            if w.remaining > 0 {
                trace!("{label}: {} requeued with {} left", w.process.id, w.remaining);
                ready.push_back(i);
            } else {
                completions.complete(w, clock);
            }
        }

        finish(label, timeline, completions, clock)
    }
}

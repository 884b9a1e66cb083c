//! Random workload generation.
//!
//! Produces valid process sets for property tests, demos, and benchmarks.
//! Generation is reproducible when the caller seeds the RNG.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Shape of a generated workload. All ranges are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadSpec {
    /// Number of processes.
    pub count: usize,
    /// Arrival time range.
    pub arrival: (i64, i64),
    /// Burst time range. Lower bound is clamped to 1.
    pub burst: (i64, i64),
    /// Priority range. `None` = processes get no priority.
    pub priority: Option<(i32, i32)>,
}

impl WorkloadSpec {
    /// Creates a spec for `count` processes with arrivals in 0..=10 and
    /// bursts in 1..=10.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            arrival: (0, 10),
            burst: (1, 10),
            priority: None,
        }
    }

    /// Sets the arrival time range.
    pub fn with_arrival_range(mut self, min: i64, max: i64) -> Self {
        self.arrival = (min, max);
        self
    }

    /// Sets the burst time range.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        self.burst = (min, max);
        self
    }

    /// Enables priorities in the given range.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.priority = Some((min, max));
        self
    }
}

impl Default for WorkloadSpec {
    fn default() -> Self {
        Self::new(5)
    }
}

/// Generates processes `P1..Pn` following `spec`.
///
/// Out-of-order or out-of-domain bounds are normalized so the output always
/// passes [`validate_processes`](crate::validation::validate_processes).
pub fn generate<R: Rng>(spec: &WorkloadSpec, rng: &mut R) -> Vec<Process> {
    let (a_lo, a_hi) = ordered(spec.arrival.0.max(0), spec.arrival.1.max(0));
    let (b_lo, b_hi) = ordered(spec.burst.0.max(1), spec.burst.1.max(1));

    (1..=spec.count)
        .map(|n| {
            let arrival = rng.random_range(a_lo..=a_hi);
            let burst = rng.random_range(b_lo..=b_hi);
            let mut p = Process::new(format!("P{n}"), arrival, burst);
            if let Some((lo, hi)) = spec.priority {
                let (lo, hi) = ordered(lo, hi);
                p.priority = Some(rng.random_range(lo..=hi));
            }
            p
        })
        .collect()
}

fn ordered<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

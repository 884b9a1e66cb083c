//! Shared simulation loops.
//!
//! SJF and non-preemptive priority share the run-to-completion loop;
//! SRTF and preemptive priority share the unit-tick loop. Each policy only
//! contributes its ranking key (lower = runs first).

use log::{debug, trace};

use super::state::{next_arrival, select_ready, Completions, Timeline, WorkingProcess};
use crate::models::{Process, SimulationResult};

/// Greedy non-preemptive loop.
///
/// # Algorithm
/// 1. Candidates = unfinished processes with arrival <= clock.
/// 2. If none, jump the clock to the next arrival (no idle segment).
/// 3. Otherwise run the minimum-key candidate to completion.
///
/// # Complexity
/// O(n^2) for n processes.
pub(crate) fn run_to_completion<K, F>(
    processes: &[Process],
    label: String,
    key: F,
) -> SimulationResult
where
    K: Ord,
    F: Fn(&WorkingProcess<'_>) -> K,
{
    let mut work = WorkingProcess::from_slice(processes);
    let mut timeline = Timeline::new();
    let mut completions = Completions::new(processes.len());
    let mut clock: i64 = 0;

    loop {
        let Some(i) = select_ready(&work, clock, &key) else {
            match next_arrival(&work, clock) {
                Some(t) => {
                    trace!("{label}: idle {clock}..{t}");
                    clock = t;
                    continue;
                }
                None => break,
            }
        };

        let w = &mut work[i];
        w.start_at(clock);
        let ran = w.run_for(w.remaining);
        timeline.record(w.process, clock, clock + ran);
        trace!("{label}: {} runs {}..{}", w.process.id, clock, clock + ran);
        clock += ran;
        completions.complete(w, clock);
    }

    finish(label, timeline, completions, clock)
}

/// Preemptive loop with a one-unit time slice.
///
/// The ranking is re-evaluated at every tick boundary, so a newly arrived
/// better candidate takes the CPU immediately. Consecutive ticks of the
/// same process are merged into one Gantt segment.
///
/// # Complexity
/// O(n * T) where T = total burst time.
pub(crate) fn run_unit_ticks<K, F>(processes: &[Process], label: String, key: F) -> SimulationResult
where
    K: Ord,
    F: Fn(&WorkingProcess<'_>) -> K,
{
    let mut work = WorkingProcess::from_slice(processes);
    let mut timeline = Timeline::new();
    let mut completions = Completions::new(processes.len());
    let mut clock: i64 = 0;
    let mut previous: Option<usize> = None;

    loop {
        let Some(i) = select_ready(&work, clock, &key) else {
            match next_arrival(&work, clock) {
                Some(t) => {
                    // Stepping one tick at a time would give the same boundaries.
                    trace!("{label}: idle {clock}..{t}");
                    clock = t;
                    previous = None;
                    continue;
                }
                None => break,
            }
        };

        if let Some(p) = previous {
            if p != i && work[p].remaining > 0 {
                trace!(
                    "{label}: {} preempts {} at {clock}",
                    work[i].process.id,
                    work[p].process.id
                );
            }
        }

        let w = &mut work[i];
        if w.start_at(clock) {
            trace!("{label}: {} first dispatched at {clock}", w.process.id);
        }
        w.run_for(1);
        timeline.record_merged(w.process, clock, clock + 1);
        clock += 1;

        if w.remaining == 0 {
            completions.complete(w, clock);
        }
        previous = Some(i);
    }

    finish(label, timeline, completions, clock)
}

/// Assembles the result in input order.
pub(crate) fn finish(
    label: String,
    timeline: Timeline,
    completions: Completions,
    clock: i64,
) -> SimulationResult {
    let processes = completions.into_results();
    debug!(
        "{label}: {} processes finished, makespan {clock}",
        processes.len()
    );
    SimulationResult {
        processes,
        gantt_chart: timeline.into_segments(),
        algorithm: label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Process> {
        vec![
            Process::new("1", 0, 4),
            Process::new("2", 1, 1),
            Process::new("3", 10, 2),
        ]
    }

    #[test]
    fn test_run_to_completion_idle_jump() {
        let procs = sample();
        let r = run_to_completion(&procs, "greedy".into(), |w| w.process.burst_time);
        let spans: Vec<(i64, i64)> = r
            .gantt_chart
            .iter()
            .map(|s| (s.start_time, s.end_time))
            .collect();
        // P1 0-4, P2 4-5, idle 5-10, P3 10-12
        assert_eq!(spans, vec![(0, 4), (4, 5), (10, 12)]);
        assert_eq!(r.algorithm, "greedy");
    }

    #[test]
    fn test_run_unit_ticks_merges_and_preempts() {
        let procs = sample();
        let r = run_unit_ticks(&procs, "ticks".into(), |w| w.remaining);
        let spans: Vec<(&str, i64, i64)> = r
            .gantt_chart
            .iter()
            .map(|s| (s.process_id.as_str(), s.start_time, s.end_time))
            .collect();
        // P2 (remaining 1) preempts P1 (remaining 3) at t=1
        assert_eq!(
            spans,
            vec![("1", 0, 1), ("2", 1, 2), ("1", 2, 5), ("3", 10, 12)]
        );
    }

    #[test]
    fn test_results_in_input_order() {
        let procs = sample();
        let r = run_unit_ticks(&procs, "ticks".into(), |w| w.remaining);
        let ids: Vec<&str> = r.processes.iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(r.process("2").unwrap().completion_time, 2);
    }
}

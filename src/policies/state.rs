//! Per-run working state shared by the policy engines.
//!
//! Every engine invocation builds fresh working copies of the input; nothing
//! here outlives a single run.

use crate::models::{GanttSegment, Process, ProcessResult};

/// Mutable bookkeeping for one process during one run.
#[derive(Debug, Clone)]
pub(crate) struct WorkingProcess<'a> {
    pub process: &'a Process,
    /// Position in the caller's slice. Final tie-breaker and output order.
    pub index: usize,
    pub remaining: i64,
    pub start_time: Option<i64>,
}

impl<'a> WorkingProcess<'a> {
    /// Builds working copies in input order, so `work[i].index == i`.
    pub fn from_slice(processes: &'a [Process]) -> Vec<Self> {
        processes
            .iter()
            .enumerate()
            .map(|(index, process)| Self {
                process,
                index,
                remaining: process.burst_time,
                start_time: None,
            })
            .collect()
    }

    /// Arrived and not yet finished.
    #[inline]
    pub fn is_ready(&self, clock: i64) -> bool {
        self.process.arrival_time <= clock && self.remaining > 0
    }

    /// Records the first dispatch. Returns `true` if this was it.
    pub fn start_at(&mut self, clock: i64) -> bool {
        if self.start_time.is_none() {
            self.start_time = Some(clock);
            true
        } else {
            false
        }
    }

    /// Consumes up to `units` of remaining work. Returns the units run.
    pub fn run_for(&mut self, units: i64) -> i64 {
        let ran = units.min(self.remaining);
        self.remaining -= ran;
        ran
    }
}

/// Index (into `work`) of the best ready process at `clock`.
///
/// Candidates are ranked by `(key, input index)`; the smallest wins, so
/// equal keys always go to the process listed first by the caller.
pub(crate) fn select_ready<K, F>(work: &[WorkingProcess<'_>], clock: i64, key: F) -> Option<usize>
where
    K: Ord,
    F: Fn(&WorkingProcess<'_>) -> K,
{
    work.iter()
        .enumerate()
        .filter(|&(_, w)| w.is_ready(clock))
        .min_by_key(|&(_, w)| (key(w), w.index))
        .map(|(i, _)| i)
}

/// Earliest arrival strictly after `clock` among unfinished processes.
pub(crate) fn next_arrival(work: &[WorkingProcess<'_>], clock: i64) -> Option<i64> {
    work.iter()
        .filter(|w| w.remaining > 0 && w.process.arrival_time > clock)
        .map(|w| w.process.arrival_time)
        .min()
}

/// Gantt chart under construction.
#[derive(Debug, Default)]
pub(crate) struct Timeline {
    segments: Vec<GanttSegment>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment unconditionally.
    pub fn record(&mut self, process: &Process, start: i64, end: i64) {
        self.segments
            .push(GanttSegment::new(&process.id, &process.name, start, end));
    }

    /// Appends a segment, or extends the last one when the same process
    /// simply keeps running.
    pub fn record_merged(&mut self, process: &Process, start: i64, end: i64) {
        if let Some(last) = self.segments.last_mut() {
            if last.process_id == process.id && last.end_time == start {
                last.end_time = end;
                return;
            }
        }
        self.record(process, start, end);
    }

    pub fn into_segments(self) -> Vec<GanttSegment> {
        self.segments
    }
}

/// Finalized outcomes, slotted by input index.
#[derive(Debug)]
pub(crate) struct Completions {
    slots: Vec<Option<ProcessResult>>,
}

impl Completions {
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    /// Finalizes a process that finished at `clock`.
    pub fn complete(&mut self, work: &WorkingProcess<'_>, clock: i64) {
        debug_assert_eq!(work.remaining, 0);
        debug_assert!(work.start_time.is_some());
        let start = work.start_time.unwrap_or(clock);
        self.slots[work.index] = Some(ProcessResult::finalize(
            work.process.clone(),
            start,
            clock,
        ));
    }

    /// Outcomes in input order.
    pub fn into_results(self) -> Vec<ProcessResult> {
        self.slots.into_iter().flatten().collect()
    }
}

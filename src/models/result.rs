//! Simulation result model.
//!
//! A simulation result is the full execution timeline (Gantt chart) of one
//! policy run plus the per-process outcome.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

use super::ProcessResult;

/// A contiguous interval during which one process held the CPU.
///
/// Segments satisfy `start_time < end_time`. Idle CPU time is never
/// represented by a segment; it shows up as a gap between segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GanttSegment {
    /// Executing process ID.
    pub process_id: String,
    /// Executing process name (denormalized for display).
    pub process_name: String,
    /// Start time (inclusive).
    pub start_time: i64,
    /// End time (exclusive).
    pub end_time: i64,
}

impl GanttSegment {
    /// Creates a new segment.
    pub fn new(
        process_id: impl Into<String>,
        process_name: impl Into<String>,
        start_time: i64,
        end_time: i64,
    ) -> Self {
        Self {
            process_id: process_id.into(),
            process_name: process_name.into(),
            start_time,
            end_time,
        }
    }

    /// Length of the interval.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }

    /// Whether two segments share any instant.
    #[inline]
    pub fn overlaps(&self, other: &GanttSegment) -> bool {
        self.start_time < other.end_time && other.start_time < self.end_time
    }
}

/// The outcome of running one policy over a process set.
///
/// `processes` keeps the caller's input order (not completion order);
/// `gantt_chart` is in time order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    /// Per-process outcome, in input order.
    pub processes: Vec<ProcessResult>,
    /// Execution timeline, in time order.
    pub gantt_chart: Vec<GanttSegment>,
    /// Human-readable policy label. Display only.
    pub algorithm: String,
}

impl SimulationResult {
    /// Creates an empty result with the given label.
    pub fn new(algorithm: impl Into<String>) -> Self {
        Self {
            processes: Vec::new(),
            gantt_chart: Vec::new(),
            algorithm: algorithm.into(),
        }
    }

    /// Makespan: latest segment end (0 for an empty timeline).
    pub fn makespan(&self) -> i64 {
        self.gantt_chart.iter().map(|s| s.end_time).max().unwrap_or(0)
    }

    /// Total time the CPU was busy.
    pub fn busy_time(&self) -> i64 {
        self.gantt_chart.iter().map(GanttSegment::duration).sum()
    }

    /// Finds the outcome for a process.
    pub fn process(&self, process_id: &str) -> Option<&ProcessResult> {
        self.processes.iter().find(|p| p.id() == process_id)
    }

    /// Returns all segments of a process, in time order.
    pub fn segments_for(&self, process_id: &str) -> Vec<&GanttSegment> {
        self.gantt_chart
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect()
    }

    /// Total CPU time granted to a process.
    pub fn executed_time(&self, process_id: &str) -> i64 {
        self.segments_for(process_id)
            .iter()
            .map(|s| s.duration())
            .sum()
    }

    /// Number of processes.
    pub fn process_count(&self) -> usize {
        self.processes.len()
    }

    /// Whether the timeline is time-ordered with no overlapping segments.
    pub fn is_well_formed(&self) -> bool {
        self.gantt_chart.iter().all(|s| s.start_time < s.end_time)
            && self
                .gantt_chart
                .windows(2)
                .all(|w| w[0].end_time <= w[1].start_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;

    fn sample_result() -> SimulationResult {
        let mut r = SimulationResult::new("test");
        r.gantt_chart.push(GanttSegment::new("1", "P1", 0, 1));
        r.gantt_chart.push(GanttSegment::new("2", "P2", 1, 4));
        r.gantt_chart.push(GanttSegment::new("1", "P1", 4, 8));
        r.gantt_chart.push(GanttSegment::new("3", "P3", 10, 12));
        r.processes.push(ProcessResult::finalize(Process::new("1", 0, 5), 0, 8));
        r.processes.push(ProcessResult::finalize(Process::new("2", 1, 3), 1, 4));
        r.processes.push(ProcessResult::finalize(Process::new("3", 10, 2), 10, 12));
        r
    }

    #[test]
    fn test_segment_duration_and_overlap() {
        let a = GanttSegment::new("1", "P1", 0, 5);
        let b = GanttSegment::new("2", "P2", 5, 8);
        let c = GanttSegment::new("3", "P3", 4, 6);
        assert_eq!(a.duration(), 5);
        assert!(!a.overlaps(&b)); // Abutting is fine
        assert!(a.overlaps(&c));
        assert!(b.overlaps(&c));
    }

    #[test]
    fn test_makespan_and_busy_time() {
        let r = sample_result();
        assert_eq!(r.makespan(), 12);
        assert_eq!(r.busy_time(), 10); // Idle 8..10
    }

    #[test]
    fn test_segments_for_process() {
        let r = sample_result();
        assert_eq!(r.segments_for("1").len(), 2);
        assert_eq!(r.executed_time("1"), 5);
        assert_eq!(r.executed_time("2"), 3);
        assert_eq!(r.executed_time("99"), 0);
    }

    #[test]
    fn test_process_lookup() {
        let r = sample_result();
        assert_eq!(r.process("2").unwrap().completion_time, 4);
        assert!(r.process("99").is_none());
        assert_eq!(r.process_count(), 3);
    }

    #[test]
    fn test_well_formed() {
        let mut r = sample_result();
        assert!(r.is_well_formed());
        r.gantt_chart.push(GanttSegment::new("4", "P4", 11, 13));
        assert!(!r.is_well_formed());
    }

    #[test]
    fn test_empty_result() {
        let r = SimulationResult::default();
        assert_eq!(r.makespan(), 0);
        assert_eq!(r.busy_time(), 0);
        assert!(r.is_well_formed());
    }

    #[test]
    fn test_serde_keys() {
        let r = sample_result();
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["algorithm"], "test");
        assert_eq!(json["ganttChart"][0]["processName"], "P1");
        assert_eq!(json["ganttChart"][1]["startTime"], 1);
        assert_eq!(json["processes"][0]["turnaroundTime"], 8);
    }
}

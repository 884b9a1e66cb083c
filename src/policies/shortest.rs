//! Shortest-job policies.
//!
//! - **SJF**: non-preemptive, ranks by total burst time.
//! - **SRTF**: preemptive, ranks by remaining time every tick.
//!
//! Both minimize mean waiting time within their preemption model.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use super::driver::{run_to_completion, run_unit_ticks};
use super::SchedulingPolicy;
use crate::models::{Process, SimulationResult};

/// Shortest Job First (non-preemptive).
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl SchedulingPolicy for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn label(&self) -> String {
        "Shortest Job First (SJF)".to_string()
    }

    fn is_preemptive(&self) -> bool {
        false
    }

    fn simulate(&self, processes: &[Process]) -> SimulationResult {
        run_to_completion(processes, self.label(), |w| w.process.burst_time)
    }
}

/// Shortest Remaining Time First (preemptive SJF).
#[derive(Debug, Clone, Copy, Default)]
pub struct Srtf;

impl SchedulingPolicy for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn label(&self) -> String {
        "Shortest Remaining Time First (SRTF)".to_string()
    }

    fn is_preemptive(&self) -> bool {
        true
    }

    fn simulate(&self, processes: &[Process]) -> SimulationResult {
        run_unit_ticks(processes, self.label(), |w| w.remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic() -> Vec<Process> {
        vec![
            Process::new("1", 0, 5).with_name("P1"),
            Process::new("2", 1, 3).with_name("P2"),
            Process::new("3", 2, 8).with_name("P3"),
        ]
    }

    fn spans(r: &SimulationResult) -> Vec<(&str, i64, i64)> {
        r.gantt_chart
            .iter()
            .map(|s| (s.process_name.as_str(), s.start_time, s.end_time))
            .collect()
    }

    #[test]
    fn test_sjf_picks_shortest_available() {
        let procs = vec![
            Process::new("1", 0, 7),
            Process::new("2", 2, 4),
            Process::new("3", 4, 1),
            Process::new("4", 5, 4),
        ];
        let r = Sjf.simulate(&procs);
        // t=0 only P1; t=7 P3 (1) < P2 (4) = P4 (4) -> P2 before P4 by input order
        assert_eq!(
            spans(&r),
            vec![("1", 0, 7), ("3", 7, 8), ("2", 8, 12), ("4", 12, 16)]
        );
        let waits: Vec<i64> = r.processes.iter().map(|p| p.waiting_time).collect();
        assert_eq!(waits, vec![0, 6, 3, 7]);
    }

    #[test]
    fn test_sjf_output_in_input_order() {
        let procs = vec![Process::new("long", 0, 9), Process::new("short", 0, 1)];
        let r = Sjf.simulate(&procs);
        assert_eq!(r.gantt_chart[0].process_id, "short");
        assert_eq!(r.processes[0].id(), "long");
        assert_eq!(r.processes[0].start_time, 1);
    }

    #[test]
    fn test_sjf_idle_fast_forward() {
        let procs = vec![Process::new("1", 3, 2), Process::new("2", 3, 1)];
        let r = Sjf.simulate(&procs);
        assert_eq!(spans(&r), vec![("2", 3, 4), ("1", 4, 6)]);
    }

    #[test]
    fn test_srtf_golden() {
        let r = Srtf.simulate(&classic());
        assert_eq!(
            spans(&r),
            vec![("P1", 0, 1), ("P2", 1, 4), ("P1", 4, 8), ("P3", 8, 16)]
        );

        let p1 = r.process("1").unwrap();
        assert_eq!((p1.completion_time, p1.waiting_time, p1.response_time), (8, 3, 0));
        let p2 = r.process("2").unwrap();
        assert_eq!((p2.completion_time, p2.waiting_time, p2.response_time), (4, 0, 0));
        let p3 = r.process("3").unwrap();
        assert_eq!((p3.completion_time, p3.waiting_time, p3.response_time), (16, 6, 6));
        assert_eq!(r.algorithm, "Shortest Remaining Time First (SRTF)");
    }

    #[test]
    fn test_srtf_tie_keeps_running_earlier_index() {
        // At t=2 P1 has 2 left, P2 has 2 -> P1 (listed first) keeps the CPU
        let procs = vec![Process::new("1", 0, 4), Process::new("2", 2, 2)];
        let r = Srtf.simulate(&procs);
        assert_eq!(spans(&r), vec![("1", 0, 4), ("2", 4, 6)]);
    }

    #[test]
    fn test_srtf_idle_between_arrivals() {
        let procs = vec![Process::new("1", 0, 1), Process::new("2", 4, 2)];
        let r = Srtf.simulate(&procs);
        assert_eq!(spans(&r), vec![("1", 0, 1), ("2", 4, 6)]);
        assert_eq!(r.process("2").unwrap().waiting_time, 0);
    }
}

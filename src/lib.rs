//! Deterministic CPU scheduling simulator.
//!
//! Given a set of processes (arrival time, burst time, optional priority)
//! and a policy, computes the exact execution timeline and per-process
//! metrics. The engines are pure functions: no I/O, no shared state, the
//! same input always yields the same result.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ProcessResult`, `GanttSegment`,
//!   `SimulationResult`
//! - **`policies`**: The six engines: FCFS, SJF, SRTF, Round Robin,
//!   Priority (non-preemptive and preemptive)
//! - **`simulator`**: Validated entry point, configuration, KPI summary
//! - **`validation`**: Input integrity checks (IDs, times, priorities, quantum)
//! - **`workload`**: Seeded random process sets
//!
//! # Logging
//!
//! Emits records through the `log` facade (`debug` per run, `trace` per
//! scheduling decision). Install any logger to see them.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod models;
pub mod policies;
pub mod simulator;
pub mod validation;
pub mod workload;

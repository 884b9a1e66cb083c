//! Simulation domain models.
//!
//! Provides the input and output types shared by every policy engine.
//!
//! # Mapping to Textbook Terms
//!
//! | cpu-schedule | Textbook | Presentation |
//! |--------------|----------|--------------|
//! | Process | Job / PCB | Process row |
//! | GanttSegment | CPU burst slice | Gantt bar |
//! | ProcessResult | Per-job statistics | Results table row |
//! | SimulationResult | Schedule | Chart + table |

mod process;
mod result;

pub use process::{Process, ProcessResult};
pub use result::{GanttSegment, SimulationResult};

//! Input validation for simulation requests.
//!
//! The policy engines assume well-formed input. This module checks it up
//! front and reports every problem found, not just the first:
//! - Empty process list
//! - Duplicate process IDs
//! - Negative arrival times
//! - Non-positive burst times
//! - Missing priorities while priority mode is on
//! - Non-positive Round Robin quantum

use std::collections::HashSet;
use std::fmt;

use crate::models::Process;
use crate::simulator::{Algorithm, SimulationRequest};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes to simulate.
    EmptyInput,
    /// Two processes share the same ID.
    DuplicateId,
    /// Arrival time is below zero.
    NegativeArrival,
    /// Burst time is zero or negative.
    NonPositiveBurst,
    /// Priority mode is on but a process has no priority.
    MissingPriority,
    /// Round Robin quantum is zero or negative.
    InvalidQuantum,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a process list.
///
/// Checks:
/// 1. At least one process
/// 2. No duplicate IDs
/// 3. arrival_time >= 0
/// 4. burst_time >= 1
/// 5. Every process has a priority when `require_priority` is set
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process], require_priority: bool) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "No processes to schedule",
        ));
    }

    let mut ids = HashSet::new();
    for p in processes {
        if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process '{}' has negative arrival time {}",
                    p.id, p.arrival_time
                ),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process '{}' has non-positive burst time {}",
                    p.id, p.burst_time
                ),
            ));
        }

        if require_priority && p.priority.is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingPriority,
                format!("Process '{}' has no priority", p.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a Round Robin quantum.
pub fn validate_quantum(quantum: i64) -> ValidationResult {
    if quantum >= 1 {
        Ok(())
    } else {
        Err(vec![ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            format!("Time quantum must be at least 1, got {quantum}"),
        )])
    }
}

/// Validates a full request: processes plus policy parameters.
///
/// Priorities are required when priority mode is enabled in the config.
pub fn validate_request(request: &SimulationRequest) -> ValidationResult {
    let mut errors = Vec::new();

    if let Err(mut errs) = validate_processes(&request.processes, request.config.use_priority) {
        errors.append(&mut errs);
    }

    // Priority mode may replace Round Robin, and then its quantum is unused
    if let Algorithm::RoundRobin { quantum } = request.config.effective_algorithm() {
        if let Err(mut errs) = validate_quantum(quantum) {
            errors.append(&mut errs);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors raised while preparing a simulation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// The workload description is malformed.
    #[error("invalid workload, record {record}: {reason}")]
    Parse {
        /// Zero based index of the `|` separated record.
        record: usize,
        reason: String,
    },

    /// Memory for the simulation state could not be reserved.
    #[error("failed to allocate {what}: {reason}")]
    Allocation { what: &'static str, reason: String },
}

impl SimulationError {
    pub(crate) fn parse(record: usize, reason: impl Into<String>) -> Self {
        SimulationError::Parse {
            record,
            reason: reason.into(),
        }
    }

    pub(crate) fn allocation(what: &'static str, err: TryReserveError) -> Self {
        SimulationError::Allocation {
            what,
            reason: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SimulationError>;

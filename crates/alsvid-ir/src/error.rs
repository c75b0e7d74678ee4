//! Error types for the IR crate.

use thiserror::Error;

/// Errors that can occur when assembling circuits.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Unit already present in the circuit.
    #[error("Unit {0} already present in circuit")]
    DuplicateUnit(String),

    /// Unit not found in the circuit.
    #[error("Unit {0} not found in circuit")]
    UnknownUnit(String),

    /// Qubit already has a readout bit assigned.
    #[error("Qubit {0} already has a readout bit")]
    ReadoutConflict(String),
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;

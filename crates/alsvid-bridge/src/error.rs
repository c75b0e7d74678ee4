//! Error types for identifier resolution.

use thiserror::Error;

/// Errors that can occur during identifier resolution.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BridgeError {
    /// A measurement operation addresses more than one qubit. Single-bit
    /// readout assignment is only defined for one-qubit measurements.
    #[error("measurement '{key}' addresses {qubits} qubits; expected exactly one")]
    MalformedMeasurement {
        /// The measurement key.
        key: String,
        /// Number of qubits the operation addresses.
        qubits: usize,
    },
}

/// Result type for bridge operations.
pub type BridgeResult<T> = Result<T, BridgeError>;

//! Alsvid Circuit Identifier Models
//!
//! This crate provides the data structures shared by the Alsvid identifier
//! bridge: two lightweight models of how circuit libraries address their
//! qubits and classical bits.
//!
//! # Overview
//!
//! Circuit construction libraries fall into two addressing styles:
//!
//! - **Device-addressed**: qubits are identified by where they sit on the
//!   hardware — a string label, a position on a line, or a (row, column)
//!   position on a grid. Measurement results are tagged with string keys.
//!   See [`DeviceQubit`] and [`DeviceCircuit`].
//! - **Register-addressed**: qubits and classical bits live in named
//!   registers and are identified by register name plus index. See
//!   [`Qubit`], [`Bit`] and [`Circuit`].
//!
//! Translating a circuit from one style to the other leaves the result with
//! auto-generated register labels. The `alsvid-bridge` crate aligns those
//! labels with the device layout; this crate only defines the types and the
//! canonical device qubit ordering that alignment relies on.
//!
//! # Example
//!
//! ```rust
//! use alsvid_ir::{Circuit, DeviceCircuit, DeviceOp, DeviceQubit, Qubit};
//!
//! // A device circuit addressed by line position.
//! let mut device = DeviceCircuit::new();
//! device.push(DeviceOp::gate("h", [DeviceQubit::Line(1)]));
//! device.push(DeviceOp::gate("cx", [DeviceQubit::Line(1), DeviceQubit::Line(0)]));
//!
//! // Its qubit set, in the canonical default order.
//! assert_eq!(
//!     device.sorted_qubits(),
//!     vec![DeviceQubit::Line(0), DeviceQubit::Line(1)],
//! );
//!
//! // The register-addressed counterpart.
//! let mut circuit = Circuit::new("bell");
//! circuit.add_qubit(Qubit::line("q", 0)).unwrap();
//! circuit.add_qubit(Qubit::line("q", 1)).unwrap();
//! assert_eq!(circuit.qubits().len(), 2);
//! ```

pub mod circuit;
pub mod device;
pub mod error;
pub mod unit;

pub use circuit::Circuit;
pub use device::{DeviceCircuit, DeviceOp, DeviceOpKind, DeviceQubit};
pub use error::{IrError, IrResult};
pub use unit::{Bit, Qubit, QubitIndex};

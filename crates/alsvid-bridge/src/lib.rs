//! Identifier alignment between device-addressed and register-addressed
//! circuits.
//!
//! Translating a device-addressed circuit into a register-addressed one
//! leaves the result with auto-generated unit labels: qubits land in a
//! default register and readout bits get default names. Before the caller
//! can re-label those units to match the device's semantic layout, it needs
//! to know which register units correspond to which device qubits — in the
//! device circuit's canonical qubit order.
//!
//! [`default_uids`] computes exactly that: the register circuit's bits and
//! qubits, each listed in the canonical order of the device qubits they
//! correspond to. Feeding the result into
//! [`Circuit::rename_units`](alsvid_ir::Circuit::rename_units) completes the
//! re-labeling.
//!
//! # Example
//!
//! ```rust
//! use alsvid_bridge::default_uids;
//! use alsvid_ir::{Bit, Circuit, DeviceCircuit, DeviceOp, DeviceQubit, Qubit};
//!
//! // Device circuit: gates touch line qubits 0 and 1, qubit 1 is measured.
//! let device = DeviceCircuit::from_ops([
//!     DeviceOp::gate("h", [DeviceQubit::Line(1)]),
//!     DeviceOp::gate("cx", [DeviceQubit::Line(1), DeviceQubit::Line(0)]),
//!     DeviceOp::measure("c[0]", [DeviceQubit::Line(1)]),
//! ]);
//!
//! // Translated register circuit, qubits in translation (program) order.
//! let mut circuit = Circuit::new("bell");
//! circuit.add_qubit(Qubit::line("q", 1)).unwrap();
//! circuit.add_qubit(Qubit::line("q", 0)).unwrap();
//! circuit.add_bit(Bit::new("c", 0)).unwrap();
//! circuit.set_readout(Qubit::line("q", 1), Bit::new("c", 0)).unwrap();
//!
//! let (bits, qubits) = default_uids(&device, &circuit).unwrap();
//! assert_eq!(qubits, vec![Qubit::line("q", 0), Qubit::line("q", 1)]);
//! assert_eq!(bits, vec![Bit::new("c", 0)]);
//! ```

pub mod error;
pub mod uids;

pub use error::{BridgeError, BridgeResult};
pub use uids::default_uids;

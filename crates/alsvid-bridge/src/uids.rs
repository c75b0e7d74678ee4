//! Default unit-id resolution.
//!
//! A freshly translated register circuit carries auto-generated unit labels.
//! Re-labeling it to match the device circuit's semantic layout needs the
//! register units listed in the device circuit's canonical qubit order;
//! [`default_uids`] computes those lists.

use alsvid_ir::{Bit, Circuit, DeviceCircuit, DeviceQubit, Qubit, QubitIndex};
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::error::{BridgeError, BridgeResult};

/// Resolve the register circuit's default unit ids against the device
/// circuit's canonical qubit order.
///
/// Returns `(bits, qubits)`: the register circuit's readout bits and qubits,
/// each listed in the order of the device qubits they correspond to. A
/// device qubit with no counterpart contributes nothing; one with several
/// counterparts contributes all of them, in register-list order. If the
/// register circuit has no readout at all there is nothing to align, and its
/// qubit list is returned in its existing order.
///
/// # Errors
///
/// Returns [`BridgeError::MalformedMeasurement`] if a measurement operation
/// addresses more than one qubit; no lists are produced on that path.
pub fn default_uids(
    device: &DeviceCircuit,
    circuit: &Circuit,
) -> BridgeResult<(Vec<Bit>, Vec<Qubit>)> {
    // No readout, nothing to reorder.
    if circuit.qubit_readout().is_empty() {
        return Ok((vec![], circuit.qubits().to_vec()));
    }

    let ordered = device.sorted_qubits();
    debug!(
        device_qubits = ordered.len(),
        register_qubits = circuit.qubits().len(),
        readout = circuit.qubit_readout().len(),
        "resolving default unit ids"
    );

    let mut qubits = Vec::with_capacity(circuit.qubits().len());
    for dq in &ordered {
        qubits.extend(
            circuit
                .qubits()
                .iter()
                .filter(|qb| matches_unit(dq, qb))
                .cloned(),
        );
    }

    // Inverted readout map (bit→qubit), keyed by the bit's string form. A
    // bit several qubits read out into collapses to one entry; distinct bits
    // sharing a string form stay in readout creation order, so resolution is
    // deterministic.
    let mut bits_by_key: FxHashMap<String, Vec<&Bit>> = FxHashMap::default();
    for (_, bit) in circuit.qubit_readout() {
        let entry = bits_by_key.entry(bit.to_string()).or_default();
        if !entry.contains(&bit) {
            entry.push(bit);
        }
    }

    let mut bits = Vec::with_capacity(circuit.qubit_readout().len());
    for dq in &ordered {
        for (measured, key) in device.measurements() {
            if measured.len() > 1 {
                return Err(BridgeError::MalformedMeasurement {
                    key: key.to_string(),
                    qubits: measured.len(),
                });
            }
            if measured.first() == Some(dq) {
                if let Some(found) = bits_by_key.get(key) {
                    trace!(qubit = %dq, key, matches = found.len(), "matched readout bits");
                    bits.extend(found.iter().copied().cloned());
                }
            }
        }
    }

    Ok((bits, qubits))
}

/// Kind-specific correspondence between a device qubit and a register qubit.
///
/// Named device qubits match on register name, line qubits on the single
/// register index, grid qubits on the (row, column) pair.
fn matches_unit(device: &DeviceQubit, qubit: &Qubit) -> bool {
    match device {
        DeviceQubit::Named(name) => qubit.register == *name,
        DeviceQubit::Line(x) => qubit.index == QubitIndex::Line(*x),
        DeviceQubit::Grid { row, col } => qubit.index == QubitIndex::Grid(*row, *col),
    }
}

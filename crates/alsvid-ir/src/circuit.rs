//! Register-addressed circuit container.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::unit::{Bit, Qubit};

/// A register-addressed circuit.
///
/// Only the identifier layout is modeled: the ordered qubit list, the bit
/// list, and the qubit→bit readout mapping. Gate content belongs to the
/// translation collaborators, not to identifier resolution.
///
/// Readout pairs are stored in insertion order, which is the bits' creation
/// order during translation. Consumers that look bits up by string form rely
/// on that order staying stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Qubits in the circuit, in creation order.
    qubits: Vec<Qubit>,
    /// Classical bits in the circuit, in creation order.
    bits: Vec<Bit>,
    /// Readout pairs, in bit creation order.
    readout: Vec<(Qubit, Bit)>,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a qubit to the circuit.
    pub fn add_qubit(&mut self, qubit: Qubit) -> IrResult<()> {
        if self.qubits.contains(&qubit) {
            return Err(IrError::DuplicateUnit(qubit.to_string()));
        }
        self.qubits.push(qubit);
        Ok(())
    }

    /// Add a classical bit to the circuit.
    pub fn add_bit(&mut self, bit: Bit) -> IrResult<()> {
        if self.bits.contains(&bit) {
            return Err(IrError::DuplicateUnit(bit.to_string()));
        }
        self.bits.push(bit);
        Ok(())
    }

    /// Record that `qubit` is measured into `bit`.
    ///
    /// Both units must already be in the circuit, and a qubit can be read
    /// out at most once.
    pub fn set_readout(&mut self, qubit: Qubit, bit: Bit) -> IrResult<()> {
        if !self.qubits.contains(&qubit) {
            return Err(IrError::UnknownUnit(qubit.to_string()));
        }
        if !self.bits.contains(&bit) {
            return Err(IrError::UnknownUnit(bit.to_string()));
        }
        if self.readout.iter().any(|(qb, _)| *qb == qubit) {
            return Err(IrError::ReadoutConflict(qubit.to_string()));
        }
        self.readout.push((qubit, bit));
        Ok(())
    }

    /// Circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Qubits in creation order.
    pub fn qubits(&self) -> &[Qubit] {
        &self.qubits
    }

    /// Classical bits in creation order.
    pub fn bits(&self) -> &[Bit] {
        &self.bits
    }

    /// Readout pairs in bit creation order.
    pub fn qubit_readout(&self) -> &[(Qubit, Bit)] {
        &self.readout
    }

    /// The bit a qubit is read out into, if any.
    pub fn readout_of(&self, qubit: &Qubit) -> Option<&Bit> {
        self.readout
            .iter()
            .find(|(qb, _)| qb == qubit)
            .map(|(_, bit)| bit)
    }

    /// Rename units throughout the circuit.
    ///
    /// Units absent from the maps are left unchanged. The caller is
    /// responsible for supplying collision-free targets; renames are applied
    /// mechanically.
    pub fn rename_units(
        &mut self,
        qubit_map: &FxHashMap<Qubit, Qubit>,
        bit_map: &FxHashMap<Bit, Bit>,
    ) {
        for qb in &mut self.qubits {
            if let Some(new) = qubit_map.get(qb) {
                *qb = new.clone();
            }
        }
        for bit in &mut self.bits {
            if let Some(new) = bit_map.get(bit) {
                *bit = new.clone();
            }
        }
        for (qb, bit) in &mut self.readout {
            if let Some(new) = qubit_map.get(qb) {
                *qb = new.clone();
            }
            if let Some(new) = bit_map.get(bit) {
                *bit = new.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_qubit_circuit() -> Circuit {
        let mut circ = Circuit::new("test");
        circ.add_qubit(Qubit::line("q", 0)).unwrap();
        circ.add_qubit(Qubit::line("q", 1)).unwrap();
        circ.add_bit(Bit::new("c", 0)).unwrap();
        circ
    }

    #[test]
    fn test_add_duplicate_qubit() {
        let mut circ = two_qubit_circuit();
        assert!(matches!(
            circ.add_qubit(Qubit::line("q", 0)),
            Err(IrError::DuplicateUnit(_))
        ));
    }

    #[test]
    fn test_readout_requires_known_units() {
        let mut circ = two_qubit_circuit();
        assert!(matches!(
            circ.set_readout(Qubit::line("q", 9), Bit::new("c", 0)),
            Err(IrError::UnknownUnit(_))
        ));
        assert!(matches!(
            circ.set_readout(Qubit::line("q", 0), Bit::new("c", 9)),
            Err(IrError::UnknownUnit(_))
        ));
    }

    #[test]
    fn test_readout_conflict() {
        let mut circ = two_qubit_circuit();
        circ.add_bit(Bit::new("c", 1)).unwrap();
        circ.set_readout(Qubit::line("q", 0), Bit::new("c", 0))
            .unwrap();
        assert!(matches!(
            circ.set_readout(Qubit::line("q", 0), Bit::new("c", 1)),
            Err(IrError::ReadoutConflict(_))
        ));
    }

    #[test]
    fn test_readout_of() {
        let mut circ = two_qubit_circuit();
        assert_eq!(circ.name(), "test");
        circ.set_readout(Qubit::line("q", 1), Bit::new("c", 0))
            .unwrap();
        assert_eq!(
            circ.readout_of(&Qubit::line("q", 1)),
            Some(&Bit::new("c", 0))
        );
        assert_eq!(circ.readout_of(&Qubit::line("q", 0)), None);
    }

    #[test]
    fn test_rename_units() {
        let mut circ = two_qubit_circuit();
        circ.set_readout(Qubit::line("q", 0), Bit::new("c", 0))
            .unwrap();

        let mut qubit_map = FxHashMap::default();
        qubit_map.insert(Qubit::line("q", 0), Qubit::named("alice"));
        let mut bit_map = FxHashMap::default();
        bit_map.insert(Bit::new("c", 0), Bit::new("m", 0));

        circ.rename_units(&qubit_map, &bit_map);
        assert_eq!(circ.qubits()[0], Qubit::named("alice"));
        assert_eq!(circ.qubits()[1], Qubit::line("q", 1)); // unmapped, unchanged
        assert_eq!(circ.bits()[0], Bit::new("m", 0));
        assert_eq!(
            circ.qubit_readout(),
            &[(Qubit::named("alice"), Bit::new("m", 0))]
        );
    }
}

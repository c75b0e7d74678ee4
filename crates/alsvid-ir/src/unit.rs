//! Register-addressed qubit and bit types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a qubit within its register.
///
/// Circuits translated from line-addressed devices carry a single index per
/// qubit; circuits translated from grid-addressed devices carry a
/// (row, column) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QubitIndex {
    /// A single index within the register.
    Line(i64),
    /// A (row, column) pair within the register.
    Grid(i64, i64),
}

/// A register-addressed qubit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Qubit {
    /// The name of the register this qubit belongs to.
    pub register: String,
    /// The index within the register.
    pub index: QubitIndex,
}

impl Qubit {
    /// Create a qubit with a single register index.
    pub fn line(register: impl Into<String>, index: i64) -> Self {
        Self {
            register: register.into(),
            index: QubitIndex::Line(index),
        }
    }

    /// Create a qubit with a (row, column) register index.
    pub fn grid(register: impl Into<String>, row: i64, col: i64) -> Self {
        Self {
            register: register.into(),
            index: QubitIndex::Grid(row, col),
        }
    }

    /// Create a qubit in its own single-slot register.
    ///
    /// Used when translating named device qubits: the device label becomes
    /// the register name and the index is zero.
    pub fn named(register: impl Into<String>) -> Self {
        Self::line(register, 0)
    }
}

impl fmt::Display for Qubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            QubitIndex::Line(i) => write!(f, "{}[{i}]", self.register),
            QubitIndex::Grid(r, c) => write!(f, "{}[{r}, {c}]", self.register),
        }
    }
}

/// A register-addressed classical bit.
///
/// The `Display` form (`register[index]`) is the bit's string identity;
/// measurement keys are matched against it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bit {
    /// The name of the register this bit belongs to.
    pub register: String,
    /// The index within the register.
    pub index: i64,
}

impl Bit {
    /// Create a new classical bit.
    pub fn new(register: impl Into<String>, index: i64) -> Self {
        Self {
            register: register.into(),
            index,
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.register, self.index)
    }
}

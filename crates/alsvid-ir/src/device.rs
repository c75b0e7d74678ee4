//! Device-addressed circuit model.
//!
//! Device qubits are identified by where they sit on the hardware: a string
//! label, a position on a line, or a (row, column) position on a grid. A
//! circuit is a flat, program-order list of operations; its qubit set is
//! whatever the operations touch.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

/// A device-addressed qubit.
///
/// One addressing kind is expected per circuit. Mixed kinds are not
/// diagnosed, but the ordering stays total across kinds so sorting never
/// panics on such input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceQubit {
    /// A qubit identified by a string label.
    Named(String),
    /// A qubit identified by its position on a line.
    Line(i64),
    /// A qubit identified by its (row, column) position on a grid.
    Grid {
        /// Row coordinate.
        row: i64,
        /// Column coordinate.
        col: i64,
    },
}

impl DeviceQubit {
    fn kind_rank(&self) -> u8 {
        match self {
            DeviceQubit::Named(_) => 0,
            DeviceQubit::Line(_) => 1,
            DeviceQubit::Grid { .. } => 2,
        }
    }
}

impl Ord for DeviceQubit {
    /// The canonical default qubit order: ascending natural order for named
    /// qubits (digit runs compare numerically, so `q2` sorts before `q10`),
    /// ascending index for line qubits, row-major ascending for grid qubits.
    fn cmp(&self, other: &Self) -> Ordering {
        use DeviceQubit::{Grid, Line, Named};
        match (self, other) {
            // Tie-break naturally-equal labels ("q01" vs "q1") bytewise to
            // keep cmp consistent with Eq.
            (Named(a), Named(b)) => natural_cmp(a, b).then_with(|| a.cmp(b)),
            (Line(a), Line(b)) => a.cmp(b),
            (
                Grid { row: r1, col: c1 },
                Grid { row: r2, col: c2 },
            ) => (r1, c1).cmp(&(r2, c2)),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }
}

impl PartialOrd for DeviceQubit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for DeviceQubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceQubit::Named(name) => write!(f, "{name}"),
            DeviceQubit::Line(x) => write!(f, "q({x})"),
            DeviceQubit::Grid { row, col } => write!(f, "q({row}, {col})"),
        }
    }
}

/// Compare two labels with digit runs ordered numerically.
fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut ai = a.chars().peekable();
    let mut bi = b.chars().peekable();
    loop {
        match (ai.peek().copied(), bi.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let xs = take_digits(&mut ai);
                let ys = take_digits(&mut bi);
                let xt = xs.trim_start_matches('0');
                let yt = ys.trim_start_matches('0');
                let ord = xt.len().cmp(&yt.len()).then_with(|| xt.cmp(yt));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(x), Some(y)) => {
                let ord = x.cmp(&y);
                if ord != Ordering::Equal {
                    return ord;
                }
                ai.next();
                bi.next();
            }
        }
    }
}

fn take_digits(it: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut out = String::new();
    while let Some(c) = it.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        out.push(c);
        it.next();
    }
    out
}

/// The kind of device operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceOpKind {
    /// An opaque gate, identified by name only. Gate translation is the
    /// concern of the translation collaborators, not of this crate.
    Gate {
        /// Gate name as the device library spells it.
        name: String,
    },
    /// A measurement, tagged with the key that names its result.
    Measure {
        /// Measurement key string.
        key: String,
    },
}

/// A device operation with its qubit operands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceOp {
    /// The kind of operation.
    pub kind: DeviceOpKind,
    /// Qubits this operation acts on.
    pub qubits: Vec<DeviceQubit>,
}

impl DeviceOp {
    /// Create a gate operation.
    pub fn gate(name: impl Into<String>, qubits: impl IntoIterator<Item = DeviceQubit>) -> Self {
        Self {
            kind: DeviceOpKind::Gate { name: name.into() },
            qubits: qubits.into_iter().collect(),
        }
    }

    /// Create a measurement operation.
    ///
    /// A measurement is representable with any number of qubits; whether
    /// that is acceptable is decided by the consumer (single-bit readout
    /// assignment requires exactly one).
    pub fn measure(key: impl Into<String>, qubits: impl IntoIterator<Item = DeviceQubit>) -> Self {
        Self {
            kind: DeviceOpKind::Measure { key: key.into() },
            qubits: qubits.into_iter().collect(),
        }
    }

}

/// A device-addressed circuit: operations in program order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceCircuit {
    ops: Vec<DeviceOp>,
}

impl DeviceCircuit {
    /// Create a new empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a circuit from a list of operations.
    pub fn from_ops(ops: impl IntoIterator<Item = DeviceOp>) -> Self {
        Self {
            ops: ops.into_iter().collect(),
        }
    }

    /// Append an operation.
    pub fn push(&mut self, op: DeviceOp) {
        self.ops.push(op);
    }

    /// Operations in program order.
    pub fn ops(&self) -> &[DeviceOp] {
        &self.ops
    }

    /// The set of qubits touched by any operation.
    pub fn all_qubits(&self) -> BTreeSet<DeviceQubit> {
        self.ops
            .iter()
            .flat_map(|op| op.qubits.iter().cloned())
            .collect()
    }

    /// All qubits in the canonical default order.
    pub fn sorted_qubits(&self) -> Vec<DeviceQubit> {
        self.all_qubits().into_iter().collect()
    }

    /// Measurement operations in program order, as (qubits, key) pairs.
    pub fn measurements(&self) -> impl Iterator<Item = (&[DeviceQubit], &str)> {
        self.ops.iter().filter_map(|op| match &op.kind {
            DeviceOpKind::Measure { key } => Some((op.qubits.as_slice(), key.as_str())),
            DeviceOpKind::Gate { .. } => None,
        })
    }
}

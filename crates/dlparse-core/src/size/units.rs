//! Unit conversion table for byte sizes.

use serde::{Deserialize, Serialize};

/// Multiplier between successive size units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitBase {
    /// 1 KB = 1024 bytes, as file hosters usually mean it.
    #[default]
    Binary,
    /// 1 KB = 1000 bytes.
    Decimal,
}

impl UnitBase {
    fn factor(self) -> f64 {
        match self {
            UnitBase::Binary => 1024.0,
            UnitBase::Decimal => 1000.0,
        }
    }
}

/// Prefix letters in ascending order; `b` is the byte itself.
const PREFIXES: [char; 7] = ['b', 'k', 'm', 'g', 't', 'p', 'e'];

/// Maps a unit symbol to its size in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnitTable {
    base: UnitBase,
}

impl UnitTable {
    pub fn new(base: UnitBase) -> Self {
        Self { base }
    }

    pub fn base(&self) -> UnitBase {
        self.base
    }

    /// Bytes per unit. Only the first letter counts ("MB", "mib", "Megabyte"
    /// are all megabytes); an empty unit is a byte. Unknown letters give `None`.
    pub fn bytes_per(&self, unit: &str) -> Option<f64> {
        let Some(first) = unit.trim().chars().next() else {
            return Some(1.0);
        };
        let first = first.to_ascii_lowercase();
        let exp = PREFIXES.iter().position(|p| *p == first)?;
        Some(self.base.factor().powi(exp as i32))
    }
}

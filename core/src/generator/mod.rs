use serde::{Deserialize, Serialize};

use crate::*;
pub use random::*;

mod random;

pub trait TicketGenerator {
    fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Ticket;
}

/// Whether every column has to hold at least one number.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnCoverage {
    /// Columns may stay empty, rows are laid out independently.
    #[default]
    Loose,
    /// Traditional rule: each column holds 1 to 3 numbers.
    EveryColumn,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationPolicy {
    /// Draws allowed per cell before a repeated value is kept.
    pub max_attempts: u16,
    pub coverage: ColumnCoverage,
    /// Row layouts drawn under [`ColumnCoverage::EveryColumn`] before empty columns are filled by moving cells.
    pub max_layout_attempts: u16,
}

impl GenerationPolicy {
    pub const DEFAULT_MAX_ATTEMPTS: u16 = 100;
    pub const DEFAULT_MAX_LAYOUT_ATTEMPTS: u16 = 100;
}

impl Default for GenerationPolicy {
    fn default() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            coverage: ColumnCoverage::Loose,
            max_layout_attempts: Self::DEFAULT_MAX_LAYOUT_ATTEMPTS,
        }
    }
}

#![no_std]

extern crate alloc;

use alloc::string::String;
use serde::{Deserialize, Serialize};

pub use announce::*;
pub use error::*;
pub use generator::*;
pub use marks::*;
pub use pool::*;
pub use random::*;
pub use session::*;
pub use snapshot::*;
pub use ticket::*;
pub use types::*;

mod announce;
mod error;
mod generator;
mod marks;
mod pool;
mod random;
mod session;
mod snapshot;
mod ticket;
mod types;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub generation: GenerationPolicy,
    /// Tickets dealt when the caller does not ask for a specific count.
    pub ticket_count: usize,
    /// Used in spoken announcements only.
    pub player_name: Option<String>,
}

impl SessionConfig {
    pub fn validate(&self) -> Result<()> {
        if self.ticket_count == 0 {
            return Err(GameError::InvalidTicketCount);
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            generation: GenerationPolicy::default(),
            ticket_count: 1,
            player_name: None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    Drawn(Number),
    /// Nothing left to draw, the game is now complete.
    Exhausted,
}

impl DrawOutcome {
    pub const fn number(self) -> Option<Number> {
        match self {
            Self::Drawn(number) => Some(number),
            Self::Exhausted => None,
        }
    }
}

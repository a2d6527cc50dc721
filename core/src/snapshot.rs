use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// How a ticket cell should be shown, marking wins over being called.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Empty,
    Plain(Number),
    Called(Number),
    Marked(Number),
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub tickets: usize,
    pub called: usize,
    pub marked: usize,
    pub left: usize,
    /// Share of the pool drawn, rounded to the nearest percent.
    pub progress_percent: u8,
}

impl Stats {
    pub fn new(tickets: usize, called: usize, marked: usize) -> Self {
        let pool = usize::from(POOL_SIZE);
        let called = called.min(pool);
        let progress_percent = ((called * 100 + pool / 2) / pool) as u8;
        Self {
            tickets,
            called,
            marked,
            left: pool - called,
            progress_percent,
        }
    }
}

/// Owned copy of everything a presentation layer may show.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub tickets: Vec<Ticket>,
    pub drawn: Vec<Number>,
    pub marked: Vec<Number>,
    pub current_number: Option<Number>,
    pub stats: Stats,
}

use alloc::collections::BTreeSet;
use serde::{Deserialize, Serialize};

use crate::*;

/// Outcome of toggling a mark.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkChange {
    Marked,
    Unmarked,
}

/// Numbers the player flagged by hand, whether drawn or not.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkState {
    marked: BTreeSet<Number>,
}

impl MarkState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, number: Number) -> Result<MarkChange> {
        if !is_valid_number(number) {
            return Err(GameError::InvalidNumber(number));
        }

        Ok(if self.marked.remove(&number) {
            MarkChange::Unmarked
        } else {
            self.marked.insert(number);
            MarkChange::Marked
        })
    }

    pub fn reset(&mut self) {
        self.marked.clear();
    }

    pub fn is_marked(&self, number: Number) -> bool {
        self.marked.contains(&number)
    }

    pub fn len(&self) -> usize {
        self.marked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marked.is_empty()
    }

    /// Marked numbers, ascending.
    pub fn iter(&self) -> impl Iterator<Item = Number> + '_ {
        self.marked.iter().copied()
    }
}

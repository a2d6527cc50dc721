use thiserror::Error;

use crate::Number;

/// Reason a grid is not a valid ticket.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum TicketDefect {
    #[error("row {row} holds {count} numbers instead of 5")]
    RowCount { row: usize, count: usize },
    #[error("{number} does not belong in column {col}")]
    OutOfColumnRange { number: Number, col: usize },
    #[error("column {col} is not ascending from top to bottom")]
    ColumnNotAscending { col: usize },
    #[error("{number} appears more than once")]
    DuplicateNumber { number: Number },
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("All numbers have been drawn")]
    PoolExhausted,
    #[error("No tickets to play with, generate tickets first")]
    NoTicketsAvailable,
    #[error("Ticket count must be at least 1")]
    InvalidTicketCount,
    #[error("Number {0} is outside 1..=90")]
    InvalidNumber(Number),
    #[error("Ticket grid must be 3x9")]
    InvalidTicketShape,
    #[error("Drawn and remaining numbers do not split 1..=90")]
    InconsistentPool,
    #[error("Invalid ticket: {0}")]
    InvalidTicket(#[from] TicketDefect),
}

pub type Result<T> = core::result::Result<T, GameError>;

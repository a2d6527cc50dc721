use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// A 3x9 Tambola ticket.
///
/// Tickets coming out of a [`TicketGenerator`] or [`Ticket::from_rows`] are never
/// mutated afterwards. Marking happens in [`MarkState`], not here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTicket")]
pub struct Ticket {
    grid: Array2<Option<Number>>,
    duplicate_fallbacks: u8,
}

/// Unchecked wire form of a [`Ticket`].
#[derive(Deserialize)]
struct RawTicket {
    grid: Array2<Option<Number>>,
    #[serde(default)]
    duplicate_fallbacks: u8,
}

impl TryFrom<RawTicket> for Ticket {
    type Error = GameError;

    fn try_from(raw: RawTicket) -> Result<Self> {
        if raw.grid.dim() != (ROWS, COLUMNS) {
            return Err(GameError::InvalidTicketShape);
        }
        let ticket = Self {
            grid: raw.grid,
            duplicate_fallbacks: raw.duplicate_fallbacks,
        };
        if ticket.is_degraded() {
            // repeated values are expected, the layout still has to hold
            ticket.validate_layout()?;
        } else {
            ticket.validate()?;
        }
        Ok(ticket)
    }
}

impl Ticket {
    /// Builds a ticket from explicit rows, rejecting anything that breaks the ticket rules.
    pub fn from_rows(rows: [[Option<Number>; COLUMNS]; ROWS]) -> Result<Self> {
        let mut grid = Array2::from_elem((ROWS, COLUMNS), None);
        for (row, cells) in rows.iter().enumerate() {
            for (col, &value) in cells.iter().enumerate() {
                grid[(row, col).to_nd_index()] = value;
            }
        }
        Self::from_grid(grid)
    }

    pub fn from_grid(grid: Array2<Option<Number>>) -> Result<Self> {
        if grid.dim() != (ROWS, COLUMNS) {
            return Err(GameError::InvalidTicketShape);
        }
        let ticket = Self {
            grid,
            duplicate_fallbacks: 0,
        };
        ticket.validate()?;
        Ok(ticket)
    }

    /// Generator output, may carry duplicates it already counted.
    pub(crate) fn from_generated(grid: Array2<Option<Number>>, duplicate_fallbacks: u8) -> Self {
        debug_assert_eq!(grid.dim(), (ROWS, COLUMNS));
        Self {
            grid,
            duplicate_fallbacks,
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.validate_layout()?;

        let mut seen: u128 = 0;
        for &number in self.grid.iter().flatten() {
            let bit = 1u128 << number;
            if seen & bit != 0 {
                return Err(TicketDefect::DuplicateNumber { number }.into());
            }
            seen |= bit;
        }

        for col in 0..COLUMNS {
            let mut previous = None;
            for number in self.column(col) {
                if previous.is_some_and(|prev| prev >= number) {
                    return Err(TicketDefect::ColumnNotAscending { col }.into());
                }
                previous = Some(number);
            }
        }

        Ok(())
    }

    /// Row counts and column bands only.
    fn validate_layout(&self) -> Result<()> {
        for row in 0..ROWS {
            let count = self.row(row).iter().flatten().count();
            if count != NUMBERS_PER_ROW {
                return Err(TicketDefect::RowCount { row, count }.into());
            }
        }

        for ((_, col), &value) in self.grid.indexed_iter() {
            let Some(number) = value else { continue };
            if !COLUMN_RANGES[col].contains(number) {
                return Err(TicketDefect::OutOfColumnRange { number, col }.into());
            }
        }

        Ok(())
    }

    pub fn cell(&self, cell: Cell) -> Option<Number> {
        self.grid.get(cell.to_nd_index()).copied().flatten()
    }

    pub fn row(&self, row: usize) -> [Option<Number>; COLUMNS] {
        let mut cells = [None; COLUMNS];
        for (col, slot) in cells.iter_mut().enumerate() {
            *slot = self.grid[(row, col).to_nd_index()];
        }
        cells
    }

    pub fn rows(&self) -> impl Iterator<Item = [Option<Number>; COLUMNS]> + '_ {
        (0..ROWS).map(|row| self.row(row))
    }

    /// Filled values of a column, top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = Number> + '_ {
        self.grid.column(col).into_iter().flatten().copied()
    }

    /// Filled values in row-major order.
    pub fn numbers(&self) -> impl Iterator<Item = Number> + '_ {
        self.grid.iter().flatten().copied()
    }

    pub fn contains(&self, number: Number) -> bool {
        self.numbers().any(|n| n == number)
    }

    /// Position of `number` on this ticket.
    pub fn position_of(&self, number: Number) -> Option<Cell> {
        let col = column_of(number)?;
        (0..ROWS)
            .map(|row| (row, col))
            .find(|&cell| self.cell(cell) == Some(number))
    }

    /// Cells where the generator ran out of retries and kept a repeated value.
    pub fn duplicate_fallbacks(&self) -> u8 {
        self.duplicate_fallbacks
    }

    pub fn is_degraded(&self) -> bool {
        self.duplicate_fallbacks > 0
    }
}

impl Index<Cell> for Ticket {
    type Output = Option<Number>;

    fn index(&self, cell: Cell) -> &Self::Output {
        &self.grid[cell.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    const SAMPLE: [[Option<Number>; COLUMNS]; ROWS] = [
        [Some(4), None, Some(23), None, Some(41), None, Some(62), None, Some(85)],
        [None, Some(12), Some(27), Some(33), None, Some(56), None, Some(74), None],
        [Some(9), Some(19), None, Some(38), None, Some(59), None, Some(80), None],
    ];

    fn with(mut rows: [[Option<Number>; COLUMNS]; ROWS], cell: Cell, value: Option<Number>) -> [[Option<Number>; COLUMNS]; ROWS] {
        rows[cell.0][cell.1] = value;
        rows
    }

    #[test]
    fn sample_ticket_is_valid() {
        let ticket = Ticket::from_rows(SAMPLE).unwrap();

        assert_eq!(ticket.numbers().count(), NUMBERS_PER_TICKET);
        assert_eq!(ticket[(1, 3)], Some(33));
        assert_eq!(ticket.position_of(80), Some((2, 7)));
        assert_eq!(ticket.position_of(81), None);
        assert!(ticket.contains(41));
        assert!(!ticket.is_degraded());
    }

    #[test]
    fn rejects_short_row() {
        let rows = with(SAMPLE, (0, 0), None);

        assert_eq!(
            Ticket::from_rows(rows),
            Err(GameError::InvalidTicket(TicketDefect::RowCount { row: 0, count: 4 }))
        );
    }

    #[test]
    fn rejects_number_outside_column() {
        let rows = with(SAMPLE, (0, 0), Some(11));

        assert_eq!(
            Ticket::from_rows(rows),
            Err(GameError::InvalidTicket(TicketDefect::OutOfColumnRange { number: 11, col: 0 }))
        );
    }

    #[test]
    fn rejects_descending_column() {
        let rows = with(SAMPLE, (0, 0), Some(10));

        assert_eq!(
            Ticket::from_rows(rows),
            Err(GameError::InvalidTicket(TicketDefect::ColumnNotAscending { col: 0 }))
        );
    }

    #[test]
    fn rejects_repeated_number() {
        let rows = with(SAMPLE, (0, 0), Some(9));

        assert_eq!(
            Ticket::from_rows(rows),
            Err(GameError::InvalidTicket(TicketDefect::DuplicateNumber { number: 9 }))
        );
    }

    #[test]
    fn deserialize_rejects_wrong_shape() {
        let row = [Some(1), None, Some(11), None, Some(21), None, Some(31), None, Some(41)];
        let data: alloc::vec::Vec<_> = row.iter().chain(row.iter()).copied().collect();
        let json = serde_json::json!({
            "grid": { "v": 1, "dim": [2, COLUMNS], "data": data },
            "duplicate_fallbacks": 0,
        });

        let err = serde_json::from_value::<Ticket>(json).unwrap_err();

        assert!(err.to_string().contains("Ticket grid must be 3x9"), "{err}");
    }

    #[test]
    fn deserialize_rejects_numbers_outside_columns() {
        let mut grid = Ticket::from_rows(SAMPLE).unwrap().grid;
        grid[[0, 0]] = Some(99);
        let json = serde_json::to_value(Ticket::from_generated(grid, 0)).unwrap();

        let err = serde_json::from_value::<Ticket>(json).unwrap_err();

        assert!(err.to_string().contains("99 does not belong in column 0"), "{err}");
    }

    #[test]
    fn serde_round_trip_keeps_valid_tickets() {
        let ticket = Ticket::from_rows(SAMPLE).unwrap();

        let json = serde_json::to_value(&ticket).unwrap();
        let restored: Ticket = serde_json::from_value(json).unwrap();

        assert_eq!(restored, ticket);
    }

    #[test]
    fn degraded_ticket_survives_deserialize_but_not_layout_breaks() {
        let mut grid = Ticket::from_rows(SAMPLE).unwrap().grid;
        grid[[2, 0]] = Some(4);
        let degraded = Ticket::from_generated(grid.clone(), 1);

        let json = serde_json::to_value(&degraded).unwrap();
        assert_eq!(serde_json::from_value::<Ticket>(json).unwrap(), degraded);

        let clean = Ticket::from_generated(grid, 0);
        let json = serde_json::to_value(&clean).unwrap();
        assert!(serde_json::from_value::<Ticket>(json).is_err());
    }

    #[test]
    fn rejects_wrong_shape() {
        let grid = Array2::from_elem((2, COLUMNS), None);

        assert_eq!(Ticket::from_grid(grid), Err(GameError::InvalidTicketShape));
    }
}

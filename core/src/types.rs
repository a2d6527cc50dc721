use serde::{Deserialize, Serialize};

/// A ball number, always in `1..=POOL_SIZE` once validated.
pub type Number = u8;

/// Highest number in the pool, also the pool size.
pub const POOL_SIZE: Number = 90;

/// Ticket rows.
pub const ROWS: usize = 3;

/// Ticket columns, one per [`ColumnRange`].
pub const COLUMNS: usize = 9;

/// Filled cells per ticket row.
pub const NUMBERS_PER_ROW: usize = 5;

/// Filled cells per ticket.
pub const NUMBERS_PER_TICKET: usize = ROWS * NUMBERS_PER_ROW;

/// Inclusive band of numbers a ticket column may hold.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRange {
    pub min: Number,
    pub max: Number,
}

impl ColumnRange {
    pub const fn new(min: Number, max: Number) -> Self {
        Self { min, max }
    }

    pub const fn contains(self, number: Number) -> bool {
        self.min <= number && number <= self.max
    }

    pub const fn width(self) -> usize {
        (self.max - self.min) as usize + 1
    }
}

/// Column bands: (1,10), (11,20), ..., (81,90).
pub const COLUMN_RANGES: [ColumnRange; COLUMNS] = [
    ColumnRange::new(1, 10),
    ColumnRange::new(11, 20),
    ColumnRange::new(21, 30),
    ColumnRange::new(31, 40),
    ColumnRange::new(41, 50),
    ColumnRange::new(51, 60),
    ColumnRange::new(61, 70),
    ColumnRange::new(71, 80),
    ColumnRange::new(81, 90),
];

pub const fn is_valid_number(number: Number) -> bool {
    1 <= number && number <= POOL_SIZE
}

/// Column a number belongs to, `None` outside the pool.
pub const fn column_of(number: Number) -> Option<usize> {
    if !is_valid_number(number) {
        return None;
    }
    // 10 goes to column 0, 90 to column 8
    let col = (number as usize - 1) / 10;
    Some(col)
}

/// `(row, column)` position inside a ticket.
pub type Cell = (usize, usize);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Cell {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0, self.1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_ranges_tile_the_pool() {
        let mut expected_min = 1;
        for range in COLUMN_RANGES {
            assert_eq!(range.min, expected_min);
            assert_eq!(range.width(), 10);
            expected_min = range.max + 1;
        }
        assert_eq!(expected_min - 1, POOL_SIZE);
    }

    #[test]
    fn column_of_matches_ranges() {
        for number in 1..=POOL_SIZE {
            let col = column_of(number).unwrap();
            assert!(COLUMN_RANGES[col].contains(number), "{number} not in column {col}");
        }
        assert_eq!(column_of(0), None);
        assert_eq!(column_of(91), None);
        assert_eq!(column_of(10), Some(0));
        assert_eq!(column_of(81), Some(8));
    }
}

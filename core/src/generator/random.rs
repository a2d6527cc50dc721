use ndarray::Array2;
use smallvec::SmallVec;

use super::*;

/// Columns picked for one row, ascending.
type RowColumns = SmallVec<[usize; NUMBERS_PER_ROW]>;

type Layout = [RowColumns; ROWS];

/// Generation strategy that picks five random columns per row, then fills each picked cell with a random number of
/// that column's band, retrying values already used in the column.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RandomTicketGenerator {
    policy: GenerationPolicy,
}

impl RandomTicketGenerator {
    pub fn new(policy: GenerationPolicy) -> Self {
        Self { policy }
    }

    fn max_attempts(&self) -> u16 {
        self.policy.max_attempts.max(1)
    }

    fn max_layout_attempts(&self) -> u16 {
        self.policy.max_layout_attempts.max(1)
    }

    fn choose_layout<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Layout {
        let mut layout = choose_rows(rng);
        if self.policy.coverage == ColumnCoverage::Loose {
            return layout;
        }

        for _ in 1..self.max_layout_attempts() {
            if uncovered_column(&layout).is_none() {
                return layout;
            }
            layout = choose_rows(rng);
        }

        if uncovered_column(&layout).is_some() {
            log::debug!(
                "No covering layout after {} draws, repairing",
                self.max_layout_attempts()
            );
            cover_all_columns(&mut layout);
        }
        layout
    }

    /// Returns the number and whether it was unused in its column.
    fn draw_for_column<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
        range: ColumnRange,
        used: u16,
    ) -> (Number, bool) {
        let mut attempts = 0;
        loop {
            let candidate = rng.next_number(range.min, range.max);
            attempts += 1;
            let fresh = used & (1 << (candidate - range.min)) == 0;
            if fresh || attempts >= self.max_attempts() {
                return (candidate, fresh);
            }
        }
    }
}

impl TicketGenerator for RandomTicketGenerator {
    fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Ticket {
        let layout = self.choose_layout(rng);

        let mut grid: Array2<Option<Number>> = Array2::from_elem((ROWS, COLUMNS), None);
        // bit i set when range.min + i is taken
        let mut used = [0u16; COLUMNS];
        let mut duplicate_fallbacks = 0;

        for (row, columns) in layout.iter().enumerate() {
            for &col in columns {
                let range = COLUMN_RANGES[col];
                let (number, fresh) = self.draw_for_column(rng, range, used[col]);
                if !fresh {
                    log::warn!(
                        "Column {} ran out of attempts, kept repeated {} after {} draws",
                        col,
                        number,
                        self.max_attempts()
                    );
                    duplicate_fallbacks += 1;
                }
                used[col] |= 1 << (number - range.min);
                grid[(row, col).to_nd_index()] = Some(number);
            }
        }

        // rows keep their cells, values ascend down each column
        for col in 0..COLUMNS {
            let occupied: SmallVec<[usize; ROWS]> = (0..ROWS)
                .filter(|&row| grid[(row, col).to_nd_index()].is_some())
                .collect();
            let mut values: SmallVec<[Number; ROWS]> =
                grid.column(col).iter().flatten().copied().collect();
            values.sort_unstable();

            for (row, value) in occupied.into_iter().zip(values) {
                grid[(row, col).to_nd_index()] = Some(value);
            }
        }

        Ticket::from_generated(grid, duplicate_fallbacks)
    }
}

fn choose_rows<R: RandomSource + ?Sized>(rng: &mut R) -> Layout {
    core::array::from_fn(|_| choose_row(rng))
}

fn choose_row<R: RandomSource + ?Sized>(rng: &mut R) -> RowColumns {
    let mut columns = RowColumns::new();
    while columns.len() < NUMBERS_PER_ROW {
        let col = rng.next_index(COLUMNS);
        if !columns.contains(&col) {
            columns.push(col);
        }
    }
    columns.sort_unstable();
    columns
}

fn column_usage(layout: &Layout) -> [u8; COLUMNS] {
    let mut usage = [0; COLUMNS];
    for &col in layout.iter().flatten() {
        usage[col] += 1;
    }
    usage
}

fn uncovered_column(layout: &Layout) -> Option<usize> {
    column_usage(layout).iter().position(|&count| count == 0)
}

/// Moves cells out of columns used more than once into empty columns until every column is used.
///
/// 15 cells over 9 columns, so an empty column always leaves some other column with two or more.
fn cover_all_columns(layout: &mut Layout) {
    while let Some(empty) = uncovered_column(layout) {
        let usage = column_usage(layout);
        let Some((row, slot)) = layout.iter().enumerate().find_map(|(row, columns)| {
            columns
                .iter()
                .position(|&col| usage[col] > 1)
                .map(|slot| (row, slot))
        }) else {
            break;
        };
        layout[row][slot] = empty;
        layout[row].sort_unstable();
    }
}

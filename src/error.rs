use core::fmt;

use displaydoc::Display;

use crate::line::Line;

#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum Error<T: fmt::Display> {
    /// Invalid problem without any supply or demand points
    Empty,
    /// Cost matrix is {rows}x{columns}, expected {expected_rows}x{expected_columns}
    ShapeMismatch {
        rows: usize,
        columns: usize,
        expected_rows: usize,
        expected_columns: usize,
    },
    /// Invalid quantity {value} at {line}, expected a non-negative value
    NegativeQuantity { line: Line, value: T },
    /// Unbalanced problem: total supply {supply} != total demand {demand}
    Imbalance { supply: T, demand: T },
    /// Likely degenerate problem: {positive_cells} positive cost cells, expected at least {required}
    LikelyDegenerate {
        positive_cells: usize,
        required: usize,
    },
    /// Arithmetic overflow: {what} does not fit the amount type
    Overflow { what: &'static str },
    /// Allocation violates {line}: expected {expected}, allocated {actual}
    Conservation { line: Line, expected: T, actual: T },
}

impl<T: fmt::Debug + fmt::Display> core::error::Error for Error<T> {}

use alloc::vec::Vec;
use core::cmp::Reverse;

use itertools::Itertools;

use crate::algo::{Heuristic, Method, Tableau};
use crate::amount::Amount;
use crate::penalty::{open, VogelPenalties};

/// Vogel's approximation method.
///
/// Every iteration serves the row or column with the largest penalty (the gap between its two
/// cheapest open cells) through its cheapest open cell. Rows win ties against columns, and lower
/// indices win ties within rows, columns and cells.
#[derive(Copy, Clone, Debug, Default)]
pub struct Vogel;

impl Vogel {
    fn select<T: Amount>(costs: &[Vec<T>], supply: &[T], demand: &[T]) -> Option<(usize, usize)> {
        let penalties = VogelPenalties::compute(costs, supply, demand);

        // first line with the largest penalty
        let row = penalties.rows.iter().position_min_by_key(|p| Reverse(**p))?;
        let column = penalties
            .columns
            .iter()
            .position_min_by_key(|p| Reverse(**p))?;
        let (row_penalty, column_penalty) = (penalties.rows[row], penalties.columns[column]);
        if !row_penalty.is_open() && !column_penalty.is_open() {
            return None;
        }
        log::debug!(
            "row {row} penalty {row_penalty:?}, column {column} penalty {column_penalty:?}"
        );

        if row_penalty >= column_penalty {
            let j = open(demand).min_by_key(|&j| costs[row][j])?;
            Some((row, j))
        } else {
            let i = open(supply).min_by_key(|&i| costs[i][column])?;
            Some((i, column))
        }
    }
}

impl Heuristic for Vogel {
    fn method(&self) -> Method {
        Method::Vogel
    }

    fn allocate<T: Amount>(&self, tableau: &mut Tableau<'_, T>) {
        while let Some((i, j)) = Self::select(tableau.costs, &tableau.supply, &tableau.demand) {
            tableau.ship(i, j);
        }
    }
}

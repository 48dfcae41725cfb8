use alloc::vec::Vec;

use crate::algo::{Heuristic, Method, Tableau};
use crate::amount::Amount;
use crate::penalty::{open, RussellMaxima};

/// Russell's approximation method.
///
/// Every iteration ships through the open cell with the most negative reduced cost
/// `C[i][j] - (rowMax[i] + colMax[j])`, taking the first one in row-major order on ties.
#[derive(Copy, Clone, Debug, Default)]
pub struct Russell;

impl Russell {
    fn select<T: Amount>(costs: &[Vec<T>], supply: &[T], demand: &[T]) -> Option<(usize, usize)> {
        let maxima = RussellMaxima::compute(costs, supply, demand);

        let (i, j, delta) = open(supply)
            .flat_map(|i| open(demand).map(move |j| (i, j)))
            .filter_map(|(i, j)| maxima.reduced_cost(costs, i, j).map(|delta| (i, j, delta)))
            .min_by_key(|(_, _, delta)| *delta)?;
        log::debug!("cell ({i}, {j}) reduced cost {delta}");

        Some((i, j))
    }
}

impl Heuristic for Russell {
    fn method(&self) -> Method {
        Method::Russell
    }

    fn allocate<T: Amount>(&self, tableau: &mut Tableau<'_, T>) {
        while let Some((i, j)) = Self::select(tableau.costs, &tableau.supply, &tableau.demand) {
            tableau.ship(i, j);
        }
    }
}

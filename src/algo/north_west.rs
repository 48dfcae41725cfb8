use crate::algo::{Heuristic, Method, Tableau};
use crate::amount::Amount;

/// Fills the tableau from the top-left cell towards the bottom-right one, ignoring costs.
#[derive(Copy, Clone, Debug, Default)]
pub struct NorthWestCorner;

impl Heuristic for NorthWestCorner {
    fn method(&self) -> Method {
        Method::NorthWestCorner
    }

    fn allocate<T: Amount>(&self, tableau: &mut Tableau<'_, T>) {
        let (m, n) = tableau.shape();
        let (mut i, mut j) = (0, 0);

        while i < m && j < n {
            tableau.ship(i, j);

            // both cursors may move when supply and demand run out together
            let row_closed = tableau.supply[i].is_zero();
            let column_closed = tableau.demand[j].is_zero();
            if row_closed {
                i += 1;
            }
            if column_closed {
                j += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::problem::TransportProblem;

    #[test]
    fn staircase() {
        let problem = TransportProblem::new(
            vec![7, 9, 18],
            vec![5, 8, 7, 14],
            vec![
                vec![19, 30, 50, 10],
                vec![70, 30, 40, 60],
                vec![40, 8, 70, 20],
            ],
        );
        let allocation = NorthWestCorner.solve(&problem).unwrap();
        assert_eq!(
            allocation.into_rows(),
            vec![vec![5, 2, 0, 0], vec![0, 6, 3, 0], vec![0, 0, 4, 14]]
        );
    }

    #[test]
    fn simultaneous_exhaustion_moves_diagonally() {
        let problem = TransportProblem::new(
            vec![4, 6],
            vec![4, 6],
            vec![vec![1, 1], vec![1, 1]],
        );
        let allocation = NorthWestCorner.solve(&problem).unwrap();
        assert_eq!(allocation.into_rows(), vec![vec![4, 0], vec![0, 6]]);
    }

    #[test]
    fn zero_supply_row_is_skipped() {
        let problem = TransportProblem::new(
            vec![0, 5, 3],
            vec![2, 6],
            vec![vec![1, 1], vec![1, 1], vec![1, 1]],
        );
        let allocation = NorthWestCorner.solve(&problem).unwrap();
        assert_eq!(
            allocation.into_rows(),
            vec![vec![0, 0], vec![2, 3], vec![0, 3]]
        );
    }
}

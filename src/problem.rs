use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::error::Error;
use crate::line::Line;

/// A transportation problem: supply per source, demand per destination and the unit cost of
/// shipping from every source to every destination.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct TransportProblem<T> {
    pub supply: Vec<T>,
    pub demand: Vec<T>,
    pub costs: Vec<Vec<T>>,
}

impl<T: Amount> TransportProblem<T> {
    pub fn new(supply: Vec<T>, demand: Vec<T>, costs: Vec<Vec<T>>) -> Self {
        Self {
            supply,
            demand,
            costs,
        }
    }

    pub fn sources(&self) -> usize {
        self.supply.len()
    }

    pub fn destinations(&self) -> usize {
        self.demand.len()
    }

    /// Total supply, or `None` if it overflows `T`.
    pub fn total_supply(&self) -> Option<T> {
        checked_total(&self.supply)
    }

    /// Total demand, or `None` if it overflows `T`.
    pub fn total_demand(&self) -> Option<T> {
        checked_total(&self.demand)
    }

    pub fn is_balanced(&self) -> bool {
        let supply = self.total_supply();
        supply.is_some() && supply == self.total_demand()
    }

    /// Number of basic cells a non-degenerate basic feasible solution has (`m + n - 1`).
    pub fn basis_size(&self) -> usize {
        (self.sources() + self.destinations()).saturating_sub(1)
    }
}

/// What to do when the problem looks degenerate before allocation starts.
///
/// The check counts strictly positive *cost* cells against `m + n - 1`. This is only a proxy;
/// the actual degeneracy of a solution is reported by [`crate::Allocation::basis`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DegeneracyPolicy {
    Ignore,
    #[default]
    Warn,
    Reject,
}

/// Structural and balance checks run before any allocation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Validator {
    pub degeneracy: DegeneracyPolicy,
}

impl Validator {
    pub fn with_degeneracy(mut self, policy: DegeneracyPolicy) -> Self {
        self.degeneracy = policy;
        self
    }

    pub fn validate<T: Amount>(&self, problem: &TransportProblem<T>) -> Result<(), Error<T>> {
        let (m, n) = (problem.sources(), problem.destinations());
        if m == 0 || n == 0 {
            return Err(Error::Empty);
        }

        let ragged = problem.costs.iter().find(|row| row.len() != n);
        if problem.costs.len() != m || ragged.is_some() {
            return Err(Error::ShapeMismatch {
                rows: problem.costs.len(),
                columns: ragged.map_or(n, |row| row.len()),
                expected_rows: m,
                expected_columns: n,
            });
        }

        let quantities = problem
            .supply
            .iter()
            .enumerate()
            .map(|(i, s)| (Line::Row(i), *s))
            .chain(
                problem
                    .demand
                    .iter()
                    .enumerate()
                    .map(|(j, d)| (Line::Column(j), *d)),
            );
        for (line, value) in quantities {
            if value < T::zero() {
                return Err(Error::NegativeQuantity { line, value });
            }
        }

        let supply = problem
            .total_supply()
            .ok_or(Error::<T>::Overflow { what: "total supply" })?;
        let demand = problem
            .total_demand()
            .ok_or(Error::<T>::Overflow { what: "total demand" })?;
        if supply != demand {
            return Err(Error::Imbalance { supply, demand });
        }

        check_ranges(&problem.costs, supply)?;

        if self.degeneracy != DegeneracyPolicy::Ignore {
            let positive_cells = problem
                .costs
                .iter()
                .flatten()
                .filter(|c| **c > T::zero())
                .count();
            let required = problem.basis_size();
            if positive_cells < required {
                if self.degeneracy == DegeneracyPolicy::Reject {
                    return Err(Error::LikelyDegenerate {
                        positive_cells,
                        required,
                    });
                }
                log::warn!(
                    "problem may be degenerate: {positive_cells} positive cost cells, \
                     {required} basic cells needed"
                );
            }
        }

        Ok(())
    }
}

fn checked_total<T: Amount>(values: &[T]) -> Option<T> {
    values
        .iter()
        .try_fold(T::zero(), |total, value| total.checked_add(value))
}

/// Bounds every intermediate value the heuristics and the cost accounting derive from `costs`
/// and the shipped `total`, so that none of them can overflow `T` once allocation has started.
fn check_ranges<T: Amount>(costs: &[Vec<T>], total: T) -> Result<(), Error<T>> {
    let cells = costs.iter().flatten().copied();
    let (Some(low), Some(high)) = (cells.clone().min(), cells.max()) else {
        return Ok(());
    };
    let overflow = |what: &'static str| Error::<T>::Overflow { what };

    // Vogel penalties are differences of two costs
    high.checked_sub(&low).ok_or_else(|| overflow("penalty"))?;

    // Russell reduced costs are `c - (u + v)` with `u` and `v` row and column maxima
    low.checked_add(&low)
        .zip(high.checked_add(&high))
        .and_then(|(lowest, highest)| low.checked_sub(&highest).zip(high.checked_sub(&lowest)))
        .ok_or_else(|| overflow("reduced cost"))?;

    // every partial sum of `cost * quantity` lies between `low * total` and `high * total`
    low.checked_mul(&total)
        .zip(high.checked_mul(&total))
        .ok_or_else(|| overflow("total cost"))?;

    Ok(())
}

/// Validates `problem` with the default [`Validator`].
pub fn validate<T: Amount>(problem: &TransportProblem<T>) -> Result<(), Error<T>> {
    Validator::default().validate(problem)
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn sample() -> TransportProblem<i32> {
        TransportProblem::new(
            vec![7, 9, 18],
            vec![5, 8, 7, 14],
            vec![
                vec![19, 30, 50, 10],
                vec![70, 30, 40, 60],
                vec![40, 8, 70, 20],
            ],
        )
    }

    #[test]
    fn accepts_balanced_problem() {
        assert_eq!(validate(&sample()), Ok(()));
        assert_eq!(sample().basis_size(), 6);
    }

    #[test]
    fn rejects_empty_problem() {
        let problem = TransportProblem::<i32>::new(vec![], vec![1], vec![]);
        assert_eq!(validate(&problem), Err(Error::Empty));
    }

    #[test]
    fn rejects_missing_cost_row() {
        let mut problem = sample();
        problem.costs.pop();
        assert_eq!(
            validate(&problem),
            Err(Error::ShapeMismatch {
                rows: 2,
                columns: 4,
                expected_rows: 3,
                expected_columns: 4,
            })
        );
    }

    #[test]
    fn rejects_ragged_cost_row() {
        let mut problem = sample();
        problem.costs[1].push(1);
        assert_eq!(
            validate(&problem),
            Err(Error::ShapeMismatch {
                rows: 3,
                columns: 5,
                expected_rows: 3,
                expected_columns: 4,
            })
        );
    }

    #[test]
    fn rejects_negative_demand() {
        let problem = TransportProblem::new(vec![3], vec![5, -2], vec![vec![1, 1]]);
        assert_eq!(
            validate(&problem),
            Err(Error::NegativeQuantity {
                line: Line::Column(1),
                value: -2,
            })
        );
    }

    #[test]
    fn rejects_unbalanced_problem() {
        let mut problem = sample();
        problem.supply[0] += 1;
        assert_eq!(
            validate(&problem),
            Err(Error::Imbalance {
                supply: 35,
                demand: 34,
            })
        );
    }

    #[test]
    fn rejects_overflowing_totals() {
        let problem = TransportProblem::new(
            vec![i32::MAX, 1],
            vec![1, 1],
            vec![vec![1, 1], vec![1, 1]],
        );
        assert_eq!(problem.total_supply(), None);
        assert!(!problem.is_balanced());
        assert_eq!(
            validate(&problem),
            Err(Error::Overflow {
                what: "total supply"
            })
        );
    }

    #[test]
    fn rejects_costs_whose_reduced_costs_overflow() {
        let problem = TransportProblem::new(
            vec![1, 1],
            vec![1, 1],
            vec![vec![1_200_000_000; 2]; 2],
        );
        assert_eq!(
            validate(&problem),
            Err(Error::Overflow {
                what: "reduced cost"
            })
        );

        // the same instance fits comfortably in i64
        let wide = TransportProblem::new(
            vec![1i64, 1],
            vec![1, 1],
            vec![vec![1_200_000_000; 2]; 2],
        );
        assert_eq!(validate(&wide), Ok(()));
    }

    #[test]
    fn rejects_costs_whose_total_overflows() {
        let problem = TransportProblem::new(
            vec![3_000_000],
            vec![3_000_000],
            vec![vec![1_000]],
        );
        assert_eq!(
            validate(&problem),
            Err(Error::Overflow { what: "total cost" })
        );
    }

    #[test]
    fn rejects_penalties_that_overflow() {
        let problem = TransportProblem::new(
            vec![1],
            vec![1, 0],
            vec![vec![i32::MIN, i32::MAX]],
        );
        assert_eq!(validate(&problem), Err(Error::Overflow { what: "penalty" }));
    }

    #[test]
    fn degeneracy_policy() {
        let problem = TransportProblem::new(
            vec![5, 5],
            vec![5, 5],
            vec![vec![0, 3], vec![0, 0]],
        );
        assert_eq!(validate(&problem), Ok(()));
        assert_eq!(
            Validator::default().with_degeneracy(DegeneracyPolicy::Ignore).validate(&problem),
            Ok(())
        );
        assert_eq!(
            Validator::default().with_degeneracy(DegeneracyPolicy::Reject).validate(&problem),
            Err(Error::LikelyDegenerate {
                positive_cells: 1,
                required: 3,
            })
        );
    }
}

//! Row and column scores that drive the cost-aware heuristics.
//!
//! Both scores are rebuilt from the current (partially consumed) supply and demand on every
//! call; nothing is carried over between iterations.

use alloc::vec::Vec;

use crate::amount::Amount;

/// Vogel penalty of a row or column.
///
/// Variants are ordered so that the maximum penalty is the line to serve next: a closed line is
/// never preferred, and a line with a single open cell always is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Penalty<T> {
    /// Supply or demand of the line is exhausted.
    Closed,
    /// Difference between the two cheapest open cells.
    Spread(T),
    /// Only one open cell is left.
    Unbounded,
}

impl<T: Amount> Penalty<T> {
    fn from_costs(costs: impl Iterator<Item = T>) -> Self {
        let (first, second) = costs.fold((None, None), |(first, second), c| match first {
            Some(f) if c >= f => (first, Some(second.map_or(c, |s: T| s.min(c)))),
            _ => (Some(c), first),
        });
        match (first, second) {
            // a spread too wide for `T` still outranks every representable one
            (Some(f), Some(s)) => s.checked_sub(&f).map_or(Self::Unbounded, Self::Spread),
            (Some(_), None) => Self::Unbounded,
            _ => Self::Closed,
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VogelPenalties<T> {
    pub rows: Vec<Penalty<T>>,
    pub columns: Vec<Penalty<T>>,
}

impl<T: Amount> VogelPenalties<T> {
    pub fn compute(costs: &[Vec<T>], supply: &[T], demand: &[T]) -> Self {
        let rows = supply
            .iter()
            .enumerate()
            .map(|(i, s)| {
                if s.is_zero() {
                    return Penalty::Closed;
                }
                Penalty::from_costs(open(demand).map(|j| costs[i][j]))
            })
            .collect();

        let columns = demand
            .iter()
            .enumerate()
            .map(|(j, d)| {
                if d.is_zero() {
                    return Penalty::Closed;
                }
                Penalty::from_costs(open(supply).map(|i| costs[i][j]))
            })
            .collect();

        Self { rows, columns }
    }
}

/// Maximum open cost of every row and column, as used by Russell's method.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RussellMaxima<T> {
    pub rows: Vec<Option<T>>,
    pub columns: Vec<Option<T>>,
}

impl<T: Amount> RussellMaxima<T> {
    pub fn compute(costs: &[Vec<T>], supply: &[T], demand: &[T]) -> Self {
        let rows = supply
            .iter()
            .enumerate()
            .map(|(i, s)| {
                (!s.is_zero())
                    .then(|| open(demand).map(|j| costs[i][j]).max())
                    .flatten()
            })
            .collect();

        let columns = demand
            .iter()
            .enumerate()
            .map(|(j, d)| {
                (!d.is_zero())
                    .then(|| open(supply).map(|i| costs[i][j]).max())
                    .flatten()
            })
            .collect();

        Self { rows, columns }
    }

    /// `C[i][j] - (rowMax[i] + colMax[j])`, or `None` if the cell's row or column is exhausted
    /// or the value does not fit `T`. Validated problems never hit the latter.
    pub fn reduced_cost(&self, costs: &[Vec<T>], i: usize, j: usize) -> Option<T> {
        let (u, v) = (self.rows[i]?, self.columns[j]?);
        u.checked_add(&v).and_then(|sum| costs[i][j].checked_sub(&sum))
    }
}

/// Indices of the lines that still have something to ship or receive.
pub(crate) fn open<T: Amount>(quantities: &[T]) -> impl Iterator<Item = usize> + '_ {
    quantities
        .iter()
        .enumerate()
        .filter(|(_, q)| **q > T::zero())
        .map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn costs() -> Vec<Vec<i32>> {
        vec![
            vec![19, 30, 50, 10],
            vec![70, 30, 40, 60],
            vec![40, 8, 70, 20],
        ]
    }

    #[test]
    fn penalty_order() {
        assert!(Penalty::Closed < Penalty::Spread(0));
        assert!(Penalty::Spread(0) < Penalty::Spread(i32::MAX));
        assert!(Penalty::Spread(i32::MAX) < Penalty::Unbounded);
    }

    #[test]
    fn vogel_initial_penalties() {
        let p = VogelPenalties::compute(&costs(), &[7, 9, 18], &[5, 8, 7, 14]);
        assert_eq!(
            p.rows,
            vec![Penalty::Spread(9), Penalty::Spread(10), Penalty::Spread(12)]
        );
        assert_eq!(
            p.columns,
            vec![
                Penalty::Spread(21),
                Penalty::Spread(22),
                Penalty::Spread(10),
                Penalty::Spread(10)
            ]
        );
    }

    #[test]
    fn vogel_closed_and_unbounded_lines() {
        let p = VogelPenalties::compute(&costs(), &[0, 9, 0], &[0, 0, 7, 2]);
        assert_eq!(
            p.rows,
            vec![Penalty::Closed, Penalty::Spread(20), Penalty::Closed]
        );
        assert_eq!(
            p.columns,
            vec![
                Penalty::Closed,
                Penalty::Closed,
                Penalty::Unbounded,
                Penalty::Unbounded
            ]
        );
    }

    #[test]
    fn vogel_repeated_minimum_has_zero_spread() {
        let p = VogelPenalties::compute(&[vec![4, 4, 9]], &[3], &[1, 1, 1]);
        assert_eq!(p.rows, vec![Penalty::Spread(0)]);
    }

    #[test]
    fn vogel_spread_wider_than_amount_is_unbounded() {
        let p = VogelPenalties::compute(&[vec![i32::MIN, i32::MAX]], &[1], &[1, 1]);
        assert_eq!(p.rows, vec![Penalty::Unbounded]);
    }

    #[test]
    fn russell_maxima_and_reduced_costs() {
        let c = costs();
        let r = RussellMaxima::compute(&c, &[7, 9, 18], &[5, 8, 7, 14]);
        assert_eq!(r.rows, vec![Some(50), Some(70), Some(70)]);
        assert_eq!(r.columns, vec![Some(70), Some(30), Some(70), Some(60)]);
        assert_eq!(r.reduced_cost(&c, 2, 3), Some(-110));
        assert_eq!(r.reduced_cost(&c, 0, 0), Some(-101));
    }

    #[test]
    fn russell_exhausted_lines_are_ineligible() {
        let c = costs();
        let r = RussellMaxima::compute(&c, &[2, 9, 0], &[0, 4, 7, 0]);
        assert_eq!(r.rows, vec![Some(50), Some(40), None]);
        assert_eq!(r.columns, vec![None, Some(30), Some(50), None]);
        assert_eq!(r.reduced_cost(&c, 2, 1), None);
        assert_eq!(r.reduced_cost(&c, 0, 3), None);
        assert_eq!(r.reduced_cost(&c, 1, 2), Some(-50));
    }

    #[test]
    fn russell_reduced_cost_out_of_range() {
        let c = vec![vec![1_200_000_000; 2]; 2];
        let r = RussellMaxima::compute(&c, &[1, 1], &[1, 1]);
        assert_eq!(r.rows, vec![Some(1_200_000_000); 2]);
        assert_eq!(r.reduced_cost(&c, 0, 0), None);
    }
}

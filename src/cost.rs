use alloc::vec::Vec;
use core::fmt;

use itertools::Itertools;

use crate::allocation::Allocation;
use crate::amount::Amount;
use crate::error::Error;

/// One `cost * quantity` contribution to the total transportation cost.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Term<T> {
    pub row: usize,
    pub column: usize,
    pub cost: T,
    pub quantity: T,
}

impl<T: Amount> Term<T> {
    /// `cost * quantity`, or `None` if it overflows `T`.
    pub fn value(&self) -> Option<T> {
        self.cost.checked_mul(&self.quantity)
    }
}

impl<T: Amount> fmt::Display for Term<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} * {}", self.cost, self.quantity)
    }
}

/// Total cost of an allocation along with its additive breakdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CostBreakdown<T> {
    pub total: T,
    pub terms: Vec<Term<T>>,
}

impl<T: Amount> CostBreakdown<T> {
    pub fn from_allocation(
        costs: &[Vec<T>],
        allocation: &Allocation<T>,
    ) -> Result<Self, Error<T>> {
        let terms: Vec<_> = allocation
            .positive_cells()
            .map(|(row, column, quantity)| Term {
                row,
                column,
                cost: costs[row][column],
                quantity,
            })
            .collect();
        let total = terms
            .iter()
            .try_fold(T::zero(), |acc, term| acc.checked_add(&term.value()?))
            .ok_or(Error::<T>::Overflow { what: "total cost" })?;

        Ok(Self { total, terms })
    }
}

/// Renders as `c1 * x1 + c2 * x2 + ... = total`.
impl<T: Amount> fmt::Display for CostBreakdown<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "{}", T::zero());
        }
        write!(f, "{} = {}", self.terms.iter().join(" + "), self.total)
    }
}

pub fn total_cost<T: Amount>(
    costs: &[Vec<T>],
    allocation: &Allocation<T>,
) -> Result<T, Error<T>> {
    allocation
        .positive_cells()
        .try_fold(T::zero(), |acc, (i, j, q)| acc.checked_add(&costs[i][j].checked_mul(&q)?))
        .ok_or(Error::Overflow { what: "total cost" })
}

//! Initial basic feasible solutions for balanced transportation problems.
//!
//! Given the supply of `m` sources, the demand of `n` destinations and an `m×n` unit-cost
//! matrix, the heuristics in [`algo`] produce an allocation that ships every unit of supply
//! and meets every demand:
//!
//! - [`NorthWestCorner`] fills the tableau from the top-left corner and ignores costs.
//! - [`Vogel`] serves the row or column with the largest penalty first.
//! - [`Russell`] ships through the cell with the most negative reduced cost first.
//!
//! None of them improve the allocation further; they only provide a starting point.

#![no_std]
#![deny(
    warnings,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod algo;
mod allocation;
mod amount;
mod cost;
mod error;
mod line;
pub mod penalty;
mod problem;

use alloc::vec::Vec;

pub use crate::algo::{Heuristic, Method, NorthWestCorner, Russell, Tableau, Vogel};
pub use crate::allocation::{Allocation, Basis};
pub use crate::amount::Amount;
pub use crate::cost::{total_cost, CostBreakdown, Term};
pub use crate::error::Error;
pub use crate::line::Line;
pub use crate::penalty::Penalty;
pub use crate::problem::{validate, DegeneracyPolicy, TransportProblem, Validator};

/// The outcome of running one heuristic: its allocation and what it costs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution<T> {
    pub method: Method,
    pub allocation: Allocation<T>,
    pub cost: CostBreakdown<T>,
}

pub fn solve<T: Amount>(
    problem: &TransportProblem<T>,
    method: Method,
    validator: &Validator,
) -> Result<Solution<T>, Error<T>> {
    let allocation = method.solve_with(problem, validator)?;
    let cost = CostBreakdown::from_allocation(&problem.costs, &allocation)?;

    log::info!("----------------------------------");
    log::info!("         Method = {method}");
    log::info!("    Basic cells = {}", cost.terms.len());
    log::info!("     Total cost = {}", cost.total);

    Ok(Solution {
        method,
        allocation,
        cost,
    })
}

/// Runs every heuristic on the same problem, in [`Method::ALL`] order.
pub fn solve_all<T: Amount>(
    problem: &TransportProblem<T>,
    validator: &Validator,
) -> Result<Vec<Solution<T>>, Error<T>> {
    Method::ALL
        .into_iter()
        .map(|method| solve(problem, method, validator))
        .collect()
}

/// Checks that each solution ships exactly the supply and demand of `problem`.
pub fn check<T: Amount>(
    problem: &TransportProblem<T>,
    solutions: &[Solution<T>],
) -> Result<(), Error<T>> {
    solutions.iter().try_for_each(|solution| {
        solution.allocation.check(problem)?;
        log::debug!(
            "{}: {} = {}",
            solution.method,
            solution.cost,
            total_cost(&problem.costs, &solution.allocation)?
        );
        Ok(())
    })
}

use alloc::vec::Vec;

use displaydoc::Display;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::allocation::Allocation;
use crate::amount::Amount;
use crate::error::Error;
use crate::problem::{TransportProblem, Validator};

pub mod north_west;
pub mod russell;
pub mod vogel;

pub use north_west::NorthWestCorner;
pub use russell::Russell;
pub use vogel::Vogel;

/// Working state of a single solve: the remaining supply and demand and the allocation so far.
///
/// A tableau can only be built from a problem that passed validation, so every heuristic runs on
/// a rectangular, balanced instance whose arithmetic fits `T`. Supply and demand are copied out
/// of the problem on construction and consumed as goods are shipped. The cost matrix is only ever
/// borrowed.
#[derive(Clone, Debug)]
pub struct Tableau<'a, T> {
    pub(crate) costs: &'a [Vec<T>],
    pub(crate) supply: Vec<T>,
    pub(crate) demand: Vec<T>,
    allocation: Allocation<T>,
}

impl<'a, T: Amount> Tableau<'a, T> {
    pub fn new(problem: &'a TransportProblem<T>, validator: &Validator) -> Result<Self, Error<T>> {
        validator.validate(problem)?;

        Ok(Self {
            costs: &problem.costs,
            supply: problem.supply.clone(),
            demand: problem.demand.clone(),
            allocation: Allocation::zeros(problem.sources(), problem.destinations()),
        })
    }

    pub fn costs(&self) -> &[Vec<T>] {
        self.costs
    }

    /// Supply still to be shipped from every source.
    pub fn supply(&self) -> &[T] {
        &self.supply
    }

    /// Demand still to be received by every destination.
    pub fn demand(&self) -> &[T] {
        &self.demand
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.supply.len(), self.demand.len())
    }

    /// Ships as much as possible from source `i` to destination `j`, closing at least one of
    /// them, and returns the shipped quantity.
    pub(crate) fn ship(&mut self, i: usize, j: usize) -> T {
        let quantity = self.supply[i].min(self.demand[j]);
        log::trace!("shipping {quantity} from source {i} to destination {j}");

        self.allocation.add(i, j, quantity);
        self.supply[i] -= quantity;
        self.demand[j] -= quantity;
        quantity
    }

    pub fn is_exhausted(&self) -> bool {
        self.supply.iter().all(Zero::is_zero) && self.demand.iter().all(Zero::is_zero)
    }

    pub fn into_allocation(self) -> Allocation<T> {
        self.allocation
    }
}

/// A strategy producing an initial feasible allocation.
pub trait Heuristic {
    fn method(&self) -> Method;

    /// Ships goods until every line of the tableau is closed.
    ///
    /// On return the tableau is exhausted and its allocation is a basic feasible solution.
    fn allocate<T: Amount>(&self, tableau: &mut Tableau<'_, T>);

    fn solve<T: Amount>(&self, problem: &TransportProblem<T>) -> Result<Allocation<T>, Error<T>> {
        self.solve_with(problem, &Validator::default())
    }

    fn solve_with<T: Amount>(
        &self,
        problem: &TransportProblem<T>,
        validator: &Validator,
    ) -> Result<Allocation<T>, Error<T>> {
        let mut tableau = Tableau::new(problem, validator)?;
        self.allocate(&mut tableau);
        debug_assert!(tableau.is_exhausted());

        let allocation = tableau.into_allocation();
        let basis = allocation.basis();
        if basis.is_degenerate() {
            log::warn!(
                "{}: degenerate solution with {} basic cells, expected {}",
                self.method(),
                basis.cells,
                basis.required
            );
        }
        log::debug!("{}: {} basic cells", self.method(), basis.cells);

        Ok(allocation)
    }
}

/// The available heuristics, selectable at runtime.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    /// North-West Corner method
    NorthWestCorner,
    /// Vogel's approximation method
    Vogel,
    /// Russell's approximation method
    Russell,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::NorthWestCorner, Method::Vogel, Method::Russell];
}

impl Heuristic for Method {
    fn method(&self) -> Method {
        *self
    }

    fn allocate<T: Amount>(&self, tableau: &mut Tableau<'_, T>) {
        match self {
            Method::NorthWestCorner => NorthWestCorner.allocate(tableau),
            Method::Vogel => Vogel.allocate(tableau),
            Method::Russell => Russell.allocate(tableau),
        }
    }
}

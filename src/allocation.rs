use alloc::vec;
use alloc::vec::Vec;
use core::ops::Index;

use petgraph::algo::{connected_components, is_cyclic_undirected};
use petgraph::graph::UnGraph;
use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::error::Error;
use crate::line::Line;
use crate::problem::TransportProblem;

/// The `m×n` matrix of quantities shipped from every source to every destination.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Allocation<T> {
    rows: Vec<Vec<T>>,
}

impl<T: Amount> Allocation<T> {
    pub fn zeros(sources: usize, destinations: usize) -> Self {
        Self {
            rows: vec![vec![T::zero(); destinations]; sources],
        }
    }

    pub fn sources(&self) -> usize {
        self.rows.len()
    }

    pub fn destinations(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn rows(&self) -> &[Vec<T>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.rows
    }

    pub(crate) fn add(&mut self, i: usize, j: usize, quantity: T) {
        self.rows[i][j] += quantity;
    }

    pub fn row_sums(&self) -> Vec<T> {
        self.rows.iter().map(|row| row.iter().copied().sum()).collect()
    }

    pub fn column_sums(&self) -> Vec<T> {
        (0..self.destinations())
            .map(|j| self.rows.iter().map(|row| row[j]).sum())
            .collect()
    }

    /// Cells with a strictly positive allocation, in row-major order.
    pub fn positive_cells(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        self.rows.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, q)| **q > T::zero())
                .map(move |(j, q)| (i, j, *q))
        })
    }

    /// Verifies that every row ships exactly its supply and every column receives exactly its
    /// demand.
    pub fn check(&self, problem: &TransportProblem<T>) -> Result<(), Error<T>> {
        let rows = self
            .row_sums()
            .into_iter()
            .zip(&problem.supply)
            .enumerate()
            .map(|(i, (actual, expected))| (Line::Row(i), *expected, actual));
        let columns = self
            .column_sums()
            .into_iter()
            .zip(&problem.demand)
            .enumerate()
            .map(|(j, (actual, expected))| (Line::Column(j), *expected, actual));

        match rows.chain(columns).find(|(_, e, a)| e != a) {
            Some((line, expected, actual)) => Err(Error::Conservation {
                line,
                expected,
                actual,
            }),
            None => Ok(()),
        }
    }

    /// Analyses the positive cells as edges of the bipartite source/destination graph.
    pub fn basis(&self) -> Basis {
        let (m, n) = (self.sources(), self.destinations());
        let mut graph = UnGraph::<Line, ()>::with_capacity(m + n, m + n);
        let sources: Vec<_> = (0..m).map(|i| graph.add_node(Line::Row(i))).collect();
        let destinations: Vec<_> = (0..n).map(|j| graph.add_node(Line::Column(j))).collect();

        let mut cells = 0;
        for (i, j, _) in self.positive_cells() {
            graph.add_edge(sources[i], destinations[j], ());
            cells += 1;
        }

        Basis {
            cells,
            required: (m + n).saturating_sub(1),
            components: connected_components(&graph),
            acyclic: !is_cyclic_undirected(&graph),
        }
    }
}

impl<T> Index<(usize, usize)> for Allocation<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.rows[i][j]
    }
}

/// Shape of the set of basic (positive) cells of an allocation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Basis {
    /// Number of positive cells.
    pub cells: usize,
    /// `m + n - 1`.
    pub required: usize,
    /// Connected components of the source/destination graph.
    pub components: usize,
    pub acyclic: bool,
}

impl Basis {
    pub fn is_degenerate(&self) -> bool {
        self.cells < self.required
    }

    pub fn is_spanning_tree(&self) -> bool {
        self.cells == self.required && self.components == 1 && self.acyclic
    }
}

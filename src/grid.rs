//! N×N site lattice with union-find connectivity to the top and bottom boundaries.
//!
//! Sites are addressed 1-indexed: `(1, 1)` is the upper-left corner, `(n, n)` the
//! lower-right. Each site maps to a fixed union-find label
//!
//! ```text
//! id(row, col) = (row - 1) * n + (col - 1) + 2
//! ```
//!
//! Labels 0 and 1 are reserved for two virtual nodes, [`TOP`] and [`BOTTOM`].
//! Every opened site in row 1 is joined to `TOP` and every opened site in row n
//! to `BOTTOM`, so "does some top site reach some bottom site" reduces to a single
//! `connected(TOP, BOTTOM)` query instead of O(n) per-site checks.

use std::fmt;

use log::trace;

use crate::error::{PercolationError, Result};
use crate::union_find::{UnionFind, WeightedQuickUnion};

/// Virtual node joined to every open site in the top row.
pub const TOP: usize = 0;
/// Virtual node joined to every open site in the bottom row.
pub const BOTTOM: usize = 1;
/// First label used by real sites.
const FIRST_SITE: usize = 2;

/// Number of sites (n²) in an N×N grid, checked against what can be stored.
///
/// The union-find needs n² + 2 `usize` labels; a side whose label array would
/// overflow `usize` or exceed `isize::MAX` bytes is rejected as `TooLarge`.
pub fn site_count(n: usize) -> Result<usize> {
    if n == 0 {
        return Err(PercolationError::InvalidArgument { name: "n", value: n });
    }
    n.checked_mul(n)
        .filter(|&sites| {
            sites
                .checked_add(FIRST_SITE)
                .and_then(|labels| labels.checked_mul(std::mem::size_of::<usize>()))
                .map_or(false, |bytes| bytes <= isize::MAX as usize)
        })
        .ok_or(PercolationError::TooLarge { n })
}

/// Open/closed state of an N×N lattice plus connectivity of its open sites.
///
/// Sites only ever go from closed to open. Two sites share a union-find class
/// iff a path of open, 4-adjacent sites joins them (directly or through a
/// virtual boundary node).
#[derive(Debug, Clone)]
pub struct ConnectivityGrid<U = WeightedQuickUnion> {
    n: usize,
    open: Vec<bool>,
    open_sites: usize,
    uf: U,
}

impl ConnectivityGrid<WeightedQuickUnion> {
    /// Create an N×N grid with every site closed.
    pub fn new(n: usize) -> Result<Self> {
        Self::with_union_find(n)
    }
}

impl<U: UnionFind> ConnectivityGrid<U> {
    /// Create an N×N grid backed by a caller-chosen union-find.
    pub fn with_union_find(n: usize) -> Result<Self> {
        let sites = site_count(n)?;
        Ok(Self {
            n,
            open: vec![false; sites],
            open_sites: 0,
            uf: U::with_len(sites + FIRST_SITE),
        })
    }

    /// Grid side length.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Number of distinct open sites.
    pub fn open_sites(&self) -> usize {
        self.open_sites
    }

    /// Open site `(row, col)` and join it to its open neighbours.
    ///
    /// Opening an already-open site leaves the state unchanged; the unions are
    /// repeated but have no further effect.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        let idx = self.index(row, col)?;
        if !self.open[idx] {
            self.open[idx] = true;
            self.open_sites += 1;
        }
        let id = idx + FIRST_SITE;
        trace!("open ({}, {}) label {}", row, col, id);

        if row == 1 {
            self.uf.union(id, TOP);
        }
        // Not `else`: with n = 1 the only row is both top and bottom
        if row == self.n {
            self.uf.union(id, BOTTOM);
        }

        let n = self.n;
        let neighbours = [
            (row > 1).then(|| (row - 1, col)),
            (row < n).then(|| (row + 1, col)),
            (col > 1).then(|| (row, col - 1)),
            (col < n).then(|| (row, col + 1)),
        ];
        for (r, c) in neighbours.into_iter().flatten() {
            let nidx = (r - 1) * n + (c - 1);
            if self.open[nidx] {
                self.uf.union(id, nidx + FIRST_SITE);
            }
        }
        Ok(())
    }

    /// Is site `(row, col)` open?
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        let idx = self.index(row, col)?;
        Ok(self.open[idx])
    }

    /// Is site `(row, col)` open and connected to the top row?
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool> {
        let idx = self.index(row, col)?;
        Ok(self.open[idx] && self.uf.connected(TOP, idx + FIRST_SITE))
    }

    /// Does an open path join the top row to the bottom row?
    pub fn percolates(&mut self) -> bool {
        self.uf.connected(TOP, BOTTOM)
    }

    /// Zero-based storage index of a 1-indexed site, or `OutOfRange`.
    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row < 1 || col < 1 || row > self.n || col > self.n {
            return Err(PercolationError::OutOfRange { row, col, n: self.n });
        }
        Ok((row - 1) * self.n + (col - 1))
    }
}

/// One line per row: `#` closed, `.` open, `~` full.
impl<U: UnionFind> fmt::Display for ConnectivityGrid<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let top = self.uf.root(TOP);
        for r in 0..self.n {
            for c in 0..self.n {
                let idx = r * self.n + c;
                let ch = if !self.open[idx] {
                    '#'
                } else if self.uf.root(idx + FIRST_SITE) == top {
                    '~'
                } else {
                    '.'
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

use crate::errors::{LabelingError, Result};

use std::fmt::Debug;
use num_traits::{NumCast, PrimInt};


/// Conventional "no edge" weight for hand-typed matrices
pub const DEFAULT_NO_EDGE: u32 = 99;


/// Dense n x n adjacency matrix of non-negative weights
/// - `no_edge` marks a missing edge, it is never relaxed
/// - diagonal entries are ignored
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CostMatrix<C> {
    len: usize,
    weights: Vec<C>, // row-major, len * len
    no_edge: C,
}

impl<C> CostMatrix<C>
where
    C: PrimInt + Debug,
{

    /// Build a matrix from rows, validating shape and weights
    pub fn new(rows: Vec<Vec<C>>, no_edge: C) -> Result<Self> {
        let len = rows.len();
        if len == 0 {
            return Err(LabelingError::EmptyGraph);
        }

        let mut weights = Vec::with_capacity(len * len);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != len {
                return Err(LabelingError::NonSquareMatrix {
                    row,
                    found: values.len(),
                    expected: len,
                });
            }
            for (col, &w) in values.iter().enumerate() {
                // the diagonal and the sentinel are never read as weights
                if row != col && w != no_edge && w < C::zero() {
                    return Err(LabelingError::NegativeWeight { from: row, to: col });
                }
            }
            weights.extend(values);
        }

        Ok(Self { len, weights, no_edge })
    }

    /// Build a matrix using 99 as the no-edge sentinel
    /// Falls back to `C::max_value()` for types too narrow to hold 99
    pub fn with_default_sentinel(rows: Vec<Vec<C>>) -> Result<Self> {
        let no_edge = <C as NumCast>::from(DEFAULT_NO_EDGE).unwrap_or_else(C::max_value);
        Self::new(rows, no_edge)
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn no_edge(&self) -> C {
        self.no_edge
    }

    /// Raw matrix entry, sentinel included
    pub fn raw(&self, u: usize, v: usize) -> C {
        self.weights[u * self.len + v]
    }

    /// Edge weight from u to v
    /// None for the diagonal and for the no-edge sentinel
    pub fn weight(&self, u: usize, v: usize) -> Option<C> {
        if u == v {
            return None;
        }
        let w = self.raw(u, v);
        (w != self.no_edge).then_some(w)
    }

    /// Iterate over every existing directed edge as (from, to, weight)
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, C)> + '_ {
        (0..self.len).flat_map(move |u| {
            (0..self.len).filter_map(move |v| self.weight(u, v).map(|w| (u, v, w)))
        })
    }

    /// Check a vertex id against the matrix size
    pub fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.len {
            Ok(())
        } else {
            Err(LabelingError::VertexOutOfRange { vertex, len: self.len })
        }
    }
}

use thiserror::Error;


#[derive(Debug, Error, PartialEq, Eq)]
pub enum LabelingError {
    #[error("source vertex {vertex} is out of range for {len} vertices")]
    SourceOutOfRange { vertex: usize, len: usize },

    #[error("vertex {vertex} is out of range for {len} vertices")]
    VertexOutOfRange { vertex: usize, len: usize },

    #[error("matrix row {row} has {found} entries, expected {expected}")]
    NonSquareMatrix { row: usize, found: usize, expected: usize },

    #[error("graph has no vertices")]
    EmptyGraph,

    #[error("negative weight on edge {from} -> {to}")]
    NegativeWeight { from: usize, to: usize },

    #[error("vertex {0} is unreachable from the source")]
    Unreachable(usize), // label stayed at infinity

    #[error("input error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, LabelingError>;

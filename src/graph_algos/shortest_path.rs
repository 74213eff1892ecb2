use crate::errors::{LabelingError, Result};
use super::Labeling;

use std::fmt::Debug;
use num_traits::PrimInt;

/// Construct the path from the labeling source to `target`
/// Returns the ordered path as a vector of vertex ids from source to target
/// labeling: Labeling<C> - final label and parent tables
/// target: usize - vertex to reach
/// Walks parent pointers iteratively, at most n steps
pub(crate) fn shortest_path<C>(labeling: &Labeling<C>, target: usize) -> Result<Vec<usize>>
where
    C: PrimInt + Debug,
{
    labeling.check_vertex(target)?;

    if !labeling.is_reachable(target) {
        return Err(LabelingError::Unreachable(target));
    }

    let source = labeling.source();
    let mut path = vec![target];
    let mut current = target;

    // Trace back from target to source
    while current != source {
        // a chain longer than n can only come from a corrupt table
        if path.len() > labeling.len() {
            return Err(LabelingError::Unreachable(target));
        }
        match labeling.parent(current) {
            Some(parent) => {
                path.push(parent);
                current = parent;
            }
            None => return Err(LabelingError::Unreachable(target)),
        }
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    Ok(path)
}

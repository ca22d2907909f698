use crate::error::{PassportError, Result};
use crate::model::CoffeeEntry;
use std::collections::BTreeSet;

/// Removes the entries at the given zero-based positions.
///
/// Every position is checked against the current length before anything is
/// removed, so a single bad position leaves the entries untouched. Repeated
/// positions count once. Returns the removed entries in collection order.
pub fn run(entries: &mut Vec<CoffeeEntry>, positions: &[usize]) -> Result<Vec<CoffeeEntry>> {
    let len = entries.len();
    if let Some(&position) = positions.iter().find(|&&p| p >= len) {
        return Err(PassportError::OutOfRange { position, len });
    }

    let unique: BTreeSet<usize> = positions.iter().copied().collect();
    let mut removed: Vec<CoffeeEntry> = unique
        .iter()
        .rev()
        .map(|&position| entries.remove(position))
        .collect();
    removed.reverse();
    Ok(removed)
}

//! # Command Layer
//!
//! Pure business logic over the ordered list of entries. Functions here take
//! the entries as plain slices or vectors and return Rust values: no storage,
//! no notification, no printing. [`crate::api::CollectionStore`] wraps them
//! with persistence and change broadcasting.
//!
//! Mutations that address an entry by id fail with
//! [`PassportError::NotFound`] and leave the entries untouched when the id
//! is unknown.

use crate::error::{PassportError, Result};
use crate::model::CoffeeEntry;
use uuid::Uuid;

pub mod add;
pub mod check_in;
pub mod delete;
pub mod flags;
pub mod query;
pub mod stats;

pub(crate) fn position_of(entries: &[CoffeeEntry], id: &Uuid) -> Result<usize> {
    entries
        .iter()
        .position(|e| e.id == *id)
        .ok_or(PassportError::NotFound(*id))
}

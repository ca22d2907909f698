//! Read-only views over the collection.
//!
//! The single-purpose views return lazy iterators borrowing the entries, so
//! nothing is copied until a caller collects. All of them keep collection
//! order.

use crate::model::{AttributeFilter, CoffeeEntry, FilterField, TastedFilter};
use std::collections::BTreeSet;
use uuid::Uuid;

pub fn find<'a>(entries: &'a [CoffeeEntry], id: &Uuid) -> Option<&'a CoffeeEntry> {
    entries.iter().find(|e| e.id == *id)
}

pub fn by_category<'a>(
    entries: &'a [CoffeeEntry],
    category: &'a str,
) -> impl Iterator<Item = &'a CoffeeEntry> + 'a {
    entries.iter().filter(move |e| e.category == category)
}

pub fn filtered<'a>(
    entries: &'a [CoffeeEntry],
    filter: &'a AttributeFilter,
) -> impl Iterator<Item = &'a CoffeeEntry> + 'a {
    entries.iter().filter(move |e| filter.matches(e))
}

pub fn by_status(
    entries: &[CoffeeEntry],
    status: TastedFilter,
) -> impl Iterator<Item = &CoffeeEntry> + '_ {
    entries.iter().filter(move |e| status.matches(e))
}

pub fn favorites(entries: &[CoffeeEntry]) -> impl Iterator<Item = &CoffeeEntry> + '_ {
    entries.iter().filter(|e| e.is_favorite)
}

/// Tasted entries that carry a photo.
pub fn gallery(entries: &[CoffeeEntry]) -> impl Iterator<Item = &CoffeeEntry> + '_ {
    entries.iter().filter(|e| e.tasted && e.has_image())
}

/// The distinct values present for `field`, sorted ascending. Entries
/// without the attribute contribute nothing.
pub fn distinct_values(entries: &[CoffeeEntry], field: FilterField) -> Vec<String> {
    entries
        .iter()
        .filter_map(|e| field.value_of(e))
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// A combined list view, as the list screen builds it from its pickers.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub category: Option<String>,
    pub attributes: AttributeFilter,
    pub status: TastedFilter,
    pub favorites_only: bool,
}

impl ListQuery {
    pub fn matches(&self, entry: &CoffeeEntry) -> bool {
        self.category.as_deref().map_or(true, |c| entry.category == c)
            && self.attributes.matches(entry)
            && self.status.matches(entry)
            && (!self.favorites_only || entry.is_favorite)
    }
}

/// An entry paired with its 1-based position in the full collection, so a
/// filtered listing can still be acted on by position.
#[derive(Debug, Clone, Copy)]
pub struct DisplayCoffee<'a> {
    pub index: usize,
    pub entry: &'a CoffeeEntry,
}

impl DisplayCoffee<'_> {
    /// Zero-based position, as the mutation operations expect.
    pub fn position(&self) -> usize {
        self.index - 1
    }
}

pub fn list<'a>(entries: &'a [CoffeeEntry], query: &ListQuery) -> Vec<DisplayCoffee<'a>> {
    entries
        .iter()
        .enumerate()
        .filter(|(_, e)| query.matches(e))
        .map(|(i, entry)| DisplayCoffee {
            index: i + 1,
            entry,
        })
        .collect()
}

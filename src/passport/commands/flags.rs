use crate::error::Result;
use crate::model::CoffeeEntry;
use uuid::Uuid;

use super::position_of;

/// Flips the favorite flag, returning the new value.
pub fn toggle_favorite(entries: &mut [CoffeeEntry], id: &Uuid) -> Result<bool> {
    toggle(entries, id, |entry| &mut entry.is_favorite)
}

/// Flips the tasted flag, returning the new value. Unlike a check-in this
/// leaves the tasting note and photo alone.
pub fn toggle_tasted(entries: &mut [CoffeeEntry], id: &Uuid) -> Result<bool> {
    toggle(entries, id, |entry| &mut entry.tasted)
}

fn toggle<F>(entries: &mut [CoffeeEntry], id: &Uuid, flag: F) -> Result<bool>
where
    F: FnOnce(&mut CoffeeEntry) -> &mut bool,
{
    let index = position_of(entries, id)?;
    let value = flag(&mut entries[index]);
    *value = !*value;
    Ok(*value)
}

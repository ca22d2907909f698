use crate::error::Result;
use crate::model::CoffeeEntry;
use uuid::Uuid;

use super::position_of;

/// Marks the entry tasted and records the tasting note.
///
/// A new photo replaces the stored one; passing `None` keeps whatever photo
/// the entry already had.
pub fn run(
    entries: &mut [CoffeeEntry],
    id: &Uuid,
    note: String,
    image_data: Option<Vec<u8>>,
) -> Result<()> {
    let index = position_of(entries, id)?;
    let entry = &mut entries[index];
    entry.tasted = true;
    entry.details = Some(note);
    if image_data.is_some() {
        entry.image_data = image_data;
    }
    Ok(())
}

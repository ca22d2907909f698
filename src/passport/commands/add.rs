use crate::model::CoffeeEntry;
use uuid::Uuid;

/// Appends a new untasted, unfavorited entry and returns its id.
///
/// The name is not checked here: callers are expected to refuse empty names
/// before getting this far, and duplicate names are allowed.
pub fn run(
    entries: &mut Vec<CoffeeEntry>,
    name: String,
    description: String,
    category: String,
    details: Option<String>,
    image_data: Option<Vec<u8>>,
) -> Uuid {
    let entry = CoffeeEntry::new(name, description, category, details, image_data);
    let id = entry.id;
    entries.push(entry);
    id
}

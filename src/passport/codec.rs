//! # Collection Encoding
//!
//! The whole collection is the unit of persistence: [`encode`] turns the
//! ordered entries into one JSON document and [`decode`] reads it back.
//!
//! Each entry is a field-tagged object using the stored attribute names
//! (`imageData`, `isFavorite`, ...). Absent optionals are omitted rather than
//! written as `null`, and photos travel inside the same document as base64
//! strings.
//!
//! A document that parses but repeats an id is rejected, since ids are the
//! only handle the mutation operations have on an entry.

use crate::error::{PassportError, Result};
use crate::model::CoffeeEntry;
use std::collections::HashSet;

pub fn encode(entries: &[CoffeeEntry]) -> Result<Vec<u8>> {
    serde_json::to_vec(entries).map_err(PassportError::Serialization)
}

pub fn decode(bytes: &[u8]) -> Result<Vec<CoffeeEntry>> {
    let entries: Vec<CoffeeEntry> =
        serde_json::from_slice(bytes).map_err(PassportError::Serialization)?;

    let mut seen = HashSet::with_capacity(entries.len());
    if let Some(dup) = entries.iter().find(|e| !seen.insert(e.id)) {
        return Err(PassportError::Store(format!(
            "Stored collection repeats id {}",
            dup.id
        )));
    }

    Ok(entries)
}

/// Serde adapter storing optional image bytes as a base64 string.
pub mod image_data {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        data: &Option<Vec<u8>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match data {
            Some(bytes) => serializer.serialize_some(&STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec<u8>>, D::Error> {
        let encoded: Option<String> = Option::deserialize(deserializer)?;
        encoded
            .map(|s| STANDARD.decode(s.as_bytes()).map_err(serde::de::Error::custom))
            .transpose()
    }
}

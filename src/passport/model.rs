use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::PassportError;

pub const BLONDE_ROAST: &str = "Blonde Roast";
pub const MEDIUM_ROAST: &str = "Medium Roast";
pub const DARK_ROAST: &str = "Dark Roast";

/// Roast levels offered by the add form. Categories are free strings in the
/// stored data; this list only drives UI choices.
pub const DEFAULT_CATEGORIES: [&str; 3] = [BLONDE_ROAST, MEDIUM_ROAST, DARK_ROAST];

/// One tracked coffee.
///
/// Field names on the wire follow the stored document layout (`imageData`,
/// `isFavorite`, `foodPairing`), so collections written by earlier builds
/// keep decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoffeeEntry {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::codec::image_data"
    )]
    pub image_data: Option<Vec<u8>>,
    #[serde(default)]
    pub tasted: bool,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acidity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_pairing: Option<String>,
}

impl CoffeeEntry {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        details: Option<String>,
        image_data: Option<Vec<u8>>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            category: category.into(),
            details,
            image_data,
            tasted: false,
            is_favorite: false,
            origin: None,
            body: None,
            acidity: None,
            processing: None,
            food_pairing: None,
        }
    }

    pub fn has_image(&self) -> bool {
        self.image_data.is_some()
    }
}

/// The descriptive attributes that can be filtered on and offered as choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Acidity,
    Body,
    Origin,
}

impl FilterField {
    pub const ALL: [FilterField; 3] = [FilterField::Acidity, FilterField::Body, FilterField::Origin];

    pub fn value_of(self, entry: &CoffeeEntry) -> Option<&str> {
        match self {
            FilterField::Acidity => entry.acidity.as_deref(),
            FilterField::Body => entry.body.as_deref(),
            FilterField::Origin => entry.origin.as_deref(),
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterField::Acidity => write!(f, "acidity"),
            FilterField::Body => write!(f, "body"),
            FilterField::Origin => write!(f, "origin"),
        }
    }
}

impl FromStr for FilterField {
    type Err = PassportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "acidity" => Ok(FilterField::Acidity),
            "body" => Ok(FilterField::Body),
            "origin" => Ok(FilterField::Origin),
            other => Err(PassportError::Api(format!(
                "Unknown field: {} (expected acidity, body or origin)",
                other
            ))),
        }
    }
}

/// Exact-match constraints on descriptive attributes. `None` matches anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeFilter {
    pub acidity: Option<String>,
    pub body: Option<String>,
    pub origin: Option<String>,
}

impl AttributeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acidity(mut self, value: impl Into<String>) -> Self {
        self.acidity = Some(value.into());
        self
    }

    pub fn body(mut self, value: impl Into<String>) -> Self {
        self.body = Some(value.into());
        self
    }

    pub fn origin(mut self, value: impl Into<String>) -> Self {
        self.origin = Some(value.into());
        self
    }

    pub fn constraint(&self, field: FilterField) -> Option<&str> {
        match field {
            FilterField::Acidity => self.acidity.as_deref(),
            FilterField::Body => self.body.as_deref(),
            FilterField::Origin => self.origin.as_deref(),
        }
    }

    pub fn matches(&self, entry: &CoffeeEntry) -> bool {
        FilterField::ALL.iter().all(|&field| match self.constraint(field) {
            None => true,
            Some(wanted) => field.value_of(entry) == Some(wanted),
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TastedFilter {
    #[default]
    All,
    Tasted,
    Untasted,
}

impl TastedFilter {
    pub fn matches(self, entry: &CoffeeEntry) -> bool {
        match self {
            TastedFilter::All => true,
            TastedFilter::Tasted => entry.tasted,
            TastedFilter::Untasted => !entry.tasted,
        }
    }
}

/// Achievements unlocked by the number of tasted coffees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Badge {
    CoffeeExplorer,
    CaffeineConnoisseur,
    MasterTaster,
}

impl Badge {
    pub const ALL: [Badge; 3] = [
        Badge::CoffeeExplorer,
        Badge::CaffeineConnoisseur,
        Badge::MasterTaster,
    ];

    pub fn threshold(self) -> usize {
        match self {
            Badge::CoffeeExplorer => 5,
            Badge::CaffeineConnoisseur => 10,
            Badge::MasterTaster => 15,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Badge::CoffeeExplorer => "Coffee Explorer",
            Badge::CaffeineConnoisseur => "Caffeine Connoisseur",
            Badge::MasterTaster => "Master Taster",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Badge::CoffeeExplorer => "🌎",
            Badge::CaffeineConnoisseur => "⚡",
            Badge::MasterTaster => "🧠",
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

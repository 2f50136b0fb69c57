use serde::{Deserialize, Serialize};
use std::fmt;

use super::price::Price;
use crate::errors::MenuError;

/// Storage-assigned primary key of a dish
pub type DishId = i64;

/// Dish - a menu item as read back from storage
///
/// Only the store constructs `Dish` values, because only the store knows the
/// id. Callers that want to add a dish build a [`NewDish`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    /// Primary key, assigned once at insert time
    pub id: DishId,

    /// Optional display name (not unique)
    pub name: Option<String>,

    /// Optional free-text description
    pub description: Option<String>,

    pub price: Price,
}

impl Dish {
    /// Name for display, empty when the dish has none
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// Renders the console line `<id>: <name> - <price> UAH`
impl fmt::Display for Dish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {} UAH", self.id, self.display_name(), self.price)
    }
}

/// NewDish - the insert form of a dish, without an id
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewDish {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    pub price: Price,
}

impl NewDish {
    /// Create a dish with a name, description and price
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: Price) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
            price,
        }
    }

    /// Replace the name
    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    /// Replace the description
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Parse a bulk import document: a JSON array of dishes
    pub fn list_from_json(text: &str) -> Result<Vec<NewDish>, MenuError> {
        serde_json::from_str(text).map_err(|e| MenuError::InvalidImport {
            reason: e.to_string(),
        })
    }
}

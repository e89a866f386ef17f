use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Menu categories shown as tabs in ordering clients
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Burgers,
    Mains,
    Starters,
    Desserts,
    Beverages,
    Alcohols,
}

/// A side choice included in the item price; the group cap rides on each option
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SideOption {
    pub id: String,
    pub name: String,
    pub max_selection: u32,
}

/// A drink choice with its own price (0 when included free)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DrinkOption {
    pub id: String,
    pub name: String,
    pub price_cents: i64,
}

/// A priced add-on; any number can be selected per line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Extra {
    pub id: String,
    pub name: String,
    pub price_cents: i64,
}

/// A component of the dish. Removal is free; adding charges `price_cents`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub removable: bool,
    pub addable: bool,
    pub price_cents: i64,
}

/// A sellable menu item with its priced modifier groups.
///
/// Ids are assigned by the hosted catalog backend, so they are plain
/// strings rather than locally generated uuids.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub price_cents: i64,
    #[serde(default)]
    pub side_options: Vec<SideOption>,
    #[serde(default)]
    pub drink_options: Vec<DrinkOption>,
    #[serde(default)]
    pub extras: Vec<Extra>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    pub available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

const DEFAULT_SIDE_LIMIT: u32 = 2;

impl MenuItem {
    /// Cap on side selections for the whole group. The backend stores the
    /// cap on the options themselves; the first option's value governs.
    pub fn side_selection_limit(&self) -> u32 {
        self.side_options
            .first()
            .map(|side| side.max_selection)
            .unwrap_or(DEFAULT_SIDE_LIMIT)
    }

    pub fn side(&self, id: &str) -> Option<&SideOption> {
        self.side_options.iter().find(|side| side.id == id)
    }

    pub fn drink(&self, id: &str) -> Option<&DrinkOption> {
        self.drink_options.iter().find(|drink| drink.id == id)
    }

    pub fn extra(&self, id: &str) -> Option<&Extra> {
        self.extras.iter().find(|extra| extra.id == id)
    }

    pub fn ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|ingredient| ingredient.id == id)
    }
}

use savora_catalog::MenuItem;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ingredient changes applied to one line: two disjoint id sets.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IngredientModifications {
    pub removed: Vec<String>,
    pub added: Vec<String>,
}

/// One configured purchase of a menu item.
///
/// `item` is a snapshot taken when the line was created; catalog edits
/// after that never reprice lines already in the cart. The same menu item
/// can appear as several lines with different configurations, so lines
/// carry their own locally generated id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    pub id: Uuid,
    pub item: MenuItem,
    pub quantity: u32,
    pub selected_sides: Vec<String>,
    pub selected_drink: Option<String>,
    pub selected_extras: Vec<String>,
    pub modifications: IngredientModifications,
    /// Derived by the engine on every mutation; caller-supplied values
    /// are overwritten.
    pub subtotal_cents: i64,
}

impl LineItem {
    pub fn new(item: MenuItem, quantity: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            item,
            quantity,
            selected_sides: Vec::new(),
            selected_drink: None,
            selected_extras: Vec::new(),
            modifications: IngredientModifications::default(),
            subtotal_cents: 0,
        }
    }

    /// Check every selection against this line's own catalog snapshot.
    pub fn validate(&self) -> Result<(), LineItemError> {
        check_unique(&self.selected_sides)?;
        check_unique(&self.selected_extras)?;
        check_unique(&self.modifications.removed)?;
        check_unique(&self.modifications.added)?;

        for id in &self.selected_sides {
            if self.item.side(id).is_none() {
                return Err(LineItemError::UnknownSide(id.clone()));
            }
        }
        let limit = self.item.side_selection_limit();
        if self.selected_sides.len() > limit as usize {
            return Err(LineItemError::TooManySides {
                selected: self.selected_sides.len(),
                limit,
            });
        }

        if let Some(id) = &self.selected_drink {
            if self.item.drink(id).is_none() {
                return Err(LineItemError::UnknownDrink(id.clone()));
            }
        }

        for id in &self.selected_extras {
            if self.item.extra(id).is_none() {
                return Err(LineItemError::UnknownExtra(id.clone()));
            }
        }

        for id in &self.modifications.removed {
            match self.item.ingredient(id) {
                None => return Err(LineItemError::UnknownIngredient(id.clone())),
                Some(ingredient) if !ingredient.removable => {
                    return Err(LineItemError::NotRemovable(id.clone()))
                }
                Some(_) => {}
            }
        }
        for id in &self.modifications.added {
            match self.item.ingredient(id) {
                None => return Err(LineItemError::UnknownIngredient(id.clone())),
                Some(ingredient) if !ingredient.addable => {
                    return Err(LineItemError::NotAddable(id.clone()))
                }
                Some(_) => {}
            }
            if self.modifications.removed.contains(id) {
                return Err(LineItemError::RemovedAndAdded(id.clone()));
            }
        }

        Ok(())
    }
}

fn check_unique(ids: &[String]) -> Result<(), LineItemError> {
    for (i, id) in ids.iter().enumerate() {
        if ids[..i].contains(id) {
            return Err(LineItemError::DuplicateSelection(id.clone()));
        }
    }
    Ok(())
}

/// Partial changes for `update_item`; `None` fields stay untouched.
#[derive(Debug, Clone, Default)]
pub struct LineItemUpdate {
    pub quantity: Option<u32>,
    pub selected_sides: Option<Vec<String>>,
    /// `Some(None)` clears the drink selection.
    pub selected_drink: Option<Option<String>>,
    pub selected_extras: Option<Vec<String>>,
    pub modifications: Option<IngredientModifications>,
}

impl LineItemUpdate {
    pub fn quantity(quantity: u32) -> Self {
        Self {
            quantity: Some(quantity),
            ..Self::default()
        }
    }

    pub(crate) fn apply(self, line: &mut LineItem) {
        if let Some(quantity) = self.quantity {
            line.quantity = quantity;
        }
        if let Some(sides) = self.selected_sides {
            line.selected_sides = sides;
        }
        if let Some(drink) = self.selected_drink {
            line.selected_drink = drink;
        }
        if let Some(extras) = self.selected_extras {
            line.selected_extras = extras;
        }
        if let Some(modifications) = self.modifications {
            line.modifications = modifications;
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LineItemError {
    #[error("unknown side option: {0}")]
    UnknownSide(String),

    #[error("unknown drink option: {0}")]
    UnknownDrink(String),

    #[error("unknown extra: {0}")]
    UnknownExtra(String),

    #[error("unknown ingredient: {0}")]
    UnknownIngredient(String),

    #[error("too many sides selected: {selected} of at most {limit}")]
    TooManySides { selected: usize, limit: u32 },

    #[error("ingredient cannot be removed: {0}")]
    NotRemovable(String),

    #[error("ingredient cannot be added: {0}")]
    NotAddable(String),

    #[error("ingredient both removed and added: {0}")]
    RemovedAndAdded(String),

    #[error("duplicate selection: {0}")]
    DuplicateSelection(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use savora_catalog::{Category, DrinkOption, Extra, Ingredient, SideOption};

    fn burger() -> MenuItem {
        let now = Utc::now();
        MenuItem {
            id: "burger-classic".to_string(),
            name: "Classic Burger".to_string(),
            description: "Beef patty with the works".to_string(),
            category: Category::Burgers,
            price_cents: 8999,
            side_options: vec![
                SideOption {
                    id: "chips".to_string(),
                    name: "Chips".to_string(),
                    max_selection: 2,
                },
                SideOption {
                    id: "salad".to_string(),
                    name: "Side Salad".to_string(),
                    max_selection: 2,
                },
                SideOption {
                    id: "rings".to_string(),
                    name: "Onion Rings".to_string(),
                    max_selection: 2,
                },
            ],
            drink_options: vec![DrinkOption {
                id: "cola".to_string(),
                name: "Cola".to_string(),
                price_cents: 0,
            }],
            extras: vec![Extra {
                id: "cheese".to_string(),
                name: "Extra Cheese".to_string(),
                price_cents: 1500,
            }],
            ingredients: vec![
                Ingredient {
                    id: "onion".to_string(),
                    name: "Onion".to_string(),
                    removable: true,
                    addable: false,
                    price_cents: 0,
                },
                Ingredient {
                    id: "bacon".to_string(),
                    name: "Bacon".to_string(),
                    removable: false,
                    addable: true,
                    price_cents: 500,
                },
            ],
            available: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_plain_line_is_valid() {
        let line = LineItem::new(burger(), 1);
        assert!(line.validate().is_ok());
    }

    #[test]
    fn test_unknown_extra_rejected() {
        let mut line = LineItem::new(burger(), 1);
        line.selected_extras = vec!["truffle".to_string()];

        assert!(matches!(
            line.validate(),
            Err(LineItemError::UnknownExtra(id)) if id == "truffle"
        ));
    }

    #[test]
    fn test_side_limit_enforced() {
        let mut line = LineItem::new(burger(), 1);
        line.selected_sides = vec![
            "chips".to_string(),
            "salad".to_string(),
            "rings".to_string(),
        ];

        assert!(matches!(
            line.validate(),
            Err(LineItemError::TooManySides {
                selected: 3,
                limit: 2
            })
        ));
    }

    #[test]
    fn test_unknown_drink_rejected() {
        let mut line = LineItem::new(burger(), 1);
        line.selected_drink = Some("milkshake".to_string());

        assert!(matches!(
            line.validate(),
            Err(LineItemError::UnknownDrink(_))
        ));
    }

    #[test]
    fn test_ingredient_flags_enforced() {
        let mut line = LineItem::new(burger(), 1);
        line.modifications.removed = vec!["bacon".to_string()];
        assert!(matches!(
            line.validate(),
            Err(LineItemError::NotRemovable(_))
        ));

        let mut line = LineItem::new(burger(), 1);
        line.modifications.added = vec!["onion".to_string()];
        assert!(matches!(line.validate(), Err(LineItemError::NotAddable(_))));
    }

    #[test]
    fn test_removed_and_added_must_be_disjoint() {
        let mut item = burger();
        item.ingredients[0].addable = true;
        let mut line = LineItem::new(item, 1);
        line.modifications.removed = vec!["onion".to_string()];
        line.modifications.added = vec!["onion".to_string()];

        assert!(matches!(
            line.validate(),
            Err(LineItemError::RemovedAndAdded(_))
        ));
    }

    #[test]
    fn test_duplicate_selection_rejected() {
        let mut line = LineItem::new(burger(), 1);
        line.selected_extras = vec!["cheese".to_string(), "cheese".to_string()];

        assert!(matches!(
            line.validate(),
            Err(LineItemError::DuplicateSelection(_))
        ));
    }

    #[test]
    fn test_update_applies_only_set_fields() {
        let mut line = LineItem::new(burger(), 2);
        line.selected_extras = vec!["cheese".to_string()];
        line.selected_drink = Some("cola".to_string());

        LineItemUpdate::quantity(5).apply(&mut line);
        assert_eq!(line.quantity, 5);
        assert_eq!(line.selected_extras, vec!["cheese".to_string()]);
        assert_eq!(line.selected_drink.as_deref(), Some("cola"));

        let update = LineItemUpdate {
            selected_drink: Some(None),
            ..LineItemUpdate::default()
        };
        update.apply(&mut line);
        assert_eq!(line.quantity, 5);
        assert!(line.selected_drink.is_none());
    }

    #[test]
    fn test_lines_for_same_item_get_distinct_ids() {
        let a = LineItem::new(burger(), 1);
        let b = LineItem::new(burger(), 1);
        assert_ne!(a.id, b.id);
    }
}

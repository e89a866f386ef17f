//! The single place line subtotals are computed. Add and update paths
//! both price through here; nothing else in the workspace may restate
//! the formula.

use crate::line_item::LineItem;

/// `subtotal = quantity × (base + selected extras + selected drink +
/// added ingredients)`.
///
/// Removing an ingredient is free and side choices carry no price.
/// Selections that no longer resolve against the snapshot price as zero
/// rather than failing; validation happens before a line gets this far.
pub fn line_subtotal(line: &LineItem) -> i64 {
    let item = &line.item;
    let mut unit_cents = item.price_cents;

    for extra in item
        .extras
        .iter()
        .filter(|extra| line.selected_extras.contains(&extra.id))
    {
        unit_cents += extra.price_cents;
    }

    if let Some(drink_id) = &line.selected_drink {
        if let Some(drink) = item.drink(drink_id) {
            unit_cents += drink.price_cents;
        }
    }

    for ingredient in item
        .ingredients
        .iter()
        .filter(|ingredient| line.modifications.added.contains(&ingredient.id))
    {
        unit_cents += ingredient.price_cents;
    }

    unit_cents * i64::from(line.quantity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use savora_catalog::{Category, DrinkOption, Extra, Ingredient, MenuItem};

    fn burger() -> MenuItem {
        let now = Utc::now();
        MenuItem {
            id: "burger-classic".to_string(),
            name: "Classic Burger".to_string(),
            description: String::new(),
            category: Category::Burgers,
            price_cents: 8999,
            side_options: Vec::new(),
            drink_options: vec![
                DrinkOption {
                    id: "cola".to_string(),
                    name: "Cola".to_string(),
                    price_cents: 0,
                },
                DrinkOption {
                    id: "craft-soda".to_string(),
                    name: "Craft Soda".to_string(),
                    price_cents: 1200,
                },
            ],
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
    fn test_base_price_times_quantity() {
        let line = crate::line_item::LineItem::new(burger(), 3);
        assert_eq!(line_subtotal(&line), 3 * 8999);
    }

    #[test]
    fn test_compound_modifiers() {
        // base 89.99 + extra 15.00 + added ingredient 5.00, twice over
        let mut line = crate::line_item::LineItem::new(burger(), 2);
        line.selected_extras = vec!["cheese".to_string()];
        line.modifications.added = vec!["bacon".to_string()];

        assert_eq!(line_subtotal(&line), 21998);
    }

    #[test]
    fn test_included_drink_is_free_and_premium_drink_charges() {
        let mut line = crate::line_item::LineItem::new(burger(), 1);
        line.selected_drink = Some("cola".to_string());
        assert_eq!(line_subtotal(&line), 8999);

        line.selected_drink = Some("craft-soda".to_string());
        assert_eq!(line_subtotal(&line), 8999 + 1200);
    }

    #[test]
    fn test_removal_never_subtracts() {
        let mut line = crate::line_item::LineItem::new(burger(), 1);
        line.modifications.removed = vec!["onion".to_string()];

        assert_eq!(line_subtotal(&line), 8999);
    }

    #[test]
    fn test_unresolvable_selection_prices_as_zero() {
        let mut line = crate::line_item::LineItem::new(burger(), 1);
        line.selected_extras = vec!["gone-from-menu".to_string()];
        line.selected_drink = Some("gone-too".to_string());

        assert_eq!(line_subtotal(&line), 8999);
    }
}

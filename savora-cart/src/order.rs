use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cart::Cart;
use crate::line_item::LineItem;

/// Order lifecycle vocabulary carried on the payload. Transitions are
/// the ordering backend's concern, not this crate's.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    Ready,
    Delivered,
    Cancelled,
}

/// Immutable checkout payload built from the cart at submission time.
///
/// The draft owns copies of the lines, so later cart mutations cannot
/// reach into an order already handed to the backend. Clearing the cart
/// after a successful submission stays the caller's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderDraft {
    pub id: Uuid,
    pub customer_id: String,
    pub items: Vec<LineItem>,
    pub total_cents: i64,
    pub item_count: u32,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl OrderDraft {
    pub fn from_cart(customer_id: &str, cart: &Cart) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer_id: customer_id.to_string(),
            items: cart.items.clone(),
            total_cents: cart.total_cents,
            item_count: cart.item_count,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_of_empty_cart() {
        let draft = OrderDraft::from_cart("customer-1", &Cart::default());

        assert_eq!(draft.customer_id, "customer-1");
        assert!(draft.items.is_empty());
        assert_eq!(draft.total_cents, 0);
        assert_eq!(draft.status, OrderStatus::Pending);
    }

    #[test]
    fn test_status_wire_format() {
        let encoded = serde_json::to_string(&OrderStatus::Preparing).unwrap();
        assert_eq!(encoded, r#""PREPARING""#);
    }
}

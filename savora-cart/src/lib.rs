pub mod cart;
pub mod engine;
pub mod line_item;
pub mod order;
pub mod pricing;

pub use cart::{Cart, CartSnapshot, SNAPSHOT_VERSION};
pub use engine::{CartEngine, CartError, CART_STORAGE_KEY};
pub use line_item::{IngredientModifications, LineItem, LineItemError, LineItemUpdate};
pub use order::{OrderDraft, OrderStatus};

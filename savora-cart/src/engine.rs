use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::{error, info, warn};
use uuid::Uuid;

use savora_store::SnapshotStore;

use crate::cart::{Cart, CartSnapshot, SNAPSHOT_VERSION};
use crate::line_item::{LineItem, LineItemError, LineItemUpdate};
use crate::order::OrderDraft;
use crate::pricing;

/// Storage key the whole cart snapshot lives under.
pub const CART_STORAGE_KEY: &str = "restaurant_cart";

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("invalid line item: {0}")]
    Validation(#[from] LineItemError),
}

enum WriteCommand {
    Save(CartSnapshot),
    Flush(oneshot::Sender<()>),
}

/// Owns the in-progress basket and keeps its aggregates consistent with
/// its lines after every mutation.
///
/// One engine instance belongs to the application's composition root and
/// is handed to whatever needs it; there is no ambient singleton. All
/// mutations go through `&mut self`, so concurrent mutation is ruled out
/// by the borrow checker rather than a lock.
pub struct CartEngine {
    cart: Cart,
    writes: mpsc::UnboundedSender<WriteCommand>,
}

impl CartEngine {
    /// Hydrate from the store, falling back to an empty cart on any
    /// unreadable or malformed snapshot. The engine value does not exist
    /// until hydration finishes, so no mutation can race the initial
    /// load and overwrite a good snapshot with a blank cart.
    pub async fn load(store: Arc<dyn SnapshotStore>) -> Self {
        let cart = hydrate(store.as_ref()).await;
        let (writes, queue) = mpsc::unbounded_channel();
        tokio::spawn(write_loop(store, queue));
        Self { cart, writes }
    }

    /// Validate, price and append a configured line.
    ///
    /// The caller's subtotal is ignored and recomputed here; quantity is
    /// silently floored at 1. The only failure is selection validation.
    pub fn add_item(&mut self, mut line: LineItem) -> Result<(), CartError> {
        line.validate()?;
        line.quantity = line.quantity.max(1);
        line.subtotal_cents = pricing::line_subtotal(&line);
        self.cart.items.push(line);
        self.commit();
        Ok(())
    }

    /// Remove the line with this id; removing an unknown id is a no-op.
    pub fn remove_item(&mut self, line_id: &Uuid) {
        self.cart.items.retain(|line| line.id != *line_id);
        self.commit();
    }

    /// Apply partial changes to one line. Quantity floors at 1, changed
    /// selections re-validate against the line's own snapshot, and the
    /// subtotal is recomputed. An unknown id is a no-op, not an error;
    /// a rejected update leaves the line untouched.
    pub fn update_item(
        &mut self,
        line_id: &Uuid,
        changes: LineItemUpdate,
    ) -> Result<(), CartError> {
        if let Some(line) = self.cart.items.iter_mut().find(|line| line.id == *line_id) {
            let mut updated = line.clone();
            changes.apply(&mut updated);
            updated.quantity = updated.quantity.max(1);
            updated.validate()?;
            updated.subtotal_cents = pricing::line_subtotal(&updated);
            *line = updated;
        }
        self.commit();
        Ok(())
    }

    /// Empty the basket and persist an empty snapshot (not a deletion).
    pub fn clear(&mut self) {
        self.cart.items.clear();
        self.commit();
    }

    pub fn items(&self) -> &[LineItem] {
        &self.cart.items
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn item_count(&self) -> u32 {
        self.cart.item_count
    }

    pub fn total_cents(&self) -> i64 {
        self.cart.total_cents
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Immutable checkout payload for the current basket. Building one
    /// does not clear the cart; the caller clears after the order lands.
    pub fn order_draft(&self, customer_id: &str) -> OrderDraft {
        OrderDraft::from_cart(customer_id, &self.cart)
    }

    /// Wait until every write enqueued so far has been handed to the
    /// store. Mutations never need this; tests and pre-checkout callers
    /// do.
    pub async fn flush(&self) {
        let (done, waited) = oneshot::channel();
        if self.writes.send(WriteCommand::Flush(done)).is_ok() {
            let _ = waited.await;
        }
    }

    fn commit(&mut self) {
        self.cart.recalculate();
        self.persist();
    }

    /// Fire-and-forget: the writer task applies full-state snapshots in
    /// enqueue order, and the in-memory cart stays authoritative whether
    /// or not a write lands.
    fn persist(&self) {
        let snapshot = CartSnapshot::of(&self.cart);
        if self.writes.send(WriteCommand::Save(snapshot)).is_err() {
            warn!("cart writer task is gone, skipping persistence");
        }
    }
}

async fn hydrate(store: &dyn SnapshotStore) -> Cart {
    let raw = match store.load(CART_STORAGE_KEY).await {
        Ok(Some(raw)) => raw,
        Ok(None) => return Cart::default(),
        Err(e) => {
            error!("failed to read cart snapshot, starting empty: {e}");
            return Cart::default();
        }
    };

    let snapshot: CartSnapshot = match serde_json::from_str(&raw) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!("invalid cart snapshot in storage, resetting cart: {e}");
            return Cart::default();
        }
    };
    if snapshot.version != SNAPSHOT_VERSION {
        warn!(
            "unsupported cart snapshot version {}, resetting cart",
            snapshot.version
        );
        return Cart::default();
    }

    let mut cart = Cart {
        items: snapshot.items,
        total_cents: 0,
        item_count: 0,
    };
    // Stored subtotals and totals are not trusted; reprice every line
    // through the one formula and rebuild the aggregates.
    for line in &mut cart.items {
        line.quantity = line.quantity.max(1);
        line.subtotal_cents = pricing::line_subtotal(line);
    }
    cart.recalculate();
    info!(
        "cart hydrated: {} lines, {} items",
        cart.items.len(),
        cart.item_count
    );
    cart
}

async fn write_loop(store: Arc<dyn SnapshotStore>, mut queue: mpsc::UnboundedReceiver<WriteCommand>) {
    while let Some(command) = queue.recv().await {
        match command {
            WriteCommand::Save(snapshot) => {
                let payload = match serde_json::to_string(&snapshot) {
                    Ok(payload) => payload,
                    Err(e) => {
                        error!("failed to encode cart snapshot: {e}");
                        continue;
                    }
                };
                if let Err(e) = store.save(CART_STORAGE_KEY, &payload).await {
                    // Best effort: the in-memory cart is not rolled back
                    // and the next mutation's write supersedes this one.
                    error!("failed to save cart snapshot: {e}");
                }
            }
            WriteCommand::Flush(done) => {
                let _ = done.send(());
            }
        }
    }
}

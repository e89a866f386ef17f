use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

/// String-keyed durable storage for device-local state.
///
/// Every value is a whole snapshot: `save` overwrites, never appends.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Read the value under `key`; `None` when nothing was ever written.
    async fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite the value under `key`.
    async fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

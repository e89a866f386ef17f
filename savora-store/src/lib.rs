pub mod app_config;
pub mod file_store;
pub mod memory_store;
pub mod store;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;
pub use store::{SnapshotStore, StoreError};

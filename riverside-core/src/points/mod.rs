//! Persisted points balance shared by every screen.
pub mod storage;
pub mod store;

pub use storage::{MemoryPointsStorage, PointsStorage, StorageError};
pub use store::{ChangeOrigin, PointsConfig, PointsEvent, PointsStore, Subscription};

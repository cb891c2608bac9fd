pub mod records;
pub mod sqlite;
pub mod traits;

pub use sqlite::SqliteStore;
pub use traits::{Storage, StorageRead, StorageTx, StorageWrite};

/// Configuration store trait and in-memory implementation
pub mod config;
/// JSON file backed configuration store
pub mod file;

pub use config::{ConfigStore, MemoryStore};
pub use file::JsonFileStore;

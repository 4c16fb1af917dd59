pub mod app_config;
pub mod file;
pub mod memory;
pub mod seed;

pub use app_config::Config;
pub use file::JsonFileStore;
pub use memory::{FailingStore, MemoryStore};

//! Infrastructure layer for flow
//!
//! This crate contains adapters that implement the ports defined in the
//! domain and application layers, including configuration file loading.

pub mod config;
pub mod providers;
pub mod repository;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileOutputConfig, FileStorageConfig,
};
pub use providers::{FixedDateProvider, SequentialIdProvider, SystemDateProvider, UuidIdProvider};
pub use repository::{
    FLOW_FOLDER_NAME, FileSystemSessionRepository, InMemorySessionRepository, SessionRecord,
};

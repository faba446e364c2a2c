//! Session repository adapters
//!
//! Two implementations of [`flow_domain::SessionRepository`], selected at
//! startup:
//!
//! - [`FileSystemSessionRepository`]: one JSON file per session
//! - [`InMemorySessionRepository`]: process-lifetime storage for tests

mod filesystem;
mod in_memory;
mod record;

pub use filesystem::{FLOW_FOLDER_NAME, FileSystemSessionRepository};
pub use in_memory::InMemorySessionRepository;
pub use record::SessionRecord;

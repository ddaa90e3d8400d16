//! Interaction log for salesdesk.
//!
//! Every completed persona call is appended to a local SQLite table and can
//! be read back newest-first.

pub mod store;
pub mod types;

pub use store::LogStore;
pub use types::LogEntry;

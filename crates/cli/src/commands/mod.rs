//! Command handlers for salesdesk.
//!
//! One handler per user action; each takes the parsed arguments plus the
//! session and returns a result for `main` to report.

pub mod catalog;
pub mod memory;
pub mod persona;
pub mod preview;

// Re-export command types for convenience
pub use catalog::{ModelsCommand, PersonasCommand};
pub use memory::MemoryCommand;
pub use persona::{AskCommand, PersonaArgs};
pub use preview::PreviewCommand;

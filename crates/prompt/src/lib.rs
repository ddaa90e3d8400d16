//! Personas and prompt agents for salesdesk.
//!
//! This crate provides:
//! - Persona definitions (built-in, overridable by YAML)
//! - The fixed Handlebars prompt template
//! - `PromptAgent`, which binds a persona to a remote model

pub mod agent;
pub mod builder;
pub mod loader;
pub mod types;

// Re-export main types
pub use agent::PromptAgent;
pub use builder::{build_prompt, NO_CONTEXT};
pub use loader::{list_personas, load_persona};
pub use types::{builtin_personas, Persona};

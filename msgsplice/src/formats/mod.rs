//! Concrete file formats handled by msgsplice.
//!
//! This module re-exports the main type of each format under a
//! format-qualified alias for generic handling across the crate.

pub mod jsmsg;
pub mod properties;
pub mod tmx;

// Reexporting the formats for easier access
pub use jsmsg::Format as JsMessagesFormat;
pub use properties::Section as PropertiesSection;
pub use tmx::Document as TmxDocument;

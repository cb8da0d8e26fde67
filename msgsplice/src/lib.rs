#![forbid(unsafe_code)]
//! Translation resource transcoder for a web editor's i18n pipeline.
//!
//! The editor keeps its frontend strings in Java-style `.properties` files
//! and its blocks-editor strings in JavaScript message files; translators
//! work on one merged template. Three independent pipelines move text
//! between those representations:
//!
//! - **split** partitions one merged translation file into a frontend
//!   properties file and a blocks-editor JavaScript message file.
//! - **combine** re-merges a generated default-locale properties file and
//!   the canonical English message file into one translation template.
//! - **tmx merge** unions translation-memory (TMX) documents by unit id.
//!
//! All three are straight-line text transformations sharing only the
//! escaping helpers in [`escape`].
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use msgsplice::{ProjectLayout, Splitter};
//!
//! let layout = ProjectLayout::new(".");
//! let splitter = Splitter::new("es", "Spanish")?;
//! splitter.run(&layout, "merged_es.properties")?;
//! # Ok::<(), msgsplice::Error>(())
//! ```

pub mod combine;
pub mod error;
pub mod escape;
pub mod formats;
pub mod layout;
pub mod merge;
pub mod split;
pub mod traits;

// Re-export most used types for easy consumption
pub use crate::{
    combine::combine,
    error::Error,
    layout::ProjectLayout,
    merge::{merge_tmx_documents, merge_tmx_files},
    split::{SplitOutput, Splitter},
};

//! All error types for the msgsplice crate.
//!
//! These are returned from all fallible operations (parsing, serialization, merging, etc.).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("missing required value: {0}")]
    MissingValue(&'static str),

    #[error("XML parse error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid data: {0}")]
    DataMismatch(String),

    #[error("invalid document: {0}")]
    InvalidDocument(String),

    /// A merge finished without ever establishing a tree to write.
    #[error("No output")]
    NoOutput,
}

//! Ordered merge of TMX documents.

use std::path::Path;

use crate::{error::Error, formats::tmx::Document, traits::Parser};

/// Merges `sources` in listed order and writes the result to `dest`.
///
/// The first document becomes the accumulator; every later document only
/// contributes children onto units whose `tuid` the accumulator already
/// holds. With no sources there is never a tree to write and the merge
/// fails with [`Error::NoOutput`].
pub fn merge_tmx_files<P: AsRef<Path>, Q: AsRef<Path>>(
    sources: &[P],
    dest: Q,
) -> Result<(), Error> {
    let mut merged: Option<Document> = None;
    for source in sources {
        let document = Document::read_from(source)?;
        match merged.as_mut() {
            None => merged = Some(document),
            Some(accumulator) => accumulator.absorb_units(&document)?,
        }
    }
    let merged = merged.ok_or(Error::NoOutput)?;
    merged.write_to(dest)
}

/// Folds parsed documents into the first one.
pub fn merge_tmx_documents(documents: Vec<Document>) -> Result<Document, Error> {
    let mut documents = documents.into_iter();
    let mut merged = documents.next().ok_or(Error::NoOutput)?;
    for document in documents {
        merged.absorb_units(&document)?;
    }
    Ok(merged)
}

//! Traits for format-agnostic parsing and serialization in msgsplice.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Cursor, Write},
    path::Path,
};

use crate::error::Error;

/// A trait for parsing and writing translation resources from/to one file.
///
/// # Example
///
/// ```rust,no_run
/// use msgsplice::traits::Parser;
/// let document = msgsplice::formats::tmx::Document::read_from("memory.tmx")?;
/// document.write_to("memory_copy.tmx")?;
/// Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Parser {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error>
    where
        Self: Sized;

    /// Parse from file path, decoding BOM-marked inputs to UTF-8.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(decoded_reader(path)?)
    }

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error>;

    /// Write to file path.
    fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        self.to_writer(writer)
    }

    /// Parse from a string.
    fn from_str(s: &str) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(s))
    }
}

/// Opens `path` with BOM auto-detection, so UTF-16 inputs decode to UTF-8;
/// plain UTF-8 passes through.
pub(crate) fn decoded_reader<P: AsRef<Path>>(path: P) -> Result<impl BufRead, Error> {
    let file = File::open(path).map_err(Error::Io)?;
    let decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
        .bom_override(true)
        .build(file);
    Ok(BufReader::new(decoder))
}

//! Properties-file section model.
//!
//! A section is an ordered run of `key = value` entries with interleaved
//! `#` comment lines; entries are separated by blank lines and insertion
//! order governs output order. Parsing is lenient: lines that are neither
//! comments nor `key = value` pairs are skipped.

use std::io::{BufRead, Write};

use crate::{error::Error, traits::Parser};

/// An ordered properties section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    /// All comment lines and entries, in file order.
    pub items: Vec<Item>,
}

/// One line-oriented item of a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    /// A raw comment line, marker included.
    Comment(String),
    Entry(Entry),
}

/// A single key/value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

impl Section {
    pub fn push_comment(&mut self, line: impl Into<String>) {
        self.items.push(Item::Comment(line.into()));
    }

    pub fn push_entry(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.items.push(Item::Entry(Entry {
            key: key.into(),
            value: value.into(),
        }));
    }

    /// All entries in insertion order, skipping comments.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.items.iter().filter_map(|item| match item {
            Item::Entry(entry) => Some(entry),
            Item::Comment(_) => None,
        })
    }
}

impl Parser for Section {
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut section = Section::default();
        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed.starts_with('#') {
                section.push_comment(trimmed);
                continue;
            }
            let Some((key, value)) = trimmed.split_once(" = ") else {
                continue; // not a key/value line
            };
            section.push_entry(key.trim(), value.trim());
        }
        Ok(section)
    }

    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        for item in &self.items {
            match item {
                Item::Comment(text) => writeln!(writer, "{text}")?,
                Item::Entry(Entry { key, value }) => write!(writer, "{key} = {value}\n\n")?,
            }
        }
        Ok(())
    }
}

/// Returns whether a template line continues the previous one, i.e. the
/// previous line ended with the literal properties continuation escape.
pub fn continues_previous(previous: &str) -> bool {
    previous.ends_with("\\n")
}

//! Splits a merged translation file into frontend and blocks-editor
//! resources for one language.

use std::fs;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use crate::{
    error::Error,
    escape::{double_single_quotes, strip_whitespace},
    formats::{jsmsg, properties},
    layout::ProjectLayout,
    traits::{Parser, decoded_reader},
};

const FRONTEND_PREFIX: &str = "appengine.";
const BLOCKS_PREFIX: &str = "blockseditor.";

/// Key suffixes whose values are machine-consumed signature lists.
const STRIPPED_SUFFIXES: [&str; 4] = ["Params", "Properties", "Methods", "Events"];

/// Palette category keys whose values keep their whitespace.
const PALETTE_CATEGORY_KEYS: [&str; 12] = [
    "userInterfaceComponentPallette",
    "layoutComponentPallette",
    "mediaComponentPallette",
    "drawingAndAnimationComponentPallette",
    "mapsComponentPallette",
    "sensorComponentPallette",
    "socialComponentPallette",
    "storageComponentPallette",
    "connectivityComponentPallette",
    "legoMindstormsComponentPallette",
    "experimentalComponentPallette",
    "extensionComponentPallette",
];

/// Splits one merged translation file for a single language.
#[derive(Debug, Clone)]
pub struct Splitter {
    lang: String,
    lang_name: String,
}

/// Paths written by a successful split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOutput {
    pub frontend: PathBuf,
    pub blocks: PathBuf,
}

impl Splitter {
    /// Creates a splitter for `lang` / `lang_name`; both must be non-empty.
    pub fn new(lang: impl Into<String>, lang_name: impl Into<String>) -> Result<Self, Error> {
        let lang = lang.into();
        let lang_name = lang_name.into();
        if lang.is_empty() {
            return Err(Error::MissingValue("language code"));
        }
        if lang_name.is_empty() {
            return Err(Error::MissingValue("language name"));
        }
        Ok(Splitter { lang, lang_name })
    }

    /// Partitions the merged stream into the two output models.
    ///
    /// Comment lines accumulate and flush immediately before the next
    /// frontend entry; language-switcher entries are dropped outright.
    pub fn split<R: BufRead>(
        &self,
        source: R,
    ) -> Result<(properties::Section, jsmsg::Format), Error> {
        let mut frontend = properties::Section::default();
        let mut blocks = jsmsg::Format::new(&self.lang, &self.lang_name);
        let mut pending_comments: Vec<String> = Vec::new();

        for line in source.lines() {
            let line = line?;
            if line.len() <= 1 {
                continue;
            }
            if line.starts_with('#') {
                pending_comments.push(line);
            } else if line.starts_with("appengine.switchTo")
                || line.starts_with("appengine.SwitchTo")
            {
                continue;
            } else if let Some(rest) = line.strip_prefix(FRONTEND_PREFIX) {
                for comment in pending_comments.drain(..) {
                    frontend.push_comment(comment);
                }
                let (key, value) = split_entry(rest, " = ")?;
                let value = if strips_whitespace(&key) {
                    strip_whitespace(&value)
                } else {
                    value
                };
                frontend.push_entry(key, double_single_quotes(&value));
            } else {
                let rest = line
                    .strip_prefix(BLOCKS_PREFIX)
                    .ok_or_else(|| Error::DataMismatch(format!("unprefixed message line: {line}")))?;
                let (key, value) = split_entry(rest, "=")?;
                blocks.push(key, value);
            }
        }

        Ok((frontend, blocks))
    }

    /// Reads `source` and writes both outputs at their layout paths,
    /// creating the blocks-editor language directory if absent.
    pub fn run<P: AsRef<Path>>(
        &self,
        layout: &ProjectLayout,
        source: P,
    ) -> Result<SplitOutput, Error> {
        let (frontend, blocks) = self.split(decoded_reader(source)?)?;

        let frontend_path = layout.frontend_properties(&self.lang);
        frontend.write_to(&frontend_path)?;

        let blocks_dir = layout.blocks_messages_dir_for(&self.lang);
        if !blocks_dir.is_dir() {
            fs::create_dir_all(&blocks_dir)?;
        }
        let blocks_path = layout.blocks_messages(&self.lang);
        blocks.write_to(&blocks_path)?;

        Ok(SplitOutput {
            frontend: frontend_path,
            blocks: blocks_path,
        })
    }
}

fn split_entry(line: &str, separator: &str) -> Result<(String, String), Error> {
    let (key, value) = line.split_once(separator).ok_or_else(|| {
        Error::DataMismatch(format!("message line has no key/value separator: {line}"))
    })?;
    Ok((key.trim().to_string(), value.trim().to_string()))
}

fn strips_whitespace(key: &str) -> bool {
    if STRIPPED_SUFFIXES.iter().any(|suffix| key.ends_with(suffix)) {
        return true;
    }
    key.ends_with("ComponentPallette")
        && !key.ends_with("HelpStringComponentPallette")
        && !PALETTE_CATEGORY_KEYS.contains(&key)
}

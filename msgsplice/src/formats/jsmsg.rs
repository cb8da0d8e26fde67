//! Blocks-editor JavaScript message files.
//!
//! Generated files wrap one assignment per message in a fixed Closure-style
//! module template. The canonical, hand-maintained English file defines
//! messages directly on `Blockly.Msg`; [`Parser::from_reader`] reverse-parses
//! that dialect back into key/value entries, carrying each value in
//! properties-escaped form so the writer and the reverse parser stay
//! inverses of each other.

use std::io::{BufRead, Write};

use indoc::indoc;
use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    error::Error,
    escape::{js_string_literal, properties_escape},
    traits::Parser,
};

lazy_static! {
    // Blockly.Msg.SOME_KEY = "..."; with '...' and [...] literal variants.
    static ref ASSIGNMENT: Regex =
        Regex::new(r#"^Blockly\.Msg\.([A-Z_]+)\s*=\s*?["'\[](.*)["'\]];"#).unwrap();
    // Outer quotes and +-markers of a concatenation fragment.
    static ref CONTINUATION: Regex =
        Regex::new(r#"^\s*\+?\s*(?:"|')?(.*)?(?:"|')\s*\+?"#).unwrap();
}

/// A blocks-editor message file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    /// Language code the generated module is registered under (empty when
    /// reverse-parsed, the canonical dialect carries no code).
    pub lang: String,
    /// Human-readable language name used in the initializer.
    pub lang_name: String,
    /// All messages, in source order.
    pub messages: Vec<Message>,
}

/// One message assignment; `value` is properties-escaped text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub key: String,
    pub value: String,
    /// Description comment preceding the assignment. Markers are stripped
    /// from `//` comments and kept on block comments.
    pub comment: Option<String>,
}

impl Format {
    /// Creates an empty message file for `lang` / `lang_name`.
    pub fn new(lang: impl Into<String>, lang_name: impl Into<String>) -> Self {
        Format {
            lang: lang.into(),
            lang_name: lang_name.into(),
            messages: Vec::new(),
        }
    }

    /// Appends a message with no description comment.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.messages.push(Message {
            key: key.into(),
            value: value.into(),
            comment: None,
        });
    }
}

fn header(lang: &str, lang_name: &str) -> String {
    format!(
        indoc! {"
            // This file is automatically generated by msgsplice.
            // Do not edit it manually, as your changes will be overwritten.

            'use strict';

            goog.provide('AI.Blockly.Msg.{lang}');
            goog.require('Blockly.Msg.{lang}');

            Blockly.Msg.{lang}.switch_language_to_{name} = {{
              // Switch language to {name}.
              category: '',
              helpUrl: '',
              init: function() {{
                Blockly.Msg.{lang}.switch_blockly_language_to_{lang}.init();
        "},
        lang = lang,
        name = lang_name,
    )
}

const FOOTER: &str = "  }\n};\n";

impl Parser for Format {
    /// Reverse-parses the canonical message dialect: assignments on
    /// `Blockly.Msg`, possibly spread over `+`-concatenated lines, with
    /// `//` and `/* */` description comments. Buffers that end in `;` but
    /// fail the assignment pattern are dropped without error.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut messages = Vec::new();
        let mut comment: Option<String> = None;
        let mut full_line = String::new();
        let mut in_block_comment = false;
        let mut in_continuation = false;

        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line.starts_with("//") {
                comment = Some(line.get(3..).unwrap_or("").to_string());
                continue;
            }
            if in_block_comment {
                full_line.push_str(line);
                if line.ends_with("*/") {
                    comment = Some(std::mem::take(&mut full_line));
                    in_block_comment = false;
                }
                continue;
            }
            if line.starts_with("/*") {
                full_line = line.to_string();
                in_block_comment = true;
                continue;
            }
            if line.ends_with('{') {
                full_line.clear();
                continue;
            }
            let fragment = if line.starts_with('+') || line.ends_with('+') {
                in_continuation = true;
                CONTINUATION
                    .captures(line)
                    .and_then(|caps| caps.get(1))
                    .map(|m| m.as_str())
                    .unwrap_or("")
            } else if in_continuation {
                in_continuation = false;
                line.get(1..).unwrap_or("")
            } else {
                line
            };
            full_line.push_str(fragment);
            if full_line.ends_with(';') {
                if let Some(caps) = ASSIGNMENT.captures(&full_line) {
                    messages.push(Message {
                        key: caps[1].to_string(),
                        value: properties_escape(&caps[2]),
                        comment: comment.take(),
                    });
                }
                full_line.clear();
            }
        }

        Ok(Format {
            lang: String::new(),
            lang_name: String::new(),
            messages,
        })
    }

    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        writer.write_all(header(&self.lang, &self.lang_name).as_bytes())?;
        for message in &self.messages {
            writeln!(
                writer,
                "    Blockly.Msg.{}.{} = {};",
                self.lang,
                message.key,
                js_string_literal(&message.value)
            )?;
        }
        writer.write_all(FOOTER.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Parser;

    #[test]
    fn test_reverse_parse_escapes_value() {
        let content = r#"Blockly.Msg.FOO = "it's: a=b";"#;
        let format = Format::from_str(content).unwrap();
        assert_eq!(format.messages.len(), 1);
        assert_eq!(format.messages[0].key, "FOO");
        assert_eq!(format.messages[0].value, "it''s\\: a\\=b");
    }

    #[test]
    fn test_line_comment_attaches_to_next_assignment() {
        let content = "// A greeting.\nBlockly.Msg.HELLO = 'Hello';\nBlockly.Msg.BYE = 'Bye';\n";
        let format = Format::from_str(content).unwrap();
        assert_eq!(format.messages.len(), 2);
        assert_eq!(format.messages[0].comment.as_deref(), Some("A greeting."));
        assert_eq!(format.messages[1].comment, None);
    }

    #[test]
    fn test_block_comment_keeps_markers() {
        let content = "/* Shown in the\ntoolbox flyout. */\nBlockly.Msg.FLYOUT = 'Flyout';\n";
        let format = Format::from_str(content).unwrap();
        assert_eq!(format.messages.len(), 1);
        let comment = format.messages[0].comment.as_deref().unwrap();
        assert!(comment.starts_with("/*"));
        assert!(comment.ends_with("*/"));
        assert!(comment.contains("toolbox flyout."));
    }

    #[test]
    fn test_concatenated_assignment_joins_fragments() {
        let content = "Blockly.Msg.LONG = 'part one ' +\n    'part two';\n";
        let format = Format::from_str(content).unwrap();
        assert_eq!(format.messages.len(), 1);
        assert_eq!(format.messages[0].key, "LONG");
        assert_eq!(format.messages[0].value, "part one part two");
    }

    #[test]
    fn test_function_bodies_and_unmatched_buffers_are_skipped() {
        let content = "\
Blockly.Msg.SOMETHING = {\n\
  init: function() {\n\
var notAMessage = compute();\n\
Blockly.Msg.REAL = 'yes';\n";
        let format = Format::from_str(content).unwrap();
        assert_eq!(format.messages.len(), 1);
        assert_eq!(format.messages[0].key, "REAL");
    }

    #[test]
    fn test_comment_survives_unmatched_buffer() {
        let content = "// Keep me.\nvar x = 1;\nBlockly.Msg.KEPT = 'v';\n";
        let format = Format::from_str(content).unwrap();
        assert_eq!(format.messages.len(), 1);
        assert_eq!(format.messages[0].comment.as_deref(), Some("Keep me."));
    }

    #[test]
    fn test_namespaced_assignments_are_not_canonical() {
        // Generated per-language files nest keys under the language code;
        // only the canonical dialect reverse-parses.
        let content = "Blockly.Msg.es.HELLO = 'Hola';\n";
        let format = Format::from_str(content).unwrap();
        assert!(format.messages.is_empty());
    }

    #[test]
    fn test_writer_emits_template_and_assignments() {
        let mut format = Format::new("es", "Spanish");
        format.push("GREETING", "Hola");
        format.push("TRICKY", "it''s\\: a\\=b");

        let mut out = Vec::new();
        format.to_writer(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("goog.provide('AI.Blockly.Msg.es');"));
        assert!(text.contains("Blockly.Msg.es.switch_language_to_Spanish = {"));
        assert!(text.contains("Blockly.Msg.es.switch_blockly_language_to_es.init();"));
        assert!(text.contains("    Blockly.Msg.es.GREETING = 'Hola';"));
        assert!(text.contains("    Blockly.Msg.es.TRICKY = 'it\\'s: a=b';"));
        assert!(text.ends_with("  }\n};\n"));
    }
}

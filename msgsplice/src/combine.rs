//! Recombines generated frontend properties and canonical blocks-editor
//! messages into one translation template.

use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::PathBuf;

use crate::{
    error::Error,
    formats::{jsmsg, properties},
    layout::ProjectLayout,
    traits::{Parser, decoded_reader},
};

/// Rebuilds the translation template under `layout`, returning its path.
///
/// Reads the generated default-locale properties file and the canonical
/// English message file at their fixed layout locations.
pub fn combine(layout: &ProjectLayout) -> Result<PathBuf, Error> {
    let blocks = jsmsg::Format::read_from(layout.canonical_blocks_messages())?;
    let frontend = decoded_reader(&layout.generated_properties)?;

    let output_path = layout.template_output.clone();
    let file = File::create(&output_path)?;
    write_template(frontend, &blocks, BufWriter::new(file))?;

    Ok(output_path)
}

/// Writes the two labeled template sections.
///
/// Frontend lines gain the `appengine.` prefix unless they are comments,
/// blank, or continue a multi-line value from the previous line.
pub fn write_template<R: BufRead, W: Write>(
    frontend: R,
    blocks: &jsmsg::Format,
    mut out: W,
) -> Result<(), Error> {
    writeln!(out, "# Frontend definitions")?;
    let mut previous = String::new();
    for line in frontend.lines() {
        let line = line?;
        if properties::continues_previous(&previous)
            || line.starts_with('#')
            || line.trim().is_empty()
        {
            writeln!(out, "{line}")?;
        } else {
            writeln!(out, "appengine.{line}")?;
        }
        previous = line;
    }

    writeln!(out)?;
    writeln!(out, "# Blocks editor definitions")?;
    for message in &blocks.messages {
        writeln!(out, "blockseditor.{} = {}", message.key, message.value)?;
        if let Some(comment) = &message.comment {
            if !comment.is_empty() {
                writeln!(out, "# Description: {comment}")?;
            }
        }
    }
    Ok(())
}

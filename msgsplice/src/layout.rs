//! Project-tree path layout for the i18n pipeline.
//!
//! The pipelines read and write fixed locations under one project root;
//! [`ProjectLayout`] makes those locations explicit and overridable instead
//! of deriving them from the working directory at each call site.

use std::path::PathBuf;

/// Resolved input/output locations under a web-editor project tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    /// Project root all default paths hang off.
    pub root: PathBuf,
    /// Directory receiving per-language frontend properties files.
    pub frontend_messages_dir: PathBuf,
    /// Default-locale properties file produced by the frontend build.
    pub generated_properties: PathBuf,
    /// Directory holding per-language blocks-editor message files.
    pub blocks_messages_dir: PathBuf,
    /// Destination of the combined translation template.
    pub template_output: PathBuf,
}

impl ProjectLayout {
    /// Creates the default layout under `root`.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        let root = root.into();
        ProjectLayout {
            frontend_messages_dir: root.join("appengine").join("src").join("msg"),
            generated_properties: root
                .join("appengine")
                .join("build")
                .join("msg")
                .join("Messages_default.properties"),
            blocks_messages_dir: root.join("blockseditor").join("src").join("msg"),
            template_output: root.join("i18n").join("translation_template.properties"),
            root,
        }
    }

    /// Overrides the generated default-locale properties path.
    pub fn with_generated_properties<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.generated_properties = path.into();
        self
    }

    /// Overrides the translation template output path.
    pub fn with_template_output<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.template_output = path.into();
        self
    }

    /// Frontend properties file for `lang`.
    pub fn frontend_properties(&self, lang: &str) -> PathBuf {
        self.frontend_messages_dir
            .join(format!("Messages_{lang}.properties"))
    }

    /// Directory holding the blocks-editor messages for `lang`.
    pub fn blocks_messages_dir_for(&self, lang: &str) -> PathBuf {
        self.blocks_messages_dir.join(lang)
    }

    /// Blocks-editor message file for `lang`.
    pub fn blocks_messages(&self, lang: &str) -> PathBuf {
        self.blocks_messages_dir_for(lang).join("_messages.js")
    }

    /// The hand-maintained English message file the combiner reads.
    pub fn canonical_blocks_messages(&self) -> PathBuf {
        self.blocks_messages("en")
    }
}

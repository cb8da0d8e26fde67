use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use msgsplice::{ProjectLayout, Splitter};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "msgsplice", author, version, about, long_about = None)]
struct Args {
    /// Project root the fixed input/output paths hang off
    #[arg(long, default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Rebuild the translation template from the generated properties file
    /// and the canonical English message file.
    Combine,

    /// Split a merged translation file into frontend and blocks-editor
    /// resources for one language.
    Split {
        /// Language code used in output paths and the generated module
        #[arg(long)]
        lang: String,

        /// Human-readable language name
        #[arg(long = "lang_name")]
        lang_name: String,

        /// Merged messages file to split
        source: PathBuf,
    },

    /// Merge TMX documents in listed order, unioning translation units by
    /// their tuid.
    #[command(name = "tmx_merge")]
    TmxMerge {
        /// Destination path for the merged document
        #[arg(long)]
        dest: PathBuf,

        /// TMX files to merge
        source_files: Vec<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let layout = ProjectLayout::new(&args.root);

    let result = match args.command {
        Commands::Combine => run_combine(&layout),
        Commands::Split {
            lang,
            lang_name,
            source,
        } => run_split(&layout, &lang, &lang_name, &source),
        Commands::TmxMerge { dest, source_files } => run_tmx_merge(&dest, &source_files),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_combine(layout: &ProjectLayout) -> Result<(), msgsplice::Error> {
    debug!(root = %layout.root.display(), "combining translation template");
    let path = msgsplice::combine(layout)?;
    info!(path = %path.display(), "wrote translation template");
    Ok(())
}

fn run_split(
    layout: &ProjectLayout,
    lang: &str,
    lang_name: &str,
    source: &Path,
) -> Result<(), msgsplice::Error> {
    debug!(%lang, %lang_name, source = %source.display(), "splitting merged messages");
    let output = Splitter::new(lang, lang_name)?.run(layout, source)?;
    info!(
        frontend = %output.frontend.display(),
        blocks = %output.blocks.display(),
        "split merged messages"
    );
    Ok(())
}

fn run_tmx_merge(dest: &Path, source_files: &[PathBuf]) -> Result<(), msgsplice::Error> {
    debug!(sources = source_files.len(), dest = %dest.display(), "merging TMX documents");
    msgsplice::merge_tmx_files(source_files, dest)?;
    info!(dest = %dest.display(), "wrote merged TMX document");
    Ok(())
}

//! `rhyme-tag`: annotate the rhyme schemes of a transcribed poem.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use verse_rhyme::{tag_poem_file, Mode, Tagger, TaggerConfig};

#[derive(Parser, Debug)]
#[command(name = "rhyme-tag", about = "Tag rhyme schemes in a poem.")]
struct Cli {
    /// Path to a json file with phonemic transcriptions
    jsonfile: PathBuf,

    /// Compare written words instead of pronunciations
    #[arg(long)]
    orthographic: bool,

    /// JSON file with tagger settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Set logging level to debug
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => TaggerConfig::from_path(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?,
        None => TaggerConfig::default(),
    };
    if cli.orthographic {
        config.mode = Mode::Orthographic;
    }

    let tagger = Tagger::new(&config);
    let outputfile = tag_poem_file(&cli.jsonfile, &tagger)
        .with_context(|| format!("Failed to tag {}", cli.jsonfile.display()))?;
    println!("{}", outputfile.display());

    Ok(())
}

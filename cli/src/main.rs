use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use icon_enum_generator::EnumGenerator;
use icon_enum_types::EnumerationDocument;
use tracing_subscriber::EnvFilter;

/// Generate a C++ `enum class` of icon codepoints from an icon-font stylesheet.
#[derive(Parser)]
#[command(name = "icon-enum")]
#[command(version)]
struct Cli {
    /// CSS file with `.icon-NAME:before { content: '\eXXXX'; }` rules
    #[arg(allow_hyphen_values = true)]
    stylesheet: PathBuf,
    /// Name of the generated enumeration [default: custom_icons]
    enum_name: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let rules = icon_enum_parser::load_icon_rules(&cli.stylesheet)?;
    let doc = match cli.enum_name {
        Some(name) => EnumerationDocument::new(name, rules),
        None => EnumerationDocument::with_default_name(rules),
    };
    if doc.is_empty() {
        tracing::debug!(path = %cli.stylesheet.display(), "no icon rules found");
    }
    tracing::info!(name = doc.name(), entries = doc.len(), "generated enumeration");

    let out = EnumGenerator::new(&doc).out();
    io::stdout()
        .lock()
        .write_all(out.as_bytes())
        .context("failed to write enumeration to stdout")?;
    Ok(())
}

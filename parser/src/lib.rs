use icon_enum_types::IconRule;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// The stylesheet could not be opened or read as text.
#[derive(Debug, thiserror::Error)]
#[error("failed to read stylesheet `{}`", .path.display())]
pub struct FileAccessError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

pub fn read_stylesheet(path: impl AsRef<Path>) -> Result<String, FileAccessError> {
    let path = path.as_ref();
    let css = fs::read_to_string(path).map_err(|source| FileAccessError {
        path: path.to_owned(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = css.len(), "read stylesheet");
    Ok(css)
}

lazy_static! {
    // .icon-NAME:before { [other: decls;] content: '\eXXXX'; }
    // Never crosses a brace, so a match stays inside one rule block.
    static ref RULE: Regex = Regex::new(
        r#"\.icon-([A-Za-z0-9-]+):before\s*\{(?:[^{}]*?;)?\s*content\s*:\s*(?:'\\(e[0-9a-z]+)'|"\\(e[0-9a-z]+)")\s*;"#
    )
    .unwrap();
}

fn rule_from_captures(caps: Captures) -> Option<IconRule> {
    let name = caps.get(1)?;
    let codepoint = caps.get(2).or_else(|| caps.get(3))?;
    Some(IconRule::new(name.as_str(), codepoint.as_str()))
}

/// Lazily scans `css` for icon rules, left to right.
pub fn icon_rules(css: &str) -> impl Iterator<Item = IconRule> + '_ {
    RULE.captures_iter(css).filter_map(rule_from_captures)
}

pub fn scan_icon_rules(css: &str) -> Vec<IconRule> {
    let rules: Vec<_> = icon_rules(css).collect();
    tracing::debug!(matches = rules.len(), "scanned stylesheet");
    rules
}

pub fn load_icon_rules(path: impl AsRef<Path>) -> Result<Vec<IconRule>, FileAccessError> {
    let css = read_stylesheet(path)?;
    Ok(scan_icon_rules(&css))
}

//! Error types for configuration loading and source parsing.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("sectionOrder must list at least one section")]
    EmptySectionOrder,
    #[error("sectionOrder lists \"{0}\" more than once")]
    DuplicateSection(String),
    #[error("sectionOrder contains unknown section \"{label}\" (known: {known})")]
    UnknownSection { label: String, known: String },
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unterminated <{tag}> element starting at byte {offset}")]
    UnterminatedElement { tag: String, offset: usize },
    #[error("script parse error at byte {offset}: {message}")]
    Script { offset: usize, message: String },
}

// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while collecting postings. None of them abort a run:
/// transport failures end pagination for the current role, parse failures
/// skip a single posting or blank out its skills.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CollectError {
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    #[error("missing `{element}` element in {context}")]
    Parse {
        element: &'static str,
        context: &'static str,
    },
}

impl CollectError {
    pub fn transport(url: &str, reason: impl ToString) -> Self {
        Self::Transport {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn missing(element: &'static str, context: &'static str) -> Self {
        Self::Parse { element, context }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

/// Fatal configuration problems, raised before any collection starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write configuration {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("unsupported configuration format: {0} (expected .json, .yaml, .yml or .toml)")]
    UnsupportedFormat(PathBuf),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

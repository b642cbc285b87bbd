//! Error taxonomy for a harvest run.
//!
//! Only two failure classes abort a run: a category URL that cannot be
//! rendered, and a filesystem operation on one of the output artifacts.
//! Extraction misses and a corrupt ledger are handled in place and never
//! surface here.

use std::path::PathBuf;
use thiserror::Error;

/// A fatal error during a harvest run.
#[derive(Debug, Error)]
pub enum HarvestError {
    /// The renderer could not load a category URL (network, timeout).
    /// Aborts the entire run; no dated output is written.
    #[error("failed to render {url}: {source:#}")]
    Navigation {
        url: String,
        source: anyhow::Error,
    },

    /// Directory creation or artifact write failed.
    #[error("filesystem operation failed on {path}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl HarvestError {
    pub(crate) fn navigation(url: impl Into<String>, source: anyhow::Error) -> Self {
        Self::Navigation {
            url: url.into(),
            source,
        }
    }

    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }
}

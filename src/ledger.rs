//! Persistent set of previously seen question strings.
//!
//! The ledger is the cross-run dedup store: one normalized question per
//! line, rewritten in full (sorted) at the end of every run. A `BTreeSet`
//! keeps the serialization sorted and diff-stable for free.

use crate::error::HarvestError;
use crate::extract::QuizRecord;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::warn;

/// Seen-question set, loaded once per run and persisted exactly once.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Ledger {
    seen: BTreeSet<String>,
}

impl Ledger {
    /// Load the ledger from a newline-delimited file.
    ///
    /// Lines are trimmed and empty lines discarded. A missing file yields
    /// an empty set; an unreadable or undecodable file is treated the same
    /// way, with a warning, since dedup can recover on the next persist.
    pub fn load(path: &Path) -> Self {
        let seen = match std::fs::read_to_string(path) {
            Ok(text) => text
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect(),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeSet::new(),
            Err(err) => {
                warn!("ledger {} unreadable ({err}), starting empty", path.display());
                BTreeSet::new()
            }
        };
        Self { seen }
    }

    /// Accept the records whose question has not been seen before and
    /// record each accepted question. Acceptance is global: the same
    /// question surfacing twice in one run is accepted only the first time.
    pub fn filter_and_record(&mut self, records: Vec<QuizRecord>) -> Vec<QuizRecord> {
        records
            .into_iter()
            .filter(|rec| self.seen.insert(rec.question.clone()))
            .collect()
    }

    /// Overwrite the ledger file with one question per line, sorted
    /// lexicographically for deterministic diffs.
    pub fn persist(&self, path: &Path) -> Result<(), HarvestError> {
        let body = self
            .seen
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n");
        std::fs::write(path, body).map_err(|source| HarvestError::filesystem(path, source))
    }

    /// Whether the question is already recorded.
    pub fn contains(&self, question: &str) -> bool {
        self.seen.contains(question)
    }

    /// Number of recorded questions.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

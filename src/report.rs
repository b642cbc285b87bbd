//! Dated report rendering.
//!
//! The text format is a compatibility contract: downstream consumers diff
//! and archive these files, so the section rule, record labels, and the
//! 20-hyphen separator must not change.

use crate::error::HarvestError;
use crate::extract::QuizRecord;
use std::fmt::Write as _;
use std::path::Path;

const SECTION_RULE: &str = "==============";
const RECORD_RULE: &str = "--------------------";

/// Render accumulated per-category results into the report text.
///
/// Categories with no accepted records are omitted entirely — no empty
/// section headers.
pub fn render(results: &[(String, Vec<QuizRecord>)]) -> String {
    let mut out = String::new();

    for (label, records) in results {
        if records.is_empty() {
            continue;
        }
        // Writes to a String are infallible.
        let _ = writeln!(out, "{SECTION_RULE} {label} {SECTION_RULE}");
        for (i, rec) in records.iter().enumerate() {
            let _ = writeln!(out, "[퀴즈 {}]", i + 1);
            let _ = writeln!(out, "문제: {}", rec.question);
            let _ = writeln!(out, "보기:");
            for opt in &rec.options {
                let _ = writeln!(out, "- {opt}");
            }
            let _ = writeln!(out, "정답: {}", rec.answer);
            let _ = writeln!(out, "{RECORD_RULE}");
            out.push('\n');
        }
    }

    out
}

/// Render and write the dated report file, overwriting any previous file
/// for the same date.
pub fn write(path: &Path, results: &[(String, Vec<QuizRecord>)]) -> Result<(), HarvestError> {
    std::fs::write(path, render(results)).map_err(|source| HarvestError::filesystem(path, source))
}

//! Run orchestration: render each category, extract, dedup, write artifacts.

use crate::config::{HarvestConfig, CATEGORIES};
use crate::error::HarvestError;
use crate::extract::{self, QuizRecord};
use crate::ledger::Ledger;
use crate::renderer::Renderer;
use crate::report;
use chrono::Utc;
use std::path::PathBuf;
use tracing::{info, warn};

/// Summary of a completed run.
#[derive(Debug, Clone, serde::Serialize)]
pub struct HarvestReport {
    /// Path of the dated report file.
    pub outfile: PathBuf,
    /// Number of questions recorded for the first time.
    pub new_questions: usize,
}

/// Execute one harvest run.
///
/// Per category, in fixed order: render the SERP, extract quiz blocks,
/// keep the unseen ones. Afterwards the dated report is written (empty
/// categories omitted) and the ledger is rewritten unconditionally, so a
/// no-op run still leaves a stable ledger file behind. A navigation
/// failure aborts the run before any artifact is touched; the caller owns
/// the renderer and remains responsible for shutting it down.
pub async fn run(config: &HarvestConfig, renderer: &dyn Renderer) -> Result<HarvestReport, HarvestError> {
    std::fs::create_dir_all(&config.out_dir)
        .map_err(|source| HarvestError::filesystem(&config.out_dir, source))?;

    let mut ledger = Ledger::load(&config.ledger_path());
    info!("ledger loaded with {} known questions", ledger.len());

    let mut results: Vec<(String, Vec<QuizRecord>)> = Vec::new();
    let mut new_questions = 0;

    // A fresh context starts on about:blank; failing to open one is a
    // navigation failure like any other.
    let mut context = renderer
        .new_context()
        .await
        .map_err(|source| HarvestError::navigation("about:blank", source))?;

    for category in CATEGORIES {
        let nav = context
            .navigate(category.url, config.timeout_ms)
            .await
            .map_err(|source| HarvestError::navigation(category.url, source))?;

        let html = context
            .content()
            .await
            .map_err(|source| HarvestError::navigation(category.url, source))?;

        // scraper's DOM is not Send, so parsing runs on a blocking thread.
        let records = tokio::task::spawn_blocking(move || extract::extract_quizzes(&html))
            .await
            .unwrap_or_default();

        let extracted = records.len();
        let accepted = ledger.filter_and_record(records);
        new_questions += accepted.len();

        info!(
            category = category.label,
            url = %nav.final_url,
            load_ms = nav.load_time_ms,
            extracted,
            accepted = accepted.len(),
            "category harvested"
        );

        results.push((category.label.to_string(), accepted));
    }

    if let Err(err) = context.close().await {
        warn!("page close failed: {err:#}");
    }

    let outfile = config.dated_outfile(Utc::now().date_naive());
    report::write(&outfile, &results)?;
    ledger.persist(&config.ledger_path())?;

    Ok(HarvestReport {
        outfile,
        new_questions,
    })
}

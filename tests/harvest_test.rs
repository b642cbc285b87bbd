//! End-to-end pipeline tests over a canned in-memory renderer.

use anyhow::{bail, Result};
use async_trait::async_trait;
use quizharvest::config::{HarvestConfig, CATEGORIES};
use quizharvest::error::HarvestError;
use quizharvest::harvest;
use quizharvest::renderer::{NavigationResult, RenderContext, Renderer};
use std::collections::HashMap;
use std::sync::Arc;

/// Serves fixed HTML per URL; unknown URLs render an empty page.
struct CannedRenderer {
    pages: Arc<HashMap<String, String>>,
    fail_on: Option<String>,
}

impl CannedRenderer {
    fn new(pages: HashMap<String, String>) -> Self {
        Self {
            pages: Arc::new(pages),
            fail_on: None,
        }
    }

    fn failing_on(pages: HashMap<String, String>, url: &str) -> Self {
        Self {
            pages: Arc::new(pages),
            fail_on: Some(url.to_string()),
        }
    }
}

#[async_trait]
impl Renderer for CannedRenderer {
    async fn new_context(&self) -> Result<Box<dyn RenderContext>> {
        Ok(Box::new(CannedContext {
            pages: Arc::clone(&self.pages),
            fail_on: self.fail_on.clone(),
            current: String::new(),
        }))
    }

    async fn close(&self) -> Result<()> {
        Ok(())
    }
}

struct CannedContext {
    pages: Arc<HashMap<String, String>>,
    fail_on: Option<String>,
    current: String,
}

#[async_trait]
impl RenderContext for CannedContext {
    async fn navigate(&mut self, url: &str, _timeout_ms: u64) -> Result<NavigationResult> {
        if self.fail_on.as_deref() == Some(url) {
            bail!("net::ERR_CONNECTION_RESET");
        }
        self.current = self.pages.get(url).cloned().unwrap_or_default();
        Ok(NavigationResult {
            final_url: url.to_string(),
            load_time_ms: 1,
        })
    }

    async fn content(&self) -> Result<String> {
        Ok(self.current.clone())
    }

    async fn close(self: Box<Self>) -> Result<()> {
        Ok(())
    }
}

fn quiz_page(question: &str, options: &[&str]) -> String {
    let items: String = options
        .iter()
        .map(|o| format!("<li>{o}</li>"))
        .collect();
    format!(
        r#"<html><body><div class="korean_quiz"><span class="quiz_txt">{question}</span><ul>{items}</ul></div></body></html>"#
    )
}

fn config_in(dir: &std::path::Path) -> HarvestConfig {
    HarvestConfig {
        out_dir: dir.to_path_buf(),
        ..HarvestConfig::default()
    }
}

fn url_of(label: &str) -> String {
    CATEGORIES
        .iter()
        .find(|c| c.label == label)
        .expect("known category")
        .url
        .to_string()
}

#[tokio::test]
async fn test_first_run_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    let mut pages = HashMap::new();
    pages.insert(
        url_of("맞춤법"),
        quiz_page("보기 중 맞는 표현은?", &["금세", "금새"]),
    );
    let renderer = CannedRenderer::new(pages);

    let report = harvest::run(&config, &renderer).await.unwrap();
    assert_eq!(report.new_questions, 1);

    let dated = std::fs::read_to_string(&report.outfile).unwrap();
    assert!(dated.contains("============== 맞춤법 =============="));
    assert!(dated.contains("문제: 보기 중 맞는 표현은?"));
    assert!(dated.contains("- 금세"));
    assert!(dated.contains("- 금새"));

    let ledger = std::fs::read_to_string(config.ledger_path()).unwrap();
    assert_eq!(ledger, "보기 중 맞는 표현은?");
}

#[tokio::test]
async fn test_second_run_accepts_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    let mut pages = HashMap::new();
    pages.insert(url_of("맞춤법"), quiz_page("이미 본 질문?", &["예", "아니오"]));
    let renderer = CannedRenderer::new(pages);

    let first = harvest::run(&config, &renderer).await.unwrap();
    assert_eq!(first.new_questions, 1);

    let ledger_before = std::fs::read_to_string(config.ledger_path()).unwrap();

    let second = harvest::run(&config, &renderer).await.unwrap();
    assert_eq!(second.new_questions, 0);

    // The no-op run still rewrote a stable ledger and an empty dated file.
    let ledger_after = std::fs::read_to_string(config.ledger_path()).unwrap();
    assert_eq!(ledger_before, ledger_after);
    assert_eq!(std::fs::read_to_string(&second.outfile).unwrap(), "");
}

#[tokio::test]
async fn test_empty_categories_omitted_from_report() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    let mut pages = HashMap::new();
    pages.insert(url_of("사자성어"), quiz_page("고진감래의 뜻은?", &["a", "b"]));
    let renderer = CannedRenderer::new(pages);

    let report = harvest::run(&config, &renderer).await.unwrap();
    let dated = std::fs::read_to_string(&report.outfile).unwrap();
    assert!(dated.contains("============== 사자성어 =============="));
    assert!(!dated.contains("속담"));
    assert!(!dated.contains("맞춤법"));
}

#[tokio::test]
async fn test_cross_category_dedup_first_category_wins() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    // The same question surfaces in two categories; 맞춤법 iterates first.
    let mut pages = HashMap::new();
    pages.insert(url_of("맞춤법"), quiz_page("중복 질문?", &["x", "y"]));
    pages.insert(url_of("사자성어"), quiz_page("중복 질문?", &["x", "y"]));
    let renderer = CannedRenderer::new(pages);

    let report = harvest::run(&config, &renderer).await.unwrap();
    assert_eq!(report.new_questions, 1);

    let dated = std::fs::read_to_string(&report.outfile).unwrap();
    assert!(dated.contains("============== 맞춤법 =============="));
    assert!(!dated.contains("사자성어"));
}

#[tokio::test]
async fn test_navigation_failure_aborts_without_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    let mut pages = HashMap::new();
    pages.insert(url_of("맞춤법"), quiz_page("첫 카테고리 질문?", &["a"]));
    // Second category fails after the first already accepted a record.
    let renderer = CannedRenderer::failing_on(pages, &url_of("사자성어"));

    let err = harvest::run(&config, &renderer).await.unwrap_err();
    assert!(matches!(err, HarvestError::Navigation { .. }));
    assert!(err.to_string().contains("ERR_CONNECTION_RESET"));

    // Neither artifact was written.
    assert!(!config.ledger_path().exists());
    let leftovers: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert!(leftovers.is_empty());
}

#[tokio::test]
async fn test_ledger_grows_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    let mut pages = HashMap::new();
    pages.insert(url_of("외래어"), quiz_page("바른 외래어 표기는?", &["a", "b"]));
    harvest::run(&config, &CannedRenderer::new(pages)).await.unwrap();

    let mut pages = HashMap::new();
    pages.insert(url_of("신조어"), quiz_page("요즘 쓰는 새말은?", &["c", "d"]));
    harvest::run(&config, &CannedRenderer::new(pages)).await.unwrap();

    let ledger = std::fs::read_to_string(config.ledger_path()).unwrap();
    let lines: Vec<&str> = ledger.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines.contains(&"바른 외래어 표기는?"));
    assert!(lines.contains(&"요즘 쓰는 새말은?"));
    // Sorted ascending for deterministic diffs.
    let mut sorted = lines.clone();
    sorted.sort();
    assert_eq!(lines, sorted);
}

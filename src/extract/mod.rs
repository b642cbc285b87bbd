//! Quiz record extraction from rendered SERP markup.
//!
//! Candidate blocks come from the structural matcher; each block is then
//! probed for a question node, option list items, and an optional marked
//! answer. Blocks missing a question or options are skipped silently —
//! with drifting site markup that is the expected common case, not an
//! error.

pub mod matcher;

use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing::debug;

/// Question node selectors, most specific first. The first selector with
/// a match wins.
const QUESTION_SELECTORS: &[&str] = &[
    ".quiz_txt",
    ".question",
    r#"[class*="quiz"] h3"#,
    r#"[class*="quiz"] .question"#,
];

static QUESTION: OnceLock<Vec<Selector>> = OnceLock::new();
static OPTION: OnceLock<Selector> = OnceLock::new();
static ANSWER: OnceLock<Selector> = OnceLock::new();

fn question_selectors() -> &'static [Selector] {
    QUESTION.get_or_init(|| {
        QUESTION_SELECTORS
            .iter()
            .map(|s| Selector::parse(s).expect("static selector"))
            .collect()
    })
}

fn option_selector() -> &'static Selector {
    OPTION.get_or_init(|| Selector::parse("li").expect("static selector"))
}

fn answer_selector() -> &'static Selector {
    ANSWER.get_or_init(|| {
        // Either a node marked correct or a list item flagged as the true
        // answer; first match in document order wins.
        Selector::parse(r#"[data-correct="1"], li[data-answer="true"]"#)
            .expect("static selector")
    })
}

/// One extracted quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizRecord {
    /// Question text, whitespace-normalized, never empty.
    pub question: String,
    /// Option texts in document order, duplicates allowed, never empty.
    pub options: Vec<String>,
    /// Marked answer text, empty when the widget does not reveal one.
    pub answer: String,
}

/// Extract all quiz records from rendered HTML, in document order.
pub fn extract_quizzes(html: &str) -> Vec<QuizRecord> {
    let document = Html::parse_document(html);
    matcher::select_blocks(&document)
        .into_iter()
        .filter_map(record_from_block)
        .collect()
}

fn record_from_block(block: ElementRef<'_>) -> Option<QuizRecord> {
    let question = question_selectors()
        .iter()
        .find_map(|sel| block.select(sel).next())
        .map(|el| element_text(&el))
        .filter(|q| !q.is_empty());

    let Some(question) = question else {
        debug!("skipping block without a question node");
        return None;
    };

    let options: Vec<String> = block
        .select(option_selector())
        .map(|li| element_text(&li))
        .filter(|t| !t.is_empty())
        .collect();

    if options.is_empty() {
        debug!(%question, "skipping block without options");
        return None;
    }

    let answer = block
        .select(answer_selector())
        .next()
        .map(|el| element_text(&el))
        .unwrap_or_default();

    Some(QuizRecord {
        question,
        options,
        answer,
    })
}

/// Text content of an element with every Unicode whitespace run (including
/// non-breaking variants common in localized markup) collapsed to a single
/// space, trimmed.
fn element_text(el: &ElementRef<'_>) -> String {
    let mut out = String::new();
    for token in el.text().flat_map(str::split_whitespace) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(token);
    }
    out
}

#[cfg(test)]
pub(crate) fn squash_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

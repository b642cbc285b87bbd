//! Structural block matching for quiz widgets.
//!
//! Naver reshuffles the SERP widget markup without notice, so no single
//! selector stays valid for long. Instead of one fixed query, candidate
//! blocks are matched by an ordered set of structural signals evaluated
//! against every element in one document-order pass. An element matching
//! several signals is still selected exactly once.

use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use std::sync::OnceLock;

static ANY_ELEMENT: OnceLock<Selector> = OnceLock::new();
static QUIZ_TEXT: OnceLock<Selector> = OnceLock::new();

fn any_element() -> &'static Selector {
    ANY_ELEMENT.get_or_init(|| Selector::parse("*").expect("static selector"))
}

fn quiz_text() -> &'static Selector {
    QUIZ_TEXT.get_or_init(|| Selector::parse(".quiz_txt").expect("static selector"))
}

/// One structural signal hypothesizing that a `div` wraps a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockSignal {
    /// The dedicated quiz container class of the stable widget markup.
    QuizContainer,
    /// A division wrapping a node carrying the quiz-text class.
    QuizTextDescendant,
    /// A division whose class attribute mentions "quiz" at all.
    QuizClassSubstring,
}

impl BlockSignal {
    /// All signals, most specific first.
    pub const ALL: [BlockSignal; 3] = [
        BlockSignal::QuizContainer,
        BlockSignal::QuizTextDescendant,
        BlockSignal::QuizClassSubstring,
    ];

    /// Whether this signal matches the given element.
    pub fn matches(self, el: &ElementRef<'_>) -> bool {
        if el.value().name() != "div" {
            return false;
        }
        match self {
            BlockSignal::QuizContainer => el.value().classes().any(|c| c == "korean_quiz"),
            BlockSignal::QuizTextDescendant => el.select(quiz_text()).next().is_some(),
            BlockSignal::QuizClassSubstring => {
                el.value().attr("class").is_some_and(|c| c.contains("quiz"))
            }
        }
    }
}

/// Select candidate quiz blocks in document order.
///
/// The result is a set of unique elements: each element is tested once
/// against all signals, so a block matching several signals cannot be
/// returned twice.
pub fn select_blocks(document: &Html) -> Vec<ElementRef<'_>> {
    let mut seen = HashSet::new();
    let mut blocks = Vec::new();

    for el in document.select(any_element()) {
        if BlockSignal::ALL.iter().any(|sig| sig.matches(&el)) && seen.insert(el.id()) {
            blocks.push(el);
        }
    }

    blocks
}

//! Run configuration and the fixed category table.

use chrono::NaiveDate;
use std::path::PathBuf;

/// Filename of the running dedup ledger inside the output directory.
pub const LEDGER_FILE: &str = "all_questions.txt";

/// One quiz category: a human-readable label and the SERP URL that
/// surfaces the quiz widget for it.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub label: &'static str,
    pub url: &'static str,
}

/// The fixed category table, in iteration order. Order matters: the first
/// category to surface a question wins the dedup tie.
pub const CATEGORIES: &[Category] = &[
    Category {
        label: "맞춤법",
        url: "https://search.naver.com/search.naver?where=nexearch&sm=tab_etc&mra=blo3&qvt=0&query=%EB%A7%9E%EC%B6%A4%EB%B2%95%ED%80%B4%EC%A6%88",
    },
    Category {
        label: "사자성어",
        url: "https://search.naver.com/search.naver?where=nexearch&sm=tab_etc&mra=blo3&qvt=0&query=%EC%82%AC%EC%9E%90%EC%84%B1%EC%96%B4%20%ED%80%B4%EC%A6%88",
    },
    Category {
        label: "순우리말",
        url: "https://search.naver.com/search.naver?where=nexearch&sm=tab_etc&mra=blo3&qvt=0&query=%EC%88%9C%EC%9A%B0%EB%A6%AC%EB%A7%90%20%ED%80%B4%EC%A6%88",
    },
    Category {
        label: "속담",
        url: "https://search.naver.com/search.naver?where=nexearch&sm=tab_etc&mra=blo3&qvt=0&query=%EC%86%8D%EB%8B%B4%20%ED%80%B4%EC%A6%88",
    },
    Category {
        label: "외래어",
        url: "https://search.naver.com/search.naver?where=nexearch&sm=tab_etc&mra=blo3&qvt=0&query=%EC%99%B8%EB%9E%98%EC%96%B4%ED%80%B4%EC%A6%88",
    },
    Category {
        label: "신조어",
        url: "https://search.naver.com/search.naver?where=nexearch&sm=tab_etc&mra=blo3&qvt=0&query=%EC%8B%A0%EC%A1%B0%EC%96%B4%20%ED%80%B4%EC%A6%88",
    },
];

/// Parameters for one harvest run.
#[derive(Debug, Clone)]
pub struct HarvestConfig {
    /// Directory receiving the dated report and the ledger.
    pub out_dir: PathBuf,
    /// Fixed wait after the content-loaded milestone, in milliseconds,
    /// to let client-side widgets finish rendering.
    pub settle_ms: u64,
    /// Per-navigation timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("out"),
            settle_ms: 1_500,
            timeout_ms: 30_000,
        }
    }
}

impl HarvestConfig {
    /// Path of the dedup ledger.
    pub fn ledger_path(&self) -> PathBuf {
        self.out_dir.join(LEDGER_FILE)
    }

    /// Path of the dated report file for the given UTC date.
    pub fn dated_outfile(&self, date: NaiveDate) -> PathBuf {
        self.out_dir
            .join(format!("naver_quizzes_{}.txt", date.format("%Y%m%d")))
    }
}

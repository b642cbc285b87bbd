//! quizharvest — daily Naver SERP quiz harvester.
//!
//! Renders each category's search result page in headless Chromium,
//! extracts quiz question/answer records from the widget markup, filters
//! them against a persistent seen-question ledger, and writes a dated
//! report plus the rewritten ledger.

pub mod config;
pub mod error;
pub mod extract;
pub mod harvest;
pub mod ledger;
pub mod renderer;
pub mod report;

pub use config::HarvestConfig;
pub use error::HarvestError;
pub use extract::QuizRecord;
pub use harvest::HarvestReport;

// src/lib.rs
//! Skill gap analysis: scrape job postings for target roles, extract the
//! skills they mention, compare them with a person's skills and recommend
//! what to learn next.

pub mod analysis;
pub mod cli;
pub mod core;
pub mod error;
pub mod job_market;
pub mod pipeline;
pub mod report;
pub mod skills;
pub mod utils;

pub use analysis::{analyze, recommend, DemandStatistic, GapResult, Recommendation};
pub use self::core::SkillGapConfig;
pub use error::{CollectError, ConfigError};
pub use job_market::{CollectionReport, JobMarketCollector, JobPosting};
pub use pipeline::AnalysisRun;
pub use skills::SkillExtractor;

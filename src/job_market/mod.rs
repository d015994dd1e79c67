// src/job_market/mod.rs
//! Job market collection: paginated search, posting detail fetches and
//! per-posting skill extraction.
//!
//! The brittle pieces sit behind three seams so the pipeline logic can be
//! exercised offline:
//! - [`PageFetcher`] performs the HTTP GETs,
//! - [`MarkupParser`] knows where fields live in the upstream markup,
//! - [`ThrottlePolicy`] picks the client identity and the pauses.

use serde::{Deserialize, Serialize};

use crate::skills::SkillSet;

pub mod collector;
pub mod fetcher;
pub mod parser;
pub mod policy;

pub use collector::{
    CollectionReport, DetailFallback, JobMarketCollector, PaginationStop, PostingOutcome,
    RoleSummary, SkippedPosting,
};
pub use fetcher::{HttpFetcher, PageFetcher};
pub use parser::{LinkedInParser, MarkupParser};
pub use policy::{NoDelayPolicy, RandomizedPolicy, ThrottlePolicy};

pub const UNKNOWN_DATE: &str = "unknown";

/// One scraped listing with the skills found in its description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub location: String,
    pub posted_date: String,
    pub skills: SkillSet,
    pub source_url: String,
}

/// Fields read from a search-result card, before the detail page is fetched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostingSummary {
    pub title: String,
    pub company: String,
    pub location: String,
    pub posted_date: Option<String>,
    pub link: String,
}

impl PostingSummary {
    pub fn into_posting(self, skills: SkillSet) -> JobPosting {
        JobPosting {
            title: self.title,
            company: self.company,
            location: self.location,
            posted_date: self
                .posted_date
                .unwrap_or_else(|| UNKNOWN_DATE.to_string()),
            skills,
            source_url: self.link,
        }
    }
}

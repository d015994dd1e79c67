// src/job_market/collector.rs
use anyhow::Result;
use serde::Serialize;
use std::time::Duration;
use tracing::{error, info, warn};

use super::fetcher::{HttpFetcher, PageFetcher};
use super::parser::{LinkedInParser, MarkupParser};
use super::policy::{RandomizedPolicy, ThrottlePolicy};
use super::JobPosting;
use crate::core::CollectorSettings;
use crate::error::CollectError;
use crate::skills::{SkillExtractor, SkillSet};
use crate::utils::encode_query_value;

/// Result of processing one search-result card
#[derive(Debug, Clone, PartialEq)]
pub enum PostingOutcome {
    Collected(JobPosting),
    /// Kept with an empty skill set because the detail page was unusable
    CollectedWithoutDetail { posting: JobPosting, reason: String },
    Skipped { reason: String },
}

/// Why pagination for a role ended
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PaginationStop {
    PageLimit,
    EndOfResults { page: u32 },
    Transport { page: u32, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedPosting {
    pub page: u32,
    pub index: usize,
    pub reason: String,
}

/// Posting kept without skills because its detail page was unusable
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailFallback {
    pub page: u32,
    pub index: usize,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleSummary {
    pub role: String,
    pub pages_fetched: u32,
    pub collected: usize,
    pub detail_fallbacks: Vec<DetailFallback>,
    pub skipped: Vec<SkippedPosting>,
    pub stop: PaginationStop,
}

impl RoleSummary {
    fn new(role: &str) -> Self {
        Self {
            role: role.to_string(),
            pages_fetched: 0,
            collected: 0,
            detail_fallbacks: Vec::new(),
            skipped: Vec::new(),
            stop: PaginationStop::PageLimit,
        }
    }
}

/// Everything a collection run produced, postings in role, page, listing order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CollectionReport {
    pub postings: Vec<JobPosting>,
    pub roles: Vec<RoleSummary>,
}

impl CollectionReport {
    pub fn total_collected(&self) -> usize {
        self.postings.len()
    }

    pub fn total_skipped(&self) -> usize {
        self.roles.iter().map(|r| r.skipped.len()).sum()
    }

    pub fn total_detail_fallbacks(&self) -> usize {
        self.roles.iter().map(|r| r.detail_fallbacks.len()).sum()
    }

    /// Roles whose pagination was cut short by a transport failure
    pub fn aborted_roles(&self) -> Vec<&str> {
        self.roles
            .iter()
            .filter(|r| matches!(r.stop, PaginationStop::Transport { .. }))
            .map(|r| r.role.as_str())
            .collect()
    }
}

pub struct JobMarketCollector {
    settings: CollectorSettings,
    fetcher: Box<dyn PageFetcher>,
    parser: Box<dyn MarkupParser>,
    policy: Box<dyn ThrottlePolicy>,
    extractor: SkillExtractor,
}

impl JobMarketCollector {
    /// Collector wired to LinkedIn over HTTP with randomized throttling
    pub fn new(settings: CollectorSettings) -> Result<Self> {
        let policy = RandomizedPolicy::from_settings(&settings);
        Ok(Self::with_parts(
            settings,
            HttpFetcher::new()?,
            LinkedInParser::new(),
            policy,
        ))
    }

    pub fn with_parts(
        settings: CollectorSettings,
        fetcher: impl PageFetcher + 'static,
        parser: impl MarkupParser + 'static,
        policy: impl ThrottlePolicy + 'static,
    ) -> Self {
        Self {
            settings,
            fetcher: Box::new(fetcher),
            parser: Box::new(parser),
            policy: Box::new(policy),
            extractor: SkillExtractor::new(),
        }
    }

    pub fn with_fetcher(mut self, fetcher: impl PageFetcher + 'static) -> Self {
        self.fetcher = Box::new(fetcher);
        self
    }

    pub fn with_policy(mut self, policy: impl ThrottlePolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    pub fn with_extractor(mut self, extractor: SkillExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// Search URL for a zero-based page of results
    pub fn search_url(&self, role: &str, location: &str, page: u32) -> String {
        let keywords = format!("{} {}", role, location);
        format!(
            "{}?keywords={}&location={}&start={}",
            self.settings.search_url,
            encode_query_value(&keywords),
            encode_query_value(location),
            u64::from(page) * u64::from(self.settings.page_size)
        )
    }

    pub async fn collect(
        &self,
        job_roles: &[String],
        location: &str,
        max_pages: u32,
    ) -> CollectionReport {
        let mut report = CollectionReport::default();

        for role in job_roles {
            let summary = self
                .collect_role(role, location, max_pages, &mut report.postings)
                .await;
            report.roles.push(summary);
        }

        info!(
            "Collection finished: {} postings, {} skipped, {} without detail, {} roles aborted",
            report.total_collected(),
            report.total_skipped(),
            report.total_detail_fallbacks(),
            report.aborted_roles().len()
        );
        report
    }

    async fn collect_role(
        &self,
        role: &str,
        location: &str,
        max_pages: u32,
        postings: &mut Vec<JobPosting>,
    ) -> RoleSummary {
        info!("Scraping jobs for: {}", role);
        let mut summary = RoleSummary::new(role);

        for page in 0..max_pages {
            let url = self.search_url(role, location, page);
            let user_agent = self.policy.user_agent();

            let html = match self
                .fetcher
                .fetch(&url, &user_agent, self.settings.search_timeout())
                .await
            {
                Ok(html) => html,
                Err(e) => {
                    error!(
                        "Search for {} failed on page {}, skipping remaining pages: {}",
                        role,
                        page + 1,
                        e
                    );
                    summary.stop = PaginationStop::Transport {
                        page,
                        reason: e.to_string(),
                    };
                    return summary;
                }
            };
            summary.pages_fetched += 1;

            let fragments = self.parser.split_listing(&html);
            if fragments.is_empty() {
                info!("No more postings for {} on page {}", role, page + 1);
                summary.stop = PaginationStop::EndOfResults { page };
                return summary;
            }

            for (index, fragment) in fragments.iter().enumerate() {
                match self
                    .collect_posting(role, page, index, fragment, &user_agent)
                    .await
                {
                    PostingOutcome::Collected(posting) => {
                        summary.collected += 1;
                        postings.push(posting);
                    }
                    PostingOutcome::CollectedWithoutDetail { posting, reason } => {
                        summary.collected += 1;
                        summary.detail_fallbacks.push(DetailFallback {
                            page,
                            index,
                            reason,
                        });
                        postings.push(posting);
                    }
                    PostingOutcome::Skipped { reason } => {
                        summary.skipped.push(SkippedPosting {
                            page,
                            index,
                            reason,
                        });
                        continue;
                    }
                }
                pause(self.policy.posting_delay()).await;
            }

            info!("  {}: page {} complete", role, page + 1);
            pause(self.policy.page_delay()).await;
        }

        summary
    }

    async fn collect_posting(
        &self,
        role: &str,
        page: u32,
        index: usize,
        fragment: &str,
        user_agent: &str,
    ) -> PostingOutcome {
        let summary = match self.parser.parse_posting_summary(fragment) {
            Ok(summary) => summary,
            Err(e) => {
                error!(
                    "Error processing posting {} on page {} for {}: {}",
                    index,
                    page + 1,
                    role,
                    e
                );
                return PostingOutcome::Skipped {
                    reason: e.to_string(),
                };
            }
        };

        let description = self.fetch_description(&summary.link, user_agent).await;
        match description {
            Ok(description) => {
                let skills = self.extractor.extract(&description);
                PostingOutcome::Collected(summary.into_posting(skills))
            }
            Err(e) => {
                warn!(
                    "No description for posting {} on page {} for {} ({}): {}",
                    index,
                    page + 1,
                    role,
                    summary.link,
                    e
                );
                PostingOutcome::CollectedWithoutDetail {
                    posting: summary.into_posting(SkillSet::new()),
                    reason: e.to_string(),
                }
            }
        }
    }

    async fn fetch_description(&self, link: &str, user_agent: &str) -> Result<String, CollectError> {
        let html = self
            .fetcher
            .fetch(link, user_agent, self.settings.detail_timeout())
            .await?;
        self.parser.parse_posting_detail(&html)
    }
}

async fn pause(duration: Duration) {
    if !duration.is_zero() {
        tokio::time::sleep(duration).await;
    }
}

// src/pipeline.rs
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::analysis::{analyze, recommend, GapResult, Recommendation};
use crate::core::SkillGapConfig;
use crate::error::ConfigError;
use crate::job_market::{CollectionReport, JobMarketCollector};

/// Output of one collect, analyze, recommend pass
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRun {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub collection: CollectionReport,
    pub gap: GapResult,
    pub recommendations: Vec<Recommendation>,
}

/// Run the whole pipeline. Only an invalid configuration is fatal; network
/// and markup problems are absorbed into the collection report.
pub async fn run(
    config: &SkillGapConfig,
    collector: &JobMarketCollector,
) -> Result<AnalysisRun, ConfigError> {
    config.validate()?;

    let run_id = Uuid::new_v4();
    let span = info_span!("analysis_run", %run_id);

    let analysis = async move {
        let started_at = Utc::now();
        info!(
            "Scraping job market data for: {} ({})",
            config.job_roles.join(", "),
            config.location
        );

        let collection = collector
            .collect(&config.job_roles, &config.location, config.max_pages)
            .await;
        info!("Found {} relevant job postings", collection.total_collected());

        let gap = analyze(&config.user_skills, &collection.postings);
        let recommendations = recommend(&gap.top_missing_skills, &config.platforms);
        info!("Generated {} learning recommendations", recommendations.len());

        AnalysisRun {
            run_id,
            started_at,
            finished_at: Utc::now(),
            collection,
            gap,
            recommendations,
        }
    }
    .instrument(span)
    .await;

    Ok(analysis)
}

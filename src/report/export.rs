// src/report/export.rs
//! Machine-readable exports written next to the HTML report

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::analysis::{GapResult, Recommendation};
use crate::job_market::{JobPosting, RoleSummary};
use crate::pipeline::AnalysisRun;

#[derive(Serialize)]
struct AnalysisExport<'a> {
    run_id: Uuid,
    started_at: DateTime<Utc>,
    finished_at: DateTime<Utc>,
    roles: &'a [RoleSummary],
    gap_analysis: &'a GapResult,
    recommendations: &'a [Recommendation],
}

/// Gap analysis, recommendations and per-role collection summaries as JSON
pub fn analysis_json(run: &AnalysisRun) -> Result<String> {
    let export = AnalysisExport {
        run_id: run.run_id,
        started_at: run.started_at,
        finished_at: run.finished_at,
        roles: &run.collection.roles,
        gap_analysis: &run.gap,
        recommendations: &run.recommendations,
    };
    serde_json::to_string_pretty(&export).context("Failed to serialize gap analysis")
}

/// One row per collected posting
pub fn jobs_csv(postings: &[JobPosting]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(["title", "company", "location", "posted_date", "skills", "source_url"])
        .context("Failed to write CSV header")?;

    for posting in postings {
        let skills = posting
            .skills
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        writer
            .write_record([
                posting.title.as_str(),
                posting.company.as_str(),
                posting.location.as_str(),
                posting.posted_date.as_str(),
                skills.as_str(),
                posting.source_url.as_str(),
            ])
            .with_context(|| format!("Failed to write CSV row for {}", posting.source_url))?;
    }

    finish(writer)
}

/// Every observed skill, descending by demand, flagged when the user lacks it
pub fn skill_demand_csv(gap: &GapResult) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(["skill", "demand_percent", "missing"])
        .context("Failed to write CSV header")?;

    for (skill, percentage) in gap.ranked_demand().iter() {
        let missing = gap.missing_skills.contains(skill);
        writer
            .write_record([
                skill.to_string(),
                format!("{:.1}", percentage),
                missing.to_string(),
            ])
            .with_context(|| format!("Failed to write CSV row for {}", skill))?;
    }

    finish(writer)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV buffer: {}", e.error()))?;
    String::from_utf8(bytes).context("CSV output is not valid UTF-8")
}

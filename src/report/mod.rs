// src/report/mod.rs
//! Report rendering for a finished analysis run.
//!
//! Each run gets its own directory, named by start time and run id, holding `report.html`,
//! `gap_analysis.json`, `jobs.csv` and `skill_demand.csv`.

use anyhow::Result;
use chrono::Local;
use std::path::PathBuf;
use tracing::info;

use crate::core::{FsOps, SkillGapConfig};
use crate::pipeline::AnalysisRun;

pub mod export;
pub mod html;

pub const DEFAULT_REPORTS_DIR: &str = "reports";
pub const REPORT_FILE: &str = "report.html";

pub struct ReportWriter {
    reports_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(reports_dir: impl Into<PathBuf>) -> Self {
        Self {
            reports_dir: reports_dir.into(),
        }
    }

    /// Write every report artifact and return the run's report directory
    pub async fn write(&self, config: &SkillGapConfig, run: &AnalysisRun) -> Result<PathBuf> {
        let report_dir = self.reports_dir.join(run_dir_name(run));
        FsOps::ensure_dir_exists(&report_dir).await?;

        FsOps::write_file_safe(&report_dir.join(REPORT_FILE), html::render_report(config, run))
            .await?;
        FsOps::write_file_safe(
            &report_dir.join("gap_analysis.json"),
            export::analysis_json(run)?,
        )
        .await?;
        FsOps::write_file_safe(
            &report_dir.join("jobs.csv"),
            export::jobs_csv(&run.collection.postings)?,
        )
        .await?;
        FsOps::write_file_safe(
            &report_dir.join("skill_demand.csv"),
            export::skill_demand_csv(&run.gap)?,
        )
        .await?;

        info!("Report saved to: {}", report_dir.join(REPORT_FILE).display());
        Ok(report_dir)
    }
}

/// `<local start time>_<first 8 hex digits of the run id>`
fn run_dir_name(run: &AnalysisRun) -> String {
    let run_id = run.run_id.simple().to_string();
    format!(
        "{}_{}",
        run.started_at.with_timezone(&Local).format("%Y%m%d_%H%M%S"),
        &run_id[..8]
    )
}

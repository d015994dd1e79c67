// src/cli.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};

use crate::core::config_manager::resolve_path;
use crate::core::{SkillGapConfig, DEFAULT_CONFIG_FILE};
use crate::job_market::{JobMarketCollector, RandomizedPolicy};
use crate::pipeline;
use crate::report::{ReportWriter, DEFAULT_REPORTS_DIR, REPORT_FILE};

#[derive(Parser)]
#[command(name = "skillgap")]
#[command(about = "Rank the skills you are missing for your target job roles")]
pub struct SkillGapCli {
    #[command(subcommand)]
    pub command: SkillGapCommand,

    /// JSON log file, truncated on every start
    #[arg(long, global = true, default_value = "skillgap.log")]
    pub log_file: PathBuf,
}

#[derive(Subcommand)]
pub enum SkillGapCommand {
    /// Scrape postings, analyze the skill gap and write a report
    Run {
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
        #[arg(long, default_value = DEFAULT_REPORTS_DIR)]
        reports_dir: PathBuf,
        /// Keep randomized user agents but skip the pauses between requests
        #[arg(long)]
        no_throttle: bool,
    },
    /// Write the default configuration file
    Init {
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub async fn handle_command(cli: SkillGapCli) -> Result<()> {
    match cli.command {
        SkillGapCommand::Run {
            config,
            reports_dir,
            no_throttle,
        } => run_analysis(config, reports_dir, no_throttle).await,
        SkillGapCommand::Init { config, force } => init_config(config, force),
    }
}

async fn run_analysis(config_path: PathBuf, reports_dir: PathBuf, no_throttle: bool) -> Result<()> {
    info!("Starting Skill Gap Analysis...");
    let config_path = resolve_path(&config_path);
    let config = SkillGapConfig::load_or_create(&config_path)
        .with_context(|| format!("Failed to load configuration {}", config_path.display()))?;

    let mut collector = JobMarketCollector::new(config.collector.clone())?;
    if no_throttle {
        warn!("Request throttling disabled");
        collector = collector.with_policy(RandomizedPolicy::without_delays());
    }

    let run = pipeline::run(&config, &collector).await?;

    let report_dir = ReportWriter::new(resolve_path(&reports_dir))
        .write(&config, &run)
        .await
        .context("Failed to write report")?;

    println!("{}", "=".repeat(50));
    println!(
        "Analysis complete! {} jobs analyzed, gap score {:.1}/100",
        run.gap.total_jobs_analyzed, run.gap.gap_score
    );
    println!("Report saved to: {}", report_dir.join(REPORT_FILE).display());
    println!("{}", "=".repeat(50));
    Ok(())
}

fn init_config(config_path: PathBuf, force: bool) -> Result<()> {
    let config_path = resolve_path(&config_path);
    if config_path.exists() && !force {
        anyhow::bail!(
            "Configuration already exists: {}. Use --force to overwrite it.",
            config_path.display()
        );
    }

    SkillGapConfig::default()
        .save(&config_path)
        .with_context(|| format!("Failed to write configuration {}", config_path.display()))?;

    println!("✓ Wrote default configuration to {}", config_path.display());
    Ok(())
}

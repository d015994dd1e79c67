// src/analysis/gap_analyzer.rs
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::info;

use super::demand::DemandStatistic;
use crate::job_market::JobPosting;
use crate::utils::skill_key;

/// How many missing skills get recommendations
pub const TOP_MISSING_LIMIT: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GapResult {
    /// Every observed skill, in first-seen order
    pub skill_demand: DemandStatistic,
    /// Skills the user lacks, descending by demand
    pub missing_skills: DemandStatistic,
    pub top_missing_skills: DemandStatistic,
    pub gap_score: f64,
    pub total_jobs_analyzed: usize,
}

impl GapResult {
    /// `skill_demand` sorted by descending demand
    pub fn ranked_demand(&self) -> DemandStatistic {
        self.skill_demand.sorted_descending()
    }
}

/// Compare a user's skills with the skills demanded across `jobs`.
///
/// Skill counting walks the jobs in order and each job's skills in their set
/// order, so `skill_demand` lists skills by first appearance. Missing skills
/// with equal demand keep that first-appearance order after sorting.
pub fn analyze<S: AsRef<str>>(user_skills: &[S], jobs: &[JobPosting]) -> GapResult {
    let total_jobs = jobs.len();
    if total_jobs == 0 {
        info!("No job postings to analyze");
        return GapResult::default();
    }

    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for skill in jobs.iter().flat_map(|job| job.skills.iter()) {
        let count = counts.entry(skill.as_str()).or_insert_with(|| {
            order.push(skill.as_str());
            0
        });
        *count += 1;
    }

    let skill_demand: DemandStatistic = order
        .iter()
        .map(|skill| {
            let count = counts.get(skill).copied().unwrap_or_default();
            (skill.to_string(), 100.0 * count as f64 / total_jobs as f64)
        })
        .collect();

    let owned: HashSet<String> = user_skills.iter().map(|s| skill_key(s.as_ref())).collect();
    let missing_skills = skill_demand
        .filtered(|skill, _| !owned.contains(&skill_key(skill)))
        .sorted_descending();
    let top_missing_skills = missing_skills.top(TOP_MISSING_LIMIT);
    let gap_score = missing_skills.mean();

    info!(
        "Analyzed {} jobs: {} distinct skills, {} missing, gap score {:.1}",
        total_jobs,
        skill_demand.len(),
        missing_skills.len(),
        gap_score
    );

    GapResult {
        skill_demand,
        missing_skills,
        top_missing_skills,
        gap_score,
        total_jobs_analyzed: total_jobs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::SkillSet;

    fn job(skills: &[&str]) -> JobPosting {
        JobPosting {
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            posted_date: "unknown".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect::<SkillSet>(),
            source_url: "https://jobs.test/1".to_string(),
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_two_job_scenario() {
        let jobs = vec![job(&["Python", "SQL"]), job(&["SQL", "AWS"])];
        let result = analyze(&["Python"], &jobs);

        assert_eq!(result.total_jobs_analyzed, 2);
        assert_eq!(result.skill_demand.len(), 3);
        assert!(approx(result.skill_demand.get("Python").unwrap(), 50.0));
        assert!(approx(result.skill_demand.get("SQL").unwrap(), 100.0));
        assert!(approx(result.skill_demand.get("AWS").unwrap(), 50.0));

        assert_eq!(
            result.missing_skills.skills().collect::<Vec<_>>(),
            vec!["SQL", "AWS"]
        );
        assert!(approx(result.gap_score, 75.0));
    }

    #[test]
    fn test_no_jobs() {
        let result = analyze(&["Python"], &[]);
        assert_eq!(result.total_jobs_analyzed, 0);
        assert!(result.skill_demand.is_empty());
        assert!(result.missing_skills.is_empty());
        assert!(result.top_missing_skills.is_empty());
        assert_eq!(result.gap_score, 0.0);
    }

    #[test]
    fn test_user_skills_match_case_insensitively() {
        let jobs = vec![job(&["Machine Learning", "Sql"])];
        let result = analyze(&["machine LEARNING", " SQL "], &jobs);

        assert!(result.missing_skills.is_empty());
        assert_eq!(result.gap_score, 0.0);
        assert_eq!(result.skill_demand.len(), 2);
    }

    #[test]
    fn test_demand_is_share_of_jobs() {
        let jobs = vec![
            job(&["Docker"]),
            job(&["Docker", "Kafka"]),
            job(&[]),
        ];
        let result = analyze::<&str>(&[], &jobs);

        assert!(approx(result.skill_demand.get("Docker").unwrap(), 200.0 / 3.0));
        assert!(approx(result.skill_demand.get("Kafka").unwrap(), 100.0 / 3.0));
        assert!(result.gap_score >= 0.0 && result.gap_score <= 100.0);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        // set order within a job is alphabetical: Aws, Kafka, Zookeeper
        let jobs = vec![job(&["Zookeeper"]), job(&["Kafka", "Aws"])];
        let result = analyze::<&str>(&[], &jobs);

        assert_eq!(
            result.missing_skills.skills().collect::<Vec<_>>(),
            vec!["Zookeeper", "Aws", "Kafka"]
        );
    }

    #[test]
    fn test_top_missing_is_prefix_of_ten() {
        let labels: Vec<String> = (0..15).map(|i| format!("Skill{:02}", i)).collect();
        let jobs: Vec<JobPosting> = (0..15)
            .map(|i| {
                let skills: Vec<&str> = labels[..=i].iter().map(String::as_str).collect();
                job(&skills)
            })
            .collect();

        let result = analyze::<&str>(&[], &jobs);

        assert_eq!(result.missing_skills.len(), 15);
        assert_eq!(result.top_missing_skills.len(), TOP_MISSING_LIMIT);
        assert_eq!(
            result.top_missing_skills,
            result.missing_skills.top(TOP_MISSING_LIMIT)
        );
        let values: Vec<f64> = result.missing_skills.values().collect();
        assert!(values.windows(2).all(|w| w[0] >= w[1]));
        assert!(approx(result.top_missing_skills.get("Skill00").unwrap(), 100.0));
    }
}

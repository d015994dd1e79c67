// src/report/html.rs
use chrono::{DateTime, Local};
use std::fmt::Write as _;

use crate::analysis::{DemandStatistic, Recommendation};
use crate::core::SkillGapConfig;
use crate::pipeline::AnalysisRun;
use crate::utils::escape_html;

const TOP_DEMAND_LIMIT: usize = 15;
const GOOD_ALIGNMENT_THRESHOLD: f64 = 30.0;

const STYLE: &str = r#"
    :root { --primary: #2c3e50; --secondary: #3498db; --accent: #e74c3c; --success: #27ae60; }
    * { box-sizing: border-box; margin: 0; padding: 0; }
    body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; line-height: 1.6; color: #333; background: #f8f9fa; }
    .container { max-width: 1200px; margin: 0 auto; padding: 20px; }
    header { background: linear-gradient(135deg, var(--primary) 0%, #4a6491 100%); color: white; padding: 40px 20px; text-align: center; margin-bottom: 30px; }
    h1 { font-size: 2.5rem; margin-bottom: 10px; }
    h2, h3, h4 { margin-bottom: 10px; }
    .date { opacity: 0.8; }
    .card { background: white; border-radius: 10px; padding: 25px; margin-bottom: 25px; box-shadow: 0 2px 15px rgba(0,0,0,0.05); }
    .stats { display: flex; flex-wrap: wrap; gap: 20px; margin: 20px 0; }
    .stat-card { flex: 1; min-width: 200px; background: #f1f3f5; border-radius: 8px; padding: 20px; text-align: center; border-left: 4px solid var(--secondary); }
    .stat-value { font-size: 2.2rem; font-weight: bold; color: var(--primary); margin: 10px 0; }
    .stat-value.success { color: var(--success); }
    .stat-value.accent { color: var(--accent); }
    .charts { display: grid; grid-template-columns: repeat(auto-fit, minmax(480px, 1fr)); gap: 25px; }
    .bar-row { display: flex; align-items: center; margin: 6px 0; }
    .bar-label { width: 180px; font-size: 0.9rem; }
    .bar-track { flex: 1; background: #ecf0f1; border-radius: 4px; height: 18px; }
    .bar { height: 18px; border-radius: 4px; background: var(--primary); }
    .bar.missing { background: var(--accent); }
    .bar-value { width: 60px; text-align: right; font-size: 0.85rem; }
    .no-gaps { color: var(--success); font-size: 1.2rem; text-align: center; padding: 20px; }
    .skill-header { display: flex; justify-content: space-between; align-items: center; border-bottom: 1px solid #eee; padding-bottom: 15px; margin-bottom: 15px; }
    .skill-name { font-size: 1.4rem; color: var(--primary); font-weight: bold; }
    .demand { background: var(--secondary); color: white; padding: 5px 15px; border-radius: 20px; font-size: 0.9rem; }
    .resource-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 15px; margin: 15px 0; }
    .resource-card { background: #f8f9fa; border-radius: 8px; padding: 15px; border-left: 3px solid var(--secondary); }
    .resource-card a { color: var(--primary); font-weight: bold; text-decoration: none; }
    .project-list { list-style: disc inside; margin: 15px 0; }
    .user-skills { display: flex; flex-wrap: wrap; gap: 10px; margin: 15px 0; justify-content: center; }
    .skill-pill { background: var(--secondary); color: white; padding: 8px 18px; border-radius: 20px; font-size: 0.9rem; }
    footer { text-align: center; padding: 20px; color: #7f8c8d; font-size: 0.9rem; }
"#;

/// Render the standalone HTML report for a finished run
pub fn render_report(config: &SkillGapConfig, run: &AnalysisRun) -> String {
    let gap = &run.gap;
    let generated_at: DateTime<Local> = run.finished_at.with_timezone(&Local);
    let score_class = if gap.gap_score < GOOD_ALIGNMENT_THRESHOLD {
        "success"
    } else {
        "accent"
    };

    let user_skills: String = config
        .user_skills
        .iter()
        .map(|skill| format!(r#"<div class="skill-pill">{}</div>"#, escape_html(skill)))
        .collect();

    let top_demand = render_bars(&gap.ranked_demand().top(TOP_DEMAND_LIMIT), "bar");
    let missing = if gap.missing_skills.is_empty() {
        r#"<p class="no-gaps">No significant skill gaps found!</p>"#.to_string()
    } else {
        render_bars(&gap.top_missing_skills, "bar missing")
    };

    let recommendations: String = run.recommendations.iter().map(render_recommendation).collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Skill Gap Analysis Report</title>
  <style>{style}</style>
</head>
<body>
  <header>
    <div class="container">
      <h1>Automated Skill Gap Analysis</h1>
      <p class="date">Generated on {generated}</p>
    </div>
  </header>
  <div class="container">
    <section class="card">
      <h2>Analysis Summary</h2>
      <p>This report compares your current skills against market demands for your target roles.</p>
      <div class="stats">
        <div class="stat-card">
          <h3>Jobs Analyzed</h3>
          <div class="stat-value">{jobs}</div>
          <p>Recent job postings across {roles} roles</p>
        </div>
        <div class="stat-card">
          <h3>Skill Gap Score</h3>
          <div class="stat-value {score_class}">{score:.1}/100</div>
          <p>Lower scores indicate better alignment</p>
        </div>
        <div class="stat-card">
          <h3>Your Skills</h3>
          <div class="user-skills">{user_skills}</div>
        </div>
      </div>
    </section>
    <section class="charts">
      <div class="card">
        <h3>Top {top_limit} In-Demand Skills</h3>
        {top_demand}
      </div>
      <div class="card">
        <h3>Your Top Missing Skills</h3>
        {missing}
      </div>
    </section>
    <section>
      <h2>Personalized Learning Recommendations</h2>
      <p>Based on your skill gaps, here are resources to help you improve:</p>
      {recommendations}
    </section>
  </div>
  <footer>
    <div class="container">
      <p>Run {run_id}</p>
    </div>
  </footer>
</body>
</html>
"#,
        style = STYLE,
        generated = generated_at.format("%B %d, %Y at %H:%M"),
        jobs = gap.total_jobs_analyzed,
        roles = config.job_roles.len(),
        score_class = score_class,
        score = gap.gap_score,
        user_skills = user_skills,
        top_limit = TOP_DEMAND_LIMIT,
        top_demand = top_demand,
        missing = missing,
        recommendations = recommendations,
        run_id = run.run_id,
    )
}

fn render_bars(demand: &DemandStatistic, bar_class: &str) -> String {
    let mut html = String::new();
    for (skill, percentage) in demand.iter() {
        let _ = write!(
            html,
            r#"<div class="bar-row"><span class="bar-label">{}</span><div class="bar-track"><div class="{}" style="width: {:.1}%"></div></div><span class="bar-value">{:.1}%</span></div>"#,
            escape_html(skill),
            bar_class,
            percentage.clamp(0.0, 100.0),
            percentage
        );
    }
    html
}

fn render_recommendation(rec: &Recommendation) -> String {
    let resources: String = rec
        .resources
        .iter()
        .map(|res| {
            format!(
                r#"<div class="resource-card"><a href="{}" target="_blank" rel="noopener">{}</a><p>{}</p></div>"#,
                escape_html(&res.url),
                escape_html(&res.platform),
                escape_html(&res.description)
            )
        })
        .collect();

    let projects: String = rec
        .projects
        .iter()
        .map(|project| format!("<li>{}</li>", escape_html(project)))
        .collect();

    format!(
        r#"<div class="card">
        <div class="skill-header">
          <div class="skill-name">{}</div>
          <div class="demand">{}</div>
        </div>
        <h4>Recommended Learning Resources</h4>
        <div class="resource-grid">{}</div>
        <h4>Project Ideas to Practice</h4>
        <ul class="project-list">{}</ul>
      </div>"#,
        escape_html(&rec.skill),
        escape_html(&rec.demand),
        resources,
        projects
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{analyze, recommend};
    use crate::job_market::{CollectionReport, JobPosting};
    use chrono::Utc;
    use uuid::Uuid;

    fn run_with(jobs: Vec<JobPosting>, config: &SkillGapConfig) -> AnalysisRun {
        let gap = analyze(&config.user_skills, &jobs);
        let recommendations = recommend(&gap.top_missing_skills, &config.platforms);
        AnalysisRun {
            run_id: Uuid::new_v4(),
            started_at: Utc::now(),
            finished_at: Utc::now(),
            collection: CollectionReport {
                postings: jobs,
                roles: Vec::new(),
            },
            gap,
            recommendations,
        }
    }

    fn job(skills: &[&str]) -> JobPosting {
        JobPosting {
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            posted_date: "unknown".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            source_url: "https://jobs.test/1".to_string(),
        }
    }

    #[test]
    fn test_report_lists_recommendations() {
        let config = SkillGapConfig {
            user_skills: vec!["Python".to_string()],
            ..SkillGapConfig::default()
        };
        let run = run_with(vec![job(&["Python", "Sql"]), job(&["Sql", "C++"])], &config);

        let html = render_report(&config, &run);

        assert!(html.contains("<div class=\"stat-value\">2</div>"));
        assert!(html.contains("75.0/100"));
        assert!(html.contains("stat-value accent"));
        assert!(html.contains(r#"<div class="skill-name">Sql</div>"#));
        assert!(html.contains("100.0% of jobs"));
        assert!(html.contains("https://github.com/search?q=C%2B%2B"));
        assert!(!html.contains("No significant skill gaps found!"));
    }

    #[test]
    fn test_report_without_gaps() {
        let config = SkillGapConfig {
            user_skills: vec!["Python".to_string()],
            ..SkillGapConfig::default()
        };
        let run = run_with(vec![job(&["Python"])], &config);

        let html = render_report(&config, &run);

        assert!(html.contains("No significant skill gaps found!"));
        assert!(html.contains("0.0/100"));
        assert!(html.contains("stat-value success"));
    }

    #[test]
    fn test_report_escapes_user_text() {
        let config = SkillGapConfig {
            user_skills: vec!["<script>alert(1)</script>".to_string()],
            ..SkillGapConfig::default()
        };
        let run = run_with(Vec::new(), &config);

        let html = render_report(&config, &run);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}

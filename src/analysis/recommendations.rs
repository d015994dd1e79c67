// src/analysis/recommendations.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use super::demand::DemandStatistic;
use crate::utils::{encode_query_value, format_demand};

const PLACEHOLDER: &str = "{}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningResource {
    pub platform: String,
    pub url: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub skill: String,
    pub demand: String,
    pub resources: Vec<LearningResource>,
    pub projects: Vec<String>,
}

/// Substitute `value` into a template holding exactly one `{}` and no other
/// braces. Anything else is unusable and yields `None`.
pub fn fill_template(template: &str, value: &str) -> Option<String> {
    if template.matches(PLACEHOLDER).count() != 1 {
        return None;
    }
    let (before, after) = template.split_once(PLACEHOLDER)?;
    if [before, after]
        .iter()
        .any(|part| part.contains('{') || part.contains('}'))
    {
        return None;
    }
    Some(format!("{}{}{}", before, value, after))
}

/// Configured platform searches followed by the generic code, web and
/// article searches.
pub fn learning_resources(skill: &str, platforms: &BTreeMap<String, String>) -> Vec<LearningResource> {
    let encoded = encode_query_value(skill);
    let mut resources: Vec<LearningResource> = platforms
        .iter()
        .filter_map(|(platform, template)| match fill_template(template, &encoded) {
            Some(url) => Some(LearningResource {
                platform: platform.clone(),
                url,
                description: format!("Free {} resources on {}", skill, platform),
            }),
            None => {
                debug!("Skipping platform {} for {}: unusable template", platform, skill);
                None
            }
        })
        .collect();

    resources.extend([
        LearningResource {
            platform: "GitHub".to_string(),
            url: format!("https://github.com/search?q={}", encoded),
            description: format!("Open-source projects for {}", skill),
        },
        LearningResource {
            platform: "Google".to_string(),
            url: format!("https://www.google.com/search?q=learn+{}+free", encoded),
            description: format!("Search for free {} resources", skill),
        },
        LearningResource {
            platform: "Towards Data Science".to_string(),
            url: format!("https://towardsdatascience.com/search?q={}", encoded),
            description: format!("Articles about {}", skill),
        },
    ]);

    resources
}

pub fn project_ideas(skill: &str) -> Vec<String> {
    vec![
        format!("Build a small {} application", skill),
        format!("Create a tutorial explaining {} concepts", skill),
        format!("Solve 3 real-world problems using {}", skill),
        format!("Contribute to an open-source project using {}", skill),
        format!("Develop a prototype demonstrating {}", skill),
        format!("Write a blog post about applying {}", skill),
    ]
}

/// One recommendation per missing skill, in the order given
pub fn recommend(
    top_missing_skills: &DemandStatistic,
    platforms: &BTreeMap<String, String>,
) -> Vec<Recommendation> {
    top_missing_skills
        .iter()
        .map(|(skill, demand)| Recommendation {
            skill: skill.to_string(),
            demand: format_demand(demand),
            resources: learning_resources(skill, platforms),
            projects: project_ideas(skill),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platforms(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(name, template)| (name.to_string(), template.to_string()))
            .collect()
    }

    fn missing(entries: &[(&str, f64)]) -> DemandStatistic {
        entries
            .iter()
            .map(|(label, value)| (label.to_string(), *value))
            .collect()
    }

    #[test]
    fn test_fill_template() {
        assert_eq!(
            fill_template("https://x.test/search?q={}", "Power%20Bi").as_deref(),
            Some("https://x.test/search?q=Power%20Bi")
        );
        assert_eq!(fill_template("https://x.test/search", "a"), None);
        assert_eq!(fill_template("https://x.test/{}/{}", "a"), None);
        assert_eq!(fill_template("https://x.test/{name}?q={}", "a"), None);
        assert_eq!(fill_template("https://x.test/{", "a"), None);
    }

    #[test]
    fn test_recommend_builds_resources_and_projects() {
        let recs = recommend(
            &missing(&[("Power Bi", 66.666_666_7), ("C++", 25.0)]),
            &platforms(&[("Coursera", "https://www.coursera.org/search?query={}")]),
        );

        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].skill, "Power Bi");
        assert_eq!(recs[0].demand, "66.7% of jobs");
        assert_eq!(recs[0].projects.len(), 6);
        assert_eq!(recs[0].projects[0], "Build a small Power Bi application");

        let urls: Vec<&str> = recs[0].resources.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://www.coursera.org/search?query=Power%20Bi",
                "https://github.com/search?q=Power%20Bi",
                "https://www.google.com/search?q=learn+Power%20Bi+free",
                "https://towardsdatascience.com/search?q=Power%20Bi",
            ]
        );
        assert_eq!(recs[0].resources[0].description, "Free Power Bi resources on Coursera");
        assert_eq!(recs[1].resources[1].url, "https://github.com/search?q=C%2B%2B");
    }

    #[test]
    fn test_template_without_placeholder_is_skipped() {
        let recs = recommend(
            &missing(&[("Sql", 100.0), ("Aws", 50.0)]),
            &platforms(&[
                ("Broken", "https://broken.test/search"),
                ("Kaggle", "https://www.kaggle.com/search?q={}"),
            ]),
        );

        for rec in &recs {
            let names: Vec<&str> = rec.resources.iter().map(|r| r.platform.as_str()).collect();
            assert_eq!(names, vec!["Kaggle", "GitHub", "Google", "Towards Data Science"]);
        }
    }

    #[test]
    fn test_only_generic_resources_without_platforms() {
        let recs = recommend(&missing(&[("Docker", 40.0)]), &BTreeMap::new());
        assert_eq!(recs[0].resources.len(), 3);
    }

    #[test]
    fn test_recommend_nothing_missing() {
        assert!(recommend(&DemandStatistic::new(), &BTreeMap::new()).is_empty());
    }
}

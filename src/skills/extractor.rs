// src/skills/extractor.rs
use std::collections::BTreeSet;

use super::vocabulary;
use crate::utils::title_case;

/// Title-cased skill labels found in a piece of text
pub type SkillSet = BTreeSet<String>;

struct VocabularyEntry {
    needle: String,
    label: String,
}

/// Literal keyword matcher over the skill vocabulary.
///
/// Matching is plain substring containment on the lower-cased text, so an
/// entry nested inside a longer word or entry also matches ("sql" inside
/// "nosql" or "postgresql", "r" inside almost anything). That over-matching
/// is kept as-is.
pub struct SkillExtractor {
    entries: Vec<VocabularyEntry>,
}

impl SkillExtractor {
    /// Extractor over the built-in technical and soft skill lists
    pub fn new() -> Self {
        Self::with_vocabulary(vocabulary::all_entries())
    }

    /// Extractor over a custom vocabulary
    pub fn with_vocabulary<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .filter_map(|entry| {
                let needle = entry.as_ref().trim().to_lowercase();
                if needle.is_empty() {
                    return None;
                }
                let label = title_case(&needle);
                Some(VocabularyEntry { needle, label })
            })
            .collect();

        Self { entries }
    }

    pub fn vocabulary_size(&self) -> usize {
        self.entries.len()
    }

    pub fn extract(&self, text: &str) -> SkillSet {
        let haystack = text.to_lowercase();

        self.entries
            .iter()
            .filter(|entry| haystack.contains(&entry.needle))
            .map(|entry| entry.label.clone())
            .collect()
    }
}

impl Default for SkillExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(set: &SkillSet) -> Vec<&str> {
        set.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_extract_is_case_insensitive() {
        let extractor = SkillExtractor::with_vocabulary(["python", "machine learning", "aws"]);

        let lower = extractor.extract("we use python, aws and machine learning");
        let upper = extractor.extract("WE USE PYTHON, AWS AND MACHINE LEARNING");

        assert_eq!(lower, upper);
        assert_eq!(labels(&lower), vec!["Aws", "Machine Learning", "Python"]);
    }

    #[test]
    fn test_extract_is_idempotent() {
        let extractor = SkillExtractor::new();
        let text = "Senior engineer: Docker, Kubernetes, PostgreSQL and strong communication.";
        assert_eq!(extractor.extract(text), extractor.extract(text));
    }

    #[test]
    fn test_extract_without_matches_is_empty() {
        let extractor = SkillExtractor::with_vocabulary(["python", "java"]);
        assert!(extractor.extract("Forklift operator, night shift").is_empty());
        assert!(extractor.extract("").is_empty());
    }

    #[test]
    fn test_overlapping_entries_all_match() {
        let extractor = SkillExtractor::new();
        let skills = extractor.extract("Experience with NoSQL stores and PostgreSQL");

        assert!(skills.contains("Nosql"));
        assert!(skills.contains("Postgresql"));
        assert!(skills.contains("Sql"));
    }

    #[test]
    fn test_repeated_mentions_are_deduplicated() {
        let extractor = SkillExtractor::with_vocabulary(["spark", "Spark "]);
        let skills = extractor.extract("Spark, spark and more SPARK");
        assert_eq!(labels(&skills), vec!["Spark"]);
    }

    #[test]
    fn test_soft_skills_are_recognized() {
        let extractor = SkillExtractor::new();
        let skills = extractor.extract("Great Teamwork and conflict resolution abilities");
        assert!(skills.contains("Teamwork"));
        assert!(skills.contains("Conflict Resolution"));
    }
}

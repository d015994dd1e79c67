// src/core/config_manager.rs
//! Run configuration: loading, defaults and validation.
//!
//! The configuration is read once at startup and handed to the pipeline as a
//! plain value. The on-disk format follows the file extension (`.json`,
//! `.yaml`/`.yml` or `.toml`).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

use crate::analysis::recommendations::fill_template;
use crate::error::ConfigError;

pub const DEFAULT_CONFIG_FILE: &str = "skill_config.json";

/// Upper bound for a single randomized pause
pub const MAX_DELAY_SECS: f64 = 600.0;

const LINKEDIN_SEARCH_URL: &str =
    "https://www.linkedin.com/jobs-guest/jobs/api/seeMoreJobPostings/search";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGapConfig {
    pub user_skills: Vec<String>,
    pub job_roles: Vec<String>,
    pub location: String,
    pub max_pages: u32,
    pub platforms: BTreeMap<String, String>,
    #[serde(default)]
    pub collector: CollectorSettings,
}

/// Scraping knobs; every field has a default so the section is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectorSettings {
    pub search_url: String,
    pub page_size: u32,
    pub search_timeout_secs: u64,
    pub detail_timeout_secs: u64,
    pub posting_delay_secs: DelayRange,
    pub page_delay_secs: DelayRange,
}

/// Inclusive `[min, max]` range of seconds for randomized pauses
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DelayRange(pub f64, pub f64);

impl DelayRange {
    pub fn min(&self) -> f64 {
        self.0
    }

    pub fn max(&self) -> f64 {
        self.1
    }

    fn is_valid(&self) -> bool {
        self.0.is_finite()
            && self.1.is_finite()
            && self.0 >= 0.0
            && self.0 <= self.1
            && self.1 <= MAX_DELAY_SECS
    }
}

impl Default for CollectorSettings {
    fn default() -> Self {
        Self {
            search_url: LINKEDIN_SEARCH_URL.to_string(),
            page_size: 25,
            search_timeout_secs: 10,
            detail_timeout_secs: 5,
            posting_delay_secs: DelayRange(1.0, 2.0),
            page_delay_secs: DelayRange(2.0, 3.0),
        }
    }
}

impl CollectorSettings {
    pub fn search_timeout(&self) -> Duration {
        Duration::from_secs(self.search_timeout_secs)
    }

    pub fn detail_timeout(&self) -> Duration {
        Duration::from_secs(self.detail_timeout_secs)
    }
}

impl Default for SkillGapConfig {
    fn default() -> Self {
        let platforms = [
            ("Coursera", "https://www.coursera.org/search?query={}"),
            ("edX", "https://www.edx.org/search?q={}"),
            ("YouTube", "https://www.youtube.com/results?search_query={}"),
            ("Kaggle", "https://www.kaggle.com/search?q={}"),
            ("freeCodeCamp", "https://www.freecodecamp.org/news/search/?query={}"),
        ]
        .into_iter()
        .map(|(name, template)| (name.to_string(), template.to_string()))
        .collect();

        Self {
            user_skills: vec![
                "Python".to_string(),
                "Data Analysis".to_string(),
                "Machine Learning".to_string(),
            ],
            job_roles: vec![
                "Data Scientist".to_string(),
                "Machine Learning Engineer".to_string(),
                "AI Researcher".to_string(),
            ],
            location: "United States".to_string(),
            max_pages: 3,
            platforms,
            collector: CollectorSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Yaml,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase());

        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some("toml") => Ok(Self::Toml),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

impl SkillGapConfig {
    /// Load and validate a configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::parse(&content, format, path)?;
        config.validate()?;
        config.warn_on_unusable_templates();

        info!(
            "Loaded configuration from {}: {} skills, {} roles, {} pages per role",
            path.display(),
            config.user_skills.len(),
            config.job_roles.len(),
            config.max_pages
        );
        Ok(config)
    }

    /// Load the configuration, writing the defaults first if the file is missing
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            return Self::load(path);
        }

        let config = Self::default();
        config.save(path)?;
        info!("Created default configuration at {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let format = ConfigFormat::from_path(path)?;
        let serialized = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self).map_err(|e| e.to_string()),
            ConfigFormat::Yaml => serde_yaml::to_string(self).map_err(|e| e.to_string()),
            ConfigFormat::Toml => toml::to_string_pretty(self).map_err(|e| e.to_string()),
        }
        .map_err(|reason| ConfigError::Parse {
            path: path.to_path_buf(),
            reason,
        })?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }

        std::fs::write(path, serialized).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    fn parse(content: &str, format: ConfigFormat, path: &Path) -> Result<Self, ConfigError> {
        let parsed = match format {
            ConfigFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        };

        parsed.map_err(|reason| ConfigError::Parse {
            path: path.to_path_buf(),
            reason,
        })
    }

    /// Reject configurations the pipeline cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.job_roles.is_empty() {
            return Err(ConfigError::Invalid(
                "`job_roles` must list at least one role".to_string(),
            ));
        }

        if let Some(index) = self.job_roles.iter().position(|r| r.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "`job_roles[{}]` is blank",
                index
            )));
        }

        let collector = &self.collector;
        if collector.page_size == 0 {
            return Err(ConfigError::Invalid(
                "`collector.page_size` must be greater than zero".to_string(),
            ));
        }

        if collector.search_url.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "`collector.search_url` is blank".to_string(),
            ));
        }

        for (name, secs) in [
            ("search_timeout_secs", collector.search_timeout_secs),
            ("detail_timeout_secs", collector.detail_timeout_secs),
        ] {
            if secs == 0 {
                return Err(ConfigError::Invalid(format!(
                    "`collector.{}` must be greater than zero",
                    name
                )));
            }
        }

        for (name, range) in [
            ("posting_delay_secs", collector.posting_delay_secs),
            ("page_delay_secs", collector.page_delay_secs),
        ] {
            if !range.is_valid() {
                return Err(ConfigError::Invalid(format!(
                    "`collector.{}` must be a [min, max] range within 0..={} seconds, got [{}, {}]",
                    name,
                    MAX_DELAY_SECS,
                    range.min(),
                    range.max()
                )));
            }
        }

        Ok(())
    }

    /// Platforms whose template cannot be filled are skipped when building
    /// recommendations; say so up front.
    fn warn_on_unusable_templates(&self) {
        for (platform, template) in &self.platforms {
            if fill_template(template, "").is_none() {
                warn!(
                    "Platform {} has no usable `{{}}` placeholder in {:?}; it will be skipped",
                    platform, template
                );
            }
        }
    }
}

/// Resolve a possibly relative path against the current working directory
pub fn resolve_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|dir| dir.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_or_create_writes_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("skill_config.json");

        let created = SkillGapConfig::load_or_create(&path).unwrap();
        assert!(path.exists());
        assert_eq!(created, SkillGapConfig::default());

        let reloaded = SkillGapConfig::load_or_create(&path).unwrap();
        assert_eq!(reloaded, created);
        assert_eq!(reloaded.platforms.len(), 5);
    }

    #[test]
    fn test_collector_section_is_optional() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{
                "user_skills": ["Rust"],
                "job_roles": ["Backend Engineer"],
                "location": "Remote",
                "max_pages": 1,
                "platforms": {}
            }"#,
        )
        .unwrap();

        let config = SkillGapConfig::load(&path).unwrap();
        assert_eq!(config.collector, CollectorSettings::default());
        assert_eq!(config.collector.page_size, 25);
    }

    #[test]
    fn test_missing_key_is_fatal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{ "user_skills": [], "location": "Remote", "max_pages": 1, "platforms": {} }"#,
        )
        .unwrap();

        let err = SkillGapConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("job_roles"));
    }

    #[test]
    fn test_negative_max_pages_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{ "user_skills": [], "job_roles": ["SRE"], "location": "", "max_pages": -1, "platforms": {} }"#,
        )
        .unwrap();

        assert!(matches!(
            SkillGapConfig::load(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_empty_roles() {
        let mut config = SkillGapConfig::default();
        config.job_roles.clear();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.job_roles = vec!["Data Engineer".to_string(), "  ".to_string()];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("job_roles[1]"));
    }

    #[test]
    fn test_validate_rejects_inverted_delay_range() {
        let mut config = SkillGapConfig::default();
        config.collector.page_delay_secs = DelayRange(3.0, 2.0);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_oversized_delay() {
        let mut config = SkillGapConfig::default();
        config.collector.posting_delay_secs = DelayRange(1e20, 1e20);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("posting_delay_secs"));

        config.collector.posting_delay_secs = DelayRange(0.0, MAX_DELAY_SECS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_timeouts() {
        let mut config = SkillGapConfig::default();
        config.collector.search_timeout_secs = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("search_timeout_secs"));

        let mut config = SkillGapConfig::default();
        config.collector.detail_timeout_secs = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("detail_timeout_secs"));
    }

    #[test]
    fn test_yaml_and_toml_round_trip_through_disk() {
        let dir = tempdir().unwrap();
        let config = SkillGapConfig::default();

        for name in ["config.yaml", "config.toml"] {
            let path = dir.path().join(name);
            config.save(&path).unwrap();
            assert_eq!(SkillGapConfig::load(&path).unwrap(), config, "format {name}");
        }
    }

    #[test]
    fn test_unsupported_extension() {
        let err = SkillGapConfig::load(Path::new("settings.ini")).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }
}

// src/skills/vocabulary.rs

/// Technical skills recognized in posting text, lower-case
pub const TECHNICAL_SKILLS: &[&str] = &[
    "python", "r", "java", "c++", "javascript", "sql", "scala",
    "machine learning", "deep learning", "ai", "artificial intelligence",
    "tensorflow", "pytorch", "keras", "scikit-learn",
    "data analysis", "data visualization", "statistics",
    "big data", "hadoop", "spark", "hive",
    "cloud", "aws", "azure", "gcp",
    "docker", "kubernetes",
    "nosql", "mongodb", "cassandra",
    "tableau", "power bi", "matplotlib", "seaborn",
    "nlp", "computer vision", "reinforcement learning",
    "git", "agile", "scrum",
    "excel", "pandas", "numpy", "dask",
    "linux", "bash", "api", "rest", "graphql",
    "kafka", "airflow",
    "mlops", "ci/cd", "jenkins", "github actions",
    "powerbi", "looker", "redshift",
    "snowflake", "bigquery", "postgresql", "mysql",
];

/// Soft skills recognized in posting text, lower-case
pub const SOFT_SKILLS: &[&str] = &[
    "communication", "problem solving", "teamwork",
    "leadership", "time management", "critical thinking",
    "adaptability", "creativity", "emotional intelligence",
    "collaboration", "negotiation", "conflict resolution",
];

/// Every vocabulary entry, technical skills first
pub fn all_entries() -> impl Iterator<Item = &'static str> {
    TECHNICAL_SKILLS.iter().chain(SOFT_SKILLS.iter()).copied()
}

// src/analysis/mod.rs
//! Demand statistics, skill gap computation and learning recommendations

pub mod demand;
pub mod gap_analyzer;
pub mod recommendations;

pub use demand::DemandStatistic;
pub use gap_analyzer::{analyze, GapResult, TOP_MISSING_LIMIT};
pub use recommendations::{recommend, LearningResource, Recommendation};

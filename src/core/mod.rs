// src/core/mod.rs
//! Configuration and file system services shared by the pipeline and the CLI

pub mod config_manager;
pub mod fs_ops;

pub use config_manager::{
    CollectorSettings, DelayRange, SkillGapConfig, DEFAULT_CONFIG_FILE,
    MAX_DELAY_SECS,
};
pub use fs_ops::FsOps;

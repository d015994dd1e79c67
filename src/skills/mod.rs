// src/skills/mod.rs
//! Recognized skill vocabulary and keyword-based extraction from posting text

pub mod extractor;
pub mod vocabulary;

pub use extractor::{SkillExtractor, SkillSet};
pub use vocabulary::{SOFT_SKILLS, TECHNICAL_SKILLS};

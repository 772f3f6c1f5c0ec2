// src/scoring/mod.rs
//! Band classification, recommendations and the overall assessment.

pub mod assessment;
pub mod bands;
pub mod guidance;

pub use self::assessment::{assess, Assessment, Verdict};
pub use self::bands::{classify, classify_indicator, score_all, ScoreBand, Thresholds};
pub use self::guidance::{recommend_all, recommendation};

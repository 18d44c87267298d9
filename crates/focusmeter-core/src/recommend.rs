//! Score-to-advice mapping.
//!
//! Two independent derived views of the same score: the recommendation tiers
//! (40 / 70, with a per-category critical message) and the finer-grained
//! quality banding (40 / 50 / 70). They share thresholds at the edges but are
//! deliberately separate and must not be merged.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::profile::UserCategory;

/// Advisory drawn from a fixed set, determined by score tier and category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    /// Student below the critical threshold.
    CriticalRest,
    /// Employee below the critical threshold.
    BurnoutRisk,
    /// General below the critical threshold.
    Exhausted,
    /// Middle tier, all categories.
    FocusDropping,
    /// Top tier, all categories.
    FlowState,
}

impl Recommendation {
    /// The advisory message for display.
    pub fn message(&self) -> &'static str {
        match self {
            Recommendation::CriticalRest => "CRITICAL: stop and rest/sleep before continuing",
            Recommendation::BurnoutRisk => {
                "BURNOUT RISK: take a break or step away from the screen"
            }
            Recommendation::Exhausted => "EXHAUSTED: take proper rest",
            Recommendation::FocusDropping => "Focus is dropping; try short sessions with breaks",
            Recommendation::FlowState => "Flow state detected; keep going wisely",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Map a clamped score and category to a recommendation.
///
/// Total over [0, 100]; the tiers are evaluated top to bottom, first match
/// wins.
pub fn recommend(score: f64, category: UserCategory) -> Recommendation {
    if score < 40.0 {
        match category {
            UserCategory::Student => Recommendation::CriticalRest,
            UserCategory::Employee => Recommendation::BurnoutRisk,
            UserCategory::General => Recommendation::Exhausted,
        }
    } else if score < 70.0 {
        Recommendation::FocusDropping
    } else {
        Recommendation::FlowState
    }
}

/// Quality banding of the score, independent of the recommendation tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityLabel {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl QualityLabel {
    /// Band a clamped score: >=70 Excellent, >=50 Good, >=40 Fair, else Poor.
    pub fn from_score(score: f64) -> Self {
        if score >= 70.0 {
            QualityLabel::Excellent
        } else if score >= 50.0 {
            QualityLabel::Good
        } else if score >= 40.0 {
            QualityLabel::Fair
        } else {
            QualityLabel::Poor
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            QualityLabel::Excellent => "Excellent",
            QualityLabel::Good => "Good",
            QualityLabel::Fair => "Fair",
            QualityLabel::Poor => "Poor",
        }
    }
}

impl fmt::Display for QualityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

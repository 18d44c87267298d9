//! User categories and their scoring profiles.
//!
//! Each category carries a fixed parameter set: how quickly attention decays
//! per minute of continuous work, and how strongly ambient noise is penalized.
//! The table is compile-time constant and never mutated.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// User category selecting which profile parameters and rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserCategory {
    Student,
    Employee,
    General,
}

/// Scoring parameters associated with a user category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Profile {
    /// Score lost per minute of continuous work.
    pub decay_rate: f64,
    /// Score lost per unit of reported noise level.
    pub noise_penalty: f64,
    /// Human-readable description of who the profile is tuned for.
    pub description: &'static str,
}

const STUDENT_PROFILE: Profile = Profile {
    decay_rate: 0.4,
    noise_penalty: 2.5,
    description: "Optimized for study sessions, exams, and learning quality.",
};

const EMPLOYEE_PROFILE: Profile = Profile {
    decay_rate: 0.6,
    noise_penalty: 1.5,
    description: "Optimized for office work and productivity.",
};

const GENERAL_PROFILE: Profile = Profile {
    decay_rate: 0.5,
    noise_penalty: 2.0,
    description: "Optimized for daily activities and well-being.",
};

impl UserCategory {
    /// All categories, in display order.
    pub const ALL: [UserCategory; 3] = [
        UserCategory::Student,
        UserCategory::Employee,
        UserCategory::General,
    ];

    /// Look up the profile for this category.
    pub fn profile(&self) -> &'static Profile {
        match self {
            UserCategory::Student => &STUDENT_PROFILE,
            UserCategory::Employee => &EMPLOYEE_PROFILE,
            UserCategory::General => &GENERAL_PROFILE,
        }
    }

    /// Heading used when presenting the quality label for this category.
    pub fn performance_label(&self) -> &'static str {
        match self {
            UserCategory::Student => "Learning Quality",
            UserCategory::Employee => "Work Performance",
            UserCategory::General => "Daily Focus & Well-being",
        }
    }

    /// Canonical lowercase name, matching the serde representation.
    pub fn name(&self) -> &'static str {
        match self {
            UserCategory::Student => "student",
            UserCategory::Employee => "employee",
            UserCategory::General => "general",
        }
    }
}

impl fmt::Display for UserCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            UserCategory::Student => "Student",
            UserCategory::Employee => "Employee",
            UserCategory::General => "General",
        };
        write!(f, "{label}")
    }
}

impl FromStr for UserCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "student" | "stu" => Ok(UserCategory::Student),
            "employee" | "emp" => Ok(UserCategory::Employee),
            "general" | "gen" => Ok(UserCategory::General),
            _ => Err(format!(
                "Invalid category: '{s}'. Use student/employee/general"
            )),
        }
    }
}

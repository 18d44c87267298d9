//! Rule-based focus scoring engine.
//!
//! This module implements an explainable scoring model: a fixed linear base
//! formula over the session inputs, followed by per-category rule extensions
//! that append human-readable reasons as they fire.
//!
//! ```text
//! score = 100
//!       - work_minutes  * profile.decay_rate
//!       - noise_level   * profile.noise_penalty
//!       - fatigue_level * 3.0
//!       + breaks_taken  * 15
//! ```
//!
//! The intermediate score is a real number and may leave [0, 100]; it is
//! clamped exactly once, after all rule adjustments. Reason order is the rule
//! evaluation order and is significant for display.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::profile::UserCategory;

/// Score lost per unit of reported fatigue, all categories.
pub const FATIGUE_WEIGHT: f64 = 3.0;

/// Score recovered per break taken, all categories.
pub const BREAK_CREDIT: f64 = 15.0;

/// Difficulty of the subject being studied (Student only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectDifficulty {
    Easy,
    Medium,
    Hard,
}

impl FromStr for SubjectDifficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(SubjectDifficulty::Easy),
            "medium" | "med" => Ok(SubjectDifficulty::Medium),
            "hard" => Ok(SubjectDifficulty::Hard),
            _ => Err(format!("Invalid difficulty: '{s}'. Use easy/medium/hard")),
        }
    }
}

/// Kind of study session (Student only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudyType {
    Revision,
    NewTopic,
}

impl FromStr for StudyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "revision" | "rev" => Ok(StudyType::Revision),
            "new-topic" | "new_topic" | "newtopic" | "new" => Ok(StudyType::NewTopic),
            _ => Err(format!("Invalid study type: '{s}'. Use revision/new-topic")),
        }
    }
}

/// Student-specific session context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyContext {
    pub difficulty: SubjectDifficulty,
    pub study_type: StudyType,
    /// Days until the next exam (0-60).
    pub days_until_exam: u32,
}

/// Category tag plus the per-category session context.
///
/// Dispatch between student and generic scoring is an exhaustive match on
/// this variant, so the set of categories is closed and compiler-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    Student(StudyContext),
    Employee,
    General,
}

impl SessionKind {
    /// The user category this session belongs to.
    pub fn category(&self) -> UserCategory {
        match self {
            SessionKind::Student(_) => UserCategory::Student,
            SessionKind::Employee => UserCategory::Employee,
            SessionKind::General => UserCategory::General,
        }
    }
}

/// One scored session's worth of self-reported inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInput {
    /// Continuous work/study duration in minutes (0-240).
    pub work_minutes: u32,
    /// Breaks taken during the session (0-5).
    pub breaks_taken: u32,
    /// Ambient noise level (0-10).
    pub noise_level: u32,
    /// Self-reported fatigue (1-10).
    pub fatigue_level: u32,
    /// Category tag and any category-specific context.
    pub kind: SessionKind,
}

impl SessionInput {
    pub const WORK_MINUTES_MAX: u32 = 240;
    pub const BREAKS_MAX: u32 = 5;
    pub const NOISE_MAX: u32 = 10;
    pub const FATIGUE_MIN: u32 = 1;
    pub const FATIGUE_MAX: u32 = 10;
    pub const EXAM_DAYS_MAX: u32 = 60;

    /// Check that every input lies within its declared range.
    ///
    /// Out-of-range input is rejected here rather than silently clamped;
    /// `compute_score` assumes its input has passed this check.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let checks: [(&'static str, u32, u32, u32); 4] = [
            ("work_minutes", self.work_minutes, 0, Self::WORK_MINUTES_MAX),
            ("breaks_taken", self.breaks_taken, 0, Self::BREAKS_MAX),
            ("noise_level", self.noise_level, 0, Self::NOISE_MAX),
            (
                "fatigue_level",
                self.fatigue_level,
                Self::FATIGUE_MIN,
                Self::FATIGUE_MAX,
            ),
        ];

        for (field, value, min, max) in checks {
            if value < min || value > max {
                return Err(ValidationError::OutOfRange {
                    field,
                    value,
                    min,
                    max,
                });
            }
        }

        if let SessionKind::Student(study) = &self.kind {
            if study.days_until_exam > Self::EXAM_DAYS_MAX {
                return Err(ValidationError::OutOfRange {
                    field: "days_until_exam",
                    value: study.days_until_exam,
                    min: 0,
                    max: Self::EXAM_DAYS_MAX,
                });
            }
        }

        Ok(())
    }
}

/// A notable condition that influenced (or annotated) the score.
///
/// Serialized as its exact display label so JSON output matches the rendered
/// reason list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reason {
    #[serde(rename = "Long continuous study")]
    LongContinuousStudy,
    #[serde(rename = "Long continuous work")]
    LongContinuousWork,
    #[serde(rename = "Difficult subject")]
    DifficultSubject,
    #[serde(rename = "Studying new topic")]
    StudyingNewTopic,
    #[serde(rename = "Exam very close")]
    ExamVeryClose,
    #[serde(rename = "Exam approaching")]
    ExamApproaching,
    #[serde(rename = "High noise")]
    HighNoise,
    #[serde(rename = "High fatigue")]
    HighFatigue,
}

impl Reason {
    /// Display label for this reason.
    pub fn label(&self) -> &'static str {
        match self {
            Reason::LongContinuousStudy => "Long continuous study",
            Reason::LongContinuousWork => "Long continuous work",
            Reason::DifficultSubject => "Difficult subject",
            Reason::StudyingNewTopic => "Studying new topic",
            Reason::ExamVeryClose => "Exam very close",
            Reason::ExamApproaching => "Exam approaching",
            Reason::HighNoise => "High noise",
            Reason::HighFatigue => "High fatigue",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Result of scoring one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Focus score, clamped to [0, 100].
    pub score: f64,
    /// Reasons in rule evaluation order.
    pub reasons: Vec<Reason>,
}

/// Compute the focus score and reason list for one session.
///
/// Pure function of the input and the static profile table. The caller is
/// responsible for range-validating the input via [`SessionInput::validate`].
pub fn compute_score(input: &SessionInput) -> ScoreResult {
    debug_assert!(
        input.validate().is_ok(),
        "compute_score requires range-validated input"
    );

    let profile = input.kind.category().profile();

    let mut score = 100.0;
    score -= input.work_minutes as f64 * profile.decay_rate;
    score -= input.noise_level as f64 * profile.noise_penalty;
    score -= input.fatigue_level as f64 * FATIGUE_WEIGHT;
    score += input.breaks_taken as f64 * BREAK_CREDIT;

    let mut reasons = Vec::new();
    match &input.kind {
        SessionKind::Student(study) => {
            apply_student_rules(input, study, &mut score, &mut reasons);
        }
        SessionKind::Employee | SessionKind::General => {
            apply_generic_rules(input, &mut reasons);
        }
    }

    ScoreResult {
        score: score.clamp(0.0, 100.0),
        reasons,
    }
}

/// Student rule extension, evaluated in fixed order.
fn apply_student_rules(
    input: &SessionInput,
    study: &StudyContext,
    score: &mut f64,
    reasons: &mut Vec<Reason>,
) {
    // Informational only: the base decay already covers the duration cost.
    if input.work_minutes > 90 {
        reasons.push(Reason::LongContinuousStudy);
    }

    if study.difficulty == SubjectDifficulty::Hard {
        *score -= 15.0;
        reasons.push(Reason::DifficultSubject);
    }

    if study.study_type == StudyType::NewTopic {
        *score -= 10.0;
        reasons.push(Reason::StudyingNewTopic);
    }

    // Mutually exclusive: at most one exam-proximity rule fires.
    if study.days_until_exam <= 7 {
        *score -= 20.0;
        reasons.push(Reason::ExamVeryClose);
    } else if study.days_until_exam <= 14 {
        *score -= 10.0;
        reasons.push(Reason::ExamApproaching);
    }
}

/// Employee/General rule extension. All rules are informational only.
fn apply_generic_rules(input: &SessionInput, reasons: &mut Vec<Reason>) {
    if input.work_minutes > 90 {
        reasons.push(Reason::LongContinuousWork);
    }
    if input.noise_level > 6 {
        reasons.push(Reason::HighNoise);
    }
    if input.fatigue_level > 6 {
        reasons.push(Reason::HighFatigue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student_input(
        work_minutes: u32,
        breaks_taken: u32,
        noise_level: u32,
        fatigue_level: u32,
        difficulty: SubjectDifficulty,
        study_type: StudyType,
        days_until_exam: u32,
    ) -> SessionInput {
        SessionInput {
            work_minutes,
            breaks_taken,
            noise_level,
            fatigue_level,
            kind: SessionKind::Student(StudyContext {
                difficulty,
                study_type,
                days_until_exam,
            }),
        }
    }

    fn generic_input(
        kind: SessionKind,
        work_minutes: u32,
        breaks_taken: u32,
        noise_level: u32,
        fatigue_level: u32,
    ) -> SessionInput {
        SessionInput {
            work_minutes,
            breaks_taken,
            noise_level,
            fatigue_level,
            kind,
        }
    }

    #[test]
    fn test_base_formula_student() {
        // 100 - 45*0.4 - 2*2.5 - 3*3.0 + 0 = 68
        let input = student_input(
            45,
            0,
            2,
            3,
            SubjectDifficulty::Easy,
            StudyType::Revision,
            15,
        );
        let result = compute_score(&input);
        assert!((result.score - 68.0).abs() < 1e-9);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn test_base_formula_uses_category_profile() {
        // Same raw inputs, different decay/noise coefficients.
        let employee = compute_score(&generic_input(SessionKind::Employee, 60, 1, 4, 2));
        let general = compute_score(&generic_input(SessionKind::General, 60, 1, 4, 2));

        // Employee: 100 - 36 - 6 - 6 + 15 = 67
        assert!((employee.score - 67.0).abs() < 1e-9);
        // General: 100 - 30 - 8 - 6 + 15 = 71
        assert!((general.score - 71.0).abs() < 1e-9);
    }

    #[test]
    fn test_breaks_recover_score() {
        let without = compute_score(&generic_input(SessionKind::General, 60, 0, 4, 2));
        let with = compute_score(&generic_input(SessionKind::General, 60, 3, 4, 2));
        assert!((with.score - without.score - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_clamp_lower_bound() {
        // Employee worst case: 100 - 144 - 15 - 30 = -89 -> 0
        let result = compute_score(&generic_input(SessionKind::Employee, 240, 0, 10, 10));
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_clamp_upper_bound() {
        // 100 - 0 - 0 - 3 + 75 = 172 -> 100
        let result = compute_score(&generic_input(SessionKind::General, 0, 5, 0, 1));
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn test_student_hard_subject_deduction() {
        let easy = student_input(
            30,
            0,
            0,
            1,
            SubjectDifficulty::Easy,
            StudyType::Revision,
            30,
        );
        let hard = student_input(
            30,
            0,
            0,
            1,
            SubjectDifficulty::Hard,
            StudyType::Revision,
            30,
        );

        let easy_result = compute_score(&easy);
        let hard_result = compute_score(&hard);

        assert!((easy_result.score - hard_result.score - 15.0).abs() < 1e-9);
        assert_eq!(hard_result.reasons, vec![Reason::DifficultSubject]);
    }

    #[test]
    fn test_student_new_topic_deduction() {
        let revision = student_input(
            30,
            0,
            0,
            1,
            SubjectDifficulty::Easy,
            StudyType::Revision,
            30,
        );
        let new_topic = student_input(
            30,
            0,
            0,
            1,
            SubjectDifficulty::Easy,
            StudyType::NewTopic,
            30,
        );

        let rev_result = compute_score(&revision);
        let new_result = compute_score(&new_topic);

        assert!((rev_result.score - new_result.score - 10.0).abs() < 1e-9);
        assert_eq!(new_result.reasons, vec![Reason::StudyingNewTopic]);
    }

    #[test]
    fn test_exam_proximity_tiers() {
        let base = |days| {
            student_input(
                30,
                0,
                0,
                1,
                SubjectDifficulty::Easy,
                StudyType::Revision,
                days,
            )
        };

        let far = compute_score(&base(15));
        assert!(far.reasons.is_empty());

        let approaching = compute_score(&base(14));
        assert_eq!(approaching.reasons, vec![Reason::ExamApproaching]);
        assert!((far.score - approaching.score - 10.0).abs() < 1e-9);

        let close = compute_score(&base(7));
        assert_eq!(close.reasons, vec![Reason::ExamVeryClose]);
        assert!((far.score - close.score - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_exam_rules_mutually_exclusive() {
        for days in 0..=SessionInput::EXAM_DAYS_MAX {
            let result = compute_score(&student_input(
                30,
                0,
                0,
                1,
                SubjectDifficulty::Easy,
                StudyType::Revision,
                days,
            ));
            let close = result.reasons.contains(&Reason::ExamVeryClose);
            let approaching = result.reasons.contains(&Reason::ExamApproaching);
            assert!(
                !(close && approaching),
                "both exam rules fired at {days} days"
            );
        }
    }

    #[test]
    fn test_student_reason_order_matches_rule_order() {
        let input = student_input(
            120,
            1,
            3,
            4,
            SubjectDifficulty::Hard,
            StudyType::NewTopic,
            5,
        );
        let result = compute_score(&input);
        assert_eq!(
            result.reasons,
            vec![
                Reason::LongContinuousStudy,
                Reason::DifficultSubject,
                Reason::StudyingNewTopic,
                Reason::ExamVeryClose,
            ]
        );
    }

    #[test]
    fn test_generic_reason_order_matches_rule_order() {
        let result = compute_score(&generic_input(SessionKind::Employee, 120, 0, 8, 8));
        assert_eq!(
            result.reasons,
            vec![
                Reason::LongContinuousWork,
                Reason::HighNoise,
                Reason::HighFatigue,
            ]
        );
    }

    #[test]
    fn test_long_study_is_informational_only() {
        // The duration reason must not deduct beyond the base decay.
        let at_90 = compute_score(&student_input(
            90,
            0,
            0,
            1,
            SubjectDifficulty::Easy,
            StudyType::Revision,
            30,
        ));
        let at_91 = compute_score(&student_input(
            91,
            0,
            0,
            1,
            SubjectDifficulty::Easy,
            StudyType::Revision,
            30,
        ));

        assert!(at_90.reasons.is_empty());
        assert_eq!(at_91.reasons, vec![Reason::LongContinuousStudy]);
        // Only one extra minute of decay (0.4) separates the scores.
        assert!((at_90.score - at_91.score - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_validate_accepts_range_boundaries() {
        let input = student_input(
            SessionInput::WORK_MINUTES_MAX,
            SessionInput::BREAKS_MAX,
            SessionInput::NOISE_MAX,
            SessionInput::FATIGUE_MAX,
            SubjectDifficulty::Hard,
            StudyType::NewTopic,
            SessionInput::EXAM_DAYS_MAX,
        );
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut input = generic_input(SessionKind::General, 30, 0, 2, 3);

        input.work_minutes = 241;
        assert!(input.validate().is_err());
        input.work_minutes = 30;

        input.breaks_taken = 6;
        assert!(input.validate().is_err());
        input.breaks_taken = 0;

        input.noise_level = 11;
        assert!(input.validate().is_err());
        input.noise_level = 2;

        input.fatigue_level = 0;
        assert!(input.validate().is_err());
        input.fatigue_level = 11;
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_exam_days_out_of_range() {
        let input = student_input(
            30,
            0,
            2,
            3,
            SubjectDifficulty::Easy,
            StudyType::Revision,
            61,
        );
        assert!(matches!(
            input.validate(),
            Err(crate::error::ValidationError::OutOfRange {
                field: "days_until_exam",
                ..
            })
        ));
    }

    #[test]
    fn test_reason_serializes_as_label() {
        let json = serde_json::to_string(&Reason::ExamVeryClose).unwrap();
        assert_eq!(json, "\"Exam very close\"");
    }
}

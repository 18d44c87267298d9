//! Predict command: the presentation layer around the scoring pipeline.
//!
//! Collects inputs from flags (falling back to config defaults), validates
//! ranges, runs the scoring engine and recommendation mapper, and renders
//! score, quality, recommendation, and reasons.

use chrono::Local;
use clap::Args;

use focusmeter_core::scoring::{BREAK_CREDIT, FATIGUE_WEIGHT};
use focusmeter_core::{
    compute_score, recommend, Config, QualityLabel, SessionInput, SessionKind, StudyContext,
    UserCategory,
};

#[derive(Args)]
pub struct PredictArgs {
    /// User category (student/employee/general)
    #[arg(long)]
    pub category: Option<String>,

    /// Continuous work/study duration in minutes (0-240)
    #[arg(long)]
    pub work_minutes: Option<u32>,

    /// Breaks taken (0-5)
    #[arg(long)]
    pub breaks: Option<u32>,

    /// Noise level (0-10)
    #[arg(long)]
    pub noise: Option<u32>,

    /// Fatigue level (1-10)
    #[arg(long)]
    pub fatigue: Option<u32>,

    /// Subject difficulty, student only (easy/medium/hard)
    #[arg(long)]
    pub difficulty: Option<String>,

    /// Study type, student only (revision/new-topic)
    #[arg(long)]
    pub study_type: Option<String>,

    /// Days until the next exam, student only (0-60)
    #[arg(long)]
    pub exam_days: Option<u32>,

    /// Print machine-readable JSON instead of the report
    #[arg(long)]
    pub json: bool,

    /// Show how the score was derived
    #[arg(long)]
    pub trace: bool,
}

pub fn run(args: PredictArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let defaults = &config.defaults;

    let category = match &args.category {
        Some(s) => s.parse::<UserCategory>()?,
        None => defaults.category,
    };

    let has_student_flags =
        args.difficulty.is_some() || args.study_type.is_some() || args.exam_days.is_some();
    if category != UserCategory::Student && has_student_flags {
        return Err(format!(
            "--difficulty, --study-type and --exam-days only apply to --category student \
             (got {category})"
        )
        .into());
    }

    let kind = match category {
        UserCategory::Student => {
            let difficulty = match &args.difficulty {
                Some(s) => s.parse()?,
                None => defaults.subject_difficulty,
            };
            let study_type = match &args.study_type {
                Some(s) => s.parse()?,
                None => defaults.study_type,
            };
            SessionKind::Student(StudyContext {
                difficulty,
                study_type,
                days_until_exam: args.exam_days.unwrap_or(defaults.days_until_exam),
            })
        }
        UserCategory::Employee => SessionKind::Employee,
        UserCategory::General => SessionKind::General,
    };

    let input = SessionInput {
        work_minutes: args.work_minutes.unwrap_or(defaults.work_minutes),
        breaks_taken: args.breaks.unwrap_or(defaults.breaks_taken),
        noise_level: args.noise.unwrap_or(defaults.noise_level),
        fatigue_level: args.fatigue.unwrap_or(defaults.fatigue_level),
        kind,
    };
    input.validate()?;

    let result = compute_score(&input);
    let recommendation = recommend(result.score, category);
    let quality = QualityLabel::from_score(result.score);

    if args.json {
        let payload = serde_json::json!({
            "category": category.name(),
            "score": result.score,
            "quality": quality.label(),
            "recommendation": recommendation.message(),
            "reasons": result.reasons,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("\nFocus Score: {}/100", result.score as u32);
    println!("{}", render_score_bar(result.score));
    println!("\n{}: {}", category.performance_label(), quality);
    println!("Recommendation: {}", recommendation.message());

    if !result.reasons.is_empty() {
        println!("\nFactors affecting attention:");
        for reason in &result.reasons {
            println!("  • {reason}");
        }
    }

    if args.trace || config.show_trace {
        print_trace(&input, category, result.score);
    }

    Ok(())
}

/// Render the score as a 30-cell progress bar.
fn render_score_bar(score: f64) -> String {
    let filled = (score / 100.0 * 30.0).round() as usize;
    let bar = "█".repeat(filled);
    let empty = "░".repeat(30 - filled);
    format!("{bar}{empty}")
}

/// Print the derivation of the base score, mirroring the rendered report.
fn print_trace(input: &SessionInput, category: UserCategory, final_score: f64) {
    let profile = category.profile();

    println!("\nAnalysis trace");
    println!("{}", "─".repeat(40));
    println!("Category:      {category}");
    println!("Base score:    100");
    println!(
        "Time worked:   {} min (-{:.1})",
        input.work_minutes,
        input.work_minutes as f64 * profile.decay_rate
    );
    println!(
        "Noise level:   {} (-{:.1})",
        input.noise_level,
        input.noise_level as f64 * profile.noise_penalty
    );
    println!(
        "Fatigue level: {} (-{:.1})",
        input.fatigue_level,
        input.fatigue_level as f64 * FATIGUE_WEIGHT
    );
    println!(
        "Breaks taken:  {} (+{:.1})",
        input.breaks_taken,
        input.breaks_taken as f64 * BREAK_CREDIT
    );
    println!("Final score:   {final_score:.1}");
    println!("{}", "─".repeat(40));
    println!("Generated at {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
}

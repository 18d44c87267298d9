//! Profile table inspection commands.

use clap::Subcommand;

use focusmeter_core::UserCategory;

#[derive(Subcommand)]
pub enum ProfileAction {
    /// List all category profiles
    List,
    /// Show one profile in detail
    Show {
        /// Category (student/employee/general)
        category: String,
    },
}

pub fn run(action: ProfileAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ProfileAction::List => list_profiles(),
        ProfileAction::Show { category } => show_profile(&category),
    }
}

fn list_profiles() -> Result<(), Box<dyn std::error::Error>> {
    println!(
        "{:<10} {:<8} {:<8} Description",
        "Category", "Decay", "Noise"
    );
    println!("{}", "─".repeat(70));
    for category in UserCategory::ALL {
        let profile = category.profile();
        println!(
            "{:<10} {:<8} {:<8} {}",
            category.to_string(),
            profile.decay_rate,
            format!("{}x", profile.noise_penalty),
            profile.description
        );
    }
    Ok(())
}

fn show_profile(category: &str) -> Result<(), Box<dyn std::error::Error>> {
    let category: UserCategory = category.parse()?;
    let profile = category.profile();

    println!("{category} profile");
    println!("  Description:       {}", profile.description);
    println!("  Decay rate:        {}", profile.decay_rate);
    println!("  Noise sensitivity: {}x", profile.noise_penalty);
    println!("  Quality heading:   {}", category.performance_label());
    Ok(())
}

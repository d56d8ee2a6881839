// ABOUTME: Nutriwise CLI - assess a profile and optionally call the AI operations
// ABOUTME: Reads a profile JSON file, prints assessment/recommendation and AI results as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriwise Contributors

//!
//! Usage:
//! ```bash
//! # Assess a profile and print the recommendation
//! nutriwise assess --profile profile.json
//!
//! # Assess and generate a one-day meal plan (requires GEMINI_API_KEY)
//! nutriwise assess --profile profile.json --meal-plan
//!
//! # Grounded diet explanation with related topics
//! nutriwise explain "keto diet vs intermittent fasting"
//!
//! # Symptom-based deficiency analysis
//! nutriwise symptoms "fatigue, brittle nails, hair loss"
//!
//! # Verify the AI credential
//! nutriwise check
//! ```

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use nutriwise::config::AppConfig;
use nutriwise::errors::{AppError, AppResult};
use nutriwise::intelligence::{compute_assessment, recommend};
use nutriwise::llm::LlmProvider as _;
use nutriwise::llm::GeminiProvider;
use nutriwise::logging::init_logging;
use nutriwise::models::{BmiCategory, MealPlanRequest, UserProfile};
use nutriwise::orchestrator::NutritionAi;

#[derive(Parser)]
#[command(
    name = "nutriwise",
    about = "Personalized nutrition assessment and AI meal planning",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the metabolic assessment and diet recommendation
    Assess {
        /// Path to a profile JSON file; the built-in sample profile when omitted
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Also generate a one-day meal plan for the recommended target
        #[arg(long)]
        meal_plan: bool,
    },
    /// Grounded diet explanation with related topics
    Explain {
        /// Diet question or topic
        query: String,
    },
    /// Symptom-based deficiency analysis
    Symptoms {
        /// Free-text symptom description
        text: String,
    },
    /// Verify the AI provider credential
    Check,
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = AppConfig::from_env();
    if let Err(e) = init_logging(&config.logging) {
        eprintln!("failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    match run(&Cli::parse(), &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli, config: &AppConfig) -> AppResult<()> {
    match &cli.command {
        Command::Assess { profile, meal_plan } => assess(config, profile.as_ref(), *meal_plan).await,
        Command::Explain { query } => explain(config, query).await,
        Command::Symptoms { text } => symptoms(config, text).await,
        Command::Check => check(config).await,
    }
}

async fn assess(config: &AppConfig, path: Option<&PathBuf>, meal_plan: bool) -> AppResult<()> {
    let profile = load_profile(path)?;
    let assessment = compute_assessment(&profile)?;
    let recommendation = recommend(&profile, &assessment);

    let report = serde_json::json!({
        "assessment": &assessment,
        "bmiCategory": BmiCategory::from_bmi(assessment.bmi).label(),
        "weightDifferenceKg": profile.weight_difference(),
        "recommendation": &recommendation,
        "recommendedDiet": recommendation.summary(),
    });
    print_json(&report)?;

    if meal_plan {
        let ai = NutritionAi::from_config(&config.llm);
        let request = MealPlanRequest {
            target_calories: recommendation.target_calories,
            diet_label: recommendation.diet_label.clone(),
            goal: profile.goal,
            allergies: profile.allergies.clone(),
        };
        info!(
            target_calories = request.target_calories,
            "generating meal plan"
        );
        let plan = ai.generate_meal_plan(&request).await?;
        print_json(&plan)?;
    }

    Ok(())
}

async fn explain(config: &AppConfig, query: &str) -> AppResult<()> {
    let ai = NutritionAi::from_config(&config.llm);
    let result = ai.search(query).await?;
    print_json(&result)
}

async fn symptoms(config: &AppConfig, text: &str) -> AppResult<()> {
    let ai = NutritionAi::from_config(&config.llm);
    let analysis = ai.analyze_symptoms(text).await?;
    print_json(&analysis)
}

async fn check(config: &AppConfig) -> AppResult<()> {
    let Some(api_key) = &config.llm.api_key else {
        return Err(AppError::config_missing("GEMINI_API_KEY not set"));
    };
    let provider = GeminiProvider::new(api_key);
    let healthy = provider.health_check().await?;
    println!(
        "{}: {}",
        provider.display_name(),
        if healthy { "ok" } else { "unhealthy" }
    );
    Ok(())
}

fn load_profile(path: Option<&PathBuf>) -> AppResult<UserProfile> {
    match path {
        Some(path) => {
            let raw = fs::read_to_string(path).map_err(|e| {
                AppError::invalid_input(format!("cannot read {}: {e}", path.display()))
            })?;
            serde_json::from_str(&raw)
                .map_err(|e| AppError::invalid_input(format!("malformed profile: {e}")))
        }
        None => Ok(UserProfile::default()),
    }
}

fn print_json(value: &impl serde::Serialize) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::internal(format!("serialization failed: {e}")))?;
    println!("{rendered}");
    Ok(())
}

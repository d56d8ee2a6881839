// ABOUTME: Domain data model for nutrition assessment and AI-generated content
// ABOUTME: Profile input types plus the typed result values produced per request kind
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriwise Contributors

//! # Domain Data Model
//!
//! Input types ([`UserProfile`] and its enums) and the result values the
//! engines and the AI orchestrator produce. Every result type is immutable
//! once constructed and replaced wholesale on recomputation; AI payload
//! types carry `camelCase` wire names matching the generation schemas.

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Gender for BMR calculations
///
/// The Mifflin-St Jeor equation only defines male/female constant terms;
/// this binary split is part of the formula's contract.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male (+5 constant term)
    Male,
    /// Female (-161 constant term)
    Female,
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Sedentary (little/no exercise)
    Sedentary,
    /// Lightly active (1-3 days/week)
    LightlyActive,
    /// Moderately active (3-5 days/week)
    ModeratelyActive,
    /// Very active (6-7 days/week)
    VeryActive,
    /// Extra active (hard training 2x/day)
    ExtraActive,
}

impl ActivityLevel {
    /// TDEE multiplier applied to BMR
    #[must_use]
    pub const fn multiplier(&self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::LightlyActive => 1.375,
            Self::ModeratelyActive => 1.55,
            Self::VeryActive => 1.725,
            Self::ExtraActive => 1.9,
        }
    }
}

/// Weight goal driving the calorie target and base diet label
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    /// Weight loss (caloric deficit)
    Lose,
    /// Muscle gain (caloric surplus)
    Gain,
    /// Weight maintenance (caloric balance)
    Maintain,
}

impl Goal {
    /// Wire/prompt representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lose => "lose",
            Self::Gain => "gain",
            Self::Maintain => "maintain",
        }
    }
}

/// Dietary preference appended to the recommended diet label
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DietaryPreference {
    /// No restriction
    Standard,
    /// Vegetarian
    Vegetarian,
    /// Vegan
    Vegan,
}

/// User profile input to the metrics and recommendation engines
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Gender for the BMR formula branch
    pub gender: Gender,
    /// Age in years
    pub age: u32,
    /// Current weight in kilograms
    pub weight: f64,
    /// Height in centimeters
    pub height: f64,
    /// Activity level for TDEE scaling
    pub activity_level: ActivityLevel,
    /// Weight goal
    pub goal: Goal,
    /// Health conditions, matched case-insensitively (e.g. "diabetes")
    #[serde(default)]
    pub health_conditions: Vec<String>,
    /// Dietary preference
    pub dietary_preference: DietaryPreference,
    /// Allergens to avoid, reported in input order
    #[serde(default)]
    pub allergies: Vec<String>,
    /// Target weight in kilograms
    pub target_weight: f64,
}

impl UserProfile {
    /// Validate required numeric fields
    ///
    /// Absent or non-positive values are a validation failure, never a
    /// zero default.
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::ErrorCode::MissingRequiredField`] when any
    /// of age, weight, height, or target weight is not strictly positive.
    pub fn validate(&self) -> AppResult<()> {
        if self.age == 0
            || self.weight <= 0.0
            || self.height <= 0.0
            || self.target_weight <= 0.0
        {
            return Err(AppError::missing_required_fields());
        }
        Ok(())
    }

    /// Difference between current and target weight in kilograms
    #[must_use]
    pub fn weight_difference(&self) -> f64 {
        self.weight - self.target_weight
    }

    /// Case-insensitive membership test over health conditions
    #[must_use]
    pub fn has_condition(&self, condition: &str) -> bool {
        self.health_conditions
            .iter()
            .any(|c| c.eq_ignore_ascii_case(condition))
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            gender: Gender::Male,
            age: 30,
            weight: 80.0,
            height: 175.0,
            activity_level: ActivityLevel::LightlyActive,
            goal: Goal::Lose,
            health_conditions: Vec::new(),
            dietary_preference: DietaryPreference::Standard,
            allergies: Vec::new(),
            target_weight: 70.0,
        }
    }
}

/// Metabolic assessment derived from a [`UserProfile`]
///
/// Immutable once produced; recomputation yields a fresh value. Rounding is
/// applied only at the exposed fields; `tdee_exact` keeps the unrounded
/// value for downstream calorie-target arithmetic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssessmentResult {
    /// Body Mass Index, rounded to 1 decimal place
    pub bmi: f64,
    /// Basal Metabolic Rate in kcal/day, rounded to the nearest integer
    pub bmr: u32,
    /// Total Daily Energy Expenditure in kcal/day, rounded to the nearest integer
    pub tdee: u32,
    /// Unrounded TDEE used by the recommendation engine
    pub tdee_exact: f64,
}

/// BMI weight category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI in [18.5, 25)
    Normal,
    /// BMI in [25, 30)
    Overweight,
    /// BMI of 30 or above
    Obese,
}

impl BmiCategory {
    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "underweight",
            Self::Normal => "normal weight",
            Self::Overweight => "overweight",
            Self::Obese => "obese",
        }
    }
}

/// Output of the recommendation rule cascade
///
/// Label and notes are kept distinct; [`Recommendation::summary`] composes
/// the single presentation string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    /// Recommended diet label after suffix and override steps
    pub diet_label: String,
    /// Daily calorie target in kcal, fixed by the goal step
    pub target_calories: i32,
    /// Advisory notes in rule order
    pub notes: Vec<String>,
}

impl Recommendation {
    /// Compose the single recommended-diet string exposed to presentation
    #[must_use]
    pub fn summary(&self) -> String {
        if self.notes.is_empty() {
            self.diet_label.clone()
        } else {
            format!(
                "{}. Important notes: {}",
                self.diet_label,
                self.notes.join(", ")
            )
        }
    }
}

/// Input to meal plan generation; not persisted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanRequest {
    /// Daily calorie target in kcal
    pub target_calories: i32,
    /// Diet label the plan must follow
    pub diet_label: String,
    /// Weight goal
    pub goal: Goal,
    /// Allergens the plan must avoid
    #[serde(default)]
    pub allergies: Vec<String>,
}

/// One-day meal plan returned by the AI service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    /// Sum of meal calories in kcal
    pub total_calories: f64,
    /// Meals in the order the service produced them
    pub meals: Vec<Meal>,
}

/// A single meal within a [`MealPlan`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    /// Meal name (breakfast, lunch, dinner, snack)
    pub name: String,
    /// Dish name
    pub dish: String,
    /// Approximate calories in kcal
    pub calories: f64,
    /// Ingredients in presentation order
    pub ingredients: Vec<String>,
}

/// Symptom-based deficiency analysis returned by the AI service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeficiencyAnalysis {
    /// Most likely deficiencies, strongest candidate first
    pub potential_deficiencies: Vec<PotentialDeficiency>,
    /// Consult-a-physician warning; expected but not schema-required
    #[serde(default)]
    pub disclaimer: String,
}

/// A single suspected vitamin or mineral deficiency
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PotentialDeficiency {
    /// Vitamin or mineral name
    pub name: String,
    /// Why the symptoms point at this deficiency
    pub explanation: String,
    /// Foods rich in the nutrient
    pub food_sources: Vec<String>,
    /// Recommended daily allowance for adults
    pub recommended_dosage: String,
}

/// A cited web source attached to grounded free-text output
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WebSource {
    /// Source URI
    pub uri: String,
    /// Source title
    pub title: String,
}

/// Grounded free-text explanation with its citations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DietExplanation {
    /// Free-form explanation text
    pub text: String,
    /// Citation metadata, in response order
    pub sources: Vec<WebSource>,
}

/// Combined result of a diet search: explanation plus related topics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DietSearchResult {
    /// Free-form explanation text
    pub text: String,
    /// Citation metadata, in response order
    pub sources: Vec<WebSource>,
    /// Up to 5 related questions or topics; empty on degradation
    pub related_topics: Vec<String>,
}

// ABOUTME: Deterministic diet recommendation rule cascade
// ABOUTME: Derives a diet label, calorie target and advisory notes from profile and metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriwise Contributors

//! Recommendation Engine
//!
//! Pure, total rule cascade over a valid [`AssessmentResult`]. The steps
//! run in fixed order with no backtracking:
//!
//! 1. Goal step fixes the base label and the calorie target.
//! 2. Dietary preference appends a parenthetical suffix.
//! 3. Diabetes replaces the label outright (the calorie target from step 1
//!    is deliberately retained unchanged).
//! 4. Hypertension and thyroid conditions append notes, independently.
//! 5. Non-empty allergies append one note listing every allergen in order.

use crate::models::{
    AssessmentResult, DietaryPreference, Goal, Recommendation, UserProfile,
};

/// Fixed label replacing the goal-derived one when diabetes is present
pub const DIABETES_DIET_LABEL: &str = "Mediterranean diet or low-carbohydrate diet";

const DIABETES_NOTE: &str =
    "Consult your physician to choose the most suitable option for your condition";
const HYPERTENSION_NOTE: &str =
    "The DASH diet and reduced sodium (salt) intake are recommended";
const THYROID_NOTE: &str =
    "Some foods can interfere with thyroid function, consult a specialist";

/// Derive the diet label, calorie target and notes for a profile
///
/// The calorie target is computed once from the unrounded TDEE in the goal
/// step and is never touched by later label overrides.
#[must_use]
pub fn recommend(profile: &UserProfile, assessment: &AssessmentResult) -> Recommendation {
    let mut notes = Vec::new();

    // Step 1: goal fixes both the base label and the calorie target.
    let (mut diet_label, target) = match profile.goal {
        Goal::Lose => ("Caloric-deficit diet".to_owned(), assessment.tdee_exact - 500.0),
        Goal::Gain => (
            "Caloric-surplus muscle-building diet".to_owned(),
            assessment.tdee_exact + 500.0,
        ),
        Goal::Maintain => ("Balanced diet".to_owned(), assessment.tdee_exact),
    };
    let target_calories = target.round() as i32;

    // Step 2: preference suffix.
    match profile.dietary_preference {
        DietaryPreference::Vegetarian => diet_label.push_str(" (vegetarian)"),
        DietaryPreference::Vegan => diet_label.push_str(" (vegan)"),
        DietaryPreference::Standard => {}
    }

    // Step 3: diabetes replaces the label; the target stays as computed.
    if profile.has_condition("diabetes") {
        diet_label = DIABETES_DIET_LABEL.to_owned();
        notes.push(DIABETES_NOTE.to_owned());
    }

    // Step 4: secondary condition notes, fixed order, at most once each.
    if profile.has_condition("hypertension") {
        notes.push(HYPERTENSION_NOTE.to_owned());
    }
    if profile.has_condition("thyroid") {
        notes.push(THYROID_NOTE.to_owned());
    }

    // Step 5: one note listing all allergens in input order.
    if !profile.allergies.is_empty() {
        notes.push(format!(
            "Avoid foods containing: {}",
            profile.allergies.join(", ")
        ));
    }

    Recommendation {
        diet_label,
        target_calories,
        notes,
    }
}

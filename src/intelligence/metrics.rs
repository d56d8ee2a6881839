// ABOUTME: Metabolic metrics computation using peer-reviewed formulas
// ABOUTME: BMR (Mifflin-St Jeor), TDEE scaling and BMI categorization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriwise Contributors

//! Metrics Engine
//!
//! Pure numeric computation from a validated [`UserProfile`].
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2),
//!   241-247. <https://doi.org/10.1093/ajcn/51.2.241>

use crate::errors::AppResult;
use crate::models::{AssessmentResult, BmiCategory, Gender, UserProfile};

/// Compute BMI, BMR and TDEE for a profile
///
/// Rounding is applied only at the exposed fields: BMI to one decimal
/// place, BMR and TDEE to the nearest integer. `tdee_exact` stays
/// unrounded so calorie targets downstream subtract or add against the
/// full-precision value.
///
/// # Errors
///
/// Returns a validation error when any required numeric field is absent
/// or non-positive; no partial result is produced.
pub fn compute_assessment(profile: &UserProfile) -> AppResult<AssessmentResult> {
    profile.validate()?;

    let bmr = basal_metabolic_rate(profile);
    let tdee = bmr * profile.activity_level.multiplier();

    let height_m = profile.height / 100.0;
    let bmi = profile.weight / (height_m * height_m);

    Ok(AssessmentResult {
        bmi: (bmi * 10.0).round() / 10.0,
        bmr: bmr.round() as u32,
        tdee: tdee.round() as u32,
        tdee_exact: tdee,
    })
}

/// Mifflin-St Jeor resting energy expenditure in kcal/day
fn basal_metabolic_rate(profile: &UserProfile) -> f64 {
    let common = 10.0 * profile.weight + 6.25 * profile.height - 5.0 * f64::from(profile.age);
    match profile.gender {
        Gender::Male => common + 5.0,
        Gender::Female => common - 161.0,
    }
}

impl BmiCategory {
    /// Categorize a BMI value
    ///
    /// The partition is exhaustive and non-overlapping over the positive
    /// reals: <18.5 underweight, [18.5, 25) normal, [25, 30) overweight,
    /// >=30 obese.
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }
}

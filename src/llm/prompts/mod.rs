// ABOUTME: Prompt templates for the four nutrition request kinds
// ABOUTME: Each template embeds its parameters verbatim into a fixed instruction frame
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriwise Contributors

//! # Prompt Templates
//!
//! One builder per request kind. User input is embedded verbatim; the
//! framing instructions never change between calls of the same kind.

use crate::models::{Goal, MealPlanRequest};

/// Grounded diet explanation prompt
#[must_use]
pub fn diet_explanation(query: &str) -> String {
    format!(
        "As a trusted nutrition expert, provide a detailed explanation and comparison of: \
         \"{query}\". Base your answer primarily on the latest guidelines and recommendations \
         from accredited international health organizations such as the American Diabetes \
         Association, the American Heart Association, and the FDA. Describe the benefits, \
         the risks, and the allowed and restricted foods for every diet mentioned. Use clear \
         language suitable for non-specialists."
    )
}

/// Related-topics suggestion prompt; the reply must be JSON
#[must_use]
pub fn related_topics(topic: &str) -> String {
    format!(
        "Based on the following nutrition topic: \"{topic}\", create a list of 5 related \
         questions or comparison topics the user may also be interested in. The reply must \
         be in JSON format."
    )
}

/// Symptom-based deficiency analysis prompt; the reply must be JSON
#[must_use]
pub fn symptom_analysis(symptoms: &str) -> String {
    format!(
        "As a specialized nutrition expert, analyze the following symptoms: \"{symptoms}\". \
         Based on these symptoms and reliable scientific literature, identify the 3 most \
         likely vitamin or mineral deficiencies. For each potential deficiency, provide a \
         simple explanation, a list of foods rich in it, and the recommended daily allowance \
         (RDA) for adults according to the National Institutes of Health (NIH) or an \
         equivalent body. Add a clear warning at the end that a physician must be consulted \
         before taking any supplement. The reply must be in JSON format."
    )
}

/// One-day meal plan prompt; allergy clause present only when needed
#[must_use]
pub fn meal_plan(request: &MealPlanRequest) -> String {
    let allergy_clause = if request.allergies.is_empty() {
        String::new()
    } else {
        format!(
            "The plan must avoid the following allergens: {}. ",
            request.allergies.join(", ")
        )
    };
    format!(
        "As a professional dietitian, create a healthy, balanced one-day meal plan based on \
         the following criteria: target calories: {calories} kcal, diet type: \"{diet}\", \
         goal: \"{goal}\". {allergy_clause}Split the plan into 4 meals: breakfast, lunch, \
         dinner, and a snack. For each meal, give the meal name, the dish name, its \
         ingredients, and the approximate calorie count. The calorie total must be very \
         close to the target. The reply must be in JSON format.",
        calories = request.target_calories,
        diet = request.diet_label,
        goal = Goal::as_str(&request.goal),
    )
}

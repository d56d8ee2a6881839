// ABOUTME: Integration tests for the diet recommendation rule cascade
// ABOUTME: Verifies goal targets, preference suffixes, overrides, notes and composition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriwise Contributors
#![allow(clippy::unwrap_used)]

mod common;

use nutriwise::intelligence::{compute_assessment, recommend};
use nutriwise::intelligence::recommendation_engine::DIABETES_DIET_LABEL;
use nutriwise::models::{DietaryPreference, Goal, UserProfile};

fn recommend_for(profile: &UserProfile) -> nutriwise::models::Recommendation {
    let assessment = compute_assessment(profile).unwrap();
    recommend(profile, &assessment)
}

#[test]
fn test_goal_targets_use_unrounded_tdee() {
    common::init_test_logging();

    // tdee_exact = 2447.5 for the default profile
    let lose = recommend_for(&UserProfile::default());
    assert_eq!(lose.diet_label, "Caloric-deficit diet");
    assert_eq!(lose.target_calories, 1948); // round(2447.5 - 500)

    let gain = recommend_for(&UserProfile {
        goal: Goal::Gain,
        ..UserProfile::default()
    });
    assert_eq!(gain.diet_label, "Caloric-surplus muscle-building diet");
    assert_eq!(gain.target_calories, 2948); // round(2447.5 + 500)

    let maintain = recommend_for(&UserProfile {
        goal: Goal::Maintain,
        ..UserProfile::default()
    });
    assert_eq!(maintain.diet_label, "Balanced diet");
    assert_eq!(maintain.target_calories, 2448);
}

#[test]
fn test_preference_suffix() {
    let vegetarian = recommend_for(&UserProfile {
        dietary_preference: DietaryPreference::Vegetarian,
        ..UserProfile::default()
    });
    assert_eq!(vegetarian.diet_label, "Caloric-deficit diet (vegetarian)");

    let vegan = recommend_for(&UserProfile {
        dietary_preference: DietaryPreference::Vegan,
        goal: Goal::Maintain,
        ..UserProfile::default()
    });
    assert_eq!(vegan.diet_label, "Balanced diet (vegan)");
}

#[test]
fn test_diabetes_overrides_label_but_not_target() {
    let profile = UserProfile {
        health_conditions: vec!["Diabetes".to_owned()],
        dietary_preference: DietaryPreference::Vegan,
        ..UserProfile::default()
    };
    let recommendation = recommend_for(&profile);

    // Label replaced outright, including the preference suffix
    assert_eq!(recommendation.diet_label, DIABETES_DIET_LABEL);
    // Calorie target from the goal step is retained unchanged
    assert_eq!(recommendation.target_calories, 1948);
    assert!(recommendation.notes.iter().any(|n| n.contains("physician")));
}

#[test]
fn test_secondary_condition_notes_in_fixed_order() {
    let profile = UserProfile {
        health_conditions: vec![
            "thyroid".to_owned(),
            "hypertension".to_owned(),
            "diabetes".to_owned(),
        ],
        ..UserProfile::default()
    };
    let recommendation = recommend_for(&profile);

    // Rule order, not input order: diabetes, hypertension, thyroid
    assert_eq!(recommendation.notes.len(), 3);
    assert!(recommendation.notes[0].contains("physician"));
    assert!(recommendation.notes[1].contains("DASH"));
    assert!(recommendation.notes[2].contains("specialist"));
}

#[test]
fn test_allergy_note_lists_all_allergens_in_input_order() {
    let profile = UserProfile {
        allergies: vec!["gluten".to_owned(), "dairy".to_owned()],
        ..UserProfile::default()
    };
    let recommendation = recommend_for(&profile);

    assert_eq!(recommendation.notes.len(), 1);
    assert_eq!(
        recommendation.notes[0],
        "Avoid foods containing: gluten, dairy"
    );
}

#[test]
fn test_summary_composition() {
    let plain = recommend_for(&UserProfile::default());
    assert_eq!(plain.summary(), "Caloric-deficit diet");

    let noted = recommend_for(&UserProfile {
        allergies: vec!["nuts".to_owned()],
        ..UserProfile::default()
    });
    assert_eq!(
        noted.summary(),
        "Caloric-deficit diet. Important notes: Avoid foods containing: nuts"
    );
}

// ABOUTME: Integration tests for the AI orchestrator against a scripted provider double
// ABOUTME: Covers configuration gating, per-kind degradation and the parallel search join
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriwise Contributors
#![allow(clippy::unwrap_used)]

mod common;

use common::{text_response, MockProvider};

use nutriwise::errors::{AppError, ErrorCode};
use nutriwise::llm::{Citation, GenerateRequest, LlmCapabilities};
use nutriwise::models::{Goal, MealPlanRequest};
use nutriwise::orchestrator::NutritionAi;

fn meal_plan_request() -> MealPlanRequest {
    MealPlanRequest {
        target_calories: 1948,
        diet_label: "Caloric-deficit diet".to_owned(),
        goal: Goal::Lose,
        allergies: vec!["gluten".to_owned()],
    }
}

#[tokio::test]
async fn test_unconfigured_client_fails_without_io() {
    common::init_test_logging();
    let ai = NutritionAi::unconfigured();

    let err = ai.explain("keto").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigMissing);

    let err = ai.analyze_symptoms("fatigue").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigMissing);

    let err = ai.generate_meal_plan(&meal_plan_request()).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigMissing);

    // The degrading operation swallows even the configuration failure
    assert!(ai.related_topics("keto").await.is_empty());
}

#[tokio::test]
async fn test_explain_embeds_query_and_requests_grounding() {
    let provider = MockProvider::new(|_| {
        let mut response = text_response("The keto diet is a high-fat regimen.");
        response.citations = vec![Citation {
            uri: "https://example.org/keto".to_owned(),
            title: "Keto overview".to_owned(),
        }];
        Ok(response)
    });
    let ai = NutritionAi::new(provider.clone());

    let explanation = ai.explain("what is the keto diet?").await.unwrap();
    assert_eq!(explanation.text, "The keto diet is a high-fat regimen.");
    assert_eq!(explanation.sources.len(), 1);
    assert_eq!(explanation.sources[0].uri, "https://example.org/keto");

    let requests = provider.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].prompt.contains("\"what is the keto diet?\""));
    assert!(requests[0].search_grounding);
    assert!(requests[0].response_schema.is_none());
}

#[tokio::test]
async fn test_explain_propagates_service_failure() {
    let provider = MockProvider::new(|_| Err(AppError::external_service("gemini", "HTTP 503")));
    let ai = NutritionAi::new(provider);

    let err = ai.explain("keto").await.unwrap_err();
    assert!(err.is_service_error());
}

#[tokio::test]
async fn test_related_topics_parses_and_truncates() {
    let provider = MockProvider::new(|_| {
        Ok(text_response(
            r#"{"related_topics": ["a", "b", "c", "d", "e", "f", "g"]}"#,
        ))
    });
    let ai = NutritionAi::new(provider.clone());

    let topics = ai.related_topics("keto").await;
    assert_eq!(topics, ["a", "b", "c", "d", "e"]);

    let requests = provider.requests();
    let schema = requests[0].response_schema.as_ref().unwrap();
    assert_eq!(schema.required.as_deref(), Some(&["related_topics".to_owned()][..]));
}

#[tokio::test]
async fn test_related_topics_never_raises() {
    // Service failure
    let failing = MockProvider::new(|_| Err(AppError::external_service("gemini", "boom")));
    assert!(NutritionAi::new(failing).related_topics("keto").await.is_empty());

    // Garbage payload
    let garbage = MockProvider::new(|_| Ok(text_response("not json at all")));
    assert!(NutritionAi::new(garbage).related_topics("keto").await.is_empty());

    // Provider without JSON mode
    let prose_only = MockProvider::with_capabilities(LlmCapabilities::SEARCH_GROUNDING, |_| {
        Ok(text_response("{}"))
    });
    assert!(NutritionAi::new(prose_only).related_topics("keto").await.is_empty());
}

#[tokio::test]
async fn test_analyze_symptoms_round_trip() {
    let provider = MockProvider::new(|_| {
        Ok(text_response(
            r#"{
                "potentialDeficiencies": [
                    {
                        "name": "Iron",
                        "explanation": "Fatigue and brittle nails often track low iron stores.",
                        "foodSources": ["lentils", "red meat", "spinach"],
                        "recommendedDosage": "8 mg/day for adult men, 18 mg/day for adult women"
                    }
                ],
                "disclaimer": "Consult a physician before taking supplements."
            }"#,
        ))
    });
    let ai = NutritionAi::new(provider.clone());

    let analysis = ai.analyze_symptoms("fatigue, brittle nails").await.unwrap();
    assert_eq!(analysis.potential_deficiencies.len(), 1);
    assert_eq!(analysis.potential_deficiencies[0].name, "Iron");
    assert_eq!(analysis.potential_deficiencies[0].food_sources[0], "lentils");
    assert!(analysis.disclaimer.contains("physician"));

    let requests = provider.requests();
    assert!(requests[0].prompt.contains("\"fatigue, brittle nails\""));
    assert!(requests[0].response_schema.is_some());
}

#[tokio::test]
async fn test_analyze_symptoms_missing_disclaimer_defaults_empty() {
    let provider = MockProvider::new(|_| {
        Ok(text_response(r#"{"potentialDeficiencies": []}"#))
    });
    let analysis = NutritionAi::new(provider)
        .analyze_symptoms("fatigue")
        .await
        .unwrap();
    assert!(analysis.disclaimer.is_empty());
}

#[tokio::test]
async fn test_parse_error_is_distinct_from_service_error() {
    let provider = MockProvider::new(|_| Ok(text_response(r#"{"totalCalories": "oops"}"#)));
    let err = NutritionAi::new(provider)
        .generate_meal_plan(&meal_plan_request())
        .await
        .unwrap_err();
    assert!(err.is_parse_error());
    assert!(!err.is_service_error());

    let provider = MockProvider::new(|_| Err(AppError::external_service("gemini", "HTTP 500")));
    let err = NutritionAi::new(provider)
        .generate_meal_plan(&meal_plan_request())
        .await
        .unwrap_err();
    assert!(err.is_service_error());
    assert!(!err.is_parse_error());
}

#[tokio::test]
async fn test_meal_plan_preserves_response_order() {
    let provider = MockProvider::new(|_| {
        Ok(text_response(
            r#"{
                "totalCalories": 1950,
                "meals": [
                    {"name": "breakfast", "dish": "Oatmeal", "calories": 420, "ingredients": ["oats", "milk"]},
                    {"name": "lunch", "dish": "Chicken salad", "calories": 610, "ingredients": ["chicken", "greens"]},
                    {"name": "dinner", "dish": "Grilled salmon", "calories": 680, "ingredients": ["salmon", "rice"]},
                    {"name": "snack", "dish": "Apple with peanut butter", "calories": 240, "ingredients": ["apple", "peanut butter"]}
                ]
            }"#,
        ))
    });
    let ai = NutritionAi::new(provider.clone());

    let plan = ai.generate_meal_plan(&meal_plan_request()).await.unwrap();
    assert!((plan.total_calories - 1950.0).abs() < f64::EPSILON);
    let names: Vec<_> = plan.meals.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["breakfast", "lunch", "dinner", "snack"]);

    // Allergy clause present because the request carries an allergen
    let requests = provider.requests();
    assert!(requests[0].prompt.contains("avoid the following allergens: gluten"));
    assert!(requests[0].prompt.contains("1948 kcal"));
}

#[tokio::test]
async fn test_search_joins_both_calls() {
    let provider = MockProvider::new(|request: &GenerateRequest| {
        if request.response_schema.is_some() {
            Ok(text_response(r#"{"related_topics": ["keto vs paleo"]}"#))
        } else {
            Ok(text_response("Keto explained."))
        }
    });
    let ai = NutritionAi::new(provider.clone());

    let result = ai.search("keto").await.unwrap();
    assert_eq!(result.text, "Keto explained.");
    assert_eq!(result.related_topics, ["keto vs paleo"]);
    assert_eq!(provider.requests().len(), 2);
}

#[tokio::test]
async fn test_search_fails_when_explain_fails() {
    let provider = MockProvider::new(|request: &GenerateRequest| {
        if request.response_schema.is_some() {
            Ok(text_response(r#"{"related_topics": ["still fine"]}"#))
        } else {
            Err(AppError::external_service("gemini", "HTTP 502"))
        }
    });
    let err = NutritionAi::new(provider).search("keto").await.unwrap_err();
    assert!(err.is_service_error());
}

#[tokio::test]
async fn test_search_degrades_when_related_topics_fail() {
    let provider = MockProvider::new(|request: &GenerateRequest| {
        if request.response_schema.is_some() {
            Err(AppError::external_service("gemini", "HTTP 429"))
        } else {
            let mut response = text_response("Keto explained.");
            response.citations = vec![Citation {
                uri: "https://example.org".to_owned(),
                title: "src".to_owned(),
            }];
            Ok(response)
        }
    });
    let result = NutritionAi::new(provider).search("keto").await.unwrap();

    assert_eq!(result.text, "Keto explained.");
    assert_eq!(result.sources.len(), 1);
    assert!(result.related_topics.is_empty());
}

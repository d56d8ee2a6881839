// ABOUTME: AI request orchestration for the four nutrition content kinds
// ABOUTME: Builds prompts and schemas, validates responses, applies per-kind degradation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriwise Contributors

//! # AI Orchestrator
//!
//! [`NutritionAi`] issues the four request kinds against an injected
//! [`LlmProvider`] and decodes the responses into typed results:
//!
//! - [`explain`](NutritionAi::explain): grounded free text; failures propagate.
//! - [`related_topics`](NutritionAi::related_topics): schema-constrained;
//!   any failure degrades to an empty list and never propagates.
//! - [`analyze_symptoms`](NutritionAi::analyze_symptoms) and
//!   [`generate_meal_plan`](NutritionAi::generate_meal_plan):
//!   schema-constrained; failures propagate typed.
//! - [`search`](NutritionAi::search): parallel join of `explain` and
//!   `related_topics`; fails only when `explain` fails.
//!
//! The provider handle is set once at construction and never reconfigured.
//! There are no retries, no timeouts and no request deduplication here;
//! callers own re-entrancy control.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{error, instrument, warn};

use crate::config::LlmConfig;
use crate::errors::{AppError, AppResult};
use crate::llm::{prompts, GeminiProvider, GenerateRequest, LlmProvider, Schema};
use crate::models::{
    DeficiencyAnalysis, DietExplanation, DietSearchResult, MealPlan, MealPlanRequest, WebSource,
};

/// Maximum number of related topics exposed to callers
const MAX_RELATED_TOPICS: usize = 5;

/// Wire shape of the related-topics payload
#[derive(Debug, Deserialize)]
struct RelatedTopicsPayload {
    related_topics: Vec<String>,
}

/// Orchestrator for AI-generated nutrition content
///
/// Holds an optional provider: when unconfigured (no credential at
/// startup), every operation fails immediately with a configuration error
/// and performs no network I/O.
pub struct NutritionAi {
    provider: Option<Arc<dyn LlmProvider>>,
}

impl NutritionAi {
    /// Create an orchestrator backed by the given provider
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// Create an orchestrator with no provider configured
    #[must_use]
    pub const fn unconfigured() -> Self {
        Self { provider: None }
    }

    /// Build an orchestrator from configuration
    ///
    /// A missing API key yields the unconfigured state (logged as an
    /// error) rather than a construction failure; each call then reports
    /// the configuration problem.
    #[must_use]
    pub fn from_config(config: &LlmConfig) -> Self {
        match &config.api_key {
            Some(api_key) => {
                let mut provider = GeminiProvider::new(api_key);
                if let Some(model) = &config.model {
                    provider = provider.with_default_model(model);
                }
                Self::new(Arc::new(provider))
            }
            None => {
                error!("AI provider credential not set; AI operations will be unavailable");
                Self::unconfigured()
            }
        }
    }

    /// Whether a provider has been configured
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Resolve the provider or fail with a configuration error
    fn provider(&self) -> AppResult<&Arc<dyn LlmProvider>> {
        self.provider
            .as_ref()
            .ok_or_else(|| AppError::config_missing("AI client is not initialized"))
    }

    /// Resolve a provider that supports schema-constrained output
    fn structured_provider(&self) -> AppResult<&Arc<dyn LlmProvider>> {
        let provider = self.provider()?;
        if !provider.capabilities().supports_json_mode() {
            return Err(AppError::config(format!(
                "provider {} does not support schema-constrained generation",
                provider.name()
            )));
        }
        Ok(provider)
    }

    /// Grounded free-text explanation of a diet topic
    ///
    /// # Errors
    ///
    /// Fails with a configuration error when no provider is set, or a
    /// service/parse error when the underlying call fails.
    #[instrument(skip(self))]
    pub async fn explain(&self, query: &str) -> AppResult<DietExplanation> {
        let provider = self.provider()?;

        let mut request = GenerateRequest::new(prompts::diet_explanation(query));
        if provider.capabilities().supports_search_grounding() {
            request = request.with_search_grounding();
        } else {
            warn!(
                provider = provider.name(),
                "provider lacks search grounding, answer will be uncited"
            );
        }

        let response = provider.generate(&request).await?;

        Ok(DietExplanation {
            text: response.text,
            sources: response
                .citations
                .into_iter()
                .map(|c| WebSource {
                    uri: c.uri,
                    title: c.title,
                })
                .collect(),
        })
    }

    /// Up to 5 related questions or comparison topics
    ///
    /// Degrades to an empty list on **any** failure (configuration,
    /// service, parse) instead of propagating.
    #[instrument(skip(self))]
    pub async fn related_topics(&self, query: &str) -> Vec<String> {
        match self.fetch_related_topics(query).await {
            Ok(mut topics) => {
                topics.truncate(MAX_RELATED_TOPICS);
                topics
            }
            Err(e) => {
                warn!(error = %e, "related topics unavailable, degrading to empty list");
                Vec::new()
            }
        }
    }

    async fn fetch_related_topics(&self, query: &str) -> AppResult<Vec<String>> {
        let provider = self.structured_provider()?;

        let schema = Schema::object([(
            "related_topics",
            Schema::array(Schema::string())
                .with_description("A list of 5 related diet questions or topics."),
        )])
        .with_required(["related_topics"]);

        let request =
            GenerateRequest::new(prompts::related_topics(query)).with_response_schema(schema);
        let response = provider.generate(&request).await?;

        let payload: RelatedTopicsPayload = parse_structured(&response.text)?;
        Ok(payload.related_topics)
    }

    /// Analyze free-text symptoms into likely nutrient deficiencies
    ///
    /// # Errors
    ///
    /// Propagates configuration, service and parse errors; no silent
    /// degradation.
    #[instrument(skip(self, symptoms))]
    pub async fn analyze_symptoms(&self, symptoms: &str) -> AppResult<DeficiencyAnalysis> {
        let provider = self.structured_provider()?;

        let deficiency = Schema::object([
            (
                "name",
                Schema::string().with_description("Vitamin or mineral name"),
            ),
            (
                "explanation",
                Schema::string().with_description("Why the symptoms point at this deficiency"),
            ),
            ("foodSources", Schema::array(Schema::string())),
            (
                "recommendedDosage",
                Schema::string().with_description("Recommended daily allowance for adults"),
            ),
        ]);
        let schema = Schema::object([
            ("potentialDeficiencies", Schema::array(deficiency)),
            (
                "disclaimer",
                Schema::string()
                    .with_description("Warning that a physician must be consulted"),
            ),
        ]);

        let request =
            GenerateRequest::new(prompts::symptom_analysis(symptoms)).with_response_schema(schema);
        let response = provider.generate(&request).await?;

        parse_structured(&response.text)
    }

    /// Generate a one-day meal plan for a calorie target and diet label
    ///
    /// Four meals (breakfast, lunch, dinner, snack) are requested; the
    /// schema enforces the per-meal shape, not the count or names.
    ///
    /// # Errors
    ///
    /// Propagates configuration, service and parse errors.
    #[instrument(skip(self, request), fields(target_calories = request.target_calories))]
    pub async fn generate_meal_plan(&self, request: &MealPlanRequest) -> AppResult<MealPlan> {
        let provider = self.structured_provider()?;

        let meal = Schema::object([
            (
                "name",
                Schema::string()
                    .with_description("Meal name (breakfast, lunch, dinner, snack)"),
            ),
            ("dish", Schema::string().with_description("Dish name")),
            ("calories", Schema::number()),
            ("ingredients", Schema::array(Schema::string())),
        ])
        .with_required(["name", "dish", "calories", "ingredients"]);
        let schema = Schema::object([
            ("totalCalories", Schema::number()),
            ("meals", Schema::array(meal)),
        ])
        .with_required(["totalCalories", "meals"]);

        let generate =
            GenerateRequest::new(prompts::meal_plan(request)).with_response_schema(schema);
        let response = provider.generate(&generate).await?;

        parse_structured(&response.text)
    }

    /// Combined diet search: explanation and related topics in parallel
    ///
    /// Both calls are issued concurrently and joined. A `related_topics`
    /// failure degrades to an empty list; an `explain` failure fails the
    /// whole operation.
    ///
    /// # Errors
    ///
    /// Propagates `explain`'s configuration, service or parse error.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> AppResult<DietSearchResult> {
        let (explanation, topics) =
            tokio::join!(self.explain(query), self.related_topics(query));
        let explanation = explanation?;

        Ok(DietSearchResult {
            text: explanation.text,
            sources: explanation.sources,
            related_topics: topics,
        })
    }
}

/// Trim and decode a schema-constrained response payload
///
/// Shape mismatches fail closed with a parse error rather than being
/// coerced or passed downstream untyped.
fn parse_structured<T: DeserializeOwned>(text: &str) -> AppResult<T> {
    serde_json::from_str(text.trim())
        .map_err(|e| AppError::parse(format!("response did not match expected schema: {e}")))
}

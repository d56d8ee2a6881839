// ABOUTME: LLM provider abstraction layer for pluggable generative AI integration
// ABOUTME: Defines the generation contract, structural schema descriptor and capability flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriwise Contributors

//! # LLM Provider Service Provider Interface
//!
//! Contract that generative providers implement to back the nutrition
//! orchestrator. The orchestrator only depends on this seam, so a provider
//! can be swapped for a test double.
//!
//! ## Key Concepts
//!
//! - **[`LlmCapabilities`]**: Bitflags describing provider features
//!   (search grounding, schema-constrained JSON output)
//! - **[`LlmProvider`]**: Async trait for single-shot content generation
//! - **[`GenerateRequest`]**: Prompt plus optional grounding/schema options
//! - **[`Schema`]**: Typed structural descriptor constraining JSON output

mod gemini;
pub mod prompts;

pub use gemini::{GeminiProvider, GEMINI_API_KEY_ENV};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::AppResult;

// ============================================================================
// Capability Flags
// ============================================================================

bitflags::bitflags! {
    /// LLM provider capability flags
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct LlmCapabilities: u8 {
        /// Provider can ground free-text answers with web search citations
        const SEARCH_GROUNDING = 0b0000_0001;
        /// Provider supports schema-constrained JSON output
        const JSON_MODE = 0b0000_0010;
    }
}

impl LlmCapabilities {
    /// Capabilities of a full-featured provider (like Gemini)
    #[must_use]
    pub const fn full_featured() -> Self {
        Self::SEARCH_GROUNDING.union(Self::JSON_MODE)
    }

    /// Check if search grounding is supported
    #[must_use]
    pub const fn supports_search_grounding(&self) -> bool {
        self.contains(Self::SEARCH_GROUNDING)
    }

    /// Check if schema-constrained JSON output is supported
    #[must_use]
    pub const fn supports_json_mode(&self) -> bool {
        self.contains(Self::JSON_MODE)
    }
}

// ============================================================================
// Structural Schema Descriptor
// ============================================================================

/// JSON value kind in a [`Schema`], using the Gemini wire spelling
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchemaType {
    /// JSON object
    Object,
    /// JSON array
    Array,
    /// JSON string
    String,
    /// JSON number
    Number,
    /// JSON integer
    Integer,
    /// JSON boolean
    Boolean,
}

/// Structural description of a required JSON shape
///
/// Sent alongside a generation request to constrain the output; the
/// response is still validated on receipt rather than trusted blindly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Schema {
    /// Value kind
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    /// Field description shown to the model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Object properties; `BTreeMap` keeps serialization order stable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, Schema>>,
    /// Array element shape
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    /// Required property names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

impl Schema {
    /// Leaf schema of the given type
    #[must_use]
    pub const fn of(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            description: None,
            properties: None,
            items: None,
            required: None,
        }
    }

    /// String leaf
    #[must_use]
    pub const fn string() -> Self {
        Self::of(SchemaType::String)
    }

    /// Number leaf
    #[must_use]
    pub const fn number() -> Self {
        Self::of(SchemaType::Number)
    }

    /// Object with the given properties
    #[must_use]
    pub fn object<I>(properties: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, Self)>,
    {
        let mut schema = Self::of(SchemaType::Object);
        schema.properties = Some(
            properties
                .into_iter()
                .map(|(name, prop)| (name.to_owned(), prop))
                .collect(),
        );
        schema
    }

    /// Array of the given element shape
    #[must_use]
    pub fn array(items: Self) -> Self {
        let mut schema = Self::of(SchemaType::Array);
        schema.items = Some(Box::new(items));
        schema
    }

    /// Attach a description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark properties as required
    #[must_use]
    pub fn with_required<I>(mut self, required: I) -> Self
    where
        I: IntoIterator<Item = &'static str>,
    {
        self.required = Some(required.into_iter().map(str::to_owned).collect());
        self
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Configuration for a content generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Prompt text
    pub prompt: String,
    /// Model identifier (provider-specific); provider default when `None`
    pub model: Option<String>,
    /// Temperature for response randomness
    pub temperature: Option<f32>,
    /// Enable web-search grounding with citation metadata
    pub search_grounding: bool,
    /// Structural schema the JSON output must match
    pub response_schema: Option<Schema>,
}

impl GenerateRequest {
    /// Create a new generation request for a prompt
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: None,
            temperature: None,
            search_grounding: false,
            response_schema: None,
        }
    }

    /// Set the model to use
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the temperature
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Enable search grounding
    #[must_use]
    pub const fn with_search_grounding(mut self) -> Self {
        self.search_grounding = true;
        self
    }

    /// Constrain the output to a structural schema
    #[must_use]
    pub fn with_response_schema(mut self, schema: Schema) -> Self {
        self.response_schema = Some(schema);
        self
    }
}

/// Citation attached to grounded output
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Citation {
    /// Source URI
    pub uri: String,
    /// Source title
    pub title: String,
}

/// Token usage statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Number of tokens in the prompt
    pub prompt_tokens: u32,
    /// Number of tokens in the completion
    pub completion_tokens: u32,
    /// Total tokens used
    pub total_tokens: u32,
}

/// Response from a content generation call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Generated text (literal prose, or a JSON document when a schema
    /// was requested; callers must validate, never assume)
    pub text: String,
    /// Citation metadata when grounding was enabled
    pub citations: Vec<Citation>,
    /// Model used for generation
    pub model: String,
    /// Token usage statistics
    pub usage: Option<TokenUsage>,
    /// Finish reason (stop, length, etc.)
    pub finish_reason: Option<String>,
}

// ============================================================================
// Provider Trait
// ============================================================================

/// Generative content provider trait
///
/// Implement this trait to back the nutrition orchestrator with a new
/// provider. The async trait pattern keeps it compatible with the tokio
/// runtime and with `Arc<dyn LlmProvider>` injection.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Unique provider identifier (e.g., "gemini")
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Provider capabilities (grounding, JSON mode)
    fn capabilities(&self) -> LlmCapabilities;

    /// Default model used when the request does not name one
    fn default_model(&self) -> &str;

    /// Perform a single-shot content generation
    async fn generate(&self, request: &GenerateRequest) -> AppResult<GenerateResponse>;

    /// Check that the provider is reachable and the credential is valid
    async fn health_check(&self) -> AppResult<bool>;
}

// ABOUTME: Environment-driven application configuration
// ABOUTME: Reads the AI credential, model override and logging settings once at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriwise Contributors

//! # Configuration
//!
//! Environment-only configuration. Values are read once at process start
//! and never reconfigured at runtime; the AI credential in particular is
//! process-wide, read-only state.

use std::env;

use crate::llm::GEMINI_API_KEY_ENV;
use crate::logging::LoggingConfig;

/// Environment variable overriding the default Gemini model
pub const LLM_MODEL_ENV: &str = "NUTRIWISE_LLM_MODEL";

/// Generative AI client configuration
#[derive(Debug, Clone, Default)]
pub struct LlmConfig {
    /// API key; absence leaves the orchestrator unconfigured
    pub api_key: Option<String>,
    /// Model override; provider default when `None`
    pub model: Option<String>,
}

impl LlmConfig {
    /// Load from the environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api_key: env::var(GEMINI_API_KEY_ENV).ok(),
            model: env::var(LLM_MODEL_ENV).ok(),
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Logging settings
    pub logging: LoggingConfig,
    /// AI client settings
    pub llm: LlmConfig,
}

impl AppConfig {
    /// Load the full configuration from the environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            logging: LoggingConfig::from_env(),
            llm: LlmConfig::from_env(),
        }
    }
}

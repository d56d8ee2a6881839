// ABOUTME: Shared test utilities: quiet tracing setup and a scripted LLM provider double
// ABOUTME: MockProvider records every request and answers via an injected closure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriwise Contributors
#![allow(dead_code)]

//! Shared test utilities for `nutriwise` integration tests

use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;

use nutriwise::errors::AppResult;
use nutriwise::llm::{
    GenerateRequest, GenerateResponse, LlmCapabilities, LlmProvider,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

type Responder = Box<dyn Fn(&GenerateRequest) -> AppResult<GenerateResponse> + Send + Sync>;

/// Scripted provider double for orchestrator tests
///
/// Every request is recorded before the responder runs, so tests can
/// assert on prompts, grounding flags and schemas.
pub struct MockProvider {
    capabilities: LlmCapabilities,
    responder: Responder,
    seen: Mutex<Vec<GenerateRequest>>,
}

impl MockProvider {
    pub fn new(
        responder: impl Fn(&GenerateRequest) -> AppResult<GenerateResponse> + Send + Sync + 'static,
    ) -> Arc<Self> {
        Arc::new(Self {
            capabilities: LlmCapabilities::full_featured(),
            responder: Box::new(responder),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn with_capabilities(
        capabilities: LlmCapabilities,
        responder: impl Fn(&GenerateRequest) -> AppResult<GenerateResponse> + Send + Sync + 'static,
    ) -> Arc<Self> {
        Arc::new(Self {
            capabilities,
            responder: Box::new(responder),
            seen: Mutex::new(Vec::new()),
        })
    }

    /// Requests seen so far, in arrival order
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.seen.lock().map(|seen| seen.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn display_name(&self) -> &'static str {
        "Mock Provider"
    }

    fn capabilities(&self) -> LlmCapabilities {
        self.capabilities
    }

    fn default_model(&self) -> &str {
        "mock-model"
    }

    async fn generate(&self, request: &GenerateRequest) -> AppResult<GenerateResponse> {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(request.clone());
        }
        (self.responder)(request)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

/// Plain text response with no citations
pub fn text_response(text: impl Into<String>) -> GenerateResponse {
    GenerateResponse {
        text: text.into(),
        citations: Vec::new(),
        model: "mock-model".to_owned(),
        usage: None,
        finish_reason: Some("STOP".to_owned()),
    }
}

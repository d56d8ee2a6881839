// ABOUTME: Deterministic intelligence modules: metabolic metrics and diet recommendation
// ABOUTME: Pure functions from profile input to immutable result values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriwise Contributors

//! Deterministic nutrition intelligence: metabolic metrics and the diet
//! recommendation rule cascade. Everything here is pure computation; the
//! AI-backed operations live in [`crate::orchestrator`].

/// BMI/BMR/TDEE computation
pub mod metrics;

/// Diet label derivation rule cascade
pub mod recommendation_engine;

pub use metrics::compute_assessment;
pub use recommendation_engine::recommend;

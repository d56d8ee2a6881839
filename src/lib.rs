// ABOUTME: Main library entry point for the nutriwise nutrition intelligence crate
// ABOUTME: Exposes metabolic engines, the AI orchestrator and the Gemini provider layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriwise Contributors

#![deny(unsafe_code)]

//! # Nutriwise
//!
//! Personalized nutrition assessment and AI-generated nutrition content.
//!
//! The crate has two independent halves:
//!
//! - **Deterministic engines** ([`intelligence`]): BMI/BMR/TDEE computation
//!   from a user profile and a rule cascade deriving a diet label, calorie
//!   target and advisory notes.
//! - **AI orchestration** ([`orchestrator`] over [`llm`]): schema-constrained
//!   requests against a generative provider (Google Gemini) for diet
//!   explanations, related topics, symptom-deficiency analysis and one-day
//!   meal plans, with per-kind failure degradation.
//!
//! ## Example
//!
//! ```rust
//! use nutriwise::intelligence::{compute_assessment, recommend};
//! use nutriwise::models::UserProfile;
//!
//! # fn main() -> Result<(), nutriwise::errors::AppError> {
//! let profile = UserProfile::default();
//! let assessment = compute_assessment(&profile)?;
//! let recommendation = recommend(&profile, &assessment);
//! println!("{}: {} kcal", recommendation.diet_label, recommendation.target_calories);
//! # Ok(())
//! # }
//! ```

/// Environment-driven application configuration
pub mod config;

/// Unified error handling system with standard error codes
pub mod errors;

/// Deterministic nutrition intelligence (metrics and recommendations)
pub mod intelligence;

/// LLM provider abstraction and the Gemini implementation
pub mod llm;

/// Structured logging configuration
pub mod logging;

/// Domain data model
pub mod models;

/// AI request orchestration for the four content kinds
pub mod orchestrator;

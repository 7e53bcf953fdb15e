//! Core types and error definitions for the Regkompass compliance engine.
//!
//! This crate provides the data model shared by the registry, scoring,
//! classification and overlap components.
//!
//! # Main types
//!
//! - [`RegkompassError`]: Unified error enum.
//! - [`RegkompassResult`]: Convenience alias for `Result<T, RegkompassError>`.
//! - [`FrameworkConfig`]: Categories, questions, recommendations and quick-check
//!   questions of one framework.
//! - [`Answer`] / [`QuickCheckAnswer`]: Caller-owned assessment input.
//! - [`CategoryScore`] / [`OverallScore`]: Derived scoring output.
//! - [`OverlapMapping`]: Weighted edge between two frameworks.

/// Framework config builder.
pub mod builder;
/// Error types.
pub mod error;
/// Framework content model and validation.
pub mod framework;

mod answer;
mod overlap;
mod score;

pub use answer::{Answer, MaturityLevel, QuickCheckAnswer, QuickCheckValue};
pub use builder::FrameworkBuilder;
pub use error::{RegkompassError, RegkompassResult};
pub use framework::{
    AssessmentTier, Category, EffortLevel, FeatureFlags, FrameworkConfig, OverallFormula,
    Priority, Question, QuestionTier, QuickCheckQuestion, Recommendation, Reference,
    ScoringProfile,
};
pub use overlap::OverlapMapping;
pub use score::{round_one_decimal, CategoryScore, OverallScore, TrafficLight};

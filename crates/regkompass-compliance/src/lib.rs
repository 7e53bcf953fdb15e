//! Multi-framework compliance assessment engine.
//!
//! Determines which regulatory and standards frameworks apply to an
//! organisation, scores its maturity against each of them, and exposes the
//! overlaps between frameworks so that shared measures can be planned once.
//!
//! # Main types
//!
//! - [`FrameworkRegistry`]: Injectable catalogue of validated framework configs.
//! - [`RelevanceRuleSet`]: Rule-driven ranking of all frameworks for an [`OrganizationProfile`].
//! - [`Nis2Classifier`] / [`KritisClassifier`] / [`CraClassifier`]: Statutory threshold
//!   classifiers behind the [`ThresholdClassifier`] trait.
//! - [`ScoringEngine`]: Maturity assessment and quick-check scoring for one framework.
//! - [`OverlapGraph`]: Weighted overlap edges and synergy lookup.
//! - [`Portfolio`]: Cross-framework summary, cost estimate and roadmap.

/// Threshold classifiers and relevance ranking.
pub mod classification;
/// Built-in framework content.
pub mod frameworks;
/// Overlap graph over frameworks.
pub mod overlap;
/// Cross-framework aggregation.
pub mod portfolio;
/// Framework registry.
pub mod registry;
/// Maturity and quick-check scoring.
pub mod scoring;

pub use classification::{
    ClassificationResult, CraCategory, CraClassifier, CraFacts, FrameworkRelevance,
    FrameworkRules, KritisCategory, KritisClassifier, KritisFacts, Nis2Category, Nis2Classifier,
    Nis2Facts, OrganizationProfile, RelevanceLevel, RelevanceRule, RelevanceRuleSet,
    RuleCondition, SizeClass, SizeFacts, ThresholdClassifier, CLASSIFIED_FRAMEWORKS,
};
pub use frameworks::{builtin_frameworks, register_builtin_frameworks};
pub use overlap::{builtin_overlaps, FrameworkOverlap, OverlapGraph};
pub use portfolio::{
    CostEstimate, EffortDays, FrameworkCost, FrameworkSummary, PlanningSettings, Portfolio,
    PortfolioSummary, Roadmap, RoadmapItem, RoadmapPhase, SynergySaving,
};
pub use registry::FrameworkRegistry;
pub use scoring::{score_assessment, score_quick_check, ScoringEngine};

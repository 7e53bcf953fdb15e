//! Relevance classification.
//!
//! Two shapes are supported: [`ThresholdClassifier`]s for frameworks with
//! legally defined thresholds (NIS2, KRITIS, CRA), and the multi-factor
//! [`RelevanceRuleSet`] ranking all frameworks for one organisation.

/// CRA product classification.
pub mod cra;
/// KRITIS operator classification.
pub mod kritis;
/// NIS2 entity classification.
pub mod nis2;
/// Multi-factor relevance scoring.
pub mod relevance;
/// Built-in relevance rule tables.
pub mod rules;

pub use cra::{CraCategory, CraClassifier, CraFacts};
pub use kritis::{KritisCategory, KritisClassifier, KritisFacts};
pub use nis2::{Nis2Category, Nis2Classifier, Nis2Facts};
pub use relevance::{
    FrameworkRelevance, FrameworkRules, OrganizationProfile, RelevanceLevel, RelevanceRule,
    RelevanceRuleSet, RuleCondition,
};

use serde::{Deserialize, Serialize};

/// Outcome of a threshold classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult<C> {
    pub category: C,
    /// Relevance of the category, 0–100.
    pub score: u8,
    pub reason_key: String,
    pub legal_reference: String,
}

impl<C> ClassificationResult<C> {
    pub fn new(category: C, score: u8, reason_key: &str, legal_reference: &str) -> Self {
        Self {
            category,
            score,
            reason_key: reason_key.to_string(),
            legal_reference: legal_reference.to_string(),
        }
    }

    /// Whether the framework applies at all.
    pub fn applies(&self) -> bool {
        self.score > 0
    }
}

/// Deterministic decision procedure over a fixed set of organisational facts.
pub trait ThresholdClassifier {
    type Facts;
    type Category;

    /// Id of the framework this classifier decides on.
    fn framework_id(&self) -> &'static str;

    fn classify(&self, facts: &Self::Facts) -> ClassificationResult<Self::Category>;
}

/// Frameworks backed by a [`ThresholdClassifier`].
pub const CLASSIFIED_FRAMEWORKS: &[&str] = &["nis2", "kritis", "cra"];

/// Sector identifier selecting the "my sector is not listed" escape hatch.
pub const SECTOR_NOT_LISTED: &str = "not-listed";

/// Enterprise size following the EU SME definition (Recommendation 2003/361/EC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    Small,
    Medium,
    Large,
}

/// Headcount and financial figures. Figures not provided are `None`, never 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeFacts {
    #[serde(default)]
    pub employees: Option<u32>,
    #[serde(default)]
    pub annual_revenue_eur: Option<f64>,
    #[serde(default)]
    pub balance_sheet_total_eur: Option<f64>,
}

const MEDIUM_EMPLOYEES: u32 = 50;
const MEDIUM_REVENUE_EUR: f64 = 10_000_000.0;
const MEDIUM_BALANCE_EUR: f64 = 10_000_000.0;
const LARGE_EMPLOYEES: u32 = 250;
const LARGE_REVENUE_EUR: f64 = 50_000_000.0;
const LARGE_BALANCE_EUR: f64 = 43_000_000.0;

impl SizeFacts {
    pub fn new(employees: u32) -> Self {
        Self {
            employees: Some(employees),
            ..Self::default()
        }
    }

    pub fn with_financials(mut self, revenue_eur: Option<f64>, balance_eur: Option<f64>) -> Self {
        self.annual_revenue_eur = revenue_eur;
        self.balance_sheet_total_eur = balance_eur;
        self
    }

    /// Size class: the headcount test or the financial test lifts the class.
    ///
    /// Without a headcount only the financial test decides. `None` when
    /// neither headcount nor revenue is known.
    pub fn size_class(&self) -> Option<SizeClass> {
        let headcount_met = |threshold: u32| self.employees.is_some_and(|e| e >= threshold);
        if headcount_met(LARGE_EMPLOYEES)
            || financial_threshold_met(self, LARGE_REVENUE_EUR, LARGE_BALANCE_EUR)
        {
            Some(SizeClass::Large)
        } else if headcount_met(MEDIUM_EMPLOYEES)
            || financial_threshold_met(self, MEDIUM_REVENUE_EUR, MEDIUM_BALANCE_EUR)
        {
            Some(SizeClass::Medium)
        } else if self.employees.is_none() && self.annual_revenue_eur.is_none() {
            None
        } else {
            Some(SizeClass::Small)
        }
    }
}

/// Revenue and balance sheet both above their thresholds.
///
/// A missing balance sheet total does not block the test, so revenue alone
/// decides. Without revenue the financial test cannot be met.
fn financial_threshold_met(
    facts: &SizeFacts,
    revenue_threshold: f64,
    balance_threshold: f64,
) -> bool {
    match (facts.annual_revenue_eur, facts.balance_sheet_total_eur) {
        (Some(revenue), Some(balance)) => {
            revenue > revenue_threshold && balance > balance_threshold
        }
        (Some(revenue), None) => revenue > revenue_threshold,
        (None, _) => false,
    }
}

/// Treats blank strings as absent.
pub(crate) fn selected(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

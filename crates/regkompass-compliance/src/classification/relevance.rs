use super::selected;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// Categorical organisational facts for the cross-framework ranking.
///
/// All fields are caller-chosen identifiers matched by equality; unknown or
/// missing values simply match no rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationProfile {
    #[serde(default)]
    pub industry: Option<String>,
    /// Size bucket: `micro`, `small`, `medium` or `large`.
    #[serde(default)]
    pub company_size: Option<String>,
    #[serde(default)]
    pub activities: BTreeSet<String>,
    #[serde(default)]
    pub circumstances: BTreeSet<String>,
}

impl OrganizationProfile {
    pub fn new(industry: &str, company_size: &str) -> Self {
        Self {
            industry: Some(industry.to_string()),
            company_size: Some(company_size.to_string()),
            ..Self::default()
        }
    }

    pub fn with_activity(mut self, activity: &str) -> Self {
        self.activities.insert(activity.to_string());
        self
    }

    pub fn with_circumstance(mut self, circumstance: &str) -> Self {
        self.circumstances.insert(circumstance.to_string());
        self
    }
}

/// Predicate over an [`OrganizationProfile`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "kind", content = "value")]
pub enum RuleCondition {
    /// Any industry has been selected.
    AnyIndustry,
    IndustryIn(Vec<String>),
    SizeIn(Vec<String>),
    Activity(String),
    Circumstance(String),
    AllOf(Vec<RuleCondition>),
    AnyOf(Vec<RuleCondition>),
}

impl RuleCondition {
    pub fn industry(ids: &[&str]) -> Self {
        Self::IndustryIn(ids.iter().map(|s| s.to_string()).collect())
    }

    pub fn size(ids: &[&str]) -> Self {
        Self::SizeIn(ids.iter().map(|s| s.to_string()).collect())
    }

    pub fn activity(id: &str) -> Self {
        Self::Activity(id.to_string())
    }

    pub fn circumstance(id: &str) -> Self {
        Self::Circumstance(id.to_string())
    }

    pub fn matches(&self, profile: &OrganizationProfile) -> bool {
        match self {
            RuleCondition::AnyIndustry => selected(&profile.industry).is_some(),
            RuleCondition::IndustryIn(ids) => {
                selected(&profile.industry).is_some_and(|i| ids.iter().any(|id| id == i))
            }
            RuleCondition::SizeIn(ids) => {
                selected(&profile.company_size).is_some_and(|s| ids.iter().any(|id| id == s))
            }
            RuleCondition::Activity(id) => profile.activities.contains(id),
            RuleCondition::Circumstance(id) => profile.circumstances.contains(id),
            RuleCondition::AllOf(conditions) => {
                !conditions.is_empty() && conditions.iter().all(|c| c.matches(profile))
            }
            RuleCondition::AnyOf(conditions) => conditions.iter().any(|c| c.matches(profile)),
        }
    }
}

/// "If `condition` holds, score = `score` because of `reason_key`".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelevanceRule {
    pub condition: RuleCondition,
    pub score: u8,
    pub reason_key: String,
}

impl RelevanceRule {
    /// Creates a rule; scores above 100 are clamped.
    pub fn new(condition: RuleCondition, score: u8, reason_key: &str) -> Self {
        Self {
            condition,
            score: score.min(100),
            reason_key: reason_key.to_string(),
        }
    }
}

/// Ordered rules of one framework, most specific first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkRules {
    pub framework_id: String,
    pub rules: Vec<RelevanceRule>,
}

impl FrameworkRules {
    pub fn new(framework_id: &str, rules: Vec<RelevanceRule>) -> Self {
        Self {
            framework_id: framework_id.to_string(),
            rules,
        }
    }

    /// Evaluates the rules top-down.
    ///
    /// The first matching rule sets the score; a later match replaces it only
    /// with a strictly higher score. Returns `(0, reason)` if nothing matches.
    pub fn evaluate(&self, profile: &OrganizationProfile) -> (u8, &str) {
        let mut best: Option<&RelevanceRule> = None;
        for rule in &self.rules {
            if !rule.condition.matches(profile) {
                continue;
            }
            if best.map_or(true, |b| rule.score > b.score) {
                best = Some(rule);
            }
        }
        match best {
            Some(rule) => (rule.score, rule.reason_key.as_str()),
            None => (0, NO_MATCH_REASON),
        }
    }
}

/// Reason reported when no rule of a framework matches.
pub const NO_MATCH_REASON: &str = "relevance.reason.no-match";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelevanceLevel {
    None,
    Low,
    Medium,
    High,
}

impl RelevanceLevel {
    /// `≥ 80 ⇒ high`, `≥ 40 ⇒ medium`, `≥ 10 ⇒ low`, otherwise none.
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => RelevanceLevel::High,
            40..=79 => RelevanceLevel::Medium,
            10..=39 => RelevanceLevel::Low,
            _ => RelevanceLevel::None,
        }
    }
}

/// Relevance of one framework for one organisation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkRelevance {
    pub framework_id: String,
    pub relevance: RelevanceLevel,
    pub score: u8,
    pub reason_key: String,
}

/// Rule tables for every framework, in enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelevanceRuleSet {
    frameworks: Vec<FrameworkRules>,
}

impl RelevanceRuleSet {
    pub fn new(frameworks: Vec<FrameworkRules>) -> Self {
        Self { frameworks }
    }

    /// The built-in tables for all fifteen frameworks.
    pub fn builtin() -> Self {
        Self::new(super::rules::builtin_rules())
    }

    pub fn frameworks(&self) -> &[FrameworkRules] {
        &self.frameworks
    }

    pub fn rules_for(&self, framework_id: &str) -> Option<&FrameworkRules> {
        self.frameworks
            .iter()
            .find(|f| f.framework_id == framework_id)
    }

    /// Ranks every framework by relevance, highest score first.
    ///
    /// Ties keep enumeration order.
    pub fn assess(&self, profile: &OrganizationProfile) -> Vec<FrameworkRelevance> {
        let mut ranked: Vec<FrameworkRelevance> = self
            .frameworks
            .iter()
            .map(|framework| {
                let (score, reason) = framework.evaluate(profile);
                FrameworkRelevance {
                    framework_id: framework.framework_id.clone(),
                    relevance: RelevanceLevel::from_score(score),
                    score,
                    reason_key: reason.to_string(),
                }
            })
            .collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        debug!(
            top = ?ranked.first().map(|r| r.framework_id.as_str()),
            "Ranked framework relevance"
        );
        ranked
    }
}

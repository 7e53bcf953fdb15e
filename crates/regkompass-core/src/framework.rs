use crate::error::{RegkompassError, RegkompassResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Whether a question belongs to the core or the advanced assessment tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionTier {
    #[default]
    Core,
    Advanced,
}

/// Which questions a full assessment covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentTier {
    /// Only `core` questions (for frameworks with tiered assessment).
    #[default]
    Core,
    /// Core and advanced questions.
    Full,
}

/// How the overall percentage is folded from individual results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverallFormula {
    /// Mean over every answer, regardless of category.
    FlatAnswerMean,
    /// Mean over per-category percentages of categories with at least one answer.
    CategoryMean,
}

/// Overall formulas used by one framework for each assessment kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringProfile {
    pub assessment: OverallFormula,
    pub quick_check: OverallFormula,
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self {
            assessment: OverallFormula::FlatAnswerMean,
            quick_check: OverallFormula::CategoryMean,
        }
    }
}

/// Optional capabilities a framework module opts into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlags {
    pub has_classification: bool,
    pub has_quick_check: bool,
    pub has_tiered_assessment: bool,
    pub has_cost_estimation: bool,
    pub has_roadmap: bool,
}

impl FeatureFlags {
    /// Every feature enabled.
    pub fn all() -> Self {
        Self {
            has_classification: true,
            has_quick_check: true,
            has_tiered_assessment: true,
            has_cost_estimation: true,
            has_roadmap: true,
        }
    }
}

/// Legal and/or standard reference of a question or recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard: Option<String>,
}

impl Reference {
    pub fn legal(legal: impl Into<String>) -> Self {
        Self {
            legal: Some(legal.into()),
            standard: None,
        }
    }

    pub fn standard(standard: impl Into<String>) -> Self {
        Self {
            legal: None,
            standard: Some(standard.into()),
        }
    }

    pub fn both(legal: impl Into<String>, standard: impl Into<String>) -> Self {
        Self {
            legal: Some(legal.into()),
            standard: Some(standard.into()),
        }
    }
}

/// A named grouping of questions within one framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name_key: String,
    /// Ids of all questions in this category, independent of tier.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub question_ids: Vec<String>,
}

/// The atomic assessable unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub category_id: String,
    #[serde(default)]
    pub tier: QuestionTier,
    pub title_key: String,
    #[serde(default)]
    pub reference: Reference,
    /// Maturity level descriptions, ordered from level 0 to level 3.
    pub levels: [String; 4],
}

/// A yes/partial/no counterpart of one or more questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickCheckQuestion {
    pub id: String,
    pub category_id: String,
    pub question_key: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffortLevel {
    Quick,
    Medium,
    Strategic,
}

/// Immutable improvement advice attached to a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    pub category_id: String,
    pub priority: Priority,
    pub effort_level: EffortLevel,
    pub title_key: String,
    #[serde(default)]
    pub reference: Reference,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub checklist: Vec<String>,
    /// Cross-framework measure this recommendation implements, matched
    /// against the shared measure keys of overlap edges.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measure_key: Option<String>,
}

/// Complete content of one regulatory framework.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkConfig {
    pub id: String,
    pub name_key: String,
    pub categories: Vec<Category>,
    pub questions: Vec<Question>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub quick_check_questions: Vec<QuickCheckQuestion>,
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub scoring: ScoringProfile,
}

impl FrameworkConfig {
    pub fn category(&self, category_id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    pub fn question(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }

    /// Questions scored in the given tier.
    ///
    /// Frameworks without tiered assessment always score every question.
    pub fn questions_for_tier(&self, tier: AssessmentTier) -> impl Iterator<Item = &Question> {
        let core_only = self.features.has_tiered_assessment && tier == AssessmentTier::Core;
        self.questions
            .iter()
            .filter(move |q| !core_only || q.tier == QuestionTier::Core)
    }

    /// `(category id, question count)` for every category, in category order.
    pub fn category_totals(&self, tier: AssessmentTier) -> Vec<(String, usize)> {
        self.categories
            .iter()
            .map(|c| {
                let total = self
                    .questions_for_tier(tier)
                    .filter(|q| q.category_id == c.id)
                    .count();
                (c.id.clone(), total)
            })
            .collect()
    }

    pub fn recommendations_for(&self, category_id: &str) -> impl Iterator<Item = &Recommendation> {
        let category_id = category_id.to_string();
        self.recommendations
            .iter()
            .filter(move |r| r.category_id == category_id)
    }

    /// Checks the content invariants every registered config must satisfy.
    pub fn validate(&self) -> RegkompassResult<()> {
        let fail = |reason: String| Err(RegkompassError::invalid_framework(&self.id, reason));

        if self.id.trim().is_empty() {
            return fail("framework id must not be empty".to_string());
        }

        let mut category_ids = HashSet::new();
        for category in &self.categories {
            if !category_ids.insert(category.id.as_str()) {
                return fail(format!("duplicate category id '{}'", category.id));
            }
        }

        let check_ref = |kind: &str, id: &str, category_id: &str| -> RegkompassResult<()> {
            if category_ids.contains(category_id) {
                Ok(())
            } else {
                Err(RegkompassError::invalid_framework(
                    &self.id,
                    format!("{kind} '{id}' references unknown category '{category_id}'"),
                ))
            }
        };

        let mut question_ids = HashSet::new();
        for question in &self.questions {
            if !question_ids.insert(question.id.as_str()) {
                return fail(format!("duplicate question id '{}'", question.id));
            }
            check_ref("question", &question.id, &question.category_id)?;
        }

        let mut recommendation_ids = HashSet::new();
        for rec in &self.recommendations {
            if !recommendation_ids.insert(rec.id.as_str()) {
                return fail(format!("duplicate recommendation id '{}'", rec.id));
            }
            check_ref("recommendation", &rec.id, &rec.category_id)?;
        }

        let mut quick_check_ids = HashSet::new();
        for qc in &self.quick_check_questions {
            if !quick_check_ids.insert(qc.id.as_str()) {
                return fail(format!("duplicate quick-check id '{}'", qc.id));
            }
            check_ref("quick-check question", &qc.id, &qc.category_id)?;
        }

        for category in &self.categories {
            for question_id in &category.question_ids {
                match self.question(question_id) {
                    Some(q) if q.category_id == category.id => {}
                    _ => {
                        return fail(format!(
                            "category '{}' lists question '{question_id}' it does not own",
                            category.id
                        ))
                    }
                }
            }
        }

        if self.features.has_quick_check == self.quick_check_questions.is_empty() {
            return fail(format!(
                "hasQuickCheck is {} but {} quick-check questions are defined",
                self.features.has_quick_check,
                self.quick_check_questions.len()
            ));
        }

        let has_advanced = self
            .questions
            .iter()
            .any(|q| q.tier == QuestionTier::Advanced);
        if self.features.has_tiered_assessment != has_advanced {
            return fail(format!(
                "hasTieredAssessment is {} but advanced questions present: {has_advanced}",
                self.features.has_tiered_assessment
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::builder::FrameworkBuilder;

    fn sample() -> FrameworkConfig {
        FrameworkBuilder::new("sample")
            .features(FeatureFlags {
                has_quick_check: true,
                has_tiered_assessment: true,
                ..FeatureFlags::default()
            })
            .category("gov")
            .category("ops")
            .core("gov-1", "gov", Reference::legal("Art. 1"))
            .core("ops-1", "ops", Reference::legal("Art. 2"))
            .advanced("ops-2", "ops", Reference::standard("X 1.2"))
            .quick_check("qc-gov", "gov")
            .build()
    }

    #[test]
    fn test_sample_is_valid() {
        sample().validate().unwrap();
    }

    #[test]
    fn test_tier_filtering() {
        let config = sample();
        assert_eq!(config.questions_for_tier(AssessmentTier::Core).count(), 2);
        assert_eq!(config.questions_for_tier(AssessmentTier::Full).count(), 3);
        assert_eq!(
            config.category_totals(AssessmentTier::Full),
            vec![("gov".to_string(), 1), ("ops".to_string(), 2)]
        );
    }

    #[test]
    fn test_untiered_framework_scores_everything() {
        let mut config = sample();
        config.features.has_tiered_assessment = false;
        assert_eq!(config.questions_for_tier(AssessmentTier::Core).count(), 3);
    }

    #[test]
    fn test_unknown_category_reference_rejected() {
        let mut config = sample();
        config.questions[0].category_id = "missing".to_string();
        config.categories[0].question_ids.clear();
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("unknown category 'missing'"), "{err}");
    }

    #[test]
    fn test_duplicate_question_rejected() {
        let mut config = sample();
        config.questions[1].id = "gov-1".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_quick_check_flag_must_match_content() {
        let mut config = sample();
        config.features.has_quick_check = false;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_tiered_flag_must_match_content() {
        let mut config = sample();
        config.features.has_tiered_assessment = false;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_id_rejected() {
        let mut config = sample();
        config.id = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_question_requires_four_levels() {
        let json = r#"{"id":"q","categoryId":"gov","titleKey":"t","levels":["a","b","c"]}"#;
        assert!(serde_json::from_str::<Question>(json).is_err());
    }
}

//! Terse authoring of [`FrameworkConfig`]s.
//!
//! Display text is referenced through translation keys derived from the
//! framework, category, question and recommendation ids.

use crate::framework::{
    Category, EffortLevel, FeatureFlags, FrameworkConfig, Priority, Question, QuestionTier,
    QuickCheckQuestion, Recommendation, Reference, ScoringProfile,
};

/// Incrementally assembles a [`FrameworkConfig`].
pub struct FrameworkBuilder {
    config: FrameworkConfig,
}

impl FrameworkBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            config: FrameworkConfig {
                name_key: format!("{id}.name"),
                id,
                categories: Vec::new(),
                questions: Vec::new(),
                recommendations: Vec::new(),
                quick_check_questions: Vec::new(),
                features: FeatureFlags::default(),
                scoring: ScoringProfile::default(),
            },
        }
    }

    pub fn features(mut self, features: FeatureFlags) -> Self {
        self.config.features = features;
        self
    }

    pub fn scoring(mut self, scoring: ScoringProfile) -> Self {
        self.config.scoring = scoring;
        self
    }

    pub fn category(mut self, id: &str) -> Self {
        self.config.categories.push(Category {
            id: id.to_string(),
            name_key: format!("{}.categories.{id}", self.config.id),
            question_ids: Vec::new(),
        });
        self
    }

    /// Adds a question in the core tier.
    pub fn core(self, id: &str, category_id: &str, reference: Reference) -> Self {
        self.question(id, category_id, QuestionTier::Core, reference)
    }

    /// Adds a question in the advanced tier.
    pub fn advanced(self, id: &str, category_id: &str, reference: Reference) -> Self {
        self.question(id, category_id, QuestionTier::Advanced, reference)
    }

    pub fn question(
        mut self,
        id: &str,
        category_id: &str,
        tier: QuestionTier,
        reference: Reference,
    ) -> Self {
        let base = format!("{}.questions.{id}", self.config.id);
        self.config.questions.push(Question {
            id: id.to_string(),
            category_id: category_id.to_string(),
            tier,
            title_key: format!("{base}.title"),
            reference,
            levels: [0, 1, 2, 3].map(|level| format!("{base}.level{level}")),
        });
        self
    }

    pub fn recommendation(
        mut self,
        id: &str,
        category_id: &str,
        priority: Priority,
        effort_level: EffortLevel,
        reference: Reference,
    ) -> Self {
        self.config.recommendations.push(Recommendation {
            id: id.to_string(),
            category_id: category_id.to_string(),
            priority,
            effort_level,
            title_key: format!("{}.recommendations.{id}.title", self.config.id),
            reference,
            checklist: Vec::new(),
            measure_key: None,
        });
        self
    }

    /// Tags the most recently added recommendation with a cross-framework measure.
    pub fn measure(mut self, measure_key: &str) -> Self {
        if let Some(rec) = self.config.recommendations.last_mut() {
            rec.measure_key = Some(measure_key.to_string());
        }
        self
    }

    /// Gives the most recently added recommendation `items` checklist entries.
    pub fn checklist(mut self, items: usize) -> Self {
        let framework = self.config.id.clone();
        if let Some(rec) = self.config.recommendations.last_mut() {
            let id = rec.id.clone();
            rec.checklist = (1..=items)
                .map(|i| format!("{framework}.recommendations.{id}.checklist{i}"))
                .collect();
        }
        self
    }

    pub fn quick_check(mut self, id: &str, category_id: &str) -> Self {
        self.config.quick_check_questions.push(QuickCheckQuestion {
            id: id.to_string(),
            category_id: category_id.to_string(),
            question_key: format!("{}.quickCheck.{id}", self.config.id),
        });
        self
    }

    /// Finishes the config, filling each category's question list.
    pub fn build(mut self) -> FrameworkConfig {
        for category in &mut self.config.categories {
            category.question_ids = self
                .config
                .questions
                .iter()
                .filter(|q| q.category_id == category.id)
                .map(|q| q.id.clone())
                .collect();
        }
        self.config
    }
}

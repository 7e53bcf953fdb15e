//! Command implementations. Each returns the JSON document printed on stdout.

use regkompass_compliance::{
    CraClassifier, FrameworkRegistry, KritisClassifier, Nis2Classifier, OrganizationProfile,
    OverlapGraph, PlanningSettings, Portfolio, RelevanceRuleSet, ScoringEngine,
    ThresholdClassifier,
};
use regkompass_core::{Answer, AssessmentTier, FrameworkConfig, QuickCheckAnswer};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Statutory classifier selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ClassifierKind {
    Nis2,
    Kritis,
    Cra,
}

/// Assessment tier selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TierArg {
    Core,
    Full,
}

impl From<TierArg> for AssessmentTier {
    fn from(tier: TierArg) -> Self {
        match tier {
            TierArg::Core => AssessmentTier::Core,
            TierArg::Full => AssessmentTier::Full,
        }
    }
}

/// Reads and parses a JSON input file.
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read '{}': {e}", path.display()))?;
    serde_json::from_str(&raw)
        .map_err(|e| anyhow::anyhow!("Failed to parse '{}': {e}", path.display()))
}

fn run_classifier<C>(classifier: C, facts: Value) -> anyhow::Result<Value>
where
    C: ThresholdClassifier,
    C::Facts: DeserializeOwned,
    C::Category: Serialize,
{
    let facts: C::Facts = serde_json::from_value(facts)?;
    let result = classifier.classify(&facts);
    Ok(json!({
        "framework": classifier.framework_id(),
        "result": serde_json::to_value(result)?,
    }))
}

/// Built-in registry, overlap graph and relevance rules.
pub struct Engine {
    registry: FrameworkRegistry,
    overlaps: OverlapGraph,
    rules: RelevanceRuleSet,
}

impl Engine {
    pub fn builtin() -> anyhow::Result<Self> {
        let registry = FrameworkRegistry::with_builtin_frameworks()?;
        let overlaps = OverlapGraph::builtin()?;
        overlaps.validate_against(&registry)?;
        Ok(Self {
            registry,
            overlaps,
            rules: RelevanceRuleSet::builtin(),
        })
    }

    fn framework(&self, id: &str) -> anyhow::Result<Arc<FrameworkConfig>> {
        self.registry
            .get(id)
            .ok_or_else(|| anyhow::anyhow!("Unknown framework '{id}'"))
    }

    pub fn list_frameworks(&self) -> Value {
        let frameworks: Vec<Value> = self
            .registry
            .all()
            .iter()
            .map(|config| {
                json!({
                    "id": config.id,
                    "nameKey": config.name_key,
                    "categories": config.categories.len(),
                    "questions": config.questions.len(),
                    "quickCheckQuestions": config.quick_check_questions.len(),
                    "features": config.features,
                })
            })
            .collect();
        Value::Array(frameworks)
    }

    pub fn show_framework(&self, id: &str) -> anyhow::Result<Value> {
        let config = self.framework(id)?;
        Ok(serde_json::to_value(config.as_ref())?)
    }

    pub fn relevance(&self, profile: &OrganizationProfile) -> anyhow::Result<Value> {
        Ok(serde_json::to_value(self.rules.assess(profile))?)
    }

    pub fn classify(&self, kind: ClassifierKind, facts: Value) -> anyhow::Result<Value> {
        match kind {
            ClassifierKind::Nis2 => run_classifier(Nis2Classifier, facts),
            ClassifierKind::Kritis => run_classifier(KritisClassifier, facts),
            ClassifierKind::Cra => run_classifier(CraClassifier, facts),
        }
    }

    /// Scores `answers`, either as quick-check answers or as maturity answers.
    pub fn score(
        &self,
        id: &str,
        answers: Value,
        quick_check: bool,
        tier: TierArg,
    ) -> anyhow::Result<Value> {
        let config = self.framework(id)?;
        let engine = ScoringEngine::new(&config);
        let score = if quick_check {
            if !config.features.has_quick_check {
                anyhow::bail!("Framework '{id}' has no quick check");
            }
            let answers: Vec<QuickCheckAnswer> = serde_json::from_value(answers)?;
            engine.quick_check(&answers)
        } else {
            let answers: Vec<Answer> = serde_json::from_value(answers)?;
            engine.assess(&answers, tier.into())
        };
        Ok(serde_json::to_value(score)?)
    }

    pub fn overlaps(&self, id: &str) -> anyhow::Result<Value> {
        if !self.registry.contains(id) {
            warn!(framework = %id, "Overlaps requested for unregistered framework");
        }
        Ok(serde_json::to_value(self.overlaps.overlaps_for(id))?)
    }

    pub fn synergies(&self, ids: &[String]) -> anyhow::Result<Value> {
        Ok(serde_json::to_value(self.overlaps.find_synergies(ids))?)
    }

    /// Scores `<answers_dir>/<id>.json` for every id and plans across them.
    pub async fn plan(
        &self,
        answers_dir: &Path,
        ids: &[String],
        settings: &PlanningSettings,
    ) -> anyhow::Result<Value> {
        let mut portfolio = Portfolio::new(&self.registry, &self.overlaps);
        for id in ids {
            let config = self.framework(id)?;
            let answers: Vec<Answer> = read_json(&answers_dir.join(format!("{id}.json"))).await?;
            let score = ScoringEngine::new(&config).assess(&answers, AssessmentTier::Full);
            portfolio.engage(id, score);
        }
        info!(frameworks = ids.len(), "Planning portfolio");

        Ok(json!({
            "summary": serde_json::to_value(portfolio.summary())?,
            "costEstimate": serde_json::to_value(portfolio.estimate_cost(settings))?,
            "roadmap": serde_json::to_value(portfolio.roadmap(settings))?,
        }))
    }
}

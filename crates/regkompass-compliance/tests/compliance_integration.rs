#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Integration tests for the regkompass-compliance crate.
//!
//! Covers the built-in registry, the overlap graph, threshold classifiers,
//! relevance ranking, scoring through the engine and portfolio planning.

use regkompass_compliance::classification::cra::product_class;
use regkompass_compliance::*;
use regkompass_core::{
    Answer, AssessmentTier, MaturityLevel, OverallScore, QuestionTier, QuickCheckAnswer,
    QuickCheckValue, TrafficLight,
};

fn builtin() -> FrameworkRegistry {
    FrameworkRegistry::with_builtin_frameworks().unwrap()
}

fn answer(question_id: &str, category_id: &str, level: u8) -> Answer {
    Answer::new(question_id, category_id, MaturityLevel::new(level).unwrap())
}

/// Every core question of `framework_id` answered at `level`.
fn uniform_core_score(
    registry: &FrameworkRegistry,
    framework_id: &str,
    level: u8,
) -> OverallScore {
    let config = registry.get(framework_id).unwrap();
    let answers: Vec<Answer> = config
        .questions
        .iter()
        .filter(|q| q.tier == QuestionTier::Core)
        .map(|q| answer(&q.id, &q.category_id, level))
        .collect();
    ScoringEngine::new(&config).assess(&answers, AssessmentTier::Core)
}

// ---------------------------------------------------------------------------
// 1. Registry
// ---------------------------------------------------------------------------

#[test]
fn test_builtin_registry_has_fifteen_frameworks_in_order() {
    let registry = builtin();
    assert_eq!(registry.len(), 15);
    let ids: Vec<&str> = registry.ids().collect();
    assert_eq!(ids[0], "nis2");
    assert_eq!(ids[14], "owasp-asvs");
    for config in registry.all() {
        config.validate().unwrap();
    }
}

#[test]
fn test_reregistering_builtin_replaces_in_place() {
    let mut registry = builtin();
    let nis2 = registry.get("nis2").unwrap();
    let replaced = registry.register((*nis2).clone()).unwrap();
    assert!(replaced.is_some());
    assert_eq!(registry.len(), 15);
    assert_eq!(registry.ids().next(), Some("nis2"));
}

#[test]
fn test_unknown_framework_is_absent() {
    let registry = builtin();
    assert!(registry.get("hipaa").is_none());
    assert!(!registry.contains("hipaa"));
}

// ---------------------------------------------------------------------------
// 2. Overlap graph
// ---------------------------------------------------------------------------

#[test]
fn test_builtin_overlaps_resolve_against_registry() {
    let graph = OverlapGraph::builtin().unwrap();
    graph.validate_against(&builtin()).unwrap();
}

#[test]
fn test_nis2_overlaps_include_dora() {
    let graph = OverlapGraph::builtin().unwrap();
    let overlaps = graph.overlaps_for("nis2");

    let dora = overlaps.iter().find(|o| o.framework_id == "dora").unwrap();
    assert_eq!(dora.overlap_percent, 40);
    assert!(dora.shared_measure_keys.contains(&"incident-reporting".to_string()));

    assert_eq!(overlaps[0].framework_id, "kritis");
    assert!(overlaps
        .windows(2)
        .all(|w| w[0].overlap_percent >= w[1].overlap_percent));
}

#[test]
fn test_single_framework_has_no_synergies() {
    let graph = OverlapGraph::builtin().unwrap();
    assert!(graph.find_synergies(&["nis2"]).is_empty());
    assert_eq!(graph.find_synergies(&["nis2", "dora", "kritis"]).len(), 2);
}

// ---------------------------------------------------------------------------
// 3. Threshold classifiers
// ---------------------------------------------------------------------------

fn classify_any<C: ThresholdClassifier>(
    classifier: &C,
    facts: &C::Facts,
) -> (&'static str, ClassificationResult<C::Category>) {
    (classifier.framework_id(), classifier.classify(facts))
}

#[test]
fn test_nis2_kritis_override_wins_over_sector() {
    let facts = Nis2Facts {
        sector: Some("not-listed".to_string()),
        kritis_operator: true,
        ..Nis2Facts::default()
    };
    let (framework, result) = classify_any(&Nis2Classifier, &facts);
    assert_eq!(framework, "nis2");
    assert_eq!(result.category, Nis2Category::EssentialEntity);
    assert_eq!(result.score, 100);
}

#[test]
fn test_nis2_size_thresholds_in_annex_one_sector() {
    let facts = |size: SizeFacts| Nis2Facts {
        sector: Some("energy".to_string()),
        size,
        ..Nis2Facts::default()
    };

    let large = Nis2Classifier.classify(&facts(SizeFacts::new(300)));
    assert_eq!(large.category, Nis2Category::EssentialEntity);

    let medium = Nis2Classifier.classify(&facts(SizeFacts::new(60)));
    assert_eq!(medium.category, Nis2Category::ImportantEntity);

    // Revenue above the large threshold without a balance sheet total lifts the class.
    let by_revenue =
        Nis2Classifier.classify(&facts(SizeFacts::new(20).with_financials(Some(60e6), None)));
    assert_eq!(by_revenue.category, Nis2Category::EssentialEntity);

    // A balance sheet total alone never meets the financial test.
    let by_balance =
        Nis2Classifier.classify(&facts(SizeFacts::new(20).with_financials(None, Some(60e6))));
    assert_eq!(by_balance.category, Nis2Category::IndirectlyAffected);

    // No headcount and no revenue is its own outcome, not a zero-employee company.
    let unknown = Nis2Classifier.classify(&facts(SizeFacts::default()));
    assert_eq!(unknown.category, Nis2Category::SizeAssessmentRequired);
    assert_eq!(unknown.score, 50);
}

#[test]
fn test_kritis_population_threshold() {
    let facts = |population: Option<u64>| KritisFacts {
        sector: Some("energy".to_string()),
        designated_operator: false,
        served_population: population,
    };

    assert_eq!(
        KritisClassifier.classify(&facts(Some(600_000))).category,
        KritisCategory::CriticalFacilityOperator
    );
    assert_eq!(
        KritisClassifier.classify(&facts(Some(10_000))).category,
        KritisCategory::BelowThreshold
    );
    assert_eq!(
        KritisClassifier.classify(&facts(None)).category,
        KritisCategory::ThresholdAssessmentRequired
    );
}

#[test]
fn test_cra_product_class() {
    let facts = CraFacts {
        product_class: Some(product_class::IMPORTANT_CLASS_I.to_string()),
        annex_iv_critical: false,
    };
    let (framework, result) = classify_any(&CraClassifier, &facts);
    assert_eq!(framework, "cra");
    assert_eq!(result.category, CraCategory::ImportantClassI);
    assert!(result.applies());
    assert!(!result.legal_reference.is_empty());
}

// ---------------------------------------------------------------------------
// 4. Relevance ranking
// ---------------------------------------------------------------------------

#[test]
fn test_relevance_for_kritis_energy_operator() {
    let profile = OrganizationProfile::new("energy", "large").with_circumstance("kritis-operator");
    let ranked = RelevanceRuleSet::builtin().assess(&profile);

    assert_eq!(ranked.len(), 15);
    // Ties keep enumeration order: nis2 before kritis.
    assert_eq!(ranked[0].framework_id, "nis2");
    assert_eq!(ranked[0].reason_key, "relevance.nis2.kritis-operator");
    assert_eq!(ranked[1].framework_id, "kritis");
    assert_eq!(ranked[1].relevance, RelevanceLevel::High);
    assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn test_relevance_for_supervised_financial_entity() {
    let profile =
        OrganizationProfile::new("finance", "medium").with_circumstance("regulated-by-bafin");
    let ranked = RelevanceRuleSet::builtin().assess(&profile);

    assert_eq!(ranked[0].framework_id, "dora");
    assert_eq!(ranked[0].score, 100);
    assert_eq!(ranked[1].framework_id, "nis2");
    assert_eq!(ranked[1].score, 85);

    let kritis = ranked.iter().find(|r| r.framework_id == "kritis").unwrap();
    assert_eq!(kritis.score, 30);
    assert_eq!(kritis.relevance, RelevanceLevel::Low);
}

#[test]
fn test_relevance_for_empty_profile() {
    let ranked = RelevanceRuleSet::builtin().assess(&OrganizationProfile::default());
    assert!(ranked.iter().all(|r| r.relevance == RelevanceLevel::None));
}

// ---------------------------------------------------------------------------
// 5. Scoring against built-in content
// ---------------------------------------------------------------------------

#[test]
fn test_nis2_quick_check_uses_category_mean() {
    let registry = builtin();
    let nis2 = registry.get("nis2").unwrap();
    let answers = [
        QuickCheckAnswer::new("qc-governance", "governance", QuickCheckValue::Yes),
        QuickCheckAnswer::new("qc-risk", "risk-management", QuickCheckValue::Partial),
        QuickCheckAnswer::new("qc-backup", "risk-management", QuickCheckValue::Partial),
        QuickCheckAnswer::new("qc-reporting", "incident-handling", QuickCheckValue::Yes),
        QuickCheckAnswer::new("qc-suppliers", "supply-chain", QuickCheckValue::No),
    ];

    let score = ScoringEngine::new(&nis2).quick_check(&answers);
    assert_eq!(score.percentage, 62.5);
    assert_eq!(score.traffic_light, TrafficLight::Yellow);
    assert_eq!(score.category("risk-management").unwrap().percentage, 50.0);
    assert_eq!(score.category("supply-chain").unwrap().traffic_light, TrafficLight::Red);
    assert_eq!(score.completion_rate, 100.0);
}

#[test]
fn test_nis2_assessment_tiers() {
    let registry = builtin();
    let nis2 = registry.get("nis2").unwrap();
    let mut answers: Vec<Answer> = nis2
        .questions
        .iter()
        .filter(|q| q.tier == QuestionTier::Core && q.id != "sc-suppliers")
        .map(|q| answer(&q.id, &q.category_id, 3))
        .collect();
    answers.push(answer("sc-suppliers", "supply-chain", 0));
    answers.push(answer("risk-crypto", "risk-management", 0));

    let engine = ScoringEngine::new(&nis2);

    let core = engine.assess(&answers, AssessmentTier::Core);
    assert_eq!(core.answered_questions, 7);
    assert_eq!(core.total_questions, 7);
    assert_eq!(core.percentage, 85.7);
    assert_eq!(core.traffic_light, TrafficLight::Green);
    assert_eq!(core.completion_rate, 100.0);

    let full = engine.assess(&answers, AssessmentTier::Full);
    assert_eq!(full.answered_questions, 8);
    assert_eq!(full.total_questions, 10);
    assert_eq!(full.percentage, 75.0);
    assert_eq!(full.completion_rate, 80.0);
}

#[test]
fn test_every_builtin_framework_scores_within_bounds() {
    let registry = builtin();
    for config in registry.all() {
        for level in [0, 3] {
            let score = uniform_core_score(&registry, &config.id, level);
            assert!((0.0..=100.0).contains(&score.percentage), "{}", config.id);
            assert_eq!(score.percentage, f64::from(level) / 3.0 * 100.0, "{}", config.id);
        }
    }
}

// ---------------------------------------------------------------------------
// 6. Portfolio planning
// ---------------------------------------------------------------------------

#[test]
fn test_portfolio_plan_for_nis2_and_kritis() {
    let registry = builtin();
    let graph = OverlapGraph::builtin().unwrap();
    let settings = PlanningSettings::default();

    let mut portfolio = Portfolio::new(&registry, &graph);
    assert!(portfolio.engage("nis2", uniform_core_score(&registry, "nis2", 0)));
    assert!(portfolio.engage("kritis", uniform_core_score(&registry, "kritis", 0)));

    let summary = portfolio.summary();
    assert_eq!(summary.frameworks.len(), 2);
    assert_eq!(summary.traffic_light, TrafficLight::Red);
    assert_eq!(summary.synergies.len(), 1);

    let cost = portfolio.estimate_cost(&settings);
    // nis2: 2 + 30 + 10 + 10 + 30 days, kritis: 30 + 10 + 10 + 2 days at 1200 EUR.
    assert_eq!(cost.frameworks[0].cost_eur, 98_400.0);
    assert_eq!(cost.frameworks[1].cost_eur, 62_400.0);
    assert_eq!(cost.gross_cost_eur, 160_800.0);
    // 80% overlap of the smaller cost, half of it realised.
    assert_eq!(cost.synergy_savings_eur, 24_960.0);
    assert_eq!(cost.combined_cost_eur, 135_840.0);

    let roadmap = portfolio.roadmap(&settings);
    assert_eq!(roadmap.item_count(), 9);
    let quick: Vec<(&str, &str)> = roadmap.phases[0]
        .items
        .iter()
        .map(|i| (i.framework_id.as_str(), i.recommendation_id.as_str()))
        .collect();
    assert_eq!(quick, vec![("nis2", "appoint-board-owner"), ("kritis", "adopt-b3s")]);
    assert!(roadmap.phases[0].items[0].also_advances.is_empty());
    assert_eq!(roadmap.phases[0].items[1].also_advances, vec!["nis2".to_string()]);
}

#[test]
fn test_green_frameworks_have_nothing_left_to_plan() {
    let registry = builtin();
    let graph = OverlapGraph::builtin().unwrap();
    let settings = PlanningSettings::default();

    let mut portfolio = Portfolio::new(&registry, &graph);
    portfolio.engage("iso27001", uniform_core_score(&registry, "iso27001", 3));

    let cost = portfolio.estimate_cost(&settings);
    assert_eq!(cost.gross_cost_eur, 0.0);
    assert_eq!(cost.combined_cost_eur, 0.0);
    assert_eq!(portfolio.roadmap(&settings).item_count(), 0);
}

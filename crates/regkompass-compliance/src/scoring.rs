use regkompass_core::{
    round_one_decimal, Answer, AssessmentTier, CategoryScore, FrameworkConfig, OverallFormula,
    OverallScore, QuestionTier, QuickCheckAnswer, TrafficLight,
};
use std::collections::HashSet;
use tracing::debug;

/// Scores a full 0–3 maturity assessment.
///
/// `category_totals` lists `(category id, question count)` in display order.
/// Every listed category appears in the result, answered or not.
pub fn score_assessment(
    category_totals: &[(String, usize)],
    answers: &[Answer],
    formula: OverallFormula,
) -> OverallScore {
    let points: Vec<(&str, f64)> = answers
        .iter()
        .map(|a| (a.category_id.as_str(), a.level.percentage()))
        .collect();
    fold(category_totals, &points, formula, true)
}

/// Scores a yes/partial/no quick check.
///
/// `category_totals` lists `(category id, quick-check question count)`.
/// Categories without quick-check questions and without answers are left out.
pub fn score_quick_check(
    category_totals: &[(String, usize)],
    answers: &[QuickCheckAnswer],
    formula: OverallFormula,
) -> OverallScore {
    let points: Vec<(&str, f64)> = answers
        .iter()
        .map(|a| (a.category_id.as_str(), a.value.points()))
        .collect();
    fold(category_totals, &points, formula, false)
}

fn fold(
    category_totals: &[(String, usize)],
    points: &[(&str, f64)],
    formula: OverallFormula,
    keep_unanswered: bool,
) -> OverallScore {
    let mut category_scores = Vec::with_capacity(category_totals.len());
    let mut answered_category_means = Vec::new();

    for (category_id, total) in category_totals {
        let values: Vec<f64> = points
            .iter()
            .filter(|(c, _)| *c == category_id.as_str())
            .map(|(_, p)| *p)
            .collect();

        if values.is_empty() && *total == 0 && !keep_unanswered {
            continue;
        }

        let category_mean = mean(&values);
        if !values.is_empty() {
            answered_category_means.push(category_mean);
        }
        let percentage = round_one_decimal(category_mean);
        category_scores.push(CategoryScore {
            category_id: category_id.clone(),
            percentage,
            traffic_light: TrafficLight::from_percentage(percentage),
            answered_questions: values.len(),
            total_questions: *total,
        });
    }

    let known: HashSet<&str> = category_totals.iter().map(|(c, _)| c.as_str()).collect();
    let orphaned = points.iter().filter(|(c, _)| !known.contains(c)).count();
    if orphaned > 0 {
        debug!(orphaned, "Answers reference categories outside the framework");
    }

    let overall = match formula {
        OverallFormula::FlatAnswerMean => {
            let all: Vec<f64> = points.iter().map(|(_, p)| *p).collect();
            mean(&all)
        }
        OverallFormula::CategoryMean => mean(&answered_category_means),
    };
    let percentage = round_one_decimal(overall);

    let answered_questions = points.len();
    let total_questions: usize = category_totals.iter().map(|(_, t)| t).sum();
    let completion_rate = if total_questions == 0 {
        0.0
    } else {
        let answered = answered_questions.min(total_questions) as f64;
        round_one_decimal(answered / total_questions as f64 * 100.0)
    };

    OverallScore {
        percentage,
        traffic_light: TrafficLight::from_percentage(percentage),
        category_scores,
        answered_questions,
        total_questions,
        completion_rate,
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Framework-aware front end to the scoring functions.
///
/// Applies the framework's tier filter and its [`ScoringProfile`](regkompass_core::ScoringProfile).
pub struct ScoringEngine<'a> {
    config: &'a FrameworkConfig,
}

impl<'a> ScoringEngine<'a> {
    pub fn new(config: &'a FrameworkConfig) -> Self {
        Self { config }
    }

    /// Scores a full assessment in the given tier.
    ///
    /// Answers to advanced questions are ignored when only the core tier is
    /// scored. Answers to unknown question ids are kept.
    pub fn assess(&self, answers: &[Answer], tier: AssessmentTier) -> OverallScore {
        let core_only =
            self.config.features.has_tiered_assessment && tier == AssessmentTier::Core;
        let in_tier: Vec<Answer> = answers
            .iter()
            .filter(|a| {
                !core_only
                    || self
                        .config
                        .question(&a.question_id)
                        .map_or(true, |q| q.tier == QuestionTier::Core)
            })
            .cloned()
            .collect();

        score_assessment(
            &self.config.category_totals(tier),
            &in_tier,
            self.config.scoring.assessment,
        )
    }

    /// Scores a quick check against the framework's quick-check questions.
    pub fn quick_check(&self, answers: &[QuickCheckAnswer]) -> OverallScore {
        let totals: Vec<(String, usize)> = self
            .config
            .categories
            .iter()
            .map(|c| {
                let total = self
                    .config
                    .quick_check_questions
                    .iter()
                    .filter(|q| q.category_id == c.id)
                    .count();
                (c.id.clone(), total)
            })
            .collect();
        score_quick_check(&totals, answers, self.config.scoring.quick_check)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use regkompass_core::{
        FeatureFlags, FrameworkBuilder, MaturityLevel, QuickCheckValue, Reference,
    };

    fn level(l: u8) -> MaturityLevel {
        MaturityLevel::new(l).unwrap()
    }

    fn totals(entries: &[(&str, usize)]) -> Vec<(String, usize)> {
        entries.iter().map(|(c, t)| (c.to_string(), *t)).collect()
    }

    #[test]
    fn test_empty_assessment() {
        let score = score_assessment(
            &totals(&[("gov", 3)]),
            &[],
            OverallFormula::FlatAnswerMean,
        );
        assert_eq!(score.percentage, 0.0);
        assert_eq!(score.traffic_light, TrafficLight::Red);
        assert_eq!(score.category_scores.len(), 1);
        assert_eq!(score.category_scores[0].answered_questions, 0);
        assert_eq!(score.category_scores[0].percentage, 0.0);
        assert_eq!(score.completion_rate, 0.0);
    }

    #[test]
    fn test_flat_mean_ignores_category_distribution() {
        let answers = vec![
            Answer::new("a1", "a", level(3)),
            Answer::new("a2", "a", level(3)),
            Answer::new("a3", "a", level(3)),
            Answer::new("b1", "b", level(0)),
        ];
        let score = score_assessment(
            &totals(&[("a", 3), ("b", 1)]),
            &answers,
            OverallFormula::FlatAnswerMean,
        );
        assert_eq!(score.percentage, 75.0);
        assert_eq!(score.traffic_light, TrafficLight::Green);
        assert_eq!(score.category("a").unwrap().percentage, 100.0);
        assert_eq!(score.category("b").unwrap().percentage, 0.0);
        assert_eq!(score.answered_questions, 4);
        assert_eq!(score.completion_rate, 100.0);
    }

    #[test]
    fn test_category_mean_formula_for_assessment() {
        let answers = vec![
            Answer::new("a1", "a", level(3)),
            Answer::new("a2", "a", level(3)),
            Answer::new("a3", "a", level(3)),
            Answer::new("b1", "b", level(0)),
        ];
        let score = score_assessment(
            &totals(&[("a", 3), ("b", 1)]),
            &answers,
            OverallFormula::CategoryMean,
        );
        assert_eq!(score.percentage, 50.0);
    }

    #[test]
    fn test_rounding_to_one_decimal() {
        let answers = vec![Answer::new("a1", "a", level(1))];
        let score =
            score_assessment(&totals(&[("a", 2)]), &answers, OverallFormula::FlatAnswerMean);
        assert_eq!(score.percentage, 33.3);
        assert_eq!(score.completion_rate, 50.0);
    }

    #[test]
    fn test_quick_check_averages_category_averages() {
        let answers = vec![
            QuickCheckAnswer::new("qa1", "a", QuickCheckValue::Yes),
            QuickCheckAnswer::new("qb1", "b", QuickCheckValue::No),
        ];
        let score = score_quick_check(
            &totals(&[("a", 2), ("b", 1)]),
            &answers,
            OverallFormula::CategoryMean,
        );
        assert_eq!(score.percentage, 50.0);
        assert_eq!(score.total_questions, 3);
        assert_eq!(score.completion_rate, 66.7);
    }

    #[test]
    fn test_quick_check_multi_question_category_is_averaged_first() {
        let answers = vec![
            QuickCheckAnswer::new("qa1", "a", QuickCheckValue::Yes),
            QuickCheckAnswer::new("qa2", "a", QuickCheckValue::Partial),
            QuickCheckAnswer::new("qb1", "b", QuickCheckValue::No),
        ];
        let score = score_quick_check(
            &totals(&[("a", 2), ("b", 1)]),
            &answers,
            OverallFormula::CategoryMean,
        );
        assert_eq!(score.category("a").unwrap().percentage, 75.0);
        assert_eq!(score.percentage, 37.5);
        assert_eq!(score.traffic_light, TrafficLight::Red);
    }

    #[test]
    fn test_quick_check_skips_uncovered_categories() {
        let score = score_quick_check(
            &totals(&[("a", 1), ("b", 0), ("c", 2)]),
            &[QuickCheckAnswer::new("qa1", "a", QuickCheckValue::Partial)],
            OverallFormula::CategoryMean,
        );
        let ids: Vec<_> = score
            .category_scores
            .iter()
            .map(|c| c.category_id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(score.category("c").unwrap().answered_questions, 0);
        assert_eq!(score.percentage, 50.0);
    }

    #[test]
    fn test_empty_quick_check() {
        let score = score_quick_check(&totals(&[("a", 1)]), &[], OverallFormula::CategoryMean);
        assert_eq!(score.percentage, 0.0);
        assert_eq!(score.traffic_light, TrafficLight::Red);
    }

    #[test]
    fn test_answers_outside_framework_still_count_in_flat_mean() {
        let answers = vec![
            Answer::new("a1", "a", level(3)),
            Answer::new("x1", "unknown", level(0)),
        ];
        let score =
            score_assessment(&totals(&[("a", 1)]), &answers, OverallFormula::FlatAnswerMean);
        assert_eq!(score.percentage, 50.0);
        assert_eq!(score.category_scores.len(), 1);
        assert_eq!(score.completion_rate, 100.0);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let answers = vec![
            Answer::new("a1", "a", level(2)),
            Answer::new("b1", "b", level(1)),
        ];
        let t = totals(&[("a", 2), ("b", 2)]);
        let first = score_assessment(&t, &answers, OverallFormula::FlatAnswerMean);
        let second = score_assessment(&t, &answers, OverallFormula::FlatAnswerMean);
        assert_eq!(first, second);
    }

    #[test]
    fn test_percentages_stay_in_bounds() {
        let t = totals(&[("a", 4), ("b", 4)]);
        for a in 0..=3u8 {
            for b in 0..=3u8 {
                let answers = vec![
                    Answer::new("a1", "a", level(a)),
                    Answer::new("b1", "b", level(b)),
                    Answer::new("b2", "b", level(3 - b)),
                ];
                for formula in [OverallFormula::FlatAnswerMean, OverallFormula::CategoryMean] {
                    let score = score_assessment(&t, &answers, formula);
                    assert!((0.0..=100.0).contains(&score.percentage));
                    for c in &score.category_scores {
                        assert!((0.0..=100.0).contains(&c.percentage));
                    }
                }
            }
        }
    }

    #[test]
    fn test_engine_filters_advanced_questions_in_core_tier() {
        let config = FrameworkBuilder::new("tiered")
            .features(FeatureFlags {
                has_tiered_assessment: true,
                ..FeatureFlags::default()
            })
            .category("gov")
            .core("c1", "gov", Reference::default())
            .advanced("a1", "gov", Reference::default())
            .build();
        let answers = vec![
            Answer::new("c1", "gov", level(3)),
            Answer::new("a1", "gov", level(0)),
        ];

        let engine = ScoringEngine::new(&config);
        let core = engine.assess(&answers, AssessmentTier::Core);
        assert_eq!(core.percentage, 100.0);
        assert_eq!(core.total_questions, 1);

        let full = engine.assess(&answers, AssessmentTier::Full);
        assert_eq!(full.percentage, 50.0);
        assert_eq!(full.total_questions, 2);
    }

    #[test]
    fn test_engine_quick_check_uses_question_list_for_totals() {
        let config = FrameworkBuilder::new("qc")
            .features(FeatureFlags {
                has_quick_check: true,
                ..FeatureFlags::default()
            })
            .category("gov")
            .category("ops")
            .core("g1", "gov", Reference::default())
            .core("o1", "ops", Reference::default())
            .quick_check("qg1", "gov")
            .quick_check("qg2", "gov")
            .quick_check("qo1", "ops")
            .build();

        let score = ScoringEngine::new(&config).quick_check(&[QuickCheckAnswer::new(
            "qg1",
            "gov",
            QuickCheckValue::Yes,
        )]);
        assert_eq!(score.category("gov").unwrap().total_questions, 2);
        assert_eq!(score.category("ops").unwrap().total_questions, 1);
        assert_eq!(score.percentage, 100.0);
        assert_eq!(score.completion_rate, 33.3);
    }
}

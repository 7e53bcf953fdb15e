//! Cross-framework aggregation: summary, combined cost estimate and roadmap.

use crate::overlap::OverlapGraph;
use crate::registry::FrameworkRegistry;
use regkompass_core::{
    round_one_decimal, EffortLevel, FrameworkConfig, OverallScore, OverlapMapping, Priority,
    Recommendation, RegkompassError, RegkompassResult, TrafficLight,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

/// Person-days assumed per effort level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffortDays {
    pub quick: f64,
    pub medium: f64,
    pub strategic: f64,
}

impl Default for EffortDays {
    fn default() -> Self {
        Self {
            quick: 2.0,
            medium: 10.0,
            strategic: 30.0,
        }
    }
}

impl EffortDays {
    pub fn for_level(&self, level: EffortLevel) -> f64 {
        match level {
            EffortLevel::Quick => self.quick,
            EffortLevel::Medium => self.medium,
            EffortLevel::Strategic => self.strategic,
        }
    }
}

/// Tunables for cost estimation and roadmap building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanningSettings {
    pub day_rate_eur: f64,
    pub effort_days: EffortDays,
    /// Share of overlapping effort actually saved by doing it once, 0..=1.
    pub realization_factor: f64,
    /// Also plan recommendations of categories that already score green.
    pub include_green_categories: bool,
}

impl Default for PlanningSettings {
    fn default() -> Self {
        Self {
            day_rate_eur: 1_200.0,
            effort_days: EffortDays::default(),
            realization_factor: 0.5,
            include_green_categories: false,
        }
    }
}

impl PlanningSettings {
    pub fn validate(&self) -> RegkompassResult<()> {
        if !self.day_rate_eur.is_finite() || self.day_rate_eur <= 0.0 {
            return Err(RegkompassError::Config(format!(
                "day_rate_eur must be positive and finite, got {}",
                self.day_rate_eur
            )));
        }
        if !(0.0..=1.0).contains(&self.realization_factor) {
            return Err(RegkompassError::Config(format!(
                "realization_factor must be within 0..=1, got {}",
                self.realization_factor
            )));
        }
        let days = self.effort_days;
        if [days.quick, days.medium, days.strategic]
            .iter()
            .any(|d| !d.is_finite() || *d < 0.0)
        {
            return Err(RegkompassError::Config(
                "effort_days must be finite and not negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Overall result of one engaged framework.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkSummary {
    pub framework_id: String,
    pub percentage: f64,
    pub traffic_light: TrafficLight,
    pub completion_rate: f64,
}

/// Consolidated view over all engaged frameworks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub frameworks: Vec<FrameworkSummary>,
    pub average_percentage: f64,
    pub traffic_light: TrafficLight,
    pub synergies: Vec<OverlapMapping>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkCost {
    pub framework_id: String,
    pub open_recommendations: usize,
    pub effort_days: f64,
    pub cost_eur: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynergySaving {
    pub reg_a: String,
    pub reg_b: String,
    pub overlap_percent: u8,
    pub savings_eur: f64,
}

/// Remaining effort across frameworks, net of synergies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostEstimate {
    pub frameworks: Vec<FrameworkCost>,
    pub gross_cost_eur: f64,
    pub synergies: Vec<SynergySaving>,
    pub synergy_savings_eur: f64,
    pub combined_cost_eur: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapItem {
    pub framework_id: String,
    pub recommendation_id: String,
    pub category_id: String,
    pub priority: Priority,
    pub title_key: String,
    /// Other engaged frameworks sharing this item's measure.
    pub also_advances: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapPhase {
    pub phase: u8,
    pub effort_level: EffortLevel,
    pub items: Vec<RoadmapItem>,
}

/// Three phases: quick wins, medium-term measures, strategic measures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roadmap {
    pub phases: Vec<RoadmapPhase>,
}

impl Roadmap {
    pub fn item_count(&self) -> usize {
        self.phases.iter().map(|p| p.items.len()).sum()
    }
}

/// The frameworks a user has engaged with, together with their scores.
pub struct Portfolio<'a> {
    registry: &'a FrameworkRegistry,
    overlaps: &'a OverlapGraph,
    engaged: Vec<(Arc<FrameworkConfig>, OverallScore)>,
}

impl<'a> Portfolio<'a> {
    pub fn new(registry: &'a FrameworkRegistry, overlaps: &'a OverlapGraph) -> Self {
        Self {
            registry,
            overlaps,
            engaged: Vec::new(),
        }
    }

    /// Adds a scored framework. Unknown ids are skipped and reported as `false`.
    pub fn engage(&mut self, framework_id: &str, score: OverallScore) -> bool {
        let Some(config) = self.registry.get(framework_id) else {
            warn!(framework = %framework_id, "Ignoring score for unregistered framework");
            return false;
        };
        match self.engaged.iter().position(|(c, _)| c.id == framework_id) {
            Some(slot) => self.engaged[slot].1 = score,
            None => self.engaged.push((config, score)),
        }
        true
    }

    pub fn engaged_ids(&self) -> Vec<&str> {
        self.engaged.iter().map(|(c, _)| c.id.as_str()).collect()
    }

    pub fn summary(&self) -> PortfolioSummary {
        let frameworks: Vec<FrameworkSummary> = self
            .engaged
            .iter()
            .map(|(config, score)| FrameworkSummary {
                framework_id: config.id.clone(),
                percentage: score.percentage,
                traffic_light: score.traffic_light,
                completion_rate: score.completion_rate,
            })
            .collect();
        let average = if frameworks.is_empty() {
            0.0
        } else {
            frameworks.iter().map(|f| f.percentage).sum::<f64>() / frameworks.len() as f64
        };
        let average_percentage = round_one_decimal(average);

        PortfolioSummary {
            frameworks,
            average_percentage,
            traffic_light: TrafficLight::from_percentage(average_percentage),
            synergies: self
                .overlaps
                .find_synergies(&self.engaged_ids())
                .into_iter()
                .cloned()
                .collect(),
        }
    }

    /// Recommendations of categories that still need work.
    ///
    /// A category missing from the score counts as not green.
    fn open_recommendations<'s>(
        &'s self,
        config: &'s FrameworkConfig,
        score: &'s OverallScore,
        settings: &PlanningSettings,
    ) -> impl Iterator<Item = &'s Recommendation> + 's {
        let include_green = settings.include_green_categories;
        config.recommendations.iter().filter(move |rec| {
            include_green
                || score
                    .category(&rec.category_id)
                    .map_or(true, |c| c.traffic_light != TrafficLight::Green)
        })
    }

    /// Remaining cost of all cost-estimating frameworks, minus synergy savings.
    pub fn estimate_cost(&self, settings: &PlanningSettings) -> CostEstimate {
        let frameworks: Vec<FrameworkCost> = self
            .engaged
            .iter()
            .filter(|(config, _)| config.features.has_cost_estimation)
            .map(|(config, score)| {
                let open: Vec<&Recommendation> =
                    self.open_recommendations(config, score, settings).collect();
                let effort_days: f64 = open
                    .iter()
                    .map(|r| settings.effort_days.for_level(r.effort_level))
                    .sum();
                FrameworkCost {
                    framework_id: config.id.clone(),
                    open_recommendations: open.len(),
                    effort_days,
                    cost_eur: (effort_days * settings.day_rate_eur).round(),
                }
            })
            .collect();

        let gross_cost_eur: f64 = frameworks.iter().map(|f| f.cost_eur).sum();
        let cost_of = |id: &str| {
            frameworks
                .iter()
                .find(|f| f.framework_id == id)
                .map(|f| f.cost_eur)
        };

        let costed: Vec<&str> = frameworks.iter().map(|f| f.framework_id.as_str()).collect();
        let synergies: Vec<SynergySaving> = self
            .overlaps
            .find_synergies(&costed)
            .into_iter()
            .filter_map(|edge| {
                let smaller = cost_of(&edge.reg_a)?.min(cost_of(&edge.reg_b)?);
                let savings =
                    f64::from(edge.overlap_percent) / 100.0 * smaller * settings.realization_factor;
                Some(SynergySaving {
                    reg_a: edge.reg_a.clone(),
                    reg_b: edge.reg_b.clone(),
                    overlap_percent: edge.overlap_percent,
                    savings_eur: savings.round(),
                })
            })
            .collect();

        let largest_single = frameworks.iter().map(|f| f.cost_eur).fold(0.0, f64::max);
        let requested_savings: f64 = synergies.iter().map(|s| s.savings_eur).sum();
        let combined_cost_eur = (gross_cost_eur - requested_savings).max(largest_single);

        CostEstimate {
            frameworks,
            gross_cost_eur,
            synergies,
            synergy_savings_eur: gross_cost_eur - combined_cost_eur,
            combined_cost_eur,
        }
    }

    /// Three-phase roadmap over all roadmap-enabled frameworks.
    ///
    /// Items within a phase are ordered by priority, then by registration order.
    pub fn roadmap(&self, settings: &PlanningSettings) -> Roadmap {
        let engaged = self.engaged_ids();
        let levels = [EffortLevel::Quick, EffortLevel::Medium, EffortLevel::Strategic];
        let mut phases: Vec<RoadmapPhase> = levels
            .into_iter()
            .zip(1u8..)
            .map(|(effort_level, phase)| RoadmapPhase {
                phase,
                effort_level,
                items: Vec::new(),
            })
            .collect();

        for (config, score) in self.engaged.iter().filter(|(c, _)| c.features.has_roadmap) {
            for rec in self.open_recommendations(config, score, settings) {
                let also_advances = match &rec.measure_key {
                    Some(measure) => self
                        .overlaps
                        .find_synergies(&engaged)
                        .into_iter()
                        .filter(|edge| edge.shares_measure(measure))
                        .filter_map(|edge| edge.other_side(&config.id))
                        .map(str::to_string)
                        .collect(),
                    None => Vec::new(),
                };
                let item = RoadmapItem {
                    framework_id: config.id.clone(),
                    recommendation_id: rec.id.clone(),
                    category_id: rec.category_id.clone(),
                    priority: rec.priority,
                    title_key: rec.title_key.clone(),
                    also_advances,
                };
                if let Some(phase) = phases
                    .iter_mut()
                    .find(|p| p.effort_level == rec.effort_level)
                {
                    phase.items.push(item);
                }
            }
        }

        for phase in &mut phases {
            phase
                .items
                .sort_by_key(|item| (item.priority, self.registry.position(&item.framework_id)));
        }
        Roadmap { phases }
    }
}

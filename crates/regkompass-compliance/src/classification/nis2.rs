use super::{
    selected, ClassificationResult, SizeClass, SizeFacts, ThresholdClassifier, SECTOR_NOT_LISTED,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Sectors of high criticality (NIS2 Annex I).
pub const ANNEX_I_SECTORS: &[&str] = &[
    "energy",
    "transport",
    "banking",
    "financial-market-infrastructure",
    "health",
    "drinking-water",
    "waste-water",
    "digital-infrastructure",
    "ict-service-management",
    "public-administration",
    "space",
];

/// Other critical sectors (NIS2 Annex II).
pub const ANNEX_II_SECTORS: &[&str] = &[
    "postal-courier",
    "waste-management",
    "chemicals",
    "food",
    "manufacturing",
    "digital-providers",
    "research",
];

/// Entity types in scope regardless of size (Art. 2(2) NIS2).
const SIZE_INDEPENDENT_ESSENTIAL: &[&str] = &[
    "qualified-trust-service-provider",
    "tld-registry",
    "dns-service-provider",
];

/// Entity types in scope regardless of size, essential from medium size on.
const SIZE_INDEPENDENT_TIERED: &[&str] =
    &["trust-service-provider", "public-electronic-communications"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Nis2Category {
    /// Besonders wichtige Einrichtung.
    EssentialEntity,
    /// Wichtige Einrichtung.
    ImportantEntity,
    /// Not regulated directly, but bound through supply-chain requirements of customers.
    IndirectlyAffected,
    /// Listed sector, but neither headcount nor revenue is known.
    SizeAssessmentRequired,
    NotAffected,
}

/// Organisational facts evaluated by [`Nis2Classifier`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nis2Facts {
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub special_entity: Option<String>,
    #[serde(default)]
    pub size: SizeFacts,
    /// Explicitly designated operator of a critical facility.
    #[serde(default)]
    pub kritis_operator: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Nis2Classifier;

enum Annex {
    I,
    II,
}

fn annex_of(sector: &str) -> Option<Annex> {
    if ANNEX_I_SECTORS.contains(&sector) {
        Some(Annex::I)
    } else if ANNEX_II_SECTORS.contains(&sector) {
        Some(Annex::II)
    } else {
        None
    }
}

fn essential(reason: &str) -> ClassificationResult<Nis2Category> {
    ClassificationResult::new(Nis2Category::EssentialEntity, 100, reason, "§ 28 Abs. 1 BSIG")
}

fn important(reason: &str) -> ClassificationResult<Nis2Category> {
    ClassificationResult::new(Nis2Category::ImportantEntity, 70, reason, "§ 28 Abs. 2 BSIG")
}

fn indirect(reason: &str) -> ClassificationResult<Nis2Category> {
    ClassificationResult::new(
        Nis2Category::IndirectlyAffected,
        30,
        reason,
        "Art. 21 Abs. 2 lit. d NIS2-Richtlinie",
    )
}

fn size_unknown() -> ClassificationResult<Nis2Category> {
    ClassificationResult::new(
        Nis2Category::SizeAssessmentRequired,
        50,
        "nis2.classification.size-unknown",
        "§ 28 Abs. 3 BSIG",
    )
}

fn not_affected(reason: &str) -> ClassificationResult<Nis2Category> {
    ClassificationResult::new(Nis2Category::NotAffected, 0, reason, "§ 28 BSIG")
}

impl ThresholdClassifier for Nis2Classifier {
    type Facts = Nis2Facts;
    type Category = Nis2Category;

    fn framework_id(&self) -> &'static str {
        "nis2"
    }

    fn classify(&self, facts: &Nis2Facts) -> ClassificationResult<Nis2Category> {
        if facts.kritis_operator {
            return essential("nis2.classification.kritis-operator");
        }

        let sector = selected(&facts.sector);
        if sector == Some(SECTOR_NOT_LISTED) {
            return not_affected("nis2.classification.sector-not-listed");
        }

        let size = facts.size.size_class();
        debug!(?sector, ?size, "Classifying NIS2 entity");

        if let Some(entity) = selected(&facts.special_entity) {
            if SIZE_INDEPENDENT_ESSENTIAL.contains(&entity) {
                return essential("nis2.classification.special-entity");
            }
            if SIZE_INDEPENDENT_TIERED.contains(&entity) {
                return if matches!(size, Some(SizeClass::Medium | SizeClass::Large)) {
                    essential("nis2.classification.special-entity")
                } else {
                    important("nis2.classification.special-entity-small")
                };
            }
        }

        match (sector.and_then(annex_of), size) {
            (Some(Annex::I), Some(SizeClass::Large)) => {
                essential("nis2.classification.annex1-large")
            }
            (Some(Annex::I), Some(SizeClass::Medium)) => {
                important("nis2.classification.annex1-medium")
            }
            (Some(Annex::II), Some(SizeClass::Large | SizeClass::Medium)) => {
                important("nis2.classification.annex2-medium")
            }
            (Some(_), Some(SizeClass::Small)) => {
                indirect("nis2.classification.below-size-threshold")
            }
            (Some(_), None) => size_unknown(),
            (None, _) => not_affected("nis2.classification.no-sector"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facts(sector: &str, employees: u32) -> Nis2Facts {
        Nis2Facts {
            sector: Some(sector.to_string()),
            size: SizeFacts::new(employees),
            ..Nis2Facts::default()
        }
    }

    fn classify(facts: &Nis2Facts) -> Nis2Category {
        Nis2Classifier.classify(facts).category
    }

    #[test]
    fn test_override_beats_everything() {
        let mut f = facts(SECTOR_NOT_LISTED, 1);
        f.kritis_operator = true;
        let result = Nis2Classifier.classify(&f);
        assert_eq!(result.category, Nis2Category::EssentialEntity);
        assert_eq!(result.score, 100);
        assert_eq!(result.reason_key, "nis2.classification.kritis-operator");
    }

    #[test]
    fn test_not_listed_short_circuits() {
        let mut f = facts(SECTOR_NOT_LISTED, 5000);
        f.special_entity = Some("dns-service-provider".to_string());
        let result = Nis2Classifier.classify(&f);
        assert_eq!(result.category, Nis2Category::NotAffected);
        assert!(!result.applies());
    }

    #[test]
    fn test_annex_one_by_size() {
        assert_eq!(classify(&facts("energy", 300)), Nis2Category::EssentialEntity);
        assert_eq!(classify(&facts("energy", 60)), Nis2Category::ImportantEntity);
        assert_eq!(classify(&facts("energy", 10)), Nis2Category::IndirectlyAffected);
    }

    #[test]
    fn test_annex_two_caps_at_important() {
        assert_eq!(classify(&facts("chemicals", 5000)), Nis2Category::ImportantEntity);
        assert_eq!(classify(&facts("chemicals", 49)), Nis2Category::IndirectlyAffected);
    }

    #[test]
    fn test_unknown_or_missing_sector() {
        assert_eq!(classify(&facts("bakery", 5000)), Nis2Category::NotAffected);
        assert_eq!(classify(&Nis2Facts::default()), Nis2Category::NotAffected);
    }

    #[test]
    fn test_size_independent_entities() {
        let mut f = facts("digital-infrastructure", 3);
        f.special_entity = Some("tld-registry".to_string());
        assert_eq!(classify(&f), Nis2Category::EssentialEntity);

        f.special_entity = Some("public-electronic-communications".to_string());
        assert_eq!(classify(&f), Nis2Category::ImportantEntity);

        f.size = SizeFacts::new(80);
        assert_eq!(classify(&f), Nis2Category::EssentialEntity);
    }

    #[test]
    fn test_missing_balance_sheet_does_not_block_large() {
        let mut f = facts("health", 20);
        f.size = f.size.with_financials(Some(80_000_000.0), None);
        assert_eq!(classify(&f), Nis2Category::EssentialEntity);
    }

    #[test]
    fn test_listed_sector_without_size_needs_assessment() {
        let f = Nis2Facts {
            sector: Some("energy".to_string()),
            ..Nis2Facts::default()
        };
        let result = Nis2Classifier.classify(&f);
        assert_eq!(result.category, Nis2Category::SizeAssessmentRequired);
        assert_eq!(result.reason_key, "nis2.classification.size-unknown");
        assert!(result.applies());

        let mut f = f;
        f.size = SizeFacts::default().with_financials(Some(70_000_000.0), None);
        assert_eq!(classify(&f), Nis2Category::EssentialEntity);
    }

    #[test]
    fn test_size_independent_entity_without_size() {
        let f = Nis2Facts {
            sector: Some("digital-infrastructure".to_string()),
            special_entity: Some("trust-service-provider".to_string()),
            ..Nis2Facts::default()
        };
        assert_eq!(classify(&f), Nis2Category::ImportantEntity);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let f = facts("transport", 120);
        assert_eq!(Nis2Classifier.classify(&f), Nis2Classifier.classify(&f));
    }
}

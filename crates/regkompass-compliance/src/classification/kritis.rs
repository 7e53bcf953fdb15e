use super::{selected, ClassificationResult, ThresholdClassifier, SECTOR_NOT_LISTED};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Critical infrastructure sectors.
pub const KRITIS_SECTORS: &[&str] = &[
    "energy",
    "water",
    "food",
    "it-telecom",
    "health",
    "finance-insurance",
    "transport-logistics",
    "municipal-waste",
    "public-administration",
    "space",
];

/// Regular threshold of persons supplied by one facility.
pub const SERVED_POPULATION_THRESHOLD: u64 = 500_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KritisCategory {
    CriticalFacilityOperator,
    /// Sector matches but the supplied population is unknown.
    ThresholdAssessmentRequired,
    BelowThreshold,
    NotAffected,
}

/// Organisational facts evaluated by [`KritisClassifier`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KritisFacts {
    #[serde(default)]
    pub sector: Option<String>,
    /// Explicit designation as operator of a critical facility.
    #[serde(default)]
    pub designated_operator: bool,
    /// Persons supplied by the largest facility; `None` if not known.
    #[serde(default)]
    pub served_population: Option<u64>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct KritisClassifier;

impl ThresholdClassifier for KritisClassifier {
    type Facts = KritisFacts;
    type Category = KritisCategory;

    fn framework_id(&self) -> &'static str {
        "kritis"
    }

    fn classify(&self, facts: &KritisFacts) -> ClassificationResult<KritisCategory> {
        if facts.designated_operator {
            return ClassificationResult::new(
                KritisCategory::CriticalFacilityOperator,
                100,
                "kritis.classification.designated",
                "§ 2 Abs. 10 BSIG i.V.m. BSI-KritisV",
            );
        }

        let sector = match selected(&facts.sector) {
            Some(SECTOR_NOT_LISTED) => {
                return ClassificationResult::new(
                    KritisCategory::NotAffected,
                    0,
                    "kritis.classification.sector-not-listed",
                    "BSI-KritisV",
                )
            }
            Some(sector) if KRITIS_SECTORS.contains(&sector) => sector,
            _ => {
                return ClassificationResult::new(
                    KritisCategory::NotAffected,
                    0,
                    "kritis.classification.no-sector",
                    "BSI-KritisV",
                )
            }
        };

        debug!(sector, served = ?facts.served_population, "Classifying KRITIS operator");

        match facts.served_population {
            None => ClassificationResult::new(
                KritisCategory::ThresholdAssessmentRequired,
                60,
                "kritis.classification.population-unknown",
                "§ 1 Abs. 1 Nr. 4 BSI-KritisV",
            ),
            Some(population) if population >= SERVED_POPULATION_THRESHOLD => {
                ClassificationResult::new(
                    KritisCategory::CriticalFacilityOperator,
                    100,
                    "kritis.classification.above-threshold",
                    "§ 1 Abs. 1 Nr. 4 BSI-KritisV",
                )
            }
            Some(_) => ClassificationResult::new(
                KritisCategory::BelowThreshold,
                25,
                "kritis.classification.below-threshold",
                "§ 1 Abs. 1 Nr. 4 BSI-KritisV",
            ),
        }
    }
}

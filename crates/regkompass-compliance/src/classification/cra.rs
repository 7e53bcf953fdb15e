use super::{selected, ClassificationResult, ThresholdClassifier};
use serde::{Deserialize, Serialize};

/// Product class ids understood by [`CraClassifier`].
pub mod product_class {
    pub const IMPORTANT_CLASS_II: &str = "important-class-2";
    pub const IMPORTANT_CLASS_I: &str = "important-class-1";
    pub const DEFAULT: &str = "default";
    /// No products with digital elements are placed on the market.
    pub const NO_DIGITAL_PRODUCTS: &str = "no-digital-products";
    /// Covered by sector legislation (medical devices, vehicles, aviation, marine).
    pub const SECTORAL_EXEMPTION: &str = "sectoral-exemption";
    pub const NON_COMMERCIAL_OPEN_SOURCE: &str = "non-commercial-open-source";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CraCategory {
    Critical,
    ImportantClassII,
    ImportantClassI,
    Default,
    NotApplicable,
}

/// Product facts evaluated by [`CraClassifier`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CraFacts {
    #[serde(default)]
    pub product_class: Option<String>,
    /// Product listed as critical in Annex IV.
    #[serde(default)]
    pub annex_iv_critical: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CraClassifier;

impl ThresholdClassifier for CraClassifier {
    type Facts = CraFacts;
    type Category = CraCategory;

    fn framework_id(&self) -> &'static str {
        "cra"
    }

    fn classify(&self, facts: &CraFacts) -> ClassificationResult<CraCategory> {
        use product_class::*;

        if facts.annex_iv_critical {
            return ClassificationResult::new(
                CraCategory::Critical,
                100,
                "cra.classification.annex4-critical",
                "Art. 8 Abs. 1 i.V.m. Anhang IV CRA",
            );
        }

        match selected(&facts.product_class) {
            Some(NO_DIGITAL_PRODUCTS | SECTORAL_EXEMPTION | NON_COMMERCIAL_OPEN_SOURCE) => {
                ClassificationResult::new(
                    CraCategory::NotApplicable,
                    0,
                    "cra.classification.exempt",
                    "Art. 2 CRA",
                )
            }
            Some(IMPORTANT_CLASS_II) => ClassificationResult::new(
                CraCategory::ImportantClassII,
                85,
                "cra.classification.important-class-2",
                "Art. 32 Abs. 3 i.V.m. Anhang III Klasse II CRA",
            ),
            Some(IMPORTANT_CLASS_I) => ClassificationResult::new(
                CraCategory::ImportantClassI,
                65,
                "cra.classification.important-class-1",
                "Art. 32 Abs. 2 i.V.m. Anhang III Klasse I CRA",
            ),
            Some(DEFAULT) => ClassificationResult::new(
                CraCategory::Default,
                40,
                "cra.classification.default",
                "Art. 32 Abs. 1 CRA",
            ),
            _ => ClassificationResult::new(
                CraCategory::NotApplicable,
                0,
                "cra.classification.no-product-class",
                "Art. 2 CRA",
            ),
        }
    }
}

use super::relevance::{FrameworkRules, RelevanceRule, RuleCondition};

const KRITIS_INDUSTRIES: &[&str] = &[
    "energy",
    "water",
    "health",
    "finance",
    "insurance",
    "transport",
    "it-telecom",
    "food",
];

const NIS2_ANNEX_I_INDUSTRIES: &[&str] = &[
    "energy",
    "water",
    "health",
    "finance",
    "transport",
    "it-telecom",
    "digital-services",
    "public-sector",
];

const NIS2_ANNEX_II_INDUSTRIES: &[&str] = &[
    "manufacturing",
    "automotive",
    "chemicals",
    "food",
    "research",
    "logistics",
];

const MEDIUM_OR_LARGE: &[&str] = &["medium", "large"];

fn rule(condition: RuleCondition, score: u8, reason_key: &str) -> RelevanceRule {
    RelevanceRule::new(condition, score, reason_key)
}

fn all(conditions: Vec<RuleCondition>) -> RuleCondition {
    RuleCondition::AllOf(conditions)
}

fn industry(ids: &[&str]) -> RuleCondition {
    RuleCondition::industry(ids)
}

fn size(ids: &[&str]) -> RuleCondition {
    RuleCondition::size(ids)
}

fn activity(id: &str) -> RuleCondition {
    RuleCondition::activity(id)
}

fn circumstance(id: &str) -> RuleCondition {
    RuleCondition::circumstance(id)
}

/// Rule tables for all built-in frameworks, in enumeration order.
pub fn builtin_rules() -> Vec<FrameworkRules> {
    let annex_any: Vec<&str> = NIS2_ANNEX_I_INDUSTRIES
        .iter()
        .chain(NIS2_ANNEX_II_INDUSTRIES)
        .copied()
        .collect();

    vec![
        FrameworkRules::new(
            "nis2",
            vec![
                rule(circumstance("kritis-operator"), 100, "relevance.nis2.kritis-operator"),
                rule(
                    all(vec![industry(NIS2_ANNEX_I_INDUSTRIES), size(&["large"])]),
                    95,
                    "relevance.nis2.essential-entity",
                ),
                rule(
                    all(vec![industry(NIS2_ANNEX_I_INDUSTRIES), size(&["medium"])]),
                    85,
                    "relevance.nis2.important-entity",
                ),
                rule(
                    all(vec![industry(NIS2_ANNEX_II_INDUSTRIES), size(MEDIUM_OR_LARGE)]),
                    80,
                    "relevance.nis2.important-entity-annex2",
                ),
                rule(
                    activity("it-services-for-critical-sectors"),
                    55,
                    "relevance.nis2.supplier",
                ),
                rule(industry(&annex_any), 35, "relevance.nis2.supply-chain"),
                rule(RuleCondition::AnyIndustry, 5, "relevance.nis2.out-of-scope"),
            ],
        ),
        FrameworkRules::new(
            "dsgvo",
            vec![
                rule(
                    all(vec![activity("processes-personal-data"), industry(&["health"])]),
                    100,
                    "relevance.dsgvo.special-categories",
                ),
                rule(
                    activity("processes-personal-data"),
                    90,
                    "relevance.dsgvo.personal-data",
                ),
                rule(RuleCondition::AnyIndustry, 70, "relevance.dsgvo.employee-data"),
            ],
        ),
        FrameworkRules::new(
            "kritis",
            vec![
                rule(circumstance("kritis-operator"), 100, "relevance.kritis.operator"),
                rule(
                    all(vec![industry(KRITIS_INDUSTRIES), size(&["large"])]),
                    60,
                    "relevance.kritis.check-thresholds",
                ),
                rule(industry(KRITIS_INDUSTRIES), 30, "relevance.kritis.sector"),
            ],
        ),
        FrameworkRules::new(
            "dora",
            vec![
                rule(
                    all(vec![
                        circumstance("regulated-by-bafin"),
                        industry(&["finance", "insurance"]),
                    ]),
                    100,
                    "relevance.dora.supervised-entity",
                ),
                rule(
                    industry(&["finance", "insurance"]),
                    90,
                    "relevance.dora.financial-entity",
                ),
                rule(
                    activity("ict-services-for-financial-sector"),
                    65,
                    "relevance.dora.ict-third-party",
                ),
            ],
        ),
        FrameworkRules::new(
            "tisax",
            vec![
                rule(circumstance("vda-isa-required"), 100, "relevance.tisax.required"),
                rule(industry(&["automotive"]), 80, "relevance.tisax.automotive"),
                rule(activity("automotive-supplier"), 75, "relevance.tisax.supplier"),
                rule(
                    all(vec![industry(&["manufacturing"]), size(MEDIUM_OR_LARGE)]),
                    30,
                    "relevance.tisax.manufacturing",
                ),
            ],
        ),
        FrameworkRules::new(
            "cra",
            vec![
                rule(
                    activity("digital-products"),
                    90,
                    "relevance.cra.products-with-digital-elements",
                ),
                rule(
                    activity("software-development"),
                    60,
                    "relevance.cra.software",
                ),
                rule(
                    industry(&["manufacturing", "automotive"]),
                    30,
                    "relevance.cra.manufacturing",
                ),
            ],
        ),
        FrameworkRules::new(
            "bsi-grundschutz",
            vec![
                rule(
                    circumstance("federal-authority"),
                    100,
                    "relevance.bsi-grundschutz.federal",
                ),
                rule(
                    industry(&["public-sector"]),
                    85,
                    "relevance.bsi-grundschutz.public-sector",
                ),
                rule(
                    circumstance("kritis-operator"),
                    60,
                    "relevance.bsi-grundschutz.kritis",
                ),
                rule(
                    circumstance("public-tender"),
                    50,
                    "relevance.bsi-grundschutz.public-tender",
                ),
            ],
        ),
        FrameworkRules::new(
            "iso27001",
            vec![
                rule(
                    circumstance("customer-requires-iso27001"),
                    100,
                    "relevance.iso27001.customer-requirement",
                ),
                rule(circumstance("kritis-operator"), 80, "relevance.iso27001.kritis-evidence"),
                rule(
                    all(vec![
                        industry(&["it-telecom", "digital-services", "finance"]),
                        size(MEDIUM_OR_LARGE),
                    ]),
                    70,
                    "relevance.iso27001.information-intensive",
                ),
                rule(size(MEDIUM_OR_LARGE), 50, "relevance.iso27001.size"),
                rule(RuleCondition::AnyIndustry, 20, "relevance.iso27001.baseline"),
            ],
        ),
        FrameworkRules::new(
            "soc2",
            vec![
                rule(
                    circumstance("customer-requires-soc2"),
                    100,
                    "relevance.soc2.customer-requirement",
                ),
                rule(
                    all(vec![activity("cloud-services"), activity("us-customers")]),
                    85,
                    "relevance.soc2.us-saas",
                ),
                rule(activity("cloud-services"), 45, "relevance.soc2.cloud"),
                rule(activity("us-customers"), 30, "relevance.soc2.us-market"),
            ],
        ),
        FrameworkRules::new(
            "pci-dss",
            vec![
                rule(
                    circumstance("high-card-volume"),
                    100,
                    "relevance.pci-dss.merchant-level",
                ),
                rule(activity("card-payments"), 90, "relevance.pci-dss.card-data"),
                rule(industry(&["retail"]), 25, "relevance.pci-dss.retail"),
            ],
        ),
        FrameworkRules::new(
            "c5",
            vec![
                rule(
                    all(vec![activity("cloud-services"), industry(&["health"])]),
                    90,
                    "relevance.c5.health-cloud",
                ),
                rule(
                    all(vec![activity("cloud-services"), circumstance("public-tender")]),
                    85,
                    "relevance.c5.public-cloud",
                ),
                rule(activity("cloud-services"), 55, "relevance.c5.cloud"),
            ],
        ),
        FrameworkRules::new(
            "cis-controls",
            vec![
                rule(size(&["micro", "small"]), 55, "relevance.cis-controls.pragmatic-baseline"),
                rule(RuleCondition::AnyIndustry, 35, "relevance.cis-controls.baseline"),
            ],
        ),
        FrameworkRules::new(
            "nist-csf",
            vec![
                rule(activity("us-customers"), 55, "relevance.nist-csf.us-market"),
                rule(size(&["large"]), 45, "relevance.nist-csf.enterprise"),
                rule(RuleCondition::AnyIndustry, 20, "relevance.nist-csf.baseline"),
            ],
        ),
        FrameworkRules::new(
            "iso22301",
            vec![
                rule(
                    circumstance("high-availability-required"),
                    85,
                    "relevance.iso22301.availability",
                ),
                rule(circumstance("kritis-operator"), 80, "relevance.iso22301.kritis"),
                rule(
                    industry(&["finance", "insurance"]),
                    60,
                    "relevance.iso22301.operational-resilience",
                ),
                rule(size(&["large"]), 40, "relevance.iso22301.enterprise"),
                rule(RuleCondition::AnyIndustry, 10, "relevance.iso22301.baseline"),
            ],
        ),
        FrameworkRules::new(
            "owasp-asvs",
            vec![
                rule(activity("web-applications"), 85, "relevance.owasp-asvs.web"),
                rule(
                    activity("software-development"),
                    70,
                    "relevance.owasp-asvs.development",
                ),
                rule(activity("digital-products"), 50, "relevance.owasp-asvs.products"),
            ],
        ),
    ]
}

use regkompass_core::{
    EffortLevel, FeatureFlags, FrameworkBuilder, FrameworkConfig, Priority, Reference,
};

/// Obligations of critical facility operators (§ 8a BSIG, KRITIS-Dachgesetz).
pub fn config() -> FrameworkConfig {
    FrameworkBuilder::new("kritis")
        .features(FeatureFlags {
            has_classification: true,
            has_quick_check: true,
            has_cost_estimation: true,
            has_roadmap: true,
            ..FeatureFlags::default()
        })
        .category("state-of-the-art")
        .category("attack-detection")
        .category("physical-resilience")
        .category("audit")
        .core("sota-measures", "state-of-the-art", Reference::legal("§ 8a Abs. 1 BSIG"))
        .core("sota-b3s", "state-of-the-art", Reference::standard("B3S"))
        .core("sad-deployed", "attack-detection", Reference::legal("§ 8a Abs. 1a BSIG"))
        .core("sad-logging", "attack-detection", Reference::standard("BSI OH SzA"))
        .core("phys-risk", "physical-resilience", Reference::legal("§ 13 KRITIS-DachG"))
        .core("phys-continuity", "physical-resilience", Reference::legal("§ 14 KRITIS-DachG"))
        .core("audit-evidence", "audit", Reference::legal("§ 8a Abs. 3 BSIG"))
        .recommendation(
            "deploy-siem",
            "attack-detection",
            Priority::High,
            EffortLevel::Strategic,
            Reference::legal("§ 8a Abs. 1a BSIG"),
        )
        .measure("logging-monitoring")
        .checklist(4)
        .recommendation(
            "resilience-plan",
            "physical-resilience",
            Priority::High,
            EffortLevel::Medium,
            Reference::legal("§ 14 KRITIS-DachG"),
        )
        .measure("physical-security")
        .recommendation(
            "audit-preparation",
            "audit",
            Priority::Medium,
            EffortLevel::Medium,
            Reference::legal("§ 8a Abs. 3 BSIG"),
        )
        .recommendation(
            "adopt-b3s",
            "state-of-the-art",
            Priority::Medium,
            EffortLevel::Quick,
            Reference::standard("B3S"),
        )
        .measure("risk-management")
        .quick_check("qc-sota", "state-of-the-art")
        .quick_check("qc-sad", "attack-detection")
        .quick_check("qc-audit", "audit")
        .build()
}

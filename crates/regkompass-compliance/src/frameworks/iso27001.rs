use regkompass_core::{
    EffortLevel, FeatureFlags, FrameworkBuilder, FrameworkConfig, Priority, Reference,
};

/// ISO/IEC 27001:2022 including Annex A controls.
pub fn config() -> FrameworkConfig {
    FrameworkBuilder::new("iso27001")
        .features(FeatureFlags {
            has_quick_check: true,
            has_tiered_assessment: true,
            has_cost_estimation: true,
            has_roadmap: true,
            ..FeatureFlags::default()
        })
        .category("context-leadership")
        .category("risk")
        .category("organizational-controls")
        .category("technological-controls")
        .core("scope", "context-leadership", Reference::standard("ISO 27001 4.3"))
        .core("policy", "context-leadership", Reference::standard("ISO 27001 5.2"))
        .core("risk-assessment", "risk", Reference::standard("ISO 27001 6.1.2"))
        .core("soa", "risk", Reference::standard("ISO 27001 6.1.3 d"))
        .core("supplier", "organizational-controls", Reference::standard("ISO 27001 A.5.19"))
        .advanced("threat-intel", "organizational-controls", Reference::standard("ISO 27001 A.5.7"))
        .core("access", "technological-controls", Reference::standard("ISO 27001 A.8.2"))
        .core("crypto", "technological-controls", Reference::standard("ISO 27001 A.8.24"))
        .advanced("monitoring", "technological-controls", Reference::standard("ISO 27001 A.8.16"))
        .recommendation(
            "define-scope",
            "context-leadership",
            Priority::High,
            EffortLevel::Quick,
            Reference::standard("ISO 27001 4.3"),
        )
        .measure("governance")
        .recommendation(
            "risk-methodology",
            "risk",
            Priority::High,
            EffortLevel::Medium,
            Reference::standard("ISO 27001 6.1.2"),
        )
        .measure("risk-management")
        .checklist(3)
        .recommendation(
            "iam",
            "technological-controls",
            Priority::High,
            EffortLevel::Strategic,
            Reference::standard("ISO 27001 A.5.15-A.5.18"),
        )
        .measure("access-control")
        .recommendation(
            "log-monitoring",
            "technological-controls",
            Priority::Medium,
            EffortLevel::Medium,
            Reference::standard("ISO 27001 A.8.15, A.8.16"),
        )
        .measure("logging-monitoring")
        .quick_check("qc-scope", "context-leadership")
        .quick_check("qc-risk", "risk")
        .quick_check("qc-access", "technological-controls")
        .build()
}

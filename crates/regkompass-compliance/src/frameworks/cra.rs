use regkompass_core::{
    EffortLevel, FeatureFlags, FrameworkBuilder, FrameworkConfig, Priority, Reference,
};

/// Cyber Resilience Act, Regulation (EU) 2024/2847.
pub fn config() -> FrameworkConfig {
    FrameworkBuilder::new("cra")
        .features(FeatureFlags {
            has_classification: true,
            has_quick_check: true,
            has_cost_estimation: true,
            has_roadmap: true,
            ..FeatureFlags::default()
        })
        .category("secure-by-design")
        .category("vulnerability-handling")
        .category("conformity")
        .core("risk-assessment", "secure-by-design", Reference::legal("Art. 13 Abs. 2 CRA"))
        .core("secure-defaults", "secure-by-design", Reference::legal("Anhang I Teil I CRA"))
        .core("sbom", "vulnerability-handling", Reference::legal("Anhang I Teil II Nr. 1 CRA"))
        .core(
            "disclosure-policy",
            "vulnerability-handling",
            Reference::legal("Anhang I Teil II Nr. 5 CRA"),
        )
        .core("exploited-reporting", "vulnerability-handling", Reference::legal("Art. 14 CRA"))
        .core("technical-documentation", "conformity", Reference::legal("Anhang VII CRA"))
        .core("ce-marking", "conformity", Reference::legal("Art. 30 CRA"))
        .recommendation(
            "sbom-pipeline",
            "vulnerability-handling",
            Priority::High,
            EffortLevel::Medium,
            Reference::legal("Anhang I Teil II CRA"),
        )
        .measure("vulnerability-management")
        .recommendation(
            "psirt",
            "vulnerability-handling",
            Priority::High,
            EffortLevel::Strategic,
            Reference::legal("Art. 14 CRA"),
        )
        .measure("incident-reporting")
        .recommendation(
            "threat-modeling",
            "secure-by-design",
            Priority::Medium,
            EffortLevel::Medium,
            Reference::legal("Art. 13 CRA"),
        )
        .measure("secure-development")
        .recommendation(
            "doc-templates",
            "conformity",
            Priority::Low,
            EffortLevel::Quick,
            Reference::legal("Anhang VII CRA"),
        )
        .quick_check("qc-sbom", "vulnerability-handling")
        .quick_check("qc-updates", "vulnerability-handling")
        .quick_check("qc-docs", "conformity")
        .build()
}

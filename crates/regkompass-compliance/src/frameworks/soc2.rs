use regkompass_core::{
    EffortLevel, FeatureFlags, FrameworkBuilder, FrameworkConfig, Priority, Reference,
};

/// AICPA SOC 2 Trust Services Criteria.
pub fn config() -> FrameworkConfig {
    FrameworkBuilder::new("soc2")
        .features(FeatureFlags {
            has_quick_check: true,
            ..FeatureFlags::default()
        })
        .category("security")
        .category("availability")
        .category("confidentiality")
        .core("control-environment", "security", Reference::standard("CC1.1"))
        .core("logical-access", "security", Reference::standard("CC6.1"))
        .core("change-management", "security", Reference::standard("CC8.1"))
        .core("capacity", "availability", Reference::standard("A1.1"))
        .core("recovery", "availability", Reference::standard("A1.2"))
        .core("classification", "confidentiality", Reference::standard("C1.1"))
        .recommendation(
            "evidence-automation",
            "security",
            Priority::Medium,
            EffortLevel::Medium,
            Reference::standard("CC4.1"),
        )
        .measure("logging-monitoring")
        .recommendation(
            "vendor-reviews",
            "security",
            Priority::Medium,
            EffortLevel::Quick,
            Reference::standard("CC9.2"),
        )
        .measure("third-party-risk")
        .quick_check("qc-access", "security")
        .quick_check("qc-recovery", "availability")
        .build()
}

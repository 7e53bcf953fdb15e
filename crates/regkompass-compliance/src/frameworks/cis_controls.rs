use regkompass_core::{
    EffortLevel, FeatureFlags, FrameworkBuilder, FrameworkConfig, Priority, Reference,
};

/// CIS Critical Security Controls v8; implementation group 1 is the core tier.
pub fn config() -> FrameworkConfig {
    FrameworkBuilder::new("cis-controls")
        .features(FeatureFlags {
            has_quick_check: true,
            has_tiered_assessment: true,
            ..FeatureFlags::default()
        })
        .category("inventory")
        .category("protection")
        .category("detection")
        .core("hw-inventory", "inventory", Reference::standard("CIS 1.1"))
        .core("sw-inventory", "inventory", Reference::standard("CIS 2.1"))
        .core("secure-config", "protection", Reference::standard("CIS 4.1"))
        .core("vuln-process", "protection", Reference::standard("CIS 7.1"))
        .advanced("log-collection", "detection", Reference::standard("CIS 8.2"))
        .advanced("pen-testing", "detection", Reference::standard("CIS 18.1"))
        .recommendation(
            "asset-discovery",
            "inventory",
            Priority::High,
            EffortLevel::Quick,
            Reference::standard("CIS 1"),
        )
        .measure("asset-management")
        .recommendation(
            "patch-automation",
            "protection",
            Priority::High,
            EffortLevel::Medium,
            Reference::standard("CIS 7"),
        )
        .measure("vulnerability-management")
        .quick_check("qc-inventory", "inventory")
        .quick_check("qc-patching", "protection")
        .build()
}

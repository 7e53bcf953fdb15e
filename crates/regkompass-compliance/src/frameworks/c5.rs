use regkompass_core::{
    EffortLevel, FeatureFlags, FrameworkBuilder, FrameworkConfig, Priority, Reference,
};

/// BSI Cloud Computing Compliance Criteria Catalogue (C5:2020).
///
/// Basic criteria form the core tier, additional criteria the advanced tier.
pub fn config() -> FrameworkConfig {
    FrameworkBuilder::new("c5")
        .features(FeatureFlags {
            has_tiered_assessment: true,
            ..FeatureFlags::default()
        })
        .category("organisation")
        .category("operations")
        .category("identity")
        .category("cryptography")
        .core("ois-policy", "organisation", Reference::standard("C5 OIS-01"))
        .core("ops-capacity", "operations", Reference::standard("C5 OPS-01"))
        .advanced("ops-logging", "operations", Reference::standard("C5 OPS-10"))
        .core("idm-policy", "identity", Reference::standard("C5 IDM-01"))
        .advanced("idm-privileged", "identity", Reference::standard("C5 IDM-06"))
        .core("cry-transit", "cryptography", Reference::standard("C5 CRY-02"))
        .recommendation(
            "c5-gap-analysis",
            "organisation",
            Priority::High,
            EffortLevel::Medium,
            Reference::standard("C5:2020"),
        )
        .recommendation(
            "key-management",
            "cryptography",
            Priority::Medium,
            EffortLevel::Medium,
            Reference::standard("C5 CRY-04"),
        )
        .measure("cryptography")
        .build()
}

use regkompass_core::{
    EffortLevel, FeatureFlags, FrameworkBuilder, FrameworkConfig, Priority, Reference,
};

/// OWASP Application Security Verification Standard 4.0; level 1 is the core tier.
pub fn config() -> FrameworkConfig {
    FrameworkBuilder::new("owasp-asvs")
        .features(FeatureFlags {
            has_quick_check: true,
            has_tiered_assessment: true,
            ..FeatureFlags::default()
        })
        .category("architecture")
        .category("authentication")
        .category("validation")
        .advanced("threat-model", "architecture", Reference::standard("ASVS V1.1.2"))
        .core("password-security", "authentication", Reference::standard("ASVS V2.1"))
        .advanced("mfa", "authentication", Reference::standard("ASVS V2.8"))
        .core("input-validation", "validation", Reference::standard("ASVS V5.1"))
        .core("output-encoding", "validation", Reference::standard("ASVS V5.3"))
        .recommendation(
            "sast-in-ci",
            "validation",
            Priority::High,
            EffortLevel::Quick,
            Reference::standard("ASVS V14.2"),
        )
        .measure("secure-development")
        .recommendation(
            "security-champions",
            "architecture",
            Priority::Low,
            EffortLevel::Strategic,
            Reference::standard("ASVS V1.1"),
        )
        .quick_check("qc-auth", "authentication")
        .quick_check("qc-validation", "validation")
        .build()
}

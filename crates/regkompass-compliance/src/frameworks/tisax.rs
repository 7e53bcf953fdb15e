use regkompass_core::{
    EffortLevel, FeatureFlags, FrameworkBuilder, FrameworkConfig, Priority, Reference,
};

/// TISAX assessment based on the VDA ISA catalogue.
pub fn config() -> FrameworkConfig {
    FrameworkBuilder::new("tisax")
        .features(FeatureFlags {
            has_quick_check: true,
            has_tiered_assessment: true,
            ..FeatureFlags::default()
        })
        .category("information-security")
        .category("prototype-protection")
        .category("data-protection")
        .core("isms-policies", "information-security", Reference::standard("VDA ISA 1.1.1"))
        .core("asset-inventory", "information-security", Reference::standard("VDA ISA 1.3.1"))
        .core("access-management", "information-security", Reference::standard("VDA ISA 4.1.1"))
        .advanced(
            "physical-prototypes",
            "prototype-protection",
            Reference::standard("VDA ISA 8.1.1"),
        )
        .advanced("test-vehicles", "prototype-protection", Reference::standard("VDA ISA 8.3.1"))
        .core(
            "privacy-organisation",
            "data-protection",
            Reference::both("Art. 28 DSGVO", "VDA ISA 9.1"),
        )
        .recommendation(
            "isa-self-assessment",
            "information-security",
            Priority::High,
            EffortLevel::Quick,
            Reference::standard("VDA ISA"),
        )
        .measure("governance")
        .recommendation(
            "prototype-zones",
            "prototype-protection",
            Priority::Medium,
            EffortLevel::Strategic,
            Reference::standard("VDA ISA 8"),
        )
        .measure("physical-security")
        .quick_check("qc-isms", "information-security")
        .quick_check("qc-access", "information-security")
        .quick_check("qc-privacy", "data-protection")
        .build()
}

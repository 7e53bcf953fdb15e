use regkompass_core::{
    EffortLevel, FeatureFlags, FrameworkBuilder, FrameworkConfig, Priority, Reference,
};

/// PCI DSS v4.0.
pub fn config() -> FrameworkConfig {
    FrameworkBuilder::new("pci-dss")
        .features(FeatureFlags {
            has_quick_check: true,
            has_cost_estimation: true,
            ..FeatureFlags::default()
        })
        .category("network")
        .category("cardholder-data")
        .category("access")
        .category("testing")
        .core("segmentation", "network", Reference::standard("PCI DSS 1.2"))
        .core("storage-minimisation", "cardholder-data", Reference::standard("PCI DSS 3.2"))
        .core("encryption-transit", "cardholder-data", Reference::standard("PCI DSS 4.2"))
        .core("mfa", "access", Reference::standard("PCI DSS 8.4"))
        .core("scans", "testing", Reference::standard("PCI DSS 11.3"))
        .recommendation(
            "scope-reduction",
            "cardholder-data",
            Priority::High,
            EffortLevel::Strategic,
            Reference::standard("PCI DSS 3"),
        )
        .measure("cryptography")
        .recommendation(
            "mfa-rollout",
            "access",
            Priority::High,
            EffortLevel::Quick,
            Reference::standard("PCI DSS 8.4"),
        )
        .measure("access-control")
        .recommendation(
            "asv-scans",
            "testing",
            Priority::Medium,
            EffortLevel::Quick,
            Reference::standard("PCI DSS 11.3.2"),
        )
        .quick_check("qc-storage", "cardholder-data")
        .quick_check("qc-mfa", "access")
        .build()
}

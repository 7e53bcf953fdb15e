use regkompass_core::{
    EffortLevel, FeatureFlags, FrameworkBuilder, FrameworkConfig, Priority, Reference,
};

/// NIST Cybersecurity Framework 2.0.
pub fn config() -> FrameworkConfig {
    FrameworkBuilder::new("nist-csf")
        .features(FeatureFlags {
            has_quick_check: true,
            ..FeatureFlags::default()
        })
        .category("govern")
        .category("identify")
        .category("protect")
        .category("detect")
        .category("respond-recover")
        .core("gv-strategy", "govern", Reference::standard("GV.RM-01"))
        .core("id-assets", "identify", Reference::standard("ID.AM-01"))
        .core("pr-access", "protect", Reference::standard("PR.AA-01"))
        .core("de-monitoring", "detect", Reference::standard("DE.CM-01"))
        .core("rs-plan", "respond-recover", Reference::standard("RS.MA-01"))
        .core("rc-plan", "respond-recover", Reference::standard("RC.RP-01"))
        .recommendation(
            "current-profile",
            "govern",
            Priority::High,
            EffortLevel::Quick,
            Reference::standard("CSF 2.0 Profiles"),
        )
        .measure("governance")
        .recommendation(
            "continuous-monitoring",
            "detect",
            Priority::Medium,
            EffortLevel::Strategic,
            Reference::standard("DE.CM"),
        )
        .measure("logging-monitoring")
        .quick_check("qc-govern", "govern")
        .quick_check("qc-detect", "detect")
        .quick_check("qc-recover", "respond-recover")
        .build()
}

use regkompass_core::{
    EffortLevel, FeatureFlags, FrameworkBuilder, FrameworkConfig, Priority, Reference,
};

/// IT-Grundschutz following BSI-Standards 200-1 to 200-3.
pub fn config() -> FrameworkConfig {
    FrameworkBuilder::new("bsi-grundschutz")
        .features(FeatureFlags {
            has_tiered_assessment: true,
            has_cost_estimation: true,
            has_roadmap: true,
            ..FeatureFlags::default()
        })
        .category("isms")
        .category("orp")
        .category("con")
        .category("ops")
        .core("isms-1", "isms", Reference::standard("ISMS.1.A1"))
        .core("isms-guideline", "isms", Reference::standard("ISMS.1.A3"))
        .core("orp-roles", "orp", Reference::standard("ORP.1.A1"))
        .core("orp-awareness", "orp", Reference::standard("ORP.3.A1"))
        .core("con-crypto", "con", Reference::standard("CON.1.A1"))
        .advanced("con-data-loss", "con", Reference::standard("CON.3.A2"))
        .core("ops-patch", "ops", Reference::standard("OPS.1.1.3.A1"))
        .advanced("ops-logging", "ops", Reference::standard("OPS.1.1.5.A3"))
        .recommendation(
            "structure-analysis",
            "isms",
            Priority::High,
            EffortLevel::Medium,
            Reference::standard("BSI-Standard 200-2"),
        )
        .measure("governance")
        .recommendation(
            "awareness-programme",
            "orp",
            Priority::Medium,
            EffortLevel::Quick,
            Reference::standard("ORP.3"),
        )
        .measure("awareness-training")
        .recommendation(
            "patch-process",
            "ops",
            Priority::High,
            EffortLevel::Medium,
            Reference::standard("OPS.1.1.3"),
        )
        .recommendation(
            "modelling",
            "isms",
            Priority::Medium,
            EffortLevel::Strategic,
            Reference::standard("BSI-Standard 200-2 Kap. 8"),
        )
        .measure("risk-management")
        .build()
}

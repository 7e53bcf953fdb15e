use regkompass_core::{
    EffortLevel, FeatureFlags, FrameworkBuilder, FrameworkConfig, Priority, Reference,
};

/// ISO 22301:2019 business continuity management.
pub fn config() -> FrameworkConfig {
    FrameworkBuilder::new("iso22301")
        .features(FeatureFlags {
            has_roadmap: true,
            ..FeatureFlags::default()
        })
        .category("analysis")
        .category("strategy")
        .category("exercising")
        .core("bia", "analysis", Reference::standard("ISO 22301 8.2.2"))
        .core("risk", "analysis", Reference::standard("ISO 22301 8.2.3"))
        .core("solutions", "strategy", Reference::standard("ISO 22301 8.3"))
        .core("plans", "strategy", Reference::standard("ISO 22301 8.4"))
        .core("exercises", "exercising", Reference::standard("ISO 22301 8.5"))
        .recommendation(
            "run-bia",
            "analysis",
            Priority::High,
            EffortLevel::Medium,
            Reference::standard("ISO 22301 8.2.2"),
        )
        .measure("business-continuity")
        .recommendation(
            "backup-restore-tests",
            "exercising",
            Priority::Medium,
            EffortLevel::Quick,
            Reference::standard("ISO 22301 8.5"),
        )
        .measure("backup")
        .build()
}

use regkompass_core::{
    EffortLevel, FeatureFlags, FrameworkBuilder, FrameworkConfig, Priority, Reference,
};

/// Digital Operational Resilience Act, Regulation (EU) 2022/2554.
pub fn config() -> FrameworkConfig {
    FrameworkBuilder::new("dora")
        .features(FeatureFlags {
            has_quick_check: true,
            has_tiered_assessment: true,
            has_cost_estimation: true,
            has_roadmap: true,
            ..FeatureFlags::default()
        })
        .category("ict-risk")
        .category("incidents")
        .category("testing")
        .category("third-party")
        .core("framework", "ict-risk", Reference::legal("Art. 6 DORA"))
        .core("management-body", "ict-risk", Reference::legal("Art. 5 DORA"))
        .core("backup-policy", "ict-risk", Reference::legal("Art. 12 DORA"))
        .core("classification", "incidents", Reference::legal("Art. 18 DORA"))
        .core("major-reporting", "incidents", Reference::legal("Art. 19 DORA"))
        .core("test-programme", "testing", Reference::legal("Art. 24 DORA"))
        .advanced("tlpt", "testing", Reference::legal("Art. 26 DORA"))
        .core("register", "third-party", Reference::legal("Art. 28 Abs. 3 DORA"))
        .advanced("exit-strategies", "third-party", Reference::legal("Art. 28 Abs. 8 DORA"))
        .recommendation(
            "ict-risk-framework",
            "ict-risk",
            Priority::High,
            EffortLevel::Strategic,
            Reference::legal("Art. 6 DORA"),
        )
        .measure("risk-management")
        .recommendation(
            "incident-taxonomy",
            "incidents",
            Priority::High,
            EffortLevel::Medium,
            Reference::legal("Art. 18 DORA"),
        )
        .measure("incident-reporting")
        .recommendation(
            "register-of-information",
            "third-party",
            Priority::High,
            EffortLevel::Quick,
            Reference::legal("Art. 28 DORA"),
        )
        .measure("third-party-risk")
        .checklist(3)
        .recommendation(
            "recovery-tests",
            "ict-risk",
            Priority::Medium,
            EffortLevel::Medium,
            Reference::legal("Art. 11, 12 DORA"),
        )
        .measure("business-continuity")
        .quick_check("qc-framework", "ict-risk")
        .quick_check("qc-reporting", "incidents")
        .quick_check("qc-testing", "testing")
        .quick_check("qc-register", "third-party")
        .build()
}

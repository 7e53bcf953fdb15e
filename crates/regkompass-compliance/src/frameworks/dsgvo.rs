use regkompass_core::{
    EffortLevel, FeatureFlags, FrameworkBuilder, FrameworkConfig, Priority, Reference,
};

pub fn config() -> FrameworkConfig {
    FrameworkBuilder::new("dsgvo")
        .features(FeatureFlags {
            has_quick_check: true,
            has_cost_estimation: true,
            has_roadmap: true,
            ..FeatureFlags::default()
        })
        .category("lawfulness")
        .category("data-subject-rights")
        .category("security")
        .category("accountability")
        .core("legal-basis", "lawfulness", Reference::legal("Art. 6 DSGVO"))
        .core("consent", "lawfulness", Reference::legal("Art. 7 DSGVO"))
        .core("information", "data-subject-rights", Reference::legal("Art. 13, 14 DSGVO"))
        .core("access-erasure", "data-subject-rights", Reference::legal("Art. 15, 17 DSGVO"))
        .core("tom", "security", Reference::legal("Art. 32 DSGVO"))
        .core("breach-notification", "security", Reference::legal("Art. 33, 34 DSGVO"))
        .core("records", "accountability", Reference::legal("Art. 30 DSGVO"))
        .core("dpia", "accountability", Reference::legal("Art. 35 DSGVO"))
        .core("processors", "accountability", Reference::legal("Art. 28 DSGVO"))
        .recommendation(
            "records-of-processing",
            "accountability",
            Priority::High,
            EffortLevel::Medium,
            Reference::legal("Art. 30 DSGVO"),
        )
        .measure("data-protection")
        .recommendation(
            "dsr-workflow",
            "data-subject-rights",
            Priority::Medium,
            EffortLevel::Quick,
            Reference::legal("Art. 12 DSGVO"),
        )
        .checklist(3)
        .recommendation(
            "breach-playbook",
            "security",
            Priority::High,
            EffortLevel::Quick,
            Reference::legal("Art. 33 DSGVO"),
        )
        .measure("incident-reporting")
        .recommendation(
            "access-concept",
            "security",
            Priority::Medium,
            EffortLevel::Medium,
            Reference::legal("Art. 32 DSGVO"),
        )
        .measure("access-control")
        .quick_check("qc-records", "accountability")
        .quick_check("qc-privacy-notice", "data-subject-rights")
        .quick_check("qc-breach", "security")
        .build()
}

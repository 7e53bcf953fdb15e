use regkompass_core::{
    EffortLevel, FeatureFlags, FrameworkBuilder, FrameworkConfig, Priority, Reference,
};

/// NIS2 as transposed into German law (BSIG in the version of the NIS2UmsuCG).
pub fn config() -> FrameworkConfig {
    FrameworkBuilder::new("nis2")
        .features(FeatureFlags::all())
        .category("governance")
        .category("risk-management")
        .category("incident-handling")
        .category("supply-chain")
        .core("gov-accountability", "governance", Reference::legal("§ 38 Abs. 1 BSIG"))
        .core("gov-training", "governance", Reference::legal("§ 38 Abs. 3 BSIG"))
        .core(
            "risk-analysis",
            "risk-management",
            Reference::both("§ 30 Abs. 2 Nr. 1 BSIG", "ISO 27001 6.1.2"),
        )
        .core("risk-continuity", "risk-management", Reference::legal("§ 30 Abs. 2 Nr. 3 BSIG"))
        .advanced("risk-crypto", "risk-management", Reference::legal("§ 30 Abs. 2 Nr. 8 BSIG"))
        .core("inc-detection", "incident-handling", Reference::legal("§ 30 Abs. 2 Nr. 2 BSIG"))
        .core("inc-reporting", "incident-handling", Reference::legal("§ 32 BSIG"))
        .advanced("inc-exercises", "incident-handling", Reference::standard("BSI-Standard 200-4"))
        .core("sc-suppliers", "supply-chain", Reference::legal("§ 30 Abs. 2 Nr. 4 BSIG"))
        .advanced("sc-development", "supply-chain", Reference::legal("§ 30 Abs. 2 Nr. 5 BSIG"))
        .recommendation(
            "appoint-board-owner",
            "governance",
            Priority::High,
            EffortLevel::Quick,
            Reference::legal("§ 38 BSIG"),
        )
        .measure("governance")
        .checklist(3)
        .recommendation(
            "establish-isms",
            "risk-management",
            Priority::High,
            EffortLevel::Strategic,
            Reference::legal("§ 30 BSIG"),
        )
        .measure("risk-management")
        .recommendation(
            "reporting-process",
            "incident-handling",
            Priority::High,
            EffortLevel::Medium,
            Reference::legal("§ 32 BSIG"),
        )
        .measure("incident-reporting")
        .checklist(4)
        .recommendation(
            "supplier-requirements",
            "supply-chain",
            Priority::Medium,
            EffortLevel::Medium,
            Reference::legal("§ 30 Abs. 2 Nr. 4 BSIG"),
        )
        .measure("supply-chain-security")
        .recommendation(
            "continuity-plan",
            "risk-management",
            Priority::Medium,
            EffortLevel::Strategic,
            Reference::legal("§ 30 Abs. 2 Nr. 3 BSIG"),
        )
        .measure("business-continuity")
        .quick_check("qc-governance", "governance")
        .quick_check("qc-risk", "risk-management")
        .quick_check("qc-backup", "risk-management")
        .quick_check("qc-reporting", "incident-handling")
        .quick_check("qc-suppliers", "supply-chain")
        .build()
}

//! Built-in framework content.
//!
//! Each submodule authors one [`FrameworkConfig`]; [`register_builtin_frameworks`]
//! loads all of them in enumeration order.

mod bsi_grundschutz;
mod c5;
mod cis_controls;
mod cra;
mod dora;
mod dsgvo;
mod iso22301;
mod iso27001;
mod kritis;
mod nis2;
mod nist_csf;
mod owasp_asvs;
mod pci_dss;
mod soc2;
mod tisax;

use crate::registry::FrameworkRegistry;
use regkompass_core::{FrameworkConfig, RegkompassResult};
use tracing::info;

/// All built-in configs, in enumeration order.
pub fn builtin_frameworks() -> Vec<FrameworkConfig> {
    vec![
        nis2::config(),
        dsgvo::config(),
        kritis::config(),
        dora::config(),
        tisax::config(),
        cra::config(),
        bsi_grundschutz::config(),
        iso27001::config(),
        soc2::config(),
        pci_dss::config(),
        c5::config(),
        cis_controls::config(),
        nist_csf::config(),
        iso22301::config(),
        owasp_asvs::config(),
    ]
}

/// Registers every built-in framework with `registry`.
///
/// Returns the number of frameworks registered.
pub fn register_builtin_frameworks(registry: &mut FrameworkRegistry) -> RegkompassResult<usize> {
    let configs = builtin_frameworks();
    let count = configs.len();
    for config in configs {
        registry.register(config)?;
    }
    info!(count, "Built-in frameworks registered");
    Ok(count)
}

use crate::registry::FrameworkRegistry;
use regkompass_core::{OverlapMapping, RegkompassError, RegkompassResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::info;

/// An overlap edge seen from one of its endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkOverlap {
    /// The framework on the other side of the edge.
    pub framework_id: String,
    pub overlap_percent: u8,
    pub shared_measure_keys: Vec<String>,
    pub description_key: String,
}

/// Static, validated graph of overlap edges between frameworks.
#[derive(Debug, Clone, Default)]
pub struct OverlapGraph {
    edges: Vec<OverlapMapping>,
}

impl OverlapGraph {
    /// Builds a graph, rejecting self-loops, duplicate unordered pairs and
    /// percentages above 100.
    pub fn new(edges: Vec<OverlapMapping>) -> RegkompassResult<Self> {
        let mut seen = HashSet::new();
        for edge in &edges {
            if edge.reg_a == edge.reg_b {
                return Err(RegkompassError::InvalidOverlap(format!(
                    "self-loop on '{}'",
                    edge.reg_a
                )));
            }
            if edge.overlap_percent > 100 {
                return Err(RegkompassError::InvalidOverlap(format!(
                    "{}↔{} overlap of {}% exceeds 100%",
                    edge.reg_a, edge.reg_b, edge.overlap_percent
                )));
            }
            let (a, b) = edge.pair_key();
            if !seen.insert((a.to_string(), b.to_string())) {
                return Err(RegkompassError::InvalidOverlap(format!(
                    "duplicate edge between '{a}' and '{b}'"
                )));
            }
        }
        info!(edges = edges.len(), "Overlap graph loaded");
        Ok(Self { edges })
    }

    /// Graph over the built-in edge table.
    pub fn builtin() -> RegkompassResult<Self> {
        Self::new(builtin_overlaps())
    }

    pub fn edges(&self) -> &[OverlapMapping] {
        &self.edges
    }

    /// Every edge touching `id`, seen from `id`, highest overlap first.
    pub fn overlaps_for(&self, id: &str) -> Vec<FrameworkOverlap> {
        let mut overlaps: Vec<FrameworkOverlap> = self
            .edges
            .iter()
            .filter_map(|edge| {
                edge.other_side(id).map(|other| FrameworkOverlap {
                    framework_id: other.to_string(),
                    overlap_percent: edge.overlap_percent,
                    shared_measure_keys: edge.shared_measure_keys.clone(),
                    description_key: edge.description_key.clone(),
                })
            })
            .collect();
        overlaps.sort_by(|a, b| b.overlap_percent.cmp(&a.overlap_percent));
        overlaps
    }

    /// The edge between `a` and `b`, in either storage order.
    pub fn between(&self, a: &str, b: &str) -> Option<&OverlapMapping> {
        self.edges
            .iter()
            .find(|edge| edge.other_side(a) == Some(b))
    }

    /// Edges whose both endpoints are in `engaged`.
    pub fn find_synergies<S: AsRef<str>>(&self, engaged: &[S]) -> Vec<&OverlapMapping> {
        let engaged: HashSet<&str> = engaged.iter().map(AsRef::as_ref).collect();
        self.edges
            .iter()
            .filter(|edge| {
                engaged.contains(edge.reg_a.as_str()) && engaged.contains(edge.reg_b.as_str())
            })
            .collect()
    }

    /// Framework ids referenced by edges but missing from `registry`.
    pub fn unknown_frameworks(&self, registry: &FrameworkRegistry) -> Vec<String> {
        let mut unknown: Vec<String> = self
            .edges
            .iter()
            .flat_map(|edge| [edge.reg_a.as_str(), edge.reg_b.as_str()])
            .filter(|id| !registry.contains(id))
            .map(str::to_string)
            .collect();
        unknown.sort();
        unknown.dedup();
        unknown
    }

    /// Fails if any edge names a framework `registry` does not know.
    pub fn validate_against(&self, registry: &FrameworkRegistry) -> RegkompassResult<()> {
        let unknown = self.unknown_frameworks(registry);
        if unknown.is_empty() {
            Ok(())
        } else {
            Err(RegkompassError::InvalidOverlap(format!(
                "edges reference unregistered frameworks: {}",
                unknown.join(", ")
            )))
        }
    }
}

/// The authored overlap table between the built-in frameworks.
pub fn builtin_overlaps() -> Vec<OverlapMapping> {
    fn edge(a: &str, b: &str, percent: u8, measures: &[&str]) -> OverlapMapping {
        OverlapMapping::new(a, b, percent, measures)
    }

    vec![
        edge(
            "nis2",
            "kritis",
            80,
            &[
                "risk-management",
                "incident-reporting",
                "business-continuity",
                "supply-chain-security",
            ],
        ),
        edge("dora", "nis2", 40, &["incident-reporting", "third-party-risk", "risk-management"]),
        edge(
            "nis2",
            "iso27001",
            70,
            &["risk-management", "access-control", "cryptography", "governance"],
        ),
        edge(
            "nis2",
            "bsi-grundschutz",
            65,
            &["risk-management", "governance", "business-continuity"],
        ),
        edge("nis2", "cra", 35, &["vulnerability-management", "incident-reporting"]),
        edge("nis2", "iso22301", 45, &["business-continuity", "backup"]),
        edge("nis2", "dsgvo", 25, &["incident-reporting", "data-protection"]),
        edge(
            "nis2",
            "cis-controls",
            50,
            &["asset-management", "vulnerability-management", "access-control"],
        ),
        edge(
            "nis2",
            "nist-csf",
            60,
            &["risk-management", "logging-monitoring", "incident-reporting"],
        ),
        edge("kritis", "iso27001", 65, &["risk-management", "logging-monitoring", "governance"]),
        edge(
            "kritis",
            "bsi-grundschutz",
            70,
            &["risk-management", "physical-security", "business-continuity"],
        ),
        edge("dora", "iso27001", 50, &["risk-management", "access-control", "logging-monitoring"]),
        edge("dora", "iso22301", 60, &["business-continuity", "backup"]),
        edge(
            "tisax",
            "iso27001",
            75,
            &["access-control", "physical-security", "supply-chain-security", "governance"],
        ),
        edge("iso27001", "soc2", 60, &["access-control", "logging-monitoring", "third-party-risk"]),
        edge("iso27001", "c5", 70, &["access-control", "cryptography", "logging-monitoring"]),
        edge(
            "bsi-grundschutz",
            "iso27001",
            80,
            &["governance", "risk-management", "awareness-training"],
        ),
        edge("iso27001", "pci-dss", 40, &["access-control", "cryptography"]),
        edge("iso27001", "cis-controls", 55, &["asset-management", "vulnerability-management"]),
        edge("iso27001", "nist-csf", 65, &["risk-management", "governance", "logging-monitoring"]),
        edge("dsgvo", "iso27001", 30, &["data-protection", "access-control"]),
        edge("soc2", "c5", 55, &["access-control", "logging-monitoring"]),
        edge("cra", "owasp-asvs", 50, &["secure-development", "vulnerability-management"]),
        edge("pci-dss", "owasp-asvs", 30, &["secure-development"]),
        edge("cis-controls", "nist-csf", 60, &["asset-management", "logging-monitoring"]),
    ]
}

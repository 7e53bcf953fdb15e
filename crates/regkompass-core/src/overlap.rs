use serde::{Deserialize, Serialize};

/// An undirected, weighted edge between two frameworks.
///
/// `reg_a`/`reg_b` order is arbitrary; all accessors treat the edge as
/// undirected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlapMapping {
    pub reg_a: String,
    pub reg_b: String,
    pub overlap_percent: u8,
    #[serde(default)]
    pub shared_measure_keys: Vec<String>,
    pub description_key: String,
}

impl OverlapMapping {
    pub fn new(
        reg_a: impl Into<String>,
        reg_b: impl Into<String>,
        overlap_percent: u8,
        shared_measure_keys: &[&str],
    ) -> Self {
        let reg_a = reg_a.into();
        let reg_b = reg_b.into();
        let description_key = format!("overlap.{reg_a}.{reg_b}");
        Self {
            reg_a,
            reg_b,
            overlap_percent,
            shared_measure_keys: shared_measure_keys.iter().map(|k| k.to_string()).collect(),
            description_key,
        }
    }

    /// Whether either endpoint is `id`.
    pub fn touches(&self, id: &str) -> bool {
        self.reg_a == id || self.reg_b == id
    }

    /// The endpoint opposite to `id`, if `id` is an endpoint.
    pub fn other_side(&self, id: &str) -> Option<&str> {
        if self.reg_a == id {
            Some(&self.reg_b)
        } else if self.reg_b == id {
            Some(&self.reg_a)
        } else {
            None
        }
    }

    /// Endpoints in lexical order, used as the identity of the unordered pair.
    pub fn pair_key(&self) -> (&str, &str) {
        if self.reg_a <= self.reg_b {
            (&self.reg_a, &self.reg_b)
        } else {
            (&self.reg_b, &self.reg_a)
        }
    }

    /// Whether the edge shares the given measure key.
    pub fn shares_measure(&self, measure_key: &str) -> bool {
        self.shared_measure_keys.iter().any(|k| k == measure_key)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_other_side_is_symmetric() {
        let edge = OverlapMapping::new("dora", "nis2", 40, &["incident-reporting"]);
        assert_eq!(edge.other_side("nis2"), Some("dora"));
        assert_eq!(edge.other_side("dora"), Some("nis2"));
        assert_eq!(edge.other_side("tisax"), None);
    }

    #[test]
    fn test_pair_key_ignores_storage_order() {
        let a = OverlapMapping::new("dora", "nis2", 40, &[]);
        let b = OverlapMapping::new("nis2", "dora", 40, &[]);
        assert_eq!(a.pair_key(), b.pair_key());
    }

    #[test]
    fn test_wire_format() {
        let edge: OverlapMapping = serde_json::from_str(
            r#"{"regA":"dora","regB":"nis2","overlapPercent":40,"descriptionKey":"x"}"#,
        )
        .unwrap();
        assert!(edge.shared_measure_keys.is_empty());
        assert!(edge.touches("nis2"));
    }
}

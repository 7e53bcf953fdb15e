use serde::{Deserialize, Serialize};

/// Three-state summary derived from a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrafficLight {
    Red,
    Yellow,
    Green,
}

impl TrafficLight {
    /// Upper bound (exclusive) of the red band.
    pub const RED_BELOW: f64 = 40.0;
    /// Upper bound (exclusive) of the yellow band.
    pub const YELLOW_BELOW: f64 = 70.0;

    /// `< 40 ⇒ red`, `< 70 ⇒ yellow`, otherwise green.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage < Self::RED_BELOW {
            TrafficLight::Red
        } else if percentage < Self::YELLOW_BELOW {
            TrafficLight::Yellow
        } else {
            TrafficLight::Green
        }
    }
}

impl std::fmt::Display for TrafficLight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrafficLight::Red => write!(f, "red"),
            TrafficLight::Yellow => write!(f, "yellow"),
            TrafficLight::Green => write!(f, "green"),
        }
    }
}

/// Rounds to one decimal place.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Score of a single category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub category_id: String,
    pub percentage: f64,
    pub traffic_light: TrafficLight,
    pub answered_questions: usize,
    pub total_questions: usize,
}

/// Score of a whole framework assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallScore {
    pub percentage: f64,
    pub traffic_light: TrafficLight,
    pub category_scores: Vec<CategoryScore>,
    pub answered_questions: usize,
    pub total_questions: usize,
    pub completion_rate: f64,
}

impl OverallScore {
    /// Looks up the score of one category.
    pub fn category(&self, category_id: &str) -> Option<&CategoryScore> {
        self.category_scores
            .iter()
            .find(|c| c.category_id == category_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traffic_light_bands() {
        assert_eq!(TrafficLight::from_percentage(0.0), TrafficLight::Red);
        assert_eq!(TrafficLight::from_percentage(39.9), TrafficLight::Red);
        assert_eq!(TrafficLight::from_percentage(40.0), TrafficLight::Yellow);
        assert_eq!(TrafficLight::from_percentage(69.9), TrafficLight::Yellow);
        assert_eq!(TrafficLight::from_percentage(70.0), TrafficLight::Green);
        assert_eq!(TrafficLight::from_percentage(100.0), TrafficLight::Green);
    }

    #[test]
    fn test_traffic_light_is_monotonic() {
        let mut previous = TrafficLight::Red;
        for step in 0..=1000 {
            let light = TrafficLight::from_percentage(f64::from(step) / 10.0);
            let rank = |l: TrafficLight| match l {
                TrafficLight::Red => 0,
                TrafficLight::Yellow => 1,
                TrafficLight::Green => 2,
            };
            assert!(rank(light) >= rank(previous));
            previous = light;
        }
    }

    #[test]
    fn test_round_one_decimal() {
        assert_eq!(round_one_decimal(66.666_666), 66.7);
        assert_eq!(round_one_decimal(33.333_333), 33.3);
        assert_eq!(round_one_decimal(50.0), 50.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(TrafficLight::Yellow.to_string(), "yellow");
    }
}

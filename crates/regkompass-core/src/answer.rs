use crate::error::{RegkompassError, RegkompassResult};
use serde::{Deserialize, Serialize};

/// Ordinal 0–3 self-assessment of how completely a control is implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MaturityLevel(u8);

impl MaturityLevel {
    /// Highest representable level.
    pub const MAX: u8 = 3;

    /// Not implemented at all.
    pub const NONE: Self = Self(0);
    /// Fully implemented and reviewed.
    pub const FULL: Self = Self(3);

    /// Creates a level, rejecting anything above [`MaturityLevel::MAX`].
    pub fn new(level: u8) -> RegkompassResult<Self> {
        if level > Self::MAX {
            return Err(RegkompassError::InvalidAnswer(format!(
                "maturity level {level} is outside 0..={}",
                Self::MAX
            )));
        }
        Ok(Self(level))
    }

    /// Raw level value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// `(level / 3) × 100`.
    pub fn percentage(self) -> f64 {
        f64::from(self.0) / f64::from(Self::MAX) * 100.0
    }
}

impl TryFrom<u8> for MaturityLevel {
    type Error = RegkompassError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MaturityLevel> for u8 {
    fn from(level: MaturityLevel) -> Self {
        level.0
    }
}

/// A full-assessment answer for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: String,
    pub category_id: String,
    pub level: MaturityLevel,
}

impl Answer {
    pub fn new(
        question_id: impl Into<String>,
        category_id: impl Into<String>,
        level: MaturityLevel,
    ) -> Self {
        Self {
            question_id: question_id.into(),
            category_id: category_id.into(),
            level,
        }
    }
}

/// Three-valued quick-check response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuickCheckValue {
    Yes,
    Partial,
    No,
}

impl QuickCheckValue {
    /// `yes → 100`, `partial → 50`, `no → 0`.
    pub fn points(self) -> f64 {
        match self {
            QuickCheckValue::Yes => 100.0,
            QuickCheckValue::Partial => 50.0,
            QuickCheckValue::No => 0.0,
        }
    }
}

/// A quick-check answer for one quick-check question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickCheckAnswer {
    pub question_id: String,
    pub category_id: String,
    pub value: QuickCheckValue,
}

impl QuickCheckAnswer {
    pub fn new(
        question_id: impl Into<String>,
        category_id: impl Into<String>,
        value: QuickCheckValue,
    ) -> Self {
        Self {
            question_id: question_id.into(),
            category_id: category_id.into(),
            value,
        }
    }
}

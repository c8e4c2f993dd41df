#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

/// Record categories that carry an SLA clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SlaCategory {
    #[serde(rename = "DF")]
    Df,
    #[serde(rename = "8D")]
    EightD,
    #[serde(rename = "MDI")]
    Mdi,
}

impl SlaCategory {
    pub const ALL: [SlaCategory; 3] = [SlaCategory::Df, SlaCategory::EightD, SlaCategory::Mdi];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "DF" => Some(Self::Df),
            "8D" => Some(Self::EightD),
            "MDI" => Some(Self::Mdi),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Df => "DF",
            Self::EightD => "8D",
            Self::Mdi => "MDI",
        }
    }

    pub fn allowed_codes() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.as_str()).collect()
    }
}

/// Stored SLA tracking state of a complaint, as written by the backend job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlaState {
    OnTime,
    AtRisk,
    Overdue,
    Pending,
}

impl SlaState {
    /// Absent or unrecognized values count as pending.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("On Time") => Self::OnTime,
            Some("At Risk") => Self::AtRisk,
            Some("Overdue") => Self::Overdue,
            _ => Self::Pending,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::OnTime => "SLA OK",
            Self::AtRisk => "SLA Risk",
            Self::Overdue => "SLA Gecikmiş",
            Self::Pending => "SLA Bekliyor",
        }
    }
}

#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::{ContractViolation, Validate};

/// Whether a KPI is better when higher (`Increase`) or lower (`Decrease`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetDirection {
    #[default]
    Increase,
    Decrease,
}

impl TargetDirection {
    pub fn label(self) -> &'static str {
        match self {
            Self::Increase => "Artır (Yüksek olan iyi)",
            Self::Decrease => "Azalt (Düşük olan iyi)",
        }
    }
}

/// Metric snapshot values arrive either as JSON numbers or as numeric text
/// from `numeric` columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
}

impl MetricValue {
    pub fn raw(&self) -> String {
        match self {
            Self::Number(v) => v.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for MetricValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    #[serde(default)]
    pub current_value: Option<MetricValue>,
    #[serde(default)]
    pub target_value: Option<MetricValue>,
    #[serde(default)]
    pub target_direction: TargetDirection,
    #[serde(default)]
    pub unit: String,
}

impl Kpi {
    pub fn v1(
        current_value: Option<MetricValue>,
        target_value: Option<MetricValue>,
        target_direction: TargetDirection,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            current_value,
            target_value,
            target_direction,
            unit: unit.into(),
        }
    }
}

impl Validate for Kpi {
    fn validate(&self) -> Result<(), ContractViolation> {
        if self.unit.len() > 16 {
            return Err(ContractViolation::InvalidValue {
                field: "kpi.unit",
                reason: "too long",
            });
        }
        Ok(())
    }
}

#![forbid(unsafe_code)]

use qms_kernel_contracts::kpi::{Kpi, MetricValue, TargetDirection};
use qms_kernel_contracts::record::StatusTier;
use serde::Serialize;
use tracing::warn;

use crate::error::GovernanceError;

pub const GOAL_WARNING_PROGRESS_PERCENT: f64 = 75.0;

pub fn is_achieved(kpi: &Kpi) -> Result<Option<bool>, GovernanceError> {
    let (Some(current), Some(target)) = (&kpi.current_value, &kpi.target_value) else {
        return Ok(None);
    };
    let current = parse_metric("kpi.current_value", current)?;
    let target = parse_metric("kpi.target_value", target)?;
    Ok(Some(meets_target(current, target, kpi.target_direction)))
}

pub fn meets_target(actual: f64, target: f64, direction: TargetDirection) -> bool {
    match direction {
        TargetDirection::Decrease => actual <= target,
        TargetDirection::Increase => actual >= target,
    }
}

pub fn parse_metric(field: &'static str, value: &MetricValue) -> Result<f64, GovernanceError> {
    let parsed = match value {
        MetricValue::Number(n) => Some(*n),
        MetricValue::Text(s) => s.trim().parse::<f64>().ok(),
    };
    parsed
        .filter(|n| n.is_finite())
        .ok_or_else(|| GovernanceError::InvalidMetricValue {
            field,
            raw: value.raw(),
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementDisplay {
    Achieved,
    Missed,
    Indeterminate,
}

impl AchievementDisplay {
    pub fn for_kpi(kpi: &Kpi) -> Self {
        match is_achieved(kpi) {
            Ok(Some(true)) => Self::Achieved,
            Ok(Some(false)) => Self::Missed,
            Ok(None) => Self::Indeterminate,
            Err(err) => {
                warn!(error = %err, "kpi achievement degraded to indeterminate");
                Self::Indeterminate
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Achieved => "Başarılı",
            Self::Missed => "Başarısız",
            Self::Indeterminate => "N/A",
        }
    }

    pub fn tier(self) -> StatusTier {
        match self {
            Self::Achieved => StatusTier::Success,
            Self::Missed => StatusTier::Danger,
            Self::Indeterminate => StatusTier::Neutral,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalProgress {
    pub achieved: bool,
    pub progress_percent: f64,
    pub deviation_percent: f64,
    pub tier: StatusTier,
}

/// Year-to-date goal evaluation used by the quality goals panel.
pub fn goal_progress(actual: f64, target: f64, direction: TargetDirection) -> GoalProgress {
    let achieved = meets_target(actual, target, direction);
    let progress_percent = if target > 0.0 {
        (actual / target * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };
    let deviation_percent = if target == 0.0 {
        0.0
    } else {
        match direction {
            TargetDirection::Increase => (actual - target) / target * 100.0,
            TargetDirection::Decrease => (target - actual) / target * 100.0,
        }
    };
    let tier = if achieved {
        StatusTier::Success
    } else if progress_percent >= GOAL_WARNING_PROGRESS_PERCENT {
        StatusTier::Warning
    } else {
        StatusTier::Danger
    };
    GoalProgress {
        achieved,
        progress_percent,
        deviation_percent,
        tier,
    }
}

#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use qms_kernel_contracts::sla::{SlaCategory, SlaState};
use qms_kernel_contracts::ContractViolation;
use serde::Serialize;

use crate::error::GovernanceError;

pub const SLA_MIN_DAYS: u32 = 1;
pub const SLA_MAX_DAYS: u32 = 365;

pub const STANDARD_SLA_DAYS: [(SlaCategory, u32); 3] = [
    (SlaCategory::Df, 30),
    (SlaCategory::EightD, 60),
    (SlaCategory::Mdi, 15),
];

/// Allowed resolution time per record category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlaTable {
    days: BTreeMap<SlaCategory, u32>,
}

impl SlaTable {
    pub fn standard() -> Self {
        Self {
            days: STANDARD_SLA_DAYS.into_iter().collect(),
        }
    }

    /// Every category must be covered and every duration must be within
    /// `SLA_MIN_DAYS..=SLA_MAX_DAYS`.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (SlaCategory, u32)>,
    ) -> Result<Self, ContractViolation> {
        let days: BTreeMap<SlaCategory, u32> = entries.into_iter().collect();
        for category in SlaCategory::ALL {
            let Some(d) = days.get(&category) else {
                return Err(ContractViolation::InvalidValue {
                    field: "sla_table.entries",
                    reason: "every SLA category must have an entry",
                });
            };
            if !(SLA_MIN_DAYS..=SLA_MAX_DAYS).contains(d) {
                return Err(ContractViolation::InvalidRange {
                    field: "sla_table.entries[].days",
                    min: SLA_MIN_DAYS as f64,
                    max: SLA_MAX_DAYS as f64,
                    got: *d as f64,
                });
            }
        }
        Ok(Self { days })
    }

    pub fn lookup(&self, category: &str) -> Result<u32, GovernanceError> {
        let parsed = SlaCategory::parse(category)
            .ok_or_else(|| GovernanceError::UnknownCategory(category.to_string()))?;
        self.lookup_category(parsed)
    }

    pub fn lookup_category(&self, category: SlaCategory) -> Result<u32, GovernanceError> {
        self.days
            .get(&category)
            .copied()
            .ok_or_else(|| GovernanceError::UnknownCategory(category.as_str().to_string()))
    }

    /// Due instant stamped on a record of `category` opened at `opened_at`.
    pub fn due_at(
        &self,
        category: &str,
        opened_at: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, GovernanceError> {
        let days = self.lookup(category)?;
        Ok(opened_at + Duration::days(i64::from(days)))
    }

    pub fn entries(&self) -> impl Iterator<Item = (SlaCategory, u32)> + '_ {
        self.days.iter().map(|(c, d)| (*c, *d))
    }
}

impl Default for SlaTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SlaComplianceSummary {
    pub total: usize,
    pub on_time: usize,
    pub at_risk: usize,
    pub overdue: usize,
    pub pending: usize,
}

impl SlaComplianceSummary {
    pub fn from_states(states: impl IntoIterator<Item = SlaState>) -> Self {
        let mut out = Self::default();
        for state in states {
            out.total += 1;
            match state {
                SlaState::OnTime => out.on_time += 1,
                SlaState::AtRisk => out.at_risk += 1,
                SlaState::Overdue => out.overdue += 1,
                SlaState::Pending => out.pending += 1,
            }
        }
        out
    }

    /// Share of on-time records in percent; 0 for an empty set.
    pub fn compliance_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.on_time as f64 / self.total as f64 * 100.0
    }
}

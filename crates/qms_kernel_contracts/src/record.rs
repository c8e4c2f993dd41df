#![forbid(unsafe_code)]

use serde::{Deserialize, Deserializer, Serialize};

use crate::{ContractViolation, Validate};

/// Stored lifecycle status of a governed record (non-conformity, corrective
/// action, quality-cost entry, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RecordStatus {
    Draft,
    Open,
    InProgress,
    PendingApproval,
    Completed,
    Closed,
    Rejected,
    Cancelled,
}

impl RecordStatus {
    pub const ALL: [RecordStatus; 8] = [
        RecordStatus::Draft,
        RecordStatus::Open,
        RecordStatus::InProgress,
        RecordStatus::PendingApproval,
        RecordStatus::Completed,
        RecordStatus::Closed,
        RecordStatus::Rejected,
        RecordStatus::Cancelled,
    ];

    /// Accepts the canonical codes and the labels persisted by the dashboard forms.
    pub fn parse(raw: &str) -> Result<Self, ContractViolation> {
        match raw.trim() {
            "Draft" | "Taslak" => Ok(Self::Draft),
            "Open" | "Açık" => Ok(Self::Open),
            "InProgress" | "İşlemde" | "Devam Ediyor" => Ok(Self::InProgress),
            "PendingApproval" | "Onay Bekliyor" => Ok(Self::PendingApproval),
            "Completed" | "Tamamlandı" => Ok(Self::Completed),
            "Closed" | "Kapatıldı" | "Kapalı" => Ok(Self::Closed),
            "Rejected" | "Reddedildi" => Ok(Self::Rejected),
            "Cancelled" | "İptal" | "İptal Edildi" => Ok(Self::Cancelled),
            "" => Err(ContractViolation::InvalidValue {
                field: "record.status",
                reason: "must not be empty",
            }),
            _ => Err(ContractViolation::InvalidValue {
                field: "record.status",
                reason: "unrecognized record status",
            }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Open => "Open",
            Self::InProgress => "InProgress",
            Self::PendingApproval => "PendingApproval",
            Self::Completed => "Completed",
            Self::Closed => "Closed",
            Self::Rejected => "Rejected",
            Self::Cancelled => "Cancelled",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Draft => "Taslak",
            Self::Open => "Açık",
            Self::InProgress => "İşlemde",
            Self::PendingApproval => "Onay Bekliyor",
            Self::Completed => "Tamamlandı",
            Self::Closed => "Kapatıldı",
            Self::Rejected => "Reddedildi",
            Self::Cancelled => "İptal",
        }
    }

    /// Terminal records are finished and never annotated as overdue.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Completed | Self::Closed | Self::Rejected | Self::Cancelled
        )
    }

    pub fn tier(self) -> StatusTier {
        match self {
            Self::Draft => StatusTier::Info,
            Self::Open => StatusTier::Neutral,
            Self::InProgress => StatusTier::Warning,
            Self::PendingApproval => StatusTier::AwaitingDecision,
            Self::Completed | Self::Closed => StatusTier::Success,
            Self::Rejected | Self::Cancelled => StatusTier::Danger,
        }
    }
}

impl TryFrom<String> for RecordStatus {
    type Error = ContractViolation;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RecordStatus> for String {
    fn from(value: RecordStatus) -> Self {
        value.as_str().to_string()
    }
}

/// Visual category a consuming UI maps to badge styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTier {
    Neutral,
    Success,
    Warning,
    Danger,
    Info,
    AwaitingDecision,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayStatus {
    Unknown,
    Overdue,
    Stored(RecordStatus),
}

impl DisplayStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Bilinmiyor",
            Self::Overdue => "Gecikmiş",
            Self::Stored(status) => status.label(),
        }
    }

    pub fn tier(self) -> StatusTier {
        match self {
            Self::Unknown => StatusTier::Neutral,
            Self::Overdue => StatusTier::Danger,
            Self::Stored(status) => status.tier(),
        }
    }

    pub fn is_overdue(self) -> bool {
        matches!(self, Self::Overdue)
    }
}

/// Read-only view of a record as loaded by a collaborator. `due_at` is kept
/// raw; a malformed value means "no SLA clock", never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernedRecord {
    #[serde(default, deserialize_with = "blank_status_as_none")]
    pub status: Option<RecordStatus>,
    #[serde(default, alias = "due_date", alias = "dueAt")]
    pub due_at: Option<String>,
}

impl GovernedRecord {
    pub fn v1(status: Option<RecordStatus>, due_at: Option<String>) -> Self {
        Self { status, due_at }
    }
}

impl Validate for GovernedRecord {
    fn validate(&self) -> Result<(), ContractViolation> {
        if let Some(due_at) = &self.due_at {
            if due_at.len() > 64 {
                return Err(ContractViolation::InvalidValue {
                    field: "governed_record.due_at",
                    reason: "too long",
                });
            }
        }
        Ok(())
    }
}

// Blank stored text reads as a missing status; unrecognized text still fails.
fn blank_status_as_none<'de, D>(deserializer: D) -> Result<Option<RecordStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => RecordStatus::parse(v)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_record_01_stored_labels_parse_to_closed_set() {
        assert_eq!(RecordStatus::parse("Kapatıldı").unwrap(), RecordStatus::Closed);
        assert_eq!(RecordStatus::parse("Kapalı").unwrap(), RecordStatus::Closed);
        assert_eq!(
            RecordStatus::parse("Devam Ediyor").unwrap(),
            RecordStatus::InProgress
        );
        assert_eq!(
            RecordStatus::parse("PendingApproval").unwrap(),
            RecordStatus::PendingApproval
        );
        assert!(RecordStatus::parse("Beklemede").is_err());
        assert!(RecordStatus::parse("  ").is_err());
    }

    #[test]
    fn at_record_02_canonical_code_round_trips_through_parse() {
        for status in RecordStatus::ALL {
            assert_eq!(RecordStatus::parse(status.as_str()).unwrap(), status);
            assert_eq!(RecordStatus::parse(status.label()).unwrap(), status);
        }
    }

    #[test]
    fn at_record_03_terminal_set_is_completed_closed_rejected_cancelled() {
        let terminal: Vec<_> = RecordStatus::ALL
            .into_iter()
            .filter(|s| s.is_terminal())
            .collect();
        assert_eq!(
            terminal,
            vec![
                RecordStatus::Completed,
                RecordStatus::Closed,
                RecordStatus::Rejected,
                RecordStatus::Cancelled
            ]
        );
    }

    #[test]
    fn at_record_04_tiers_encode_business_meaning() {
        assert_eq!(RecordStatus::InProgress.tier(), StatusTier::Warning);
        assert_eq!(
            RecordStatus::PendingApproval.tier(),
            StatusTier::AwaitingDecision
        );
        assert_eq!(DisplayStatus::Overdue.tier(), StatusTier::Danger);
        assert_eq!(DisplayStatus::Unknown.label(), "Bilinmiyor");
        assert_eq!(DisplayStatus::Overdue.label(), "Gecikmiş");
    }

    #[test]
    fn at_record_05_json_boundary_rejects_unknown_status() {
        let ok: GovernedRecord =
            serde_json::from_str(r#"{"status":"Açık","due_date":"2026-01-10"}"#).unwrap();
        assert_eq!(ok.status, Some(RecordStatus::Open));
        assert_eq!(ok.due_at.as_deref(), Some("2026-01-10"));

        let missing: GovernedRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.status, None);

        assert!(serde_json::from_str::<GovernedRecord>(r#"{"status":"Whatever"}"#).is_err());
    }

    #[test]
    fn at_record_06_blank_status_reads_as_missing_without_failing_batch() {
        let batch: Vec<GovernedRecord> = serde_json::from_str(
            r#"[{"status":"","due_date":"2020-01-01"},{"status":"   "},{"status":"Open"}]"#,
        )
        .unwrap();
        assert_eq!(batch.len(), 3);
        assert_eq!(batch[0].status, None);
        assert_eq!(batch[1].status, None);
        assert_eq!(batch[2].status, Some(RecordStatus::Open));
        assert!(RecordStatus::parse("").is_err());
    }
}

#![forbid(unsafe_code)]

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use qms_kernel_contracts::record::{DisplayStatus, GovernedRecord};
use tracing::debug;

// Terminal check precedes the overdue check.
pub fn effective_status(record: &GovernedRecord, now: DateTime<Utc>) -> DisplayStatus {
    let Some(status) = record.status else {
        return DisplayStatus::Unknown;
    };
    if status.is_terminal() {
        return DisplayStatus::Stored(status);
    }
    if let Some(due_at) = record.due_at.as_deref().and_then(parse_due_at) {
        if now > due_at {
            return DisplayStatus::Overdue;
        }
    }
    DisplayStatus::Stored(status)
}

pub fn overdue_count<'a>(
    records: impl IntoIterator<Item = &'a GovernedRecord>,
    now: DateTime<Utc>,
) -> usize {
    records
        .into_iter()
        .filter(|r| effective_status(r, now).is_overdue())
        .count()
}

/// Naive timestamps and bare dates are read as UTC.
pub fn parse_due_at(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%#z") {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(Utc.from_utc_datetime(&ndt));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|ndt| Utc.from_utc_datetime(&ndt));
    }
    debug!(due_at = raw, "unparseable due date treated as no SLA clock");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use qms_kernel_contracts::record::{RecordStatus, StatusTier};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap()
    }

    fn record(status: Option<RecordStatus>, due_at: Option<&str>) -> GovernedRecord {
        GovernedRecord::v1(status, due_at.map(str::to_string))
    }

    #[test]
    fn at_status_01_missing_status_is_unknown() {
        let out = effective_status(&record(None, Some("2020-01-01")), now());
        assert_eq!(out, DisplayStatus::Unknown);
        assert_eq!(out.tier(), StatusTier::Neutral);
    }

    #[test]
    fn at_status_02_terminal_status_is_never_overdue() {
        for status in [
            RecordStatus::Closed,
            RecordStatus::Rejected,
            RecordStatus::Completed,
            RecordStatus::Cancelled,
        ] {
            let out = effective_status(&record(Some(status), Some("2020-01-01")), now());
            assert_eq!(out, DisplayStatus::Stored(status));
        }
    }

    #[test]
    fn at_status_03_past_due_open_record_is_overdue() {
        let out = effective_status(
            &record(Some(RecordStatus::InProgress), Some("2026-06-15T11:59:59Z")),
            now(),
        );
        assert_eq!(out, DisplayStatus::Overdue);
        assert_eq!(out.label(), "Gecikmiş");
        assert_eq!(out.tier(), StatusTier::Danger);
    }

    #[test]
    fn at_status_04_due_exactly_now_is_not_overdue() {
        let out = effective_status(
            &record(Some(RecordStatus::Open), Some("2026-06-15T12:00:00Z")),
            now(),
        );
        assert_eq!(out, DisplayStatus::Stored(RecordStatus::Open));
    }

    #[test]
    fn at_status_05_malformed_due_date_means_no_clock() {
        for raw in ["", "  ", "next week", "2026-13-45", "15.06.2020"] {
            let out = effective_status(&record(Some(RecordStatus::Open), Some(raw)), now());
            assert_eq!(out, DisplayStatus::Stored(RecordStatus::Open), "raw={raw:?}");
        }
    }

    #[test]
    fn at_status_06_due_date_formats_from_backend_parse() {
        let expected = Utc.with_ymd_and_hms(2026, 1, 10, 9, 30, 0).unwrap();
        assert_eq!(parse_due_at("2026-01-10T09:30:00Z"), Some(expected));
        assert_eq!(parse_due_at("2026-01-10T12:30:00+03:00"), Some(expected));
        assert_eq!(parse_due_at("2026-01-10 09:30:00+00"), Some(expected));
        assert_eq!(parse_due_at("2026-01-10T09:30:00"), Some(expected));
        assert_eq!(parse_due_at("2026-01-10 09:30:00"), Some(expected));
        assert_eq!(parse_due_at("2026-01-10 09:30:00.000"), Some(expected));
        assert_eq!(
            parse_due_at("2026-01-10"),
            Some(Utc.with_ymd_and_hms(2026, 1, 10, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn at_status_09_space_separated_naive_timestamp_runs_sla_clock() {
        let out = effective_status(
            &record(Some(RecordStatus::Open), Some("2026-06-15 11:00:00")),
            now(),
        );
        assert_eq!(out, DisplayStatus::Overdue);
    }

    #[test]
    fn at_status_10_blank_stored_status_renders_unknown() {
        let r: GovernedRecord =
            serde_json::from_str(r#"{"status":"","due_date":"2020-01-01"}"#).unwrap();
        assert_eq!(effective_status(&r, now()), DisplayStatus::Unknown);
    }

    #[test]
    fn at_status_07_pending_approval_keeps_awaiting_decision_tier() {
        let out = effective_status(
            &record(Some(RecordStatus::PendingApproval), Some("2027-01-01")),
            now(),
        );
        assert_eq!(out.tier(), StatusTier::AwaitingDecision);
        assert_eq!(out.label(), "Onay Bekliyor");
    }

    #[test]
    fn at_status_08_overdue_count_matches_per_record_results() {
        let records = vec![
            record(Some(RecordStatus::Open), Some("2026-01-01")),
            record(Some(RecordStatus::Closed), Some("2026-01-01")),
            record(Some(RecordStatus::InProgress), Some("2026-12-01")),
            record(Some(RecordStatus::PendingApproval), Some("2026-06-14")),
            record(Some(RecordStatus::Open), None),
            record(None, Some("2026-01-01")),
        ];
        assert_eq!(overdue_count(&records, now()), 2);
        let mut reversed = records.clone();
        reversed.reverse();
        assert_eq!(overdue_count(&reversed, now()), 2);
    }

    fn any_status() -> impl Strategy<Value = RecordStatus> {
        proptest::sample::select(RecordStatus::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_terminal_status_is_returned_unchanged(
            status in any_status(),
            due_offset_secs in -10_000_000_i64..10_000_000,
        ) {
            prop_assume!(status.is_terminal());
            let due = (now() + chrono::Duration::seconds(due_offset_secs)).to_rfc3339();
            let out = effective_status(&record(Some(status), Some(&due)), now());
            prop_assert_eq!(out, DisplayStatus::Stored(status));
        }

        #[test]
        fn prop_past_due_non_terminal_is_overdue(
            status in any_status(),
            secs_before in 1_i64..100_000_000,
        ) {
            prop_assume!(!status.is_terminal());
            let due = (now() - chrono::Duration::seconds(secs_before)).to_rfc3339();
            let out = effective_status(&record(Some(status), Some(&due)), now());
            prop_assert_eq!(out, DisplayStatus::Overdue);
        }

        #[test]
        fn prop_unparseable_due_date_is_never_overdue(
            status in any_status(),
            junk in "[a-z ]{0,24}",
        ) {
            let with_junk = effective_status(&record(Some(status), Some(&junk)), now());
            let without = effective_status(&record(Some(status), None), now());
            prop_assert!(!with_junk.is_overdue());
            prop_assert!(!without.is_overdue());
            prop_assert_eq!(with_junk, without);
        }

        #[test]
        fn prop_evaluation_is_idempotent(
            status in any_status(),
            due_offset_secs in -1_000_000_i64..1_000_000,
        ) {
            let due = (now() + chrono::Duration::seconds(due_offset_secs)).to_rfc3339();
            let r = record(Some(status), Some(&due));
            prop_assert_eq!(effective_status(&r, now()), effective_status(&r, now()));
        }
    }
}

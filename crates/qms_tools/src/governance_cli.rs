#![forbid(unsafe_code)]

use chrono::{DateTime, Utc};
use qms_engines::duration::format_duration_text;
use qms_engines::kpi::{is_achieved, AchievementDisplay};
use qms_engines::status::{effective_status, parse_due_at};
use qms_engines::GovernanceConfig;
use qms_kernel_contracts::access::{PermissionsMap, QmsModule};
use qms_kernel_contracts::kpi::{Kpi, MetricValue, TargetDirection};
use qms_kernel_contracts::record::{GovernedRecord, RecordStatus};
use qms_kernel_contracts::sla::SlaCategory;
use tracing::debug;

pub const USAGE: &str =
    "usage: qms <status|sla|access|kpi|duration> ...\n  \
     qms status <status> [due_at]\n  \
     qms sla <category> [opened_at]\n  \
     qms access <module> <email>   (permissions JSON on stdin)\n  \
     qms kpi <current> <target> [increase|decrease]\n  \
     qms duration <ms>";

/// Runs one CLI command and returns its single output line.
pub fn execute_governance_command(
    config: &GovernanceConfig,
    args: &[String],
    now: DateTime<Utc>,
    stdin_json: Option<&str>,
) -> Result<String, String> {
    let subcommand = args.first().map(String::as_str).ok_or_else(|| USAGE.to_string())?;
    debug!(subcommand, "dispatching governance command");
    let arg = |i: usize, what: &str| {
        args.get(i)
            .map(String::as_str)
            .ok_or_else(|| format!("missing {what}\n{USAGE}"))
    };
    match subcommand {
        "status" => {
            let status = RecordStatus::parse(arg(1, "status")?).map_err(|e| e.to_string())?;
            let record = GovernedRecord::v1(Some(status), args.get(2).cloned());
            let out = effective_status(&record, now);
            Ok(format!("{} ({:?})", out.label(), out.tier()))
        }
        "sla" => {
            let category = arg(1, "category")?;
            let days = config.sla_table.lookup(category).map_err(|e| {
                format!("{e}. allowed: {}", SlaCategory::allowed_codes().join(", "))
            })?;
            match args.get(2) {
                Some(raw) => {
                    let opened_at = parse_due_at(raw)
                        .ok_or_else(|| format!("invalid opened_at timestamp: {raw}"))?;
                    let due = config
                        .sla_table
                        .due_at(category, opened_at)
                        .map_err(|e| e.to_string())?;
                    Ok(format!("{days} days, due {}", due.to_rfc3339()))
                }
                None => Ok(format!("{days} days")),
            }
        }
        "access" => {
            let module = QmsModule::parse(arg(1, "module")?).map_err(|e| e.to_string())?;
            let email = arg(2, "email")?;
            let permissions: PermissionsMap = match stdin_json.map(str::trim) {
                Some(raw) if !raw.is_empty() => serde_json::from_str(raw)
                    .map_err(|e| format!("invalid permissions JSON: {e}"))?,
                _ => PermissionsMap::new(),
            };
            let caps = config
                .permission_resolver()
                .resolve(email, &permissions, module.as_str());
            serde_json::to_string(&caps).map_err(|e| e.to_string())
        }
        "kpi" => {
            let current = MetricValue::Text(arg(1, "current value")?.to_string());
            let target = MetricValue::Text(arg(2, "target value")?.to_string());
            let direction = match args.get(3).map(String::as_str) {
                None | Some("increase") => TargetDirection::Increase,
                Some("decrease") => TargetDirection::Decrease,
                Some(other) => {
                    return Err(format!(
                        "unknown target direction '{other}'. expected increase or decrease"
                    ))
                }
            };
            let kpi = Kpi::v1(Some(current), Some(target), direction, "");
            is_achieved(&kpi).map_err(|e| e.to_string())?;
            Ok(AchievementDisplay::for_kpi(&kpi).label().to_string())
        }
        "duration" => Ok(format_duration_text(arg(1, "milliseconds")?)),
        _ => Err(format!("unknown subcommand: {subcommand}\n{USAGE}")),
    }
}

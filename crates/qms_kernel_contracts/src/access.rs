#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::common::{validate_id, validate_text};
use crate::{ContractViolation, Validate};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionLevel {
    #[default]
    None,
    Read,
    Full,
}

impl PermissionLevel {
    pub fn parse(raw: &str) -> Result<Self, ContractViolation> {
        match raw.trim() {
            "none" => Ok(Self::None),
            "read" => Ok(Self::Read),
            "full" => Ok(Self::Full),
            _ => Err(ContractViolation::InvalidValue {
                field: "permission_level",
                reason: "must be one of none, read, full",
            }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Read => "read",
            Self::Full => "full",
        }
    }
}

/// Module name -> stored level. A missing key means `none`.
pub type PermissionsMap = BTreeMap<String, PermissionLevel>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QmsModule {
    Dashboard,
    Kpi,
    Nonconformity,
    #[serde(rename = "df-8d")]
    Df8d,
    QualityCost,
    CustomerComplaints,
    IncomingQuality,
    ProcessControl,
    ProducedVehicles,
    DynamicBalance,
    SupplierQuality,
    SupplierAudit,
    InternalAudit,
    Deviation,
    AuditLogs,
    Equipment,
    Document,
    Wps,
    Kaizen,
    Training,
    Polyvalence,
    Benchmark,
    Quarantine,
    Tasks,
    Settings,
}

impl QmsModule {
    pub const ALL: [QmsModule; 25] = [
        QmsModule::Dashboard,
        QmsModule::Kpi,
        QmsModule::Nonconformity,
        QmsModule::Df8d,
        QmsModule::QualityCost,
        QmsModule::CustomerComplaints,
        QmsModule::IncomingQuality,
        QmsModule::ProcessControl,
        QmsModule::ProducedVehicles,
        QmsModule::DynamicBalance,
        QmsModule::SupplierQuality,
        QmsModule::SupplierAudit,
        QmsModule::InternalAudit,
        QmsModule::Deviation,
        QmsModule::AuditLogs,
        QmsModule::Equipment,
        QmsModule::Document,
        QmsModule::Wps,
        QmsModule::Kaizen,
        QmsModule::Training,
        QmsModule::Polyvalence,
        QmsModule::Benchmark,
        QmsModule::Quarantine,
        QmsModule::Tasks,
        QmsModule::Settings,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Kpi => "kpi",
            Self::Nonconformity => "nonconformity",
            Self::Df8d => "df-8d",
            Self::QualityCost => "quality-cost",
            Self::CustomerComplaints => "customer-complaints",
            Self::IncomingQuality => "incoming-quality",
            Self::ProcessControl => "process-control",
            Self::ProducedVehicles => "produced-vehicles",
            Self::DynamicBalance => "dynamic-balance",
            Self::SupplierQuality => "supplier-quality",
            Self::SupplierAudit => "supplier-audit",
            Self::InternalAudit => "internal-audit",
            Self::Deviation => "deviation",
            Self::AuditLogs => "audit-logs",
            Self::Equipment => "equipment",
            Self::Document => "document",
            Self::Wps => "wps",
            Self::Kaizen => "kaizen",
            Self::Training => "training",
            Self::Polyvalence => "polyvalence",
            Self::Benchmark => "benchmark",
            Self::Quarantine => "quarantine",
            Self::Tasks => "tasks",
            Self::Settings => "settings",
        }
    }

    pub fn parse(raw: &str) -> Result<Self, ContractViolation> {
        validate_id("qms_module", raw, 32)?;
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == raw)
            .ok_or(ContractViolation::InvalidValue {
                field: "qms_module",
                reason: "unrecognized module id",
            })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capabilities {
    pub can_read: bool,
    pub can_write: bool,
    pub can_delete: bool,
    pub has_full_access: bool,
}

impl Capabilities {
    pub fn all() -> Self {
        Self {
            can_read: true,
            can_write: true,
            can_delete: true,
            has_full_access: true,
        }
    }

    pub fn none() -> Self {
        Self::default()
    }
}

/// Identity of the process-wide override account.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SuperUserEmail(String);

impl SuperUserEmail {
    pub fn new(email: impl Into<String>) -> Result<Self, ContractViolation> {
        let v = Self(email.into().trim().to_string());
        v.validate()?;
        Ok(v)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact comparison; the override never applies to a look-alike identity.
    pub fn matches(&self, candidate: &str) -> bool {
        candidate == self.0
    }
}

impl Validate for SuperUserEmail {
    fn validate(&self) -> Result<(), ContractViolation> {
        validate_email("super_user_email", &self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    #[serde(default)]
    pub permissions: PermissionsMap,
}

impl UserProfile {
    pub fn v1(email: impl Into<String>, permissions: PermissionsMap) -> Result<Self, ContractViolation> {
        let v = Self {
            email: email.into(),
            permissions,
        };
        v.validate()?;
        Ok(v)
    }

    pub fn level_for(&self, module_name: &str) -> PermissionLevel {
        self.permissions
            .get(module_name)
            .copied()
            .unwrap_or_default()
    }
}

impl Validate for UserProfile {
    fn validate(&self) -> Result<(), ContractViolation> {
        validate_email("user_profile.email", &self.email)?;
        for module_name in self.permissions.keys() {
            validate_id("user_profile.permissions[]", module_name, 32)?;
        }
        Ok(())
    }
}

/// Starting points offered when an administrator creates an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionTemplate {
    Admin,
    Viewer,
    Operator,
}

impl PermissionTemplate {
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Yönetici",
            Self::Viewer => "Görüntüleyici",
            Self::Operator => "Operatör",
        }
    }

    pub fn level_for(self, module: QmsModule) -> PermissionLevel {
        match self {
            Self::Admin => PermissionLevel::Full,
            Self::Viewer => PermissionLevel::Read,
            Self::Operator => match module {
                QmsModule::Nonconformity
                | QmsModule::Df8d
                | QmsModule::CustomerComplaints
                | QmsModule::IncomingQuality
                | QmsModule::ProducedVehicles
                | QmsModule::DynamicBalance
                | QmsModule::Deviation
                | QmsModule::Kaizen
                | QmsModule::Quarantine
                | QmsModule::Tasks => PermissionLevel::Full,
                QmsModule::AuditLogs | QmsModule::Settings => PermissionLevel::None,
                _ => PermissionLevel::Read,
            },
        }
    }

    pub fn permissions(self) -> PermissionsMap {
        QmsModule::ALL
            .into_iter()
            .map(|m| (m.as_str().to_string(), self.level_for(m)))
            .collect()
    }
}

fn validate_email(field: &'static str, s: &str) -> Result<(), ContractViolation> {
    validate_text(field, s, 254)?;
    let Some((local, domain)) = s.trim().split_once('@') else {
        return Err(ContractViolation::InvalidValue {
            field,
            reason: "must contain '@'",
        });
    };
    if local.is_empty() || domain.is_empty() {
        return Err(ContractViolation::InvalidValue {
            field,
            reason: "must have local part and domain",
        });
    }
    Ok(())
}

#![forbid(unsafe_code)]

use std::env;

use qms_kernel_contracts::access::SuperUserEmail;
use qms_kernel_contracts::ContractViolation;
use tracing::{debug, warn};

use crate::permission::PermissionResolver;
use crate::sla_table::SlaTable;

pub const SUPER_USER_EMAIL_ENV: &str = "QMS_SUPER_USER_EMAIL";

/// Process-wide governance settings, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GovernanceConfig {
    pub super_user_email: Option<SuperUserEmail>,
    pub sla_table: SlaTable,
}

impl GovernanceConfig {
    pub fn mvp_v1() -> Self {
        Self {
            super_user_email: None,
            sla_table: SlaTable::standard(),
        }
    }

    pub fn from_env() -> Self {
        Self::from_env_value(env::var(SUPER_USER_EMAIL_ENV).ok())
    }

    fn from_env_value(raw: Option<String>) -> Self {
        let super_user_email = match raw.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
            None => {
                debug!("{SUPER_USER_EMAIL_ENV} unset; no super-user override");
                None
            }
            Some(v) => match SuperUserEmail::new(v) {
                Ok(email) => Some(email),
                Err(err) => {
                    warn!(error = %err, "ignoring invalid {SUPER_USER_EMAIL_ENV}");
                    None
                }
            },
        };
        Self {
            super_user_email,
            ..Self::mvp_v1()
        }
    }

    pub fn with_super_user(mut self, email: &str) -> Result<Self, ContractViolation> {
        self.super_user_email = Some(SuperUserEmail::new(email)?);
        Ok(self)
    }

    pub fn with_sla_table(mut self, sla_table: SlaTable) -> Self {
        self.sla_table = sla_table;
        self
    }

    pub fn permission_resolver(&self) -> PermissionResolver {
        PermissionResolver::new(self.super_user_email.clone())
    }
}

impl Default for GovernanceConfig {
    fn default() -> Self {
        Self::mvp_v1()
    }
}

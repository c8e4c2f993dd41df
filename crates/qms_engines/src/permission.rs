#![forbid(unsafe_code)]

use qms_kernel_contracts::access::{
    Capabilities, PermissionLevel, PermissionsMap, QmsModule, SuperUserEmail, UserProfile,
};

/// The configured super user short-circuits every lookup. Memoized results
/// must be keyed on the whole (user, permissions, module) triple.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionResolver {
    super_user: Option<SuperUserEmail>,
}

impl PermissionResolver {
    pub fn new(super_user: Option<SuperUserEmail>) -> Self {
        Self { super_user }
    }

    pub fn is_super_user(&self, user_email: &str) -> bool {
        self.super_user
            .as_ref()
            .is_some_and(|su| su.matches(user_email))
    }

    pub fn resolve(
        &self,
        user_email: &str,
        permissions: &PermissionsMap,
        module_name: &str,
    ) -> Capabilities {
        if self.is_super_user(user_email) {
            return Capabilities::all();
        }
        let level = permissions.get(module_name).copied().unwrap_or_default();
        capabilities_for_level(level)
    }

    pub fn resolve_module(&self, profile: &UserProfile, module: QmsModule) -> Capabilities {
        self.resolve(&profile.email, &profile.permissions, module.as_str())
    }

    pub fn readable_modules(&self, profile: &UserProfile) -> Vec<QmsModule> {
        QmsModule::ALL
            .into_iter()
            .filter(|m| self.resolve_module(profile, *m).can_read)
            .collect()
    }
}

/// `read` grants write (create/update) as well; only `full` grants delete.
pub fn capabilities_for_level(level: PermissionLevel) -> Capabilities {
    let has_full_access = level == PermissionLevel::Full;
    let readable = matches!(level, PermissionLevel::Full | PermissionLevel::Read);
    Capabilities {
        can_read: readable,
        can_write: readable,
        can_delete: has_full_access,
        has_full_access,
    }
}

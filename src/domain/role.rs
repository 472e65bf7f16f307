use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::Route;

/// Portal user roles. Each role owns an independent session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Worker,
    Employer,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Worker, Role::Employer, Role::Admin];

    /// Key under which the role's session blob is persisted.
    pub fn storage_key(self) -> &'static str {
        match self {
            Role::Worker => "mlgms_session",
            Role::Employer => "mlgms_employer_session",
            Role::Admin => "mlgms_admin_session",
        }
    }

    /// Route a guard redirects to when the role has no session.
    pub fn login_route(self) -> Route {
        match self {
            Role::Worker => Route::Login,
            Role::Employer => Route::EmployerLogin,
            Role::Admin => Route::AdminLogin,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Worker => "worker",
            Role::Employer => "employer",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

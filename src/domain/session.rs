//! Persisted per-role session records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Role;

/// Worker summary returned by `/login` and kept in the worker session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerSummary {
    pub id: i64,
    pub migrant_id: String,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub skill: Option<String>,
}

/// Employer account returned by `/employers/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployerAccount {
    pub id: i64,
    pub employer_id: String,
    pub company_name: String,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub is_verified: Option<String>,
}

/// Administrator account returned by `/admin/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminAccount {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionUser {
    Worker(WorkerSummary),
    Employer(EmployerAccount),
    Admin(AdminAccount),
}

/// One role's session: bearer token (if the server issued one) plus the
/// user summary captured at login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub token: Option<String>,
    pub user: SessionUser,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn worker(token: impl Into<String>, summary: WorkerSummary) -> Self {
        Self {
            token: Some(token.into()),
            user: SessionUser::Worker(summary),
            created_at: Utc::now(),
        }
    }

    pub fn employer(token: Option<String>, account: EmployerAccount) -> Self {
        Self { token, user: SessionUser::Employer(account), created_at: Utc::now() }
    }

    pub fn admin(account: AdminAccount) -> Self {
        Self { token: None, user: SessionUser::Admin(account), created_at: Utc::now() }
    }

    pub fn role(&self) -> Role {
        match self.user {
            SessionUser::Worker(_) => Role::Worker,
            SessionUser::Employer(_) => Role::Employer,
            SessionUser::Admin(_) => Role::Admin,
        }
    }

    pub fn as_worker(&self) -> Option<&WorkerSummary> {
        match &self.user {
            SessionUser::Worker(summary) => Some(summary),
            _ => None,
        }
    }

    pub fn as_employer(&self) -> Option<&EmployerAccount> {
        match &self.user {
            SessionUser::Employer(account) => Some(account),
            _ => None,
        }
    }

    pub fn as_admin(&self) -> Option<&AdminAccount> {
        match &self.user {
            SessionUser::Admin(account) => Some(account),
            _ => None,
        }
    }

    /// Display name for status output.
    pub fn display_name(&self) -> String {
        match &self.user {
            SessionUser::Worker(w) => format!("{} ({})", w.name, w.migrant_id),
            SessionUser::Employer(e) => format!("{} ({})", e.company_name, e.employer_id),
            SessionUser::Admin(a) => a.name.clone().unwrap_or_else(|| a.username.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> WorkerSummary {
        WorkerSummary {
            id: 7,
            migrant_id: "MIG00007".into(),
            name: "Ravi Kumar".into(),
            phone: Some("9876543210".into()),
            skill: Some("mason".into()),
        }
    }

    #[test]
    fn role_follows_user_variant() {
        assert_eq!(Session::worker("tok", summary()).role(), Role::Worker);
        let admin = AdminAccount { id: 1, username: "admin".into(), name: None, role: None };
        assert_eq!(Session::admin(admin).role(), Role::Admin);
    }

    #[test]
    fn serializes_user_with_role_tag() {
        let session = Session::worker("tok", summary());
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["token"], "tok");
        assert_eq!(json["user"]["worker"]["migrant_id"], "MIG00007");

        let back: Session = serde_json::from_value(json).unwrap();
        assert_eq!(back, session);
    }

    #[test]
    fn admin_display_name_falls_back_to_username() {
        let admin = AdminAccount { id: 1, username: "root".into(), name: None, role: None };
        assert_eq!(Session::admin(admin).display_name(), "root");
    }
}

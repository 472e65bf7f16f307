//! Status labels and the CSS-style classes views tag rows with.

use serde::{Deserialize, Serialize};

/// Class for a complaint status as listed to the worker.
pub fn complaint_status_class(status: &str) -> &'static str {
    match status {
        "Pending" => "status-pending",
        "Resolved" => "status-resolved",
        _ => "",
    }
}

/// Class for an employer's activity status in the directory.
pub fn employer_status_class(status: &str) -> &'static str {
    if status == "Active" { "status-active" } else { "status-inactive" }
}

/// Class for an application status (worker, employer and admin lists).
pub fn application_status_class(status: &str) -> &'static str {
    match status.to_ascii_lowercase().as_str() {
        "pending" => "status-pending",
        "accepted" => "status-accepted",
        "rejected" => "status-rejected",
        _ => "",
    }
}

/// Class for a complaint row in the administrator's queue, where statuses
/// are stored lowercase with underscores.
pub fn review_status_class(status: &str) -> &'static str {
    match status.to_ascii_lowercase().as_str() {
        "pending" => "status-pending",
        "in_progress" => "status-progress",
        "resolved" => "status-resolved",
        "rejected" => "status-rejected",
        _ => "",
    }
}

/// Employer verification state as stored in `is_verified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Pending,
    Verified,
    Rejected,
}

impl VerificationStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "verified" => Some(Self::Verified),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Verified => "verified",
            Self::Rejected => "rejected",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Pending => "badge-pending",
            Self::Verified => "badge-verified",
            Self::Rejected => "badge-rejected",
        }
    }
}

/// Outcome a reviewer applies to a job application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Reject,
}

impl Decision {
    /// Path segment of the moderation endpoint.
    pub fn action(self) -> &'static str {
        match self {
            Decision::Accept => "accept",
            Decision::Reject => "reject",
        }
    }

    /// Status label the affected row takes after a successful call.
    pub fn resulting_status(self) -> &'static str {
        match self {
            Decision::Accept => "Accepted",
            Decision::Reject => "Rejected",
        }
    }
}

/// Outcome an administrator applies to an employer registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationDecision {
    Verify,
    Reject,
}

impl VerificationDecision {
    pub fn action(self) -> &'static str {
        match self {
            VerificationDecision::Verify => "verify",
            VerificationDecision::Reject => "reject",
        }
    }

    pub fn resulting_status(self) -> VerificationStatus {
        match self {
            VerificationDecision::Verify => VerificationStatus::Verified,
            VerificationDecision::Reject => VerificationStatus::Rejected,
        }
    }

    /// Activity status the server assigns alongside the verification outcome.
    pub fn resulting_activity(self) -> &'static str {
        match self {
            VerificationDecision::Verify => "active",
            VerificationDecision::Reject => "inactive",
        }
    }
}

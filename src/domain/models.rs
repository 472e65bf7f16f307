//! Read-only projections of server-side records.
//!
//! Every optional server field defaults when missing so that partially
//! populated replies still decode. Aggregate counts computed with SQL `SUM`
//! can arrive as numbers, numeric strings or `null`; see [`lenient`].

use serde::{Deserialize, Serialize};

/// Deserializers tolerant of the server's loosely typed numeric fields.
pub mod lenient {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Numeric {
        Int(u64),
        Float(f64),
        Text(String),
    }

    fn to_f64(value: Option<Numeric>) -> Option<f64> {
        match value? {
            Numeric::Int(n) => Some(n as f64),
            Numeric::Float(f) => Some(f),
            Numeric::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }

    /// Count that may be a number, numeric string or null (null → 0).
    pub fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        let value = Option::<Numeric>::deserialize(deserializer)?;
        Ok(to_f64(value).map(|f| f.max(0.0) as u32).unwrap_or(0))
    }

    /// Decimal that may be a number, numeric string or null (null → 0.0).
    pub fn decimal<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        let value = Option::<Numeric>::deserialize(deserializer)?;
        Ok(to_f64(value).unwrap_or(0.0))
    }

    /// Optional integer that may be a number, numeric string or null.
    pub fn optional_count<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<u32>, D::Error> {
        let value = Option::<Numeric>::deserialize(deserializer)?;
        Ok(to_f64(value).map(|f| f.max(0.0) as u32))
    }
}

/// Full worker profile from `/profile`, `/profile/update` and `/dashboard/current`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerProfile {
    pub id: i64,
    pub migrant_id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub aadhaar: Option<String>,
    pub skill: Option<String>,
    #[serde(deserialize_with = "lenient::optional_count")]
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub state: Option<String>,
    pub district: Option<String>,
    pub address: Option<String>,
    pub status: Option<String>,
    pub current_employer: Option<String>,
    pub work_location: Option<String>,
    pub registration_date: Option<String>,
}

/// Complaint counters shown on the worker dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplaintStats {
    #[serde(deserialize_with = "lenient::count")]
    pub total: u32,
    #[serde(deserialize_with = "lenient::count")]
    pub pending: u32,
    #[serde(deserialize_with = "lenient::count")]
    pub resolved: u32,
    #[serde(deserialize_with = "lenient::count")]
    pub in_progress: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecentComplaint {
    pub id: String,
    #[serde(rename = "type")]
    pub complaint_type: String,
    pub status: String,
    pub date: Option<String>,
}

/// A worker's own complaint from `/complaint/list`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Complaint {
    pub id: String,
    pub db_id: Option<i64>,
    #[serde(rename = "type")]
    pub complaint_type: String,
    pub description: String,
    pub status: String,
    pub employer_name: Option<String>,
    pub admin_remarks: Option<String>,
    pub date: Option<String>,
    pub created_at: Option<String>,
    pub resolved_at: Option<String>,
}

/// Employer directory entry from `/employers/list`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployerListing {
    pub id: i64,
    pub name: String,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub status: String,
    #[serde(deserialize_with = "lenient::decimal")]
    pub rating: f64,
    #[serde(deserialize_with = "lenient::count")]
    pub workers: u32,
}

/// Job posting from `/jobs/list` and the employer dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Job {
    pub id: i64,
    pub job_id: String,
    pub title: String,
    pub description: Option<String>,
    pub skill_required: Option<String>,
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient::decimal")]
    pub wage_per_day: f64,
    #[serde(deserialize_with = "lenient::optional_count")]
    pub duration_days: Option<u32>,
    #[serde(deserialize_with = "lenient::optional_count")]
    pub workers_needed: Option<u32>,
    pub status: Option<String>,
    pub employer_name: Option<String>,
    pub industry: Option<String>,
}

/// A worker's own job application from `/jobs/applications`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Application {
    pub id: i64,
    pub application_id: String,
    pub job_id: Option<i64>,
    pub job_title: String,
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient::decimal")]
    pub wage_per_day: f64,
    #[serde(deserialize_with = "lenient::optional_count")]
    pub duration_days: Option<u32>,
    pub employer_name: Option<String>,
    pub status: String,
    pub applied_at: Option<String>,
}

/// Application counters (worker stats and the admin dashboard tally).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationStats {
    #[serde(deserialize_with = "lenient::count")]
    pub total: u32,
    #[serde(deserialize_with = "lenient::count")]
    pub pending: u32,
    #[serde(deserialize_with = "lenient::count")]
    pub accepted: u32,
    #[serde(deserialize_with = "lenient::count")]
    pub rejected: u32,
}

/// An application as seen by a reviewer (admin or the posting employer).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationReview {
    pub id: i64,
    pub application_id: String,
    pub job_title: String,
    pub employer_name: Option<String>,
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient::decimal")]
    pub wage_per_day: f64,
    pub worker_name: String,
    pub migrant_id: Option<String>,
    pub phone: Option<String>,
    pub skill: Option<String>,
    pub status: String,
    pub applied_at: Option<String>,
}

/// Raw complaint row from `/admin/complaints`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminComplaint {
    pub id: i64,
    pub complaint_id: String,
    pub category: Option<String>,
    pub description: String,
    pub status: String,
    pub worker_name: Option<String>,
    pub migrant_id: Option<String>,
    pub phone: Option<String>,
    pub employer_name: Option<String>,
    pub admin_remarks: Option<String>,
    pub created_at: Option<String>,
    pub resolved_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplaintTally {
    #[serde(deserialize_with = "lenient::count")]
    pub total: u32,
    #[serde(deserialize_with = "lenient::count")]
    pub pending: u32,
    #[serde(deserialize_with = "lenient::count")]
    pub resolved: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationTally {
    #[serde(deserialize_with = "lenient::count")]
    pub total: u32,
    #[serde(deserialize_with = "lenient::count")]
    pub pending: u32,
    #[serde(deserialize_with = "lenient::count")]
    pub verified: u32,
    #[serde(deserialize_with = "lenient::count")]
    pub rejected: u32,
}

/// Portal-wide counters from `/admin/stats`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminStats {
    #[serde(deserialize_with = "lenient::count")]
    pub total_workers: u32,
    #[serde(deserialize_with = "lenient::count")]
    pub open_jobs: u32,
    pub applications: ApplicationStats,
    pub complaints: ComplaintTally,
    pub employers: VerificationTally,
}

/// Employer row from `/admin/employers`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminEmployer {
    pub id: i64,
    pub employer_id: String,
    pub company_name: String,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub gst_number: Option<String>,
    pub registration_number: Option<String>,
    pub address: Option<String>,
    pub status: Option<String>,
    pub is_verified: String,
    pub verification_notes: Option<String>,
    #[serde(deserialize_with = "lenient::decimal")]
    pub rating: f64,
    #[serde(deserialize_with = "lenient::count")]
    pub workers_count: u32,
    pub created_at: Option<String>,
}

/// Counters on the employer dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployerDashboardStats {
    #[serde(deserialize_with = "lenient::count")]
    pub total_jobs: u32,
    #[serde(deserialize_with = "lenient::count")]
    pub open_jobs: u32,
    #[serde(deserialize_with = "lenient::count")]
    pub total_applications: u32,
    #[serde(deserialize_with = "lenient::count")]
    pub pending_applications: u32,
}

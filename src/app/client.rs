//! Typed portal API client.
//!
//! Every reply shares the `{success, message, ...payload}` envelope; the
//! payload fields each endpoint adds are modelled as `*Payload` structs and
//! flattened into [`ApiReply`].

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::domain::forms::{
    AdminLoginForm, ComplaintForm, EmployerCredentials, EmployerRegistrationForm, JobPosting,
    ProfileEdit, WorkerCredentials, WorkerRegistrationForm,
};
use crate::domain::models::{
    AdminComplaint, AdminEmployer, AdminStats, Application, ApplicationReview, ApplicationStats,
    Complaint, ComplaintStats, EmployerDashboardStats, EmployerListing, Job, RecentComplaint,
    WorkerProfile,
};
use crate::domain::{
    AdminAccount, AppError, Decision, EmployerAccount, VerificationDecision, WorkerSummary,
};
use crate::ports::{ApiRequest, ApiTransport};

/// Reply envelope shared by every endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApiReply<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub payload: T,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NoPayload {}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WorkerRegistered {
    pub migrant_id: Option<String>,
    pub worker_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WorkerLoginPayload {
    pub session_id: Option<String>,
    pub worker: Option<WorkerSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardPayload {
    pub worker: Option<WorkerProfile>,
    pub stats: ComplaintStats,
    pub recent_complaints: Vec<RecentComplaint>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProfilePayload {
    pub worker: Option<WorkerProfile>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ComplaintFiled {
    pub complaint_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ComplaintsPayload {
    pub complaints: Vec<Complaint>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EmployersPayload {
    pub employers: Vec<EmployerListing>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct JobsPayload {
    pub jobs: Vec<Job>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppliedPayload {
    pub application_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApplicationsPayload {
    pub applications: Vec<Application>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApplicationStatsPayload {
    pub stats: ApplicationStats,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EmployerRegistered {
    pub employer_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EmployerLoginPayload {
    pub employer: Option<EmployerAccount>,
    pub session_id: Option<String>,
    pub verification_status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EmployerDashboardPayload {
    pub employer: Option<EmployerAccount>,
    pub stats: EmployerDashboardStats,
    pub jobs: Vec<Job>,
    pub applications: Vec<ApplicationReview>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct JobPosted {
    pub job_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AdminLoginPayload {
    pub admin: Option<AdminAccount>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AdminStatsPayload {
    pub stats: AdminStats,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReviewsPayload {
    pub applications: Vec<ApplicationReview>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AdminComplaintsPayload {
    pub complaints: Vec<AdminComplaint>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AdminEmployersPayload {
    pub employers: Vec<AdminEmployer>,
}

/// One typed method per portal endpoint.
#[derive(Debug, Clone)]
pub struct PortalClient<T: ApiTransport> {
    transport: T,
}

impl<T: ApiTransport> PortalClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn call<P: DeserializeOwned>(&self, request: ApiRequest) -> Result<ApiReply<P>, AppError> {
        let value = self.transport.send(&request)?;
        serde_json::from_value(value)
            .map_err(|e| AppError::parse_error(format!("reply from {}", request.path), e))
    }

    // Worker

    pub fn register_worker(
        &self,
        form: &WorkerRegistrationForm,
    ) -> Result<ApiReply<WorkerRegistered>, AppError> {
        self.call(ApiRequest::post("/register").json(form)?)
    }

    pub fn login_worker(
        &self,
        credentials: &WorkerCredentials,
    ) -> Result<ApiReply<WorkerLoginPayload>, AppError> {
        self.call(ApiRequest::post("/login").json(credentials)?)
    }

    pub fn logout_worker(&self) -> Result<ApiReply<NoPayload>, AppError> {
        self.call(ApiRequest::post("/logout"))
    }

    pub fn dashboard(&self) -> Result<ApiReply<DashboardPayload>, AppError> {
        self.call(ApiRequest::get("/dashboard/current"))
    }

    pub fn profile(&self) -> Result<ApiReply<ProfilePayload>, AppError> {
        self.call(ApiRequest::get("/profile"))
    }

    pub fn update_profile(&self, edit: &ProfileEdit) -> Result<ApiReply<ProfilePayload>, AppError> {
        self.call(ApiRequest::put("/profile/update").json(edit)?)
    }

    pub fn add_complaint(
        &self,
        form: &ComplaintForm,
    ) -> Result<ApiReply<ComplaintFiled>, AppError> {
        self.call(ApiRequest::post("/complaint/add").json(form)?)
    }

    pub fn complaints(&self) -> Result<ApiReply<ComplaintsPayload>, AppError> {
        self.call(ApiRequest::get("/complaint/list"))
    }

    pub fn employers(&self, status: Option<&str>) -> Result<ApiReply<EmployersPayload>, AppError> {
        self.call(ApiRequest::get("/employers/list").query("status", status))
    }

    pub fn jobs(&self, skill: Option<&str>) -> Result<ApiReply<JobsPayload>, AppError> {
        self.call(ApiRequest::get("/jobs/list").query("skill", skill))
    }

    pub fn apply(&self, job_id: i64) -> Result<ApiReply<AppliedPayload>, AppError> {
        self.call(ApiRequest::post(format!("/jobs/apply/{job_id}")))
    }

    pub fn applications(&self) -> Result<ApiReply<ApplicationsPayload>, AppError> {
        self.call(ApiRequest::get("/jobs/applications"))
    }

    pub fn application_stats(&self) -> Result<ApiReply<ApplicationStatsPayload>, AppError> {
        self.call(ApiRequest::get("/jobs/applications/stats"))
    }

    // Employer

    pub fn register_employer(
        &self,
        form: &EmployerRegistrationForm,
    ) -> Result<ApiReply<EmployerRegistered>, AppError> {
        self.call(ApiRequest::post("/employers/register").json(form)?)
    }

    pub fn login_employer(
        &self,
        credentials: &EmployerCredentials,
    ) -> Result<ApiReply<EmployerLoginPayload>, AppError> {
        self.call(ApiRequest::post("/employers/login").json(credentials)?)
    }

    pub fn employer_dashboard(
        &self,
        employer_id: &str,
    ) -> Result<ApiReply<EmployerDashboardPayload>, AppError> {
        self.call(ApiRequest::get("/employers/dashboard").query("employer_id", Some(employer_id)))
    }

    pub fn post_job(&self, posting: &JobPosting) -> Result<ApiReply<JobPosted>, AppError> {
        self.call(ApiRequest::post("/employers/jobs").json(posting)?)
    }

    pub fn employer_decide(
        &self,
        application_id: i64,
        decision: Decision,
    ) -> Result<ApiReply<NoPayload>, AppError> {
        self.call(ApiRequest::post(format!(
            "/employers/applications/{application_id}/{}",
            decision.action()
        )))
    }

    // Admin

    pub fn login_admin(
        &self,
        form: &AdminLoginForm,
    ) -> Result<ApiReply<AdminLoginPayload>, AppError> {
        self.call(ApiRequest::post("/admin/login").json(form)?)
    }

    pub fn admin_stats(&self) -> Result<ApiReply<AdminStatsPayload>, AppError> {
        self.call(ApiRequest::get("/admin/stats"))
    }

    pub fn admin_applications(
        &self,
        status: Option<&str>,
    ) -> Result<ApiReply<ReviewsPayload>, AppError> {
        self.call(ApiRequest::get("/admin/applications").query("status", status))
    }

    pub fn admin_decide(
        &self,
        application_id: i64,
        decision: Decision,
    ) -> Result<ApiReply<NoPayload>, AppError> {
        self.call(ApiRequest::post(format!(
            "/admin/applications/{application_id}/{}",
            decision.action()
        )))
    }

    pub fn admin_complaints(
        &self,
        status: Option<&str>,
    ) -> Result<ApiReply<AdminComplaintsPayload>, AppError> {
        self.call(ApiRequest::get("/admin/complaints").query("status", status))
    }

    pub fn resolve_complaint(
        &self,
        complaint_id: i64,
        remarks: &str,
    ) -> Result<ApiReply<NoPayload>, AppError> {
        self.call(
            ApiRequest::post(format!("/admin/complaints/{complaint_id}/resolve"))
                .json(&json!({ "remarks": remarks }))?,
        )
    }

    pub fn admin_employers(&self) -> Result<ApiReply<AdminEmployersPayload>, AppError> {
        self.call(ApiRequest::get("/admin/employers"))
    }

    pub fn decide_employer(
        &self,
        employer_id: i64,
        decision: VerificationDecision,
        notes: &str,
    ) -> Result<ApiReply<NoPayload>, AppError> {
        self.call(
            ApiRequest::post(format!("/admin/employers/{employer_id}/{}", decision.action()))
                .json(&json!({ "notes": notes }))?,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::HttpMethod;
    use crate::testing::FakeTransport;

    #[test]
    fn reply_flattens_payload() {
        let transport = FakeTransport::new().on_post(
            "/jobs/apply/42",
            json!({"success": true, "message": "Applied", "application_id": "APP9"}),
        );
        let client = PortalClient::new(transport);

        let reply = client.apply(42).unwrap();
        assert!(reply.success);
        assert_eq!(reply.message.as_deref(), Some("Applied"));
        assert_eq!(reply.payload.application_id.as_deref(), Some("APP9"));
    }

    #[test]
    fn missing_success_reads_as_failure() {
        let transport = FakeTransport::new().on_get("/profile", json!({"message": "odd"}));
        let reply = PortalClient::new(transport).profile().unwrap();
        assert!(!reply.success);
        assert!(reply.payload.worker.is_none());
    }

    #[test]
    fn filters_become_query_parameters() {
        let transport = FakeTransport::new()
            .on_get("/jobs/list", json!({"success": true, "jobs": []}))
            .on_get("/employers/list", json!({"success": true, "employers": []}));
        let client = PortalClient::new(transport.clone());

        client.jobs(Some("mason")).unwrap();
        client.employers(None).unwrap();

        let calls = transport.get_calls();
        assert_eq!(calls[0].describe(), "GET /jobs/list?skill=mason");
        assert_eq!(calls[1].describe(), "GET /employers/list");
    }

    #[test]
    fn moderation_paths_carry_action_and_body() {
        let ok = json!({"success": true});
        let transport = FakeTransport::new()
            .on_post("/admin/applications/5/accept", ok.clone())
            .on_post("/admin/employers/3/reject", ok.clone())
            .on_post("/admin/complaints/8/resolve", ok);
        let client = PortalClient::new(transport.clone());

        client.admin_decide(5, Decision::Accept).unwrap();
        client.decide_employer(3, VerificationDecision::Reject, "Invalid GST").unwrap();
        client.resolve_complaint(8, "Wages paid").unwrap();

        let calls = transport.get_calls();
        assert_eq!(calls[1].body, Some(json!({"notes": "Invalid GST"})));
        assert_eq!(calls[2].body, Some(json!({"remarks": "Wages paid"})));
        assert_eq!(transport.count(HttpMethod::Post, "/admin/applications/5/accept"), 1);
    }

    #[test]
    fn malformed_payload_is_parse_error() {
        let transport =
            FakeTransport::new().on_get("/complaint/list", json!({"success": true, "complaints": 7}));
        let err = PortalClient::new(transport).complaints().unwrap_err();
        assert!(matches!(err, AppError::ParseError { .. }));
    }
}

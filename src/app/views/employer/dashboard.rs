use serde::Serialize;

use crate::app::AppContext;
use crate::app::views::{Activation, Alert, GENERIC_FAILURE, Row, View, guard, mark_decided, settle};
use crate::domain::catalog::{SKILLS, SelectOption};
use crate::domain::forms::JobPostingForm;
use crate::domain::models::{ApplicationReview, EmployerDashboardStats, Job};
use crate::domain::status::application_status_class;
use crate::domain::{AppError, Decision, EmployerAccount, FormStatus, Location, Role, Route};
use crate::ports::{ApiTransport, SessionStore};

const LOAD_FAILED: &str = "Error loading dashboard.";
const POST_REJECTED: &str = "Failed to post job.";
const DECISION_REJECTED: &str = "Failed to update application.";

/// Employer workspace: counters, own postings and the applications to them.
#[derive(Debug, Clone, Serialize)]
pub struct EmployerDashboardView {
    pub employer: EmployerAccount,
    pub stats: EmployerDashboardStats,
    pub jobs: Vec<Job>,
    pub applications: Vec<Row<ApplicationReview>>,
    pub job_form: JobPostingForm,
    pub job_status: FormStatus,
    pub posted_job_id: Option<String>,
    pub skills: &'static [SelectOption],
    pub loading: bool,
    pub error: Option<String>,
    pub alert: Option<Alert>,
}

impl EmployerDashboardView {
    fn new(employer: EmployerAccount) -> Self {
        Self {
            employer,
            stats: EmployerDashboardStats::default(),
            jobs: Vec::new(),
            applications: Vec::new(),
            job_form: JobPostingForm::default(),
            job_status: FormStatus::default(),
            posted_job_id: None,
            skills: SKILLS,
            loading: true,
            error: None,
            alert: None,
        }
    }

    fn load<T: ApiTransport, S: SessionStore>(&mut self, ctx: &AppContext<T, S>) {
        self.loading = true;
        match settle(
            ctx.client().employer_dashboard(&self.employer.employer_id),
            LOAD_FAILED,
            LOAD_FAILED,
        ) {
            Ok(reply) => {
                let payload = reply.payload;
                if let Some(employer) = payload.employer {
                    self.employer = employer;
                }
                self.stats = payload.stats;
                self.jobs = payload.jobs;
                self.applications =
                    Row::tag(payload.applications, |a| application_status_class(&a.status));
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
        self.loading = false;
    }

    /// Validate and post the job form; success clears the form and reloads.
    pub fn post_job<T: ApiTransport, S: SessionStore>(&mut self, ctx: &AppContext<T, S>) {
        let posting = match self.job_form.to_posting(&self.employer.employer_id) {
            Ok(posting) => posting,
            Err(errors) => {
                self.job_status.reject(errors);
                return;
            }
        };

        self.job_status.begin();
        let outcome = settle(ctx.client().post_job(&posting), POST_REJECTED, GENERIC_FAILURE);
        self.job_status.finish();

        match outcome {
            Ok(reply) => {
                tracing::info!(job_id = ?reply.payload.job_id, "Job posted");
                self.posted_job_id = reply.payload.job_id;
                self.job_form = JobPostingForm::default();
                self.job_status.succeed();
                self.load(ctx);
            }
            Err(message) => self.job_status.fail(message),
        }
    }

    /// Accept or reject an application to one of this employer's jobs.
    ///
    /// Success flips the row and reloads the dashboard once, which is where
    /// the employer's counters come from. Failure leaves every row as it was
    /// unless lists are refetched on every settle.
    pub fn decide<T: ApiTransport, S: SessionStore>(
        &mut self,
        ctx: &AppContext<T, S>,
        application_id: i64,
        decision: Decision,
    ) {
        let outcome = settle(
            ctx.client().employer_decide(application_id, decision),
            DECISION_REJECTED,
            GENERIC_FAILURE,
        );
        match outcome {
            Ok(_) => {
                self.alert = None;
                mark_decided(&mut self.applications, application_id, decision);
                self.load(ctx);
            }
            Err(message) => {
                self.alert = Some(Alert::failure(message));
                if ctx.refetch_on_settle() {
                    self.load(ctx);
                }
            }
        }
    }

    pub fn logout<T: ApiTransport, S: SessionStore>(
        &self,
        ctx: &AppContext<T, S>,
    ) -> Result<Route, AppError> {
        logout_employer(ctx)
    }
}

pub(crate) fn logout_employer<T: ApiTransport, S: SessionStore>(
    ctx: &AppContext<T, S>,
) -> Result<Route, AppError> {
    ctx.session(Role::Employer).clear()?;
    tracing::info!("Employer logged out");
    Ok(Route::Home)
}

impl View for EmployerDashboardView {
    const ROUTE: Route = Route::EmployerDashboard;

    fn activate<T: ApiTransport, S: SessionStore>(
        ctx: &AppContext<T, S>,
        _location: &Location,
    ) -> Activation<Self> {
        let session = match guard(ctx, Role::Employer) {
            Ok(session) => session,
            Err(route) => return Activation::Redirect(route),
        };
        let Some(employer) = session.as_employer().cloned() else {
            return Activation::Redirect(Route::EmployerLogin);
        };
        let mut view = EmployerDashboardView::new(employer);
        view.load(ctx);
        Activation::Ready(view)
    }

    fn has_failure(&self) -> bool {
        self.error.is_some()
            || self.job_status.has_failure()
            || self.alert.as_ref().is_some_and(|a| a.failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemorySessionStore;
    use crate::domain::ModerationConfig;
    use crate::ports::HttpMethod;
    use crate::testing::{FakeTransport, Reply, context_with, employer_session};
    use serde_json::{Value, json};

    fn dashboard() -> Value {
        json!({
            "success": true,
            "stats": {"total_jobs": 2, "open_jobs": "1", "total_applications": 2, "pending_applications": 2},
            "jobs": [{"id": 42, "job_id": "JOB00042", "title": "Mason", "wage_per_day": "650.00"}],
            "applications": [
                {"id": 5, "application_id": "APP00005", "job_title": "Mason", "worker_name": "Ravi", "status": "pending"},
                {"id": 6, "application_id": "APP00006", "job_title": "Mason", "worker_name": "Meena", "status": "pending"}
            ]
        })
    }

    fn activated(
        transport: FakeTransport,
    ) -> (EmployerDashboardView, crate::testing::TestContext, FakeTransport) {
        let (ctx, transport) = context_with(transport.on_get("/employers/dashboard", dashboard()));
        ctx.session(Role::Employer).set(&employer_session()).unwrap();
        let view =
            EmployerDashboardView::activate(&ctx, &Location::for_route(Route::EmployerDashboard))
                .ready()
                .unwrap();
        (view, ctx, transport)
    }

    #[test]
    fn loads_dashboard_for_session_employer() {
        let (view, _ctx, transport) = activated(FakeTransport::new());
        assert_eq!(
            transport.last_call().unwrap().describe(),
            "GET /employers/dashboard?employer_id=EMP00002"
        );
        assert_eq!(view.stats.open_jobs, 1);
        assert_eq!(view.applications.len(), 2);
    }

    #[test]
    fn invalid_posting_makes_no_call() {
        let (mut view, ctx, transport) = activated(FakeTransport::new());
        view.job_form = JobPostingForm {
            title: "Mason".into(),
            skill_required: "mason".into(),
            location: "Pune".into(),
            wage_per_day: "lots".into(),
            ..Default::default()
        };

        view.post_job(&ctx);

        assert_eq!(transport.count(HttpMethod::Post, "/employers/jobs"), 0);
        assert!(view.job_status.has_failure());
    }

    #[test]
    fn posting_resets_form_and_reloads() {
        let (mut view, ctx, transport) = activated(
            FakeTransport::new()
                .on_post("/employers/jobs", json!({"success": true, "job_id": "JOB00043"})),
        );
        view.job_form = JobPostingForm {
            title: "Painter".into(),
            skill_required: "painter".into(),
            location: "Pune".into(),
            wage_per_day: "550".into(),
            workers_needed: "3".into(),
            ..Default::default()
        };

        view.post_job(&ctx);

        assert_eq!(view.posted_job_id.as_deref(), Some("JOB00043"));
        assert_eq!(view.job_form, JobPostingForm::default());
        let posted = transport
            .get_calls()
            .into_iter()
            .find(|c| c.path == "/employers/jobs")
            .unwrap();
        let body = posted.body.unwrap();
        assert_eq!(body["employer_id"], "EMP00002");
        assert_eq!(body["wage_per_day"], 550.0);
        assert_eq!(body["workers_needed"], 3);
        assert_eq!(transport.count(HttpMethod::Get, "/employers/dashboard"), 2);
    }

    fn decided_dashboard() -> Value {
        json!({
            "success": true,
            "stats": {"total_jobs": 2, "open_jobs": 1, "total_applications": 2, "pending_applications": 1},
            "jobs": [{"id": 42, "job_id": "JOB00042", "title": "Mason", "wage_per_day": 650.0}],
            "applications": [
                {"id": 5, "application_id": "APP00005", "job_title": "Mason", "worker_name": "Ravi", "status": "Accepted"},
                {"id": 6, "application_id": "APP00006", "job_title": "Mason", "worker_name": "Meena", "status": "pending"}
            ]
        })
    }

    fn scripted(
        transport: FakeTransport,
        refetch_on_settle: bool,
    ) -> (EmployerDashboardView, crate::testing::TestContext) {
        let ctx = AppContext::new(
            transport,
            MemorySessionStore::new(),
            ModerationConfig { refetch_on_settle },
        );
        ctx.session(Role::Employer).set(&employer_session()).unwrap();
        let view =
            EmployerDashboardView::activate(&ctx, &Location::for_route(Route::EmployerDashboard))
                .ready()
                .unwrap();
        (view, ctx)
    }

    #[test]
    fn decision_flips_target_row_and_refreshes_stats_once() {
        let transport = FakeTransport::new()
            .on_get("/employers/dashboard", dashboard())
            .on_get("/employers/dashboard", decided_dashboard())
            .on_post("/employers/applications/5/accept", json!({"success": true}));
        let (mut view, ctx) = scripted(transport.clone(), false);
        assert_eq!(view.stats.pending_applications, 2);

        view.decide(&ctx, 5, Decision::Accept);

        assert_eq!(transport.count(HttpMethod::Get, "/employers/dashboard"), 2);
        assert_eq!(view.stats.pending_applications, 1);
        assert_eq!(view.applications[0].item.status, "Accepted");
        assert_eq!(view.applications[0].status_class, "status-accepted");
        assert_eq!(view.applications[1].item.status, "pending");
        assert!(!view.has_failure());
    }

    #[test]
    fn failed_decision_alerts_and_leaves_rows() {
        let (mut view, ctx, transport) = activated(FakeTransport::new().on(
            HttpMethod::Post,
            "/employers/applications/6/reject",
            Reply::Status(404, json!({"success": false, "message": "Application not found"})),
        ));
        let before = view.applications.clone();

        view.decide(&ctx, 6, Decision::Reject);

        assert_eq!(view.applications, before);
        assert_eq!(view.alert, Some(Alert::failure("Application not found")));
        assert_eq!(transport.count(HttpMethod::Get, "/employers/dashboard"), 1);
    }

    #[test]
    fn refetch_on_settle_reloads_after_failure_too() {
        let transport = FakeTransport::new()
            .on_get("/employers/dashboard", dashboard())
            .on(HttpMethod::Post, "/employers/applications/5/accept", Reply::Unreachable);
        let (mut view, ctx) = scripted(transport.clone(), true);

        view.decide(&ctx, 5, Decision::Accept);

        assert_eq!(transport.count(HttpMethod::Get, "/employers/dashboard"), 2);
        assert_eq!(view.applications[0].item.status, "pending");
        assert!(view.alert.as_ref().is_some_and(|a| a.failed));
    }

    #[test]
    fn logout_clears_employer_session() {
        let (view, ctx, _) = activated(FakeTransport::new());
        assert_eq!(view.logout(&ctx).unwrap(), Route::Home);
        assert!(!ctx.session(Role::Employer).is_logged_in());
    }
}

use serde::Serialize;

use crate::app::AppContext;
use crate::app::views::{Activation, Alert, View, filter_param, guard, settle};
use crate::domain::catalog::{SKILLS, SelectOption};
use crate::domain::models::{ApplicationStats, Job};
use crate::domain::{Location, Role, Route};
use crate::ports::{ApiTransport, SessionStore};

const LOAD_FAILED: &str = "Error loading jobs.";
const APPLY_REJECTED: &str = "Failed to submit application.";
const APPLY_FAILED: &str = "Error submitting application. Please try again.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobRow {
    #[serde(flatten)]
    pub job: Job,
    /// Set only for the duration of this row's apply call and cleared again
    /// before `apply` returns, so rendered pages never show it.
    pub applying: bool,
}

/// Find Work: open jobs, application counters and one-click apply.
#[derive(Debug, Clone, Serialize)]
pub struct JobsView {
    pub jobs: Vec<JobRow>,
    pub stats: ApplicationStats,
    pub skill_filter: Option<String>,
    pub skills: &'static [SelectOption],
    pub loading: bool,
    pub error: Option<String>,
    pub alert: Option<Alert>,
    pub last_application_id: Option<String>,
}

impl JobsView {
    fn new(skill_filter: Option<String>) -> Self {
        Self {
            jobs: Vec::new(),
            stats: ApplicationStats::default(),
            skill_filter,
            skills: SKILLS,
            loading: true,
            error: None,
            alert: None,
            last_application_id: None,
        }
    }

    fn load_jobs<T: ApiTransport, S: SessionStore>(&mut self, ctx: &AppContext<T, S>) {
        self.loading = true;
        self.error = None;
        match settle(ctx.client().jobs(self.skill_filter.as_deref()), LOAD_FAILED, LOAD_FAILED) {
            Ok(reply) => {
                self.jobs = reply
                    .payload
                    .jobs
                    .into_iter()
                    .map(|job| JobRow { job, applying: false })
                    .collect();
            }
            Err(message) => self.error = Some(message),
        }
        self.loading = false;
    }

    fn load_stats<T: ApiTransport, S: SessionStore>(&mut self, ctx: &AppContext<T, S>) {
        match settle(ctx.client().application_stats(), "", "") {
            Ok(reply) => self.stats = reply.payload.stats,
            Err(message) => tracing::debug!(%message, "Application stats unavailable"),
        }
    }

    /// Change the skill filter and refetch the job list.
    pub fn set_filter<T: ApiTransport, S: SessionStore>(
        &mut self,
        ctx: &AppContext<T, S>,
        skill: Option<String>,
    ) {
        self.skill_filter = skill.filter(|s| !s.trim().is_empty());
        self.load_jobs(ctx);
    }

    /// Apply for the job with database id `job_id`.
    ///
    /// Success raises an alert carrying the new application ID and refetches
    /// the counters once; failure raises a failure alert.
    pub fn apply<T: ApiTransport, S: SessionStore>(&mut self, ctx: &AppContext<T, S>, job_id: i64) {
        self.set_applying(job_id, true);
        let outcome = settle(ctx.client().apply(job_id), APPLY_REJECTED, APPLY_FAILED);
        self.set_applying(job_id, false);

        match outcome {
            Ok(reply) => {
                let application_id = reply.payload.application_id;
                let message = match &application_id {
                    Some(id) => format!("Application submitted successfully! Application ID: {id}"),
                    None => reply
                        .message
                        .unwrap_or_else(|| "Application submitted successfully!".to_string()),
                };
                self.last_application_id = application_id;
                self.alert = Some(Alert::info(message));
                self.load_stats(ctx);
            }
            Err(message) => self.alert = Some(Alert::failure(message)),
        }
    }

    fn set_applying(&mut self, job_id: i64, applying: bool) {
        if let Some(row) = self.jobs.iter_mut().find(|row| row.job.id == job_id) {
            row.applying = applying;
        }
    }
}

impl View for JobsView {
    const ROUTE: Route = Route::Jobs;

    fn activate<T: ApiTransport, S: SessionStore>(
        ctx: &AppContext<T, S>,
        location: &Location,
    ) -> Activation<Self> {
        if let Err(route) = guard(ctx, Role::Worker) {
            return Activation::Redirect(route);
        }
        let mut view = JobsView::new(filter_param(location, "skill"));
        view.load_jobs(ctx);
        view.load_stats(ctx);
        Activation::Ready(view)
    }

    fn has_failure(&self) -> bool {
        self.error.is_some() || self.alert.as_ref().is_some_and(|a| a.failed)
    }
}

use serde::Serialize;

use crate::app::AppContext;
use crate::app::views::admin::dashboard::fetch_stats;
use crate::app::views::{
    Activation, Alert, GENERIC_FAILURE, Row, View, filter_param, guard, mark_decided, settle,
};
use crate::domain::models::{AdminStats, ApplicationReview};
use crate::domain::status::application_status_class;
use crate::domain::{Decision, Location, Role, Route};
use crate::ports::{ApiTransport, SessionStore};

const LOAD_FAILED: &str = "Error loading applications.";
const DECISION_REJECTED: &str = "Failed to update application.";

/// Review queue of every job application.
#[derive(Debug, Clone, Serialize)]
pub struct AdminApplicationsView {
    pub applications: Vec<Row<ApplicationReview>>,
    pub stats: AdminStats,
    pub status_filter: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
    pub alert: Option<Alert>,
}

impl AdminApplicationsView {
    fn load<T: ApiTransport, S: SessionStore>(&mut self, ctx: &AppContext<T, S>) {
        self.loading = true;
        match settle(
            ctx.client().admin_applications(self.status_filter.as_deref()),
            LOAD_FAILED,
            LOAD_FAILED,
        ) {
            Ok(reply) => {
                self.applications =
                    Row::tag(reply.payload.applications, |a| application_status_class(&a.status));
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
        self.loading = false;
    }

    fn refresh_stats<T: ApiTransport, S: SessionStore>(&mut self, ctx: &AppContext<T, S>) {
        match fetch_stats(ctx) {
            Ok(stats) => self.stats = stats,
            Err(message) => tracing::debug!(%message, "Admin stats unavailable"),
        }
    }

    pub fn set_filter<T: ApiTransport, S: SessionStore>(
        &mut self,
        ctx: &AppContext<T, S>,
        status: Option<String>,
    ) {
        self.status_filter = status.filter(|s| !s.trim().is_empty());
        self.load(ctx);
    }

    /// Accept or reject one application, then refresh the counters once.
    pub fn decide<T: ApiTransport, S: SessionStore>(
        &mut self,
        ctx: &AppContext<T, S>,
        application_id: i64,
        decision: Decision,
    ) {
        match settle(
            ctx.client().admin_decide(application_id, decision),
            DECISION_REJECTED,
            GENERIC_FAILURE,
        ) {
            Ok(_) => {
                tracing::info!(application_id, action = decision.action(), "Application decided");
                self.alert = None;
                if !ctx.refetch_on_settle() {
                    mark_decided(&mut self.applications, application_id, decision);
                }
                self.refresh_stats(ctx);
            }
            Err(message) => self.alert = Some(Alert::failure(message)),
        }
        if ctx.refetch_on_settle() {
            self.load(ctx);
        }
    }
}

impl View for AdminApplicationsView {
    const ROUTE: Route = Route::AdminApplications;

    fn activate<T: ApiTransport, S: SessionStore>(
        ctx: &AppContext<T, S>,
        location: &Location,
    ) -> Activation<Self> {
        if let Err(route) = guard(ctx, Role::Admin) {
            return Activation::Redirect(route);
        }
        let mut view = AdminApplicationsView {
            applications: Vec::new(),
            stats: AdminStats::default(),
            status_filter: filter_param(location, "status"),
            loading: true,
            error: None,
            alert: None,
        };
        view.load(ctx);
        view.refresh_stats(ctx);
        Activation::Ready(view)
    }

    fn has_failure(&self) -> bool {
        self.error.is_some() || self.alert.as_ref().is_some_and(|a| a.failed)
    }
}

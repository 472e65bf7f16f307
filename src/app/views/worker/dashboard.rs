use serde::Serialize;

use crate::app::AppContext;
use crate::app::views::{Activation, MenuItem, Row, View, guard, settle};
use crate::domain::models::{ComplaintStats, RecentComplaint, WorkerProfile};
use crate::domain::status::complaint_status_class;
use crate::domain::{AppError, Location, Role, Route, WorkerSummary};
use crate::ports::{ApiTransport, SessionStore};

const LOAD_FAILED: &str = "Error loading dashboard.";

pub const MENU: &[MenuItem] = &[
    MenuItem { title: "My Profile", path: "/profile" },
    MenuItem { title: "File Complaint", path: "/complaint" },
    MenuItem { title: "My Complaints", path: "/complaints" },
    MenuItem { title: "Employer List", path: "/employers" },
    MenuItem { title: "Find Work", path: "/jobs" },
    MenuItem { title: "My Applications", path: "/applications" },
    MenuItem { title: "Logout", path: "/" },
];

/// Worker landing page after login.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    /// Summary captured at login; shown until the full record arrives.
    pub summary: WorkerSummary,
    pub worker: Option<WorkerProfile>,
    pub stats: ComplaintStats,
    pub recent_complaints: Vec<Row<RecentComplaint>>,
    pub menu: &'static [MenuItem],
    pub loading: bool,
    pub error: Option<String>,
}

impl DashboardView {
    fn new(summary: WorkerSummary) -> Self {
        Self {
            summary,
            worker: None,
            stats: ComplaintStats::default(),
            recent_complaints: Vec::new(),
            menu: MENU,
            loading: true,
            error: None,
        }
    }

    fn load<T: ApiTransport, S: SessionStore>(&mut self, ctx: &AppContext<T, S>) {
        self.loading = true;
        match settle(ctx.client().dashboard(), LOAD_FAILED, LOAD_FAILED) {
            Ok(reply) => {
                let payload = reply.payload;
                self.worker = payload.worker;
                self.stats = payload.stats;
                self.recent_complaints =
                    Row::tag(payload.recent_complaints, |c| complaint_status_class(&c.status));
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
        self.loading = false;
    }

    /// Post `/logout` and clear the worker session whatever the outcome.
    pub fn logout<T: ApiTransport, S: SessionStore>(
        &self,
        ctx: &AppContext<T, S>,
    ) -> Result<Route, AppError> {
        logout_worker(ctx)
    }
}

pub(crate) fn logout_worker<T: ApiTransport, S: SessionStore>(
    ctx: &AppContext<T, S>,
) -> Result<Route, AppError> {
    if let Err(err) = ctx.client().logout_worker() {
        tracing::debug!(error = %err, "Logout call failed; clearing session anyway");
    }
    ctx.session(Role::Worker).clear()?;
    tracing::info!("Worker logged out");
    Ok(Route::Home)
}

impl View for DashboardView {
    const ROUTE: Route = Route::Dashboard;

    fn activate<T: ApiTransport, S: SessionStore>(
        ctx: &AppContext<T, S>,
        _location: &Location,
    ) -> Activation<Self> {
        let session = match guard(ctx, Role::Worker) {
            Ok(session) => session,
            Err(route) => return Activation::Redirect(route),
        };
        let Some(summary) = session.as_worker().cloned() else {
            return Activation::Redirect(Route::Login);
        };

        let mut view = DashboardView::new(summary);
        view.load(ctx);
        Activation::Ready(view)
    }

    fn has_failure(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::HttpMethod;
    use crate::testing::{FakeTransport, Reply, context_with, test_context, worker_session};
    use serde_json::json;

    #[test]
    fn guard_redirects_to_login_without_calls() {
        let (ctx, transport) = test_context();
        let activation = DashboardView::activate(&ctx, &Location::for_route(Route::Dashboard));
        assert!(matches!(activation, Activation::Redirect(Route::Login)));
        assert_eq!(transport.total_calls(), 0);
    }

    #[test]
    fn loads_stats_and_recent_complaints() {
        let (ctx, _) = context_with(FakeTransport::new().on_get(
            "/dashboard/current",
            json!({
                "success": true,
                "worker": {"id": 7, "migrant_id": "MIG00007", "name": "Ravi Kumar", "status": "active"},
                "stats": {"total": 3, "pending": 1, "resolved": 2, "in_progress": 0},
                "recent_complaints": [
                    {"id": "CMP00002", "type": "wages", "status": "Resolved", "date": "2024-02-01"},
                    {"id": "CMP00003", "type": "safety", "status": "In Progress", "date": null}
                ]
            }),
        ));
        ctx.session(Role::Worker).set(&worker_session()).unwrap();

        let view = DashboardView::activate(&ctx, &Location::for_route(Route::Dashboard))
            .ready()
            .unwrap();

        assert!(!view.loading);
        assert_eq!(view.stats.resolved, 2);
        assert_eq!(view.recent_complaints[0].status_class, "status-resolved");
        assert_eq!(view.recent_complaints[1].status_class, "");
        assert_eq!(view.worker.unwrap().name, "Ravi Kumar");
    }

    #[test]
    fn logout_clears_session_even_when_call_fails() {
        let (ctx, transport) = context_with(FakeTransport::new().on_get(
            "/dashboard/current",
            json!({"success": false}),
        ).on(HttpMethod::Post, "/logout", Reply::Unreachable));
        ctx.session(Role::Worker).set(&worker_session()).unwrap();

        let view = DashboardView::activate(&ctx, &Location::for_route(Route::Dashboard))
            .ready()
            .unwrap();
        assert_eq!(view.error.as_deref(), Some(LOAD_FAILED));

        assert_eq!(view.logout(&ctx).unwrap(), Route::Home);
        assert!(!ctx.session(Role::Worker).is_logged_in());
        assert_eq!(transport.count(HttpMethod::Post, "/logout"), 1);
    }
}

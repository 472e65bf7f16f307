use serde::Serialize;

use crate::app::AppContext;
use crate::app::views::{Activation, MenuItem, View, guard, settle};
use crate::domain::models::AdminStats;
use crate::domain::{AdminAccount, AppError, Location, Role, Route};
use crate::ports::{ApiTransport, SessionStore};

pub(crate) const STATS_FAILED: &str = "Error loading statistics.";

pub const MENU: &[MenuItem] = &[
    MenuItem { title: "Job Applications", path: "/admin-applications" },
    MenuItem { title: "Complaints", path: "/admin-complaints" },
    MenuItem { title: "Employer Verification", path: "/admin-employers" },
    MenuItem { title: "Logout", path: "/" },
];

/// Administrator overview with portal-wide counters.
#[derive(Debug, Clone, Serialize)]
pub struct AdminDashboardView {
    pub admin: AdminAccount,
    pub stats: AdminStats,
    pub menu: &'static [MenuItem],
    pub loading: bool,
    pub error: Option<String>,
}

impl AdminDashboardView {
    pub fn logout<T: ApiTransport, S: SessionStore>(
        &self,
        ctx: &AppContext<T, S>,
    ) -> Result<Route, AppError> {
        logout_admin(ctx)
    }
}

pub(crate) fn logout_admin<T: ApiTransport, S: SessionStore>(
    ctx: &AppContext<T, S>,
) -> Result<Route, AppError> {
    ctx.session(Role::Admin).clear()?;
    tracing::info!("Administrator logged out");
    Ok(Route::Home)
}

/// Fetch `/admin/stats`; the error carries the message to show.
pub(crate) fn fetch_stats<T: ApiTransport, S: SessionStore>(
    ctx: &AppContext<T, S>,
) -> Result<AdminStats, String> {
    settle(ctx.client().admin_stats(), STATS_FAILED, STATS_FAILED).map(|reply| reply.payload.stats)
}

impl View for AdminDashboardView {
    const ROUTE: Route = Route::AdminDashboard;

    fn activate<T: ApiTransport, S: SessionStore>(
        ctx: &AppContext<T, S>,
        _location: &Location,
    ) -> Activation<Self> {
        let session = match guard(ctx, Role::Admin) {
            Ok(session) => session,
            Err(route) => return Activation::Redirect(route),
        };
        let Some(admin) = session.as_admin().cloned() else {
            return Activation::Redirect(Route::AdminLogin);
        };

        let mut view = AdminDashboardView {
            admin,
            stats: AdminStats::default(),
            menu: MENU,
            loading: true,
            error: None,
        };
        match fetch_stats(ctx) {
            Ok(stats) => view.stats = stats,
            Err(message) => view.error = Some(message),
        }
        view.loading = false;
        Activation::Ready(view)
    }

    fn has_failure(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeTransport, admin_session, context_with, test_context};
    use serde_json::json;

    #[test]
    fn loads_stats() {
        let (ctx, _) = context_with(FakeTransport::new().on_get(
            "/admin/stats",
            json!({
                "success": true,
                "stats": {
                    "total_workers": 40,
                    "open_jobs": 6,
                    "applications": {"total": 10, "pending": "4", "accepted": "5", "rejected": "1"},
                    "complaints": {"total": 3, "pending": "2", "resolved": "1"},
                    "employers": {"total": 5, "pending": "2", "verified": "3", "rejected": null}
                }
            }),
        ));
        ctx.session(Role::Admin).set(&admin_session()).unwrap();

        let view = AdminDashboardView::activate(&ctx, &Location::for_route(Route::AdminDashboard))
            .ready()
            .unwrap();

        assert_eq!(view.stats.total_workers, 40);
        assert_eq!(view.stats.applications.pending, 4);
        assert_eq!(view.stats.employers.rejected, 0);
    }

    #[test]
    fn guarded_to_admin_login() {
        let (ctx, transport) = test_context();
        let activation =
            AdminDashboardView::activate(&ctx, &Location::for_route(Route::AdminDashboard));
        assert!(matches!(activation, Activation::Redirect(Route::AdminLogin)));
        assert_eq!(transport.total_calls(), 0);
    }

    #[test]
    fn logout_clears_only_admin_session() {
        let (ctx, _) = test_context();
        ctx.session(Role::Admin).set(&admin_session()).unwrap();
        ctx.session(Role::Worker).set(&crate::testing::worker_session()).unwrap();

        assert_eq!(logout_admin(&ctx).unwrap(), Route::Home);
        assert!(!ctx.session(Role::Admin).is_logged_in());
        assert!(ctx.session(Role::Worker).is_logged_in());
    }
}

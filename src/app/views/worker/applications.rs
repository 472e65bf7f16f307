use serde::Serialize;

use crate::app::AppContext;
use crate::app::views::{Activation, Row, View, guard, settle};
use crate::domain::models::{Application, ApplicationStats};
use crate::domain::status::application_status_class;
use crate::domain::{Location, Role, Route};
use crate::ports::{ApiTransport, SessionStore};

const LOAD_FAILED: &str = "Error loading applications.";

/// The worker's job applications and their counters.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationsView {
    pub applications: Vec<Row<Application>>,
    pub stats: ApplicationStats,
    pub loading: bool,
    pub error: Option<String>,
}

impl View for ApplicationsView {
    const ROUTE: Route = Route::Applications;

    fn activate<T: ApiTransport, S: SessionStore>(
        ctx: &AppContext<T, S>,
        _location: &Location,
    ) -> Activation<Self> {
        if let Err(route) = guard(ctx, Role::Worker) {
            return Activation::Redirect(route);
        }

        let mut view = ApplicationsView {
            applications: Vec::new(),
            stats: ApplicationStats::default(),
            loading: true,
            error: None,
        };
        match settle(ctx.client().applications(), LOAD_FAILED, LOAD_FAILED) {
            Ok(reply) => {
                view.applications = Row::tag(reply.payload.applications, |a| {
                    application_status_class(&a.status)
                });
            }
            Err(message) => view.error = Some(message),
        }
        match settle(ctx.client().application_stats(), "", "") {
            Ok(reply) => view.stats = reply.payload.stats,
            Err(message) => tracing::debug!(%message, "Application stats unavailable"),
        }
        view.loading = false;
        Activation::Ready(view)
    }

    fn has_failure(&self) -> bool {
        self.error.is_some()
    }
}

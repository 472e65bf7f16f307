use serde::Serialize;

use crate::app::AppContext;
use crate::app::views::{Activation, Row, View, guard, settle};
use crate::domain::models::Complaint;
use crate::domain::status::complaint_status_class;
use crate::domain::{Location, Role, Route};
use crate::ports::{ApiTransport, SessionStore};

const LOAD_FAILED: &str = "Error loading complaints.";

/// The worker's complaints in server order.
#[derive(Debug, Clone, Serialize)]
pub struct ComplaintsView {
    pub complaints: Vec<Row<Complaint>>,
    pub loading: bool,
    pub error: Option<String>,
}

impl View for ComplaintsView {
    const ROUTE: Route = Route::Complaints;

    fn activate<T: ApiTransport, S: SessionStore>(
        ctx: &AppContext<T, S>,
        _location: &Location,
    ) -> Activation<Self> {
        if let Err(route) = guard(ctx, Role::Worker) {
            return Activation::Redirect(route);
        }

        let mut view = ComplaintsView { complaints: Vec::new(), loading: true, error: None };
        match settle(ctx.client().complaints(), LOAD_FAILED, LOAD_FAILED) {
            Ok(reply) => {
                view.complaints =
                    Row::tag(reply.payload.complaints, |c| complaint_status_class(&c.status));
            }
            Err(message) => view.error = Some(message),
        }
        view.loading = false;
        Activation::Ready(view)
    }

    fn has_failure(&self) -> bool {
        self.error.is_some()
    }
}

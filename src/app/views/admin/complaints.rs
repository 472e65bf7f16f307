use serde::Serialize;

use crate::app::AppContext;
use crate::app::views::{Activation, Alert, GENERIC_FAILURE, Row, View, filter_param, guard, settle};
use crate::domain::models::AdminComplaint;
use crate::domain::status::review_status_class;
use crate::domain::{Location, Role, Route};
use crate::ports::{ApiTransport, SessionStore};

const LOAD_FAILED: &str = "Error loading complaints.";
const RESOLVE_REJECTED: &str = "Failed to resolve complaint.";
const RESOLVED: &str = "resolved";

/// Grievance queue across all workers.
#[derive(Debug, Clone, Serialize)]
pub struct AdminComplaintsView {
    pub complaints: Vec<Row<AdminComplaint>>,
    pub status_filter: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
    pub alert: Option<Alert>,
}

impl AdminComplaintsView {
    fn load<T: ApiTransport, S: SessionStore>(&mut self, ctx: &AppContext<T, S>) {
        self.loading = true;
        match settle(
            ctx.client().admin_complaints(self.status_filter.as_deref()),
            LOAD_FAILED,
            LOAD_FAILED,
        ) {
            Ok(reply) => {
                self.complaints =
                    Row::tag(reply.payload.complaints, |c| review_status_class(&c.status));
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
        self.loading = false;
    }

    pub fn set_filter<T: ApiTransport, S: SessionStore>(
        &mut self,
        ctx: &AppContext<T, S>,
        status: Option<String>,
    ) {
        self.status_filter = status.filter(|s| !s.trim().is_empty());
        self.load(ctx);
    }

    /// Mark a complaint resolved with the administrator's remarks.
    pub fn resolve<T: ApiTransport, S: SessionStore>(
        &mut self,
        ctx: &AppContext<T, S>,
        complaint_id: i64,
        remarks: &str,
    ) {
        match settle(
            ctx.client().resolve_complaint(complaint_id, remarks),
            RESOLVE_REJECTED,
            GENERIC_FAILURE,
        ) {
            Ok(_) => {
                tracing::info!(complaint_id, "Complaint resolved");
                self.alert = None;
                if !ctx.refetch_on_settle()
                    && let Some(row) =
                        self.complaints.iter_mut().find(|r| r.item.id == complaint_id)
                {
                    row.item.status = RESOLVED.to_string();
                    row.item.admin_remarks = Some(remarks.to_string()).filter(|r| !r.is_empty());
                    row.status_class = review_status_class(RESOLVED);
                }
            }
            Err(message) => self.alert = Some(Alert::failure(message)),
        }
        if ctx.refetch_on_settle() {
            self.load(ctx);
        }
    }
}

impl View for AdminComplaintsView {
    const ROUTE: Route = Route::AdminComplaints;

    fn activate<T: ApiTransport, S: SessionStore>(
        ctx: &AppContext<T, S>,
        location: &Location,
    ) -> Activation<Self> {
        if let Err(route) = guard(ctx, Role::Admin) {
            return Activation::Redirect(route);
        }
        let mut view = AdminComplaintsView {
            complaints: Vec::new(),
            status_filter: filter_param(location, "status"),
            loading: true,
            error: None,
            alert: None,
        };
        view.load(ctx);
        Activation::Ready(view)
    }

    fn has_failure(&self) -> bool {
        self.error.is_some() || self.alert.as_ref().is_some_and(|a| a.failed)
    }
}

use serde::Serialize;

use crate::app::AppContext;
use crate::app::views::{Activation, GENERIC_FAILURE, View, guard, settle};
use crate::domain::catalog::{COMPLAINT_TYPES, SelectOption};
use crate::domain::forms::ComplaintForm;
use crate::domain::{FormStatus, Location, Role, Route, Validate};
use crate::ports::{ApiTransport, SessionStore};

/// Grievance submission.
#[derive(Debug, Clone, Serialize)]
pub struct ComplaintView {
    pub form: ComplaintForm,
    pub status: FormStatus,
    pub complaint_id: Option<String>,
    pub complaint_types: &'static [SelectOption],
}

impl Default for ComplaintView {
    fn default() -> Self {
        Self {
            form: ComplaintForm::default(),
            status: FormStatus::default(),
            complaint_id: None,
            complaint_types: COMPLAINT_TYPES,
        }
    }
}

impl ComplaintView {
    pub fn submit<T: ApiTransport, S: SessionStore>(&mut self, ctx: &AppContext<T, S>) {
        let errors = self.form.validate();
        if !errors.is_empty() {
            self.status.reject(errors);
            return;
        }

        self.status.begin();
        match settle(
            ctx.client().add_complaint(&self.form),
            "Failed to submit complaint.",
            GENERIC_FAILURE,
        ) {
            Ok(reply) => {
                self.complaint_id = reply.payload.complaint_id;
                self.status.succeed();
            }
            Err(message) => self.status.fail(message),
        }
        self.status.finish();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl View for ComplaintView {
    const ROUTE: Route = Route::Complaint;

    fn activate<T: ApiTransport, S: SessionStore>(
        ctx: &AppContext<T, S>,
        _location: &Location,
    ) -> Activation<Self> {
        match guard(ctx, Role::Worker) {
            Ok(_) => Activation::Ready(Self::default()),
            Err(route) => Activation::Redirect(route),
        }
    }

    fn has_failure(&self) -> bool {
        self.status.has_failure()
    }
}

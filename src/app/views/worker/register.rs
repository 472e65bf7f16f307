use serde::Serialize;

use crate::app::AppContext;
use crate::app::views::{Activation, GENERIC_FAILURE, View, settle};
use crate::domain::catalog::{GENDERS, SKILLS, SelectOption};
use crate::domain::forms::WorkerRegistrationForm;
use crate::domain::{FormStatus, Location, Route, Validate};
use crate::ports::{ApiTransport, SessionStore};

/// Worker self-registration.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterView {
    pub form: WorkerRegistrationForm,
    pub status: FormStatus,
    pub migrant_id: Option<String>,
    pub genders: &'static [SelectOption],
    pub skills: &'static [SelectOption],
}

impl Default for RegisterView {
    fn default() -> Self {
        Self {
            form: WorkerRegistrationForm::default(),
            status: FormStatus::default(),
            migrant_id: None,
            genders: GENDERS,
            skills: SKILLS,
        }
    }
}

impl RegisterView {
    pub fn submit<T: ApiTransport, S: SessionStore>(&mut self, ctx: &AppContext<T, S>) {
        let errors = self.form.validate();
        if !errors.is_empty() {
            self.status.reject(errors);
            return;
        }

        self.status.begin();
        match settle(
            ctx.client().register_worker(&self.form),
            "Registration failed. Please try again.",
            GENERIC_FAILURE,
        ) {
            Ok(reply) => {
                self.migrant_id = reply.payload.migrant_id;
                self.status.succeed();
            }
            Err(message) => self.status.fail(message),
        }
        self.status.finish();
    }

    /// Back to a pristine form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl View for RegisterView {
    const ROUTE: Route = Route::Register;

    fn activate<T: ApiTransport, S: SessionStore>(
        _ctx: &AppContext<T, S>,
        _location: &Location,
    ) -> Activation<Self> {
        Activation::Ready(Self::default())
    }

    fn has_failure(&self) -> bool {
        self.status.has_failure()
    }
}

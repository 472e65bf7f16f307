use serde::Serialize;

use crate::app::AppContext;
use crate::app::views::{Activation, GENERIC_FAILURE, View, settle};
use crate::domain::catalog::{INDUSTRIES, SelectOption};
use crate::domain::forms::EmployerRegistrationForm;
use crate::domain::{FormStatus, Location, Route, Validate};
use crate::ports::{ApiTransport, SessionStore};

pub const PENDING_NOTICE: &str =
    "Your registration is pending verification. You can log in once an administrator approves it.";

/// Employer self-registration.
#[derive(Debug, Clone, Serialize)]
pub struct EmployerRegisterView {
    pub form: EmployerRegistrationForm,
    pub status: FormStatus,
    pub employer_id: Option<String>,
    pub notice: Option<&'static str>,
    pub industries: &'static [SelectOption],
}

impl Default for EmployerRegisterView {
    fn default() -> Self {
        Self {
            form: EmployerRegistrationForm::default(),
            status: FormStatus::default(),
            employer_id: None,
            notice: None,
            industries: INDUSTRIES,
        }
    }
}

impl EmployerRegisterView {
    pub fn submit<T: ApiTransport, S: SessionStore>(&mut self, ctx: &AppContext<T, S>) {
        let errors = self.form.validate();
        if !errors.is_empty() {
            self.status.reject(errors);
            return;
        }

        self.status.begin();
        match settle(
            ctx.client().register_employer(&self.form),
            "Registration failed. Please try again.",
            GENERIC_FAILURE,
        ) {
            Ok(reply) => {
                self.employer_id = reply.payload.employer_id;
                self.notice = Some(PENDING_NOTICE);
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

impl View for EmployerRegisterView {
    const ROUTE: Route = Route::EmployerRegister;

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

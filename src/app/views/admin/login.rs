use serde::Serialize;

use crate::app::AppContext;
use crate::app::views::{Activation, View, settle};
use crate::domain::forms::AdminLoginForm;
use crate::domain::{AppError, FormStatus, Location, Role, Route, Session, Validate};
use crate::ports::{ApiTransport, SessionStore};

const LOGIN_REJECTED: &str = "Login failed. Please try again.";
const LOGIN_FAILED: &str = "Invalid credentials. Please try again.";

#[derive(Debug, Clone, Default, Serialize)]
pub struct AdminLoginView {
    pub form: AdminLoginForm,
    pub status: FormStatus,
}

impl AdminLoginView {
    pub fn submit<T: ApiTransport, S: SessionStore>(
        &mut self,
        ctx: &AppContext<T, S>,
    ) -> Result<Option<Route>, AppError> {
        let errors = self.form.validate();
        if !errors.is_empty() {
            self.status.reject(errors);
            return Ok(None);
        }

        self.status.begin();
        let outcome = settle(ctx.client().login_admin(&self.form), LOGIN_REJECTED, LOGIN_FAILED);
        self.status.finish();

        let admin = match outcome {
            Ok(reply) => reply.payload.admin,
            Err(message) => {
                self.status.fail(message);
                return Ok(None);
            }
        };
        let Some(admin) = admin else {
            self.status.fail(LOGIN_REJECTED);
            return Ok(None);
        };

        tracing::info!(username = %admin.username, "Administrator logged in");
        ctx.session(Role::Admin).set(&Session::admin(admin))?;
        self.status.succeed();
        Ok(Some(Route::AdminDashboard))
    }
}

impl View for AdminLoginView {
    const ROUTE: Route = Route::AdminLogin;

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

use serde::Serialize;

use crate::app::AppContext;
use crate::app::views::{Activation, View, settle};
use crate::domain::forms::WorkerLoginForm;
use crate::domain::{AppError, FormStatus, Location, Role, Route, Session, Validate};
use crate::ports::{ApiTransport, SessionStore};

const LOGIN_REJECTED: &str = "Login failed. Please try again.";
const LOGIN_FAILED: &str = "Invalid credentials. Please try again.";

#[derive(Debug, Clone, Default, Serialize)]
pub struct LoginView {
    pub form: WorkerLoginForm,
    pub status: FormStatus,
}

impl LoginView {
    /// Log in; on success the worker session is stored and the dashboard
    /// route returned.
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
        let outcome = settle(
            ctx.client().login_worker(&self.form.credentials()),
            LOGIN_REJECTED,
            LOGIN_FAILED,
        );
        self.status.finish();

        let reply = match outcome {
            Ok(reply) => reply,
            Err(message) => {
                self.status.fail(message);
                return Ok(None);
            }
        };

        let (Some(token), Some(worker)) = (reply.payload.session_id, reply.payload.worker) else {
            self.status.fail(LOGIN_REJECTED);
            return Ok(None);
        };

        tracing::info!(migrant_id = %worker.migrant_id, "Worker logged in");
        ctx.session(Role::Worker).set(&Session::worker(token, worker))?;
        self.status.succeed();
        Ok(Some(Route::Dashboard))
    }
}

impl View for LoginView {
    const ROUTE: Route = Route::Login;

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

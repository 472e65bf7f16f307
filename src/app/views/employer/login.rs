use serde::Serialize;

use crate::app::AppContext;
use crate::app::client::{ApiReply, EmployerLoginPayload};
use crate::app::views::{Activation, View};
use crate::domain::forms::EmployerLoginForm;
use crate::domain::{
    AppError, FormStatus, Location, Role, Route, Session, Validate, VerificationStatus,
};
use crate::ports::{ApiTransport, SessionStore};

const INVALID_CREDENTIALS: &str = "Invalid employer ID or password. Please try again.";
const PENDING_MESSAGE: &str =
    "Your account is pending verification by an administrator. Please check again later.";
const REJECTED_MESSAGE: &str =
    "Your registration was rejected. Please contact the portal administrator.";

/// Why an employer login did not go through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginBlock {
    InvalidCredentials,
    /// Registration awaits review; the same request may be retried.
    PendingVerification,
    /// Registration was refused; retrying cannot help.
    Rejected,
}

impl LoginBlock {
    fn from_verification(status: Option<&str>) -> Self {
        match status.and_then(VerificationStatus::parse) {
            Some(VerificationStatus::Pending) => LoginBlock::PendingVerification,
            Some(VerificationStatus::Rejected) => LoginBlock::Rejected,
            _ => LoginBlock::InvalidCredentials,
        }
    }

    fn message(self) -> &'static str {
        match self {
            LoginBlock::InvalidCredentials => INVALID_CREDENTIALS,
            LoginBlock::PendingVerification => PENDING_MESSAGE,
            LoginBlock::Rejected => REJECTED_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EmployerLoginView {
    pub form: EmployerLoginForm,
    pub status: FormStatus,
    pub blocked: Option<LoginBlock>,
    pub can_check_again: bool,
}

impl EmployerLoginView {
    /// Log in; on success the employer session is stored and the employer
    /// dashboard route returned.
    pub fn submit<T: ApiTransport, S: SessionStore>(
        &mut self,
        ctx: &AppContext<T, S>,
    ) -> Result<Option<Route>, AppError> {
        let errors = self.form.validate();
        if !errors.is_empty() {
            self.status.reject(errors);
            return Ok(None);
        }

        self.blocked = None;
        self.can_check_again = false;
        self.status.begin();
        let outcome = ctx.client().login_employer(&self.form.credentials());
        self.status.finish();
        self.settle(ctx, outcome)
    }

    /// Re-issue the login while verification is pending.
    pub fn check_again<T: ApiTransport, S: SessionStore>(
        &mut self,
        ctx: &AppContext<T, S>,
    ) -> Result<Option<Route>, AppError> {
        if self.blocked != Some(LoginBlock::PendingVerification) {
            return Ok(None);
        }
        self.submit(ctx)
    }

    fn settle<T: ApiTransport, S: SessionStore>(
        &mut self,
        ctx: &AppContext<T, S>,
        outcome: Result<ApiReply<EmployerLoginPayload>, AppError>,
    ) -> Result<Option<Route>, AppError> {
        let reply = match outcome {
            Ok(reply) if reply.success => reply,
            Ok(reply) => {
                self.block(LoginBlock::from_verification(
                    reply.payload.verification_status.as_deref(),
                ));
                return Ok(None);
            }
            Err(err) => {
                tracing::debug!(error = %err, "Employer login failed");
                let verification = err.response_field("verification_status");
                self.block(LoginBlock::from_verification(verification));
                return Ok(None);
            }
        };

        let Some(employer) = reply.payload.employer else {
            self.block(LoginBlock::InvalidCredentials);
            return Ok(None);
        };

        tracing::info!(employer_id = %employer.employer_id, "Employer logged in");
        ctx.session(Role::Employer).set(&Session::employer(reply.payload.session_id, employer))?;
        self.status.succeed();
        Ok(Some(Route::EmployerDashboard))
    }

    fn block(&mut self, block: LoginBlock) {
        self.blocked = Some(block);
        self.can_check_again = block == LoginBlock::PendingVerification;
        self.status.fail(block.message());
    }
}

impl View for EmployerLoginView {
    const ROUTE: Route = Route::EmployerLogin;

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

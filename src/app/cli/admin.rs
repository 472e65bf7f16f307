use clap::Subcommand;

use crate::app::api::{self, PortalContext};
use crate::app::views::admin::dashboard::logout_admin;
use crate::app::views::admin::{
    AdminApplicationsView, AdminComplaintsView, AdminEmployersView, AdminLoginView,
};
use crate::domain::forms::AdminLoginForm;
use crate::domain::{AppError, Decision, Role, VerificationDecision};

use super::{open, password_or_prompt, show, show_then_open};

#[derive(Subcommand)]
pub enum AdminCommands {
    /// Log in as an administrator
    Login {
        #[arg(long)]
        username: String,
        /// Prompted for when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// Clear the administrator session
    Logout,
    /// Accept a job application
    Accept { application_id: i64 },
    /// Reject a job application
    Reject { application_id: i64 },
    /// Resolve a complaint with remarks
    Resolve {
        complaint_id: i64,
        #[arg(long)]
        remarks: String,
    },
    /// Verify an employer registration
    Verify {
        employer_id: i64,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Reject an employer registration
    RejectEmployer {
        employer_id: i64,
        #[arg(long, default_value = "")]
        notes: String,
    },
}

pub fn run(ctx: &PortalContext, command: AdminCommands) -> Result<i32, AppError> {
    match command {
        AdminCommands::Login { username, password } => {
            let password = password_or_prompt(password, "Password")?;
            let mut view = AdminLoginView {
                form: AdminLoginForm { username, password },
                ..Default::default()
            };
            let next = view.submit(ctx)?;
            show_then_open(ctx, &view, next)
        }
        AdminCommands::Logout => {
            let next = logout_admin(ctx)?;
            println!("Logged out.");
            open(ctx, next.path())
        }
        AdminCommands::Accept { application_id } => {
            decide_application(ctx, application_id, Decision::Accept)
        }
        AdminCommands::Reject { application_id } => {
            decide_application(ctx, application_id, Decision::Reject)
        }
        AdminCommands::Resolve { complaint_id, remarks } => {
            let mut view = api::activate_for::<AdminComplaintsView, _, _>(ctx, Role::Admin)?;
            view.resolve(ctx, complaint_id, &remarks);
            show(&view)
        }
        AdminCommands::Verify { employer_id, notes } => {
            decide_employer(ctx, employer_id, VerificationDecision::Verify, &notes)
        }
        AdminCommands::RejectEmployer { employer_id, notes } => {
            decide_employer(ctx, employer_id, VerificationDecision::Reject, &notes)
        }
    }
}

fn decide_application(
    ctx: &PortalContext,
    application_id: i64,
    decision: Decision,
) -> Result<i32, AppError> {
    let mut view = api::activate_for::<AdminApplicationsView, _, _>(ctx, Role::Admin)?;
    view.decide(ctx, application_id, decision);
    show(&view)
}

fn decide_employer(
    ctx: &PortalContext,
    employer_id: i64,
    decision: VerificationDecision,
    notes: &str,
) -> Result<i32, AppError> {
    let mut view = api::activate_for::<AdminEmployersView, _, _>(ctx, Role::Admin)?;
    view.decide(ctx, employer_id, decision, notes);
    show(&view)
}

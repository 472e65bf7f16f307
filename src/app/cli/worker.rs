use clap::{Args, Subcommand};

use crate::app::api::{self, PortalContext};
use crate::app::views::worker::{ComplaintView, JobsView, LoginView, ProfileView, RegisterView};
use crate::app::views::worker::dashboard::logout_worker;
use crate::domain::forms::{ComplaintForm, WorkerLoginForm, WorkerRegistrationForm};
use crate::domain::{AppError, Role};

use super::{open, show, show_then_open};

#[derive(Subcommand)]
pub enum WorkerCommands {
    /// Register as a migrant worker
    Register(RegisterArgs),
    /// Log in with Migrant ID and phone
    Login {
        #[arg(long)]
        migrant_id: String,
        #[arg(long)]
        phone: String,
    },
    /// Log out and clear the worker session
    Logout,
    /// Update profile fields (repeat --set field=value)
    EditProfile {
        #[arg(long = "set", value_name = "FIELD=VALUE", required = true)]
        fields: Vec<String>,
    },
    /// File a grievance
    Complain {
        /// Complaint type (see `mlgms open /complaint`)
        #[arg(long = "type")]
        complaint_type: String,
        #[arg(long)]
        description: String,
    },
    /// Apply for a job by its numeric id
    Apply { job_id: i64 },
}

#[derive(Args)]
pub struct RegisterArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    phone: String,
    #[arg(long, default_value = "")]
    age: String,
    #[arg(long, default_value = "")]
    gender: String,
    #[arg(long, default_value = "")]
    skill: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    state: String,
    #[arg(long, default_value = "")]
    district: String,
    #[arg(long, default_value = "")]
    address: String,
}

impl From<RegisterArgs> for WorkerRegistrationForm {
    fn from(args: RegisterArgs) -> Self {
        WorkerRegistrationForm {
            name: args.name,
            phone: args.phone,
            age: args.age,
            gender: args.gender,
            skill: args.skill,
            email: args.email,
            state: args.state,
            district: args.district,
            address: args.address,
        }
    }
}

pub fn run(ctx: &PortalContext, command: WorkerCommands) -> Result<i32, AppError> {
    match command {
        WorkerCommands::Register(args) => {
            let mut view = RegisterView { form: args.into(), ..Default::default() };
            view.submit(ctx);
            show(&view)
        }
        WorkerCommands::Login { migrant_id, phone } => {
            let mut view =
                LoginView { form: WorkerLoginForm { migrant_id, phone }, ..Default::default() };
            let next = view.submit(ctx)?;
            show_then_open(ctx, &view, next)
        }
        WorkerCommands::Logout => {
            let next = logout_worker(ctx)?;
            println!("Logged out.");
            open(ctx, next.path())
        }
        WorkerCommands::EditProfile { fields } => edit_profile(ctx, fields),
        WorkerCommands::Complain { complaint_type, description } => {
            let mut view = api::activate_for::<ComplaintView, _, _>(ctx, Role::Worker)?;
            view.form = ComplaintForm { complaint_type, description };
            view.submit(ctx);
            show(&view)
        }
        WorkerCommands::Apply { job_id } => {
            let mut view = api::activate_for::<JobsView, _, _>(ctx, Role::Worker)?;
            view.apply(ctx, job_id);
            show(&view)
        }
    }
}

fn edit_profile(ctx: &PortalContext, fields: Vec<String>) -> Result<i32, AppError> {
    let mut view = api::activate_for::<ProfileView, _, _>(ctx, Role::Worker)?;
    if view.worker.is_none() {
        // Nothing to edit; the view carries the load error and exits 1.
        return show(&view);
    }

    view.enable_edit();
    if let Some(edit) = view.edit.as_mut() {
        for pair in &fields {
            let Some((field, value)) = pair.split_once('=') else {
                let detail = format!("expected FIELD=VALUE, got '{pair}'");
                return Err(AppError::parse_error("--set", detail));
            };
            if !edit.set(field.trim(), value) {
                let detail = format!("'{field}' is not an editable field");
                return Err(AppError::parse_error("--set", detail));
            }
        }
    }
    view.update(ctx);
    show(&view)
}

use std::io::IsTerminal;

use clap::{Args, Subcommand};

use crate::app::api::{self, PortalContext};
use crate::app::views::employer::dashboard::logout_employer;
use crate::app::views::employer::{EmployerDashboardView, EmployerLoginView, EmployerRegisterView};
use crate::domain::forms::{EmployerLoginForm, EmployerRegistrationForm, JobPostingForm};
use crate::domain::{AppError, Decision, Role};

use super::{confirm, open, password_or_prompt, show, show_then_open};

#[derive(Subcommand)]
pub enum EmployerCommands {
    /// Register a company; an administrator verifies it before login
    Register(RegisterArgs),
    /// Log in with Employer ID and password
    Login {
        #[arg(long)]
        employer_id: String,
        /// Prompted for when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// Clear the employer session
    Logout,
    /// Post a new job
    PostJob(PostJobArgs),
    /// Accept an application to one of your jobs
    Accept { application_id: i64 },
    /// Reject an application to one of your jobs
    Reject { application_id: i64 },
}

#[derive(Args)]
pub struct RegisterArgs {
    #[arg(long)]
    company_name: String,
    #[arg(long, default_value = "")]
    industry: String,
    #[arg(long, default_value = "")]
    location: String,
    #[arg(long)]
    contact_person: String,
    #[arg(long)]
    phone: String,
    #[arg(long)]
    email: String,
    /// Prompted for (with confirmation) when omitted
    #[arg(long)]
    password: Option<String>,
    #[arg(long)]
    confirm_password: Option<String>,
    #[arg(long, default_value = "")]
    gst_number: String,
    #[arg(long, default_value = "")]
    registration_number: String,
    #[arg(long, default_value = "")]
    address: String,
}

#[derive(Args)]
pub struct PostJobArgs {
    #[arg(long)]
    title: String,
    #[arg(long, default_value = "")]
    description: String,
    #[arg(long = "skill")]
    skill_required: String,
    #[arg(long)]
    location: String,
    /// Daily wage in rupees
    #[arg(long = "wage")]
    wage_per_day: String,
    #[arg(long = "duration", default_value = "")]
    duration_days: String,
    #[arg(long = "workers", default_value = "")]
    workers_needed: String,
}

impl From<PostJobArgs> for JobPostingForm {
    fn from(args: PostJobArgs) -> Self {
        JobPostingForm {
            title: args.title,
            description: args.description,
            skill_required: args.skill_required,
            location: args.location,
            wage_per_day: args.wage_per_day,
            duration_days: args.duration_days,
            workers_needed: args.workers_needed,
        }
    }
}

pub fn run(ctx: &PortalContext, command: EmployerCommands) -> Result<i32, AppError> {
    match command {
        EmployerCommands::Register(args) => register(ctx, args),
        EmployerCommands::Login { employer_id, password } => {
            let password = password_or_prompt(password, "Password")?;
            login(ctx, EmployerLoginForm { employer_id, password })
        }
        EmployerCommands::Logout => {
            let next = logout_employer(ctx)?;
            println!("Logged out.");
            open(ctx, next.path())
        }
        EmployerCommands::PostJob(args) => {
            let mut view = api::activate_for::<EmployerDashboardView, _, _>(ctx, Role::Employer)?;
            view.job_form = args.into();
            view.post_job(ctx);
            show(&view)
        }
        EmployerCommands::Accept { application_id } => {
            decide(ctx, application_id, Decision::Accept)
        }
        EmployerCommands::Reject { application_id } => {
            decide(ctx, application_id, Decision::Reject)
        }
    }
}

fn register(ctx: &PortalContext, args: RegisterArgs) -> Result<i32, AppError> {
    let password = password_or_prompt(args.password, "Password")?;
    let confirm_password = password_or_prompt(args.confirm_password, "Confirm password")?;
    let mut view = EmployerRegisterView {
        form: EmployerRegistrationForm {
            company_name: args.company_name,
            industry: args.industry,
            location: args.location,
            contact_person: args.contact_person,
            phone: args.phone,
            email: args.email,
            password,
            confirm_password,
            gst_number: args.gst_number,
            registration_number: args.registration_number,
            address: args.address,
        },
        ..Default::default()
    };
    view.submit(ctx);
    show(&view)
}

fn login(ctx: &PortalContext, form: EmployerLoginForm) -> Result<i32, AppError> {
    let mut view = EmployerLoginView { form, ..Default::default() };
    let mut next = view.submit(ctx)?;

    while next.is_none() && view.can_check_again && std::io::stdin().is_terminal() {
        if let Some(message) = &view.status.error {
            eprintln!("{message}");
        }
        if !confirm("Check verification status again?")? {
            break;
        }
        next = view.check_again(ctx)?;
    }

    show_then_open(ctx, &view, next)
}

fn decide(ctx: &PortalContext, application_id: i64, decision: Decision) -> Result<i32, AppError> {
    let mut view = api::activate_for::<EmployerDashboardView, _, _>(ctx, Role::Employer)?;
    view.decide(ctx, application_id, decision);
    show(&view)
}

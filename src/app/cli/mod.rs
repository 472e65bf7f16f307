//! CLI Adapter.

mod admin;
mod employer;
mod worker;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dialoguer::{Confirm, Password};

use crate::app::api::{self, PortalContext};
use crate::app::views::View;
use crate::domain::{AppError, Route};

#[derive(Parser)]
#[command(name = "mlgms")]
#[command(version)]
#[command(
    about = "Terminal client for the Migrant Labor & Grievance Management System portal",
    long_about = None
)]
struct Cli {
    /// Configuration file (defaults to $MLGMS_CONFIG, then the user config dir)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Navigate to a portal route and render it
    #[clap(visible_alias = "o")]
    Open {
        /// Route path, optionally with a query (e.g. /jobs?skill=mason)
        path: String,
    },
    /// List routes with their templates and guards
    Routes,
    /// Show which role sessions are stored
    Status,
    /// Worker actions
    #[clap(visible_alias = "w")]
    Worker {
        #[command(subcommand)]
        command: worker::WorkerCommands,
    },
    /// Employer actions
    #[clap(visible_alias = "e")]
    Employer {
        #[command(subcommand)]
        command: employer::EmployerCommands,
    },
    /// Administrator actions
    #[clap(visible_alias = "a")]
    Admin {
        #[command(subcommand)]
        command: admin::AdminCommands,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Routes => run_routes().map(|_| 0),
        command => api::connect(cli.config.as_deref()).and_then(|ctx| dispatch(&ctx, command)),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn dispatch(ctx: &PortalContext, command: Commands) -> Result<i32, AppError> {
    match command {
        Commands::Open { path } => open(ctx, &path),
        Commands::Routes => run_routes().map(|_| 0),
        Commands::Status => run_status(ctx).map(|_| 0),
        Commands::Worker { command } => worker::run(ctx, command),
        Commands::Employer { command } => employer::run(ctx, command),
        Commands::Admin { command } => admin::run(ctx, command),
    }
}

fn run_routes() -> Result<(), AppError> {
    for route in Route::ALL {
        let guard = route.required_role().map(|role| role.as_str()).unwrap_or("-");
        println!("{:<22} {:<28} {}", route.path(), route.template(), guard);
    }
    Ok(())
}

fn run_status(ctx: &PortalContext) -> Result<(), AppError> {
    for status in api::session_status(ctx) {
        match (status.user, status.since) {
            (Some(user), Some(since)) => {
                println!("{:<9} {} (since {})", status.role, user, since.format("%Y-%m-%d %H:%M"))
            }
            _ => println!("{:<9} not logged in", status.role),
        }
    }
    Ok(())
}

/// Open a path, print the page and report whether it shows a failure.
pub(crate) fn open(ctx: &PortalContext, path: &str) -> Result<i32, AppError> {
    let (navigation, text) = api::open(ctx, path)?;
    if navigation.redirected() {
        let chain: Vec<_> = navigation.chain.iter().map(|r| r.path()).collect();
        eprintln!("→ {}", chain.join(" → "));
    }
    print!("{text}");
    Ok(exit_code(navigation.page.has_failure()))
}

/// Print a view after an action.
pub(crate) fn show<V: View>(view: &V) -> Result<i32, AppError> {
    print!("{}", api::render_view(view)?);
    Ok(exit_code(view.has_failure()))
}

/// Follow the route a successful action returned, or print the view.
pub(crate) fn show_then_open<V: View>(
    ctx: &PortalContext,
    view: &V,
    next: Option<Route>,
) -> Result<i32, AppError> {
    match next {
        Some(route) => open(ctx, route.path()),
        None => show(view),
    }
}

fn exit_code(failed: bool) -> i32 {
    if failed { 1 } else { 0 }
}

/// Use the given password or ask for it without echo.
pub(crate) fn password_or_prompt(value: Option<String>, prompt: &str) -> Result<String, AppError> {
    if let Some(value) = value {
        return Ok(value);
    }
    Password::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|err| AppError::Prompt(format!("Failed to read password: {}", err)))
}

pub(crate) fn confirm(prompt: &str) -> Result<bool, AppError> {
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|err| AppError::Prompt(format!("Failed to read answer: {}", err)))
}

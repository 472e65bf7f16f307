//! mlgms: terminal client for the Migrant Labor & Grievance Management System portal.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{PortalContext, SessionStatus, connect, create_context, open, session_status};
pub use app::router::{Navigation, Page};
pub use domain::AppError;

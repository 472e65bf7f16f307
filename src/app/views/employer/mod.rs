//! Employer-facing views.

pub mod dashboard;
pub mod login;
pub mod register;

pub use dashboard::EmployerDashboardView;
pub use login::{EmployerLoginView, LoginBlock};
pub use register::EmployerRegisterView;

//! Worker-facing views.

pub mod applications;
pub mod complaint;
pub mod complaints;
pub mod dashboard;
pub mod employers;
pub mod jobs;
pub mod login;
pub mod profile;
pub mod register;

pub use applications::ApplicationsView;
pub use complaint::ComplaintView;
pub use complaints::ComplaintsView;
pub use dashboard::DashboardView;
pub use employers::EmployersView;
pub use jobs::JobsView;
pub use login::LoginView;
pub use profile::ProfileView;
pub use register::RegisterView;

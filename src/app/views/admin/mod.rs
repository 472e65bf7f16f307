//! Administrator views.

pub mod applications;
pub mod complaints;
pub mod dashboard;
pub mod employers;
pub mod login;

pub use applications::AdminApplicationsView;
pub use complaints::AdminComplaintsView;
pub use dashboard::AdminDashboardView;
pub use employers::AdminEmployersView;
pub use login::AdminLoginView;

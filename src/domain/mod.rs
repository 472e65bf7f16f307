pub mod catalog;
pub mod configuration;
pub mod error;
pub mod forms;
pub mod models;
pub mod rating;
pub mod role;
pub mod route;
pub mod session;
pub mod status;

pub use configuration::{
    ApiConfig, ConfigSource, ModerationConfig, PortalConfig, SessionConfig, load_config,
    parse_config_content,
};
pub use error::AppError;
pub use forms::{FieldError, FormStatus, Validate};
pub use rating::StarRating;
pub use role::Role;
pub use route::{Location, Route};
pub use session::{AdminAccount, EmployerAccount, Session, SessionUser, WorkerSummary};
pub use status::{Decision, VerificationDecision, VerificationStatus};

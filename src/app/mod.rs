pub mod api;
pub mod cli;
pub mod client;
mod context;
pub mod router;
pub mod views;

pub use context::{AppContext, SessionContext};

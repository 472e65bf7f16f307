//! API facade for the application.
//!
//! Glues configuration, adapters and view models together for the CLI.

use std::path::Path;

use chrono::{DateTime, Utc};
use minijinja::Value;
use serde::Serialize;

use crate::adapters::{FilesystemSessionStore, HttpTransport, ViewRenderer};
use crate::app::AppContext;
use crate::app::router::{self, Navigation, Page};
use crate::app::views::{Activation, View};
use crate::domain::{PortalConfig, Role, load_config};
use crate::ports::{ApiTransport, SessionStore};

pub use crate::domain::AppError;

/// Context wired to the real portal and on-disk sessions.
pub type PortalContext = AppContext<HttpTransport<FilesystemSessionStore>, FilesystemSessionStore>;

/// Build a context from an already loaded configuration.
pub fn create_context(config: &PortalConfig) -> Result<PortalContext, AppError> {
    let sessions = FilesystemSessionStore::new(config.session.resolved_dir()?);
    let transport = HttpTransport::new(&config.api, sessions.clone())?;
    Ok(AppContext::new(transport, sessions, config.moderation.clone()))
}

/// Load configuration (explicit path, environment, then default location)
/// and build a context from it.
pub fn connect(config_path: Option<&Path>) -> Result<PortalContext, AppError> {
    let config = load_config(config_path)?;
    tracing::debug!(base_url = %config.api.base_url, "Configuration loaded");
    create_context(&config)
}

/// Navigate to a location and render the page it settles on.
pub fn open<T: ApiTransport, S: SessionStore>(
    ctx: &AppContext<T, S>,
    location: &str,
) -> Result<(Navigation, String), AppError> {
    let navigation = router::open(ctx, location)?;
    let text = render_page(&navigation.page)?;
    Ok((navigation, text))
}

pub fn render_page(page: &Page) -> Result<String, AppError> {
    ViewRenderer::new()?.render(page.route(), &page.context())
}

/// Render a view the caller has been acting on.
pub fn render_view<V: View>(view: &V) -> Result<String, AppError> {
    ViewRenderer::new()?.render(V::ROUTE, &Value::from_serialize(view))
}

/// Activate a guarded view for a CLI action, failing when the role has no
/// session.
pub fn activate_for<V: View, T: ApiTransport, S: SessionStore>(
    ctx: &AppContext<T, S>,
    role: Role,
) -> Result<V, AppError> {
    match V::activate(ctx, &crate::domain::Location::for_route(V::ROUTE)) {
        Activation::Ready(view) => Ok(view),
        Activation::Redirect(_) => Err(AppError::NotLoggedIn(role)),
    }
}

/// Presence of one role's stored session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionStatus {
    pub role: Role,
    pub user: Option<String>,
    pub since: Option<DateTime<Utc>>,
}

pub fn session_status<T: ApiTransport, S: SessionStore>(
    ctx: &AppContext<T, S>,
) -> Vec<SessionStatus> {
    Role::ALL
        .into_iter()
        .map(|role| {
            let session = ctx.session(role).get();
            SessionStatus {
                role,
                user: session.as_ref().map(|s| s.display_name()),
                since: session.map(|s| s.created_at),
            }
        })
        .collect()
}

pub mod loader;
pub mod portal_config;

pub use loader::{
    API_URL_ENV, CONFIG_ENV, ConfigSource, load_config, parse_config_content,
    resolve_config_source,
};
pub use portal_config::{ApiConfig, DEFAULT_API_URL, ModerationConfig, PortalConfig, SessionConfig};

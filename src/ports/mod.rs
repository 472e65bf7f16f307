mod api_transport;
mod session_store;

pub use api_transport::{ApiRequest, ApiTransport, HttpMethod};
pub use session_store::SessionStore;

pub mod http_transport;
pub mod session_store_filesystem;
pub mod session_store_memory;
pub mod view_renderer;

pub use http_transport::HttpTransport;
pub use session_store_filesystem::FilesystemSessionStore;
pub use session_store_memory::MemorySessionStore;
pub use view_renderer::ViewRenderer;

mod fake_transport;
mod fixtures;

pub use fake_transport::{FakeTransport, Reply};
pub use fixtures::{
    TestContext, admin_session, context_with, employer_session, test_context, worker_session,
};

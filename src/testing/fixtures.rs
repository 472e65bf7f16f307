use crate::adapters::MemorySessionStore;
use crate::app::AppContext;
use crate::domain::{
    AdminAccount, EmployerAccount, ModerationConfig, Session, WorkerSummary,
};

use super::FakeTransport;

pub type TestContext = AppContext<FakeTransport, MemorySessionStore>;

/// Context over a fresh scripted transport; the returned handle shares its
/// recorded calls.
pub fn test_context() -> (TestContext, FakeTransport) {
    context_with(FakeTransport::new())
}

pub fn context_with(transport: FakeTransport) -> (TestContext, FakeTransport) {
    let ctx =
        AppContext::new(transport.clone(), MemorySessionStore::new(), ModerationConfig::default());
    (ctx, transport)
}

pub fn worker_session() -> Session {
    Session::worker(
        "sess-worker",
        WorkerSummary {
            id: 7,
            migrant_id: "MIG00007".into(),
            name: "Ravi Kumar".into(),
            phone: Some("9876543210".into()),
            skill: Some("mason".into()),
        },
    )
}

pub fn employer_session() -> Session {
    Session::employer(
        None,
        EmployerAccount {
            id: 2,
            employer_id: "EMP00002".into(),
            company_name: "BuildCo Infra".into(),
            contact_person: Some("Asha Rao".into()),
            industry: Some("construction".into()),
            location: Some("Pune".into()),
            is_verified: Some("verified".into()),
        },
    )
}

pub fn admin_session() -> Session {
    Session::admin(AdminAccount {
        id: 1,
        username: "admin".into(),
        name: Some("Portal Admin".into()),
        role: Some("superadmin".into()),
    })
}

use serde::Serialize;

use crate::app::AppContext;
use crate::app::views::{Activation, View};
use crate::domain::{Location, Route};
use crate::ports::{ApiTransport, SessionStore};

pub const PROJECT_TITLE: &str = "Migrant Labor & Grievance Management System";
pub const PROJECT_DESCRIPTION: &str = "A comprehensive government portal for migrant workers to \
register, manage profiles, file complaints, and connect with employers. This system aims to \
protect the rights of migrant workers and ensure their grievances are addressed promptly.";

#[derive(Debug, Clone, Serialize)]
pub struct HomeView {
    pub title: &'static str,
    pub description: &'static str,
}

impl View for HomeView {
    const ROUTE: Route = Route::Home;

    fn activate<T: ApiTransport, S: SessionStore>(
        _ctx: &AppContext<T, S>,
        _location: &Location,
    ) -> Activation<Self> {
        Activation::Ready(HomeView { title: PROJECT_TITLE, description: PROJECT_DESCRIPTION })
    }

    fn has_failure(&self) -> bool {
        false
    }
}

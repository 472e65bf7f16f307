use serde::Serialize;

use crate::app::AppContext;
use crate::app::views::{Activation, View, filter_param, guard, settle};
use crate::domain::models::EmployerListing;
use crate::domain::status::employer_status_class;
use crate::domain::{Location, Role, Route, StarRating};
use crate::ports::{ApiTransport, SessionStore};

const LOAD_FAILED: &str = "Error loading employers.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployerRow {
    #[serde(flatten)]
    pub employer: EmployerListing,
    pub status_class: &'static str,
    pub stars: StarRating,
}

impl From<EmployerListing> for EmployerRow {
    fn from(employer: EmployerListing) -> Self {
        Self {
            status_class: employer_status_class(&employer.status),
            stars: StarRating::from_rating(employer.rating),
            employer,
        }
    }
}

/// Employer directory with an optional activity-status filter.
#[derive(Debug, Clone, Serialize)]
pub struct EmployersView {
    pub employers: Vec<EmployerRow>,
    pub status_filter: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl EmployersView {
    /// Change the filter and refetch.
    pub fn set_filter<T: ApiTransport, S: SessionStore>(
        &mut self,
        ctx: &AppContext<T, S>,
        status: Option<String>,
    ) {
        self.status_filter = status.filter(|s| !s.trim().is_empty());
        self.load(ctx);
    }

    fn load<T: ApiTransport, S: SessionStore>(&mut self, ctx: &AppContext<T, S>) {
        self.loading = true;
        self.error = None;
        let outcome =
            settle(ctx.client().employers(self.status_filter.as_deref()), LOAD_FAILED, LOAD_FAILED);
        match outcome {
            Ok(reply) => {
                self.employers =
                    reply.payload.employers.into_iter().map(EmployerRow::from).collect()
            }
            Err(message) => self.error = Some(message),
        }
        self.loading = false;
    }
}

impl View for EmployersView {
    const ROUTE: Route = Route::Employers;

    fn activate<T: ApiTransport, S: SessionStore>(
        ctx: &AppContext<T, S>,
        location: &Location,
    ) -> Activation<Self> {
        if let Err(route) = guard(ctx, Role::Worker) {
            return Activation::Redirect(route);
        }
        let mut view = EmployersView {
            employers: Vec::new(),
            status_filter: filter_param(location, "status"),
            loading: true,
            error: None,
        };
        view.load(ctx);
        Activation::Ready(view)
    }

    fn has_failure(&self) -> bool {
        self.error.is_some()
    }
}

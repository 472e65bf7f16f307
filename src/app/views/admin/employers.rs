use serde::Serialize;

use crate::app::AppContext;
use crate::app::views::admin::dashboard::fetch_stats;
use crate::app::views::{Activation, Alert, GENERIC_FAILURE, View, guard, settle};
use crate::domain::models::{AdminEmployer, AdminStats};
use crate::domain::{
    Location, Role, Route, StarRating, VerificationDecision, VerificationStatus,
};
use crate::ports::{ApiTransport, SessionStore};

const LOAD_FAILED: &str = "Error loading employers.";
const DECISION_REJECTED: &str = "Failed to update employer verification.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployerReviewRow {
    #[serde(flatten)]
    pub employer: AdminEmployer,
    pub verification: Option<VerificationStatus>,
    pub badge_class: &'static str,
    pub stars: StarRating,
}

impl From<AdminEmployer> for EmployerReviewRow {
    fn from(employer: AdminEmployer) -> Self {
        let verification = VerificationStatus::parse(&employer.is_verified);
        Self {
            verification,
            badge_class: verification.map(VerificationStatus::badge_class).unwrap_or(""),
            stars: StarRating::from_rating(employer.rating),
            employer,
        }
    }
}

/// Employer verification queue. The list is fetched once; the verification
/// filter narrows it locally.
#[derive(Debug, Clone, Serialize)]
pub struct AdminEmployersView {
    #[serde(skip)]
    all: Vec<EmployerReviewRow>,
    /// Rows matching the current filter.
    pub employers: Vec<EmployerReviewRow>,
    pub verification_filter: Option<VerificationStatus>,
    pub stats: AdminStats,
    pub loading: bool,
    pub error: Option<String>,
    pub alert: Option<Alert>,
}

impl AdminEmployersView {
    fn load<T: ApiTransport, S: SessionStore>(&mut self, ctx: &AppContext<T, S>) {
        self.loading = true;
        match settle(ctx.client().admin_employers(), LOAD_FAILED, LOAD_FAILED) {
            Ok(reply) => {
                self.all =
                    reply.payload.employers.into_iter().map(EmployerReviewRow::from).collect();
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
        self.apply_filter();
        self.loading = false;
    }

    fn refresh_stats<T: ApiTransport, S: SessionStore>(&mut self, ctx: &AppContext<T, S>) {
        match fetch_stats(ctx) {
            Ok(stats) => self.stats = stats,
            Err(message) => tracing::debug!(%message, "Admin stats unavailable"),
        }
    }

    fn apply_filter(&mut self) {
        self.employers = self
            .all
            .iter()
            .filter(|row| self.verification_filter.is_none_or(|f| row.verification == Some(f)))
            .cloned()
            .collect();
    }

    /// Narrow the loaded list; never touches the network.
    pub fn set_filter(&mut self, filter: Option<VerificationStatus>) {
        self.verification_filter = filter;
        self.apply_filter();
    }

    /// Verify or reject an employer registration with the reviewer's notes.
    pub fn decide<T: ApiTransport, S: SessionStore>(
        &mut self,
        ctx: &AppContext<T, S>,
        employer_id: i64,
        decision: VerificationDecision,
        notes: &str,
    ) {
        match settle(
            ctx.client().decide_employer(employer_id, decision, notes),
            DECISION_REJECTED,
            GENERIC_FAILURE,
        ) {
            Ok(_) => {
                tracing::info!(
                    employer_id,
                    action = decision.action(),
                    "Employer verification updated"
                );
                self.alert = None;
                if !ctx.refetch_on_settle() {
                    self.mark(employer_id, decision, notes);
                }
                self.refresh_stats(ctx);
            }
            Err(message) => self.alert = Some(Alert::failure(message)),
        }
        if ctx.refetch_on_settle() {
            self.load(ctx);
        }
    }

    fn mark(&mut self, employer_id: i64, decision: VerificationDecision, notes: &str) {
        let Some(row) = self.all.iter_mut().find(|r| r.employer.id == employer_id) else {
            return;
        };
        let status = decision.resulting_status();
        row.employer.is_verified = status.as_str().to_string();
        row.employer.status = Some(decision.resulting_activity().to_string());
        if !notes.is_empty() {
            row.employer.verification_notes = Some(notes.to_string());
        }
        row.verification = Some(status);
        row.badge_class = status.badge_class();
        self.apply_filter();
    }
}

impl View for AdminEmployersView {
    const ROUTE: Route = Route::AdminEmployers;

    fn activate<T: ApiTransport, S: SessionStore>(
        ctx: &AppContext<T, S>,
        location: &Location,
    ) -> Activation<Self> {
        if let Err(route) = guard(ctx, Role::Admin) {
            return Activation::Redirect(route);
        }
        let mut view = AdminEmployersView {
            all: Vec::new(),
            employers: Vec::new(),
            verification_filter: location.param("verification").and_then(VerificationStatus::parse),
            stats: AdminStats::default(),
            loading: true,
            error: None,
            alert: None,
        };
        view.load(ctx);
        view.refresh_stats(ctx);
        Activation::Ready(view)
    }

    fn has_failure(&self) -> bool {
        self.error.is_some() || self.alert.as_ref().is_some_and(|a| a.failed)
    }
}

//! View models, one per route.
//!
//! Each view follows the same life cycle: check its guard, initialise local
//! state, issue its calls and settle every reply into state. `success: false`
//! replies, error statuses and transport failures never escape a view; they
//! become the view's error message or alert.

pub mod admin;
pub mod employer;
pub mod home;
pub mod worker;

use serde::Serialize;

use crate::app::AppContext;
use crate::app::client::ApiReply;
use crate::domain::models::ApplicationReview;
use crate::domain::status::application_status_class;
use crate::domain::{AppError, Decision, Location, Role, Route, Session};
use crate::ports::{ApiTransport, SessionStore};

pub const GENERIC_FAILURE: &str = "An error occurred. Please try again.";

/// Result of entering a route.
#[derive(Debug)]
pub enum Activation<V> {
    Redirect(Route),
    Ready(V),
}

impl<V> Activation<V> {
    pub fn ready(self) -> Option<V> {
        match self {
            Activation::Ready(view) => Some(view),
            Activation::Redirect(_) => None,
        }
    }
}

/// View model bound to a route.
pub trait View: Serialize + Sized {
    const ROUTE: Route;

    /// Guard, initialise and load.
    fn activate<T: ApiTransport, S: SessionStore>(
        ctx: &AppContext<T, S>,
        location: &Location,
    ) -> Activation<Self>;

    /// Whether the view currently shows an error or a failure alert.
    fn has_failure(&self) -> bool;
}

/// Blocking notice raised by an action, e.g. after applying for a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub message: String,
    pub failed: bool,
}

impl Alert {
    pub fn info(message: impl Into<String>) -> Self {
        Self { message: message.into(), failed: false }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self { message: message.into(), failed: true }
    }
}

/// Dashboard navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub title: &'static str,
    pub path: &'static str,
}

/// A list item tagged with the class its status renders with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row<T> {
    #[serde(flatten)]
    pub item: T,
    pub status_class: &'static str,
}

impl<T> Row<T> {
    pub fn tag(items: Vec<T>, class_of: impl Fn(&T) -> &'static str) -> Vec<Row<T>> {
        items
            .into_iter()
            .map(|item| {
                let status_class = class_of(&item);
                Row { item, status_class }
            })
            .collect()
    }
}

/// Collapse a call into its successful reply or the message to show.
///
/// `rejected` is used when the server answered `success: false` without a
/// message; `failed` when the call errored and the error body carried none.
pub(crate) fn settle<P>(
    result: Result<ApiReply<P>, AppError>,
    rejected: &str,
    failed: &str,
) -> Result<ApiReply<P>, String> {
    match result {
        Ok(reply) if reply.success => Ok(reply),
        Ok(reply) => Err(non_empty(reply.message).unwrap_or_else(|| rejected.to_string())),
        Err(err) => {
            tracing::debug!(error = %err, "Portal call failed");
            Err(non_empty(err.server_message().map(ToOwned::to_owned))
                .unwrap_or_else(|| failed.to_string()))
        }
    }
}

fn non_empty(message: Option<String>) -> Option<String> {
    message.filter(|m| !m.trim().is_empty())
}

/// The role's session, or the redirect its guard requires.
pub(crate) fn guard<T: ApiTransport, S: SessionStore>(
    ctx: &AppContext<T, S>,
    role: Role,
) -> Result<Session, Route> {
    ctx.session(role).get().ok_or(role.login_route())
}

/// Optimistically apply a reviewer's decision to the one affected row.
pub(crate) fn mark_decided(
    rows: &mut [Row<ApplicationReview>],
    application_id: i64,
    decision: Decision,
) -> bool {
    match rows.iter_mut().find(|row| row.item.id == application_id) {
        Some(row) => {
            row.item.status = decision.resulting_status().to_string();
            row.status_class = application_status_class(&row.item.status);
            true
        }
        None => false,
    }
}

/// Non-empty query parameter as an owned filter value.
pub(crate) fn filter_param(location: &Location, key: &str) -> Option<String> {
    location.param(key).map(str::trim).filter(|v| !v.is_empty()).map(ToOwned::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::client::NoPayload;
    use serde_json::json;

    fn reply(success: bool, message: Option<&str>) -> ApiReply<NoPayload> {
        ApiReply { success, message: message.map(Into::into), payload: NoPayload {} }
    }

    #[test]
    fn settle_prefers_server_message() {
        let out = settle(Ok(reply(false, Some("Invalid phone"))), "Rejected", "Failed");
        assert_eq!(out.unwrap_err(), "Invalid phone");
    }

    #[test]
    fn settle_falls_back_per_failure_kind() {
        assert_eq!(settle(Ok(reply(false, None)), "Rejected", "Failed").unwrap_err(), "Rejected");
        assert_eq!(
            settle::<NoPayload>(Err(AppError::Transport("down".into())), "Rejected", "Failed")
                .unwrap_err(),
            "Failed"
        );
    }

    #[test]
    fn settle_reads_error_body_message() {
        let err = AppError::Api {
            status: 400,
            message: Some("Job not found".into()),
            body: Some(json!({"success": false, "message": "Job not found"})),
        };
        assert_eq!(settle::<NoPayload>(Err(err), "x", "y").unwrap_err(), "Job not found");
    }

    #[test]
    fn row_tags_each_item() {
        let rows = Row::tag(vec!["Pending", "Other"], |s| {
            crate::domain::status::complaint_status_class(s)
        });
        assert_eq!(rows[0].status_class, "status-pending");
        assert_eq!(rows[1].status_class, "");
    }

    #[test]
    fn mark_decided_touches_only_target_row() {
        let review = |id, status: &str| ApplicationReview {
            id,
            status: status.into(),
            ..Default::default()
        };
        let mut rows = Row::tag(vec![review(1, "pending"), review(2, "pending")], |a| {
            application_status_class(&a.status)
        });

        assert!(mark_decided(&mut rows, 2, Decision::Reject));
        assert!(!mark_decided(&mut rows, 9, Decision::Accept));

        assert_eq!(rows[0].item.status, "pending");
        assert_eq!(rows[1].item.status, "Rejected");
        assert_eq!(rows[1].status_class, "status-rejected");
    }
}

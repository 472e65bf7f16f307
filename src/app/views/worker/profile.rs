use serde::Serialize;

use crate::app::AppContext;
use crate::app::views::{Activation, View, guard, settle};
use crate::domain::catalog::{GENDERS, SKILLS, SelectOption};
use crate::domain::forms::ProfileEdit;
use crate::domain::models::WorkerProfile;
use crate::domain::{Location, Role, Route};
use crate::ports::{ApiTransport, SessionStore};

const LOAD_FAILED: &str = "Error loading profile.";
const PROFILE_MISSING: &str = "Profile not found.";

/// Worker profile with in-place editing.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileView {
    pub worker: Option<WorkerProfile>,
    pub loading: bool,
    pub error: Option<String>,
    pub edit_mode: bool,
    pub edit: Option<ProfileEdit>,
    pub update_success: bool,
    pub update_error: Option<String>,
    pub genders: &'static [SelectOption],
    pub skills: &'static [SelectOption],
}

impl Default for ProfileView {
    fn default() -> Self {
        Self {
            worker: None,
            loading: true,
            error: None,
            edit_mode: false,
            edit: None,
            update_success: false,
            update_error: None,
            genders: GENDERS,
            skills: SKILLS,
        }
    }
}

impl ProfileView {
    fn load<T: ApiTransport, S: SessionStore>(&mut self, ctx: &AppContext<T, S>) {
        self.loading = true;
        match settle(ctx.client().profile(), LOAD_FAILED, LOAD_FAILED) {
            Ok(reply) => match reply.payload.worker {
                Some(worker) => self.worker = Some(worker),
                None => self.error = Some(PROFILE_MISSING.to_string()),
            },
            Err(message) => self.error = Some(message),
        }
        self.loading = false;
    }

    /// Copy the editable fields into the edit buffer. No-op before the
    /// profile has loaded.
    pub fn enable_edit(&mut self) {
        let Some(worker) = &self.worker else { return };
        self.edit = Some(ProfileEdit::from_profile(worker));
        self.edit_mode = true;
        self.update_success = false;
        self.update_error = None;
    }

    pub fn cancel_edit(&mut self) {
        self.edit_mode = false;
        self.edit = None;
        self.update_success = false;
        self.update_error = None;
    }

    /// Send the edit buffer. Success replaces the record and leaves edit
    /// mode; failure keeps the buffer for another attempt.
    pub fn update<T: ApiTransport, S: SessionStore>(&mut self, ctx: &AppContext<T, S>) {
        let Some(edit) = &self.edit else { return };
        self.update_success = false;
        self.update_error = None;

        match settle(
            ctx.client().update_profile(edit),
            "Failed to update profile.",
            "An error occurred while updating.",
        ) {
            Ok(reply) => {
                if let Some(worker) = reply.payload.worker {
                    self.worker = Some(worker);
                }
                self.edit_mode = false;
                self.edit = None;
                self.update_success = true;
            }
            Err(message) => self.update_error = Some(message),
        }
    }
}

impl View for ProfileView {
    const ROUTE: Route = Route::Profile;

    fn activate<T: ApiTransport, S: SessionStore>(
        ctx: &AppContext<T, S>,
        _location: &Location,
    ) -> Activation<Self> {
        if let Err(route) = guard(ctx, Role::Worker) {
            return Activation::Redirect(route);
        }
        let mut view = ProfileView::default();
        view.load(ctx);
        Activation::Ready(view)
    }

    fn has_failure(&self) -> bool {
        self.error.is_some() || self.update_error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::HttpMethod;
    use crate::testing::{FakeTransport, Reply, context_with, worker_session};
    use serde_json::json;

    fn profile_json(name: &str, district: &str) -> serde_json::Value {
        json!({
            "success": true,
            "worker": {
                "id": 7, "migrant_id": "MIG00007", "name": name, "phone": "9876543210",
                "age": 31, "gender": "male", "skill": "mason", "state": "Bihar",
                "district": district, "address": "Ward 4", "aadhaar": "XXXX-1234"
            }
        })
    }

    fn loaded(
        transport: FakeTransport,
    ) -> (ProfileView, crate::testing::TestContext, FakeTransport) {
        let (ctx, transport) = context_with(transport);
        ctx.session(Role::Worker).set(&worker_session()).unwrap();
        let view =
            ProfileView::activate(&ctx, &Location::for_route(Route::Profile)).ready().unwrap();
        (view, ctx, transport)
    }

    #[test]
    fn success_without_record_is_a_failure() {
        let (mut view, ctx, transport) =
            loaded(FakeTransport::new().on_get("/profile", json!({"success": true})));

        assert!(view.worker.is_none());
        assert_eq!(view.error.as_deref(), Some(PROFILE_MISSING));
        assert!(view.has_failure());

        view.enable_edit();
        view.update(&ctx);
        assert!(!view.edit_mode);
        assert_eq!(transport.count(HttpMethod::Put, "/profile/update"), 0);
    }

    #[test]
    fn update_success_replaces_record_and_leaves_edit_mode() {
        let (mut view, ctx, transport) = loaded(
            FakeTransport::new()
                .on_get("/profile", profile_json("Ravi", "Patna"))
                .on_put("/profile/update", profile_json("Ravi", "Gaya")),
        );

        view.enable_edit();
        assert!(view.edit_mode);
        view.edit.as_mut().unwrap().district = "Gaya".into();
        view.update(&ctx);

        assert!(view.update_success);
        assert!(!view.edit_mode);
        assert_eq!(view.worker.as_ref().unwrap().district.as_deref(), Some("Gaya"));
        let body = transport.last_call().unwrap().body.unwrap();
        assert_eq!(body["district"], "Gaya");
        assert!(body.get("aadhaar").is_none());
    }

    #[test]
    fn update_failure_keeps_buffer() {
        let (mut view, ctx, _) = loaded(
            FakeTransport::new().on_get("/profile", profile_json("Ravi", "Patna")).on(
                HttpMethod::Put,
                "/profile/update",
                Reply::Status(500, json!({})),
            ),
        );

        view.enable_edit();
        view.edit.as_mut().unwrap().name = "Ravi K".into();
        view.update(&ctx);

        assert!(view.edit_mode);
        assert_eq!(view.edit.as_ref().unwrap().name, "Ravi K");
        assert_eq!(view.update_error.as_deref(), Some("An error occurred while updating."));
        assert_eq!(view.worker.as_ref().unwrap().name, "Ravi");
    }

    #[test]
    fn cancel_drops_buffer() {
        let (mut view, _ctx, _) =
            loaded(FakeTransport::new().on_get("/profile", profile_json("Ravi", "Patna")));
        view.enable_edit();
        view.cancel_edit();
        assert!(!view.edit_mode);
        assert!(view.edit.is_none());
    }
}

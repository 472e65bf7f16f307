mod common;

use common::TestContext;
use predicates::prelude::*;

fn jobs_mocks(ctx: &mut TestContext) -> (mockito::Mock, mockito::Mock) {
    let jobs = ctx
        .server
        .mock("GET", "/api/jobs/list")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"success": true, "jobs": [
                {"id": 42, "job_id": "JOB00042", "title": "Mason", "wage_per_day": 650.0, "status": "open"}
            ]}"#,
        )
        .create();
    let stats = ctx
        .server
        .mock("GET", "/api/jobs/applications/stats")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success": true, "stats": {"total": 0, "pending": 0, "accepted": 0, "rejected": 0}}"#)
        .create();
    (jobs, stats)
}

#[test]
fn routes_lists_every_page_with_its_guard() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("routes")
        .assert()
        .success()
        .stdout(predicate::str::contains("/admin-employers"))
        .stdout(predicate::str::contains("/employer-dashboard"))
        .stdout(predicate::str::contains("worker"));
}

#[test]
fn home_page_renders_without_network() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["open", "/"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Migrant Labor & Grievance Management System"))
        .stdout(predicate::str::contains("mlgms open /login"));
}

#[test]
fn unknown_path_falls_back_to_home() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["open", "/no-such-page"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Migrant Labor & Grievance Management System"));
}

#[test]
fn guarded_page_redirects_to_login_without_session() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["open", "/jobs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Worker Login"))
        .stderr(predicate::str::contains("/jobs → /login"));
}

#[test]
fn status_reports_no_sessions_initially() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("not logged in"));
}

#[test]
fn worker_login_persists_session() {
    let mut ctx = TestContext::new();

    ctx.login_worker();

    assert!(ctx.session_dir().exists());
    ctx.cli()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("MIG00007"));
}

#[test]
fn worker_can_apply_for_a_job() {
    let mut ctx = TestContext::new();
    ctx.login_worker();
    let (_jobs, _stats) = jobs_mocks(&mut ctx);
    let apply = ctx
        .server
        .mock("POST", "/api/jobs/apply/42")
        .match_header("authorization", "Bearer sess-7")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success": true, "message": "Application submitted successfully", "application_id": "APP9"}"#)
        .expect(1)
        .create();

    ctx.cli()
        .args(["worker", "apply", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Application ID: APP9"));

    apply.assert();
}

#[test]
fn rejected_application_exits_with_failure() {
    let mut ctx = TestContext::new();
    ctx.login_worker();
    let (_jobs, _stats) = jobs_mocks(&mut ctx);
    let _apply = ctx
        .server
        .mock("POST", "/api/jobs/apply/42")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success": false, "message": "You have already applied for this job"}"#)
        .create();

    ctx.cli()
        .args(["worker", "apply", "42"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("You have already applied for this job"));
}

#[test]
fn worker_action_without_session_is_an_error() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["worker", "apply", "42"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn unauthorized_response_clears_worker_session() {
    let mut ctx = TestContext::new();
    ctx.login_worker();
    let _dashboard = ctx
        .server
        .mock("GET", "/api/dashboard/current")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success": false, "message": "Not logged in"}"#)
        .create();

    ctx.cli().args(["open", "/dashboard"]).assert().code(1);

    ctx.cli()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("MIG00007").not());
}

#[test]
fn worker_logout_returns_home() {
    let mut ctx = TestContext::new();
    ctx.login_worker();
    let _logout = ctx
        .server
        .mock("POST", "/api/logout")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success": true}"#)
        .create();

    ctx.cli()
        .args(["worker", "logout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out."))
        .stdout(predicate::str::contains("Migrant Labor & Grievance Management System"));
}

#[test]
fn admin_routes_require_admin_session() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["open", "/admin-employers"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Admin"));
}

#[test]
fn invalid_config_is_reported() {
    let ctx = TestContext::new();
    std::fs::write(ctx.config_path(), "[api]\nbase_url = \"ftp://example\"\n").unwrap();

    ctx.cli()
        .arg("status")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("api.base_url"));
}

#[test]
fn edit_profile_without_profile_record_fails() {
    let mut ctx = TestContext::new();
    ctx.login_worker();
    let _profile = ctx
        .server
        .mock("GET", "/api/profile")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success": true}"#)
        .create();
    let update = ctx.server.mock("PUT", "/api/profile/update").expect(0).create();

    ctx.cli()
        .args(["worker", "edit-profile", "--set", "district=Gaya"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Profile not found."));

    update.assert();
}

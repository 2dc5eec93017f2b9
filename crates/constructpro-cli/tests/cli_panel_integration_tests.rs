//! CLI integration tests
//!
//! Runs the built binary against a scratch data directory and checks
//! the rendered panel output and persistence across invocations.

use std::process::{Command, Output};
use tempfile::TempDir;

fn run(temp_dir: &TempDir, args: &[&str]) -> Output {
    let cli_bin = env!("CARGO_BIN_EXE_constructpro");
    let data_dir = temp_dir.path().join("panels");

    Command::new(cli_bin)
        .arg("--data-dir")
        .arg(&data_dir)
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_banner_list_shows_seed_on_first_run() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(&temp_dir, &["banner", "list"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("# Banner Management"));
    assert!(text.contains("2 banners found"));
    assert!(text.contains("Summer Construction Sale"));
    assert!(text.contains("Project Showcase"));
}

#[test]
fn test_create_persists_across_invocations() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(
        &temp_dir,
        &[
            "banner",
            "create",
            "--title",
            "Launch Sale",
            "--page",
            "homepage",
            "--start-date",
            "2025-01-01",
            "--end-date",
            "2025-01-31",
        ],
    );
    assert!(output.status.success());
    assert!(stdout(&output).contains("Banner created successfully!"));

    let output = run(&temp_dir, &["banner", "list"]);
    let text = stdout(&output);
    assert!(text.contains("3 banners found"));
    // New record is prepended and keeps the form defaults.
    assert!(text.contains("Launch Sale [active]"));
}

#[test]
fn test_invalid_draft_is_rejected() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(&temp_dir, &["banner", "create", "--title", "No Dates"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Page placement is required"));

    let output = run(&temp_dir, &["banner", "list"]);
    assert!(stdout(&output).contains("2 banners found"));
}

#[test]
fn test_page_query_resolves_edit_form() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(&temp_dir, &["page", "banner", "action=edit&id=1"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("# Edit Banner"));
    assert!(text.contains("Summer Construction Sale"));
}

#[test]
fn test_page_query_unknown_action_fails() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(&temp_dir, &["page", "banner", "action=destroy"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown action 'destroy'"));
}

#[test]
fn test_delete_requires_confirmation() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(&temp_dir, &["banner", "delete", "1"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--yes"));

    let output = run(&temp_dir, &["banner", "delete", "1", "--yes"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Banner deleted successfully!"));

    let output = run(&temp_dir, &["banner", "list"]);
    assert!(stdout(&output).contains("1 banner found"));
}

#[test]
fn test_contact_open_marks_read() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(&temp_dir, &["contact", "open", "1"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("# Enquiry ENQ-0001"));
    assert!(text.contains("Rahul Sharma"));
    assert!(text.contains("- Status: Read"));

    // The read marker persists.
    let output = run(&temp_dir, &["contact", "list"]);
    assert!(!stdout(&output).contains("Status: New"));
}

#[test]
fn test_seed_resets_collections() {
    let temp_dir = TempDir::new().unwrap();

    run(&temp_dir, &["banner", "delete", "1", "--yes"]);
    run(&temp_dir, &["banner", "delete", "2", "--yes"]);
    let output = run(&temp_dir, &["banner", "list"]);
    assert!(stdout(&output).contains("No banners found"));

    let output = run(&temp_dir, &["seed", "banner"]);
    assert!(output.status.success());

    let output = run(&temp_dir, &["banner", "list"]);
    assert!(stdout(&output).contains("2 banners found"));
}

#[test]
fn test_auth_session_lifecycle() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(&temp_dir, &["auth", "status"]);
    assert!(stdout(&output).contains("Not logged in"));

    let output = run(
        &temp_dir,
        &["auth", "login", "--email", "admin@constructpro.in", "--password", "hunter22"],
    );
    assert!(output.status.success());
    assert!(stdout(&output).contains("Logged in as admin@constructpro.in"));

    let output = run(&temp_dir, &["auth", "status"]);
    assert!(stdout(&output).contains("Logged in as admin@constructpro.in"));

    let output = run(&temp_dir, &["auth", "logout"]);
    assert!(stdout(&output).contains("Logged out"));

    let output = run(&temp_dir, &["auth", "status"]);
    assert!(stdout(&output).contains("Not logged in"));
}

#[test]
fn test_login_requires_both_fields() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(
        &temp_dir,
        &["auth", "login", "--email", "", "--password", "hunter22"],
    );
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Please fill in all fields"));
}

#[test]
fn test_project_toggle_pauses_ongoing() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(&temp_dir, &["project", "toggle", "1"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Project 1 is now On Hold"));

    let output = run(&temp_dir, &["project", "list", "--filter", "on-hold"]);
    assert!(stdout(&output).contains("Luxury Residential Complex"));
}

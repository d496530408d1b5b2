// BDD tests for the garden binary
//
// Feature: Scripted garden demonstration
//   As an operator
//   I want one run to exercise every failure handler
//   So that I can see how each garden error is caught

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn bdd_demo_runs_to_completion() {
    // Scenario: Default run
    //   When I run "garden"
    //   Then it exits 0
    //   And the transcript reaches the final line

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_garden"));

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("=== Garden Management System ==="))
        .stdout(predicate::str::contains("Garden management system test complete!"));
}

#[test]
fn bdd_demo_catches_each_failure() {
    // Scenario: Every handler fires
    //   When I run "garden"
    //   Then invalid plants, the health alert and the tank check are all caught

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_garden"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Catch (Garden Management): Identification Error: Plant name cannot be empty.",
        ))
        .stdout(predicate::str::contains("Catch (Unexpected): Type Error:"))
        .stdout(predicate::str::contains("Closing watering system (cleanup)"))
        .stdout(predicate::str::contains(
            "Health Monitoring Alert: Diagnostic Failure for Blue spider lily",
        ))
        .stdout(predicate::str::contains("System Recovery Catch:"))
        .stdout(predicate::str::contains(
            "System integrity verified. Continuing operation...",
        ));
}

#[test]
fn bdd_logs_stay_off_stdout() {
    // Scenario: Verbose logging
    //   Given RUST_LOG enables garden_core debug output
    //   When I run "garden"
    //   Then log records go to stderr and stdout holds only the transcript

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_garden"));
    cmd.env("RUST_LOG", "garden_core=debug");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("DEBUG").not())
        .stderr(predicate::str::contains("garden created"));
}

#[test]
fn bdd_rejects_unknown_arguments() {
    // Scenario: Stray argument
    //   When I run "garden water"
    //   Then clap rejects it with a usage error

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_garden"));
    cmd.arg("water");

    cmd.assert().failure().stderr(predicate::str::contains("Usage"));
}

#[test]
fn bdd_default_logging_shows_garden_warnings_only() {
    // Scenario: No RUST_LOG
    //   When I run "garden" without RUST_LOG
    //   Then garden warnings reach stderr and info records do not

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_garden"));
    cmd.env_remove("RUST_LOG");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("health check failed"))
        .stderr(predicate::str::contains("garden created").not());
}

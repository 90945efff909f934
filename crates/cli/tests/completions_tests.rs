//! Tests for help output and shell completion generation.

mod common;

use common::lap_cmd;
use predicates::prelude::*;

#[test]
fn bash_completions_mention_binary_and_commands() {
    lap_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("lap-cli")
                .and(predicate::str::contains("licitacoes"))
                .and(predicate::str::contains("relatorios")),
        );
}

#[test]
fn completions_ignore_invalid_configuration() {
    lap_cmd()
        .env("LAP_API_URL", "not a url")
        .args(["completions", "zsh"])
        .assert()
        .success();
}

#[test]
fn top_level_help_lists_commands() {
    lap_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("dashboard")
            .and(predicate::str::contains("ceis"))
            .and(predicate::str::contains("--export-format")),
    );
}

#[test]
fn subcommand_help_describes_flags() {
    lap_cmd()
        .args(["municipios", "list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--max-distance").and(predicate::str::contains("snapped")));
}

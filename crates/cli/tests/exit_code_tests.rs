//! Integration tests for structured exit codes.
//!
//! These tests verify that lap-cli returns the documented exit codes so shell
//! scripts can branch on the failure kind.

mod common;

use common::{lap_cmd, lap_cmd_with_base_url};
use predicates::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn success_returns_exit_code_0() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/governanca/ranking"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    lap_cmd_with_base_url(&server.uri())
        .args(["governanca", "ranking"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Nenhum município no ranking."));
}

#[tokio::test]
async fn server_error_returns_exit_code_1() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/alertas"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(serde_json::json!({ "detail": "boom" })),
        )
        .mount(&server)
        .await;

    lap_cmd_with_base_url(&server.uri())
        .args(["alertas", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("boom"));
}

#[test]
fn invalid_base_url_returns_exit_code_2() {
    lap_cmd()
        .env("LAP_API_URL", "ftp://example.com")
        .arg("dashboard")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn invalid_env_number_returns_exit_code_2() {
    lap_cmd()
        .env("LAP_PER_PAGE", "abc")
        .arg("dashboard")
        .assert()
        .code(2);
}

#[test]
fn connection_refused_returns_exit_code_3() {
    // Nothing listens on the discard port
    lap_cmd_with_base_url("http://127.0.0.1:9")
        .args(["alertas", "list"])
        .assert()
        .code(3);
}

#[tokio::test]
async fn not_found_returns_exit_code_4() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/alertas"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    lap_cmd_with_base_url(&server.uri())
        .args(["alertas", "toggle", "99"])
        .assert()
        .code(4);
}

#[tokio::test]
async fn api_404_returns_exit_code_4() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/precos/historico"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({ "detail": "Item não encontrado" })),
        )
        .mount(&server)
        .await;

    lap_cmd_with_base_url(&server.uri())
        .args(["itens", "historico", "caneta"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Item não encontrado"));
}

#[test]
fn alert_validation_returns_exit_code_5() {
    // Validation happens before any request is sent
    lap_cmd_with_base_url("http://127.0.0.1:9")
        .args(["alertas", "create", "--nome", " ", "--destinatario", "a@b.c"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("nome do alerta"));
}

#[test]
fn invalid_report_date_returns_exit_code_5() {
    lap_cmd_with_base_url("http://127.0.0.1:9")
        .args(["relatorios", "generate", "--data-inicio", "31/05/2024"])
        .assert()
        .code(5);
}

#[test]
fn invalid_output_format_returns_exit_code_5() {
    lap_cmd_with_base_url("http://127.0.0.1:9")
        .args(["dashboard", "-o", "xml"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Invalid output format"));
}

#[test]
fn unknown_subcommand_is_a_clap_usage_error() {
    lap_cmd().arg("nope").assert().code(2);
}

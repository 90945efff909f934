//! Integration tests for `--output-file` and `--export`.

mod common;

use common::lap_cmd_with_base_url;
use lap_client::testing::load_fixture;
use predicates::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn municipios_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/municipios"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("municipios/list.json")),
        )
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn output_file_receives_formatted_output() {
    let server = municipios_server().await;
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("out/municipios.json");

    lap_cmd_with_base_url(&server.uri())
        .args(["municipios", "list", "-o", "json", "--output-file"])
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Results written to"));

    let written = std::fs::read_to_string(&target).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn export_writes_csv_next_to_stdout_output() {
    let server = municipios_server().await;
    let dir = tempfile::tempdir().unwrap();

    lap_cmd_with_base_url(&server.uri())
        .args(["municipios", "list", "--export", "municipios", "--export-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Goiânia"))
        .stderr(predicate::str::contains("Exportado para"));

    let csv = std::fs::read_to_string(dir.path().join("municipios.csv")).unwrap();
    let mut lines = csv.lines();
    assert!(lines.next().unwrap().starts_with("id,codigo_ibge,nome,uf"));
    assert_eq!(lines.count(), 4);
}

#[tokio::test]
async fn export_of_empty_list_writes_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/alertas"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "items": [] })))
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();

    lap_cmd_with_base_url(&server.uri())
        .args(["alertas", "list", "--export", "alertas", "--export-format", "json"])
        .arg("--export-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Nada para exportar."));

    assert!(!dir.path().join("alertas.json").exists());
}

#[tokio::test]
async fn quiet_suppresses_status_lines() {
    let server = municipios_server().await;
    let dir = tempfile::tempdir().unwrap();

    lap_cmd_with_base_url(&server.uri())
        .args(["municipios", "list", "--quiet", "--export", "m", "--export-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    assert!(dir.path().join("m.csv").exists());
}

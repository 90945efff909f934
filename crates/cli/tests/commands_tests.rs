//! Integration tests for the `lap-cli` resource commands against a mock API.

mod common;

use common::lap_cmd_with_base_url;
use lap_client::testing::load_fixture;
use predicates::prelude::*;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn licitacoes_list_sends_page_and_search() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/licitacoes/"))
        .and(query_param("page", "2"))
        .and(query_param("per_page", "20"))
        .and(query_param("search", "pregão"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("licitacoes/list_page2.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    lap_cmd_with_base_url(&server.uri())
        .args(["licitacoes", "list", "--search", "pregão", "--page", "2"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("90012/2024")
                .and(predicate::str::contains("Página 2 de 2 (22 registros)")),
        );
}

#[tokio::test]
async fn licitacoes_json_output_is_parseable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/licitacoes/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("licitacoes/list_page2.json")),
        )
        .mount(&server)
        .await;

    let output = lap_cmd_with_base_url(&server.uri())
        .args(["licitacoes", "list", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total"], 22);
    assert_eq!(value["items"][1]["id"], "42");
    assert_eq!(value["items"][1]["valor_total_estimado"], 98000.0);
}

#[tokio::test]
async fn dashboard_shows_kpis() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/estatisticas/kpis"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("estatisticas/kpis.json")),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/estatisticas/por-mes"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("estatisticas/por_mes.json")),
        )
        .mount(&server)
        .await;

    lap_cmd_with_base_url(&server.uri())
        .arg("dashboard")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Total de licitações")
                .and(predicate::str::contains("1.523"))
                .and(predicate::str::contains("Licitações")),
        );
}

#[tokio::test]
async fn fornecedores_porte_filter_is_local() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/estatisticas/top-fornecedores"))
        .and(query_param("limite", "50"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("estatisticas/top_fornecedores.json")),
        )
        .mount(&server)
        .await;

    lap_cmd_with_base_url(&server.uri())
        .args(["fornecedores", "list", "--porte", "ME", "-o", "csv"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Papelaria Central ME")
                .and(predicate::str::contains("Construtora Horizonte").not()),
        );
}

#[tokio::test]
async fn fornecedores_rejects_unknown_porte() {
    lap_cmd_with_base_url("http://127.0.0.1:9")
        .args(["fornecedores", "list", "--porte", "grande"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("porte inválido"));
}

#[tokio::test]
async fn municipios_distance_keeps_unknown_distances() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/municipios"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("municipios/list.json")),
        )
        .mount(&server)
        .await;

    lap_cmd_with_base_url(&server.uri())
        .args(["municipios", "list", "--max-distance", "100"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Aparecida de Goiânia")
                .and(predicate::str::contains("Rio Verde"))
                .and(predicate::str::contains("Brasília").not()),
        );
}

#[tokio::test]
async fn alertas_toggle_flips_current_state() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/alertas"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("alertas/list.json")))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/api/v1/alertas/2"))
        .and(body_json(serde_json::json!({ "ativo": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    lap_cmd_with_base_url(&server.uri())
        .args(["alertas", "toggle", "2"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Alerta \"Risco alto\" ativado."));
}

#[tokio::test]
async fn alertas_create_posts_form_with_numeric_amount() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/alertas"))
        .and(body_json(serde_json::json!({
            "nome": "Obras",
            "tipo": "licitacao",
            "palavras_chave": "asfalto, pavimentação",
            "valor_minimo": 50000.0,
            "canal": "telegram",
            "destinatario": "@obras"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({ "id": 9 })))
        .expect(1)
        .mount(&server)
        .await;

    lap_cmd_with_base_url(&server.uri())
        .args([
            "alertas",
            "create",
            "--nome",
            "Obras",
            "--palavras-chave",
            "asfalto, pavimentação",
            "--valor-minimo",
            "50000",
            "--canal",
            "telegram",
            "--destinatario",
            "@obras",
        ])
        .assert()
        .success();
}

#[tokio::test]
async fn ceis_check_reports_debarment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/ceis-cnep/verificar/12345678000190"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("ceis/verificar_impedida.json")),
        )
        .mount(&server)
        .await;

    lap_cmd_with_base_url(&server.uri())
        .args(["ceis", "check", "12.345.678/0001-90"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Resultado: empresa impedida")
                .and(predicate::str::contains("Fonte: CEIS")),
        );
}

#[tokio::test]
async fn ceis_check_failure_is_not_reported_clear() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/ceis-cnep/verificar/12345678000190"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let output = lap_cmd_with_base_url(&server.uri())
        .args(["ceis", "check", "12345678000190", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["impedida"], false);
    assert_eq!(value["resultado"], "check_failed");
}

#[tokio::test]
async fn relatorios_list_prints_absolute_links() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/relatorios/listar"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("relatorios/list.json")),
        )
        .mount(&server)
        .await;

    lap_cmd_with_base_url(&server.uri())
        .args(["relatorios", "list", "-o", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "{}/api/v1/relatorios/download/licitacoes_20240531.pdf",
            server.uri()
        )));
}

#[tokio::test]
async fn governanca_ranking_shows_weights() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/governanca/ranking"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("governanca/ranking.json")),
        )
        .mount(&server)
        .await;

    lap_cmd_with_base_url(&server.uri())
        .args(["governanca", "ranking"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pesos: Transparência 30%"));
}

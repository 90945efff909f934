//! Dashboard, supplier ranking and governance side effect tests.

mod common;

use common::*;
use wiremock::matchers::{method, path, query_param};

#[tokio::test]
async fn test_load_dashboard_joins_kpis_and_series() {
    let mut harness = SideEffectsTestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/estatisticas/kpis"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("estatisticas/kpis.json")),
        )
        .expect(1)
        .mount(&harness.mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/estatisticas/por-mes"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("estatisticas/por_mes.json")),
        )
        .expect(1)
        .mount(&harness.mock_server)
        .await;

    let actions = harness.handle_and_collect(Action::LoadDashboard, 2).await;

    assert_loading_brackets(&actions);
    let data = actions
        .iter()
        .find_map(|a| match a {
            Action::DashboardLoaded(Ok(data)) => Some(data),
            _ => None,
        })
        .expect("Should have DashboardLoaded(Ok)");
    assert_eq!(data.kpis.total_licitacoes, 1523);
    assert_eq!(data.por_mes.series.len(), 3);
}

#[tokio::test]
async fn test_load_dashboard_fails_when_either_call_fails() {
    let mut harness = SideEffectsTestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/estatisticas/kpis"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "detail": "falha interna"
        })))
        .mount(&harness.mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/estatisticas/por-mes"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("estatisticas/por_mes.json")),
        )
        .mount(&harness.mock_server)
        .await;

    let actions = harness.handle_and_collect(Action::LoadDashboard, 2).await;

    assert_loading_brackets(&actions);
    assert!(
        actions
            .iter()
            .any(|a| matches!(a, Action::DashboardLoaded(Err(_)))),
        "Should send DashboardLoaded(Err)"
    );
}

#[tokio::test]
async fn test_load_fornecedores_passes_limit() {
    let mut harness = SideEffectsTestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/estatisticas/top-fornecedores"))
        .and(query_param("limite", "50"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("estatisticas/top_fornecedores.json")),
        )
        .expect(1)
        .mount(&harness.mock_server)
        .await;

    let actions = harness
        .handle_and_collect(Action::LoadFornecedores { seq: 2, limite: 50 }, 2)
        .await;

    assert_loading_brackets(&actions);
    let page = actions
        .iter()
        .find_map(|a| match a {
            Action::FornecedoresLoaded {
                seq: 2,
                result: Ok(page),
            } => Some(page),
            _ => None,
        })
        .expect("Should have FornecedoresLoaded(Ok)");
    assert!(!page.items.is_empty());
}

#[tokio::test]
async fn test_load_governanca_keeps_ranking_order() {
    let mut harness = SideEffectsTestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/governanca/ranking"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("governanca/ranking.json")),
        )
        .mount(&harness.mock_server)
        .await;

    let actions = harness
        .handle_and_collect(Action::LoadGovernanca { seq: 5 }, 2)
        .await;

    let page = actions
        .iter()
        .find_map(|a| match a {
            Action::GovernancaLoaded {
                seq: 5,
                result: Ok(page),
            } => Some(page),
            _ => None,
        })
        .expect("Should have GovernancaLoaded(Ok)");
    assert_eq!(page.items[0].municipio, "Goiânia");
}

#[tokio::test]
async fn test_refresh_has_no_channel_output() {
    let mut harness = SideEffectsTestHarness::new().await;

    let actions = harness.handle_and_collect(Action::Refresh, 1).await;

    assert!(actions.is_empty(), "Refresh only clears the cache: {actions:?}");
}

//! Retry and error mapping behavior.

mod common;

use common::*;
use wiremock::matchers::{method, path};

#[tokio::test]
async fn test_read_retries_after_503() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/estatisticas/kpis"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/estatisticas/kpis"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("estatisticas/kpis.json")),
        )
        .mount(&mock_server)
        .await;

    let client = LapClient::builder()
        .base_url(mock_server.uri())
        .max_retries(1)
        .build()
        .unwrap();

    let kpis = client.get_kpis().await.unwrap();
    assert_eq!(kpis.total_licitacoes, 1523);
    assert_eq!(kpis.economia_gerada.percentual, 9.16);
    assert_eq!(
        requests_to(&mock_server, "/api/v1/estatisticas/kpis").await.len(),
        2
    );
}

#[tokio::test]
async fn test_read_gives_up_after_max_retries() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/governanca/ranking"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&mock_server)
        .await;

    let client = LapClient::builder()
        .base_url(mock_server.uri())
        .max_retries(2)
        .build()
        .unwrap();

    let err = client.ranking_governanca().await.unwrap_err();
    match err {
        ClientError::MaxRetriesExceeded(attempts, inner) => {
            assert_eq!(attempts, 3);
            assert_eq!(inner.status(), Some(502));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_post_is_not_retried_on_502() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/ceis-cnep/atualizar"))
        .respond_with(ResponseTemplate::new(502))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = LapClient::builder()
        .base_url(mock_server.uri())
        .max_retries(3)
        .build()
        .unwrap();

    let err = client.refresh_ceis().await.unwrap_err();
    assert_eq!(err.status(), Some(502));
}

#[tokio::test]
async fn test_404_maps_to_not_found_with_detail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/precos/historico"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({"detail": "Item não encontrado"})),
        )
        .mount(&mock_server)
        .await;

    let client = uncached_client(&mock_server.uri());
    let err = client.historico_precos("papel a4", 24).await.unwrap_err();

    assert!(matches!(err, ClientError::NotFound(ref msg) if msg == "Item não encontrado"));
    assert_eq!(err.user_message(), "Recurso não encontrado");
}

#[tokio::test]
async fn test_validation_error_detail_is_surfaced() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/estatisticas/por-mes"))
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "detail": [{"loc": ["query", "meses"], "msg": "value is not a valid integer"}]
        })))
        .mount(&mock_server)
        .await;

    let client = uncached_client(&mock_server.uri());
    let err = client.get_por_mes().await.unwrap_err();

    match err {
        ClientError::ApiError { status, message, .. } => {
            assert_eq!(status, 422);
            assert_eq!(message, "value is not a valid integer");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_json_is_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/estatisticas/kpis"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = uncached_client(&mock_server.uri());
    let err = client.get_kpis().await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse(_)));
}

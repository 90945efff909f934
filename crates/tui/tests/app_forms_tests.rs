//! Tests for the alert and report forms and the alert toggle.
//!
//! ## Invariants
//! - An open form captures every key, including global ones
//! - Invalid input opens the error popup and keeps the form open
//! - A failed write keeps the typed values; success closes the form

mod helpers;

use std::sync::Arc;

use helpers::*;
use lap_client::{Alerta, ClientError};
use lap_tui::{Action, App, CurrentScreen};

fn load_alertas(app: &mut App) {
    let seq = app.alertas.fetch.issue();
    app.update(Action::AlertasLoaded {
        seq,
        result: Ok(fixture_page::<Alerta>("alertas/list.json")),
    });
}

fn alertas_app() -> App {
    let mut app = App::new(None, CurrentScreen::Alertas);
    load_alertas(&mut app);
    app
}

#[test]
fn test_open_form_captures_global_keys() {
    let mut app = App::new(None, CurrentScreen::Alertas);
    app.handle_input(key('n'));
    assert!(app.alertas.form.is_some());
    assert!(app.is_editing());

    assert!(type_text(&mut app, "q2").is_none());
    assert!(app.handle_input(tab_key()).is_none());
    assert_eq!(app.alertas.form.as_ref().unwrap().nome, "q2");
    assert_eq!(app.current_screen, CurrentScreen::Alertas);

    app.handle_input(esc_key());
    assert!(app.alertas.form.is_none());
}

#[test]
fn test_alerta_form_requires_name() {
    let mut app = App::new(None, CurrentScreen::Alertas);
    app.handle_input(key('n'));

    assert!(app.handle_input(enter_key()).is_none());
    assert!(app.error_popup.as_deref().unwrap().contains("nome"));
    assert!(app.alertas.form.is_some());
}

#[test]
fn test_alerta_form_submits_request() {
    let mut app = App::new(None, CurrentScreen::Alertas);
    app.handle_input(key('n'));
    type_text(&mut app, "Obras");
    app.handle_input(tab_key()); // tipo
    app.handle_input(key(' '));
    app.handle_input(tab_key()); // palavras-chave
    type_text(&mut app, "asfalto");
    app.handle_input(tab_key()); // valor mínimo
    type_text(&mut app, "5x0000");
    app.handle_input(tab_key()); // canal
    app.handle_input(tab_key()); // destinatário
    type_text(&mut app, "obras@goiania.go.gov.br");

    match app.handle_input(enter_key()) {
        Some(Action::CreateAlerta(form)) => {
            assert_eq!(form.nome, "Obras");
            assert_eq!(form.tipo, "anomalia");
            assert_eq!(form.palavras_chave, "asfalto");
            assert_eq!(form.valor_minimo, "50000");
            assert_eq!(form.canal, "email");
        }
        other => panic!("expected CreateAlerta, got {other:?}"),
    }
    let form = app.alertas.form.as_ref().unwrap();
    assert!(form.submitting);

    // Keys are ignored while the request is in flight.
    app.handle_input(key('x'));
    assert_eq!(app.alertas.form.as_ref().unwrap().destinatario, "obras@goiania.go.gov.br");
}

#[test]
fn test_failed_create_keeps_values() {
    let mut app = App::new(None, CurrentScreen::Alertas);
    app.handle_input(key('n'));
    type_text(&mut app, "Obras");

    app.update(Action::AlertaCreated(Err(Arc::new(ClientError::Validation(
        "destinatário inválido".to_string(),
    )))));

    let form = app.alertas.form.as_ref().unwrap();
    assert_eq!(form.nome, "Obras");
    assert!(!form.submitting);
    assert!(app.error_popup.as_deref().unwrap().contains("destinatário inválido"));
}

#[test]
fn test_toggle_uses_selected_state() {
    let mut app = alertas_app();
    assert_eq!(app.alertas.items().len(), 2);

    match app.handle_input(enter_key()) {
        Some(Action::ToggleAlerta { id, ativo }) => {
            assert_eq!(id, "1");
            assert!(ativo);
        }
        other => panic!("expected ToggleAlerta, got {other:?}"),
    }

    app.handle_input(down_key());
    match app.handle_input(key(' ')) {
        Some(Action::ToggleAlerta { id, ativo }) => {
            assert_eq!(id, "2");
            assert!(!ativo);
        }
        other => panic!("expected ToggleAlerta, got {other:?}"),
    }
}

#[test]
fn test_reload_keeps_alert_selection() {
    let mut app = alertas_app();
    app.handle_input(down_key());
    load_alertas(&mut app);
    assert_eq!(app.alertas.table.selected(), Some(1));
}

#[test]
fn test_relatorio_rejects_inverted_range() {
    let mut app = App::new(None, CurrentScreen::Relatorios);
    app.handle_input(key('g'));
    app.handle_input(tab_key());
    app.handle_input(tab_key());
    type_text(&mut app, "2024-06-10");
    app.handle_input(tab_key());
    type_text(&mut app, "2024-06-01");

    assert!(app.handle_input(enter_key()).is_none());
    assert!(app.error_popup.as_deref().unwrap().contains("posterior"));
    assert!(app.relatorios.form.is_some());
}

#[test]
fn test_relatorio_rejects_bad_date() {
    let mut app = App::new(None, CurrentScreen::Relatorios);
    app.handle_input(key('g'));
    app.handle_input(tab_key());
    app.handle_input(tab_key());
    type_text(&mut app, "10/06/2024");

    assert!(app.handle_input(enter_key()).is_none());
    assert!(app.error_popup.as_deref().unwrap().contains("AAAA-MM-DD"));
}

#[test]
fn test_relatorio_submits_request() {
    let mut app = App::new(None, CurrentScreen::Relatorios);
    app.handle_input(key('g'));
    app.handle_input(key(' ')); // tipo: licitacoes
    app.handle_input(tab_key());
    app.handle_input(key(' ')); // formato: excel
    app.handle_input(tab_key());
    type_text(&mut app, "2024-05-01");
    app.handle_input(tab_key());
    type_text(&mut app, "2024-05-31");

    match app.handle_input(enter_key()) {
        Some(Action::GenerateRelatorio(pedido)) => {
            assert_eq!(pedido.tipo, "licitacoes");
            assert_eq!(pedido.formato, "excel");
            assert_eq!(pedido.data_inicio, "2024-05-01");
            assert_eq!(pedido.data_fim, "2024-05-31");
        }
        other => panic!("expected GenerateRelatorio, got {other:?}"),
    }

    app.update(Action::RelatorioGenerated(Ok(None)));
    assert!(app.relatorios.form.is_none());
    assert_eq!(app.toasts.len(), 1);
}

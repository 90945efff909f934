//! Tests for screen filters.
//!
//! ## Invariants
//! - Porte and distance filters are applied locally and never issue a request
//! - UF, fonte, item description and period changes issue a new request
//! - CNPJ input is normalized to digits before the check

mod helpers;

use helpers::*;
use lap_client::models::Porte;
use lap_client::{CnpjCheck, ExportFormat, Fornecedor, Municipio};
use lap_tui::ui::ToastLevel;
use lap_tui::{Action, App, CurrentScreen};

#[test]
fn test_porte_filter_is_local() {
    let mut app = App::new(None, CurrentScreen::Fornecedores);
    let seq = app.fornecedores.fetch.issue();
    app.update(Action::FornecedoresLoaded {
        seq,
        result: Ok(fixture_page::<Fornecedor>("estatisticas/top_fornecedores.json")),
    });
    assert_eq!(app.fornecedores.visible().len(), 3);

    for expected in [Some(Porte::Me), Some(Porte::Epp), Some(Porte::Demais), None] {
        assert!(app.handle_input(key('f')).is_none());
        assert_eq!(app.fornecedores.porte, expected);
    }

    app.handle_input(key('f'));
    let visible = app.fornecedores.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].razao_social, "Papelaria Central ME");
}

#[test]
fn test_distance_slider_is_local_and_clamped() {
    let mut app = App::new(None, CurrentScreen::Municipios);
    let seq = app.municipios.fetch.issue();
    app.update(Action::MunicipiosLoaded {
        seq,
        result: Ok(fixture_page::<Municipio>("municipios/list.json")),
    });
    // Rio Verde has no distance and always stays listed.
    assert_eq!(app.municipios.visible().len(), 4);

    assert!(app.handle_input(key('+')).is_none());
    assert_eq!(app.municipios.max_distance_km, 200);

    for _ in 0..3 {
        assert!(app.handle_input(key('-')).is_none());
    }
    assert_eq!(app.municipios.max_distance_km, 170);
    let names: Vec<&str> = app
        .municipios
        .visible()
        .iter()
        .map(|m| m.nome.as_str())
        .collect();
    assert!(!names.contains(&"Brasília"));
    assert_eq!(names.len(), 3);

    for _ in 0..30 {
        app.handle_input(key('-'));
    }
    assert_eq!(app.municipios.max_distance_km, 50);
}

#[test]
fn test_uf_filter_requests_upper_case() {
    let mut app = App::new(None, CurrentScreen::Municipios);
    app.handle_input(key('u'));
    type_text(&mut app, "goi");
    assert_eq!(app.municipios.uf.value, "go");

    match app.handle_input(enter_key()) {
        Some(Action::LoadMunicipios { uf, .. }) => assert_eq!(uf.as_deref(), Some("GO")),
        other => panic!("expected LoadMunicipios, got {other:?}"),
    }
}

#[test]
fn test_fonte_cycle_reloads_registry() {
    let mut app = App::new(None, CurrentScreen::Ceis);
    for expected in [Some("CEIS"), Some("CNEP"), None] {
        match app.handle_input(key('f')) {
            Some(Action::LoadEmpresasImpedidas { fonte, .. }) => {
                assert_eq!(fonte.as_deref(), expected)
            }
            other => panic!("expected LoadEmpresasImpedidas, got {other:?}"),
        }
    }
}

#[test]
fn test_cnpj_check_normalizes_digits() {
    let mut app = App::new(None, CurrentScreen::Ceis);
    app.handle_input(key('c'));
    type_text(&mut app, "12.345.678/0001-90");

    let action = app.handle_input(enter_key());
    let Some(Action::CheckCnpj { seq, cnpj }) = action else {
        panic!("expected CheckCnpj, got {action:?}");
    };
    assert_eq!(cnpj, "12345678000190");
    assert!(app.ceis.checking);

    app.update(Action::CnpjChecked {
        seq,
        cnpj,
        check: CnpjCheck::Clear,
    });
    assert!(!app.ceis.checking);
    assert!(matches!(app.ceis.check, Some((_, CnpjCheck::Clear))));
}

/// Type `cnpj` into the check field and submit it, returning the request sequence.
fn submit_cnpj(app: &mut App, cnpj: &str) -> u64 {
    app.handle_input(key('c'));
    type_text(app, cnpj);
    match app.handle_input(enter_key()) {
        Some(Action::CheckCnpj { seq, .. }) => seq,
        other => panic!("expected CheckCnpj, got {other:?}"),
    }
}

#[test]
fn test_late_verdict_for_earlier_cnpj_is_dropped() {
    let mut app = App::new(None, CurrentScreen::Ceis);
    let first = submit_cnpj(&mut app, "11111111000111");
    app.ceis.cnpj.clear();
    let second = submit_cnpj(&mut app, "22222222000122");

    app.update(Action::CnpjChecked {
        seq: second,
        cnpj: "22222222000122".to_string(),
        check: CnpjCheck::Clear,
    });
    app.update(Action::CnpjChecked {
        seq: first,
        cnpj: "11111111000111".to_string(),
        check: CnpjCheck::Impedida {
            fonte: Some("CEIS".to_string()),
            motivo: None,
        },
    });

    let (cnpj, check) = app.ceis.check.as_ref().expect("a verdict is shown");
    assert_eq!(cnpj, "22222222000122");
    assert!(matches!(check, CnpjCheck::Clear));
    assert!(!app.ceis.checking);
}

#[test]
fn test_blank_cnpj_warns() {
    let mut app = App::new(None, CurrentScreen::Ceis);
    app.handle_input(key('c'));
    type_text(&mut app, "abc");
    assert!(app.ceis.cnpj.value.is_empty());

    assert!(matches!(
        app.handle_input(enter_key()),
        Some(Action::Notify(ToastLevel::Warning, _))
    ));
}

#[test]
fn test_itens_period_steps() {
    let mut app = App::new(None, CurrentScreen::Itens);
    assert_eq!(app.itens.meses, 24);

    // No description yet: the period moves but nothing is fetched.
    assert!(app.handle_input(key('+')).is_none());
    assert_eq!(app.itens.meses, 36);

    app.handle_input(key('/'));
    type_text(&mut app, "papel a4");
    match app.handle_input(enter_key()) {
        Some(Action::LoadHistoricoPrecos {
            descricao, meses, ..
        }) => {
            assert_eq!(descricao, "papel a4");
            assert_eq!(meses, 36);
        }
        other => panic!("expected LoadHistoricoPrecos, got {other:?}"),
    }

    assert!(matches!(
        app.handle_input(key('+')),
        Some(Action::LoadHistoricoPrecos { meses: 48, .. })
    ));
    app.handle_input(key('+'));
    assert!(app.handle_input(key('+')).is_none());
    assert_eq!(app.itens.meses, 60);

    for _ in 0..10 {
        app.handle_input(key('-'));
    }
    assert_eq!(app.itens.meses, 6);
}

#[test]
fn test_export_uses_visible_rows() {
    let mut app = App::new(None, CurrentScreen::Fornecedores);
    let seq = app.fornecedores.fetch.issue();
    app.update(Action::FornecedoresLoaded {
        seq,
        result: Ok(fixture_page::<Fornecedor>("estatisticas/top_fornecedores.json")),
    });
    app.handle_input(key('f'));
    app.handle_input(key('f'));

    match app.handle_input(key('E')) {
        Some(Action::ExportData {
            records,
            filename,
            format,
            ..
        }) => {
            assert_eq!(records.len(), 1);
            assert_eq!(filename, "fornecedores");
            assert_eq!(format, ExportFormat::Json);
        }
        other => panic!("expected ExportData, got {other:?}"),
    }
}

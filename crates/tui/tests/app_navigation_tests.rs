//! Tests for screen navigation and global keys.
//!
//! ## Invariants
//! - Tab/Shift+Tab cycle through all ten screens and wrap around
//! - Number keys 1..9 then 0 jump straight to a screen
//! - The error popup and help overlay capture keys before any binding

mod helpers;

use helpers::*;
use lap_tui::{Action, App, CurrentScreen};

#[test]
fn test_tab_cycles_and_wraps() {
    let mut app = App::new(None, CurrentScreen::Relatorios);
    let action = app.handle_input(tab_key());
    assert!(matches!(action, Some(Action::NavigateTo(CurrentScreen::Dashboard))));

    let mut app = App::new(None, CurrentScreen::Dashboard);
    let action = app.handle_input(backtab_key());
    assert!(matches!(action, Some(Action::NavigateTo(CurrentScreen::Relatorios))));
}

#[test]
fn test_full_tab_cycle_visits_every_screen_once() {
    let mut app = App::default();
    let mut seen = Vec::new();
    for _ in 0..CurrentScreen::ALL.len() {
        match app.handle_input(tab_key()) {
            Some(Action::NavigateTo(screen)) => {
                app.update(Action::NavigateTo(screen));
                seen.push(screen);
            }
            other => panic!("unexpected action {other:?}"),
        }
    }
    assert_eq!(seen.last(), Some(&CurrentScreen::Dashboard));
    seen.sort_by_key(|s| s.route());
    seen.dedup();
    assert_eq!(seen.len(), CurrentScreen::ALL.len());
}

#[test]
fn test_number_shortcuts() {
    let mut app = App::default();
    assert!(matches!(
        app.handle_input(key('2')),
        Some(Action::NavigateTo(CurrentScreen::Licitacoes))
    ));
    assert!(matches!(
        app.handle_input(key('8')),
        Some(Action::NavigateTo(CurrentScreen::Ceis))
    ));
    assert!(matches!(
        app.handle_input(key('0')),
        Some(Action::NavigateTo(CurrentScreen::Relatorios))
    ));
}

#[test]
fn test_quit_keys() {
    let mut app = App::default();
    assert!(matches!(app.handle_input(key('q')), Some(Action::Quit)));
    assert!(matches!(app.handle_input(ctrl_key('c')), Some(Action::Quit)));
}

#[test]
fn test_error_popup_captures_keys() {
    let mut app = App::default();
    app.update(Action::ShowError("Não foi possível conectar à API".to_string()));

    assert!(app.handle_input(tab_key()).is_none());
    assert!(app.handle_input(key('q')).is_some_and(|a| matches!(a, Action::DismissError)));

    app.update(Action::DismissError);
    assert!(app.error_popup.is_none());
}

#[test]
fn test_help_overlay_swallows_next_key() {
    let mut app = App::default();
    assert!(app.handle_input(key('?')).is_none());
    assert!(app.show_help);

    assert!(app.handle_input(tab_key()).is_none());
    assert!(!app.show_help);
}

#[test]
fn test_navigation_closes_help() {
    let mut app = App::default();
    app.show_help = true;
    app.update(Action::NavigateTo(CurrentScreen::Governanca));
    assert_eq!(app.current_screen, CurrentScreen::Governanca);
    assert!(!app.show_help);
}

#[test]
fn test_route_round_trip_and_fallback() {
    for screen in CurrentScreen::ALL {
        assert_eq!(CurrentScreen::from_route(screen.route()), screen);
    }
    assert_eq!(CurrentScreen::from_route("/inexistente"), CurrentScreen::Dashboard);
    assert_eq!(CurrentScreen::from_route(""), CurrentScreen::Dashboard);
}

#[test]
fn test_persisted_state_records_route_and_theme() {
    let mut app = App::new(None, CurrentScreen::Anomalias);
    app.update(Action::CycleTheme);
    let state = app.persisted_state();
    assert_eq!(state.last_route.as_deref(), Some("/anomalias"));
    assert_eq!(state.color_theme, app.color_theme);

    let restored = App::new(Some(state), CurrentScreen::Dashboard);
    assert_eq!(restored.color_theme, app.color_theme);
}

#[test]
fn test_load_actions_for_each_screen() {
    let mut app = App::default();
    for screen in CurrentScreen::ALL {
        app.update(Action::NavigateTo(screen));
        let actions = app.load_actions_for_screen();
        match screen {
            CurrentScreen::Dashboard => {
                assert!(matches!(actions.as_slice(), [Action::LoadDashboard]))
            }
            CurrentScreen::Licitacoes => {
                assert!(matches!(actions.as_slice(), [Action::LoadLicitacoes { .. }]))
            }
            CurrentScreen::Fornecedores => assert!(matches!(
                actions.as_slice(),
                [Action::LoadFornecedores { limite: 50, .. }]
            )),
            CurrentScreen::Municipios => assert!(matches!(
                actions.as_slice(),
                [Action::LoadMunicipios { uf: None, .. }]
            )),
            CurrentScreen::Itens => assert!(actions.is_empty(), "no item typed yet"),
            CurrentScreen::Anomalias => assert!(matches!(
                actions.as_slice(),
                [Action::LoadAnomalias { .. }, Action::LoadAnomaliasResumo]
            )),
            CurrentScreen::Alertas => {
                assert!(matches!(actions.as_slice(), [Action::LoadAlertas { .. }]))
            }
            CurrentScreen::Ceis => assert!(matches!(
                actions.as_slice(),
                [Action::LoadEmpresasImpedidas {
                    fonte: None,
                    uf: None,
                    ..
                }]
            )),
            CurrentScreen::Governanca => {
                assert!(matches!(actions.as_slice(), [Action::LoadGovernanca { .. }]))
            }
            CurrentScreen::Relatorios => {
                assert!(matches!(actions.as_slice(), [Action::LoadRelatorios { .. }]))
            }
        }
    }
}

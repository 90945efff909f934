//! Full-frame render tests using ratatui's `TestBackend`.
//!
//! Every screen must draw in its loading, loaded and error states without
//! panicking, including on terminals smaller than the layout asks for.

mod helpers;

use std::sync::Arc;

use helpers::*;
use lap_client::{Alerta, ClientError, EmpresaImpedida, Municipio, RankingGovernanca, Relatorio};
use lap_tui::{Action, App, CurrentScreen};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn draw(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn loaded_app() -> App {
    let mut app = App::default();
    app.api_base_url = "http://localhost:8000".to_string();

    let seq = app.licitacoes.list.reload();
    app.update(Action::LicitacoesLoaded {
        seq,
        result: Ok(fixture_page("licitacoes/list_page2.json")),
    });
    let seq = app.anomalias.list.reload();
    app.update(Action::AnomaliasLoaded {
        seq,
        result: Ok(fixture_page("anomalias/list.json")),
    });
    let seq = app.fornecedores.fetch.issue();
    app.update(Action::FornecedoresLoaded {
        seq,
        result: Ok(fixture_page("estatisticas/top_fornecedores.json")),
    });
    let seq = app.municipios.fetch.issue();
    app.update(Action::MunicipiosLoaded {
        seq,
        result: Ok(fixture_page::<Municipio>("municipios/list.json")),
    });
    let seq = app.alertas.fetch.issue();
    app.update(Action::AlertasLoaded {
        seq,
        result: Ok(fixture_page::<Alerta>("alertas/list.json")),
    });
    let seq = app.ceis.fetch.issue();
    app.update(Action::EmpresasImpedidasLoaded {
        seq,
        result: Ok(fixture_page::<EmpresaImpedida>("ceis/list.json")),
    });
    let seq = app.governanca.fetch.issue();
    app.update(Action::GovernancaLoaded {
        seq,
        result: Ok(fixture_page::<RankingGovernanca>("governanca/ranking.json")),
    });
    let seq = app.relatorios.fetch.issue();
    app.update(Action::RelatoriosLoaded {
        seq,
        result: Ok(fixture_page::<Relatorio>("relatorios/list.json")),
    });
    app
}

#[test]
fn test_every_screen_renders_loaded_data() {
    let mut app = loaded_app();
    for screen in CurrentScreen::ALL {
        app.update(Action::NavigateTo(screen));
        let text = draw(&mut app, 140, 45);
        assert!(text.contains("LAP"), "{screen:?} should draw the header");
    }

    app.update(Action::NavigateTo(CurrentScreen::Alertas));
    let text = draw(&mut app, 140, 45);
    assert!(text.contains("Material hospitalar"));

    app.update(Action::NavigateTo(CurrentScreen::Ceis));
    let text = draw(&mut app, 140, 45);
    assert!(text.contains("Empresa Sancionada SA"));
}

#[test]
fn test_every_screen_renders_on_tiny_terminal() {
    let mut app = loaded_app();
    for screen in CurrentScreen::ALL {
        app.update(Action::NavigateTo(screen));
        draw(&mut app, 30, 8);
    }
}

#[test]
fn test_error_state_is_shown_inline() {
    let mut app = App::new(None, CurrentScreen::Governanca);
    let seq = app.governanca.fetch.issue();
    app.update(Action::GovernancaLoaded {
        seq,
        result: Err(Arc::new(ClientError::NotFound(
            "/api/v1/governanca/ranking".to_string(),
        ))),
    });

    let text = draw(&mut app, 120, 30);
    assert!(text.contains("Recurso não encontrado"));
}

#[test]
fn test_forms_render_over_screen() {
    let mut app = App::new(None, CurrentScreen::Alertas);
    app.handle_input(key('n'));
    let text = draw(&mut app, 120, 40);
    assert!(text.contains("Destinatário"));

    let mut app = App::new(None, CurrentScreen::Relatorios);
    app.handle_input(key('g'));
    let text = draw(&mut app, 120, 40);
    assert!(text.contains("Data início"));
}

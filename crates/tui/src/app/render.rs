//! Rendering logic for the TUI app.
//!
//! Responsibilities:
//! - Render the main app layout (header, content, footer)
//! - Dispatch to screen-specific renderers
//! - Draw overlays (forms, help, error popup) and toasts on top
//!
//! Non-responsibilities:
//! - Does NOT handle input
//! - Does NOT mutate app state (except for TableState selection)

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::app::state::{CurrentScreen, FOOTER_HEIGHT, HEADER_HEIGHT};
use crate::ui::popup::{render_error_popup, render_form, render_help};
use crate::ui::screens::{
    alertas, anomalias, bordered, ceis, dashboard, fornecedores, governanca, hint, itens,
    licitacoes, municipios, relatorios,
};
use crate::ui::theme::{ThemeExt, spinner_char};
use crate::ui::toast::render_toasts;

const APP_TITLE: &str = "LAP - Licitações Aparecida Plus";

impl App {
    /// Render the application UI.
    pub fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(f.area());

        self.render_header(f, chunks[0]);
        self.render_content(f, chunks[1]);
        self.render_footer(f, chunks[2]);

        if let Some(form) = &self.alertas.form
            && self.current_screen == CurrentScreen::Alertas
        {
            render_form(
                f,
                "Novo alerta",
                &form.rows(),
                form.submitting,
                self.spinner_frame,
                &self.theme,
            );
        }
        if let Some(form) = &self.relatorios.form
            && self.current_screen == CurrentScreen::Relatorios
        {
            render_form(
                f,
                "Gerar relatório",
                &form.rows(),
                form.submitting,
                self.spinner_frame,
                &self.theme,
            );
        }
        if self.show_help {
            render_help(f, self.current_screen, &self.theme);
        }
        if let Some(message) = &self.error_popup {
            render_error_popup(f, message, &self.theme);
        }
        render_toasts(f, &self.toasts, &self.theme);
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let mut title = vec![
            Span::styled(APP_TITLE, theme.title()),
            Span::styled(" | ", theme.text_dim()),
            Span::styled(self.current_screen.label(), theme.border_focused()),
        ];
        if !self.api_base_url.is_empty() {
            title.push(Span::styled(
                format!("  API: {}", self.api_base_url),
                theme.text_dim(),
            ));
        }

        let mut nav = Vec::with_capacity(CurrentScreen::ALL.len() * 2);
        for screen in CurrentScreen::ALL {
            let style = if screen == self.current_screen {
                theme.nav_active()
            } else {
                theme.text_dim()
            };
            nav.push(Span::styled(
                format!("{} {}", screen.shortcut(), screen.label()),
                style,
            ));
            nav.push(Span::raw("  "));
        }

        let header = Paragraph::new(vec![Line::from(title), Line::from(nav)])
            .block(bordered("", theme));
        f.render_widget(header, area);
    }

    fn render_content(&mut self, f: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let spinner_frame = self.spinner_frame;
        match self.current_screen {
            CurrentScreen::Dashboard => dashboard::render_dashboard(
                f,
                area,
                dashboard::DashboardRenderConfig {
                    data: &self.dashboard.data,
                    spinner_frame,
                    theme,
                },
            ),
            CurrentScreen::Licitacoes => licitacoes::render_licitacoes(
                f,
                area,
                licitacoes::LicitacoesRenderConfig {
                    list: &mut self.licitacoes.list,
                    search: &self.licitacoes.search,
                    spinner_frame,
                    theme,
                },
            ),
            CurrentScreen::Fornecedores => {
                let visible = self.fornecedores.visible().into_iter().cloned().collect();
                fornecedores::render_fornecedores(
                    f,
                    area,
                    fornecedores::FornecedoresRenderConfig {
                        data: &self.fornecedores.fetch.remote,
                        visible,
                        porte: self.fornecedores.porte,
                        table: &mut self.fornecedores.table,
                        spinner_frame,
                        theme,
                    },
                )
            }
            CurrentScreen::Municipios => {
                let visible = self.municipios.visible().into_iter().cloned().collect();
                municipios::render_municipios(
                    f,
                    area,
                    municipios::MunicipiosRenderConfig {
                        data: &self.municipios.fetch.remote,
                        visible,
                        uf: &self.municipios.uf,
                        max_distance_km: self.municipios.max_distance_km,
                        table: &mut self.municipios.table,
                        spinner_frame,
                        theme,
                    },
                )
            }
            CurrentScreen::Itens => itens::render_itens(
                f,
                area,
                itens::ItensRenderConfig {
                    descricao: &self.itens.descricao,
                    meses: self.itens.meses,
                    data: &self.itens.fetch.remote,
                    spinner_frame,
                    theme,
                },
            ),
            CurrentScreen::Anomalias => {
                let status = self.anomalias.status();
                anomalias::render_anomalias(
                    f,
                    area,
                    anomalias::AnomaliasRenderConfig {
                        list: &mut self.anomalias.list,
                        resumo: &self.anomalias.resumo,
                        status,
                        spinner_frame,
                        theme,
                    },
                )
            }
            CurrentScreen::Alertas => alertas::render_alertas(
                f,
                area,
                alertas::AlertasRenderConfig {
                    data: &self.alertas.fetch.remote,
                    table: &mut self.alertas.table,
                    spinner_frame,
                    theme,
                },
            ),
            CurrentScreen::Ceis => ceis::render_ceis(
                f,
                area,
                ceis::CeisRenderConfig {
                    data: &self.ceis.fetch.remote,
                    fonte: self.ceis.fonte,
                    uf: &self.ceis.uf,
                    cnpj: &self.ceis.cnpj,
                    check: self.ceis.check.as_ref(),
                    checking: self.ceis.checking,
                    table: &mut self.ceis.table,
                    spinner_frame,
                    theme,
                },
            ),
            CurrentScreen::Governanca => governanca::render_governanca(
                f,
                area,
                governanca::GovernancaRenderConfig {
                    data: &self.governanca.fetch.remote,
                    table: &mut self.governanca.table,
                    spinner_frame,
                    theme,
                },
            ),
            CurrentScreen::Relatorios => relatorios::render_relatorios(
                f,
                area,
                relatorios::RelatoriosRenderConfig {
                    data: &self.relatorios.fetch.remote,
                    table: &mut self.relatorios.table,
                    spinner_frame,
                    theme,
                },
            ),
        }
    }

    fn screen_hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.current_screen {
            CurrentScreen::Licitacoes => &[("/", "buscar"), ("n/p", "página")],
            CurrentScreen::Anomalias => &[("s", "status"), ("n/p", "página")],
            CurrentScreen::Fornecedores => &[("f", "porte")],
            CurrentScreen::Municipios => &[("+/-", "distância"), ("u", "UF")],
            CurrentScreen::Itens => &[("/", "item"), ("+/-", "período")],
            CurrentScreen::Alertas => &[("n", "novo"), ("Enter", "ativar/desativar")],
            CurrentScreen::Ceis => &[("c", "CNPJ"), ("f", "fonte"), ("a", "atualizar base")],
            CurrentScreen::Relatorios => &[("g", "gerar")],
            CurrentScreen::Dashboard | CurrentScreen::Governanca => &[],
        }
    }

    fn render_footer(&self, f: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let mut spans = Vec::new();
        if self.loading {
            spans.push(Span::styled(
                format!("{} Carregando  ", spinner_char(self.spinner_frame)),
                theme.badge(lap_client::BadgeStyle::Warning),
            ));
        }
        if self.is_editing() {
            spans.extend(hint("Enter", "confirmar", theme));
            spans.extend(hint("Esc", "cancelar", theme));
        } else {
            for (key, desc) in self.screen_hints() {
                spans.extend(hint(key, desc, theme));
            }
            spans.extend(hint("r", "atualizar", theme));
            spans.extend(hint("e/E", "exportar", theme));
            spans.extend(hint("?", "ajuda", theme));
            spans.extend(hint("q", "sair", theme));
        }
        let footer = Paragraph::new(Line::from(spans)).block(bordered("", theme));
        f.render_widget(footer, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::widgets::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        buffer_text(&terminal)
    }

    #[test]
    fn header_lists_every_screen() {
        let mut app = App::default();
        let text = draw(&mut app, 200, 30);
        assert!(text.contains(APP_TITLE));
        assert!(text.contains("1 Dashboard"));
        assert!(text.contains("0 Relatórios"));
        assert!(text.contains("Nenhum dado carregado"));
    }

    #[test]
    fn error_popup_draws_on_top() {
        let mut app = App::default();
        app.error_popup = Some("Erro da API (500): falhou".to_string());
        let text = draw(&mut app, 120, 30);
        assert!(text.contains("Erro da API (500): falhou"));
        assert!(text.contains("Esc ou Enter para fechar"));
    }

    #[test]
    fn footer_switches_to_edit_hints() {
        let mut app = App::new(None, CurrentScreen::Licitacoes);
        app.licitacoes.search.focused = true;
        let text = draw(&mut app, 140, 20);
        assert!(text.contains("confirmar"));
        assert!(!text.contains("exportar"));
    }
}

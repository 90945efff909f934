//! Alertas screen: alert rules table with the active toggle.

use lap_client::format::{ellipsize, format_opt_brl, format_opt_date};
use lap_client::{Alerta, BadgeStyle, Page};
use lap_config::Theme;
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    widgets::{Cell, Row, TableState},
};

use crate::app::state::Remote;
use crate::ui::screens::{data_table, render_fetch_placeholder, styled_cell};
use crate::ui::widgets::render_empty_state;

const TITLE: &str = "Alertas";
const KEYWORDS_MAX_CHARS: usize = 30;

pub struct AlertasRenderConfig<'a> {
    pub data: &'a Remote<Page<Alerta>>,
    pub table: &'a mut TableState,
    pub spinner_frame: u8,
    pub theme: &'a Theme,
}

fn ativo_cell<'a>(ativo: bool, theme: &Theme) -> Cell<'a> {
    if ativo {
        styled_cell("Ativo".to_string(), BadgeStyle::Positive, theme)
    } else {
        styled_cell("Inativo".to_string(), BadgeStyle::Neutral, theme)
    }
}

pub fn render_alertas(f: &mut Frame, area: Rect, config: AlertasRenderConfig) {
    let AlertasRenderConfig {
        data,
        table,
        spinner_frame,
        theme,
    } = config;

    if render_fetch_placeholder(f, area, TITLE, data, spinner_frame, theme) {
        return;
    }
    let items = data.data.as_ref().map(|p| p.items.as_slice()).unwrap_or(&[]);
    if items.is_empty() {
        render_empty_state(
            f,
            area,
            TITLE,
            "Nenhum alerta cadastrado. Pressione 'n' para criar.",
            theme,
        );
        return;
    }

    let rows: Vec<Row> = items
        .iter()
        .map(|alerta| {
            Row::new(vec![
                Cell::from(alerta.nome.clone()),
                Cell::from(alerta.tipo.clone()),
                Cell::from(alerta.canal.clone()),
                Cell::from(alerta.destinatario.clone().unwrap_or_else(|| "-".to_string())),
                Cell::from(ellipsize(
                    &alerta.palavras_chave.join(", "),
                    KEYWORDS_MAX_CHARS,
                )),
                Cell::from(format_opt_brl(alerta.valor_minimo)),
                ativo_cell(alerta.ativo, theme),
                Cell::from(format_opt_date(alerta.created_at.as_deref())),
            ])
        })
        .collect();
    let ativos = items.iter().filter(|a| a.ativo).count();
    let title = format!("{TITLE} ({ativos} de {} ativos)", items.len());
    let table_widget = data_table(
        &[
            "Nome",
            "Tipo",
            "Canal",
            "Destinatário",
            "Palavras-chave",
            "Valor mínimo",
            "Situação",
            "Criado em",
        ],
        rows,
        &[
            Constraint::Min(16),
            Constraint::Length(12),
            Constraint::Length(9),
            Constraint::Length(22),
            Constraint::Length(KEYWORDS_MAX_CHARS as u16),
            Constraint::Length(15),
            Constraint::Length(8),
            Constraint::Length(11),
        ],
        title,
        theme,
    );
    f.render_stateful_widget(table_widget, area, table);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::widgets::test_support::buffer_text;
    use lap_config::ColorTheme;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn alerta(nome: &str, ativo: bool) -> Alerta {
        Alerta {
            id: nome.to_string(),
            nome: nome.to_string(),
            tipo: "licitacao".to_string(),
            canal: "email".to_string(),
            destinatario: Some("compras@example.com".to_string()),
            palavras_chave: vec!["merenda".to_string(), "escolar".to_string()],
            valor_minimo: Some(1000.0),
            ativo,
            created_at: None,
        }
    }

    #[test]
    fn shows_state_and_counts() {
        let mut data = Remote::default();
        data.resolve(Ok(Page::single(vec![
            alerta("Merenda", true),
            alerta("Obras", false),
        ])));
        let mut table = TableState::default();
        let theme = Theme::from_color_theme(ColorTheme::Default);
        let mut terminal = Terminal::new(TestBackend::new(160, 8)).unwrap();
        terminal
            .draw(|f| {
                render_alertas(
                    f,
                    f.area(),
                    AlertasRenderConfig {
                        data: &data,
                        table: &mut table,
                        spinner_frame: 0,
                        theme: &theme,
                    },
                )
            })
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("1 de 2 ativos"));
        assert!(text.contains("Inativo"));
        assert!(text.contains("merenda, escolar"));
        assert!(text.contains("R$ 1.000,00"));
    }
}

//! CEIS/CNEP screen: debarred companies, registry filters and the CNPJ check.

use lap_client::format::{format_opt_date, truncate_chars};
use lap_client::models::Fonte;
use lap_client::{BadgeStyle, CnpjCheck, EmpresaImpedida, Page};
use lap_config::Theme;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, TableState},
};

use crate::app::state::{Remote, TextInput};
use crate::ui::screens::{bordered, data_table, input_line, render_fetch_placeholder};
use crate::ui::theme::{ThemeExt, spinner_char};
use crate::ui::widgets::render_empty_state;

const TITLE: &str = "Empresas Impedidas";

pub struct CeisRenderConfig<'a> {
    pub data: &'a Remote<Page<EmpresaImpedida>>,
    pub fonte: Option<Fonte>,
    pub uf: &'a TextInput,
    pub cnpj: &'a TextInput,
    pub check: Option<&'a (String, CnpjCheck)>,
    pub checking: bool,
    pub table: &'a mut TableState,
    pub spinner_frame: u8,
    pub theme: &'a Theme,
}

/// Verdict line for the last CNPJ check.
fn check_line<'a>(
    check: Option<&(String, CnpjCheck)>,
    checking: bool,
    spinner_frame: u8,
    theme: &Theme,
) -> Line<'a> {
    if checking {
        return Line::styled(
            format!("{} Verificando...", spinner_char(spinner_frame)),
            theme.text_dim(),
        );
    }
    let Some((cnpj, verdict)) = check else {
        return Line::styled(
            "Pressione 'c' para verificar um CNPJ.",
            theme.text_dim(),
        );
    };
    let (style, detail) = match verdict {
        CnpjCheck::Clear => (BadgeStyle::Positive, String::new()),
        CnpjCheck::Impedida { fonte, motivo } => {
            let mut parts = Vec::new();
            if let Some(fonte) = fonte {
                parts.push(format!("fonte: {fonte}"));
            }
            if let Some(motivo) = motivo {
                parts.push(format!("motivo: {motivo}"));
            }
            (BadgeStyle::Negative, parts.join(", "))
        }
        CnpjCheck::CheckFailed { reason } => (BadgeStyle::Warning, reason.clone()),
    };
    let mut spans = vec![
        Span::styled(format!("{cnpj}: "), theme.text()),
        Span::styled(verdict.label(), theme.badge(style)),
    ];
    if !detail.is_empty() {
        spans.push(Span::styled(format!(" ({detail})"), theme.text_dim()));
    }
    Line::from(spans)
}

pub fn render_ceis(f: &mut Frame, area: Rect, config: CeisRenderConfig) {
    let CeisRenderConfig {
        data,
        fonte,
        uf,
        cnpj,
        check,
        checking,
        table,
        spinner_frame,
        theme,
    } = config;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(4)])
        .split(area);

    let fonte_line = Line::from(vec![
        Span::styled("Fonte: ", theme.text_dim()),
        Span::styled(fonte.map(Fonte::as_str).unwrap_or("todas"), theme.border_focused()),
        Span::styled("  (f para alternar, a para atualizar a base)", theme.text_dim()),
    ]);
    let header = Paragraph::new(vec![
        fonte_line,
        input_line("UF", uf, "todas (u para filtrar)", theme),
        input_line("CNPJ", cnpj, "c para digitar", theme),
        check_line(check, checking, spinner_frame, theme),
    ])
    .block(bordered("Filtros e verificação", theme));
    f.render_widget(header, chunks[0]);

    if render_fetch_placeholder(f, chunks[1], TITLE, data, spinner_frame, theme) {
        return;
    }
    let items = data.data.as_ref().map(|p| p.items.as_slice()).unwrap_or(&[]);
    if items.is_empty() {
        render_empty_state(
            f,
            chunks[1],
            TITLE,
            "Nenhuma empresa impedida para os filtros selecionados.",
            theme,
        );
        return;
    }

    let rows: Vec<Row> = items
        .iter()
        .map(|empresa| {
            Row::new(vec![
                Cell::from(empresa.cnpj.clone()),
                Cell::from(empresa.razao_social.clone()),
                Cell::from(empresa.fonte.clone()).style(theme.badge(BadgeStyle::Negative)),
                Cell::from(empresa.uf.clone().unwrap_or_else(|| "-".to_string())),
                Cell::from(truncate_chars(
                    empresa.motivo.as_deref().unwrap_or("-"),
                    60,
                )),
                Cell::from(format_opt_date(empresa.data_inicio.as_deref())),
            ])
        })
        .collect();
    let title = format!("{TITLE} ({})", items.len());
    let table_widget = data_table(
        &["CNPJ", "Razão Social", "Fonte", "UF", "Motivo", "Início"],
        rows,
        &[
            Constraint::Length(19),
            Constraint::Min(20),
            Constraint::Length(6),
            Constraint::Length(3),
            Constraint::Min(16),
            Constraint::Length(11),
        ],
        title,
        theme,
    );
    f.render_stateful_widget(table_widget, chunks[1], table);
}

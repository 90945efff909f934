//! Modal overlays: blocking error, key help and the create forms.
//!
//! Every overlay clears its area first so the screen below does not bleed
//! through.

use lap_config::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::app::CurrentScreen;
use crate::app::forms::{FieldKind, FieldRow};
use crate::ui::theme::{ThemeExt, spinner_char};

const LABEL_WIDTH: usize = 16;

/// Area of `percent_x` by `percent_y` centered in `r`.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn modal_block<'a>(title: &'a str, color: ratatui::style::Color) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
}

pub fn render_error_popup(f: &mut Frame, message: &str, theme: &Theme) {
    let area = centered_rect(60, 30, f.area());
    f.render_widget(Clear, area);
    let lines = vec![
        Line::styled(message.to_string(), theme.text()),
        Line::default(),
        Line::styled("Esc ou Enter para fechar", theme.text_dim()),
    ];
    let p = Paragraph::new(lines)
        .block(modal_block("Erro", theme.negative))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(p, area);
}

/// Key bindings of one screen, shown under the global ones.
fn screen_keys(screen: CurrentScreen) -> &'static [(&'static str, &'static str)] {
    match screen {
        CurrentScreen::Dashboard => &[],
        CurrentScreen::Licitacoes => &[
            ("/", "Buscar por objeto ou número"),
            ("c", "Limpar busca"),
            ("n / →", "Próxima página"),
            ("p / ←", "Página anterior"),
        ],
        CurrentScreen::Fornecedores => &[("f", "Alternar filtro de porte")],
        CurrentScreen::Municipios => &[
            ("+ / -", "Aumentar ou reduzir a distância"),
            ("u", "Filtrar por UF"),
        ],
        CurrentScreen::Itens => &[
            ("/", "Digitar descrição do item"),
            ("+ / -", "Alterar período"),
        ],
        CurrentScreen::Anomalias => &[
            ("s", "Alternar filtro de status"),
            ("n / p", "Próxima / anterior"),
        ],
        CurrentScreen::Alertas => &[
            ("n", "Novo alerta"),
            ("Enter", "Ativar ou desativar"),
        ],
        CurrentScreen::Ceis => &[
            ("f", "Alternar fonte"),
            ("u", "Filtrar por UF"),
            ("c", "Verificar CNPJ"),
            ("a", "Atualizar base CEIS/CNEP"),
        ],
        CurrentScreen::Governanca => &[],
        CurrentScreen::Relatorios => &[("g", "Gerar relatório")],
    }
}

const GLOBAL_KEYS: &[(&str, &str)] = &[
    ("1-9, 0", "Ir para a tela"),
    ("Tab / S-Tab", "Próxima / anterior"),
    ("j / k", "Mover seleção"),
    ("r", "Atualizar"),
    ("e / E", "Exportar CSV / JSON"),
    ("t", "Alternar tema"),
    ("?", "Ajuda"),
    ("q", "Sair"),
];

fn key_lines<'a>(keys: &[(&'a str, &'a str)], theme: &Theme) -> Vec<Line<'a>> {
    keys.iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("  {key:<12}"), theme.border_focused()),
                Span::styled(*desc, theme.text()),
            ])
        })
        .collect()
}

pub fn render_help(f: &mut Frame, screen: CurrentScreen, theme: &Theme) {
    let area = centered_rect(60, 70, f.area());
    f.render_widget(Clear, area);

    let mut lines = vec![Line::styled("Teclas globais", theme.title())];
    lines.extend(key_lines(GLOBAL_KEYS, theme));
    let local = screen_keys(screen);
    if !local.is_empty() {
        lines.push(Line::default());
        lines.push(Line::styled(screen.label(), theme.title()));
        lines.extend(key_lines(local, theme));
    }
    lines.push(Line::default());
    lines.push(Line::styled("Qualquer tecla fecha esta ajuda", theme.text_dim()));

    let p = Paragraph::new(lines)
        .block(modal_block("Ajuda", theme.accent))
        .wrap(Wrap { trim: false });
    f.render_widget(p, area);
}

fn field_line<'a>(row: &FieldRow, theme: &Theme) -> Line<'a> {
    let (label, value, kind, focused) = row;
    let label_style = if *focused {
        theme.border_focused()
    } else {
        theme.text_dim()
    };
    let value = match (kind, focused) {
        (FieldKind::Select, true) => format!("< {value} >"),
        (FieldKind::Select, false) => value.clone(),
        (FieldKind::Text, true) => format!("{value}█"),
        (FieldKind::Text, false) => value.clone(),
    };
    let value_style = if *focused { theme.highlight() } else { theme.text() };
    Line::from(vec![
        Span::styled(format!("{:<LABEL_WIDTH$}", format!("{label}:")), label_style),
        Span::styled(value, value_style),
    ])
}

/// Render a create form from its field rows.
pub fn render_form(
    f: &mut Frame,
    title: &str,
    rows: &[FieldRow],
    submitting: bool,
    spinner_frame: u8,
    theme: &Theme,
) {
    let height = rows.len() as u16 * 2 + 5;
    let area = centered_rect(60, 100, f.area());
    let area = Rect {
        y: area.y + area.height.saturating_sub(height) / 2,
        height: height.min(area.height),
        ..area
    };
    f.render_widget(Clear, area);

    let mut lines = Vec::with_capacity(rows.len() * 2 + 2);
    for row in rows {
        lines.push(field_line(row, theme));
        lines.push(Line::default());
    }
    let footer = if submitting {
        Line::styled(
            format!("{} Enviando...", spinner_char(spinner_frame)),
            theme.text_dim(),
        )
    } else {
        Line::styled(
            "Tab/↑↓ campo  ←→ opção  Enter enviar  Esc cancelar",
            theme.text_dim(),
        )
    };
    lines.push(footer);

    let p = Paragraph::new(lines).block(modal_block(title, theme.accent));
    f.render_widget(p, area);
}

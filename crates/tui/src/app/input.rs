//! Key handling.
//!
//! Keys are routed in priority order: error popup, help overlay, open form,
//! focused text field, then global and per-screen bindings. Handlers mutate
//! local state and return the request to dispatch, if any.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use lap_client::ExportFormat;
use lap_client::models::normalize_cnpj;

use crate::action::Action;
use crate::app::forms::{AlertaForm, FormOutcome, RelatorioForm};
use crate::app::state::{CurrentScreen, TextInput, step_selection};
use crate::app::App;
use crate::ui::toast::ToastLevel;

/// Price history windows selectable with `+`/`-`, in months.
pub const MESES_OPTIONS: [u32; 6] = [6, 12, 24, 36, 48, 60];

/// Text fields that can hold keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    LicitacoesSearch,
    MunicipiosUf,
    ItensDescricao,
    CeisUf,
    CeisCnpj,
}

impl Field {
    fn accepts(self, input: &TextInput, c: char) -> bool {
        match self {
            Self::MunicipiosUf | Self::CeisUf => {
                c.is_ascii_alphabetic() && input.value.chars().count() < 2
            }
            Self::CeisCnpj => {
                (c.is_ascii_digit() || matches!(c, '.' | '/' | '-'))
                    && input.value.chars().count() < 18
            }
            Self::LicitacoesSearch | Self::ItensDescricao => true,
        }
    }
}

impl App {
    /// Handle one key press. Returns the action to dispatch, if any.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        if self.error_popup.is_some() {
            return match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(Action::DismissError),
                _ => None,
            };
        }

        if self.show_help {
            self.show_help = false;
            return None;
        }

        match self.current_screen {
            CurrentScreen::Alertas if self.alertas.form.is_some() => {
                return self.handle_alerta_form(key);
            }
            CurrentScreen::Relatorios if self.relatorios.form.is_some() => {
                return self.handle_relatorio_form(key);
            }
            _ => {}
        }

        if let Some(field) = self.focused_field() {
            return self.handle_text_input(field, key);
        }

        if let Some(action) = self.handle_global_key(key) {
            return action;
        }

        self.handle_screen_key(key)
    }

    fn focused_field(&self) -> Option<Field> {
        match self.current_screen {
            CurrentScreen::Licitacoes if self.licitacoes.search.focused => {
                Some(Field::LicitacoesSearch)
            }
            CurrentScreen::Municipios if self.municipios.uf.focused => Some(Field::MunicipiosUf),
            CurrentScreen::Itens if self.itens.descricao.focused => Some(Field::ItensDescricao),
            CurrentScreen::Ceis if self.ceis.uf.focused => Some(Field::CeisUf),
            CurrentScreen::Ceis if self.ceis.cnpj.focused => Some(Field::CeisCnpj),
            _ => None,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut TextInput {
        match field {
            Field::LicitacoesSearch => &mut self.licitacoes.search,
            Field::MunicipiosUf => &mut self.municipios.uf,
            Field::ItensDescricao => &mut self.itens.descricao,
            Field::CeisUf => &mut self.ceis.uf,
            Field::CeisCnpj => &mut self.ceis.cnpj,
        }
    }

    fn handle_text_input(&mut self, field: Field, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc => {
                self.field_mut(field).focused = false;
                None
            }
            KeyCode::Enter => {
                self.field_mut(field).focused = false;
                self.submit_field(field)
            }
            KeyCode::Backspace => {
                self.field_mut(field).pop();
                self.touch_field(field);
                None
            }
            KeyCode::Char(c) => {
                let input = self.field_mut(field);
                if field.accepts(input, c) {
                    input.push(c);
                    self.touch_field(field);
                }
                None
            }
            _ => None,
        }
    }

    /// Edits to the Licitações search restart the debounce window.
    fn touch_field(&mut self, field: Field) {
        if field == Field::LicitacoesSearch {
            self.licitacoes.search_deadline = Some(Instant::now() + self.search_debounce);
        }
    }

    fn submit_field(&mut self, field: Field) -> Option<Action> {
        match field {
            Field::LicitacoesSearch => {
                let seq = self.licitacoes.commit_search()?;
                Some(Action::LoadLicitacoes {
                    seq,
                    query: self.licitacoes.list.query.clone(),
                })
            }
            Field::MunicipiosUf => Some(self.load_municipios()),
            Field::ItensDescricao => self.load_historico(),
            Field::CeisUf => Some(self.load_empresas_impedidas()),
            Field::CeisCnpj => {
                let cnpj = normalize_cnpj(&self.ceis.cnpj.value);
                if cnpj.is_empty() {
                    return Some(Action::Notify(
                        ToastLevel::Warning,
                        "Informe um CNPJ para verificar.".to_string(),
                    ));
                }
                let seq = self.ceis.start_check();
                Some(Action::CheckCnpj { seq, cnpj })
            }
        }
    }

    /// Bindings available on every screen. `Some(None)` means handled without an action.
    fn handle_global_key(&mut self, key: KeyEvent) -> Option<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Tab => Some(Action::NavigateTo(self.current_screen.next())),
            KeyCode::BackTab => Some(Action::NavigateTo(self.current_screen.previous())),
            KeyCode::Char(c @ '0'..='9') => CurrentScreen::from_digit(c).map(Action::NavigateTo),
            KeyCode::Char('r') => Some(Action::Refresh),
            KeyCode::Char('t') => Some(Action::CycleTheme),
            KeyCode::Char('?') => {
                self.show_help = true;
                None
            }
            KeyCode::Char('e') => Some(self.export_action(ExportFormat::Csv)),
            KeyCode::Char('E') => Some(self.export_action(ExportFormat::Json)),
            KeyCode::Char('j') | KeyCode::Down => {
                self.move_selection(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.move_selection(-1);
                None
            }
            _ => return None,
        };
        Some(action)
    }

    fn move_selection(&mut self, delta: isize) {
        match self.current_screen {
            CurrentScreen::Licitacoes => {
                let len = self.licitacoes.list.items().len();
                step_selection(&mut self.licitacoes.list.table, len, delta);
            }
            CurrentScreen::Anomalias => {
                let len = self.anomalias.list.items().len();
                step_selection(&mut self.anomalias.list.table, len, delta);
            }
            CurrentScreen::Fornecedores => {
                let len = self.fornecedores.visible().len();
                step_selection(&mut self.fornecedores.table, len, delta);
            }
            CurrentScreen::Municipios => {
                let len = self.municipios.visible().len();
                step_selection(&mut self.municipios.table, len, delta);
            }
            CurrentScreen::Alertas => {
                let len = self.alertas.items().len();
                step_selection(&mut self.alertas.table, len, delta);
            }
            CurrentScreen::Ceis => {
                let len = self.ceis.items().len();
                step_selection(&mut self.ceis.table, len, delta);
            }
            CurrentScreen::Governanca => {
                let len = self.governanca.items().len();
                step_selection(&mut self.governanca.table, len, delta);
            }
            CurrentScreen::Relatorios => {
                let len = self.relatorios.items().len();
                step_selection(&mut self.relatorios.table, len, delta);
            }
            CurrentScreen::Dashboard | CurrentScreen::Itens => {}
        }
    }

    fn handle_screen_key(&mut self, key: KeyEvent) -> Option<Action> {
        let code = key.code;
        match self.current_screen {
            CurrentScreen::Licitacoes => {
                let seq = match code {
                    KeyCode::Char('/') => {
                        self.licitacoes.search.focused = true;
                        return None;
                    }
                    KeyCode::Char('c') => {
                        self.licitacoes.search.clear();
                        self.licitacoes.commit_search()
                    }
                    KeyCode::Char('n') | KeyCode::Right => self.licitacoes.list.next_page(),
                    KeyCode::Char('p') | KeyCode::Left => self.licitacoes.list.prev_page(),
                    _ => None,
                }?;
                Some(Action::LoadLicitacoes {
                    seq,
                    query: self.licitacoes.list.query.clone(),
                })
            }
            CurrentScreen::Anomalias => {
                let seq = match code {
                    KeyCode::Char('s') => self.anomalias.cycle_status(),
                    KeyCode::Char('n') | KeyCode::Right => self.anomalias.list.next_page(),
                    KeyCode::Char('p') | KeyCode::Left => self.anomalias.list.prev_page(),
                    _ => None,
                }?;
                Some(Action::LoadAnomalias {
                    seq,
                    query: self.anomalias.list.query.clone(),
                })
            }
            CurrentScreen::Fornecedores => {
                if code == KeyCode::Char('f') {
                    self.fornecedores.cycle_porte();
                }
                None
            }
            CurrentScreen::Municipios => {
                match code {
                    KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => {
                        self.municipios.step_distance(true);
                    }
                    KeyCode::Char('-') | KeyCode::Left => {
                        self.municipios.step_distance(false);
                    }
                    KeyCode::Char('u') | KeyCode::Char('/') => self.municipios.uf.focused = true,
                    _ => {}
                }
                None
            }
            CurrentScreen::Itens => match code {
                KeyCode::Char('/') => {
                    self.itens.descricao.focused = true;
                    None
                }
                KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => {
                    self.step_meses(true)
                }
                KeyCode::Char('-') | KeyCode::Left => self.step_meses(false),
                _ => None,
            },
            CurrentScreen::Alertas => match code {
                KeyCode::Char('n') => {
                    self.alertas.form = Some(AlertaForm::default());
                    None
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    let alerta = self.alertas.selected()?;
                    Some(Action::ToggleAlerta {
                        id: alerta.id.clone(),
                        ativo: alerta.ativo,
                    })
                }
                _ => None,
            },
            CurrentScreen::Ceis => match code {
                KeyCode::Char('f') => {
                    self.ceis.cycle_fonte();
                    Some(self.load_empresas_impedidas())
                }
                KeyCode::Char('u') => {
                    self.ceis.uf.focused = true;
                    None
                }
                KeyCode::Char('c') | KeyCode::Char('/') => {
                    self.ceis.cnpj.focused = true;
                    None
                }
                KeyCode::Char('a') => Some(Action::RefreshCeis),
                _ => None,
            },
            CurrentScreen::Relatorios => {
                if code == KeyCode::Char('g') {
                    self.relatorios.form = Some(RelatorioForm::default());
                }
                None
            }
            CurrentScreen::Dashboard | CurrentScreen::Governanca => None,
        }
    }

    fn step_meses(&mut self, up: bool) -> Option<Action> {
        let idx = MESES_OPTIONS
            .iter()
            .position(|m| *m >= self.itens.meses)
            .unwrap_or(MESES_OPTIONS.len() - 1);
        let next = if up {
            MESES_OPTIONS.get(idx + 1).copied()
        } else {
            idx.checked_sub(1).and_then(|i| MESES_OPTIONS.get(i).copied())
        }?;
        self.itens.meses = next;
        self.load_historico()
    }

    fn handle_alerta_form(&mut self, key: KeyEvent) -> Option<Action> {
        let form = self.alertas.form.as_mut()?;
        match form.handle_key(key) {
            FormOutcome::Continue => None,
            FormOutcome::Cancel => {
                self.alertas.form = None;
                None
            }
            FormOutcome::Submit => {
                let request = form.request();
                if let Err(e) = request.validate() {
                    self.error_popup = Some(e.user_message());
                    return None;
                }
                form.submitting = true;
                Some(Action::CreateAlerta(request))
            }
        }
    }

    fn handle_relatorio_form(&mut self, key: KeyEvent) -> Option<Action> {
        let form = self.relatorios.form.as_mut()?;
        match form.handle_key(key) {
            FormOutcome::Continue => None,
            FormOutcome::Cancel => {
                self.relatorios.form = None;
                None
            }
            FormOutcome::Submit => match form.request() {
                Ok(pedido) => {
                    form.submitting = true;
                    Some(Action::GenerateRelatorio(pedido))
                }
                Err(message) => {
                    self.error_popup = Some(message);
                    None
                }
            },
        }
    }
}

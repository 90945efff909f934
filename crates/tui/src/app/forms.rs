//! Modal forms: new alert subscription and report generation.
//!
//! Forms own their field values and focus. Key handling returns a
//! [`FormOutcome`]; the app turns a submit into a request action.

use crossterm::event::{KeyCode, KeyEvent};
use lap_client::models::{
    Canal, FormatoRelatorio, NovoAlerta, PedidoRelatorio, TipoAlerta, TipoRelatorio,
    parse_report_date,
};

/// Result of feeding one key to a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    Continue,
    Cancel,
    Submit,
}

/// Kind of widget behind a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Select,
}

/// Shared key handling: focus movement, edit, cycle, submit, cancel.
trait FormFields {
    fn field_count(&self) -> usize;
    fn focus(&self) -> usize;
    fn set_focus(&mut self, idx: usize);
    fn kind(&self, idx: usize) -> FieldKind;
    fn text_mut(&mut self, idx: usize) -> Option<&mut String>;
    fn cycle(&mut self, idx: usize);
    fn accepts(&self, _idx: usize, _c: char) -> bool {
        true
    }

    fn handle(&mut self, key: KeyEvent) -> FormOutcome {
        let focus = self.focus();
        let count = self.field_count();
        match key.code {
            KeyCode::Esc => return FormOutcome::Cancel,
            KeyCode::Enter => return FormOutcome::Submit,
            KeyCode::Tab | KeyCode::Down => self.set_focus((focus + 1) % count),
            KeyCode::BackTab | KeyCode::Up => self.set_focus((focus + count - 1) % count),
            KeyCode::Left | KeyCode::Right if self.kind(focus) == FieldKind::Select => {
                self.cycle(focus)
            }
            KeyCode::Char(' ') if self.kind(focus) == FieldKind::Select => self.cycle(focus),
            KeyCode::Char(c) if self.accepts(focus, c) => {
                if let Some(text) = self.text_mut(focus) {
                    text.push(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(text) = self.text_mut(focus) {
                    text.pop();
                }
            }
            _ => {}
        }
        FormOutcome::Continue
    }
}

/// Field rows as `(label, value, kind, focused)` for rendering.
pub type FieldRow = (&'static str, String, FieldKind, bool);

/// New alert subscription form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertaForm {
    pub nome: String,
    pub tipo: TipoAlerta,
    pub palavras_chave: String,
    pub valor_minimo: String,
    pub canal: Canal,
    pub destinatario: String,
    pub focus: usize,
    pub submitting: bool,
}

impl AlertaForm {
    const LABELS: [&'static str; 6] = [
        "Nome",
        "Tipo",
        "Palavras-chave",
        "Valor mínimo",
        "Canal",
        "Destinatário",
    ];

    pub fn handle_key(&mut self, key: KeyEvent) -> FormOutcome {
        if self.submitting {
            return FormOutcome::Continue;
        }
        self.handle(key)
    }

    /// Request body; fields are posted as typed.
    pub fn request(&self) -> NovoAlerta {
        NovoAlerta {
            nome: self.nome.clone(),
            tipo: self.tipo.as_str().to_string(),
            palavras_chave: self.palavras_chave.clone(),
            valor_minimo: self.valor_minimo.clone(),
            canal: self.canal.as_str().to_string(),
            destinatario: self.destinatario.clone(),
        }
    }

    pub fn rows(&self) -> Vec<FieldRow> {
        let destinatario = if self.destinatario.is_empty() && self.focus != 5 {
            format!("({})", self.canal.destinatario_hint())
        } else {
            self.destinatario.clone()
        };
        let values = [
            self.nome.clone(),
            self.tipo.label().to_string(),
            self.palavras_chave.clone(),
            self.valor_minimo.clone(),
            self.canal.label().to_string(),
            destinatario,
        ];
        Self::LABELS
            .iter()
            .zip(values)
            .enumerate()
            .map(|(idx, (label, value))| (*label, value, self.kind(idx), idx == self.focus))
            .collect()
    }
}

impl FormFields for AlertaForm {
    fn field_count(&self) -> usize {
        Self::LABELS.len()
    }

    fn focus(&self) -> usize {
        self.focus
    }

    fn set_focus(&mut self, idx: usize) {
        self.focus = idx;
    }

    fn kind(&self, idx: usize) -> FieldKind {
        match idx {
            1 | 4 => FieldKind::Select,
            _ => FieldKind::Text,
        }
    }

    fn text_mut(&mut self, idx: usize) -> Option<&mut String> {
        match idx {
            0 => Some(&mut self.nome),
            2 => Some(&mut self.palavras_chave),
            3 => Some(&mut self.valor_minimo),
            5 => Some(&mut self.destinatario),
            _ => None,
        }
    }

    fn cycle(&mut self, idx: usize) {
        match idx {
            1 => self.tipo = self.tipo.next(),
            4 => self.canal = self.canal.next(),
            _ => {}
        }
    }

    fn accepts(&self, idx: usize, c: char) -> bool {
        idx != 3 || c.is_ascii_digit() || c == ',' || c == '.'
    }
}

/// Report generation form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelatorioForm {
    pub tipo: TipoRelatorio,
    pub formato: FormatoRelatorio,
    pub data_inicio: String,
    pub data_fim: String,
    pub focus: usize,
    pub submitting: bool,
}

impl RelatorioForm {
    const LABELS: [&'static str; 4] = ["Tipo", "Formato", "Data início", "Data fim"];

    pub fn handle_key(&mut self, key: KeyEvent) -> FormOutcome {
        if self.submitting {
            return FormOutcome::Continue;
        }
        self.handle(key)
    }

    /// Build the request. Blank dates default to today; a range must not be inverted.
    pub fn request(&self) -> Result<PedidoRelatorio, String> {
        let inicio = parse_report_date(&self.data_inicio)?;
        let fim = parse_report_date(&self.data_fim)?;
        if let (Some(inicio), Some(fim)) = (inicio, fim)
            && inicio > fim
        {
            return Err("a data de início é posterior à data de fim".to_string());
        }
        Ok(PedidoRelatorio::for_today(
            self.tipo,
            self.formato,
            inicio,
            fim,
        ))
    }

    pub fn rows(&self) -> Vec<FieldRow> {
        let date = |raw: &str, idx: usize| {
            if raw.is_empty() && self.focus != idx {
                "(hoje, AAAA-MM-DD)".to_string()
            } else {
                raw.to_string()
            }
        };
        let values = [
            self.tipo.label().to_string(),
            self.formato.label().to_string(),
            date(&self.data_inicio, 2),
            date(&self.data_fim, 3),
        ];
        Self::LABELS
            .iter()
            .zip(values)
            .enumerate()
            .map(|(idx, (label, value))| (*label, value, self.kind(idx), idx == self.focus))
            .collect()
    }
}

impl FormFields for RelatorioForm {
    fn field_count(&self) -> usize {
        Self::LABELS.len()
    }

    fn focus(&self) -> usize {
        self.focus
    }

    fn set_focus(&mut self, idx: usize) {
        self.focus = idx;
    }

    fn kind(&self, idx: usize) -> FieldKind {
        if idx < 2 {
            FieldKind::Select
        } else {
            FieldKind::Text
        }
    }

    fn text_mut(&mut self, idx: usize) -> Option<&mut String> {
        match idx {
            2 => Some(&mut self.data_inicio),
            3 => Some(&mut self.data_fim),
            _ => None,
        }
    }

    fn cycle(&mut self, idx: usize) {
        match idx {
            0 => self.tipo = self.tipo.next(),
            1 => self.formato = self.formato.next(),
            _ => {}
        }
    }

    fn accepts(&self, idx: usize, c: char) -> bool {
        idx < 2 || c.is_ascii_digit() || c == '-'
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(form: &mut impl FormFields, text: &str) {
        for c in text.chars() {
            form.handle(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn alert_form_defaults_to_licitacao_by_email() {
        let request = AlertaForm::default().request();
        assert_eq!(request, NovoAlerta::default());
    }

    #[test]
    fn alert_form_edits_focused_field() {
        let mut form = AlertaForm::default();
        type_text(&mut form, "Obras");
        form.handle_key(key(KeyCode::Tab));
        form.handle_key(key(KeyCode::Char(' ')));
        form.handle_key(key(KeyCode::Tab));
        form.handle_key(key(KeyCode::Tab));
        type_text(&mut form, "10a00");
        assert_eq!(form.nome, "Obras");
        assert_eq!(form.tipo, TipoAlerta::Anomalia);
        assert_eq!(form.valor_minimo, "1000");
    }

    #[test]
    fn enter_submits_and_esc_cancels() {
        let mut form = AlertaForm::default();
        assert_eq!(form.handle_key(key(KeyCode::Enter)), FormOutcome::Submit);
        assert_eq!(form.handle_key(key(KeyCode::Esc)), FormOutcome::Cancel);
        form.submitting = true;
        assert_eq!(form.handle_key(key(KeyCode::Enter)), FormOutcome::Continue);
    }

    #[test]
    fn focus_wraps_backwards() {
        let mut form = AlertaForm::default();
        form.handle_key(key(KeyCode::BackTab));
        assert_eq!(form.focus, 5);
    }

    #[test]
    fn report_dates_are_validated() {
        let mut form = RelatorioForm {
            focus: 2,
            ..Default::default()
        };
        type_text(&mut form, "2024-05-10");
        form.handle_key(key(KeyCode::Tab));
        type_text(&mut form, "2024-05-01");
        assert!(form.request().is_err());

        form.data_fim = "2024-05-31".to_string();
        let pedido = form.request().unwrap();
        assert_eq!(pedido.data_inicio, "2024-05-10");
        assert_eq!(pedido.data_fim, "2024-05-31");
        assert_eq!(pedido.tipo, TipoRelatorio::default().as_str());
    }

    #[test]
    fn bad_report_date_is_rejected() {
        let form = RelatorioForm {
            data_inicio: "10/05/2024".to_string(),
            ..Default::default()
        };
        assert!(form.request().unwrap_err().contains("AAAA-MM-DD"));
    }
}

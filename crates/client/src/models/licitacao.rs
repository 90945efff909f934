//! Procurement notice models.

use serde::{Deserialize, Serialize};

use crate::serde_helpers::{
    f64_lenient, opt_f64_lenient, opt_string_from_number_or_string, string_from_number_or_string,
};

/// A procurement notice ("licitação"). Read-only from the client's perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Licitacao {
    #[serde(deserialize_with = "string_from_number_or_string")]
    pub id: String,
    #[serde(default)]
    pub numero_compra: Option<String>,
    #[serde(default)]
    pub objeto_compra: Option<String>,
    #[serde(default)]
    pub modalidade_nome: Option<String>,
    #[serde(default)]
    pub situacao_compra_nome: Option<String>,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub valor_total_estimado: f64,
    #[serde(default, deserialize_with = "opt_f64_lenient")]
    pub valor_total_homologado: Option<f64>,
    #[serde(default)]
    pub data_publicacao_pncp: Option<String>,
    #[serde(default)]
    pub data_abertura_proposta: Option<String>,
    #[serde(default, deserialize_with = "opt_string_from_number_or_string")]
    pub municipio_id: Option<String>,
}

impl Licitacao {
    /// Label shown in the status column; notices without a situation are unlabeled.
    pub fn situacao(&self) -> &str {
        self.situacao_compra_nome.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_strings_and_missing_fields() {
        let lic: Licitacao = serde_json::from_str(
            r#"{
                "id": 7,
                "numero_compra": "12/2024",
                "valor_total_estimado": "150000.50",
                "valor_total_homologado": null
            }"#,
        )
        .unwrap();
        assert_eq!(lic.id, "7");
        assert_eq!(lic.valor_total_estimado, 150000.5);
        assert_eq!(lic.valor_total_homologado, None);
        assert_eq!(lic.situacao(), "");
    }
}

//! Municipality models and the distance filter.

use serde::{Deserialize, Serialize};

use crate::serde_helpers::{
    f64_lenient, opt_f64_lenient, opt_string_from_number_or_string, u64_lenient,
};

/// A municipality in the monitored region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Municipio {
    #[serde(default, deserialize_with = "opt_string_from_number_or_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "opt_string_from_number_or_string")]
    pub codigo_ibge: Option<String>,
    #[serde(alias = "municipio")]
    pub nome: String,
    #[serde(default)]
    pub uf: String,
    /// Road distance from the reference city; unknown for some rows.
    #[serde(default, deserialize_with = "opt_f64_lenient")]
    pub distancia_km: Option<f64>,
    #[serde(default, alias = "lat", deserialize_with = "opt_f64_lenient")]
    pub latitude: Option<f64>,
    #[serde(default, alias = "lon", alias = "lng", deserialize_with = "opt_f64_lenient")]
    pub longitude: Option<f64>,
    #[serde(default, deserialize_with = "u64_lenient")]
    pub total_licitacoes: u64,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub valor_total: f64,
}

impl Municipio {
    /// Coordinates when both are known.
    pub fn coords(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }

    /// Whether the municipality passes a maximum-distance filter.
    ///
    /// Rows with an unknown distance are always kept.
    pub fn within_km(&self, max_km: u32) -> bool {
        self.distancia_km
            .is_none_or(|distance| distance <= f64::from(max_km))
    }
}

/// Snap a requested distance to the slider's `50..=200` range in steps of 10.
pub fn snap_distance_km(km: u32) -> u32 {
    use lap_config::constants::{DISTANCE_STEP_KM, MAX_DISTANCE_KM, MIN_DISTANCE_KM};

    let clamped = km.clamp(MIN_DISTANCE_KM, MAX_DISTANCE_KM);
    let steps = (clamped - MIN_DISTANCE_KM + DISTANCE_STEP_KM / 2) / DISTANCE_STEP_KM;
    (MIN_DISTANCE_KM + steps * DISTANCE_STEP_KM).min(MAX_DISTANCE_KM)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn municipio(distance: Option<f64>) -> Municipio {
        Municipio {
            id: None,
            codigo_ibge: Some("5201405".to_string()),
            nome: "Aparecida de Goiânia".to_string(),
            uf: "GO".to_string(),
            distancia_km: distance,
            latitude: None,
            longitude: None,
            total_licitacoes: 0,
            valor_total: 0.0,
        }
    }

    #[test]
    fn unknown_distance_is_kept() {
        assert!(municipio(None).within_km(50));
        assert!(municipio(Some(50.0)).within_km(50));
        assert!(!municipio(Some(51.0)).within_km(50));
    }

    #[test]
    fn backend_field_names_decode() {
        let m: Municipio = serde_json::from_str(
            r#"{"id": 1, "codigo_ibge": "5201405", "municipio": "Aparecida", "uf": "GO", "distancia_km": 18}"#,
        )
        .unwrap();
        assert_eq!(m.nome, "Aparecida");
        assert_eq!(m.distancia_km, Some(18.0));
        assert_eq!(m.coords(), None);
    }

    #[test]
    fn snap_distance_to_steps() {
        assert_eq!(snap_distance_km(0), 50);
        assert_eq!(snap_distance_km(64), 60);
        assert_eq!(snap_distance_km(65), 70);
        assert_eq!(snap_distance_km(500), 200);
    }
}

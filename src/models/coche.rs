//! Coche model matching the backend wire contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{iso_instant, Entity, FilterCriteria, Filterable, Venta};

/// A vehicle, optionally already attached to a sale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Coche {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modelo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marca: Option<String>,
    /// Model year, stored as a date by the backend.
    #[serde(default, with = "iso_instant", skip_serializing_if = "Option::is_none")]
    pub anio: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precio: Option<f64>,
    /// Nullable reference to the sale this vehicle belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venta: Option<Venta>,
}

impl Entity for Coche {
    const RESOURCE: &'static str = "api/coches";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// Substring, range and reference criteria for the vehicle filter endpoint.
#[derive(Debug, Clone, Default)]
pub struct CocheCriteria {
    pub id: Option<i64>,
    pub color: Option<String>,
    pub modelo: Option<String>,
    pub marca: Option<String>,
    pub fecha_desde: Option<DateTime<Utc>>,
    pub fecha_hasta: Option<DateTime<Utc>>,
    pub precio_desde: Option<f64>,
    pub precio_hasta: Option<f64>,
    pub venta_id: Option<i64>,
}

impl FilterCriteria for CocheCriteria {
    fn is_unset(&self) -> bool {
        self.id.is_none()
            && self.color.is_none()
            && self.modelo.is_none()
            && self.marca.is_none()
            && self.fecha_desde.is_none()
            && self.fecha_hasta.is_none()
            && self.precio_desde.is_none()
            && self.precio_hasta.is_none()
            && self.venta_id.is_none()
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("id", self.id.map(|id| id.to_string()).unwrap_or_default()),
            ("color", self.color.clone().unwrap_or_default()),
            ("modelo", self.modelo.clone().unwrap_or_default()),
            ("marca", self.marca.clone().unwrap_or_default()),
            (
                "fechaI",
                self.fecha_desde
                    .as_ref()
                    .map(iso_instant::format)
                    .unwrap_or_default(),
            ),
            (
                "fechaF",
                self.fecha_hasta
                    .as_ref()
                    .map(iso_instant::format)
                    .unwrap_or_default(),
            ),
            (
                "precioI",
                self.precio_desde
                    .map(|p| p.to_string())
                    .unwrap_or_default(),
            ),
            (
                "precioF",
                self.precio_hasta
                    .map(|p| p.to_string())
                    .unwrap_or_default(),
            ),
            (
                "venta",
                self.venta_id.map(|id| id.to_string()).unwrap_or_default(),
            ),
        ]
    }
}

impl Filterable for Coche {
    const FILTER_PATH: &'static str = "get-cars-by-filter";

    type Criteria = CocheCriteria;
}

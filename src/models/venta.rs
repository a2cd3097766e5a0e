//! Venta model matching the backend wire contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{iso_instant, Cliente, Empleado, Entity, FilterCriteria, Filterable};

/// A sale, referencing the client who bought and the employee who sold.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Venta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    /// Transaction date, ISO-8601 string on the wire.
    #[serde(default, with = "iso_instant", skip_serializing_if = "Option::is_none")]
    pub fecha: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cliente: Option<Cliente>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empleado: Option<Empleado>,
}

impl Entity for Venta {
    const RESOURCE: &'static str = "api/ventas";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// Range and reference criteria for the sale filter endpoint.
#[derive(Debug, Clone, Default)]
pub struct VentaCriteria {
    pub id: Option<i64>,
    pub total_desde: Option<f64>,
    pub total_hasta: Option<f64>,
    pub fecha_desde: Option<DateTime<Utc>>,
    pub fecha_hasta: Option<DateTime<Utc>>,
    pub cliente_id: Option<i64>,
    pub empleado_id: Option<i64>,
}

impl FilterCriteria for VentaCriteria {
    fn is_unset(&self) -> bool {
        self.id.is_none()
            && self.total_desde.is_none()
            && self.total_hasta.is_none()
            && self.fecha_desde.is_none()
            && self.fecha_hasta.is_none()
            && self.cliente_id.is_none()
            && self.empleado_id.is_none()
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("id", self.id.map(|id| id.to_string()).unwrap_or_default()),
            (
                "totalI",
                self.total_desde.map(|t| t.to_string()).unwrap_or_default(),
            ),
            (
                "totalF",
                self.total_hasta.map(|t| t.to_string()).unwrap_or_default(),
            ),
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
                "idC",
                self.cliente_id.map(|id| id.to_string()).unwrap_or_default(),
            ),
            (
                "idE",
                self.empleado_id
                    .map(|id| id.to_string())
                    .unwrap_or_default(),
            ),
        ]
    }
}

impl Filterable for Venta {
    const FILTER_PATH: &'static str = "get-sales-by-filter";

    type Criteria = VentaCriteria;
}

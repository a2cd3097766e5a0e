//! Data models for the concesionario admin client.
//!
//! These records match the backend wire contract exactly: Spanish field
//! names, backend-assigned numeric identifiers, ISO-8601 date strings.

mod cliente;
mod coche;
mod empleado;
mod venta;

pub use cliente::*;
pub use coche::*;
pub use empleado::*;
pub use venta::*;

use serde::{de::DeserializeOwned, Serialize};

/// Descriptor for a backend-persisted entity exposed under `api/<entities>`.
///
/// The identifier is assigned by the backend and absent until the first
/// successful create.
pub trait Entity:
    Serialize + DeserializeOwned + Clone + std::fmt::Debug + Send + Sync + 'static
{
    /// Resource path under the API base, e.g. `api/clientes`.
    const RESOURCE: &'static str;

    /// Backend-assigned identifier, if already persisted.
    fn id(&self) -> Option<i64>;
}

/// Entity with a dedicated server-side filter endpoint.
pub trait Filterable: Entity {
    /// Path segment of the filter endpoint, e.g. `get-clients-by-filter`.
    const FILTER_PATH: &'static str;

    type Criteria: FilterCriteria;
}

/// Field-level filter criteria for one entity type.
///
/// The filter endpoint expects every domain field as an explicit query
/// parameter, empty string when unset.
pub trait FilterCriteria: Default + Clone + std::fmt::Debug + Send + Sync {
    /// True when no criterion is set. The list controller must not issue a
    /// filter request in that case.
    fn is_unset(&self) -> bool;

    /// All filter fields as query parameters, in declaration order.
    fn query_pairs(&self) -> Vec<(&'static str, String)>;
}

/// Serialization boundary for temporal fields.
///
/// Dates live in memory as `chrono::DateTime<Utc>` and cross the wire as
/// millisecond-precision UTC ISO-8601 strings. Absence is preserved through
/// the round trip. Shared by every entity with a date-valued field.
pub mod iso_instant {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    /// Format one instant the way it crosses the wire.
    pub fn format(instant: &DateTime<Utc>) -> String {
        instant.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(instant) => serializer.serialize_str(&format(instant)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|value| {
            DateTime::parse_from_rfc3339(&value)
                .map(|instant| instant.with_timezone(&Utc))
                .map_err(serde::de::Error::custom)
        })
        .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_date_round_trip_preserves_instant() {
        let venta = Venta {
            id: Some(7),
            total: Some(12000.0),
            fecha: Some(Utc.with_ymd_and_hms(2021, 6, 3, 14, 30, 0).unwrap()),
            cliente: None,
            empleado: None,
        };

        let wire = serde_json::to_value(&venta).unwrap();
        assert_eq!(wire["fecha"], "2021-06-03T14:30:00.000Z");

        let back: Venta = serde_json::from_value(wire).unwrap();
        assert_eq!(back.fecha, venta.fecha);
    }

    #[test]
    fn test_absent_date_stays_absent() {
        let venta = Venta {
            id: Some(1),
            total: None,
            fecha: None,
            cliente: None,
            empleado: None,
        };

        let wire = serde_json::to_value(&venta).unwrap();
        assert!(wire.get("fecha").is_none());

        let back: Venta = serde_json::from_value(wire).unwrap();
        assert!(back.fecha.is_none());
    }

    #[test]
    fn test_cliente_criteria_always_sends_all_fields() {
        let criteria = ClienteCriteria {
            nombre: Some("Ana".to_string()),
            ..Default::default()
        };

        assert!(!criteria.is_unset());
        assert_eq!(
            criteria.query_pairs(),
            vec![
                ("id", String::new()),
                ("nombre", "Ana".to_string()),
                ("apellidos", String::new()),
                ("dni", String::new()),
            ]
        );
    }

    #[test]
    fn test_empleado_criteria_always_sends_all_fields() {
        let criteria = EmpleadoCriteria {
            id: Some(3),
            dni: Some("87654321B".to_string()),
            ..Default::default()
        };

        assert!(!criteria.is_unset());
        assert_eq!(
            criteria.query_pairs(),
            vec![
                ("id", "3".to_string()),
                ("nombre", String::new()),
                ("apellidos", String::new()),
                ("dni", "87654321B".to_string()),
            ]
        );
    }

    #[test]
    fn test_coche_criteria_always_sends_all_fields() {
        let criteria = CocheCriteria {
            marca: Some("seat".to_string()),
            fecha_desde: Some(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()),
            precio_hasta: Some(15000.5),
            venta_id: Some(4),
            ..Default::default()
        };

        assert!(!criteria.is_unset());
        assert_eq!(
            criteria.query_pairs(),
            vec![
                ("id", String::new()),
                ("color", String::new()),
                ("modelo", String::new()),
                ("marca", "seat".to_string()),
                ("fechaI", "2020-01-01T00:00:00.000Z".to_string()),
                ("fechaF", String::new()),
                ("precioI", String::new()),
                ("precioF", "15000.5".to_string()),
                ("venta", "4".to_string()),
            ]
        );
    }

    #[test]
    fn test_unset_criteria_detected() {
        assert!(ClienteCriteria::default().is_unset());
        assert!(EmpleadoCriteria::default().is_unset());
        assert!(CocheCriteria::default().is_unset());
        assert!(VentaCriteria::default().is_unset());
    }

    #[test]
    fn test_venta_criteria_always_sends_all_fields() {
        let criteria = VentaCriteria {
            total_desde: Some(1000.0),
            total_hasta: Some(20000.0),
            fecha_desde: Some(Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap()),
            cliente_id: Some(8),
            empleado_id: Some(2),
            ..Default::default()
        };

        assert!(!criteria.is_unset());
        assert_eq!(
            criteria.query_pairs(),
            vec![
                ("id", String::new()),
                ("totalI", "1000".to_string()),
                ("totalF", "20000".to_string()),
                ("fechaI", "2021-01-01T00:00:00.000Z".to_string()),
                ("fechaF", String::new()),
                ("idC", "8".to_string()),
                ("idE", "2".to_string()),
            ]
        );
    }
}

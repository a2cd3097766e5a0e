//! Empleado model matching the backend wire contract.

use serde::{Deserialize, Serialize};

use super::{Entity, FilterCriteria, Filterable};

/// A dealership employee.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Empleado {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apellidos: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dni: Option<String>,
}

impl Entity for Empleado {
    const RESOURCE: &'static str = "api/empleados";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// Substring criteria for the employee filter endpoint.
#[derive(Debug, Clone, Default)]
pub struct EmpleadoCriteria {
    pub id: Option<i64>,
    pub nombre: Option<String>,
    pub apellidos: Option<String>,
    pub dni: Option<String>,
}

impl FilterCriteria for EmpleadoCriteria {
    fn is_unset(&self) -> bool {
        self.id.is_none() && self.nombre.is_none() && self.apellidos.is_none() && self.dni.is_none()
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("id", self.id.map(|id| id.to_string()).unwrap_or_default()),
            ("nombre", self.nombre.clone().unwrap_or_default()),
            ("apellidos", self.apellidos.clone().unwrap_or_default()),
            ("dni", self.dni.clone().unwrap_or_default()),
        ]
    }
}

impl Filterable for Empleado {
    const FILTER_PATH: &'static str = "get-employees-by-filter";

    type Criteria = EmpleadoCriteria;
}

//! Cliente model matching the backend wire contract.

use serde::{Deserialize, Serialize};

use super::{Entity, FilterCriteria, Filterable};

/// A dealership client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cliente {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apellidos: Option<String>,
    /// National ID, 8 digits followed by an uppercase letter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dni: Option<String>,
}

impl Entity for Cliente {
    const RESOURCE: &'static str = "api/clientes";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// Substring criteria for the client filter endpoint.
#[derive(Debug, Clone, Default)]
pub struct ClienteCriteria {
    pub id: Option<i64>,
    pub nombre: Option<String>,
    pub apellidos: Option<String>,
    pub dni: Option<String>,
}

impl FilterCriteria for ClienteCriteria {
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

impl Filterable for Cliente {
    const FILTER_PATH: &'static str = "get-clients-by-filter";

    type Criteria = ClienteCriteria;
}

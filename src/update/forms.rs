//! Per-entity edit forms and their field-level validation rules.
//!
//! Enforcement is the hosting UI's job: a form reports its errors, and the
//! host is expected to block submission while any remain.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::FieldError;
use crate::models::{Cliente, Coche, Empleado, Entity, Venta};

/// 8 digits followed by one uppercase letter.
static DNI_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new("^[0-9]{8}[A-Z]$").unwrap());

/// Edit form for one entity type: field values, population from a resolved
/// entity, conversion back to the wire representation, validation rules.
pub trait EntityForm: Default {
    type Entity: Entity;

    /// Populate field values from a resolved entity.
    fn populate(&mut self, entity: &Self::Entity);

    /// Build the wire entity from current field values.
    fn to_entity(&self) -> Self::Entity;

    /// Field-level validation; `Ok` when the form may be submitted.
    fn validate(&self) -> Result<(), Vec<FieldError>>;
}

fn required(field: &'static str, value: Option<&str>) -> Option<FieldError> {
    match value {
        Some(v) if !v.is_empty() => None,
        _ => Some(FieldError::new(field, "required")),
    }
}

fn length_between(
    field: &'static str,
    value: Option<&str>,
    min: usize,
    max: usize,
) -> Option<FieldError> {
    let v = value?;
    if v.is_empty() || (min..=max).contains(&v.chars().count()) {
        None
    } else {
        Some(FieldError::new(
            field,
            format!("length must be between {} and {}", min, max),
        ))
    }
}

fn matches(field: &'static str, value: Option<&str>, pattern: &Regex) -> Option<FieldError> {
    let v = value?;
    if v.is_empty() || pattern.is_match(v) {
        None
    } else {
        Some(FieldError::new(field, "invalid format"))
    }
}

fn required_f64(field: &'static str, value: Option<f64>) -> Option<FieldError> {
    match value {
        Some(_) => None,
        None => Some(FieldError::new(field, "required")),
    }
}

fn at_least(field: &'static str, value: Option<f64>, min: f64) -> Option<FieldError> {
    let v = value?;
    if v >= min {
        None
    } else {
        Some(FieldError::new(field, format!("must be at least {}", min)))
    }
}

/// Edit form for a client.
#[derive(Debug, Clone, Default)]
pub struct ClienteForm {
    pub id: Option<i64>,
    pub nombre: Option<String>,
    pub apellidos: Option<String>,
    pub dni: Option<String>,
}

impl EntityForm for ClienteForm {
    type Entity = Cliente;

    fn populate(&mut self, entity: &Cliente) {
        self.id = entity.id;
        self.nombre = entity.nombre.clone();
        self.apellidos = entity.apellidos.clone();
        self.dni = entity.dni.clone();
    }

    fn to_entity(&self) -> Cliente {
        Cliente {
            id: self.id,
            nombre: self.nombre.clone(),
            apellidos: self.apellidos.clone(),
            dni: self.dni.clone(),
        }
    }

    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let errors: Vec<FieldError> = [
            required("nombre", self.nombre.as_deref()),
            length_between("nombre", self.nombre.as_deref(), 3, 15),
            required("apellidos", self.apellidos.as_deref()),
            length_between("apellidos", self.apellidos.as_deref(), 4, 40),
            required("dni", self.dni.as_deref()),
            length_between("dni", self.dni.as_deref(), 9, 9),
            matches("dni", self.dni.as_deref(), &DNI_PATTERN),
        ]
        .into_iter()
        .flatten()
        .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Edit form for an employee. Same shape and rules as the client form.
#[derive(Debug, Clone, Default)]
pub struct EmpleadoForm {
    pub id: Option<i64>,
    pub nombre: Option<String>,
    pub apellidos: Option<String>,
    pub dni: Option<String>,
}

impl EntityForm for EmpleadoForm {
    type Entity = Empleado;

    fn populate(&mut self, entity: &Empleado) {
        self.id = entity.id;
        self.nombre = entity.nombre.clone();
        self.apellidos = entity.apellidos.clone();
        self.dni = entity.dni.clone();
    }

    fn to_entity(&self) -> Empleado {
        Empleado {
            id: self.id,
            nombre: self.nombre.clone(),
            apellidos: self.apellidos.clone(),
            dni: self.dni.clone(),
        }
    }

    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let errors: Vec<FieldError> = [
            required("nombre", self.nombre.as_deref()),
            length_between("nombre", self.nombre.as_deref(), 3, 15),
            required("apellidos", self.apellidos.as_deref()),
            length_between("apellidos", self.apellidos.as_deref(), 4, 40),
            required("dni", self.dni.as_deref()),
            length_between("dni", self.dni.as_deref(), 9, 9),
            matches("dni", self.dni.as_deref(), &DNI_PATTERN),
        ]
        .into_iter()
        .flatten()
        .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Edit form for a vehicle, including the sale picker selection.
#[derive(Debug, Clone, Default)]
pub struct CocheForm {
    pub id: Option<i64>,
    pub color: Option<String>,
    pub modelo: Option<String>,
    pub marca: Option<String>,
    pub anio: Option<DateTime<Utc>>,
    pub precio: Option<f64>,
    pub venta: Option<Venta>,
}

impl EntityForm for CocheForm {
    type Entity = Coche;

    fn populate(&mut self, entity: &Coche) {
        self.id = entity.id;
        self.color = entity.color.clone();
        self.modelo = entity.modelo.clone();
        self.marca = entity.marca.clone();
        self.anio = entity.anio;
        self.precio = entity.precio;
        self.venta = entity.venta.clone();
    }

    fn to_entity(&self) -> Coche {
        Coche {
            id: self.id,
            color: self.color.clone(),
            modelo: self.modelo.clone(),
            marca: self.marca.clone(),
            anio: self.anio,
            precio: self.precio,
            venta: self.venta.clone(),
        }
    }

    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let errors: Vec<FieldError> = [
            required("color", self.color.as_deref()),
            length_between("color", self.color.as_deref(), 3, 15),
            required("modelo", self.modelo.as_deref()),
            length_between("modelo", self.modelo.as_deref(), 3, 15),
            required("marca", self.marca.as_deref()),
            length_between("marca", self.marca.as_deref(), 3, 15),
            required_f64("precio", self.precio),
            at_least("precio", self.precio, 1.0),
        ]
        .into_iter()
        .flatten()
        .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Edit form for a sale, including both reference pickers.
#[derive(Debug, Clone, Default)]
pub struct VentaForm {
    pub id: Option<i64>,
    pub total: Option<f64>,
    pub fecha: Option<DateTime<Utc>>,
    pub cliente: Option<Cliente>,
    pub empleado: Option<Empleado>,
}

impl EntityForm for VentaForm {
    type Entity = Venta;

    fn populate(&mut self, entity: &Venta) {
        self.id = entity.id;
        self.total = entity.total;
        self.fecha = entity.fecha;
        self.cliente = entity.cliente.clone();
        self.empleado = entity.empleado.clone();
    }

    fn to_entity(&self) -> Venta {
        Venta {
            id: self.id,
            total: self.total,
            fecha: self.fecha,
            cliente: self.cliente.clone(),
            empleado: self.empleado.clone(),
        }
    }

    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let errors: Vec<FieldError> = at_least("total", self.total, 0.0).into_iter().collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_cliente_form() -> ClienteForm {
        ClienteForm {
            id: None,
            nombre: Some("Ana".to_string()),
            apellidos: Some("García López".to_string()),
            dni: Some("12345678Z".to_string()),
        }
    }

    #[test]
    fn test_valid_cliente_form_passes() {
        assert!(valid_cliente_form().validate().is_ok());
    }

    #[test]
    fn test_missing_fields_are_reported() {
        let errors = ClienteForm::default().validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["nombre", "apellidos", "dni"]);
    }

    #[test]
    fn test_dni_pattern_is_enforced() {
        let mut form = valid_cliente_form();
        form.dni = Some("1234567ZZ".to_string());
        let errors = form.validate().unwrap_err();
        assert_eq!(errors, vec![FieldError::new("dni", "invalid format")]);

        form.dni = Some("12345678z".to_string());
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_nombre_length_bounds() {
        let mut form = valid_cliente_form();
        form.nombre = Some("Al".to_string());
        assert!(form.validate().is_err());

        form.nombre = Some("A".repeat(16));
        assert!(form.validate().is_err());

        form.nombre = Some("A".repeat(15));
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_coche_missing_fields_are_reported() {
        let errors = CocheForm::default().validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["color", "modelo", "marca", "precio"]);
        assert_eq!(errors[3].message, "required");
    }

    #[test]
    fn test_coche_precio_minimum() {
        let mut form = CocheForm {
            color: Some("rojo".to_string()),
            modelo: Some("ibiza".to_string()),
            marca: Some("seat".to_string()),
            precio: Some(0.5),
            ..Default::default()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors[0].field, "precio");

        form.precio = Some(1.0);
        assert!(form.validate().is_ok());
    }
}

//! Administrative client engine for the concesionario backend.
//!
//! One generic CRUD/list/update implementation, configured per entity type
//! (Cliente, Empleado, Coche, Venta) through descriptor traits: a REST
//! resource client with pagination and filtering, a list controller that
//! mirrors its state into the route query, and an update controller driving
//! a create-or-edit form with foreign-key pickers.

pub mod client;
pub mod config;
pub mod errors;
pub mod list;
pub mod models;
pub mod routing;
pub mod update;

pub use client::{add_to_collection_if_missing, ClientContext, Page, QueryOptions, ResourceClient};
pub use config::Config;
pub use errors::{ClientError, FieldError};
pub use list::{DeleteConfirmation, DeleteDialog, DialogOutcome, ListController};
pub use routing::{Navigator, RouteQuery};
pub use update::{
    CocheUpdateController, EntityForm, SaveOutcome, UpdateController, VentaUpdateController,
};

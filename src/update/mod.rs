//! Update controller: a create-or-edit form for a single entity instance.
//!
//! The generic controller handles the save lifecycle; entities with
//! foreign-key pickers get a thin wrapper that also loads their picker
//! collections.

mod forms;

pub use forms::*;

use chrono::{DateTime, NaiveTime, Utc};

use crate::client::{add_to_collection_if_missing, QueryOptions, ResourceClient};
use crate::models::{Cliente, Coche, Empleado, Entity, Venta};
use crate::routing::Navigator;

/// Result of a save attempt, as seen by the hosting view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Failed,
}

/// Controller for one entity's create-or-edit form.
#[derive(Debug)]
pub struct UpdateController<F: EntityForm> {
    client: ResourceClient<F::Entity>,
    pub form: F,
    pub is_saving: bool,
}

impl<F: EntityForm> UpdateController<F> {
    pub fn new(client: ResourceClient<F::Entity>) -> Self {
        Self {
            client,
            form: F::default(),
            is_saving: false,
        }
    }

    /// Populate the form from the entity resolved by the routing layer: a
    /// pre-fetched instance for edit, an empty default for create.
    pub fn init(&mut self, resolved: &F::Entity) {
        self.form = F::default();
        self.form.populate(resolved);
    }

    /// Build the entity from the form and persist it: update when it already
    /// carries an identifier, create otherwise. The saving flag is cleared
    /// unconditionally on completion; success navigates back, failure leaves
    /// the user on the form to retry.
    pub async fn save(&mut self, nav: &mut dyn Navigator) -> SaveOutcome {
        self.is_saving = true;
        let entity = self.form.to_entity();

        let result = if entity.id().is_some() {
            self.client.update(&entity).await
        } else {
            self.client.create(&entity).await
        };

        self.is_saving = false;
        match result {
            Ok(_) => {
                nav.back();
                SaveOutcome::Saved
            }
            Err(err) => {
                // Extension point: no recovery beyond logging.
                tracing::warn!(resource = <F::Entity>::RESOURCE, error = %err, "save failed");
                SaveOutcome::Failed
            }
        }
    }
}

/// Midnight UTC today, the default `anio` for a newly created vehicle.
fn start_of_today() -> DateTime<Utc> {
    Utc::now().date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Update controller for vehicles, with the sale picker.
#[derive(Debug)]
pub struct CocheUpdateController {
    pub base: UpdateController<CocheForm>,
    ventas: ResourceClient<Venta>,
    /// Candidate sales offered by the picker
    pub ventas_shared_collection: Vec<Venta>,
}

impl CocheUpdateController {
    pub fn new(coches: ResourceClient<Coche>, ventas: ResourceClient<Venta>) -> Self {
        Self {
            base: UpdateController::new(coches),
            ventas,
            ventas_shared_collection: Vec::new(),
        }
    }

    /// Populate the form and the picker. A vehicle being created gets its
    /// `anio` defaulted to today.
    pub async fn init(&mut self, mut resolved: Coche) {
        if resolved.id.is_none() {
            resolved.anio = Some(start_of_today());
        }

        self.base.init(&resolved);
        let held = std::mem::take(&mut self.ventas_shared_collection);
        self.ventas_shared_collection =
            add_to_collection_if_missing(held, [resolved.venta.clone()]);

        self.load_relationships_options().await;
    }

    /// Fetch the candidate sales and merge in the current selection, so the
    /// selected sale stays visible even when outside the fetched page.
    pub async fn load_relationships_options(&mut self) {
        match self.ventas.query(&QueryOptions::default()).await {
            Ok(page) => {
                let selected = self.base.form.venta.clone();
                self.ventas_shared_collection =
                    add_to_collection_if_missing(page.entities, [selected]);
            }
            Err(err) => {
                tracing::warn!(error = %err, "loading venta options failed");
            }
        }
    }

    pub async fn save(&mut self, nav: &mut dyn Navigator) -> SaveOutcome {
        self.base.save(nav).await
    }
}

/// Update controller for sales, with the client and employee pickers.
#[derive(Debug)]
pub struct VentaUpdateController {
    pub base: UpdateController<VentaForm>,
    clientes: ResourceClient<Cliente>,
    empleados: ResourceClient<Empleado>,
    pub clientes_shared_collection: Vec<Cliente>,
    pub empleados_shared_collection: Vec<Empleado>,
}

impl VentaUpdateController {
    pub fn new(
        ventas: ResourceClient<Venta>,
        clientes: ResourceClient<Cliente>,
        empleados: ResourceClient<Empleado>,
    ) -> Self {
        Self {
            base: UpdateController::new(ventas),
            clientes,
            empleados,
            clientes_shared_collection: Vec::new(),
            empleados_shared_collection: Vec::new(),
        }
    }

    pub async fn init(&mut self, resolved: Venta) {
        self.base.init(&resolved);

        let held = std::mem::take(&mut self.clientes_shared_collection);
        self.clientes_shared_collection =
            add_to_collection_if_missing(held, [resolved.cliente.clone()]);
        let held = std::mem::take(&mut self.empleados_shared_collection);
        self.empleados_shared_collection =
            add_to_collection_if_missing(held, [resolved.empleado.clone()]);

        self.load_relationships_options().await;
    }

    pub async fn load_relationships_options(&mut self) {
        match self.clientes.query(&QueryOptions::default()).await {
            Ok(page) => {
                let selected = self.base.form.cliente.clone();
                self.clientes_shared_collection =
                    add_to_collection_if_missing(page.entities, [selected]);
            }
            Err(err) => {
                tracing::warn!(error = %err, "loading cliente options failed");
            }
        }

        match self.empleados.query(&QueryOptions::default()).await {
            Ok(page) => {
                let selected = self.base.form.empleado.clone();
                self.empleados_shared_collection =
                    add_to_collection_if_missing(page.entities, [selected]);
            }
            Err(err) => {
                tracing::warn!(error = %err, "loading empleado options failed");
            }
        }
    }

    pub async fn save(&mut self, nav: &mut dyn Navigator) -> SaveOutcome {
        self.base.save(nav).await
    }
}

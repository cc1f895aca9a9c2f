//! Transaction lists (receivings and sales): label resolution for their
//! foreign references plus the mark-paid / void workflow actions.

use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};

use crate::api::{ApiClient, ApiError};
use crate::interaction::Interaction;
use crate::lookup::LabelCache;
use crate::models::{Cliente, Empleado, Entity, Ingreso, Proveedor, Venta};

use super::list::ListController;

const VOID_PROMPT: &str = "Ingrese el motivo de anulación:";

/// Prompt for a void reason and post `anular`. An empty or cancelled
/// reason aborts with no request. Returns whether the list should
/// re-fetch.
async fn post_void(
    api: &ApiClient,
    interaction: &dyn Interaction,
    path: &str,
    id: &str,
    voided_notice: &str,
) -> bool {
    let Some(motivo) = interaction.prompt(VOID_PROMPT) else {
        return false;
    };
    let motivo = motivo.trim().to_string();
    if motivo.is_empty() {
        return false;
    }

    match api.post_action(path, id, "anular", Some(Value::String(motivo))).await {
        Ok(()) => {
            info!(entity = path, id, "transaction voided");
            interaction.alert(voided_notice);
            true
        }
        Err(err) => {
            let detail = err.mensaje().unwrap_or("Falló");
            interaction.alert(&format!("Error: {detail}"));
            false
        }
    }
}

// ---------------------------------------------------------------------------
// Receiving list
// ---------------------------------------------------------------------------

/// Receiving list with supplier/employee labels resolved for display.
pub struct IngresoList {
    list: ListController<Ingreso>,
    labels: LabelCache,
}

impl IngresoList {
    pub fn new(api: ApiClient, interaction: Arc<dyn Interaction>) -> Self {
        Self {
            labels: LabelCache::new(api.clone()),
            list: ListController::new(api, interaction),
        }
    }

    /// Transactions currently displayed.
    pub fn rows(&self) -> &[Ingreso] {
        self.list.rows()
    }

    /// Fetch the collection and both reference collections concurrently,
    /// priming the label cache for this activation. Any failure empties
    /// the displayed set behind the load notice.
    pub async fn activate(&mut self) {
        let fetched = tokio::try_join!(
            self.list.api.fetch_all::<Proveedor>(Proveedor::PATH),
            self.list.api.fetch_all::<Empleado>(Empleado::PATH),
            self.list.api.fetch_all::<Ingreso>(Ingreso::PATH),
        );
        match fetched {
            Ok((proveedores, empleados, ingresos)) => {
                self.labels.prime(&proveedores);
                self.labels.prime(&empleados);
                self.list.replace_rows(ingresos);
            }
            Err(err) => {
                warn!(%err, "receiving list activation failed");
                self.list.clear_rows();
                self.list.interaction.alert(Ingreso::LIST_TEXT.load_error);
            }
        }
    }

    /// Re-fetch only the transaction collection; labels keep the values
    /// primed at activation.
    pub async fn load_all(&mut self) {
        self.list.load_all().await;
    }

    pub async fn search_by_id(&mut self, id: &str) {
        self.list.search_by_id(id).await;
    }

    pub fn proveedor_label<'a>(&'a self, id: &'a str) -> &'a str {
        self.labels.resolve::<Proveedor>(id)
    }

    pub fn empleado_label<'a>(&'a self, id: &'a str) -> &'a str {
        self.labels.resolve::<Empleado>(id)
    }

    /// Mark a receiving as paid after confirmation, then re-fetch.
    pub async fn mark_paid(&mut self, id: &str) {
        if !self
            .list
            .interaction
            .confirm("¿Registrar pago para este ingreso?")
        {
            return;
        }

        match self
            .list
            .api
            .post_action(Ingreso::PATH, id, "pagar", None)
            .await
        {
            Ok(()) => {
                info!(id, "payment registered");
                self.list.interaction.alert("Pago registrado.");
                self.list.load_all().await;
            }
            Err(err) => {
                let detail = err.mensaje().unwrap_or("Falló");
                self.list.interaction.alert(&format!("Error: {detail}"));
            }
        }
    }

    /// Void a receiving with a prompted reason, then re-fetch.
    pub async fn void(&mut self, id: &str) {
        let refetch = post_void(
            &self.list.api,
            self.list.interaction.as_ref(),
            Ingreso::PATH,
            id,
            "Ingreso anulado.",
        )
        .await;
        if refetch {
            self.list.load_all().await;
        }
    }
}

// ---------------------------------------------------------------------------
// Sales list
// ---------------------------------------------------------------------------

/// Sales list with customer/employee labels resolved for display. Sales
/// have no form module; records enter through the point of sale and the
/// console only inspects and voids them.
pub struct VentaList {
    list: ListController<Venta>,
    labels: LabelCache,
}

impl VentaList {
    pub fn new(api: ApiClient, interaction: Arc<dyn Interaction>) -> Self {
        Self {
            labels: LabelCache::new(api.clone()),
            list: ListController::new(api, interaction),
        }
    }

    pub fn rows(&self) -> &[Venta] {
        self.list.rows()
    }

    pub async fn activate(&mut self) {
        let fetched = tokio::try_join!(
            self.list.api.fetch_all::<Cliente>(Cliente::PATH),
            self.list.api.fetch_all::<Empleado>(Empleado::PATH),
            self.list.api.fetch_all::<Venta>(Venta::PATH),
        );
        match fetched {
            Ok((clientes, empleados, ventas)) => {
                self.labels.prime(&clientes);
                self.labels.prime(&empleados);
                self.list.replace_rows(ventas);
            }
            Err(err) => {
                warn!(%err, "sales list activation failed");
                self.list.clear_rows();
                self.list.interaction.alert(Venta::LIST_TEXT.load_error);
            }
        }
    }

    pub async fn load_all(&mut self) {
        self.list.load_all().await;
    }

    pub async fn search_by_id(&mut self, id: &str) {
        self.list.search_by_id(id).await;
    }

    pub fn cliente_label<'a>(&'a self, id: &'a str) -> &'a str {
        self.labels.resolve::<Cliente>(id)
    }

    pub fn empleado_label<'a>(&'a self, id: &'a str) -> &'a str {
        self.labels.resolve::<Empleado>(id)
    }

    /// Void a sale with a prompted reason, then re-fetch.
    pub async fn void(&mut self, id: &str) {
        let refetch = post_void(
            &self.list.api,
            self.list.interaction.as_ref(),
            Venta::PATH,
            id,
            "Venta anulada. El stock ha sido restaurado.",
        )
        .await;
        if refetch {
            self.list.load_all().await;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

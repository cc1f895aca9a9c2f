//! Console façade.
//!
//! Wires configuration, the API client, and the injected interaction and
//! navigation collaborators into per-module controllers. A UI shell keeps
//! one `Console` and asks it for a fresh controller whenever a page is
//! mounted — controllers own no state worth keeping across navigations.

use std::sync::Arc;

use crate::api::ApiClient;
use crate::config::ConsoleConfig;
use crate::controllers::{
    FormController, IngresoFormController, IngresoList, ListController, VentaList,
};
use crate::interaction::Interaction;
use crate::models::{
    Cliente, ClienteForm, Empleado, EmpleadoForm, Producto, ProductoForm, Proveedor, ProveedorForm,
};
use crate::navigation::Navigator;

pub struct Console {
    api: ApiClient,
    interaction: Arc<dyn Interaction>,
    navigator: Arc<dyn Navigator>,
}

impl Console {
    pub fn new(
        config: &ConsoleConfig,
        interaction: Arc<dyn Interaction>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            api: ApiClient::new(config),
            interaction,
            navigator,
        }
    }

    /// Convenience constructor reading `CONSOLE_API_URL`.
    pub fn from_env(interaction: Arc<dyn Interaction>, navigator: Arc<dyn Navigator>) -> Self {
        Self::new(&ConsoleConfig::from_env(), interaction, navigator)
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    // -- Productos ----------------------------------------------------------

    pub fn productos(&self) -> ListController<Producto> {
        ListController::new(self.api.clone(), self.interaction.clone())
    }

    pub fn producto_form(&self) -> FormController<ProductoForm> {
        FormController::new(
            self.api.clone(),
            self.interaction.clone(),
            self.navigator.clone(),
        )
    }

    // -- Proveedores --------------------------------------------------------

    pub fn proveedores(&self) -> ListController<Proveedor> {
        ListController::new(self.api.clone(), self.interaction.clone())
    }

    pub fn proveedor_form(&self) -> FormController<ProveedorForm> {
        FormController::new(
            self.api.clone(),
            self.interaction.clone(),
            self.navigator.clone(),
        )
    }

    // -- Empleados -----------------------------------------------------------

    pub fn empleados(&self) -> ListController<Empleado> {
        ListController::new(self.api.clone(), self.interaction.clone())
    }

    pub fn empleado_form(&self) -> FormController<EmpleadoForm> {
        FormController::new(
            self.api.clone(),
            self.interaction.clone(),
            self.navigator.clone(),
        )
    }

    // -- Clientes ------------------------------------------------------------

    pub fn clientes(&self) -> ListController<Cliente> {
        ListController::new(self.api.clone(), self.interaction.clone())
    }

    pub fn cliente_form(&self) -> FormController<ClienteForm> {
        FormController::new(
            self.api.clone(),
            self.interaction.clone(),
            self.navigator.clone(),
        )
    }

    // -- Transacciones -------------------------------------------------------

    pub fn ingresos(&self) -> IngresoList {
        IngresoList::new(self.api.clone(), self.interaction.clone())
    }

    pub fn ingreso_form(&self) -> IngresoFormController {
        IngresoFormController::new(
            self.api.clone(),
            self.interaction.clone(),
            self.navigator.clone(),
        )
    }

    pub fn ventas(&self) -> VentaList {
        VentaList::new(self.api.clone(), self.interaction.clone())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

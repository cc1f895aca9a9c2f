//! Navigation abstraction and the console route table.
//!
//! Controllers never render anything; they hand a [`Route`] to the injected
//! [`Navigator`] and the shell decides what mounting that route means.

use std::sync::Mutex;

// ---------------------------------------------------------------------------
// Routes
// ---------------------------------------------------------------------------

/// Console destinations, one per mounted page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Productos,
    ProductoForm { id: Option<String> },
    Proveedores,
    ProveedorForm { id: Option<String> },
    Empleados,
    EmpleadoForm { id: Option<String> },
    Clientes,
    ClienteForm { id: Option<String> },
    Ingresos,
    IngresoNuevo,
    Ventas,
}

impl Route {
    /// Path the shell's router maps this destination to.
    pub fn path(&self) -> String {
        fn form(base: &str, id: &Option<String>) -> String {
            match id {
                Some(id) => format!("/{base}/editar/{id}"),
                None => format!("/{base}/nuevo"),
            }
        }

        match self {
            Route::Dashboard => "/".to_string(),
            Route::Productos => "/productos".to_string(),
            Route::ProductoForm { id } => form("productos", id),
            Route::Proveedores => "/proveedores".to_string(),
            Route::ProveedorForm { id } => form("proveedores", id),
            Route::Empleados => "/empleados".to_string(),
            Route::EmpleadoForm { id } => form("empleados", id),
            Route::Clientes => "/clientes".to_string(),
            Route::ClienteForm { id } => form("clientes", id),
            Route::Ingresos => "/ingresos".to_string(),
            Route::IngresoNuevo => "/ingresos/nuevo".to_string(),
            Route::Ventas => "/ventas".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Navigator
// ---------------------------------------------------------------------------

/// Sink for navigation requests issued by controllers.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Captures every navigation request. Tests assert on it; a polling shell
/// can drain it.
#[derive(Debug, Default)]
pub struct RecordedNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordedNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes requested so far, oldest first.
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// The most recent request, if any.
    pub fn last(&self) -> Option<Route> {
        self.routes.lock().ok().and_then(|r| r.last().cloned())
    }
}

impl Navigator for RecordedNavigator {
    fn navigate(&self, route: Route) {
        if let Ok(mut routes) = self.routes.lock() {
            routes.push(route);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Receiving (ingreso) form: header references plus editable line items.
//!
//! Extends the form shape with an ordered sequence of line rows. Rows hold
//! raw strings until submit; the running total is display-only and the
//! authoritative total is computed server-side.

use std::sync::Arc;

use tracing::warn;

use crate::api::ApiClient;
use crate::interaction::Interaction;
use crate::models::{
    Empleado, Entity, Ingreso, IngresoDetallePayload, IngresoPayload, Producto, Proveedor,
};
use crate::navigation::{Navigator, Route};
use crate::parse_decimal;

/// One editable line row, as typed.
#[derive(Debug, Clone, Default)]
pub struct LineItemDraft {
    pub producto_id: String,
    pub cantidad: String,
    pub precio_unitario: String,
}

/// Reference collections backing the form's three dropdowns.
#[derive(Debug, Clone, Default)]
pub struct IngresoReferences {
    pub proveedores: Vec<Proveedor>,
    pub empleados: Vec<Empleado>,
    pub productos: Vec<Producto>,
}

/// Create-only form for a receiving transaction.
pub struct IngresoFormController {
    api: ApiClient,
    interaction: Arc<dyn Interaction>,
    navigator: Arc<dyn Navigator>,
    references: IngresoReferences,
    pub proveedor_id: String,
    pub empleado_id: String,
    lines: Vec<LineItemDraft>,
}

impl IngresoFormController {
    pub fn new(
        api: ApiClient,
        interaction: Arc<dyn Interaction>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            api,
            interaction,
            navigator,
            references: IngresoReferences::default(),
            proveedor_id: String::new(),
            empleado_id: String::new(),
            lines: vec![LineItemDraft::default()],
        }
    }

    /// Fetch the three reference collections concurrently and reset the
    /// draft. Any failure redirects back to the receiving list — the form
    /// is unusable without its dropdowns.
    pub async fn activate(&mut self) {
        self.proveedor_id.clear();
        self.empleado_id.clear();
        self.lines = vec![LineItemDraft::default()];

        let fetched = tokio::try_join!(
            self.api.fetch_all::<Proveedor>(Proveedor::PATH),
            self.api.fetch_all::<Empleado>(Empleado::PATH),
            self.api.fetch_all::<Producto>(Producto::PATH),
        );
        match fetched {
            Ok((proveedores, empleados, productos)) => {
                self.references = IngresoReferences {
                    proveedores,
                    empleados,
                    productos,
                };
            }
            Err(err) => {
                warn!(%err, "reference collections load failed");
                self.interaction.alert("Error al cargar datos maestros.");
                self.navigator.navigate(Route::Ingresos);
            }
        }
    }

    pub fn references(&self) -> &IngresoReferences {
        &self.references
    }

    /// Line rows, in order. Never empty.
    pub fn lines(&self) -> &[LineItemDraft] {
        &self.lines
    }

    pub fn line_mut(&mut self, index: usize) -> Option<&mut LineItemDraft> {
        self.lines.get_mut(index)
    }

    /// Append a blank row.
    pub fn add_row(&mut self) {
        self.lines.push(LineItemDraft::default());
    }

    /// Remove the row at `index`. At least one row is always retained, so
    /// removing from a single-row sequence is a no-op.
    pub fn remove_row(&mut self, index: usize) {
        if self.lines.len() > 1 && index < self.lines.len() {
            self.lines.remove(index);
        }
    }

    /// Display-only running total: Σ cantidad × precio unitario, with
    /// unparsable values contributing zero.
    pub fn compute_total(&self) -> f64 {
        self.lines
            .iter()
            .map(|line| {
                parse_decimal(&line.cantidad).unwrap_or(0.0)
                    * parse_decimal(&line.precio_unitario).unwrap_or(0.0)
            })
            .sum()
    }

    fn to_payload(&self) -> Result<IngresoPayload, String> {
        let proveedor_id = self.proveedor_id.trim();
        let empleado_id = self.empleado_id.trim();
        if proveedor_id.is_empty() || empleado_id.is_empty() {
            return Err("Seleccione proveedor y empleado.".to_string());
        }

        let mut detalles = Vec::with_capacity(self.lines.len());
        for line in &self.lines {
            let producto_id = line.producto_id.trim();
            if producto_id.is_empty() {
                return Err("Seleccione un producto en cada detalle.".to_string());
            }
            let cantidad =
                parse_decimal(&line.cantidad).ok_or_else(|| "Cantidad inválida.".to_string())?;
            let precio_unitario = parse_decimal(&line.precio_unitario)
                .ok_or_else(|| "Precio unitario inválido.".to_string())?;
            detalles.push(IngresoDetallePayload {
                producto_id: producto_id.to_string(),
                cantidad,
                precio_unitario,
            });
        }

        Ok(IngresoPayload {
            proveedor_id: proveedor_id.to_string(),
            empleado_id: empleado_id.to_string(),
            detalles,
        })
    }

    /// Parse every row and post the transaction. Validation failures and
    /// server rejections leave the draft intact for correction.
    pub async fn submit(&mut self) {
        let payload = match self.to_payload() {
            Ok(payload) => payload,
            Err(notice) => {
                self.interaction.alert(&notice);
                return;
            }
        };

        match self.api.create(Ingreso::PATH, &payload).await {
            Ok(()) => {
                self.interaction.alert("Ingreso registrado correctamente.");
                self.navigator.navigate(Route::Ingresos);
            }
            Err(err) => {
                let detail = err.mensaje().unwrap_or("Error al registrar el ingreso.");
                self.interaction.alert(detail);
            }
        }
    }

    /// Discard the draft and return to the receiving list.
    pub fn cancel(&self) {
        self.navigator.navigate(Route::Ingresos);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

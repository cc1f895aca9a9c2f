//! Domain records, wire payloads, and form drafts for the console entities.
//!
//! Field names serialize to the back office's Spanish camelCase contract.
//! Each record implements [`Entity`] (collection path, notices, list route)
//! so the generic controllers can drive it; each editable module has a
//! draft type implementing [`EntityForm`] that holds fields exactly as the
//! user typed them and normalises them into a payload only at submit time.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::navigation::Route;
use crate::{clean_opt, parse_decimal, parse_entero};

fn default_true() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Controller contracts
// ---------------------------------------------------------------------------

/// Spanish notice strings for a list module, carried as data on [`Entity`].
#[derive(Debug, Clone, Copy)]
pub struct ListText {
    pub load_error: &'static str,
    pub not_found: &'static str,
    pub search_error: &'static str,
    pub delete_confirm: &'static str,
    pub deleted: &'static str,
}

/// Spanish notice strings for a form module.
#[derive(Debug, Clone, Copy)]
pub struct FormText {
    pub load_error: &'static str,
    pub created: &'static str,
    pub updated: &'static str,
}

/// A back-office record type the generic controllers can drive.
pub trait Entity: DeserializeOwned + Serialize + Clone + Send + Sync + 'static {
    /// Collection segment under the API base URL, e.g. `"Producto"`.
    const PATH: &'static str;

    /// Notices for the list module.
    const LIST_TEXT: ListText;

    /// Server-assigned identifier. Immutable once assigned.
    fn id(&self) -> &str;

    /// List destination for post-mutation navigation.
    fn list_route() -> Route;
}

/// Display label for id → label resolution on the transaction lists.
pub trait Labeled: Entity {
    fn display_label(&self) -> String;
}

/// Editable draft bound to one entity, holding every field as typed.
pub trait EntityForm: Default + Clone + Send {
    type Record: Entity;
    type Payload: Serialize + Send + Sync;

    /// Notices for the form module.
    const TEXT: FormText;

    /// Populate the draft from a fetched record, substituting defaults for
    /// absent optionals (blank string, active flag `true`).
    fn from_record(record: &Self::Record) -> Self;

    /// Trim, parse, and validate into the wire payload. The error is the
    /// user-facing validation notice.
    fn to_payload(&self) -> Result<Self::Payload, String>;
}

// ---------------------------------------------------------------------------
// Producto
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Producto {
    pub id: String,
    pub nombre: String,
    pub unidad_medida: String,
    pub precio_referencia: f64,
    pub stock_actual: i64,
    #[serde(default = "default_true")]
    pub estado: bool,
}

impl Entity for Producto {
    const PATH: &'static str = "Producto";
    const LIST_TEXT: ListText = ListText {
        load_error: "No se pudieron cargar los productos.",
        not_found: "Producto no encontrado.",
        search_error: "Error al buscar producto.",
        delete_confirm: "¿Estás seguro de eliminar este producto?",
        deleted: "Producto eliminado.",
    };

    fn id(&self) -> &str {
        &self.id
    }

    fn list_route() -> Route {
        Route::Productos
    }
}

impl Labeled for Producto {
    fn display_label(&self) -> String {
        format!("{} ({})", self.nombre, self.unidad_medida)
    }
}

/// Create/update body: the record minus its identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductoPayload {
    pub nombre: String,
    pub unidad_medida: String,
    pub precio_referencia: f64,
    pub stock_actual: i64,
    pub estado: bool,
}

#[derive(Debug, Clone)]
pub struct ProductoForm {
    pub nombre: String,
    pub unidad_medida: String,
    pub precio_referencia: String,
    pub stock_actual: String,
    pub estado: bool,
}

impl Default for ProductoForm {
    fn default() -> Self {
        Self {
            nombre: String::new(),
            unidad_medida: String::new(),
            precio_referencia: String::new(),
            stock_actual: String::new(),
            estado: true,
        }
    }
}

impl EntityForm for ProductoForm {
    type Record = Producto;
    type Payload = ProductoPayload;

    const TEXT: FormText = FormText {
        load_error: "No se pudo cargar el producto.",
        created: "Producto creado correctamente.",
        updated: "Producto actualizado correctamente.",
    };

    fn from_record(record: &Producto) -> Self {
        Self {
            nombre: record.nombre.clone(),
            unidad_medida: record.unidad_medida.clone(),
            precio_referencia: record.precio_referencia.to_string(),
            stock_actual: record.stock_actual.to_string(),
            estado: record.estado,
        }
    }

    fn to_payload(&self) -> Result<ProductoPayload, String> {
        let precio_referencia = parse_decimal(&self.precio_referencia)
            .ok_or_else(|| "Precio de referencia inválido.".to_string())?;
        let stock_actual = parse_entero(&self.stock_actual)
            .ok_or_else(|| "Stock actual inválido.".to_string())?;
        Ok(ProductoPayload {
            nombre: self.nombre.trim().to_string(),
            unidad_medida: self.unidad_medida.trim().to_string(),
            precio_referencia,
            stock_actual,
            estado: self.estado,
        })
    }
}

// ---------------------------------------------------------------------------
// Proveedor
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proveedor {
    pub id: String,
    pub nombre: String,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
    #[serde(default = "default_true")]
    pub estado: bool,
}

impl Entity for Proveedor {
    const PATH: &'static str = "Proveedor";
    const LIST_TEXT: ListText = ListText {
        load_error: "No se pudieron cargar los proveedores.",
        not_found: "Proveedor no encontrado.",
        search_error: "Error al buscar proveedor.",
        delete_confirm: "¿Eliminar este proveedor?",
        deleted: "Proveedor eliminado.",
    };

    fn id(&self) -> &str {
        &self.id
    }

    fn list_route() -> Route {
        Route::Proveedores
    }
}

impl Labeled for Proveedor {
    fn display_label(&self) -> String {
        self.nombre.clone()
    }
}

/// Optional fields submit as explicit `null` when blank, never `""`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProveedorPayload {
    pub nombre: String,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
    pub estado: bool,
}

#[derive(Debug, Clone)]
pub struct ProveedorForm {
    pub nombre: String,
    pub telefono: String,
    pub direccion: String,
    pub estado: bool,
}

impl Default for ProveedorForm {
    fn default() -> Self {
        Self {
            nombre: String::new(),
            telefono: String::new(),
            direccion: String::new(),
            estado: true,
        }
    }
}

impl EntityForm for ProveedorForm {
    type Record = Proveedor;
    type Payload = ProveedorPayload;

    const TEXT: FormText = FormText {
        load_error: "No se pudo cargar el proveedor.",
        created: "Proveedor creado correctamente.",
        updated: "Proveedor actualizado correctamente.",
    };

    fn from_record(record: &Proveedor) -> Self {
        Self {
            nombre: record.nombre.clone(),
            telefono: record.telefono.clone().unwrap_or_default(),
            direccion: record.direccion.clone().unwrap_or_default(),
            estado: record.estado,
        }
    }

    fn to_payload(&self) -> Result<ProveedorPayload, String> {
        Ok(ProveedorPayload {
            nombre: self.nombre.trim().to_string(),
            telefono: clean_opt(&self.telefono),
            direccion: clean_opt(&self.direccion),
            estado: self.estado,
        })
    }
}

// ---------------------------------------------------------------------------
// Empleado
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Empleado {
    pub id: String,
    pub nombre: String,
    pub apellido: String,
    pub cargo: String,
    #[serde(default = "default_true")]
    pub estado: bool,
}

impl Entity for Empleado {
    const PATH: &'static str = "Empleado";
    const LIST_TEXT: ListText = ListText {
        load_error: "No se pudieron cargar los empleados.",
        not_found: "Empleado no encontrado.",
        search_error: "Error al buscar empleado.",
        delete_confirm: "¿Eliminar este empleado?",
        deleted: "Empleado eliminado.",
    };

    fn id(&self) -> &str {
        &self.id
    }

    fn list_route() -> Route {
        Route::Empleados
    }
}

impl Labeled for Empleado {
    fn display_label(&self) -> String {
        format!("{} {}", self.nombre, self.apellido)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmpleadoPayload {
    pub nombre: String,
    pub apellido: String,
    pub cargo: String,
    pub estado: bool,
}

#[derive(Debug, Clone)]
pub struct EmpleadoForm {
    pub nombre: String,
    pub apellido: String,
    pub cargo: String,
    pub estado: bool,
}

impl Default for EmpleadoForm {
    fn default() -> Self {
        Self {
            nombre: String::new(),
            apellido: String::new(),
            cargo: String::new(),
            estado: true,
        }
    }
}

impl EntityForm for EmpleadoForm {
    type Record = Empleado;
    type Payload = EmpleadoPayload;

    const TEXT: FormText = FormText {
        load_error: "No se pudo cargar el empleado.",
        created: "Empleado creado correctamente.",
        updated: "Empleado actualizado correctamente.",
    };

    fn from_record(record: &Empleado) -> Self {
        Self {
            nombre: record.nombre.clone(),
            apellido: record.apellido.clone(),
            cargo: record.cargo.clone(),
            estado: record.estado,
        }
    }

    fn to_payload(&self) -> Result<EmpleadoPayload, String> {
        Ok(EmpleadoPayload {
            nombre: self.nombre.trim().to_string(),
            apellido: self.apellido.trim().to_string(),
            cargo: self.cargo.trim().to_string(),
            estado: self.estado,
        })
    }
}

// ---------------------------------------------------------------------------
// Cliente
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cliente {
    pub id: String,
    pub nombre_completo: String,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
    #[serde(default = "default_true")]
    pub estado: bool,
}

impl Entity for Cliente {
    const PATH: &'static str = "Cliente";
    const LIST_TEXT: ListText = ListText {
        load_error: "No se pudieron cargar los clientes.",
        not_found: "Cliente no encontrado.",
        search_error: "Error al buscar cliente.",
        delete_confirm: "¿Eliminar este cliente?",
        deleted: "Cliente eliminado.",
    };

    fn id(&self) -> &str {
        &self.id
    }

    fn list_route() -> Route {
        Route::Clientes
    }
}

impl Labeled for Cliente {
    fn display_label(&self) -> String {
        self.nombre_completo.clone()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientePayload {
    pub nombre_completo: String,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
    pub estado: bool,
}

#[derive(Debug, Clone)]
pub struct ClienteForm {
    pub nombre_completo: String,
    pub telefono: String,
    pub direccion: String,
    pub estado: bool,
}

impl Default for ClienteForm {
    fn default() -> Self {
        Self {
            nombre_completo: String::new(),
            telefono: String::new(),
            direccion: String::new(),
            estado: true,
        }
    }
}

impl EntityForm for ClienteForm {
    type Record = Cliente;
    type Payload = ClientePayload;

    const TEXT: FormText = FormText {
        load_error: "No se pudo cargar el cliente.",
        created: "Cliente creado correctamente.",
        updated: "Cliente actualizado correctamente.",
    };

    fn from_record(record: &Cliente) -> Self {
        Self {
            nombre_completo: record.nombre_completo.clone(),
            telefono: record.telefono.clone().unwrap_or_default(),
            direccion: record.direccion.clone().unwrap_or_default(),
            estado: record.estado,
        }
    }

    fn to_payload(&self) -> Result<ClientePayload, String> {
        Ok(ClientePayload {
            nombre_completo: self.nombre_completo.trim().to_string(),
            telefono: clean_opt(&self.telefono),
            direccion: clean_opt(&self.direccion),
            estado: self.estado,
        })
    }
}

// ---------------------------------------------------------------------------
// Ingreso
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingreso {
    pub id: String,
    pub proveedor_id: String,
    pub empleado_id: String,
    pub fecha_ingreso: DateTime<Utc>,
    pub monto_total: f64,
    pub pagado: bool,
    pub anulado: bool,
    #[serde(default)]
    pub detalles: Vec<IngresoDetalle>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngresoDetalle {
    pub producto_id: String,
    pub cantidad: f64,
    pub precio_unitario: f64,
}

impl Entity for Ingreso {
    const PATH: &'static str = "Ingreso";
    const LIST_TEXT: ListText = ListText {
        load_error: "No se pudieron cargar los datos.",
        not_found: "Ingreso no encontrado.",
        search_error: "Error al buscar ingreso.",
        delete_confirm: "¿Eliminar este ingreso?",
        deleted: "Ingreso eliminado.",
    };

    fn id(&self) -> &str {
        &self.id
    }

    fn list_route() -> Route {
        Route::Ingresos
    }
}

/// Create body for a receiving transaction. Date, total, and the
/// paid/voided flags are computed server-side and never submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngresoPayload {
    pub proveedor_id: String,
    pub empleado_id: String,
    pub detalles: Vec<IngresoDetallePayload>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngresoDetallePayload {
    pub producto_id: String,
    pub cantidad: f64,
    pub precio_unitario: f64,
}

// ---------------------------------------------------------------------------
// Venta
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venta {
    pub id: String,
    pub cliente_id: String,
    pub empleado_id: String,
    pub fecha_venta: DateTime<Utc>,
    pub monto_total: f64,
    pub anulado: bool,
}

impl Entity for Venta {
    const PATH: &'static str = "Venta";
    const LIST_TEXT: ListText = ListText {
        load_error: "No se pudieron cargar los datos.",
        not_found: "Venta no encontrada.",
        search_error: "Error al buscar venta.",
        delete_confirm: "¿Eliminar esta venta?",
        deleted: "Venta eliminada.",
    };

    fn id(&self) -> &str {
        &self.id
    }

    fn list_route() -> Route {
        Route::Ventas
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn producto_deserializes_camel_case_wire_fields() {
        let producto: Producto = serde_json::from_value(json!({
            "id": "a0f9b8d2-1111-2222-3333-444455556666",
            "nombre": "Papa",
            "unidadMedida": "Kilo",
            "precioReferencia": 3.5,
            "stockActual": 50,
            "estado": true
        }))
        .unwrap();
        assert_eq!(producto.unidad_medida, "Kilo");
        assert_eq!(producto.stock_actual, 50);
    }

    #[test]
    fn estado_defaults_true_when_missing() {
        let cliente: Cliente = serde_json::from_value(json!({
            "id": "c-1",
            "nombreCompleto": "María López",
            "telefono": null,
            "direccion": null
        }))
        .unwrap();
        assert!(cliente.estado);
    }

    #[test]
    fn producto_form_normalises_to_parsed_payload() {
        let form = ProductoForm {
            nombre: "Papa".into(),
            unidad_medida: "Kilo".into(),
            precio_referencia: "3.50".into(),
            stock_actual: "50".into(),
            estado: true,
        };
        let payload = form.to_payload().unwrap();
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "nombre": "Papa",
                "unidadMedida": "Kilo",
                "precioReferencia": 3.5,
                "stockActual": 50,
                "estado": true
            })
        );
    }

    #[test]
    fn producto_form_rejects_unparsable_numerics() {
        let mut form = ProductoForm {
            nombre: "Papa".into(),
            unidad_medida: "Kilo".into(),
            precio_referencia: "tres".into(),
            stock_actual: "50".into(),
            estado: true,
        };
        assert_eq!(
            form.to_payload().unwrap_err(),
            "Precio de referencia inválido."
        );

        form.precio_referencia = "3.50".into();
        form.stock_actual = "5.5".into();
        assert_eq!(form.to_payload().unwrap_err(), "Stock actual inválido.");
    }

    #[test]
    fn cliente_blank_telefono_submits_as_null() {
        let form = ClienteForm {
            nombre_completo: "  María López ".into(),
            telefono: "   ".into(),
            direccion: "Av. Central 123".into(),
            estado: true,
        };
        let payload = form.to_payload().unwrap();
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "nombreCompleto": "María López",
                "telefono": null,
                "direccion": "Av. Central 123",
                "estado": true
            })
        );
    }

    #[test]
    fn form_defaults_start_active() {
        assert!(ProductoForm::default().estado);
        assert!(ClienteForm::default().estado);
        assert!(EmpleadoForm::default().estado);
        assert!(ProveedorForm::default().estado);
    }

    #[test]
    fn from_record_substitutes_blank_for_absent_optionals() {
        let record = Proveedor {
            id: "pr-1".into(),
            nombre: "Agro SAC".into(),
            telefono: None,
            direccion: None,
            estado: false,
        };
        let form = ProveedorForm::from_record(&record);
        assert_eq!(form.telefono, "");
        assert_eq!(form.direccion, "");
        assert!(!form.estado);
    }

    #[test]
    fn ingreso_deserializes_with_and_without_detalles() {
        let ingreso: Ingreso = serde_json::from_value(json!({
            "id": "i-1",
            "proveedorId": "pr-1",
            "empleadoId": "e-1",
            "fechaIngreso": "2026-03-14T15:00:00Z",
            "montoTotal": 70.0,
            "pagado": false,
            "anulado": false
        }))
        .unwrap();
        assert!(ingreso.detalles.is_empty());

        let ingreso: Ingreso = serde_json::from_value(json!({
            "id": "i-2",
            "proveedorId": "pr-1",
            "empleadoId": "e-1",
            "fechaIngreso": "2026-03-14T15:00:00Z",
            "montoTotal": 20.0,
            "pagado": true,
            "anulado": false,
            "detalles": [
                { "productoId": "p-1", "cantidad": 2.0, "precioUnitario": 10.0 }
            ]
        }))
        .unwrap();
        assert_eq!(ingreso.detalles.len(), 1);
        assert_eq!(ingreso.detalles[0].producto_id, "p-1");
    }

    #[test]
    fn display_labels_match_reference_dropdowns() {
        let empleado = Empleado {
            id: "e-1".into(),
            nombre: "Ana".into(),
            apellido: "Quispe".into(),
            cargo: "Almacén".into(),
            estado: true,
        };
        assert_eq!(empleado.display_label(), "Ana Quispe");

        let producto = Producto {
            id: "p-1".into(),
            nombre: "Papa".into(),
            unidad_medida: "Kilo".into(),
            precio_referencia: 3.5,
            stock_actual: 50,
            estado: true,
        };
        assert_eq!(producto.display_label(), "Papa (Kilo)");
    }
}

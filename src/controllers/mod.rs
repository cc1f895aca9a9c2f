//! Per-module controllers built from two generic shapes: the entity list
//! (load / search / delete) and the entity form (create / edit), plus the
//! receiving and sales specialisations layered on top.

pub mod form;
pub mod list;
pub mod receiving;
pub mod transactions;

pub use form::{FormController, FormMode};
pub use list::ListController;
pub use receiving::{IngresoFormController, IngresoReferences, LineItemDraft};
pub use transactions::{IngresoList, VentaList};

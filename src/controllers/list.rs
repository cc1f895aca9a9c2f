//! Generic entity list controller.
//!
//! One instance backs one list page. The displayed set is replaced
//! wholesale on every operation — nothing is patched incrementally and
//! nothing survives navigating away.

use std::sync::Arc;

use tracing::{info, warn};

use crate::api::{ApiClient, ApiError};
use crate::interaction::Interaction;
use crate::models::Entity;

/// List view state for one entity: the displayed records plus the
/// operations the list page exposes (reload, search by id, delete).
pub struct ListController<E: Entity> {
    pub(crate) api: ApiClient,
    pub(crate) interaction: Arc<dyn Interaction>,
    rows: Vec<E>,
}

impl<E: Entity> ListController<E> {
    pub fn new(api: ApiClient, interaction: Arc<dyn Interaction>) -> Self {
        Self {
            api,
            interaction,
            rows: Vec::new(),
        }
    }

    /// Records currently displayed.
    pub fn rows(&self) -> &[E] {
        &self.rows
    }

    pub(crate) fn replace_rows(&mut self, rows: Vec<E>) {
        self.rows = rows;
    }

    pub(crate) fn clear_rows(&mut self) {
        self.rows.clear();
    }

    /// Fetch the full collection, replacing the displayed set. On failure
    /// the set is emptied and the collection-load notice is shown.
    pub async fn load_all(&mut self) {
        match self.api.fetch_all::<E>(E::PATH).await {
            Ok(rows) => {
                info!(entity = E::PATH, count = rows.len(), "collection loaded");
                self.rows = rows;
            }
            Err(err) => {
                warn!(entity = E::PATH, %err, "collection load failed");
                self.rows.clear();
                self.interaction.alert(E::LIST_TEXT.load_error);
            }
        }
    }

    /// Fetch one record by id. A blank id reloads the whole collection; a
    /// 404 empties the set behind the not-found notice; any other failure
    /// leaves the displayed set untouched.
    pub async fn search_by_id(&mut self, id: &str) {
        let id = id.trim();
        if id.is_empty() {
            self.load_all().await;
            return;
        }

        match self.api.fetch_one::<E>(E::PATH, id).await {
            Ok(record) => {
                self.rows = vec![record];
            }
            Err(ApiError::NotFound) => {
                self.interaction.alert(E::LIST_TEXT.not_found);
                self.rows.clear();
            }
            Err(err) => {
                warn!(entity = E::PATH, %err, "search failed");
                self.interaction.alert(E::LIST_TEXT.search_error);
            }
        }
    }

    /// Delete after interactive confirmation, then re-fetch. The row is
    /// never removed before the server confirms.
    pub async fn delete(&mut self, id: &str) {
        if !self.interaction.confirm(E::LIST_TEXT.delete_confirm) {
            return;
        }

        match self.api.delete(E::PATH, id).await {
            Ok(()) => {
                info!(entity = E::PATH, id, "record deleted");
                self.interaction.alert(E::LIST_TEXT.deleted);
                self.load_all().await;
            }
            Err(err) => {
                let detail = err.mensaje().unwrap_or("Falló");
                self.interaction.alert(&format!("Error al eliminar: {detail}"));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConsoleConfig;
    use crate::interaction::ScriptedInteraction;
    use crate::models::Producto;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn producto_json(id: &str, nombre: &str) -> serde_json::Value {
        json!({
            "id": id,
            "nombre": nombre,
            "unidadMedida": "Kilo",
            "precioReferencia": 3.5,
            "stockActual": 50,
            "estado": true
        })
    }

    fn controller(server: &MockServer) -> (ListController<Producto>, Arc<ScriptedInteraction>) {
        let interaction = Arc::new(ScriptedInteraction::new());
        let api = ApiClient::new(&ConsoleConfig::new(&server.uri()));
        (ListController::new(api, interaction.clone()), interaction)
    }

    async fn mount_collection(server: &MockServer, rows: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/Producto"))
            .respond_with(ResponseTemplate::new(200).set_body_json(rows))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn load_all_replaces_displayed_set() {
        let server = MockServer::start().await;
        mount_collection(&server, json!([producto_json("p-1", "Papa")])).await;

        let (mut list, interaction) = controller(&server);
        list.load_all().await;

        assert_eq!(list.rows().len(), 1);
        assert_eq!(list.rows()[0].nombre, "Papa");
        assert!(interaction.alerts().is_empty());
    }

    #[tokio::test]
    async fn load_all_failure_empties_set_and_alerts() {
        let server = MockServer::start().await;
        mount_collection(&server, json!([producto_json("p-1", "Papa")])).await;

        let (mut list, interaction) = controller(&server);
        list.load_all().await;
        assert_eq!(list.rows().len(), 1);

        server.reset().await;
        Mock::given(method("GET"))
            .and(path("/Producto"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        list.load_all().await;
        assert!(list.rows().is_empty());
        assert_eq!(
            interaction.last_alert().as_deref(),
            Some("No se pudieron cargar los productos.")
        );
    }

    #[tokio::test]
    async fn search_blank_id_is_load_all() {
        let server = MockServer::start().await;
        mount_collection(
            &server,
            json!([producto_json("p-1", "Papa"), producto_json("p-2", "Arroz")]),
        )
        .await;

        let (mut list, _interaction) = controller(&server);
        list.search_by_id("   ").await;

        assert_eq!(list.rows().len(), 2);
    }

    #[tokio::test]
    async fn search_replaces_set_with_single_match() {
        let server = MockServer::start().await;
        let id = uuid::Uuid::new_v4().to_string();
        Mock::given(method("GET"))
            .and(path(format!("/Producto/{id}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(producto_json(&id, "Arroz")))
            .mount(&server)
            .await;

        let (mut list, _interaction) = controller(&server);
        list.search_by_id(&format!(" {id} ")).await;

        assert_eq!(list.rows().len(), 1);
        assert_eq!(list.rows()[0].id, id);
    }

    #[tokio::test]
    async fn search_not_found_empties_set_and_notices() {
        let server = MockServer::start().await;
        mount_collection(&server, json!([producto_json("p-1", "Papa")])).await;
        Mock::given(method("GET"))
            .and(path("/Producto/p-404"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let (mut list, interaction) = controller(&server);
        list.load_all().await;
        list.search_by_id("p-404").await;

        assert!(list.rows().is_empty());
        assert_eq!(
            interaction.last_alert().as_deref(),
            Some("Producto no encontrado.")
        );
    }

    #[tokio::test]
    async fn search_other_failure_keeps_prior_set() {
        let server = MockServer::start().await;
        mount_collection(&server, json!([producto_json("p-1", "Papa")])).await;
        Mock::given(method("GET"))
            .and(path("/Producto/p-1"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let (mut list, interaction) = controller(&server);
        list.load_all().await;
        list.search_by_id("p-1").await;

        assert_eq!(list.rows().len(), 1);
        assert_eq!(
            interaction.last_alert().as_deref(),
            Some("Error al buscar producto.")
        );
    }

    #[tokio::test]
    async fn delete_declined_sends_nothing() {
        let server = MockServer::start().await;
        mount_collection(&server, json!([producto_json("p-1", "Papa")])).await;
        Mock::given(method("DELETE"))
            .and(path("/Producto/p-1"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let (mut list, interaction) = controller(&server);
        list.load_all().await;
        interaction.push_confirm(false);
        list.delete("p-1").await;

        assert_eq!(list.rows().len(), 1);
    }

    #[tokio::test]
    async fn delete_confirmed_refetches_after_server_ack() {
        let server = MockServer::start().await;
        mount_collection(&server, json!([producto_json("p-1", "Papa")])).await;
        Mock::given(method("DELETE"))
            .and(path("/Producto/p-1"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let (mut list, interaction) = controller(&server);
        interaction.push_confirm(true);
        list.delete("p-1").await;

        // Re-fetch happened; the mock still serves the full collection.
        assert_eq!(list.rows().len(), 1);
        assert!(interaction
            .alerts()
            .contains(&"Producto eliminado.".to_string()));
    }

    #[tokio::test]
    async fn delete_failure_keeps_rows_and_surfaces_mensaje() {
        let server = MockServer::start().await;
        mount_collection(&server, json!([producto_json("p-1", "Papa")])).await;
        Mock::given(method("DELETE"))
            .and(path("/Producto/p-1"))
            .respond_with(
                ResponseTemplate::new(409)
                    .set_body_json(json!({ "mensaje": "Producto con stock activo" })),
            )
            .mount(&server)
            .await;

        let (mut list, interaction) = controller(&server);
        list.load_all().await;
        interaction.push_confirm(true);
        list.delete("p-1").await;

        assert_eq!(list.rows().len(), 1);
        assert_eq!(
            interaction.last_alert().as_deref(),
            Some("Error al eliminar: Producto con stock activo")
        );
    }
}

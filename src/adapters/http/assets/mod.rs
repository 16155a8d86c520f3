//! HTTP adapter for the static asset catalog.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::domain::emotion::AssetCatalog;

/// GET /api/assets - Every audio asset the client should preload
pub async fn list_assets(State(catalog): State<Arc<AssetCatalog>>) -> Json<AssetCatalog> {
    Json(catalog.as_ref().clone())
}

/// Creates the asset catalog router.
pub fn assets_routes(catalog: Arc<AssetCatalog>) -> Router {
    Router::new()
        .route("/assets", get(list_assets))
        .with_state(catalog)
}

//! Name search handler

use axum::{
    extract::{Query, State},
    response::Json,
};
use std::sync::Arc;

use crate::api::server::RegistryServer;
use crate::api::types::{SearchQuery, UserView};

/// Filter the user list by a name fragment, rendered as the list view model.
///
/// An absent, empty, or whitespace-only fragment yields an empty result set,
/// not the full list. Matching is a case-insensitive substring test.
pub async fn search_users(
    State(state): State<Arc<RegistryServer>>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<UserView>> {
    let fragment = query.name.unwrap_or_default();
    if fragment.trim().is_empty() {
        return Json(Vec::new());
    }

    let results = state
        .store
        .list()
        .await
        .into_iter()
        .filter(|u| u.name_contains(&fragment))
        .map(UserView::from)
        .collect();
    Json(results)
}

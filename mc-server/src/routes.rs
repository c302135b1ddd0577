use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use mc::basic_models::{RecipeDraft, RecipeQuery, ValidationError};

use crate::errors::{WebError, WebResult};
use crate::store::MemStore;

#[derive(Clone)]
pub struct AllStates {
    pub store: MemStore,
}

/// Build the application router around a store handle.
pub fn app(store: MemStore) -> Router {
    Router::new()
        // `GET /health` goes to `health`
        .route("/health", get(health))
        // `GET /api/recipes` lists, `POST /api/recipes` creates
        .route("/api/recipes", get(list_recipes).post(create_recipe))
        // `GET /api/recipes/:id` fetches one, `DELETE /api/recipes/:id` removes it
        .route("/api/recipes/:id", get(get_recipe).delete(delete_recipe))
        .layer(
            tower_http::compression::CompressionLayer::new()
                .quality(tower_http::CompressionLevel::Fastest),
        )
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(AllStates { store })
}

// Just reply that everything is okay
async fn health() -> StatusCode {
    StatusCode::OK
}

async fn list_recipes(
    State(allstates): State<AllStates>,
    Query(query): Query<RecipeQuery>,
) -> WebResult<impl IntoResponse> {
    Ok(Json(allstates.store.list_recipes(&query).await))
}

async fn get_recipe(
    State(allstates): State<AllStates>,
    Path(id): Path<String>,
) -> WebResult<impl IntoResponse> {
    let recipe = allstates
        .store
        .get_recipe(&id)
        .await
        .ok_or(WebError::NotFound)?;
    Ok(Json(recipe))
}

async fn create_recipe(
    State(allstates): State<AllStates>,
    draft: Result<Json<RecipeDraft>, JsonRejection>,
) -> WebResult<impl IntoResponse> {
    // A body that does not deserialize into the recipe shape is the same
    // kind of failure as a draft that fails the field checks
    let Json(draft) = draft.map_err(|e| ValidationError::single("body", e.body_text()))?;
    let recipe = allstates.store.create_recipe(draft).await?;
    Ok((StatusCode::CREATED, Json(recipe)))
}

async fn delete_recipe(State(allstates): State<AllStates>, Path(id): Path<String>) -> StatusCode {
    allstates.store.delete_recipe(&id).await;
    StatusCode::NO_CONTENT
}

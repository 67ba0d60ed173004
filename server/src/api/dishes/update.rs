use crate::api::ErrorResponse;
use crate::{write_repo, AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rasoi_core::{DishPatch, DishRecord, RepoError};

#[utoipa::path(
    put,
    path = "/api/dishes/{name}",
    tag = "dishes",
    params(
        ("name" = String, Path, description = "Dish name; matched case- and trim-insensitively")
    ),
    request_body = DishPatch,
    responses(
        (status = 200, description = "Dish updated successfully", body = DishRecord),
        (status = 404, description = "Dish not found", body = ErrorResponse)
    )
)]
pub async fn update_dish(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(patch): Json<DishPatch>,
) -> impl IntoResponse {
    let mut repo = write_repo!(state);
    match repo.update(&name, patch) {
        Ok(dish) => (StatusCode::OK, Json(dish)).into_response(),
        Err(RepoError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Dish not found".to_string(),
            }),
        )
            .into_response(),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Internal Server Error".to_string(),
            }),
        )
            .into_response(),
    }
}

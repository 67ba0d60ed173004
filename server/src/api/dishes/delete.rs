use crate::api::ErrorResponse;
use crate::{write_repo, AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeleteDishResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/api/dishes/{name}",
    tag = "dishes",
    params(
        ("name" = String, Path, description = "Dish name; matched case- and trim-insensitively")
    ),
    responses(
        (status = 200, description = "Dish deleted", body = DeleteDishResponse),
        (status = 404, description = "Dish not found", body = ErrorResponse)
    )
)]
pub async fn delete_dish(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    let mut repo = write_repo!(state);
    if repo.delete(&name) {
        (
            StatusCode::OK,
            Json(DeleteDishResponse {
                message: "Dish deleted successfully".to_string(),
            }),
        )
            .into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Dish not found".to_string(),
            }),
        )
            .into_response()
    }
}

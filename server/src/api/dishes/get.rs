use crate::api::ErrorResponse;
use crate::{read_repo, AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rasoi_core::DishRecord;

#[utoipa::path(
    get,
    path = "/api/dishes/{name}",
    tag = "dishes",
    params(
        ("name" = String, Path, description = "Dish name; matched case- and trim-insensitively")
    ),
    responses(
        (status = 200, description = "Dish details", body = DishRecord),
        (status = 404, description = "Dish not found", body = ErrorResponse)
    )
)]
pub async fn get_dish(State(state): State<AppState>, Path(name): Path<String>) -> impl IntoResponse {
    let repo = read_repo!(state);
    match repo.find_by_name(&name) {
        Some(dish) => (StatusCode::OK, Json(dish.clone())).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Dish not found".to_string(),
            }),
        )
            .into_response(),
    }
}

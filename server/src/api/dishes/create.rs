use crate::api::ErrorResponse;
use crate::{write_repo, AppState};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use rasoi_core::{DishRecord, NewDish, RepoError};

#[utoipa::path(
    post,
    path = "/api/dishes",
    tag = "dishes",
    request_body = NewDish,
    responses(
        (status = 201, description = "Dish created successfully", body = DishRecord),
        (status = 400, description = "Dish name is required", body = ErrorResponse),
        (status = 409, description = "Dish already exists", body = ErrorResponse)
    )
)]
pub async fn create_dish(
    State(state): State<AppState>,
    Json(request): Json<NewDish>,
) -> impl IntoResponse {
    let mut repo = write_repo!(state);
    match repo.create(request) {
        Ok(dish) => (StatusCode::CREATED, Json(dish)).into_response(),
        Err(err @ RepoError::MissingName) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: err.to_string(),
            }),
        )
            .into_response(),
        Err(err @ RepoError::DuplicateName) => (
            StatusCode::CONFLICT,
            Json(ErrorResponse {
                error: err.to_string(),
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

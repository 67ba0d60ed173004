use crate::api::ErrorResponse;
use crate::{read_repo, AppState};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use rasoi_core::{suggest, DishRecord};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SuggestRequest {
    /// Ingredient names on hand; matching is exact-token, case-insensitive
    pub ingredients: Vec<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SuggestResponse {
    /// Dishes whose full ingredient list is covered by the request
    #[serde(rename = "possibleDishes")]
    pub possible_dishes: Vec<DishRecord>,
}

/// Accepts the body only when `ingredients` is a non-empty array of strings.
/// The handler takes a raw JSON value so that a missing key, a wrong type,
/// and an empty array all produce the same 400 body rather than a
/// deserializer rejection.
fn parse_ingredients(body: &Value) -> Option<Vec<String>> {
    let items = body.get("ingredients")?.as_array()?;
    if items.is_empty() {
        return None;
    }
    items
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect()
}

#[utoipa::path(
    post,
    path = "/api/dishes/suggest",
    tag = "dishes",
    request_body = SuggestRequest,
    responses(
        (status = 200, description = "Dishes fully makeable from the given ingredients", body = SuggestResponse),
        (status = 400, description = "Missing or invalid ingredients array", body = ErrorResponse)
    )
)]
pub async fn suggest_dishes(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let Some(ingredients) = parse_ingredients(&body) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Missing or invalid \"ingredients\" array".to_string(),
            }),
        )
            .into_response();
    };

    let repo = read_repo!(state);
    let dishes = repo.list_all();
    let possible_dishes = suggest(&ingredients, &dishes);

    (
        StatusCode::OK,
        Json(SuggestResponse { possible_dishes }),
    )
        .into_response()
}

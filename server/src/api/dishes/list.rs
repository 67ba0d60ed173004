use crate::api::ErrorResponse;
use crate::{read_repo, AppState};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rasoi_core::{run_query, ListParams, PageResult};

#[utoipa::path(
    get,
    path = "/api/dishes",
    tag = "dishes",
    params(ListParams),
    responses(
        (status = 200, description = "Filtered, sorted, paginated dishes", body = PageResult),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
pub async fn list_dishes(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> impl IntoResponse {
    let query = params.resolve();
    let repo = read_repo!(state);
    let result = run_query(repo.list_all(), &query);
    (StatusCode::OK, Json(result)).into_response()
}

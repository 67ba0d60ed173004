pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod suggest;
pub mod update;

use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/dishes endpoints (mounted at /api/dishes)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_dishes).post(create::create_dish))
        .route("/suggest", post(suggest::suggest_dishes))
        .route(
            "/{name}",
            get(get::get_dish)
                .put(update::update_dish)
                .delete(delete::delete_dish),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_dishes,
        get::get_dish,
        suggest::suggest_dishes,
        create::create_dish,
        update::update_dish,
        delete::delete_dish,
    ),
    components(schemas(
        rasoi_core::DishRecord,
        rasoi_core::NewDish,
        rasoi_core::DishPatch,
        rasoi_core::PageResult,
        suggest::SuggestRequest,
        suggest::SuggestResponse,
        delete::DeleteDishResponse,
    ))
)]
pub struct ApiDoc;

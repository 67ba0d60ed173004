mod api;

use std::env;
use std::path::Path;
use std::sync::{Arc, RwLock};

use axum::extract::MatchedPath;
use axum::http::{Request, StatusCode};
use axum::response::IntoResponse;
use axum::{Json, Router};
use rasoi_core::{load_dishes, DishRepository};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use utoipa_swagger_ui::SwaggerUi;

use api::ErrorResponse;

/// Application state shared across all handlers: the dish repository behind
/// a reader-writer lock so no two mutations interleave on the multi-threaded
/// runtime.
pub type AppState = Arc<RwLock<DishRepository>>;

/// Takes the repository read lock, returning a 500 response if the lock is
/// poisoned.
#[macro_export]
macro_rules! read_repo {
    ($state:expr) => {
        match $state.read() {
            Ok(repo) => repo,
            Err(_) => {
                return (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    axum::Json($crate::api::ErrorResponse {
                        error: "Internal Server Error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    };
}

/// Write-lock variant of [`read_repo!`].
#[macro_export]
macro_rules! write_repo {
    ($state:expr) => {
        match $state.write() {
            Ok(repo) => repo,
            Err(_) => {
                return (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    axum::Json($crate::api::ErrorResponse {
                        error: "Internal Server Error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    };
}

/// Router fallback for any unmatched method/path pair.
async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not Found".to_string(),
        }),
    )
}

/// Last-resort handler: a panicking request becomes a 500 instead of a
/// dropped connection.
fn handle_panic(_err: Box<dyn std::any::Any + Send + 'static>) -> axum::response::Response {
    tracing::error!("request handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "Something went wrong".to_string(),
        }),
    )
        .into_response()
}

fn init_telemetry() {
    let fmt_layer = tracing_subscriber::fmt::layer();
    let env_filter = tracing_subscriber::EnvFilter::from_default_env();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

#[tokio::main]
async fn main() {
    // Check for --openapi flag to dump spec and exit
    if env::args().any(|arg| arg == "--openapi") {
        let spec = api::openapi().to_pretty_json().unwrap();
        println!("{}", spec);
        return;
    }

    init_telemetry();

    // Ingestion finishes before the listener binds, so requests never observe
    // a partially-loaded catalog. A missing file logs an error and leaves the
    // catalog empty; it does not abort startup.
    let csv_path = env::var("DISHES_CSV").unwrap_or_else(|_| "data/indian_food.csv".to_string());
    let dishes = load_dishes(Path::new(&csv_path));
    let state: AppState = Arc::new(RwLock::new(DishRepository::from_records(dishes)));

    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api::openapi());

    let app = Router::new()
        .nest("/api/dishes", api::dishes::router())
        .merge(swagger_ui)
        .fallback(not_found)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let matched_path = request
                        .extensions()
                        .get::<MatchedPath>()
                        .map(MatchedPath::as_str)
                        .unwrap_or(request.uri().path());

                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %matched_path,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     _span: &Span| {
                        let status = response.status().as_u16();
                        if status >= 500 {
                            tracing::error!(
                                status = %status,
                                latency_ms = %latency.as_millis(),
                                "request failed with server error"
                            );
                        } else {
                            tracing::info!(
                                status = %status,
                                latency_ms = %latency.as_millis(),
                                "request completed"
                            );
                        }
                    },
                ),
        );

    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("Failed to bind listener");

    tracing::info!("Server listening on {}", listener.local_addr().unwrap());
    tracing::info!(
        "Swagger UI available at http://localhost:{}/swagger-ui/",
        port
    );

    axum::serve(listener, app).await.unwrap();
}

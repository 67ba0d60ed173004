pub mod dishes;

use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

/// Shared error response used by all endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Generate the complete OpenAPI spec by merging all module specs
pub fn openapi() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(components(schemas(ErrorResponse)))]
    struct BaseApi;

    let mut spec = BaseApi::openapi();

    let module_spec = dishes::ApiDoc::openapi();
    spec.paths.paths.extend(module_spec.paths.paths);
    if let Some(module_components) = module_spec.components {
        if let Some(spec_components) = spec.components.as_mut() {
            spec_components.schemas.extend(module_components.schemas);
        }
    }

    spec
}

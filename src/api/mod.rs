// API layer - HTTP endpoints
pub mod health;
pub mod items;

use std::sync::Arc;

pub use health::HealthApi;
pub use items::ItemsApi;

use poem::error::{MethodNotAllowedError, NotFoundError};
use poem::middleware::{Cors, Tracing};
use poem::{Endpoint, EndpointExt, IntoResponse, Response, Route};
use poem_openapi::error::{ContentTypeError, ParseParamError, ParseRequestPayloadError};
use poem_openapi::payload::Json;
use poem_openapi::OpenApiService;

use crate::errors::ItemsApiError;
use crate::services::InventoryService;
use crate::types::dto::common::ErrorResponse;

/// Compose the HTTP application
///
/// Item endpoints are served from the root (`/add`, `/search`, ...), with the
/// Swagger UI under `/swagger` and the OpenAPI document at `/openapi.json`.
/// Cross-origin requests are accepted from any origin.
pub fn build_app(inventory: Arc<InventoryService>, public_url: &str) -> impl Endpoint {
    let api_service = OpenApiService::new(
        (HealthApi, ItemsApi::new(inventory)),
        "Inventory API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(public_url);

    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();

    Route::new()
        .nest("/swagger", ui)
        .at("/openapi.json", spec)
        .nest("/", api_service)
        .catch_all_error(render_error)
        .with(Cors::new())
        .with(Tracing)
}

/// Render framework-level errors as JSON
///
/// Bodies that fail to parse, unsupported or missing content types and bad
/// query parameters become 400 `{error, status_code}`, the same shape as
/// validation failures. Responses produced by the handlers pass through.
async fn render_error(err: poem::Error) -> Response {
    if err.is::<ParseRequestPayloadError>()
        || err.is::<ContentTypeError>()
        || err.is::<ParseParamError>()
    {
        tracing::debug!("Rejected unparsable request: {}", err);
        return ItemsApiError::bad_request(err.to_string()).into_response();
    }

    if err.is::<NotFoundError>() || err.is::<MethodNotAllowedError>() {
        let status = err.status();
        return Json(ErrorResponse {
            error: err.to_string(),
            status_code: status.as_u16(),
        })
        .with_status(status)
        .into_response();
    }

    err.into_response()
}

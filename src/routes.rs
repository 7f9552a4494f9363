use axum::{Router, extract::Request, routing::get};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{app_state::AppState, health::health_check, movies::handlers::get_movie, openapi::ApiDoc};

/// Builds the HTTP router.
///
/// - `GET /movie/amazon/{amazon_id}` - look up a movie
/// - `GET /healthz` - liveness
/// - `GET /api-docs/openapi.json`, `GET /swagger-ui` - API documentation
pub fn router(state: AppState) -> Router {
    let http_layers = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id
                )
            }),
        )
        .layer(PropagateRequestIdLayer::x_request_id());

    Router::new()
        .route("/movie/amazon/{amazon_id}", get(get_movie))
        .route("/healthz", get(health_check))
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(http_layers)
}

use axum::{
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::{metrics, types::Health};

use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod customers;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn metrics_handler() -> (StatusCode, String) {
    metrics::encode_metrics()
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Permissive CORS unless configured otherwise.
pub fn build_cors(cfg: &configs::CorsConfig) -> CorsLayer {
    if cfg.allow_any_origin {
        CorsLayer::very_permissive()
    } else {
        CorsLayer::new()
    }
}

/// Build the full application router: customer endpoints plus health, metrics and docs.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics_handler))
        .route("/api-docs/openapi.json", get(openapi_json));

    // Both path styles seen in clients are served.
    let customer_routes = Router::new()
        .route("/customers", get(customers::list))
        .route("/customer/getall", get(customers::list))
        .route("/customer/add", post(customers::create))
        .route("/customer/update", put(customers::update_by_body))
        .route("/customer/update/:id", put(customers::update))
        .route("/customer/delete/:id", delete(customers::delete))
        .route("/customer/:id", get(customers::get));

    public
        .merge(customer_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx are logged at ERROR
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

//! API router.
//!
//! Returns a composable `Router` that can be mounted on any axum
//! server. Routes are nested under `/api/` and share one middleware
//! stack: rate limiter outermost, then the handlers. Responses carry
//! `Cache-Control: no-store` — everything here is fabricated per
//! request, so caching would only confuse demo clients.

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;
use crate::core_state::CoreState;

/// Build the API router.
pub fn api_router(core: Arc<CoreState>) -> Router {
    build_router(ApiContext::new(core))
}

fn build_router(ctx: ApiContext) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let routes = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/auth/login", post(endpoints::auth::login))
        .route("/auth/register", post(endpoints::auth::register))
        .route("/auth/session", get(endpoints::auth::session))
        .route("/auth/logout", post(endpoints::auth::logout))
        .route("/chat", post(endpoints::chat::send))
        .route("/chat/suggestions", get(endpoints::chat::suggestions))
        .route("/eligibility", post(endpoints::eligibility::assess))
        .route("/match", post(endpoints::matching::search))
        .route("/forecast", get(endpoints::forecast::get))
        .route("/stats", get(endpoints::stats::network))
        .route("/shortage", get(endpoints::stats::shortage))
        .route("/heatmap", get(endpoints::stats::heatmap))
        .route("/donors/:id", get(endpoints::donors::detail))
        .route("/hospitals/:id", get(endpoints::hospitals::detail))
        .route(
            "/emergency",
            get(endpoints::emergency::current).post(endpoints::emergency::create),
        )
        .route("/emergency/resolve", post(endpoints::emergency::resolve))
        .route("/emergency/reset", post(endpoints::emergency::reset))
        .with_state(ctx.clone())
        // Middleware stack (innermost first, outermost last):
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(axum::middleware::from_fn(middleware::rate::limit))
        .layer(cors)
        // Extension must be outermost so middleware can extract ApiContext
        .layer(axum::Extension(ctx));

    Router::new().nest("/api", routes)
}

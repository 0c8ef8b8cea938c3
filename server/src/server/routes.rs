//! Router configuration for the workshop backend.
//!
//! Builds the complete Axum router: public API, admin-gated API, health
//! check, CORS, request tracing, and (when configured) the built frontend's
//! static assets with SPA fallback routing.

use super::health::health_check;
use super::state::AppState;
use crate::api::{admin, attendees, sessions, speakers};
use crate::auth::handlers as auth_handlers;
use crate::config::Config;
use crate::providers::Repository;
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{delete, get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use workshop_web::AppError;

/// Build the complete Axum router.
///
/// # Routes
///
/// Public:
/// - `POST /api/attendees`, `GET /api/attendees/count`
/// - `GET /api/speakers`, `GET /api/sessions`
/// - `POST /api/admin/login`, `POST /api/admin/logout`
/// - `GET /health`
///
/// Admin-gated (signed session cookie):
/// - `GET /api/admin/stats`
/// - `GET /api/attendees`, `DELETE /api/attendees/:id`
/// - `POST/PUT/DELETE /api/speakers[/:id]`
/// - `POST/PUT/DELETE /api/sessions[/:id]`
///
/// Unknown `/api/*` paths return a JSON 404; with a static directory
/// configured, every other unmatched path serves the SPA's `index.html`.
pub fn build_router<R>(state: AppState<R>, config: &Config) -> Router
where
    R: Repository + Clone + Send + Sync + 'static,
{
    let api_routes = Router::new()
        // Attendee routes (registration is public, management is gated)
        .route(
            "/attendees",
            post(attendees::register::<R>).get(attendees::list::<R>),
        )
        .route("/attendees/count", get(attendees::count::<R>))
        .route("/attendees/:id", delete(attendees::remove::<R>))
        // Speaker routes
        .route(
            "/speakers",
            get(speakers::list::<R>).post(speakers::create::<R>),
        )
        .route(
            "/speakers/:id",
            put(speakers::update::<R>).delete(speakers::remove::<R>),
        )
        // Session routes
        .route(
            "/sessions",
            get(sessions::list::<R>).post(sessions::create::<R>),
        )
        .route(
            "/sessions/:id",
            put(sessions::update::<R>).delete(sessions::remove::<R>),
        )
        // Admin auth and dashboard
        .route("/admin/login", post(auth_handlers::login::<R>))
        .route("/admin/logout", post(auth_handlers::logout))
        .route("/admin/stats", get(admin::stats::<R>))
        // Unknown API paths stay JSON even when the SPA fallback is active
        .fallback(api_not_found);

    let mut app = Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes);

    // Serve the built frontend when configured (production deployments)
    if let Some(static_dir) = &config.server.static_dir {
        app = app
            .nest_service("/assets", ServeDir::new(format!("{static_dir}/assets")))
            .fallback_service(ServeFile::new(format!("{static_dir}/index.html")));
    }

    app.layer(cors_layer(&config.cors.frontend_url))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS layer allowing the configured frontend origin with credentials.
fn cors_layer(frontend_url: &str) -> CorsLayer {
    let origin = frontend_url
        .parse::<HeaderValue>()
        .unwrap_or_else(|_| HeaderValue::from_static("http://localhost:5173"));

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}

/// JSON 404 for unmatched API paths.
async fn api_not_found() -> AppError {
    AppError::not_found("Not found")
}

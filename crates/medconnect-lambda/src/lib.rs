//! medconnect-lambda
//!
//! HTTP host for the MedConnect screens. Each request activates one screen
//! against the shared store and answers with its view as JSON.

use axum::Router;
use axum::http::Uri;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use error::ApiError;
use state::AppState;

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Directory
        .route("/doctors", get(routes::directory::list_doctors))
        // Profile
        .route("/doctor", get(routes::profile::get_profile))
        .route("/doctor/book", post(routes::profile::book_from_profile))
        // Appointment form
        .route(
            "/appointment",
            get(routes::appointment::get_form).post(routes::appointment::submit),
        )
        .route(
            "/appointment/validate",
            post(routes::appointment::validate_field),
        )
        // Admin panel
        .route("/admin/login", post(routes::admin::login))
        .route("/admin/logout", post(routes::admin::logout))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(axum_mw::from_fn(middleware::request_log::request_log))
                .layer(cors),
        )
        .with_state(state)
}

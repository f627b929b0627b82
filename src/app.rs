use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/sw.js", get(handlers::service_worker))
        .route("/manifest.webmanifest", get(handlers::manifest))
        .route("/api/state", get(handlers::get_state))
        .route("/api/catalog", get(handlers::get_catalog))
        .route("/api/items/:id", post(handlers::toggle_item))
        .route("/api/reset", post(handlers::reset_today))
        .route("/api/applications", post(handlers::adjust_applications))
        .route("/api/theme", get(handlers::get_theme).post(handlers::set_theme))
        .route("/api/theme/toggle", post(handlers::toggle_theme))
        .route("/api/notifications/permission", post(handlers::request_notification_permission))
        .with_state(state)
}

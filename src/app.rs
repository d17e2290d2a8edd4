use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/session", get(handlers::get_session))
        .route("/api/auth/signup", post(handlers::signup))
        .route("/api/auth/login", post(handlers::login))
        .route("/api/auth/admin", post(handlers::admin_login))
        .route("/api/auth/logout", post(handlers::logout))
        .route("/api/home", get(handlers::get_home))
        .route("/api/moods", get(handlers::list_moods).post(handlers::record_mood))
        .route("/api/moods/catalog", get(handlers::mood_catalog))
        .route("/api/journal", get(handlers::get_journal).post(handlers::save_journal))
        .route("/api/settings", get(handlers::get_settings).put(handlers::put_settings))
        .route("/api/export/json", get(handlers::export_json))
        .route("/api/export/text", get(handlers::export_text))
        .route("/api/suggestions", get(handlers::get_suggestions))
        .route("/api/admin/dashboard", get(handlers::admin_dashboard))
        .with_state(state)
}

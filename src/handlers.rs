use crate::admin::{self, Dashboard};
use crate::auth::{self, Session};
use crate::errors::AppError;
use crate::export::{self, Download};
use crate::home;
use crate::journal::{self, RECENT_LIMIT};
use crate::models::{
    AdminLoginRequest, HomeSummary, JournalDraft, JournalEntry, JournalPage, LoginRequest,
    MoodDraft, MoodEntry, Settings, SettingsUpdate, SignupRequest,
};
use crate::mood::{self, MoodCatalog};
use crate::settings;
use crate::state::AppState;
use crate::suggestions::{TipCategory, SUGGESTIONS};
use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{Local, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub course: Option<String>,
}

pub async fn get_session(State(state): State<AppState>) -> Result<Json<Session>, AppError> {
    let store = state.store.lock().await;
    Ok(Json(Session::load(&store)?))
}

pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<Json<Session>, AppError> {
    let mut store = state.store.lock().await;
    if !auth::signup(&mut store, &payload.name, &payload.email, &payload.password)? {
        return Err(AppError::conflict("An account with this email already exists"));
    }
    state.persist(&store).await?;
    Ok(Json(Session::load(&store)?))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<Session>, AppError> {
    let mut store = state.store.lock().await;
    if !auth::login(&mut store, &payload.email, &payload.password)? {
        return Err(AppError::unauthorized("Invalid email or password"));
    }
    state.persist(&store).await?;
    Ok(Json(Session::load(&store)?))
}

pub async fn admin_login(
    State(state): State<AppState>,
    Json(payload): Json<AdminLoginRequest>,
) -> Result<Json<Session>, AppError> {
    let mut store = state.store.lock().await;
    if !auth::admin_login(&mut store, &state.admin_password, &payload.password)? {
        return Err(AppError::unauthorized("Invalid admin password"));
    }
    state.persist(&store).await?;
    Ok(Json(Session::load(&store)?))
}

pub async fn logout(State(state): State<AppState>) -> Result<Json<Session>, AppError> {
    let mut store = state.store.lock().await;
    auth::logout(&mut store)?;
    state.persist(&store).await?;
    Ok(Json(Session::default()))
}

pub async fn get_home(State(state): State<AppState>) -> Result<Json<HomeSummary>, AppError> {
    let store = state.store.lock().await;
    let session = Session::load(&store)?;
    let entries = mood::list_entries(&store)?;
    Ok(Json(home::summary(&session, &entries)))
}

pub async fn mood_catalog() -> Json<MoodCatalog> {
    Json(mood::catalog())
}

pub async fn list_moods(State(state): State<AppState>) -> Result<Json<Vec<MoodEntry>>, AppError> {
    let store = state.store.lock().await;
    Ok(Json(mood::list_entries(&store)?))
}

pub async fn record_mood(
    State(state): State<AppState>,
    Json(draft): Json<MoodDraft>,
) -> Result<Json<MoodEntry>, AppError> {
    let mut store = state.store.lock().await;
    let session = Session::load(&store)?;
    let entry = mood::record_mood(&mut store, draft, session.user_id(), Utc::now())?;
    state.persist(&store).await?;
    Ok(Json(entry))
}

pub async fn get_journal(State(state): State<AppState>) -> Result<Json<JournalPage>, AppError> {
    let store = state.store.lock().await;
    Ok(Json(JournalPage {
        prompt: journal::random_prompt(),
        recent: journal::recent_entries(&store, RECENT_LIMIT)?,
    }))
}

pub async fn save_journal(
    State(state): State<AppState>,
    Json(draft): Json<JournalDraft>,
) -> Result<Json<JournalEntry>, AppError> {
    let mut store = state.store.lock().await;
    let entry = journal::save_entry(&mut store, draft, Utc::now())?;
    state.persist(&store).await?;
    Ok(Json(entry))
}

pub async fn get_settings(State(state): State<AppState>) -> Result<Json<Settings>, AppError> {
    let store = state.store.lock().await;
    Ok(Json(settings::load_settings(&store)?))
}

pub async fn put_settings(
    State(state): State<AppState>,
    Json(update): Json<SettingsUpdate>,
) -> Result<Json<Settings>, AppError> {
    let mut store = state.store.lock().await;
    let saved = settings::save_settings(&mut store, update, Utc::now())?;
    state.persist(&store).await?;
    Ok(Json(saved))
}

pub async fn export_json(State(state): State<AppState>) -> Result<Response, AppError> {
    let store = state.store.lock().await;
    Ok(attachment(export::json_download(&store, &Local::now())?))
}

pub async fn export_text(State(state): State<AppState>) -> Result<Response, AppError> {
    let store = state.store.lock().await;
    Ok(attachment(export::text_download(&store, &Local::now())?))
}

pub async fn get_suggestions() -> Json<&'static [TipCategory]> {
    Json(SUGGESTIONS.as_slice())
}

pub async fn admin_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<Dashboard>, AppError> {
    let store = state.store.lock().await;
    if !Session::load(&store)?.is_admin {
        return Err(AppError::forbidden("Admin access required"));
    }
    Ok(Json(admin::dashboard(&store, query.course.as_deref())?))
}

fn attachment(download: Download) -> Response {
    let disposition = format!("attachment; filename=\"{}\"", download.filename);
    (
        [
            (header::CONTENT_TYPE, download.content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        download.body,
    )
        .into_response()
}

use crate::catalog::Catalog;
use crate::errors::{AppError, StoreError};
use crate::models::{
    AdjustRequest, PermissionResponse, ProgressRecord, ProgressView, ThemeRequest, ThemeResponse,
    ToggleRequest,
};
use crate::notify::{notify_completion, request_permission};
use crate::progress::build_view;
use crate::state::AppState;
use crate::storage::KeyValueStore;
use crate::store::{today, CommitOutcome, DailyProgressStore};
use crate::theme::{load_theme, save_theme, Theme};
use crate::ui::{render_index, MANIFEST_JSON, SERVICE_WORKER_JS};
use axum::{
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use chrono::NaiveDate;

/// A page load re-reads storage, the same as a browser refresh would.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let mut record = state.record.lock().await;
    *record = state.store.load();
    let theme = load_theme(state.store.storage());
    Html(render_index(&view(&state, &record, false), theme))
}

pub async fn get_state(State(state): State<AppState>) -> Json<ProgressView> {
    let mut record = state.record.lock().await;
    state.store.roll_over(&mut record);
    Json(view(&state, &record, false))
}

pub async fn get_catalog(State(state): State<AppState>) -> Json<Catalog> {
    Json(state.store.catalog().clone())
}

pub async fn toggle_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<ProgressView>, AppError> {
    let (outcome, body) = {
        let mut record = state.record.lock().await;
        let outcome =
            toggle_and_commit_at(&*state.store, &mut record, id.trim(), payload.checked, today())?;
        (outcome, view(&state, &record, outcome.just_completed))
    };
    notify_completion(state.notifier.as_ref(), outcome.just_completed);

    Ok(Json(body))
}

pub async fn reset_today(State(state): State<AppState>) -> Json<ProgressView> {
    let mut record = state.record.lock().await;
    let today = today();
    state.store.roll_over_at(&mut record, today);
    state.store.reset_today_at(&mut record, today);
    Json(view(&state, &record, false))
}

pub async fn adjust_applications(
    State(state): State<AppState>,
    Json(payload): Json<AdjustRequest>,
) -> Json<ProgressView> {
    let mut record = state.record.lock().await;
    state.store.roll_over(&mut record);
    state.store.adjust_application_count(&mut record, payload.delta);
    Json(view(&state, &record, false))
}

pub async fn get_theme(State(state): State<AppState>) -> Json<ThemeResponse> {
    theme_response(load_theme(state.store.storage()))
}

pub async fn set_theme(
    State(state): State<AppState>,
    Json(payload): Json<ThemeRequest>,
) -> Result<Json<ThemeResponse>, AppError> {
    let theme = match payload.theme.trim() {
        "light" => Theme::Light,
        "dark" => Theme::Dark,
        _ => return Err(AppError::bad_request("theme must be 'light' or 'dark'")),
    };
    save_theme(state.store.storage(), theme);
    Ok(theme_response(theme))
}

pub async fn toggle_theme(State(state): State<AppState>) -> Json<ThemeResponse> {
    let next = load_theme(state.store.storage()).toggled();
    save_theme(state.store.storage(), next);
    theme_response(next)
}

pub async fn request_notification_permission(
    State(state): State<AppState>,
) -> Json<PermissionResponse> {
    let permission = request_permission(state.notifier.as_ref())
        .map(|permission| permission.as_str())
        .unwrap_or("unsupported");
    Json(PermissionResponse {
        permission: permission.to_string(),
    })
}

pub async fn service_worker() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        SERVICE_WORKER_JS,
    )
}

pub async fn manifest() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/manifest+json")],
        MANIFEST_JSON,
    )
}

fn view(state: &AppState, record: &ProgressRecord, just_completed: bool) -> ProgressView {
    build_view(&*state.store, record, just_completed)
}

/// The in-memory record may predate midnight, so it rolls over before the toggle lands.
fn toggle_and_commit_at<S: KeyValueStore>(
    store: &DailyProgressStore<S>,
    record: &mut ProgressRecord,
    id: &str,
    checked: bool,
    today: NaiveDate,
) -> Result<CommitOutcome, StoreError> {
    store.roll_over_at(record, today);
    store.toggle_item(record, id, checked)?;
    Ok(store.commit_at(record, today))
}

fn theme_response(theme: Theme) -> Json<ThemeResponse> {
    Json(ThemeResponse {
        theme: theme.as_str().to_string(),
    })
}

use crate::controller::CounterController;
use crate::counter::WidgetState;
use crate::errors::AppError;
use crate::feedback::CueQueue;
use crate::models::{LoopMaxRequest, SessionRequest, WidgetResponse, WidgetView};
use crate::state::{AppState, WidgetController};
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{extract::rejection::JsonRejection, extract::State, response::Html, Json};
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let controller = state.controller.lock().await;
    Html(render_index(&WidgetView::from(controller.state())))
}

/// Page load: rebuilds the controller from the stored preferences and what
/// the page reported about its environment.
pub async fn start_session(
    State(state): State<AppState>,
    payload: Result<Json<SessionRequest>, JsonRejection>,
) -> Result<Json<WidgetResponse>, AppError> {
    let Json(request) = payload.map_err(|err| AppError::bad_request(err.body_text()))?;
    let mut controller = state.controller.lock().await;
    let preferences = controller.store().clone();
    *controller = CounterController::initialize(
        preferences,
        CueQueue::new(request.capabilities()),
        request.system_prefers_dark,
    );
    info!(
        dark_mode = controller.state().dark_mode,
        sound_enabled = controller.state().sound_enabled,
        "session started"
    );
    Ok(Json(respond(&mut controller)))
}

/// Read-only view. Pending cues stay queued for the next operation.
pub async fn get_state(State(state): State<AppState>) -> Json<WidgetResponse> {
    let controller = state.controller.lock().await;
    Json(WidgetResponse {
        state: WidgetView::from(controller.state()),
        effects: Vec::new(),
    })
}

pub async fn increment(State(state): State<AppState>) -> Json<WidgetResponse> {
    let mut controller = state.controller.lock().await;
    controller.increment();
    Json(respond(&mut controller))
}

pub async fn reset(State(state): State<AppState>) -> Json<WidgetResponse> {
    let mut controller = state.controller.lock().await;
    controller.reset();
    Json(respond(&mut controller))
}

pub async fn toggle_dark_mode(
    State(state): State<AppState>,
) -> Result<Json<WidgetResponse>, AppError> {
    persist_toggle(&state, WidgetController::toggle_dark_mode).await
}

pub async fn toggle_loop(State(state): State<AppState>) -> Json<WidgetResponse> {
    let mut controller = state.controller.lock().await;
    controller.toggle_loop();
    Json(respond(&mut controller))
}

pub async fn set_loop_max(
    State(state): State<AppState>,
    payload: Result<Json<LoopMaxRequest>, JsonRejection>,
) -> Result<Json<WidgetResponse>, AppError> {
    let Json(request) = payload.map_err(|err| AppError::bad_request(err.body_text()))?;
    let mut controller = state.controller.lock().await;
    controller.set_loop_max(&request.value);
    Ok(Json(respond(&mut controller)))
}

pub async fn toggle_sound(State(state): State<AppState>) -> Result<Json<WidgetResponse>, AppError> {
    persist_toggle(&state, WidgetController::toggle_sound).await
}

/// Applies a preference toggle and mirrors the store to disk. If the write
/// fails the previous state and store come back and the toggle's cues are
/// dropped, so memory, disk and the page all keep the previous value.
async fn persist_toggle(
    state: &AppState,
    toggle: fn(&mut WidgetController) -> WidgetState,
) -> Result<Json<WidgetResponse>, AppError> {
    let mut controller = state.controller.lock().await;
    let previous_state = controller.state();
    let previous_store = controller.store().clone();
    toggle(&mut *controller);

    if let Err(err) = persist_data(&state.data_path, controller.store()).await {
        controller.restore(previous_state, previous_store);
        controller.feedback_mut().drain();
        return Err(err);
    }

    Ok(Json(respond(&mut controller)))
}

fn respond(controller: &mut WidgetController) -> WidgetResponse {
    WidgetResponse {
        state: WidgetView::from(controller.state()),
        effects: controller.feedback_mut().drain(),
    }
}

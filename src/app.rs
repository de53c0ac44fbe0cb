use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post, put}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/session", post(handlers::start_session))
        .route("/api/state", get(handlers::get_state))
        .route("/api/increment", post(handlers::increment))
        .route("/api/reset", post(handlers::reset))
        .route("/api/dark-mode/toggle", post(handlers::toggle_dark_mode))
        .route("/api/loop/toggle", post(handlers::toggle_loop))
        .route("/api/loop/max", put(handlers::set_loop_max))
        .route("/api/sound/toggle", post(handlers::toggle_sound))
        .with_state(state)
}

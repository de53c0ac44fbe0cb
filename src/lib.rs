pub mod app;
pub mod config;
pub mod controller;
pub mod counter;
pub mod errors;
pub mod feedback;
pub mod handlers;
pub mod models;
pub mod preferences;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use controller::CounterController;
pub use state::AppState;
pub use storage::{load_data, resolve_data_path};

pub mod app;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod notify;
pub mod progress;
pub mod storage;
pub mod store;
pub mod theme;
pub mod ui;
pub mod state;

pub use app::router;
pub use config::AppConfig;
pub use state::AppState;
pub use store::DailyProgressStore;

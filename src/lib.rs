pub mod admin;
pub mod app;
pub mod auth;
pub mod config;
pub mod errors;
pub mod export;
pub mod handlers;
pub mod home;
pub mod journal;
pub mod models;
pub mod mood;
pub mod settings;
pub mod state;
pub mod stats;
pub mod storage;
pub mod store;
pub mod suggestions;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::{load_store, persist_store};
pub use store::LocalStore;

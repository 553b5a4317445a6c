pub mod app;
pub mod config;
pub mod countdown;
pub mod error;
pub mod loader;
pub mod model;
pub mod session;
pub mod text;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
pub use config::QuizConfig;

//! UI layer for the desktop app: app shell and backend worker.

pub mod app;

pub use app::GameApp;

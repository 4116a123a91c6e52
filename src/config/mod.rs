//! Configuration module for Text Correct.
//!
//! Provides `AppConfig` (persisted settings), `ApiConfig` (backend
//! connection), `AppPaths` for cross-platform config directories, and the
//! `SharedConfig` handle used for per-call snapshots.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{new_shared_config, snapshot, ApiConfig, AppConfig, SharedConfig};

//! Transformation pipeline for Text Correct.
//!
//! This module provides:
//! * [`Transformer`] — async trait implemented by all backend clients.
//! * [`ApiTransformer`] — OpenAI-compatible REST API client.
//! * [`ServiceType`] — the three transformation services.
//! * [`PromptSpec`] / [`build_prompt`] — role/rule/example prompt tables.
//! * [`extract_json_field`] — fence-tolerant decoding of model output.
//! * [`TransformError`] — the closed failure taxonomy.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use text_correct::config::{new_shared_config, ApiConfig};
//! use text_correct::transform::{ApiTransformer, ServiceType, Transformer};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = new_shared_config(ApiConfig {
//!         api_key: "sk-...".into(),
//!         ..ApiConfig::default()
//!     });
//!     let client = Arc::new(ApiTransformer::new(config));
//!
//!     let corrected = client
//!         .transform("merhaba nasılsın iyimisin", ServiceType::Correction)
//!         .await
//!         .unwrap();
//!     println!("{}", corrected);
//! }
//! ```

pub mod client;
pub mod error;
pub mod extract;
pub mod prompt;
pub mod service;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use client::{ApiTransformer, Transformer};
pub use error::TransformError;
pub use extract::extract_json_field;
pub use prompt::{build_prompt, PromptSpec, OUTPUT_FIELD};
pub use service::ServiceType;

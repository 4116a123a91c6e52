//! Text Correct — LLM-backed Turkish text correction and translation.
//!
//! The library turns a unit of text plus a requested service (grammar and
//! punctuation correction, Turkish→English or English→Turkish translation)
//! into the transformed text by calling an OpenAI-compatible chat-completion
//! endpoint.
//!
//! # Layers
//!
//! * [`transform`] — prompt templates, the HTTP client, model-output
//!   extraction, and the error taxonomy.
//! * [`bridge`] — a blocking, deadline-bounded facade over the async client
//!   for synchronous callers (OS service hooks, CLI).
//! * [`config`] — persisted settings and the shared per-call snapshot.
//! * [`clipboard`] — thin OS clipboard glue.

pub mod bridge;
pub mod clipboard;
pub mod config;
pub mod transform;

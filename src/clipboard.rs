//! Clipboard read / write helpers backed by the `arboard` crate.
//!
//! Both functions create a short-lived [`arboard::Clipboard`] handle rather
//! than sharing one across calls, because `arboard::Clipboard` is not `Send`
//! on all platforms and the handle is cheap to create.

use arboard::Clipboard;
use thiserror::Error;

/// Errors from OS clipboard access.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// The OS clipboard could not be opened.
    #[error("cannot access clipboard: {0}")]
    Access(String),

    /// Writing to the clipboard failed.
    #[error("cannot write to clipboard: {0}")]
    Write(String),
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Read the current clipboard plain-text content.
///
/// Returns `Ok(None)` when the clipboard is empty or contains non-text data
/// (e.g. an image).  Never returns an error just because the clipboard is
/// empty.
///
/// # Errors
///
/// Returns [`ClipboardError::Access`] if the OS clipboard cannot be opened.
pub fn read_text() -> Result<Option<String>, ClipboardError> {
    let mut clipboard = open_clipboard()?;
    // `get_text` returns Err if empty or non-text — treat both as None
    Ok(clipboard.get_text().ok())
}

/// Write `text` into the system clipboard, replacing whatever was there.
///
/// # Errors
///
/// Returns [`ClipboardError::Access`] if the clipboard cannot be opened, or
/// [`ClipboardError::Write`] if writing fails.
pub fn write_text(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = open_clipboard()?;
    clipboard
        .set_text(text)
        .map_err(|e| ClipboardError::Write(e.to_string()))
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn open_clipboard() -> Result<Clipboard, ClipboardError> {
    Clipboard::new().map_err(|e| ClipboardError::Access(e.to_string()))
}

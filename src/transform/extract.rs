//! Decoding of model output into the single expected JSON field.
//!
//! Models frequently wrap the requested JSON object in explanatory text or a
//! markdown code fence.  Extraction is deliberately a single linear pass —
//! trim, strip one fence pair, parse — with no recursive repair or regex
//! scraping, so failures are deterministic and easy to diagnose.

use serde_json::Value;

use crate::transform::TransformError;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Extract the string value at `field` from a model completion.
///
/// Steps:
/// 1. Trim surrounding whitespace.
/// 2. If the text starts with ```` ``` ````, strip the leading fence line
///    (optionally tagged `json`) and a trailing fence, then trim again.
/// 3. Parse the remainder as a JSON object and take the string at `field`.
///
/// An empty extracted string is a valid result; only structural failure is an
/// error.  Unknown extra fields in the object are ignored.
///
/// # Errors
///
/// Returns [`TransformError::MalformedJson`] when the stripped text is not a
/// JSON object, the field is absent, or its value is not a string.
pub fn extract_json_field(raw: &str, field: &str) -> Result<String, TransformError> {
    let stripped = strip_code_fence(raw.trim());

    let value: Value = serde_json::from_str(stripped)
        .map_err(|e| TransformError::MalformedJson(e.to_string()))?;

    match value.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(TransformError::MalformedJson(format!(
            "field `{field}` is not a string"
        ))),
        None => Err(TransformError::MalformedJson(format!(
            "missing field `{field}`"
        ))),
    }
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Strip one leading and one trailing markdown code fence, if present.
///
/// Accepts both ```` ``` ```` and ```` ```json ```` opening fences.  Text
/// without a leading fence is returned unchanged; a leading fence with no
/// closing fence still has the opener removed.
fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };

    // Drop an optional language tag up to the first newline.
    let body = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest.strip_prefix("json").unwrap_or(rest),
    };

    body.trim_end()
        .strip_suffix("```")
        .unwrap_or(body)
        .trim()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

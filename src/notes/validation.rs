//! Checks and normalises inbound note payloads before they reach storage.

use serde_json::Value;

use super::model::NoteInput;

pub const TITLE_MAX_CHARS: usize = 120;
pub const CONTENT_MAX_CHARS: usize = 5000;

/// Whitespace as browsers trim it: Unicode `White_Space` plus the BOM.
fn trim_js(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Length in UTF-16 code units, the unit browser `maxlength` counts in.
fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Validates an untyped request body.
///
/// Fields are trimmed before their length is checked. The error carries the
/// first violated constraint, checked in order: title presence, title
/// length, content length.
pub fn parse_note_input(payload: &Value) -> Result<NoteInput, String> {
    let Some(fields) = payload.as_object() else {
        return Err("Invalid input".to_string());
    };

    let title = match fields.get("title") {
        None | Some(Value::Null) => return Err("Title is required".to_string()),
        Some(Value::String(s)) => trim_js(s),
        Some(_) => return Err("Title must be a string".to_string()),
    };
    if title.is_empty() {
        return Err("Title is required".to_string());
    }
    if utf16_len(title) > TITLE_MAX_CHARS {
        return Err(format!(
            "Title must be {TITLE_MAX_CHARS} characters or less"
        ));
    }

    let content = match fields.get("content") {
        None | Some(Value::Null) => "",
        Some(Value::String(s)) => trim_js(s),
        Some(_) => return Err("Content must be a string".to_string()),
    };
    if utf16_len(content) > CONTENT_MAX_CHARS {
        return Err(format!(
            "Content must be {CONTENT_MAX_CHARS} characters or less"
        ));
    }

    Ok(NoteInput {
        title: title.to_string(),
        content: content.to_string(),
    })
}

//! Conversion between the JSON meme columns and the one-URL-per-line text
//! shown in the admin form.

use crate::models::arena::{EMPTY_MEMES, decode_memes, encode_memes};

/// Render a JSON URL array as newline-separated text. Malformed input renders empty.
pub fn json_to_lines(raw: &str) -> String {
    decode_memes(raw).join("\n")
}

/// Parse newline-separated text back into a JSON URL array.
///
/// Lines are trimmed; blank lines, literal `[]` and anything not starting
/// with `http` are dropped without notice.
pub fn lines_to_json(text: &str) -> String {
    let urls: Vec<String> = text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty() && *line != EMPTY_MEMES && line.starts_with("http"))
        .map(String::from)
        .collect();

    if urls.is_empty() {
        return EMPTY_MEMES.to_string();
    }
    encode_memes(&urls)
}

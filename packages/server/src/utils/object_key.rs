use chrono::Utc;

/// Image extensions accepted for upload, lower-case with the leading dot.
pub const ALLOWED_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif", ".webp"];

const KEY_PREFIX: &str = "meme-arena";

/// Extension of the last path element, including the dot.
///
/// Only the final `.` counts (`archive.tar.gz` gives `.gz`); a name without
/// a dot has no extension.
pub fn extension(filename: &str) -> Option<&str> {
    let name = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    name.rfind('.').map(|i| &name[i..])
}

/// Lower-cased extension when it is on the allow-list.
pub fn allowed_extension(filename: &str) -> Option<String> {
    let ext = extension(filename)?.to_ascii_lowercase();
    ALLOWED_EXTENSIONS.contains(&ext.as_str()).then_some(ext)
}

/// `meme-arena/<nanos><ext>`
pub fn single_upload_key(ext: &str) -> String {
    format!("{KEY_PREFIX}/{}{ext}", now_nanos())
}

/// `meme-arena/memes/<nanos>_<index><ext>`; the index breaks ties inside one batch.
pub fn batch_upload_key(index: usize, ext: &str) -> String {
    format!("{KEY_PREFIX}/memes/{}_{index}{ext}", now_nanos())
}

fn now_nanos() -> i64 {
    Utc::now().timestamp_nanos_opt().unwrap_or_default()
}

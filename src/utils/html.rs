use html2text::from_read;
use once_cell::sync::Lazy;
use regex::Regex;

static IMG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)<img\s+[^>]*alt=["']([^"']*)["'][^>]*>"#).unwrap());

const WRAP_WIDTH: usize = 78;

/// Flatten a server-supplied HTML comment body into plain terminal text.
/// Tags are stripped and entities decoded by `html2text`; `<img>` tags
/// become `[image: alt]` placeholders so picture-only comments stay legible.
pub fn comment_text(html: &str) -> String {
    let with_placeholders = IMG_REGEX.replace_all(html, "[image: $1]");

    let flattened = from_read(with_placeholders.as_bytes(), WRAP_WIDTH).unwrap_or_default();
    flattened.trim_end().to_string()
}

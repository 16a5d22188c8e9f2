//! Allowlist markup sanitizer
//!
//! Everything handed to the notice system or emitted inline goes through
//! here. Only inline formatting and links survive; script and style elements
//! are dropped together with their content.

use ammonia::Builder;
use once_cell::sync::Lazy;

const ALLOWED_TAGS: &[&str] = &[
    "a", "abbr", "b", "br", "code", "em", "i", "p", "span", "strong",
];

static SANITIZER: Lazy<Builder<'static>> = Lazy::new(|| {
    let mut builder = Builder::empty();
    builder
        .add_tags(ALLOWED_TAGS)
        .add_tag_attributes("a", &["href", "target", "title"])
        .add_tag_attributes("abbr", &["title"])
        .add_url_schemes(&["http", "https", "mailto"])
        .add_clean_content_tags(&["script", "style"])
        .link_rel(Some("noopener noreferrer"));
    builder
});

/// Strip everything outside the allowlist from `html`
pub fn sanitize(html: &str) -> String {
    SANITIZER.clean(html).to_string()
}

//! Review submission link

use url::Url;

use crate::{
    config::{ItemType, ReviewConfig},
    errors::{ReviewError, Result},
};

pub const REVIEW_BASE_URL: &str = "https://wordpress.org/support/view/";
pub const REVIEW_FORM_ANCHOR: &str = "postform";

fn path_segment(item_type: ItemType) -> &'static str {
    match item_type {
        ItemType::Theme => "theme-reviews/",
        ItemType::Plugin => "plugin-reviews/",
        ItemType::Unspecified => "",
    }
}

/// Build the review URL for `config`
///
/// `<base><segment><slug>?rate=<rating>#postform`, percent-encoded by `url`.
pub fn review_link(config: &ReviewConfig) -> Result<String> {
    let raw = format!(
        "{}{}{}",
        REVIEW_BASE_URL,
        path_segment(config.item_type),
        config.slug
    );

    let mut link = Url::parse(&raw)
        .map_err(|e| ReviewError::InvalidConfig(format!("invalid review link '{}': {}", raw, e)))?;
    link.query_pairs_mut()
        .append_pair("rate", &config.rating.to_string());
    link.set_fragment(Some(REVIEW_FORM_ANCHOR));

    Ok(link.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(item_type: ItemType, slug: &str, rating: u8) -> ReviewConfig {
        ReviewConfig {
            item_type,
            slug: slug.to_string(),
            rating,
            ..ReviewConfig::default()
        }
    }

    #[test]
    fn test_theme_link() {
        let link = review_link(&config(ItemType::Theme, "my-theme", 5)).unwrap();
        assert_eq!(
            link,
            "https://wordpress.org/support/view/theme-reviews/my-theme?rate=5#postform"
        );
    }

    #[test]
    fn test_plugin_link() {
        let link = review_link(&config(ItemType::Plugin, "foo", 4)).unwrap();
        assert_eq!(
            link,
            "https://wordpress.org/support/view/plugin-reviews/foo?rate=4#postform"
        );
        assert!(!link.contains("theme-reviews"));
    }

    #[test]
    fn test_unspecified_type_has_no_segment() {
        let link = review_link(&config(ItemType::Unspecified, "foo", 3)).unwrap();
        assert_eq!(link, "https://wordpress.org/support/view/foo?rate=3#postform");
    }

    #[test]
    fn test_slug_is_encoded() {
        let link = review_link(&config(ItemType::Plugin, "my plugin\"x", 5)).unwrap();
        assert!(link.contains("my%20plugin%22x"));
        assert!(!link.contains(' '));
        assert!(!link.contains('"'));
    }

    #[test]
    fn test_rate_appended_to_existing_query() {
        let link = review_link(&config(ItemType::Plugin, "foo?lang=en", 5)).unwrap();
        assert!(link.ends_with("plugin-reviews/foo?lang=en&rate=5#postform"));
    }
}

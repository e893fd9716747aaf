use linkify::{LinkFinder, LinkKind};
use once_cell::sync::Lazy;
use regex::Regex;

const HTTP_SCHEME_PATTERN: &str = r"(?i)^https?://";

static HTTP_SCHEME: Lazy<Regex> =
    Lazy::new(|| Regex::new(HTTP_SCHEME_PATTERN).expect("Failed to compile URL scheme pattern"));

// Reuse LinkFinder instance for better performance
static LINK_FINDER: Lazy<LinkFinder> = Lazy::new(|| {
    let mut finder = LinkFinder::new();
    finder.kinds(&[LinkKind::Url]);
    finder
});

pub trait UrlFinder {
    /// Candidate URLs in the order they appear in `text`, repeats included.
    fn find_urls(&self, text: &str) -> Vec<String>;
}

/// Finds http and https links in free text.
#[derive(Default, Debug)]
pub struct Finder {}

impl UrlFinder for Finder {
    fn find_urls(&self, text: &str) -> Vec<String> {
        LINK_FINDER
            .links(text)
            .map(|link| link.as_str())
            .filter(|url| HTTP_SCHEME.is_match(url))
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn test_find_urls__only_http_schemes() {
        let text = "https://domain1.com http://domain2.com ftp://domain3.com";

        let actual = Finder::default().find_urls(text);

        assert_eq!(actual, vec!["https://domain1.com", "http://domain2.com"]);
    }

    #[test]
    fn test_find_urls__markdown_links() {
        let text = "arbitrary [something](http://foo.bar) arbitrary http://foo2.bar arbitrary";

        let actual = Finder::default().find_urls(text);

        assert_eq!(actual, vec!["http://foo.bar", "http://foo2.bar"]);
    }

    #[test]
    fn test_find_urls__img_url() {
        let text = "arbitrary ![image](http://foo.bar) arbitrary";

        let actual = Finder::default().find_urls(text);

        assert_eq!(actual, vec!["http://foo.bar"]);
    }

    #[test]
    fn test_find_urls__keeps_repeats_in_order() {
        let text = "https://a.com\nhttps://b.com/path?x=1\nsee https://a.com again";

        let actual = Finder::default().find_urls(text);

        assert_eq!(
            actual,
            vec!["https://a.com", "https://b.com/path?x=1", "https://a.com"]
        );
    }

    #[test]
    fn test_find_urls__no_urls() {
        let actual = Finder::default().find_urls("just plain text, no links. mailto:a@b.com");

        assert!(actual.is_empty());
    }
}

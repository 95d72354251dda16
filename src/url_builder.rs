use std::collections::BTreeMap;
use std::fmt;

use url::form_urlencoded;

/// Query parameter holding the API key.
pub(crate) const API_KEY_PARAM: &str = "apikey";

/// Accumulates path segments and query parameters, and renders them into a request URL.
///
/// Cloning a `UrlBuilder` gives a fully independent copy: changes made to the clone never show
/// up in the original and vice versa. This is how a long-lived configuration is turned into
/// per-request URLs.
///
/// ```
/// # use wallhaven::url_builder::UrlBuilder;
/// let mut base = UrlBuilder::new("https://wallhaven.cc/api/v1");
/// base.set_string("purity", "100");
///
/// let mut search = base.clone();
/// search.append("/search").set_string("q", "nature").set_int("page", 2);
///
/// assert_eq!(
///     search.build(),
///     "https://wallhaven.cc/api/v1/search?page=2&purity=100&q=nature"
/// );
/// assert_eq!(base.build(), "https://wallhaven.cc/api/v1?purity=100");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    base: String,
    segments: Vec<String>,
    // Ordered so that `build` doesn't depend on insertion order.
    params: BTreeMap<String, String>,
}

impl UrlBuilder {
    /// Create a builder rooted at `base`. The base isn't validated; a malformed one only fails
    /// when the request is sent.
    pub fn new(base: impl Into<String>) -> Self {
        UrlBuilder {
            base: base.into(),
            segments: Vec::new(),
            params: BTreeMap::new(),
        }
    }

    /// Append a path fragment, such as `/search` or `/w/94x38z`.
    pub fn append(&mut self, segment: impl Into<String>) -> &mut Self {
        self.segments.push(segment.into());
        self
    }

    /// Set the query parameter `key`, replacing any previous value.
    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Set the query parameter `key` to the decimal representation of `value`, replacing any
    /// previous value.
    pub fn set_int(&mut self, key: impl Into<String>, value: i64) -> &mut Self {
        self.set_string(key, value.to_string())
    }

    /// Whether the query parameter `key` is set.
    pub fn has(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// The current value of the query parameter `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Render the URL: the base, every segment in order, then the percent-encoded query string
    /// if at least one parameter is set.
    pub fn build(&self) -> String {
        let mut url = self.base.clone();

        for segment in &self.segments {
            url.push_str(segment);
        }

        if !self.params.is_empty() {
            url.push('?');
            url.push_str(
                &form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(&self.params)
                    .finish(),
            );
        }

        url
    }

    /// Same as [`build`](Self::build), with the API key masked. Meant for logs.
    pub(crate) fn redacted(&self) -> Redacted<'_> {
        Redacted(self)
    }
}

pub(crate) struct Redacted<'a>(&'a UrlBuilder);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.has(API_KEY_PARAM) {
            let mut masked = self.0.clone();
            masked.set_string(API_KEY_PARAM, "REDACTED");
            f.write_str(&masked.build())
        } else {
            f.write_str(&self.0.build())
        }
    }
}

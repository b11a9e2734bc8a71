//! Resource URL construction

use url::form_urlencoded;

/// Ordered query parameters appended to a resource URL
///
/// ```
/// use ghload::github::Query;
///
/// let query = Query::new().param("state", "closed").param("labels", "bug,ui");
/// assert_eq!(query.encode(), "state=closed&labels=bug%2Cui");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, value);
        self
    }

    /// Add a parameter in place
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Form-url-encode the parameters in insertion order
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.pairs)
            .finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Query {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = Self::new();
        for (k, v) in iter {
            query.push(k, v);
        }
        query
    }
}

/// Join path segments the way a filesystem path is cleaned
///
/// Segments may themselves contain `/` (`owner/repo`). Empty and `.`
/// components are dropped and `..` removes the previous component.
pub fn join_path(segments: &[&str]) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for component in segments.iter().flat_map(|s| s.split('/')) {
        match component {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            other => parts.push(other),
        }
    }
    parts.join("/")
}

/// Build `{api_url}/{segments...}[?query]`
pub fn resource_url(api_url: &str, segments: &[&str], query: Option<&Query>) -> String {
    let mut url = format!("{}/{}", api_url.trim_end_matches('/'), join_path(segments));
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(&query.encode());
    }
    url
}

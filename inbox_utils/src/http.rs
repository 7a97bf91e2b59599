use std::{ops::Deref, sync::LazyLock};

use url::Url;

use crate::inbox_version;

pub static USER_AGENT: LazyLock<String> =
    LazyLock::new(|| format!("inbox/{}", inbox_version()));

/// Shared [`reqwest::Client`] which identifies itself with [`USER_AGENT`].
#[derive(Debug, Clone)]
pub struct HttpClient(reqwest::Client);

impl HttpClient {
    pub fn new() -> reqwest::Result<Self> {
        reqwest::Client::builder()
            .user_agent(&*USER_AGENT)
            .build()
            .map(Self)
    }
}

impl Deref for HttpClient {
    type Target = reqwest::Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Append `segments` to the path of `base`.
///
/// Unlike [`Url::join`], the last segment of `base` is kept even if `base` has
/// no trailing slash. Returns `None` if `base` cannot be a base URL.
pub fn url_with_segments<'a>(base: &Url, segments: impl IntoIterator<Item = &'a str>) -> Option<Url> {
    let mut url = base.clone();
    url.path_segments_mut().ok()?.pop_if_empty().extend(segments);
    Some(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_agent() {
        assert_eq!(*USER_AGENT, format!("inbox/{}", inbox_version()));
        assert!(!USER_AGENT.contains("bootstrap.academy"));
    }

    #[test]
    fn segments() {
        for base in ["http://localhost:8000/api", "http://localhost:8000/api/"] {
            let url = url_with_segments(&base.parse().unwrap(), ["rest", "v1", "contact-form"]);
            assert_eq!(
                url.unwrap().as_str(),
                "http://localhost:8000/api/rest/v1/contact-form"
            );
        }

        let url = url_with_segments(&"http://localhost:8000".parse().unwrap(), ["v3", "scopes"]);
        assert_eq!(url.unwrap().as_str(), "http://localhost:8000/v3/scopes");

        assert_eq!(
            url_with_segments(&"mailto:someone@example.com".parse().unwrap(), ["x"]),
            None
        );
    }
}

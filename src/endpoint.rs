//! Endpoint base shared by every resource family.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{Result, ZoomError};
use crate::pagination::{self, ItemStream, Page};
use crate::params::Params;
use crate::session::{SharedSession, ZoomSession};

/// A session handle plus the resource's URI prefix (e.g. `phone/sites`).
///
/// Builds full URLs and provides the generic read helpers that resource
/// methods and the capability traits are written against.
#[derive(Debug, Clone)]
pub struct Endpoint {
    session: SharedSession,
    uri: &'static str,
}

impl Endpoint {
    /// Create an endpoint for `uri` on a shared session.
    pub fn new(session: SharedSession, uri: &'static str) -> Self {
        Self { session, uri }
    }

    /// The shared session.
    pub fn session(&self) -> &ZoomSession {
        &self.session
    }

    /// The relative URI prefix.
    pub fn uri(&self) -> &'static str {
        self.uri
    }

    /// Full URL for `path` under this endpoint's prefix.
    ///
    /// Empty segments are dropped, so stray leading, trailing or doubled
    /// slashes in either the prefix or `path` never reach the URL. Each
    /// segment is percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`ZoomError::InvalidPath`] for `.` or `..` segments, and an
    /// error if the session's base URL cannot carry a path.
    pub fn url(&self, path: &str) -> Result<Url> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        if segments.iter().any(|s| is_dot_segment(s)) {
            return Err(ZoomError::InvalidPath(path.to_string()));
        }
        self.join(&segments)
    }

    /// Full URL for exactly `segments` under this endpoint's prefix.
    ///
    /// Every segment is kept as one path segment, so a `/` inside an ID is
    /// percent-encoded rather than splitting it.
    ///
    /// # Errors
    ///
    /// Returns [`ZoomError::InvalidPath`] if a segment is empty, `.` or `..`.
    pub fn url_for(&self, segments: &[&str]) -> Result<Url> {
        if segments.iter().any(|s| s.is_empty() || is_dot_segment(s)) {
            return Err(ZoomError::InvalidPath(segments.join("/")));
        }
        self.join(segments)
    }

    fn join(&self, segments: &[&str]) -> Result<Url> {
        let base = self.session.base_url();
        let mut url = base.clone();
        let mut all = self
            .uri
            .split('/')
            .filter(|s| !s.is_empty())
            .chain(segments.iter().copied())
            .peekable();

        if all.peek().is_none() {
            return Ok(url);
        }

        url.path_segments_mut()
            .map_err(|()| ZoomError::InvalidBaseUrl(base.to_string()))?
            .pop_if_empty()
            .extend(all);
        Ok(url)
    }

    /// GET `url` and decode the whole body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        params: Option<&Params>,
    ) -> Result<T> {
        let response = self.session.get(url, params).await?;
        decode(response).await
    }

    /// GET a single page of a list response.
    ///
    /// Pass the previous page's `next_page_token` in `params` to move on.
    pub async fn get_page<T: DeserializeOwned>(
        &self,
        url: Url,
        items_key: &str,
        params: &Params,
    ) -> Result<Page<T>> {
        pagination::fetch_page(&self.session, url, items_key, params).await
    }

    /// Lazily iterate every item under `items_key` across all pages.
    ///
    /// No request is sent until the stream is polled, and each further
    /// page is requested only after the previous one has been drained.
    pub fn paged_get<T>(&self, url: Url, items_key: &str, params: Params) -> ItemStream<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        pagination::paged_stream(Arc::clone(&self.session), url, items_key, params)
    }

    /// [`Endpoint::paged_get`] for [`Endpoint::url_for`] segments, surfacing
    /// URL errors through the stream.
    pub fn paged_get_at<T>(
        &self,
        segments: &[&str],
        items_key: &str,
        params: Params,
    ) -> ItemStream<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        match self.url_for(segments) {
            Ok(url) => self.paged_get(url, items_key, params),
            Err(e) => pagination::failed(e),
        }
    }
}

fn is_dot_segment(segment: &str) -> bool {
    matches!(segment, "." | "..")
}

/// Decode a JSON response body.
pub(crate) async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let bytes = response.bytes().await.map_err(ZoomError::HttpError)?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint(base: &str, uri: &'static str) -> Endpoint {
        let session = ZoomSession::new("token", base, true).unwrap();
        Endpoint::new(Arc::new(session), uri)
    }

    fn has_doubled_slash(url: &Url) -> bool {
        url.path().contains("//")
    }

    #[test]
    fn test_url_joins_prefix_and_path() {
        let ep = endpoint("https://api.zoom.us/v2", "phone/sites");
        let url = ep.url("abc/settings").unwrap();
        assert_eq!(url.as_str(), "https://api.zoom.us/v2/phone/sites/abc/settings");
    }

    #[test]
    fn test_url_empty_path_is_prefix() {
        let ep = endpoint("https://api.zoom.us/v2/", "phone/sites");
        assert_eq!(ep.url("").unwrap().as_str(), "https://api.zoom.us/v2/phone/sites");
    }

    #[test]
    fn test_url_normalizes_slashes() {
        let paths = ["/abc", "abc/", "//abc//settings//", "/", "a//b", ""];
        for base in ["https://api.zoom.us/v2", "https://api.zoom.us/v2/", "http://127.0.0.1:8080"] {
            for uri in ["phone/sites", "/phone/sites/", "phone//sites"] {
                let ep = endpoint(base, uri);
                let base_url = ep.session().base_url().as_str().to_string();
                for path in paths {
                    let url = ep.url(path).unwrap();
                    assert!(!has_doubled_slash(&url), "{url} has a doubled slash");
                    assert!(url.as_str().starts_with(&base_url), "{url} outside {base_url}");
                }
            }
        }
    }

    #[test]
    fn test_url_is_stable_across_calls() {
        let ep = endpoint("https://api.zoom.us/v2", "phone/devices");
        let first = ep.url("dev1/reboot").unwrap();
        let second = ep.url("dev1/reboot").unwrap();
        assert_eq!(first, second);
        assert_eq!(ep.uri(), "phone/devices");
    }

    #[test]
    fn test_url_encodes_segments() {
        let ep = endpoint("https://api.zoom.us/v2", "phone/common_areas");
        let url = ep.url("area 1/phone_numbers/+12243416415").unwrap();
        assert_eq!(
            url.path(),
            "/v2/phone/common_areas/area%201/phone_numbers/+12243416415"
        );
    }

    #[test]
    fn test_url_rejects_dot_segments() {
        let ep = endpoint("https://api.zoom.us/v2", "phone/sites");
        for path in ["site1/..", "./site1", "..", "site1/./settings"] {
            let err = ep.url(path).unwrap_err();
            assert!(matches!(err, ZoomError::InvalidPath(_)), "{path}: {err}");
        }
    }

    #[test]
    fn test_url_for_keeps_each_segment() {
        let ep = endpoint("https://api.zoom.us/v2", "phone/devices");
        let url = ep.url_for(&["dev1", "extensions", "ext1"]).unwrap();
        assert_eq!(url.path(), "/v2/phone/devices/dev1/extensions/ext1");

        let url = ep.url_for(&["a/b"]).unwrap();
        assert_eq!(url.path(), "/v2/phone/devices/a%2Fb");

        assert_eq!(ep.url_for(&[]).unwrap().path(), "/v2/phone/devices");
    }

    #[test]
    fn test_url_for_rejects_empty_and_dot_segments() {
        let ep = endpoint("https://api.zoom.us/v2", "phone/devices");
        let cases: [&[&str]; 4] = [
            &["", "extensions"],
            &["dev1", "extensions", ""],
            &[".."],
            &["dev1", "."],
        ];
        for segments in cases {
            let err = ep.url_for(segments).unwrap_err();
            assert!(matches!(err, ZoomError::InvalidPath(_)), "{segments:?}: {err}");
        }
    }
}

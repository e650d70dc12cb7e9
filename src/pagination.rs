//! Continuation-token pagination for Zoom list responses.
//!
//! Zoom list bodies look like `{"<items_key>": [...], "next_page_token": "..."}`.
//! An absent or empty token marks the last page.

use std::collections::VecDeque;

use futures::stream::{self, BoxStream, StreamExt};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::error::{Result, ZoomError};
use crate::params::Params;
use crate::session::SharedSession;
use crate::JsonObject;

/// Name of the continuation token, both in response bodies and in the
/// query string of follow-up requests.
pub const NEXT_PAGE_TOKEN: &str = "next_page_token";

/// Lazily paged sequence of items.
///
/// Each poll past the buffered items awaits at most one HTTP request.
/// Dropping the stream stops further requests. After the first error the
/// stream ends.
pub type ItemStream<T> = BoxStream<'static, Result<T>>;

/// A single page of a Zoom list response.
#[derive(Debug, Clone, Serialize)]
#[serde(bound = "T: Serialize")]
pub struct Page<T> {
    /// The items on this page, in response order.
    pub items: Vec<T>,
    /// Token for the next page; `None` on the last page.
    pub next_page_token: Option<String>,
}

impl<T> Page<T> {
    /// Returns true if another page is available.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.next_page_token.is_some()
    }

    /// Returns true if this page has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns an iterator over the items in this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: DeserializeOwned> Page<T> {
    /// Split a decoded list body into items and continuation token.
    ///
    /// A missing or `null` items key counts as an empty page.
    pub fn from_body(mut body: JsonObject, items_key: &str) -> Result<Self> {
        let items = match body.remove(items_key) {
            None | Some(Value::Null) => Vec::new(),
            Some(raw) => serde_json::from_value(raw)?,
        };

        let next_page_token = match body.remove(NEXT_PAGE_TOKEN) {
            Some(Value::String(token)) if !token.is_empty() => Some(token),
            _ => None,
        };

        Ok(Self {
            items,
            next_page_token,
        })
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Fetch one page from `url`.
pub(crate) async fn fetch_page<T: DeserializeOwned>(
    session: &SharedSession,
    url: Url,
    items_key: &str,
    params: &Params,
) -> Result<Page<T>> {
    let response = session.get(url, Some(params)).await?;
    let bytes = response.bytes().await.map_err(ZoomError::HttpError)?;
    let body: JsonObject = serde_json::from_slice(&bytes)?;
    Page::from_body(body, items_key)
}

/// Where the cursor stands between polls.
enum CursorState {
    /// No page fetched yet.
    Start,
    /// More pages behind this token.
    Continue(String),
    /// Last page fetched.
    Done,
}

struct PageCursor<T> {
    session: SharedSession,
    url: Url,
    items_key: String,
    params: Params,
    buffered: VecDeque<T>,
    state: CursorState,
    pages_fetched: u32,
}

impl<T: DeserializeOwned> PageCursor<T> {
    async fn next_item(&mut self) -> Result<Option<T>> {
        loop {
            if let Some(item) = self.buffered.pop_front() {
                return Ok(Some(item));
            }

            match &self.state {
                CursorState::Done => return Ok(None),
                CursorState::Start => {}
                CursorState::Continue(token) => {
                    self.params.set(NEXT_PAGE_TOKEN, token);
                }
            }

            if let Some(max_pages) = self.session.max_pages() {
                if self.pages_fetched >= max_pages {
                    self.state = CursorState::Done;
                    return Err(ZoomError::PageLimitExceeded { max_pages });
                }
            }

            self.pages_fetched += 1;
            tracing::debug!(
                url = %self.url,
                page = self.pages_fetched,
                items_key = %self.items_key,
                "fetching page"
            );

            let page: Page<T> =
                fetch_page(&self.session, self.url.clone(), &self.items_key, &self.params).await?;

            self.buffered.extend(page.items);
            self.state = match page.next_page_token {
                Some(token) => CursorState::Continue(token),
                None => CursorState::Done,
            };
        }
    }
}

/// Build a lazy stream over every item of a paged listing.
///
/// Nothing is requested until the stream is first polled. The next page is
/// only requested once every item of the current one has been consumed.
pub(crate) fn paged_stream<T>(
    session: SharedSession,
    url: Url,
    items_key: &str,
    params: Params,
) -> ItemStream<T>
where
    T: DeserializeOwned + Send + 'static,
{
    let cursor = PageCursor {
        session,
        url,
        items_key: items_key.to_string(),
        params,
        buffered: VecDeque::new(),
        state: CursorState::Start,
        pages_fetched: 0,
    };

    // try_unfold drops the cursor on the first error, which ends the stream.
    stream::try_unfold(cursor, |mut cursor| async move {
        let item = cursor.next_item().await?;
        Ok::<_, ZoomError>(item.map(|item| (item, cursor)))
    })
    .boxed()
}

/// A stream that yields an error as its final item.
pub(crate) fn failed<T: Send + 'static>(err: ZoomError) -> ItemStream<T> {
    stream::once(async move { Err::<T, _>(err) }).boxed()
}

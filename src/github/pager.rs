//! Sequential traversal of paged GitHub listings.
//!
//! The pager follows `next` relations from the `Link` header. It never
//! retries; every error other than a 404 on the requested page propagates
//! unchanged.

use std::sync::Arc;

use serde_json::Value;

use super::error::ActivityError;
use super::pagination::{PageInfo, UpstreamPage};
use super::transport::UpstreamTransport;

/// Page size used when walking a listing exhaustively.
pub const EXHAUSTIVE_PAGE_SIZE: u8 = 100;

/// Upper bound on pages fetched by [`UpstreamPager::fetch_all`].
///
/// Reaching it logs a warning and returns the items accumulated so far.
pub const MAX_EXHAUSTIVE_PAGES: usize = 10_000;

/// Walks paged listing endpoints through an [`UpstreamTransport`].
#[derive(Clone)]
pub struct UpstreamPager {
    transport: Arc<dyn UpstreamTransport>,
    page_limit: usize,
}

impl UpstreamPager {
    /// Creates a pager over the given transport.
    #[must_use]
    pub fn new(transport: Arc<dyn UpstreamTransport>) -> Self {
        Self {
            transport,
            page_limit: MAX_EXHAUSTIVE_PAGES,
        }
    }

    /// Overrides the exhaustive page ceiling.
    #[must_use]
    pub const fn with_page_limit(mut self, page_limit: usize) -> Self {
        self.page_limit = page_limit;
        self
    }

    /// Fetches every page starting at `first`, mapping each element.
    ///
    /// Stops when a page is empty or carries no `next` relation. A 404 on the
    /// first page yields an empty listing.
    ///
    /// # Errors
    ///
    /// Propagates any transport error other than that first-page 404.
    pub async fn fetch_all<T, F>(&self, first: &str, map: F) -> Result<Vec<T>, ActivityError>
    where
        F: Fn(Value) -> T + Send + Sync,
        T: Send,
    {
        let listing = self.walk(first, EXHAUSTIVE_PAGE_SIZE, map).await?;
        Ok(listing.items)
    }

    /// Fetches every page starting at `first` and reports where the walk
    /// ended.
    ///
    /// `current_page` is the last page that carried items. `total_pages` is
    /// the largest `last` relation seen, raised to `current_page` when the
    /// listing ran out of `next` relations. `has_next` is only set when the
    /// page ceiling cut the walk short.
    ///
    /// # Errors
    ///
    /// Propagates any transport error other than a first-page 404.
    pub async fn fetch_all_with_info<T, F>(
        &self,
        first: &str,
        per_page: u8,
        map: F,
    ) -> Result<UpstreamPage<T>, ActivityError>
    where
        F: Fn(Value) -> T + Send + Sync,
        T: Send,
    {
        self.walk(first, per_page, map).await
    }

    async fn walk<T, F>(
        &self,
        first: &str,
        per_page: u8,
        map: F,
    ) -> Result<UpstreamPage<T>, ActivityError>
    where
        F: Fn(Value) -> T + Send + Sync,
        T: Send,
    {
        let mut items = Vec::new();
        let mut target = first.to_owned();
        let mut pages_fetched = 0_usize;
        let mut current_page = 0_u32;
        let mut total_pages = 0_u32;
        let mut truncated = false;

        loop {
            let response = match self.transport.get(&target).await {
                Ok(response) => response,
                Err(error) if pages_fetched == 0 && error.is_not_found() => {
                    tracing::debug!("{first} not found; treating as an empty listing");
                    return Ok(UpstreamPage::empty(1, per_page));
                }
                Err(error) => return Err(error),
            };
            pages_fetched += 1;

            if response.items.is_empty() {
                break;
            }

            let cursor = response.cursor();
            let count = response.items.len();
            items.extend(response.items.into_iter().map(&map));
            current_page = current_page.saturating_add(1);
            total_pages = total_pages.max(cursor.total_pages());
            tracing::debug!("fetched page {pages_fetched} ({count} items) from {target}");

            let Some(next) = cursor.next_url() else {
                break;
            };
            if pages_fetched >= self.page_limit {
                tracing::warn!(
                    "stopping after {pages_fetched} pages from {first}; returning {} items",
                    items.len()
                );
                truncated = true;
                break;
            }
            next.clone_into(&mut target);
        }

        if !truncated {
            total_pages = total_pages.max(current_page);
        }
        let page_info = PageInfo::new(current_page.max(1), per_page)
            .with_total_pages(total_pages)
            .with_has_next(truncated);

        Ok(UpstreamPage { items, page_info })
    }

    /// Fetches exactly one page and reports its position from the `Link`
    /// header. A 404 becomes an empty page with no known total.
    ///
    /// # Errors
    ///
    /// Propagates any transport error other than a 404.
    pub async fn fetch_page<T, F>(
        &self,
        target: &str,
        page: u32,
        per_page: u8,
        map: F,
    ) -> Result<UpstreamPage<T>, ActivityError>
    where
        F: Fn(Value) -> T + Send + Sync,
        T: Send,
    {
        let response = match self.transport.get(target).await {
            Ok(response) => response,
            Err(error) if error.is_not_found() => {
                tracing::debug!("{target} not found; returning an empty page");
                return Ok(UpstreamPage::empty(page, per_page));
            }
            Err(error) => return Err(error),
        };

        let cursor = response.cursor();
        let items = response.items.into_iter().map(map).collect();
        let page_info = PageInfo::new(page, per_page)
            .with_total_pages(cursor.total_pages())
            .with_has_next(cursor.has_next());

        Ok(UpstreamPage { items, page_info })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mockall::Sequence;
    use mockall::predicate::eq;
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::UpstreamPager;
    use crate::github::error::ActivityError;
    use crate::github::transport::{MockUpstreamTransport, UpstreamResponse};

    fn items(range: std::ops::Range<u32>) -> Vec<Value> {
        range.map(|id| json!({ "id": id })).collect()
    }

    fn id_of() -> impl Fn(Value) -> u64 + Send + Sync {
        |value| value.get("id").and_then(Value::as_u64).unwrap_or_default()
    }

    fn next_link(page: u32) -> Option<String> {
        Some(format!(
            "<https://api.github.com/user/9/repos?per_page=100&page={page}>; rel=\"next\", \
             <https://api.github.com/user/9/repos?per_page=100&page=3>; rel=\"last\""
        ))
    }

    #[tokio::test]
    async fn fetch_all_follows_next_links_in_order() {
        let mut transport = MockUpstreamTransport::new();
        let mut sequence = Sequence::new();
        transport
            .expect_get()
            .with(eq("/users/octo/repos?per_page=100&page=1&sort=updated"))
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_| Ok(UpstreamResponse::new(items(0..100), next_link(2))));
        transport
            .expect_get()
            .with(eq("https://api.github.com/user/9/repos?per_page=100&page=2"))
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_| Ok(UpstreamResponse::new(items(100..200), next_link(3))));
        transport
            .expect_get()
            .with(eq("https://api.github.com/user/9/repos?per_page=100&page=3"))
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_| Ok(UpstreamResponse::new(items(200..237), None)));

        let pager = UpstreamPager::new(Arc::new(transport));
        let ids = pager
            .fetch_all("/users/octo/repos?per_page=100&page=1&sort=updated", id_of())
            .await
            .expect("listing should succeed");

        assert_eq!(ids.len(), 237);
        assert_eq!(ids, (0..237).collect::<Vec<u64>>());
    }

    #[tokio::test]
    async fn fetch_all_stops_on_empty_page_even_with_next_link() {
        let mut transport = MockUpstreamTransport::new();
        transport
            .expect_get()
            .times(1)
            .returning(|_| Ok(UpstreamResponse::new(Vec::new(), next_link(2))));

        let pager = UpstreamPager::new(Arc::new(transport));
        let ids = pager
            .fetch_all("/users/octo/repos", id_of())
            .await
            .expect("listing should succeed");

        assert!(ids.is_empty());
    }

    #[tokio::test]
    async fn fetch_all_treats_first_page_not_found_as_empty() {
        let mut transport = MockUpstreamTransport::new();
        transport.expect_get().times(1).returning(|_| {
            Err(ActivityError::NotFound {
                message: "Not Found".to_owned(),
            })
        });

        let pager = UpstreamPager::new(Arc::new(transport));
        let ids = pager
            .fetch_all("/users/ghost/repos", id_of())
            .await
            .expect("404 should be an empty listing");

        assert!(ids.is_empty());
    }

    #[tokio::test]
    async fn fetch_all_propagates_later_failures() {
        let mut transport = MockUpstreamTransport::new();
        let mut sequence = Sequence::new();
        transport
            .expect_get()
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_| Ok(UpstreamResponse::new(items(0..100), next_link(2))));
        transport
            .expect_get()
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_| {
                Err(ActivityError::UpstreamServer {
                    status: 502,
                    message: "bad gateway".to_owned(),
                })
            });

        let pager = UpstreamPager::new(Arc::new(transport));
        let error = pager
            .fetch_all("/users/octo/repos", id_of())
            .await
            .expect_err("second page failure should propagate");

        assert!(matches!(error, ActivityError::UpstreamServer { status: 502, .. }));
    }

    #[tokio::test]
    async fn fetch_all_honours_page_ceiling() {
        let mut transport = MockUpstreamTransport::new();
        transport
            .expect_get()
            .times(2)
            .returning(|_| Ok(UpstreamResponse::new(items(0..1), next_link(2))));

        let pager = UpstreamPager::new(Arc::new(transport)).with_page_limit(2);
        let ids = pager
            .fetch_all("/users/octo/repos", id_of())
            .await
            .expect("listing should stop at the ceiling");

        assert_eq!(ids.len(), 2);
    }

    #[tokio::test]
    async fn fetch_all_with_info_reports_the_final_page() {
        let mut transport = MockUpstreamTransport::new();
        let mut sequence = Sequence::new();
        transport
            .expect_get()
            .with(eq("/users/octo/repos?per_page=50&page=1&sort=updated"))
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_| Ok(UpstreamResponse::new(items(0..50), next_link(2))));
        transport
            .expect_get()
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_| Ok(UpstreamResponse::new(items(50..100), next_link(3))));
        transport
            .expect_get()
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_| Ok(UpstreamResponse::new(items(100..120), None)));

        let pager = UpstreamPager::new(Arc::new(transport));
        let listing = pager
            .fetch_all_with_info(
                "/users/octo/repos?per_page=50&page=1&sort=updated",
                50,
                id_of(),
            )
            .await
            .expect("listing should succeed");

        assert_eq!(listing.items.len(), 120);
        assert_eq!(listing.page_info.current_page(), 3);
        assert_eq!(listing.page_info.per_page(), 50);
        assert_eq!(listing.page_info.total_pages(), 3);
        assert!(!listing.page_info.has_next());
    }

    #[tokio::test]
    async fn fetch_all_with_info_flags_a_truncated_walk() {
        let mut transport = MockUpstreamTransport::new();
        transport
            .expect_get()
            .times(2)
            .returning(|_| Ok(UpstreamResponse::new(items(0..10), next_link(2))));

        let pager = UpstreamPager::new(Arc::new(transport)).with_page_limit(2);
        let listing = pager
            .fetch_all_with_info("/users/octo/repos", 10, id_of())
            .await
            .expect("listing should stop at the ceiling");

        assert_eq!(listing.items.len(), 20);
        assert_eq!(listing.page_info.current_page(), 2);
        assert_eq!(listing.page_info.total_pages(), 3);
        assert!(listing.page_info.has_next());
    }

    #[tokio::test]
    async fn fetch_all_with_info_treats_first_page_not_found_as_empty() {
        let mut transport = MockUpstreamTransport::new();
        transport.expect_get().times(1).returning(|_| {
            Err(ActivityError::NotFound {
                message: "Not Found".to_owned(),
            })
        });

        let pager = UpstreamPager::new(Arc::new(transport));
        let listing = pager
            .fetch_all_with_info("/users/ghost/repos", 30, id_of())
            .await
            .expect("404 should be an empty listing");

        assert!(listing.is_empty());
        assert_eq!(listing.page_info.current_page(), 1);
        assert_eq!(listing.page_info.total_pages(), 0);
    }

    #[rstest]
    #[case::middle(next_link(3), 2, 3, true)]
    #[case::final_page(None, 3, 0, false)]
    #[tokio::test]
    async fn fetch_page_reports_link_metadata(
        #[case] link: Option<String>,
        #[case] page: u32,
        #[case] expected_total: u32,
        #[case] expected_next: bool,
    ) {
        let mut transport = MockUpstreamTransport::new();
        transport
            .expect_get()
            .times(1)
            .returning(move |_| Ok(UpstreamResponse::new(items(0..30), link.clone())));

        let pager = UpstreamPager::new(Arc::new(transport));
        let result = pager
            .fetch_page("/users/octo/repos?page=2", page, 30, id_of())
            .await
            .expect("page should load");

        assert_eq!(result.items.len(), 30);
        assert_eq!(result.page_info.current_page(), page);
        assert_eq!(result.page_info.total_pages(), expected_total);
        assert_eq!(result.page_info.has_next(), expected_next);
    }

    #[tokio::test]
    async fn fetch_page_maps_not_found_to_empty_page() {
        let mut transport = MockUpstreamTransport::new();
        transport.expect_get().times(1).returning(|_| {
            Err(ActivityError::NotFound {
                message: "Not Found".to_owned(),
            })
        });

        let pager = UpstreamPager::new(Arc::new(transport));
        let result = pager
            .fetch_page("/orgs/ghost/repos?page=4", 4, 30, id_of())
            .await
            .expect("404 should be an empty page");

        assert!(result.is_empty());
        assert_eq!(result.page_info.total_pages(), 0);
        assert!(!result.page_info.has_next());
    }

    #[tokio::test]
    async fn fetch_page_propagates_rate_limits() {
        let mut transport = MockUpstreamTransport::new();
        transport.expect_get().times(1).returning(|_| {
            Err(ActivityError::RateLimited {
                retry_after: Some(10),
                rate_limit: None,
                message: "slow down".to_owned(),
            })
        });

        let pager = UpstreamPager::new(Arc::new(transport));
        let error = pager
            .fetch_page("/users/octo/repos?page=1", 1, 30, id_of())
            .await
            .expect_err("rate limit should propagate");

        assert!(error.is_rate_limited());
    }
}

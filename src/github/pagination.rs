//! Pagination state for single upstream pages.
//!
//! `PageInfo` captures where a single GitHub listing page sits within the
//! upstream result set, as advertised by the response's `Link` header.
//! `UpstreamPage` pairs that state with the mapped items.

use serde::Serialize;

/// Current page state for one upstream listing page.
///
/// `total_pages` is 0 when GitHub did not advertise a `last` relation, which
/// happens on the final page and on empty or missing listings.
///
/// # Example
///
/// ```
/// use repo_pulse::github::PageInfo;
///
/// let info = PageInfo::new(2, 50)
///     .with_total_pages(5)
///     .with_has_next(true);
/// assert!(!info.is_first_page());
/// assert!(info.has_prev());
/// assert!(info.has_next());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    /// Current page number (1-based).
    current_page: u32,
    /// Items requested per page.
    per_page: u8,
    /// Total number of pages, or 0 when unknown.
    total_pages: u32,
    /// Whether more pages exist after the current one.
    has_next: bool,
    /// Whether pages exist before the current one.
    has_prev: bool,
}

impl PageInfo {
    /// Creates a new page info instance.
    ///
    /// `has_prev` follows from the page number; the total and `has_next`
    /// default to unknown / false.
    #[must_use]
    pub const fn new(current_page: u32, per_page: u8) -> Self {
        Self {
            current_page,
            per_page,
            total_pages: 0,
            has_next: false,
            has_prev: current_page > 1,
        }
    }

    /// Sets the total number of pages.
    #[must_use]
    pub const fn with_total_pages(mut self, total_pages: u32) -> Self {
        self.total_pages = total_pages;
        self
    }

    /// Sets whether there is a next page.
    #[must_use]
    pub const fn with_has_next(mut self, has_next: bool) -> Self {
        self.has_next = has_next;
        self
    }

    /// Returns the current page number (1-based).
    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Returns the number of items requested per page.
    #[must_use]
    pub const fn per_page(&self) -> u8 {
        self.per_page
    }

    /// Returns the total number of pages, or 0 when unknown.
    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Returns true if more pages exist after the current one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.has_next
    }

    /// Returns true if pages exist before the current one.
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.has_prev
    }

    /// Returns true if this is the first page.
    #[must_use]
    pub const fn is_first_page(&self) -> bool {
        self.current_page <= 1
    }

    /// Returns true if this is the last page.
    #[must_use]
    pub const fn is_last_page(&self) -> bool {
        !self.has_next
    }
}

impl Default for PageInfo {
    fn default() -> Self {
        Self::new(1, 30)
    }
}

/// Items from one upstream page together with their page state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpstreamPage<T> {
    /// Mapped items in upstream order.
    pub items: Vec<T>,
    /// Position of this page within the upstream listing.
    pub page_info: PageInfo,
}

impl<T> UpstreamPage<T> {
    /// Builds an empty page for the requested position.
    #[must_use]
    pub const fn empty(current_page: u32, per_page: u8) -> Self {
        Self {
            items: Vec::new(),
            page_info: PageInfo::new(current_page, per_page),
        }
    }

    /// Returns true when the page carries no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

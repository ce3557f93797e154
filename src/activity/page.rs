//! In-memory re-pagination of an ordered result set.

use serde::Serialize;

/// A zero-indexed page sliced from a larger ordered collection.
///
/// An out-of-range page keeps the requested number and size, reports the
/// true total and carries no content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageResult<T> {
    content: Vec<T>,
    page_number: usize,
    page_size: usize,
    total_elements: usize,
    total_pages: usize,
    has_next: bool,
    has_previous: bool,
}

impl<T> PageResult<T> {
    /// Builds a page, deriving the navigation fields.
    ///
    /// `page_size` is expected to be at least 1; a 0 is treated as 1 when
    /// computing `total_pages`.
    #[must_use]
    pub fn new(content: Vec<T>, page_number: usize, page_size: usize, total_elements: usize) -> Self {
        let total_pages = total_elements.div_ceil(page_size.max(1));
        Self {
            content,
            page_number,
            page_size,
            total_elements,
            total_pages,
            has_next: page_number.saturating_add(1) < total_pages,
            has_previous: page_number > 0,
        }
    }

    /// Items on this page.
    #[must_use]
    pub fn content(&self) -> &[T] {
        &self.content
    }

    /// Zero-based page number.
    #[must_use]
    pub const fn page_number(&self) -> usize {
        self.page_number
    }

    /// Requested page size.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Size of the whole collection.
    #[must_use]
    pub const fn total_elements(&self) -> usize {
        self.total_elements
    }

    /// `ceil(total_elements / page_size)`.
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Whether a later page has content.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.has_next
    }

    /// Whether this is not the first page.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.has_previous
    }

    /// Replaces the content while keeping the page position.
    #[must_use]
    pub fn map_content<U>(self, content: Vec<U>) -> PageResult<U> {
        PageResult {
            content,
            page_number: self.page_number,
            page_size: self.page_size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            has_next: self.has_next,
            has_previous: self.has_previous,
        }
    }
}

/// Copies page `page_number` of `items` into a [`PageResult`].
#[must_use]
pub fn slice<T: Clone>(items: &[T], page_number: usize, page_size: usize) -> PageResult<T> {
    let total = items.len();
    let start = page_number.saturating_mul(page_size);
    let end = start.saturating_add(page_size).min(total);
    let content = items.get(start..end).map(<[T]>::to_vec).unwrap_or_default();
    PageResult::new(content, page_number, page_size, total)
}

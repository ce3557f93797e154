//! RFC 5988 `Link` header parsing.
//!
//! GitHub paginates list endpoints through a header of the form
//!
//! ```text
//! <https://api.github.com/users/octo/repos?page=2>; rel="next", <https://api.github.com/users/octo/repos?page=7>; rel="last"
//! ```
//!
//! Parsing is best effort: entries that do not look like `<url>; rel="name"`
//! are skipped and a missing or unreadable header simply means "no further
//! pages".

use std::collections::HashMap;

use url::Url;

/// Relations parsed from one `Link` header, keyed by relation name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkRelations {
    relations: HashMap<String, String>,
}

impl LinkRelations {
    /// Parses a raw header value. When a relation repeats, the last one wins.
    #[must_use]
    pub fn parse(header: &str) -> Self {
        let relations = header
            .split(',')
            .filter_map(parse_entry)
            .collect::<HashMap<_, _>>();
        Self { relations }
    }

    /// Returns the URL for the named relation.
    #[must_use]
    pub fn get(&self, relation: &str) -> Option<&str> {
        self.relations.get(relation).map(String::as_str)
    }

    /// Returns true when no relation could be parsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }
}

fn parse_entry(entry: &str) -> Option<(String, String)> {
    let mut segments = entry.split(';').map(str::trim);
    let target = segments
        .next()?
        .strip_prefix('<')?
        .strip_suffix('>')?
        .trim();
    if target.is_empty() {
        return None;
    }

    let relation = segments.find_map(|segment| {
        let (key, value) = segment.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("rel")
            .then(|| value.trim().trim_matches('"').trim().to_owned())
    })?;
    if relation.is_empty() {
        return None;
    }

    Some((relation, target.to_owned()))
}

/// Pagination cursor derived from a single upstream response.
///
/// Rebuilt from headers on every call and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageCursor {
    next_url: Option<String>,
    last_url: Option<String>,
    total_pages: u32,
}

impl PageCursor {
    /// Builds a cursor from an optional `Link` header value.
    #[must_use]
    pub fn from_link_header(header: Option<&str>) -> Self {
        let Some(raw) = header else {
            return Self::default();
        };

        let relations = LinkRelations::parse(raw);
        let next_url = relations.get("next").map(ToOwned::to_owned);
        let last_url = relations.get("last").map(ToOwned::to_owned);
        let total_pages = last_url.as_deref().map_or(0, page_parameter);

        Self {
            next_url,
            last_url,
            total_pages,
        }
    }

    /// URL of the next page, if any.
    #[must_use]
    pub fn next_url(&self) -> Option<&str> {
        self.next_url.as_deref()
    }

    /// URL of the last page, if any.
    #[must_use]
    pub fn last_url(&self) -> Option<&str> {
        self.last_url.as_deref()
    }

    /// Page number advertised by the `last` relation, or 0 when unknown.
    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Whether a `next` relation was present.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.next_url.is_some()
    }
}

/// Extracts the `page` query parameter from a URL, or 0.
///
/// Only a parameter named exactly `page` counts; `per_page` is ignored.
fn page_parameter(target: &str) -> u32 {
    let from_url = Url::parse(target).ok().and_then(|parsed| {
        parsed
            .query_pairs()
            .find(|(key, _)| key == "page")
            .map(|(_, value)| value.into_owned())
    });

    let raw = from_url.or_else(|| {
        let (_, query) = target.split_once('?')?;
        query
            .split('&')
            .find_map(|pair| pair.strip_prefix("page="))
            .map(ToOwned::to_owned)
    });

    raw.and_then(|value| value.parse::<u32>().ok()).unwrap_or(0)
}

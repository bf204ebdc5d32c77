//! Cursor-based pagination support.
//!
//! Recurly links list pages through the `Link` response header. Each entry
//! is `<url>; rel="..."`; the entry whose relation is `next` points at the
//! follow-up page. The executor walks that chain sequentially and hands the
//! decoded collections to [`merge_pages`], which folds them into the first
//! collection in arrival order.

use tracing::warn;
use url::Url;

/// Response header carrying the pagination links.
pub const PAGINATION_HEADER: &str = "Link";

/// One response body paired with the next-page URL, if any.
///
/// Pages exist only for the span of one logical request; they are discarded
/// after their bodies have been decoded and merged.
#[derive(Debug, Clone)]
pub struct Page {
    /// Raw response body text.
    pub body: String,
    /// Fully qualified URL of the next page, taken verbatim from the
    /// pagination header.
    pub next: Option<String>,
}

/// Extracts the `rel="next"` URL from a `Link` header value.
///
/// Entries that advertise `rel="next"` but do not parse as a URL are logged
/// and skipped.
///
/// # Examples
///
/// ```
/// use recurly_client::pagination::next_link;
///
/// let header = "<https://api.recurly.com/v2/transactions>; rel=\"start\", \
///               <https://api.recurly.com/v2/transactions?cursor=124142>; rel=\"next\"";
/// assert_eq!(
///     next_link(header).as_deref(),
///     Some("https://api.recurly.com/v2/transactions?cursor=124142"),
/// );
/// assert_eq!(next_link("<https://api.recurly.com/v2/plans>; rel=\"start\""), None);
/// ```
#[must_use]
pub fn next_link(header: &str) -> Option<String> {
    for entry in header.split(',') {
        let mut parts = entry.split(';');
        let Some(url_part) = parts.next() else { continue };
        let Some(rel_part) = parts.next() else { continue };
        if rel_part.trim() != "rel=\"next\"" {
            continue;
        }
        let raw = url_part.trim().trim_start_matches('<').trim_end_matches('>');
        match Url::parse(raw) {
            Ok(url) => return Some(url.into()),
            Err(_) => warn!(url = raw, "unable to understand pagination url"),
        }
    }
    None
}

/// A decoded list wrapper whose elements can be merged across pages.
///
/// Every list resource (`Accounts`, `Subscriptions`, ...) implements this so
/// the aggregator can fold pages without knowing the concrete type.
pub trait ResourceList {
    /// Element type of the collection.
    type Item;

    /// Borrows the elements in order.
    fn items(&self) -> &[Self::Item];

    /// Mutably borrows the element list of this wrapper.
    fn items_mut(&mut self) -> &mut Vec<Self::Item>;

    /// Consumes the wrapper, yielding its elements.
    fn into_items(self) -> Vec<Self::Item>;
}

/// Folds per-page collections into one, preserving arrival order.
///
/// The first page's wrapper is the one extended and returned; later
/// wrappers are consumed for their elements only. Zero pages yield `None`
/// rather than an empty collection — preserved from the original client's
/// observable behavior, even though an empty collection would arguably be
/// friendlier.
pub fn merge_pages<L: ResourceList>(pages: Vec<L>) -> Option<L> {
    let mut pages = pages.into_iter();
    let mut merged = pages.next()?;
    for page in pages {
        merged.items_mut().extend(page.into_items());
    }
    Some(merged)
}

//! Article search filter and the editor navigation link.
//!
//! The article picker filters an in-memory list with a plain
//! case-insensitive substring match. There is no ranking and no pagination;
//! the input order is preserved.

use crate::types::DbId;

/// Message rendered by the picker when a query matches nothing.
pub const EMPTY_RESULTS_MESSAGE: &str = "No articles found";

/// Path of the editor view.
pub const EDITOR_PATH: &str = "/editor";

/// Query parameter carrying the selected article id.
pub const ARTICLE_QUERY_PARAM: &str = "article";

/// Fields an item exposes to the search filter.
pub trait Searchable {
    fn title(&self) -> &str;
    fn category(&self) -> Option<&str>;
    fn author(&self) -> Option<&str>;
}

/// Returns `true` if `needle` (already lowercased) occurs in `field`.
fn contains_folded(field: &str, needle: &str) -> bool {
    field.to_lowercase().contains(needle)
}

/// Check whether a single item matches `query`.
///
/// An empty query matches everything.
pub fn matches_query<T: Searchable + ?Sized>(item: &T, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    contains_folded(item.title(), &needle)
        || item.category().is_some_and(|c| contains_folded(c, &needle))
        || item.author().is_some_and(|a| contains_folded(a, &needle))
}

/// Return the subsequence of `items` whose title, category or author
/// contains `query`, ignoring case.
pub fn filter_articles<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    items.iter().filter(|item| matches_query(*item, query)).collect()
}

/// Build the link that opens the editor for an article.
///
/// ```
/// use newsreel_core::article_search::editor_link;
/// let id = uuid::Uuid::nil();
/// assert_eq!(
///     editor_link(id),
///     "/editor?article=00000000-0000-0000-0000-000000000000"
/// );
/// ```
pub fn editor_link(article_id: DbId) -> String {
    format!("{EDITOR_PATH}?{ARTICLE_QUERY_PARAM}={article_id}")
}

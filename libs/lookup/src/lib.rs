//! Display name → item resolution over paged listings.
//!
//! Remote APIs list items page by page and do not enforce unique display
//! names. Lookups here walk every page, keep exact (case-sensitive) matches,
//! and only succeed when exactly one item matches.

use std::collections::HashSet;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,

    /// Opaque cursor for the next page; `None` on the last page.
    pub next_cursor: Option<String>,
}

/// An item that can be looked up by display name.
pub trait DisplayNamed {
    /// The display name, if the item has one.
    fn display_name(&self) -> Option<&str>;

    /// The stable identifier, used to report ambiguous matches.
    fn id(&self) -> &str;
}

/// A remote listing that can be read one page at a time.
#[async_trait]
pub trait PagedListing: Send + Sync {
    type Item: DisplayNamed + Send;

    /// What is being listed, for error messages (e.g. "Policy definition").
    fn label(&self) -> &'static str;

    /// Fetches the page at `cursor`, or the first page when `cursor` is `None`.
    async fn list_page(&self, cursor: Option<&str>) -> Result<Page<Self::Item>, LookupError>;
}

/// Errors from display-name lookups.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("{label} display name cannot be empty")]
    EmptyName { label: &'static str },

    #[error("{label} with display name '{name}' not found")]
    NotFound { label: &'static str, name: String },

    #[error("{label} display name '{name}' is ambiguous ({}). Use an explicit ID.", .ids.join(", "))]
    Ambiguous {
        label: &'static str,
        name: String,
        ids: Vec<String>,
    },

    #[error("{label} listing returned cursor '{cursor}' twice")]
    CursorCycle { label: &'static str, cursor: String },

    #[error("listing failed: {0}")]
    Listing(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl LookupError {
    /// Wraps an error raised while fetching a page.
    pub fn listing(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Listing(Box::new(err))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound { .. })
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, LookupError::Ambiguous { .. })
    }
}

/// Finds the single item whose display name is exactly `display_name`.
///
/// The name is compared as given, whitespace included; a blank name is
/// rejected without listing. A cursor that repeats fails with
/// [`LookupError::CursorCycle`] instead of being fetched again.
///
/// Zero matches fail with [`LookupError::NotFound`]; more than one fails with
/// [`LookupError::Ambiguous`] listing the matching IDs in sorted order.
pub async fn find_by_display_name<L>(
    listing: &L,
    display_name: &str,
) -> Result<L::Item, LookupError>
where
    L: PagedListing + ?Sized,
{
    let label = listing.label();
    if display_name.trim().is_empty() {
        return Err(LookupError::EmptyName { label });
    }

    let mut cursor: Option<String> = None;
    let mut seen: HashSet<String> = HashSet::new();
    let mut matches: Vec<L::Item> = Vec::new();
    let mut pages = 0usize;

    loop {
        let page = listing.list_page(cursor.as_deref()).await?;
        pages += 1;
        debug!(
            label,
            page = pages,
            items = page.items.len(),
            "Listed page"
        );

        matches.extend(
            page.items
                .into_iter()
                .filter(|item| item.display_name() == Some(display_name)),
        );

        match page.next_cursor {
            Some(next) if !seen.insert(next.clone()) => {
                return Err(LookupError::CursorCycle {
                    label,
                    cursor: next,
                });
            }
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    if matches.len() > 1 {
        let mut ids: Vec<String> = matches.iter().map(|item| item.id().to_string()).collect();
        ids.sort();
        return Err(LookupError::Ambiguous {
            label,
            name: display_name.to_string(),
            ids,
        });
    }

    matches.pop().ok_or_else(|| LookupError::NotFound {
        label,
        name: display_name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: String,
        display_name: Option<String>,
    }

    impl Item {
        fn new(id: &str, display_name: Option<&str>) -> Self {
            Self {
                id: id.to_string(),
                display_name: display_name.map(str::to_string),
            }
        }
    }

    impl DisplayNamed for Item {
        fn display_name(&self) -> Option<&str> {
            self.display_name.as_deref()
        }

        fn id(&self) -> &str {
            &self.id
        }
    }

    /// Serves pre-built pages; the cursor is the index of the next page.
    struct StaticListing {
        pages: Vec<Vec<Item>>,
        calls: AtomicUsize,
    }

    impl StaticListing {
        fn new(pages: Vec<Vec<Item>>) -> Self {
            Self {
                pages,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl PagedListing for StaticListing {
        type Item = Item;

        fn label(&self) -> &'static str {
            "Widget"
        }

        async fn list_page(&self, cursor: Option<&str>) -> Result<Page<Item>, LookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let index: usize = cursor.map_or(Ok(0), str::parse::<usize>).map_err(LookupError::listing)?;
            let items = self.pages.get(index).cloned().unwrap_or_default();
            let next_cursor = (index + 1 < self.pages.len()).then(|| (index + 1).to_string());
            Ok(Page { items, next_cursor })
        }
    }

    #[tokio::test]
    async fn test_single_match_across_pages() {
        let listing = StaticListing::new(vec![
            vec![Item::new("a", Some("Alpha")), Item::new("b", None)],
            vec![Item::new("c", Some("Gamma"))],
        ]);

        let found = find_by_display_name(&listing, "Gamma").await.unwrap();
        assert_eq!(found.id, "c");
        assert_eq!(listing.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_whitespace_is_part_of_the_name() {
        let listing = StaticListing::new(vec![vec![
            Item::new("a", Some(" Lead")),
            Item::new("b", Some("Gamma")),
        ]]);

        let found = find_by_display_name(&listing, " Lead").await.unwrap();
        assert_eq!(found.id, "a");

        let err = find_by_display_name(&listing, "Lead").await.unwrap_err();
        assert!(err.is_not_found());

        let err = find_by_display_name(&listing, "Gamma  ").await.unwrap_err();
        assert!(err.is_not_found());
    }

    /// Always points back at the same next page.
    struct LoopingListing {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl PagedListing for LoopingListing {
        type Item = Item;

        fn label(&self) -> &'static str {
            "Widget"
        }

        async fn list_page(&self, _cursor: Option<&str>) -> Result<Page<Item>, LookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Page {
                items: vec![Item::new("a", Some("Alpha"))],
                next_cursor: Some("same".to_string()),
            })
        }
    }

    #[tokio::test]
    async fn test_repeated_cursor_stops_paging() {
        let listing = LoopingListing {
            calls: AtomicUsize::new(0),
        };

        let err = find_by_display_name(&listing, "Alpha").await.unwrap_err();
        assert!(matches!(
            err,
            LookupError::CursorCycle { label: "Widget", ref cursor } if cursor == "same"
        ));
        assert_eq!(listing.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_not_found() {
        let listing = StaticListing::new(vec![vec![Item::new("a", Some("Alpha"))]]);

        let err = find_by_display_name(&listing, "alpha").await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "Widget with display name 'alpha' not found"
        );
    }

    #[tokio::test]
    async fn test_ambiguous() {
        let listing = StaticListing::new(vec![
            vec![Item::new("z", Some("Dup"))],
            vec![Item::new("m", Some("Dup"))],
        ]);

        let err = find_by_display_name(&listing, "Dup").await.unwrap_err();
        assert!(err.is_ambiguous());
        assert_eq!(
            err.to_string(),
            "Widget display name 'Dup' is ambiguous (m, z). Use an explicit ID."
        );
    }

    #[tokio::test]
    async fn test_empty_name_skips_listing() {
        let listing = StaticListing::new(vec![vec![Item::new("a", Some(""))]]);

        let err = find_by_display_name(&listing, "   ").await.unwrap_err();
        assert!(matches!(err, LookupError::EmptyName { label: "Widget" }));
        assert_eq!(listing.calls.load(Ordering::SeqCst), 0);
    }
}

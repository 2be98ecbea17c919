//! Derived, filtered and paginated views over a repository list.
//!
//! A [`RepoView`] is computed from (repository list, filter, page) on every
//! render and never stored.

mod filter;
mod pagination;

pub use filter::{Filter, FilterField, format_date};
pub use pagination::{DEFAULT_PAGE_SIZE, clamp_page, page_count, page_range};

use crate::config::ViewConfig;
use crate::github::Repository;

/// Repositories passing `filter`, in source order.
#[must_use]
pub fn filter_repos<'a>(
    repos: &'a [Repository],
    filter: &Filter,
    settings: &ViewConfig,
) -> Vec<&'a Repository> {
    repos
        .iter()
        .filter(|repo| filter.matches(repo, settings))
        .collect()
}

/// One render pass worth of derived data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoView<'a> {
    /// Rows on the current page.
    pub rows: Vec<&'a Repository>,
    /// Size of the filtered view before pagination.
    pub filtered_count: usize,
    /// Current page (1-based), as requested.
    pub page: usize,
    /// `ceil(filtered_count / page_size)`.
    pub page_count: usize,
    /// Rows per page.
    pub page_size: usize,
}

impl<'a> RepoView<'a> {
    /// Filter `repos`, then slice out `page`.
    ///
    /// `page` is used as given; callers clamp it beforehand.
    #[must_use]
    pub fn derive(
        repos: &'a [Repository],
        filter: &Filter,
        page: usize,
        settings: &ViewConfig,
    ) -> Self {
        let filtered = filter_repos(repos, filter, settings);
        let filtered_count = filtered.len();
        let range = page_range(page, settings.page_size, filtered_count);
        let rows = filtered[range].to_vec();

        Self {
            rows,
            filtered_count,
            page,
            page_count: page_count(filtered_count, settings.page_size),
            page_size: settings.page_size,
        }
    }

    /// Whether the current page has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Names of the rows on the current page.
    #[must_use]
    pub fn names(&self) -> Vec<&'a str> {
        self.rows.iter().map(|repo| repo.name.as_str()).collect()
    }
}

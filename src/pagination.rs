//! Windowed page lists for the template pager.
//!
//! Templates render `pages` directly: `Some(n)` is a clickable page number,
//! `None` is an ellipsis between the edge windows and the window around the
//! current page.

use serde::Serialize;

use crate::query::PagedResult;

fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total: usize, total_pages: usize) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };

        let pages = get_pages(total_pages, current_page, 2, 2, 4, 2);

        Self {
            items,
            pages,
            page: current_page,
            total,
        }
    }
}

impl<T> From<PagedResult<T>> for Paginated<T> {
    fn from(result: PagedResult<T>) -> Self {
        Self::new(result.items, result.page, result.total, result.total_pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_pages_for_empty_result() {
        let paginated = Paginated::<i32>::new(vec![], 1, 0, 0);
        assert!(paginated.pages.is_empty());
        assert_eq!(paginated.page, 1);
    }

    #[test]
    fn small_sets_list_every_page() {
        let paginated = Paginated::new(vec![1, 2, 3], 2, 9, 3);
        assert_eq!(paginated.pages, vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn large_sets_collapse_with_ellipsis() {
        let paginated = Paginated::new(vec![0; 12], 10, 240, 20);
        assert!(paginated.pages.contains(&None));
        assert_eq!(paginated.pages.first(), Some(&Some(1)));
        assert_eq!(paginated.pages.last(), Some(&Some(20)));
        assert!(paginated.pages.contains(&Some(10)));
    }
}

//! Page-number windows for list views.
//!
//! [`pagination_range`] turns `(total, current, size)` into at most `size`
//! tokens: the first and last page are always shown, the current page sits
//! in the middle of the window, and gaps collapse into `...`.

use std::fmt;
use std::ops::Range;

use serde::{Serialize, Serializer};
use tracing::debug;

/// One entry of a pager control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    Page(usize),
    Ellipsis,
}

impl PageToken {
    pub fn page(self) -> Option<usize> {
        match self {
            Self::Page(n) => Some(n),
            Self::Ellipsis => None,
        }
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(n) => write!(f, "{n}"),
            Self::Ellipsis => f.write_str("..."),
        }
    }
}

impl Serialize for PageToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Compute the page tokens to render for `current` out of `total` pages,
/// using at most `size` slots.
///
/// `current` is clamped into `1..=total`.
pub fn pagination_range(total: usize, current: usize, size: usize) -> Vec<PageToken> {
    if total <= size {
        return (1..=total).map(PageToken::Page).collect();
    }

    let clamped = current.clamp(1, total);
    if clamped != current {
        debug!(current, total, "current page out of range, clamping");
    }

    match size {
        0 => Vec::new(),
        1 => vec![PageToken::Page(clamped)],
        2 => vec![PageToken::Page(1), PageToken::Page(total)],
        _ => window(total, clamped, size),
    }
}

/// General case: `size >= 3` and `total > size`.
fn window(total: usize, current: usize, size: usize) -> Vec<PageToken> {
    let distance = size / 2;
    // Centre on `current`, then slide back inside `1..=total`.
    let start = current
        .saturating_sub(distance)
        .max(1)
        .min(total - size + 1);

    let mut tokens: Vec<PageToken> = (start..start + size).map(PageToken::Page).collect();
    let last = size - 1;

    if let Some(first) = tokens.first_mut() {
        *first = PageToken::Page(1);
    }
    if let Some(end) = tokens.last_mut() {
        *end = PageToken::Page(total);
    }

    // With three slots the second and penultimate slot coincide; it stays a
    // page if either edge keeps it.
    let keep = |index: usize, token: PageToken| {
        token == PageToken::Page(current)
            || (index == 1 && token == PageToken::Page(2))
            || (index == last - 1 && token == PageToken::Page(total - 1))
    };
    for index in [1, last - 1] {
        if let Some(token) = tokens.get_mut(index) {
            if !keep(index, *token) {
                *token = PageToken::Ellipsis;
            }
        }
    }

    tokens
}

/// Number of pages needed to show `items` entries, `per_page` at a time.
/// Always at least one, so an empty list still has a page to show.
pub fn page_count(items: usize, per_page: usize) -> usize {
    items.div_ceil(per_page.max(1)).max(1)
}

/// Index range of the 1-based `page` within a list of `items` entries.
/// Out-of-range pages are clamped to the nearest valid page.
pub fn page_bounds(items: usize, page: usize, per_page: usize) -> Range<usize> {
    let per_page = per_page.max(1);
    let page = page.clamp(1, page_count(items, per_page));
    let start = ((page - 1) * per_page).min(items);
    let end = (start + per_page).min(items);
    start..end
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn labels(total: usize, current: usize, size: usize) -> Vec<String> {
        pagination_range(total, current, size)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn centres_window_with_ellipses() {
        assert_eq!(
            labels(20, 10, 7),
            ["1", "...", "9", "10", "11", "...", "20"]
        );
    }

    #[test]
    fn even_window_near_start() {
        assert_eq!(labels(1000, 3, 4), ["1", "2", "3", "1000"]);
    }

    #[test]
    fn zero_size_is_empty() {
        assert!(labels(1, 2, 0).is_empty());
        assert!(labels(50, 7, 0).is_empty());
    }

    #[test]
    fn everything_fits() {
        assert_eq!(labels(5, 3, 7), ["1", "2", "3", "4", "5"]);
        assert_eq!(labels(7, 1, 7), ["1", "2", "3", "4", "5", "6", "7"]);
        assert!(labels(0, 1, 3).is_empty());
    }

    #[test]
    fn size_one_shows_current_only() {
        assert_eq!(labels(10, 4, 1), ["4"]);
    }

    #[test]
    fn size_two_shows_bounds() {
        assert_eq!(labels(10, 4, 2), ["1", "10"]);
    }

    #[test]
    fn size_three_shifts_against_either_edge() {
        assert_eq!(labels(10, 5, 3), ["1", "5", "10"]);
        assert_eq!(labels(10, 1, 3), ["1", "2", "10"]);
        assert_eq!(labels(10, 2, 3), ["1", "2", "10"]);
        assert_eq!(labels(10, 9, 3), ["1", "9", "10"]);
        assert_eq!(labels(10, 10, 3), ["1", "9", "10"]);
        assert_eq!(labels(4, 1, 3), ["1", "2", "4"]);
        assert_eq!(labels(4, 4, 3), ["1", "3", "4"]);
    }

    #[test]
    fn shifts_against_left_edge_without_ellipsis() {
        assert_eq!(labels(20, 1, 7), ["1", "2", "3", "4", "5", "...", "20"]);
        assert_eq!(labels(20, 4, 7), ["1", "2", "3", "4", "5", "...", "20"]);
    }

    #[test]
    fn shifts_against_right_edge_without_ellipsis() {
        assert_eq!(
            labels(20, 20, 7),
            ["1", "...", "16", "17", "18", "19", "20"]
        );
        assert_eq!(
            labels(20, 17, 7),
            ["1", "...", "16", "17", "18", "19", "20"]
        );
    }

    #[test]
    fn out_of_range_current_is_clamped() {
        assert_eq!(labels(20, 0, 7), labels(20, 1, 7));
        assert_eq!(labels(20, 99, 7), labels(20, 20, 7));
        assert_eq!(labels(10, 99, 1), ["10"]);
    }

    #[test]
    fn window_properties_hold() {
        for total in 1..=40 {
            for size in 2..=9 {
                for current in 1..=total {
                    let tokens = pagination_range(total, current, size);
                    if total <= size {
                        assert_eq!(tokens.len(), total);
                        continue;
                    }
                    let ctx = format!("total={total} current={current} size={size}");
                    assert_eq!(tokens.len(), size, "{ctx}");
                    assert_eq!(tokens.first(), Some(&PageToken::Page(1)), "{ctx}");
                    assert_eq!(tokens.last(), Some(&PageToken::Page(total)), "{ctx}");
                    if size >= 3 {
                        assert!(tokens.contains(&PageToken::Page(current)), "{ctx}");
                    }
                    // Pages ascend and every ellipsis hides at least one page.
                    let pages: Vec<usize> = tokens.iter().filter_map(|t| t.page()).collect();
                    assert!(pages.windows(2).all(|w| w[0] < w[1]), "{ctx}");
                    for (i, token) in tokens.iter().enumerate() {
                        if *token == PageToken::Ellipsis {
                            let before = tokens[i - 1].page().unwrap_or(0);
                            let after = tokens.get(i + 1).and_then(|t| t.page());
                            if let Some(after) = after {
                                assert!(after - before >= 2, "{ctx}");
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn tokens_serialize_as_strings() {
        let json = serde_json::to_string(&pagination_range(20, 10, 7)).unwrap_or_default();
        assert_eq!(json, r#"["1","...","9","10","11","...","20"]"#);
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0, 25), 1);
        assert_eq!(page_count(25, 25), 1);
        assert_eq!(page_count(26, 25), 2);
        assert_eq!(page_count(10, 0), 10);
    }

    #[test]
    fn page_bounds_clamp_to_list() {
        assert_eq!(page_bounds(60, 1, 25), 0..25);
        assert_eq!(page_bounds(60, 3, 25), 50..60);
        assert_eq!(page_bounds(60, 9, 25), 50..60);
        assert_eq!(page_bounds(60, 0, 25), 0..25);
        assert_eq!(page_bounds(0, 1, 25), 0..0);
    }
}

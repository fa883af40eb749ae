//! Offset/limit pagination.
//!
//! One windowing primitive shared by plain listing and by filtered result
//! sets, so both expose the identical contract: a slice of at most `limit`
//! items, the offset to resume from, and whether more items remain.

use serde::Serialize;

use crate::error::{NotekeepError, Result};
use crate::model::{PAGE_LIMIT_MAX, PAGE_LIMIT_MIN};

/// One window over a larger result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Offset to pass to the next call to continue the walk.
    pub next_offset: usize,
    pub has_more: bool,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            next_offset: self.next_offset,
            has_more: self.has_more,
        }
    }
}

/// Window `items` at `offset` with page size `limit`.
///
/// `limit` must be within `1..=20`. An offset at or past the end yields an
/// empty page with `has_more = false`; the returned `next_offset` never
/// moves backwards.
pub fn paginate<T: Clone>(items: &[T], offset: usize, limit: usize) -> Result<Page<T>> {
    if !(PAGE_LIMIT_MIN..=PAGE_LIMIT_MAX).contains(&limit) {
        return Err(NotekeepError::InvalidLimit(limit));
    }

    if offset >= items.len() {
        return Ok(Page {
            items: Vec::new(),
            next_offset: offset.max(items.len()),
            has_more: false,
        });
    }

    let end = (offset + limit).min(items.len());
    Ok(Page {
        items: items[offset..end].to_vec(),
        next_offset: end,
        has_more: end < items.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_fifteen_items_in_pages_of_five() {
        let items: Vec<u64> = (0..15).collect();

        let first = paginate(&items, 0, 5).unwrap();
        assert_eq!(first.items, vec![0, 1, 2, 3, 4]);
        assert_eq!(first.next_offset, 5);
        assert!(first.has_more);

        let second = paginate(&items, first.next_offset, 5).unwrap();
        assert_eq!(second.items, vec![5, 6, 7, 8, 9]);
        assert_eq!(second.next_offset, 10);
        assert!(second.has_more);

        let third = paginate(&items, second.next_offset, 5).unwrap();
        assert_eq!(third.items, vec![10, 11, 12, 13, 14]);
        assert_eq!(third.next_offset, 15);
        assert!(!third.has_more);
    }

    #[test]
    fn short_final_page() {
        let items: Vec<u64> = (0..7).collect();
        let page = paginate(&items, 5, 5).unwrap();
        assert_eq!(page.items, vec![5, 6]);
        assert_eq!(page.next_offset, 7);
        assert!(!page.has_more);
    }

    #[test]
    fn offset_past_end_is_empty() {
        let items: Vec<u64> = (0..3).collect();
        let page = paginate(&items, 10, 5).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.next_offset, 10);
        assert!(!page.has_more);
    }

    #[test]
    fn offset_at_end_is_empty() {
        let items: Vec<u64> = (0..3).collect();
        let page = paginate(&items, 3, 5).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.next_offset, 3);
        assert!(!page.has_more);
    }

    #[test]
    fn empty_input() {
        let items: Vec<u64> = Vec::new();
        let page = paginate(&items, 0, 1).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.next_offset, 0);
        assert!(!page.has_more);
    }

    #[test]
    fn rejects_out_of_range_limits() {
        let items: Vec<u64> = (0..3).collect();
        assert!(matches!(
            paginate(&items, 0, 0),
            Err(NotekeepError::InvalidLimit(0))
        ));
        assert!(matches!(
            paginate(&items, 0, 21),
            Err(NotekeepError::InvalidLimit(21))
        ));
        assert!(paginate(&items, 0, 20).is_ok());
    }

    #[test]
    fn map_preserves_window_shape() {
        let items: Vec<u64> = (0..4).collect();
        let page = paginate(&items, 0, 2).unwrap().map(|n| n * 10);
        assert_eq!(page.items, vec![0, 10]);
        assert_eq!(page.next_offset, 2);
        assert!(page.has_more);
    }
}

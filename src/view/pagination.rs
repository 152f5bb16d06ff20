/// Half-open slice `[page * size, page * size + size)` of `items`, clamped to its length.
/// A page past the end yields an empty slice.
pub fn page_slice<T>(items: &[T], page: usize, size: usize) -> &[T] {
    let start = page.saturating_mul(size).min(items.len());
    let end = start.saturating_add(size).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_takes_size_items() {
        let items: Vec<u32> = (0..25).collect();
        assert_eq!(page_slice(&items, 0, 10), &items[0..10]);
    }

    #[test]
    fn last_page_is_partial() {
        let items: Vec<u32> = (0..25).collect();
        assert_eq!(page_slice(&items, 2, 10), &[20, 21, 22, 23, 24]);
    }

    #[test]
    fn overrun_page_is_empty() {
        let items: Vec<u32> = (0..25).collect();
        assert!(page_slice(&items, 3, 10).is_empty());
        assert!(page_slice(&items, usize::MAX, 10).is_empty());
    }

    #[test]
    fn empty_items_give_empty_page() {
        let items: Vec<u32> = Vec::new();
        assert!(page_slice(&items, 0, 10).is_empty());
    }
}

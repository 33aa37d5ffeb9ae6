use std::cmp::Reverse;

/// Stable sort descending by `key`, then keep the first `limit` items.
///
/// Items with equal keys keep their original relative order.
pub fn top_n_by<T, K, F>(mut items: Vec<T>, limit: usize, key: F) -> Vec<T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    items.sort_by_key(|item| Reverse(key(item)));
    items.truncate(limit);
    items
}

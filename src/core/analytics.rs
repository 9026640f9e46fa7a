use std::collections::HashMap;

use crate::models::GroupCount;

/// Group items by a key and count each group
///
/// Recomputed on every call over the provided snapshot; output order is
/// deterministic (count descending, then key ascending) so repeated calls
/// over unchanged data compare equal.
pub fn count_by<T, F>(items: &[T], key_fn: F) -> Vec<GroupCount>
where
    F: Fn(&T) -> &str,
{
    let mut counts: HashMap<&str, i64> = HashMap::new();
    for item in items {
        *counts.entry(key_fn(item)).or_insert(0) += 1;
    }

    let mut groups: Vec<GroupCount> = counts
        .into_iter()
        .map(|(key, count)| GroupCount {
            key: key.to_string(),
            count,
        })
        .collect();

    groups.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));
    groups
}

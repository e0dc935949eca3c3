use std::collections::HashSet;

/// Keeps the first occurrence of each string, in input order. Equality is exact.
pub fn dedup_first_seen<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

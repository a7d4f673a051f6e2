//! First-encounter-ordered grouping.
//!
//! Partitioning with a plain `HashMap` loses the order keys first appear in,
//! and a `BTreeMap` substitutes sort order. Chart output needs neither: a
//! category axis lays bands out in the order categories first occur in the
//! data. [`OrderedGroups`] keeps hashed lookup and first-encounter iteration
//! order at the same time.

use std::{borrow::Borrow, collections::HashMap, hash::Hash};

use crate::record::{FieldError, Record};

/// A mapping from key to the values filed under it, iterating keys in
/// first-encounter order.
///
/// # Examples
///
/// ```
/// use vizprep_data::group::OrderedGroups;
///
/// let items = [("fruit", "apple"), ("veg", "carrot"), ("fruit", "pear")];
/// let groups = OrderedGroups::collect(items, |(kind, _)| *kind);
///
/// let kinds: Vec<_> = groups.keys().copied().collect();
/// assert_eq!(kinds, ["fruit", "veg"]);
/// assert_eq!(
///     groups.get("fruit"),
///     Some(&[("fruit", "apple"), ("fruit", "pear")][..])
/// );
/// ```
#[derive(Debug, Clone)]
pub struct OrderedGroups<K, V> {
    /// Groups in first-encounter order of their keys.
    groups: Vec<(K, Vec<V>)>,
    /// Position of each key within `groups`.
    index: HashMap<K, usize>,
}

impl<K, V> OrderedGroups<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty grouping.
    #[must_use]
    pub fn new() -> Self {
        Self {
            groups: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Partitions `items` by the key the closure derives from each item.
    #[must_use]
    pub fn collect<I, F>(items: I, mut key_fn: F) -> Self
    where
        I: IntoIterator<Item = V>,
        F: FnMut(&V) -> K,
    {
        let mut groups = Self::new();
        for item in items {
            let key = key_fn(&item);
            groups.push(key, item);
        }
        groups
    }

    /// Files `value` under `key`, creating the group on first encounter.
    pub fn push(&mut self, key: K, value: V) {
        if let Some(&position) = self.index.get(&key) {
            self.groups[position].1.push(value);
        } else {
            self.index.insert(key.clone(), self.groups.len());
            self.groups.push((key, vec![value]));
        }
    }

    /// Returns the values filed under `key`, or `None` for an unknown key.
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&[V]>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index
            .get(key)
            .map(|&position| self.groups[position].1.as_slice())
    }

    /// Returns the keys in first-encounter order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.groups.iter().map(|(key, _)| key)
    }

    /// Iterates over `(key, values)` pairs in first-encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[V])> {
        self.groups
            .iter()
            .map(|(key, values)| (key, values.as_slice()))
    }

    /// Returns the number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if no values have been filed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<K, V> Default for OrderedGroups<K, V>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> IntoIterator for OrderedGroups<K, V> {
    type Item = (K, Vec<V>);
    type IntoIter = std::vec::IntoIter<(K, Vec<V>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Partitions records by the text value of `field`.
///
/// Groups come back in first-encounter order of the key values, and records
/// within each group keep their input order.
///
/// # Errors
///
/// Fails with a [`FieldError`] on the first record where `field` is absent
/// or holds a number instead of text.
///
/// # Examples
///
/// ```
/// use vizprep_data::{group::group_by_field, record::Record};
///
/// let records = vec![
///     Record::new().with_field("Platform", "TikTok"),
///     Record::new().with_field("Platform", "Twitter"),
///     Record::new().with_field("Platform", "TikTok"),
/// ];
///
/// let groups = group_by_field(&records, "Platform")?;
/// let platforms: Vec<_> = groups.keys().cloned().collect();
/// assert_eq!(platforms, ["TikTok", "Twitter"]);
/// assert_eq!(groups.get("TikTok").map(|records| records.len()), Some(2));
/// # Ok::<_, vizprep_data::record::FieldError>(())
/// ```
pub fn group_by_field<'a, I>(
    records: I,
    field: &str,
) -> Result<OrderedGroups<String, &'a Record>, FieldError>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut groups = OrderedGroups::new();
    for record in records {
        let key = record.text(field)?;
        groups.push(key.to_owned(), record);
    }
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform_records() -> Vec<Record> {
        [
            ("Twitter", 278.0),
            ("TikTok", 431.0),
            ("Instagram", 399.0),
            ("TikTok", 120.0),
            ("Twitter", 95.0),
        ]
        .into_iter()
        .map(|(platform, likes)| {
            Record::new()
                .with_field("Platform", platform)
                .with_field("Likes", likes)
        })
        .collect()
    }

    #[test]
    fn test_keys_follow_first_encounter_order() {
        let records = platform_records();
        let groups = group_by_field(&records, "Platform").unwrap();
        let keys: Vec<_> = groups.keys().cloned().collect();
        // Not alphabetical: the order platforms first occur in the input
        assert_eq!(keys, ["Twitter", "TikTok", "Instagram"]);
    }

    #[test]
    fn test_values_keep_input_order_within_group() {
        let records = platform_records();
        let groups = group_by_field(&records, "Platform").unwrap();
        let likes: Vec<f64> = groups
            .get("Twitter")
            .unwrap()
            .iter()
            .map(|record| record.number("Likes").unwrap())
            .collect();
        assert_eq!(likes, [278.0, 95.0]);
    }

    #[test]
    fn test_get_unknown_key() {
        let records = platform_records();
        let groups = group_by_field(&records, "Platform").unwrap();
        assert_eq!(groups.get("Facebook"), None);
    }

    #[test]
    fn test_missing_field_fails() {
        let records = vec![Record::new().with_field("Likes", 1.0)];
        let err = group_by_field(&records, "Platform").unwrap_err();
        assert!(matches!(err, FieldError::Missing { field } if field == "Platform"));
    }

    #[test]
    fn test_numeric_key_field_fails() {
        let records = vec![Record::new().with_field("Platform", 3.0)];
        let err = group_by_field(&records, "Platform").unwrap_err();
        assert!(matches!(err, FieldError::NotText { field } if field == "Platform"));
    }

    #[test]
    fn test_empty_input_gives_empty_groups() {
        let records: Vec<Record> = Vec::new();
        let groups = group_by_field(&records, "Platform").unwrap();
        assert!(groups.is_empty());
        assert_eq!(groups.len(), 0);
    }

    #[test]
    fn test_into_iter_moves_groups_out_in_order() {
        let mut groups = OrderedGroups::new();
        groups.push("b", 1);
        groups.push("a", 2);
        groups.push("b", 3);
        let collected: Vec<_> = groups.into_iter().collect();
        assert_eq!(collected, [("b", vec![1, 3]), ("a", vec![2])]);
    }
}

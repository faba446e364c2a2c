//! Insertion-ordered set

use std::collections::HashSet;
use std::hash::Hash;

/// A set that remembers the order in which values were first inserted.
///
/// Used to aggregate projects and tags in first-seen order.
#[derive(Debug, Clone)]
pub struct OrderedSet<T> {
    items: Vec<T>,
    seen: HashSet<T>,
}

impl<T: Eq + Hash + Clone> OrderedSet<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Insert `value` unless already present. Returns `true` if it was added.
    pub fn insert(&mut self, value: T) -> bool {
        if self.seen.contains(&value) {
            return false;
        }
        self.seen.insert(value.clone());
        self.items.push(value);
        true
    }

    pub fn contains(&self, value: &T) -> bool {
        self.seen.contains(value)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: Eq + Hash + Clone> Default for OrderedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + Clone> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Eq + Hash + Clone> Extend<T> for OrderedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> IntoIterator for OrderedSet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_first_seen_order() {
        let set: OrderedSet<&str> = ["b", "a", "b", "c", "a"].into_iter().collect();
        assert_eq!(set.into_vec(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_insert_reports_novelty() {
        let mut set = OrderedSet::new();
        assert!(set.insert("x".to_string()));
        assert!(!set.insert("x".to_string()));
        assert!(set.contains(&"x".to_string()));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_empty() {
        let set: OrderedSet<String> = OrderedSet::default();
        assert!(set.is_empty());
        assert!(set.into_vec().is_empty());
    }
}

use std::collections::HashSet;
use std::fmt;

use crate::domain::{BlogPost, PortfolioProject, Service, Skill};
use crate::error::DomainError;

/// Which collection of the content store a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Blog,
    Portfolio,
    Service,
    Skill,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Blog => "blog post",
            ContentKind::Portfolio => "portfolio project",
            ContentKind::Service => "service",
            ContentKind::Skill => "skill",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record addressable by integer id within its collection.
pub trait Record {
    const KIND: ContentKind;

    fn id(&self) -> i32;
}

impl Record for BlogPost {
    const KIND: ContentKind = ContentKind::Blog;

    fn id(&self) -> i32 {
        self.id
    }
}

impl Record for PortfolioProject {
    const KIND: ContentKind = ContentKind::Portfolio;

    fn id(&self) -> i32 {
        self.id
    }
}

impl Record for Service {
    const KIND: ContentKind = ContentKind::Service;

    fn id(&self) -> i32 {
        self.id
    }
}

impl Record for Skill {
    const KIND: ContentKind = ContentKind::Skill;

    fn id(&self) -> i32 {
        self.id
    }
}

impl Record for crate::domain::BlogEntry {
    const KIND: ContentKind = ContentKind::Blog;

    fn id(&self) -> i32 {
        self.id
    }
}

/// Records in stable insertion order with unique ids.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T: Record> Collection<T> {
    /// Fails when two records share an id.
    pub fn new(items: Vec<T>) -> Result<Self, DomainError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id()) {
                return Err(DomainError::Catalog(format!(
                    "duplicate {} id {}",
                    T::KIND,
                    item.id()
                )));
            }
        }
        Ok(Self { items })
    }

    /// Caller guarantees unique ids (derived from an already validated collection).
    pub(crate) fn from_ordered(items: Vec<T>) -> Self {
        Self { items }
    }

    /// All records in stable order.
    pub fn get_all(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Exact lookup.
    pub fn get(&self, id: i32) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Lookup-with-fallback: the record with `id`, else the first record.
    ///
    /// `None` only when the collection is empty.
    pub fn get_or_first(&self, id: i32) -> Option<&T> {
        match self.get(id) {
            Some(item) => Some(item),
            None => {
                tracing::debug!(kind = %T::KIND, id, "unknown id, falling back to first record");
                self.first()
            }
        }
    }

    /// [`get_or_first`](Self::get_or_first) for a raw path segment; anything
    /// that is not an integer falls back to the first record.
    pub fn resolve(&self, raw_id: &str) -> Option<&T> {
        match raw_id.trim().parse::<i32>() {
            Ok(id) => self.get_or_first(id),
            Err(_) => {
                tracing::debug!(kind = %T::KIND, raw_id, "non-numeric id, falling back to first record");
                self.first()
            }
        }
    }

    /// The first `n` records.
    pub fn take(&self, n: usize) -> &[T] {
        &self.items[..n.min(self.items.len())]
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::fixtures::service;

    fn services(ids: &[i32]) -> Collection<Service> {
        Collection::new(ids.iter().map(|&id| service(id, &format!("S{id}"), id)).collect()).unwrap()
    }

    #[test]
    fn present_ids_return_their_record() {
        let store = services(&[1, 2, 3]);
        for id in [1, 2, 3] {
            assert_eq!(store.get_or_first(id).unwrap().id, id);
        }
    }

    #[test]
    fn absent_ids_fall_back_to_first_record() {
        let store = services(&[4, 2, 9]);
        for id in [0, -1, 1, 3, 99, i32::MAX] {
            assert_eq!(store.get_or_first(id).unwrap().id, 4, "id {id}");
        }
    }

    #[test]
    fn non_numeric_ids_fall_back_to_first_record() {
        let store = services(&[1, 2, 3]);
        assert_eq!(store.resolve("2").unwrap().id, 2);
        assert_eq!(store.resolve(" 3 ").unwrap().id, 3);
        assert_eq!(store.resolve("abc").unwrap().id, 1);
        assert_eq!(store.resolve("").unwrap().id, 1);
        assert_eq!(store.resolve("99999999999").unwrap().id, 1);
    }

    #[test]
    fn empty_store_signals_missing_record() {
        let store = services(&[]);
        assert!(store.get_or_first(1).is_none());
        assert!(store.resolve("1").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn keeps_insertion_order() {
        let store = services(&[3, 1, 2]);
        let ids: Vec<_> = store.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(store.take(2).len(), 2);
        assert_eq!(store.take(10).len(), 3);
    }
}

//! Synchronizers built from injected closures.
//!
//! Instead of a [`Relation`] impl per relationship, callers pass a key
//! extractor (and optionally a [`KeyComparer`]) at construction time:
//!
//! ```
//! use entysync_core::{CaseInsensitive, EntityKeySynchronizer};
//!
//! struct Customer {
//!     code: String,
//! }
//!
//! let acme = Customer { code: "ACME".to_string() };
//! let mut customer =
//!     EntityKeySynchronizer::with_comparer(|c: &Customer| c.code.clone(), CaseInsensitive);
//! customer.link(&acme);
//! customer.set_key("acme".to_string());
//! assert!(customer.is_linked());
//! assert_eq!(customer.key(), "ACME");
//! ```

use std::sync::Arc;

use crate::error::{SyncError, SyncResult};
use crate::id_sync::IdSynchronizer;
use crate::relation::{IdRelation, KeyComparer, NaturalEq, Relation};
use crate::synchronizer::KeySynchronizer;

/// Shared key-extraction function.
pub type Extractor<E, K> = Arc<dyn Fn(&E) -> K + Send + Sync>;

/// A [`Relation`] made of an extractor closure and a comparer.
pub struct Extracted<E, K, C = NaturalEq> {
    extractor: Extractor<E, K>,
    comparer: C,
}

impl<E, K, C> Extracted<E, K, C> {
    pub fn new(extractor: Extractor<E, K>, comparer: C) -> Self {
        Self {
            extractor,
            comparer,
        }
    }
}

impl<E, K, C: Clone> Clone for Extracted<E, K, C> {
    fn clone(&self) -> Self {
        Self {
            extractor: Arc::clone(&self.extractor),
            comparer: self.comparer.clone(),
        }
    }
}

impl<E, K, C> Relation for Extracted<E, K, C>
where
    K: Clone + Default + PartialEq,
    C: KeyComparer<K>,
{
    type Entity = E;
    type Key = K;

    fn key_of(&self, entity: &E) -> K {
        (self.extractor)(entity)
    }

    fn keys_equal(&self, a: &K, b: &K) -> bool {
        self.comparer.keys_equal(a, b)
    }
}

impl<E, I> IdRelation for Extracted<E, I, NaturalEq> where I: Copy + Default + PartialEq {}

/// Key synchronizer whose relation is an injected extractor.
pub type EntityKeySynchronizer<'a, E, K, C = NaturalEq> = KeySynchronizer<'a, Extracted<E, K, C>>;

/// Id synchronizer whose relation is an injected extractor.
///
/// Ids always compare with `PartialEq` and use `I::default()` as the sentinel.
pub type EntityIdSynchronizer<'a, E, I> = IdSynchronizer<'a, Extracted<E, I>>;

impl<'a, E, K> KeySynchronizer<'a, Extracted<E, K>>
where
    K: Clone + Default + PartialEq,
{
    /// Create a key synchronizer comparing keys with `PartialEq`.
    pub fn from_fn<F>(extractor: F) -> Self
    where
        F: Fn(&E) -> K + Send + Sync + 'static,
    {
        Self::with_comparer(extractor, NaturalEq)
    }

    pub fn builder() -> KeySynchronizerBuilder<E, K> {
        KeySynchronizerBuilder::new()
    }
}

impl<'a, E, K, C> KeySynchronizer<'a, Extracted<E, K, C>>
where
    K: Clone + Default + PartialEq,
    C: KeyComparer<K>,
{
    pub fn with_comparer<F>(extractor: F, comparer: C) -> Self
    where
        F: Fn(&E) -> K + Send + Sync + 'static,
    {
        let extractor: Extractor<E, K> = Arc::new(extractor);
        KeySynchronizer::new(Extracted::new(extractor, comparer))
    }
}

impl<'a, E, I> IdSynchronizer<'a, Extracted<E, I>>
where
    I: Copy + Default + PartialEq,
{
    pub fn from_fn<F>(extractor: F) -> Self
    where
        F: Fn(&E) -> I + Send + Sync + 'static,
    {
        let extractor: Extractor<E, I> = Arc::new(extractor);
        IdSynchronizer::new(Extracted::new(extractor, NaturalEq))
    }

    pub fn builder() -> IdSynchronizerBuilder<E, I> {
        IdSynchronizerBuilder::new()
    }
}

/// Builder for [`EntityKeySynchronizer`]; the extractor is required.
pub struct KeySynchronizerBuilder<E, K, C = NaturalEq> {
    extractor: Option<Extractor<E, K>>,
    comparer: C,
}

impl<E, K> KeySynchronizerBuilder<E, K> {
    pub fn new() -> Self {
        Self {
            extractor: None,
            comparer: NaturalEq,
        }
    }
}

impl<E, K> Default for KeySynchronizerBuilder<E, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, K, C> KeySynchronizerBuilder<E, K, C>
where
    K: Clone + Default + PartialEq,
    C: KeyComparer<K>,
{
    pub fn extractor<F>(mut self, extractor: F) -> Self
    where
        F: Fn(&E) -> K + Send + Sync + 'static,
    {
        let extractor: Extractor<E, K> = Arc::new(extractor);
        self.extractor = Some(extractor);
        self
    }

    /// Accepts an already shared extractor, or `None`.
    pub fn shared_extractor(mut self, extractor: Option<Extractor<E, K>>) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn comparer<D: KeyComparer<K>>(self, comparer: D) -> KeySynchronizerBuilder<E, K, D> {
        KeySynchronizerBuilder {
            extractor: self.extractor,
            comparer,
        }
    }

    pub fn build<'a>(self) -> SyncResult<EntityKeySynchronizer<'a, E, K, C>> {
        let extractor = self
            .extractor
            .ok_or_else(|| SyncError::invalid_argument("entity_key_extractor is required"))?;
        Ok(KeySynchronizer::new(Extracted::new(extractor, self.comparer)))
    }
}

/// Builder for [`EntityIdSynchronizer`]; the extractor is required.
pub struct IdSynchronizerBuilder<E, I> {
    extractor: Option<Extractor<E, I>>,
}

impl<E, I> IdSynchronizerBuilder<E, I> {
    pub fn new() -> Self {
        Self { extractor: None }
    }
}

impl<E, I> Default for IdSynchronizerBuilder<E, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, I> IdSynchronizerBuilder<E, I>
where
    I: Copy + Default + PartialEq,
{
    pub fn extractor<F>(mut self, extractor: F) -> Self
    where
        F: Fn(&E) -> I + Send + Sync + 'static,
    {
        let extractor: Extractor<E, I> = Arc::new(extractor);
        self.extractor = Some(extractor);
        self
    }

    pub fn shared_extractor(mut self, extractor: Option<Extractor<E, I>>) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn build<'a>(self) -> SyncResult<EntityIdSynchronizer<'a, E, I>> {
        let extractor = self
            .extractor
            .ok_or_else(|| SyncError::invalid_argument("entity_id_extractor is required"))?;
        Ok(IdSynchronizer::new(Extracted::new(extractor, NaturalEq)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relation::CaseInsensitive;

    struct Person {
        id: i32,
        name: String,
    }

    fn bob() -> Person {
        Person {
            id: 1,
            name: "Bob".to_string(),
        }
    }

    #[test]
    fn key_builder_without_extractor_is_rejected() {
        let builder: KeySynchronizerBuilder<Person, i32> = EntityKeySynchronizer::builder();
        let err = builder.build().unwrap_err();
        match err {
            SyncError::InvalidArgument(msg) if msg.contains("entity_key_extractor") => {}
            other => panic!("expected invalid argument, got {other:?}"),
        }
    }

    #[test]
    fn key_builder_with_absent_shared_extractor_is_rejected() {
        let builder: KeySynchronizerBuilder<Person, String> = EntityKeySynchronizer::builder();
        let result = builder
            .shared_extractor(None)
            .comparer(CaseInsensitive)
            .build();
        assert!(matches!(result, Err(SyncError::InvalidArgument(_))));
    }

    #[test]
    fn id_builder_without_extractor_is_rejected() {
        let err = EntityIdSynchronizer::<Person, i32>::builder()
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            SyncError::invalid_argument("entity_id_extractor is required")
        );
    }

    #[test]
    fn id_set_entity_then_id_matches() {
        let bob = bob();
        let mut s = EntityIdSynchronizer::from_fn(|p: &Person| p.id);
        s.link(&bob);
        s.set_id(1);

        assert!(s.entity().is_some_and(|e| core::ptr::eq(e, &bob)));
        assert_eq!(s.id(), 1);
        assert_eq!(s.id_or_none(), Some(1));
        assert_eq!(s.key(), 1);
    }

    #[test]
    fn id_set_entity_then_id_does_not_match() {
        let bob = bob();
        let mut s = EntityIdSynchronizer::builder()
            .extractor(|p: &Person| p.id)
            .build()
            .unwrap();
        s.link(&bob);
        s.set_id(2);

        assert_eq!(s.id(), 2);
        assert_eq!(s.id_or_none(), Some(2));
        assert!(s.entity().is_none());
    }

    #[test]
    fn key_set_entity_then_key_matches() {
        let bob = bob();
        let mut s = EntityKeySynchronizer::from_fn(|p: &Person| p.name.clone());
        s.link(&bob);
        s.set_key("Bob".to_string());

        assert!(s.entity().is_some_and(|e| core::ptr::eq(e, &bob)));
        assert_eq!(s.key(), "Bob");
    }

    #[test]
    fn key_set_entity_then_key_does_not_match() {
        let bob = bob();
        let mut s = EntityKeySynchronizer::from_fn(|p: &Person| p.name.clone());
        s.link(&bob);
        s.set_key("Robert".to_string());

        assert_eq!(s.key(), "Robert");
        assert!(s.entity().is_none());
    }

    #[test]
    fn key_different_case_default_comparer() {
        let bob = bob();
        let mut s = EntityKeySynchronizer::builder()
            .extractor(|p: &Person| p.name.clone())
            .build()
            .unwrap();
        s.link(&bob);
        s.set_key("bob".to_string());

        assert_eq!(s.key(), "bob");
        assert!(s.entity().is_none());
    }

    #[test]
    fn key_different_case_case_insensitive_comparer() {
        let bob = bob();
        let mut s = EntityKeySynchronizer::builder()
            .extractor(|p: &Person| p.name.clone())
            .comparer(CaseInsensitive)
            .build()
            .unwrap();
        s.link(&bob);
        s.set_key("bob".to_string());

        assert!(s.entity().is_some_and(|e| core::ptr::eq(e, &bob)));
        assert_eq!(s.key(), "Bob");
    }

    #[test]
    fn closure_comparer() {
        let bob = bob();
        let mut s = EntityKeySynchronizer::with_comparer(
            |p: &Person| p.name.clone(),
            |a: &String, b: &String| a.trim() == b.trim(),
        );
        s.link(&bob);
        s.set_key(" Bob ".to_string());

        assert!(s.is_linked());
        assert_eq!(s.key(), "Bob");
    }

    #[test]
    fn clones_share_the_extractor() {
        let bob = bob();
        let s = EntityKeySynchronizer::from_fn(|p: &Person| p.name.clone());
        let mut copy = s.clone();
        copy.link(&bob);

        assert_eq!(copy.key(), "Bob");
        assert!(s.entity().is_none());
    }
}

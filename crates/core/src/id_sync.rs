//! Id synchronizer: a key synchronizer over non-nullable scalar ids.
//!
//! Foreign keys are often optional while the stored id is a plain scalar with
//! a reserved sentinel. [`IdSynchronizer::id_or_none`] maps between the two.

use crate::detached::Detached;
use crate::relation::IdRelation;
use crate::synchronizer::{KeySynchronizer, SyncState};

/// Keeps an id and an optional related-entity reference consistent.
#[derive(Clone)]
pub struct IdSynchronizer<'a, R: IdRelation> {
    inner: KeySynchronizer<'a, R>,
}

impl<'a, R: IdRelation> IdSynchronizer<'a, R> {
    /// Create an empty synchronizer whose id is the relation's sentinel.
    pub fn new(relation: R) -> Self {
        let sentinel = relation.sentinel();
        Self {
            inner: KeySynchronizer::with_key(relation, sentinel),
        }
    }

    pub(crate) fn from_key_synchronizer(inner: KeySynchronizer<'a, R>) -> Self {
        Self { inner }
    }

    /// The underlying key synchronizer.
    pub fn as_key_synchronizer(&self) -> &KeySynchronizer<'a, R> {
        &self.inner
    }

    /// The relation this synchronizer extracts and compares ids with.
    pub fn relation(&self) -> &R {
        self.inner.relation()
    }

    /// The id that stands for "no id".
    pub fn sentinel(&self) -> R::Key {
        self.inner.relation().sentinel()
    }

    /// The linked entity, if any.
    pub fn entity(&self) -> Option<&'a R::Entity> {
        self.inner.entity()
    }

    /// See [`KeySynchronizer::set_entity`].
    pub fn set_entity(&mut self, entity: Option<&'a R::Entity>) {
        self.inner.set_entity(entity);
    }

    /// Shorthand for `set_entity(Some(entity))`.
    pub fn link(&mut self, entity: &'a R::Entity) {
        self.inner.link(entity);
    }

    /// Shorthand for `set_entity(None)`.
    pub fn unlink(&mut self) {
        self.inner.unlink();
    }

    /// See [`KeySynchronizer::key`].
    pub fn key(&self) -> R::Key {
        self.inner.key()
    }

    /// See [`KeySynchronizer::set_key`].
    pub fn set_key(&mut self, key: R::Key) {
        self.inner.set_key(key);
    }

    /// Alias for [`key`](Self::key).
    pub fn id(&self) -> R::Key {
        self.inner.key()
    }

    /// Alias for [`set_key`](Self::set_key).
    pub fn set_id(&mut self, id: R::Key) {
        self.inner.set_key(id);
    }

    /// The id, or `None` when it equals the sentinel.
    pub fn id_or_none(&self) -> Option<R::Key> {
        let id = self.inner.key();
        if self.inner.relation().keys_equal(&id, &self.sentinel()) {
            None
        } else {
            Some(id)
        }
    }

    /// Set the id; `None` stores the sentinel.
    pub fn set_id_or_none(&mut self, id: Option<R::Key>) {
        let id = id.unwrap_or_else(|| self.sentinel());
        self.inner.set_key(id);
    }

    /// Whether an entity is currently linked.
    pub fn is_linked(&self) -> bool {
        self.inner.is_linked()
    }

    /// `Empty` here means the cached id is the sentinel.
    pub fn state(&self) -> SyncState {
        self.inner.state_against(&self.sentinel())
    }

    /// Owned copy of the state, with the linked entity cloned.
    pub fn detach(&self) -> Detached<R::Entity, R::Key>
    where
        R::Entity: Clone,
    {
        self.inner.detach()
    }
}

impl<R: IdRelation + Default> Default for IdSynchronizer<'_, R> {
    fn default() -> Self {
        Self::new(R::default())
    }
}

impl<R> core::fmt::Debug for IdSynchronizer<'_, R>
where
    R: IdRelation,
    R::Key: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IdSynchronizer")
            .field("state", &self.state())
            .field("id", &self.id_or_none())
            .finish()
    }
}

//! The generic key/entity synchronizer.
//!
//! Invariant: while an entity is linked, [`KeySynchronizer::key`] is the key
//! extracted from that entity, recomputed on every read. The cached key is only
//! authoritative while no entity is linked.

use core::ptr;

use crate::detached::Detached;
use crate::relation::Relation;

/// Observable state of a synchronizer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SyncState {
    /// No entity, and the cached key is the empty value.
    Empty,
    /// No entity, and the cached key was set explicitly.
    KeyOnly,
    /// An entity is linked; the key is derived from it.
    Linked,
}

/// Keeps a key and an optional related-entity reference consistent.
///
/// The entity is borrowed, never owned: whoever allocated the entity graph
/// controls its lifetime, and dropping the synchronizer has no effect on it.
pub struct KeySynchronizer<'a, R: Relation> {
    relation: R,
    entity: Option<&'a R::Entity>,
    key: R::Key,
}

impl<'a, R: Relation> KeySynchronizer<'a, R> {
    /// Create an empty synchronizer (no entity, default key).
    pub fn new(relation: R) -> Self {
        Self::with_key(relation, R::Key::default())
    }

    pub(crate) fn with_key(relation: R, key: R::Key) -> Self {
        Self {
            relation,
            entity: None,
            key,
        }
    }

    pub(crate) fn from_parts(relation: R, entity: Option<&'a R::Entity>, key: R::Key) -> Self {
        Self {
            relation,
            entity,
            key,
        }
    }

    /// The relation this synchronizer extracts and compares keys with.
    pub fn relation(&self) -> &R {
        &self.relation
    }

    /// The linked entity, if any.
    pub fn entity(&self) -> Option<&'a R::Entity> {
        self.entity
    }

    /// Link or unlink the related entity.
    ///
    /// - The same reference as the current one is a no-op.
    /// - Linking an entity discards the cached key; the key is now derived.
    /// - Unlinking snapshots the previous entity's key first, so `key()` keeps
    ///   returning the same value after the link is gone.
    pub fn set_entity(&mut self, entity: Option<&'a R::Entity>) {
        if same_entity(self.entity, entity) {
            return;
        }

        let previous = core::mem::replace(&mut self.entity, entity);
        match (entity, previous) {
            (Some(_), _) => {
                self.key = R::Key::default();
                tracing::trace!(relation = core::any::type_name::<R>(), "entity linked");
            }
            (None, Some(previous)) => {
                self.key = self.relation.key_of(previous);
                tracing::trace!(
                    relation = core::any::type_name::<R>(),
                    "entity unlinked; key snapshotted"
                );
            }
            (None, None) => {}
        }
    }

    /// Shorthand for `set_entity(Some(entity))`.
    pub fn link(&mut self, entity: &'a R::Entity) {
        self.set_entity(Some(entity));
    }

    /// Shorthand for `set_entity(None)`.
    pub fn unlink(&mut self) {
        self.set_entity(None);
    }

    /// The current key: derived from the linked entity, else the cached key.
    ///
    /// Changes to the linked entity's key field made elsewhere are visible on
    /// the next read.
    pub fn key(&self) -> R::Key {
        match self.entity {
            Some(entity) => self.relation.key_of(entity),
            None => self.key.clone(),
        }
    }

    /// Set the key, severing the entity link if the key disagrees with it.
    ///
    /// The key is cached even when the link survives.
    pub fn set_key(&mut self, key: R::Key) {
        if let Some(entity) = self.entity {
            if !self.relation.keys_equal(&self.relation.key_of(entity), &key) {
                self.entity = None;
                tracing::trace!(
                    relation = core::any::type_name::<R>(),
                    "entity link severed by mismatching key"
                );
            }
        }
        self.key = key;
    }

    /// Whether an entity is currently linked.
    pub fn is_linked(&self) -> bool {
        self.entity.is_some()
    }

    /// `Empty` means the cached key equals `R::Key::default()`.
    pub fn state(&self) -> SyncState {
        self.state_against(&R::Key::default())
    }

    pub(crate) fn state_against(&self, empty: &R::Key) -> SyncState {
        if self.entity.is_some() {
            SyncState::Linked
        } else if self.relation.keys_equal(&self.key, empty) {
            SyncState::Empty
        } else {
            SyncState::KeyOnly
        }
    }

    /// The raw cached key, regardless of link state.
    pub(crate) fn cached_key(&self) -> &R::Key {
        &self.key
    }

    /// Owned copy of the state, with the linked entity cloned.
    pub fn detach(&self) -> Detached<R::Entity, R::Key>
    where
        R::Entity: Clone,
    {
        Detached {
            entity: self.entity.cloned(),
            key: self.key.clone(),
        }
    }
}

// Shallow: the clone borrows the same entity, so only the relation and key
// need to be `Clone`.
impl<R: Relation + Clone> Clone for KeySynchronizer<'_, R> {
    fn clone(&self) -> Self {
        Self {
            relation: self.relation.clone(),
            entity: self.entity,
            key: self.key.clone(),
        }
    }
}

impl<R: Relation + Default> Default for KeySynchronizer<'_, R> {
    fn default() -> Self {
        Self::new(R::default())
    }
}

impl<R> core::fmt::Debug for KeySynchronizer<'_, R>
where
    R: Relation,
    R::Key: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeySynchronizer")
            .field("state", &self.state())
            .field("key", &self.key())
            .finish()
    }
}

fn same_entity<E>(a: Option<&E>, b: Option<&E>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => ptr::eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

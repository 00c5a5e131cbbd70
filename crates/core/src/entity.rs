//! Entity trait: identity + a ready-made relation keyed by that identity.

use core::marker::PhantomData;

use crate::id_sync::IdSynchronizer;
use crate::relation::{IdRelation, Relation};

/// Entity marker + minimal interface.
pub trait Entity {
    /// Entity identifier.
    type Id: Copy + Default + PartialEq + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Relation reading the key through [`Entity::id`].
///
/// Zero-sized, so an entity embedding `ByIdSynchronizer` fields can still
/// `#[derive(Default)]`.
pub struct ById<E>(PhantomData<fn() -> E>);

impl<E> ById<E> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<E> Default for ById<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for ById<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for ById<E> {}

impl<E> core::fmt::Debug for ById<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "ById<{}>", core::any::type_name::<E>())
    }
}

impl<E: Entity> Relation for ById<E> {
    type Entity = E;
    type Key = E::Id;

    fn key_of(&self, entity: &E) -> E::Id {
        *entity.id()
    }
}

impl<E: Entity> IdRelation for ById<E> {}

/// Id synchronizer for any [`Entity`].
pub type ByIdSynchronizer<'a, E> = IdSynchronizer<'a, ById<E>>;

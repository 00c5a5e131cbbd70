//! Relation traits: how a key is read from an entity, and how keys compare.
//!
//! A [`Relation`] is the pair of pure functions a synchronizer is parameterized
//! over. Implement it on a zero-sized type for a fixed relationship, or use
//! [`Extracted`](crate::extractor::Extracted) to inject closures instead.

/// Key extraction + key equality for one kind of relationship.
pub trait Relation {
    /// The related entity type.
    type Entity;

    /// The key type (the scalar side of the relationship).
    type Key: Clone + Default + PartialEq;

    /// Extracts the key from a related entity.
    ///
    /// Only ever called with an entity that is present.
    fn key_of(&self, entity: &Self::Entity) -> Self::Key;

    /// Determines whether two keys identify the same entity.
    ///
    /// Must be reflexive, symmetric and transitive.
    fn keys_equal(&self, a: &Self::Key, b: &Self::Key) -> bool {
        a == b
    }
}

/// A relation whose key is a non-nullable scalar id.
///
/// The sentinel stands in for "no id known" when the id is exposed as an
/// `Option`.
pub trait IdRelation: Relation {
    /// The id value meaning "absent". Defaults to `Key::default()`.
    fn sentinel(&self) -> Self::Key {
        Self::Key::default()
    }
}

/// Equality predicate over keys.
pub trait KeyComparer<K: ?Sized> {
    fn keys_equal(&self, a: &K, b: &K) -> bool;
}

/// The key type's own `PartialEq`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NaturalEq;

impl<K: PartialEq + ?Sized> KeyComparer<K> for NaturalEq {
    fn keys_equal(&self, a: &K, b: &K) -> bool {
        a == b
    }
}

/// ASCII case-insensitive comparison for string-like keys.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CaseInsensitive;

impl<K: AsRef<str> + ?Sized> KeyComparer<K> for CaseInsensitive {
    fn keys_equal(&self, a: &K, b: &K) -> bool {
        a.as_ref().eq_ignore_ascii_case(b.as_ref())
    }
}

impl<K: ?Sized, F> KeyComparer<K> for F
where
    F: Fn(&K, &K) -> bool,
{
    fn keys_equal(&self, a: &K, b: &K) -> bool {
        self(a, b)
    }
}

//! Serialization support.
//!
//! A synchronizer serializes its raw state (`entity`, cached `key`). Since a
//! borrowed entity cannot be deserialized, the owned [`Detached`] form is the
//! deserialization target; [`Detached::attach`] turns it back into a
//! synchronizer that borrows the detached copy of the entity.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::id_sync::IdSynchronizer;
use crate::relation::{IdRelation, Relation};
use crate::synchronizer::KeySynchronizer;

/// Owned synchronizer state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detached<E, K> {
    pub entity: Option<E>,
    pub key: K,
}

impl<E, K: Clone> Detached<E, K> {
    /// Rebuild a synchronizer over this state; the entity is borrowed from `self`.
    pub fn attach<R>(&self, relation: R) -> KeySynchronizer<'_, R>
    where
        R: Relation<Entity = E, Key = K>,
    {
        KeySynchronizer::from_parts(relation, self.entity.as_ref(), self.key.clone())
    }

    pub fn attach_id<R>(&self, relation: R) -> IdSynchronizer<'_, R>
    where
        R: IdRelation<Entity = E, Key = K>,
    {
        IdSynchronizer::from_key_synchronizer(self.attach(relation))
    }
}

impl<R> Serialize for KeySynchronizer<'_, R>
where
    R: Relation,
    R::Entity: Serialize,
    R::Key: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("KeySynchronizer", 2)?;
        state.serialize_field("entity", &self.entity())?;
        state.serialize_field("key", self.cached_key())?;
        state.end()
    }
}

impl<R> Serialize for IdSynchronizer<'_, R>
where
    R: IdRelation,
    R::Entity: Serialize,
    R::Key: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_key_synchronizer().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::{EntityIdSynchronizer, EntityKeySynchronizer};
    use crate::relation::CaseInsensitive;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
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
    fn serialized_state_is_the_raw_pair() {
        let bob = bob();
        let mut s = EntityIdSynchronizer::from_fn(|p: &Person| p.id);
        s.set_id(1);
        s.link(&bob);

        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "entity": { "id": 1, "name": "Bob" }, "key": 0 })
        );
    }

    #[test]
    fn id_synchronizer_round_trip_copies_the_entity() {
        let bob = bob();
        let mut s = EntityIdSynchronizer::from_fn(|p: &Person| p.id);
        s.set_id(1);
        s.link(&bob);

        let json = serde_json::to_string(&s).unwrap();
        let detached: Detached<Person, i32> = serde_json::from_str(&json).unwrap();
        let clone = detached.attach_id(s.relation().clone());

        assert_eq!(clone.id(), 1);
        let entity = clone.entity().expect("clone is linked");
        assert_eq!(entity, &bob);
        assert!(!core::ptr::eq(entity, &bob));
    }

    #[test]
    fn key_synchronizer_round_trip_copies_the_entity() {
        let bob = bob();
        let mut s = EntityKeySynchronizer::from_fn(|p: &Person| p.name.clone());
        s.link(&bob);
        s.set_key("Bob".to_string());

        let json = serde_json::to_string(&s).unwrap();
        let detached: Detached<Person, String> = serde_json::from_str(&json).unwrap();
        let clone = detached.attach(s.relation().clone());

        assert_eq!(clone.key(), "Bob");
        let entity = clone.entity().expect("clone is linked");
        assert_eq!(entity.name, bob.name);
        assert!(!core::ptr::eq(entity, &bob));
    }

    #[test]
    fn unlinked_round_trip_keeps_cached_key() {
        let mut s =
            EntityKeySynchronizer::with_comparer(|p: &Person| p.name.clone(), CaseInsensitive);
        s.set_key("Robert".to_string());

        let json = serde_json::to_string(&s).unwrap();
        let detached: Detached<Person, String> = serde_json::from_str(&json).unwrap();
        let clone = detached.attach(s.relation().clone());

        assert!(clone.entity().is_none());
        assert_eq!(clone.key(), "Robert");
    }

    #[test]
    fn detach_matches_serde_round_trip() {
        let bob = bob();
        let mut s = EntityIdSynchronizer::from_fn(|p: &Person| p.id);
        s.link(&bob);

        let via_serde: Detached<Person, i32> =
            serde_json::from_str(&serde_json::to_string(&s).unwrap()).unwrap();
        assert_eq!(s.detach(), via_serde);
    }
}

//! `entysync-core` — key/entity synchronization for entity graphs.
//!
//! An entity that relates to another usually carries both a scalar foreign key
//! (`customer_id`) and a reference to the related entity (`customer`). This
//! crate provides the cell that keeps the two views consistent so the owning
//! entity only has to forward accessors.
//!
//! This crate contains **pure domain** primitives (no IO, no persistence).

pub mod detached;
pub mod entity;
pub mod error;
pub mod extractor;
pub mod id_sync;
pub mod relation;
pub mod synchronizer;

pub use detached::Detached;
pub use entity::{ById, ByIdSynchronizer, Entity};
pub use error::{SyncError, SyncResult};
pub use extractor::{
    EntityIdSynchronizer, EntityKeySynchronizer, Extracted, Extractor, IdSynchronizerBuilder,
    KeySynchronizerBuilder,
};
pub use id_sync::IdSynchronizer;
pub use relation::{CaseInsensitive, IdRelation, KeyComparer, NaturalEq, Relation};
pub use synchronizer::{KeySynchronizer, SyncState};

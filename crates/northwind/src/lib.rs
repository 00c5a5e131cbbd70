//! Northwind sample model.
//!
//! Each relationship embeds one synchronizer and exposes a key accessor pair
//! and an entity accessor pair that only forward to it. Entities are borrowed
//! from whoever owns the loaded graph.

pub mod customer;
pub mod employee;
pub mod order;
pub mod product;

pub use customer::Customer;
pub use employee::Employee;
pub use order::{Order, OrderDetail};
pub use product::Product;

//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two `Money`
/// amounts of 89000 are the same price no matter which item carries them.
/// To "modify" one, build a new value.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (`Money`, `Category`)
/// - **Entity**: has identity (`Item`, identified by description + category)
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

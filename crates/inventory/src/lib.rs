//! Inventory domain module.
//!
//! Items grouped into sections, a catalog owning the sections, and the
//! sell-one-unit operation. Pure in-memory logic: no IO, no terminal, no
//! storage. Rendering produces strings; printing them is the caller's job.

pub mod catalog;
pub mod item;
pub mod sample;
pub mod section;

pub use catalog::{Catalog, SaleOutcome};
pub use item::{Category, Item, ItemKey};
pub use section::Section;

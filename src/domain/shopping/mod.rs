// SPDX-License-Identifier: MPL-2.0
//! Shopping list domain.
//!
//! An ordered list of [`ShoppingItem`]s and the rules for adding, editing and
//! removing them. Input is validated permissively: operations never fail,
//! invalid input is either ignored or replaced by a fallback value.

mod item;
mod list;

pub use item::{parse_quantity, ItemId, Quantity, ShoppingItem, FALLBACK_QUANTITY};
pub use list::ItemList;

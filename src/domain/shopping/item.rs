// SPDX-License-Identifier: MPL-2.0
//! Shopping item value types.

use std::fmt;

/// Quantity of an item. Negative and zero values are accepted as typed.
pub type Quantity = i32;

/// Quantity used when an edited quantity cannot be parsed.
pub const FALLBACK_QUANTITY: Quantity = 1;

/// Identifier of an item within a list.
///
/// Identifiers are derived from the list length at insertion time, so they
/// are only unique until an item is deleted. Two items may share an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u32);

impl ItemId {
    /// Creates an identifier from its raw value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single shopping list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingItem {
    pub id: ItemId,
    pub name: String,
    pub quantity: Quantity,
    /// Whether the item is currently shown with its inline editor.
    pub is_editing: bool,
}

impl ShoppingItem {
    /// Creates an item that is not in edit mode.
    #[must_use]
    pub fn new(id: ItemId, name: impl Into<String>, quantity: Quantity) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            is_editing: false,
        }
    }
}

/// Parses quantity text as a base-10 integer.
///
/// Accepts an optional leading sign. Surrounding whitespace, decimals and
/// values outside the [`Quantity`] range are rejected.
#[must_use]
pub fn parse_quantity(text: &str) -> Option<Quantity> {
    text.parse::<Quantity>().ok()
}

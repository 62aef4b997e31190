// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types and the rules that mutate them.
//! It has no dependencies on external crates (except `std`) so it can be
//! exercised without a window, a locale or a config file.
//!
//! # Modules
//!
//! - [`shopping`]: Shopping list types ([`ShoppingItem`](shopping::ShoppingItem),
//!   [`ItemId`](shopping::ItemId)) and the [`ItemList`](shopping::ItemList) store

pub mod shopping;

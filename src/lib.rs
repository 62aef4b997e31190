// SPDX-License-Identifier: MPL-2.0
//! `shopping_list` is a small shopping list built with the Iced GUI framework.
//!
//! Items are added through a dialog, edited inline and deleted from their row.
//! The list lives in memory only; the interface is localized with Fluent and
//! user preferences (language, theme) are read from a TOML settings file.

#![doc(html_root_url = "https://docs.rs/shopping_list/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;

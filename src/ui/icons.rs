// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for SVG icons.
//!
//! Icons are embedded at compile time via `include_bytes!` from
//! `assets/icons/` and handles are cached using `OnceLock`. They are drawn
//! with `currentColor`, so callers tint them through the Iced theme.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `trash` not `delete_item`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Length, Theme};
use std::sync::OnceLock;

/// Macro to define an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a, Theme> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] =
                include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone()).style(themed)
        }
    };
}

define_icon!(pencil, "pencil.svg", "Pencil icon: diagonal pencil.");
define_icon!(trash, "trash.svg", "Trash icon: waste bin with lid.");

/// Tints icons with the theme's text color so they stay visible in both modes.
fn themed(theme: &Theme, _status: svg::Status) -> svg::Style {
    svg::Style {
        color: Some(theme.extended_palette().background.base.text),
    }
}

/// Sets a square size on an icon.
pub fn sized(icon: Svg<'_, Theme>, size: f32) -> Svg<'_, Theme> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_icons_load_successfully() {
        let _ = pencil();
        let _ = trash();
    }

    #[test]
    fn sized_helper_works() {
        let _ = sized(pencil(), 16.0);
    }
}

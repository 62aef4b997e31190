// SPDX-License-Identifier: MPL-2.0
//! Add item dialog state.
//!
//! The text buffers outlive the dialog: cancelling keeps what was typed so the
//! next opening starts from it. Only a successful add clears them.

/// Visibility and input buffers of the add item dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddDialog {
    visible: bool,
    pub name: String,
    pub quantity: String,
}

impl AddDialog {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn open(&mut self) {
        self.visible = true;
    }

    /// Hides the dialog and keeps the buffers. Returns whether it was visible.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.visible, false)
    }

    /// Hides the dialog and clears both buffers.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Shopping list screen.
//!
//! Owns the [`ItemList`] together with the UI-only state around it: the add
//! item dialog and the text buffers of the inline editor. Rows are addressed
//! by position because ids repeat once an item has been deleted. Follows the
//! "state down, messages up" pattern: widgets emit [`Message`]s, [`update`]
//! applies them and reports an [`Event`] to the parent application.

mod dialog;
mod view;

pub use dialog::AddDialog;
pub use view::ViewContext;

use crate::domain::shopping::{ItemId, ItemList, ShoppingItem};

/// Text buffers of the inline editor, seeded from the edited item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorBuffer {
    pub id: ItemId,
    pub name: String,
    pub quantity: String,
}

impl EditorBuffer {
    fn from_item(item: &ShoppingItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            quantity: item.quantity.to_string(),
        }
    }
}

/// State of the shopping list screen.
#[derive(Debug, Clone, Default)]
pub struct State {
    items: ItemList,
    dialog: AddDialog,
    editor: Option<EditorBuffer>,
}

/// Messages emitted by the shopping list widgets.
#[derive(Debug, Clone)]
pub enum Message {
    OpenDialog,
    DialogNameChanged(String),
    DialogQuantityChanged(String),
    ConfirmAdd,
    CancelAdd,
    /// Click outside the dialog or Escape.
    DismissDialog,
    /// Edit button of the row at this position.
    EditItem(usize),
    EditorNameChanged(String),
    EditorQuantityChanged(String),
    SaveEdit,
    /// Delete button of the row at this position.
    DeleteItem(usize),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// The item list was mutated.
    ListChanged,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn items(&self) -> &ItemList {
        &self.items
    }

    #[must_use]
    pub fn dialog(&self) -> &AddDialog {
        &self.dialog
    }

    #[must_use]
    pub fn editor(&self) -> Option<&EditorBuffer> {
        self.editor.as_ref()
    }

    /// Closes the add dialog without touching its buffers.
    /// Returns whether the dialog was open.
    pub fn dismiss_dialog(&mut self) -> bool {
        self.dialog.close()
    }
}

/// Process a shopping list message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::OpenDialog => {
            state.dialog.open();
            Event::None
        }
        Message::DialogNameChanged(name) => {
            state.dialog.name = name;
            Event::None
        }
        Message::DialogQuantityChanged(quantity) => {
            state.dialog.quantity = quantity;
            Event::None
        }
        Message::ConfirmAdd => confirm_add(state),
        Message::CancelAdd | Message::DismissDialog => {
            state.dialog.close();
            Event::None
        }
        Message::EditItem(index) => {
            state.items.begin_edit_at(index);
            state.editor = state.items.editing().map(EditorBuffer::from_item);
            tracing::debug!(index, "editing item");
            Event::ListChanged
        }
        Message::EditorNameChanged(name) => {
            if let Some(editor) = state.editor.as_mut() {
                editor.name = name;
            }
            Event::None
        }
        Message::EditorQuantityChanged(quantity) => {
            if let Some(editor) = state.editor.as_mut() {
                editor.quantity = quantity;
            }
            Event::None
        }
        Message::SaveEdit => save_edit(state),
        Message::DeleteItem(index) => delete_item(state, index),
    }
}

fn confirm_add(state: &mut State) -> Event {
    match state.items.add(&state.dialog.name, &state.dialog.quantity) {
        Some(id) => {
            tracing::info!(%id, count = state.items.len(), "item added");
            state.dialog.reset();
            Event::ListChanged
        }
        None => {
            tracing::debug!("add ignored: blank or non-numeric input");
            Event::None
        }
    }
}

fn save_edit(state: &mut State) -> Event {
    let Some(editor) = state.editor.take() else {
        return Event::None;
    };

    // Edit mode travels with the item when rows above it are deleted.
    let updated = state
        .items
        .editing_position()
        .is_some_and(|index| state.items.complete_edit_at(index, &editor.name, &editor.quantity));

    if updated {
        tracing::info!(id = %editor.id, "item updated");
    } else {
        tracing::debug!(id = %editor.id, "edited item no longer exists");
    }
    Event::ListChanged
}

fn delete_item(state: &mut State, index: usize) -> Event {
    match state.items.delete_at(index) {
        Some(removed) => {
            if removed.is_editing {
                state.editor = None;
            }
            tracing::info!(id = %removed.id, index, count = state.items.len(), "item deleted");
            Event::ListChanged
        }
        None => Event::None,
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::Message;
use crate::ui::shopping_list::{self, Event as ShoppingListEvent};
use iced::Task;

/// Forwards a message to the shopping list and reacts to its event.
pub fn handle_shopping_list_message(
    state: &mut shopping_list::State,
    message: shopping_list::Message,
) -> Task<Message> {
    match shopping_list::update(state, message) {
        ShoppingListEvent::None => {}
        ShoppingListEvent::ListChanged => {
            tracing::trace!(count = state.items().len(), "list changed, redrawing");
        }
    }
    Task::none()
}

/// Escape dismisses the add item dialog when it is open.
pub fn handle_escape(state: &mut shopping_list::State) -> Task<Message> {
    if state.dismiss_dialog() {
        tracing::debug!("add dialog dismissed with Escape");
    }
    Task::none()
}

// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::shopping_list::{self, ViewContext as ShoppingListViewContext};
use iced::{widget::Container, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub shopping_list: &'a shopping_list::State,
}

/// Renders the shopping list screen filling the window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = ctx
        .shopping_list
        .view(ShoppingListViewContext { i18n: ctx.i18n })
        .map(Message::ShoppingList);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

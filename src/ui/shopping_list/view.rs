// SPDX-License-Identifier: MPL-2.0
//! Rendering of the shopping list screen.

use super::{AddDialog, EditorBuffer, Message, State};
use crate::domain::shopping::ShoppingItem;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use fluent_bundle::FluentValue;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{
        button, center, container, mouse_area, opaque, scrollable, text, text_input, tooltip,
        Column, Container, Row, Stack,
    },
    Element, Length,
};

/// Contextual data needed to render the shopping list screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

impl State {
    /// Render the screen, with the add dialog layered on top when visible.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let add_button = button(text(ctx.i18n.tr("add-item-button")).size(typography::BODY_LG))
            .on_press(Message::OpenDialog)
            .style(styles::button::primary)
            .padding([spacing::XS, spacing::MD]);

        let list: Element<'a, Message> = if self.items.is_empty() {
            center(text(ctx.i18n.tr("empty-list-hint")).size(typography::BODY))
                .padding(spacing::MD)
                .into()
        } else {
            let rows = Column::with_children(
                self.items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| self.view_item(index, item, &ctx)),
            )
            .spacing(spacing::XS);

            scrollable(Container::new(rows).padding(spacing::MD))
                .height(Length::Fill)
                .into()
        };

        let screen: Element<'a, Message> = Column::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .push(Container::new(add_button).padding(spacing::XXL))
            .push(list)
            .into();

        if self.dialog.is_visible() {
            modal(screen, view_dialog(&self.dialog, &ctx))
        } else {
            screen
        }
    }

    fn view_item<'a>(
        &'a self,
        index: usize,
        item: &'a ShoppingItem,
        ctx: &ViewContext<'a>,
    ) -> Element<'a, Message> {
        match self.editor.as_ref() {
            Some(editor) if item.is_editing => view_editor(editor, ctx),
            _ => view_item_row(index, item, ctx),
        }
    }
}

/// Read-only row: name, quantity, edit and delete buttons.
fn view_item_row<'a>(
    index: usize,
    item: &'a ShoppingItem,
    ctx: &ViewContext<'a>,
) -> Element<'a, Message> {
    let name = text(item.name.as_str())
        .size(typography::BODY_LG)
        .width(Length::Fill);
    let quantity = text(ctx.i18n.tr_with_args(
        "item-quantity",
        &[("quantity", FluentValue::from(item.quantity))],
    ))
    .size(typography::BODY);

    let edit_button = icon_button(
        icons::pencil(),
        ctx.i18n.tr("edit-item-tooltip"),
        Message::EditItem(index),
        styles::button::icon,
    );
    let delete_button = icon_button(
        icons::trash(),
        ctx.i18n.tr("delete-item-tooltip"),
        Message::DeleteItem(index),
        styles::button::icon_danger,
    );

    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(name)
        .push(quantity)
        .push(edit_button)
        .push(delete_button);

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::container::item_row)
        .into()
}

/// Inline editor: name and quantity fields next to a Save button.
fn view_editor<'a>(editor: &'a EditorBuffer, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let name_input = text_input(&ctx.i18n.tr("item-name-placeholder"), &editor.name)
        .on_input(Message::EditorNameChanged)
        .on_submit(Message::SaveEdit)
        .size(typography::BODY_LG)
        .padding(spacing::XS);
    let quantity_input = text_input(&ctx.i18n.tr("item-quantity-placeholder"), &editor.quantity)
        .on_input(Message::EditorQuantityChanged)
        .on_submit(Message::SaveEdit)
        .size(typography::BODY_LG)
        .padding(spacing::XS);

    let fields = Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .push(name_input)
        .push(quantity_input);

    let save_button = button(text(ctx.i18n.tr("save-item-button")).size(typography::BODY))
        .on_press(Message::SaveEdit)
        .style(styles::button::primary)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT));

    let row = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(fields)
        .push(save_button);

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::container::editor_row)
        .into()
}

/// Add item dialog: title, two fields and the Add/Cancel buttons.
fn view_dialog<'a>(dialog: &'a AddDialog, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = text(ctx.i18n.tr("add-dialog-title")).size(typography::TITLE_MD);

    let name_input = text_input(&ctx.i18n.tr("item-name-placeholder"), &dialog.name)
        .on_input(Message::DialogNameChanged)
        .on_submit(Message::ConfirmAdd)
        .size(typography::BODY_LG)
        .padding(spacing::XS);
    let quantity_input = text_input(&ctx.i18n.tr("item-quantity-placeholder"), &dialog.quantity)
        .on_input(Message::DialogQuantityChanged)
        .on_submit(Message::ConfirmAdd)
        .size(typography::BODY_LG)
        .padding(spacing::XS);

    let confirm = button(text(ctx.i18n.tr("add-dialog-confirm")).size(typography::BODY))
        .on_press(Message::ConfirmAdd)
        .style(styles::button::primary);
    let cancel = button(text(ctx.i18n.tr("add-dialog-cancel")).size(typography::BODY))
        .on_press(Message::CancelAdd)
        .style(styles::button::secondary);

    let buttons = Row::new()
        .spacing(spacing::SM)
        .push(Container::new(confirm).width(Length::Fill))
        .push(cancel);

    let content = Column::new()
        .spacing(spacing::SM)
        .push(title)
        .push(name_input)
        .push(quantity_input)
        .push(buttons);

    Container::new(content)
        .width(Length::Fixed(sizing::DIALOG_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::dialog)
        .into()
}

/// Layers `content` over `base` on a dimmed backdrop.
/// A click on the backdrop dismisses the dialog.
fn modal<'a>(base: Element<'a, Message>, content: Element<'a, Message>) -> Element<'a, Message> {
    let backdrop = center(opaque(content)).style(styles::container::backdrop);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base)
        .push(opaque(mouse_area(backdrop).on_press(Message::DismissDialog)))
        .into()
}

fn icon_button<'a>(
    icon: iced::widget::Svg<'a>,
    label: String,
    message: Message,
    style: fn(&iced::Theme, button::Status) -> button::Style,
) -> Element<'a, Message> {
    let action = button(icons::sized(icon, sizing::ICON_MD))
        .on_press(message)
        .style(style)
        .padding(spacing::XXS);

    tooltip(action, text(label).size(typography::BODY), tooltip::Position::Top)
        .style(container::rounded_box)
        .padding(spacing::XXS)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::ui::shopping_list::update;

    fn i18n() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn empty_list_renders() {
        let i18n = i18n();
        let state = State::new();
        let _element = state.view(ViewContext { i18n: &i18n });
    }

    #[test]
    fn list_with_editor_and_dialog_renders() {
        let i18n = i18n();
        let mut state = State::new();
        for (name, quantity) in [("Milk", "2"), ("Bread", "1")] {
            update(&mut state, Message::OpenDialog);
            update(&mut state, Message::DialogNameChanged(name.to_string()));
            update(&mut state, Message::DialogQuantityChanged(quantity.to_string()));
            update(&mut state, Message::ConfirmAdd);
        }
        update(&mut state, Message::EditItem(1));
        update(&mut state, Message::OpenDialog);

        let _element = state.view(ViewContext { i18n: &i18n });
    }
}

// SPDX-License-Identifier: MPL-2.0
//! The item list store.
//!
//! Items are kept in insertion order. When several items share an id (see
//! [`ItemId`]), operations addressed by id act on the earliest of them. The
//! `_at` variants address one exact row by its position instead.

use super::item::{parse_quantity, ItemId, ShoppingItem, FALLBACK_QUANTITY};

/// Ordered collection of shopping items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemList {
    items: Vec<ShoppingItem>,
}

impl ItemList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new item built from raw dialog input.
    ///
    /// Nothing happens when `name` or `quantity_text` is blank, or when the
    /// quantity is not an integer. Returns the id of the appended item.
    pub fn add(&mut self, name: &str, quantity_text: &str) -> Option<ItemId> {
        if is_blank(name) || is_blank(quantity_text) {
            return None;
        }
        let quantity = parse_quantity(quantity_text)?;

        let id = self.next_id();
        self.items.push(ShoppingItem::new(id, name, quantity));
        Some(id)
    }

    /// Puts the item with `id` in edit mode and takes every other item out of it.
    ///
    /// An unknown `id` leaves no item in edit mode.
    pub fn begin_edit(&mut self, id: ItemId) {
        let target = self.position(id);
        self.mark_editing(target);
    }

    /// Puts the item at `index` in edit mode and takes every other item out of it.
    ///
    /// Rows may share an id, so the screen addresses them by position. Returns
    /// `false` when `index` is out of range; no item is left in edit mode then.
    pub fn begin_edit_at(&mut self, index: usize) -> bool {
        let target = (index < self.items.len()).then_some(index);
        self.mark_editing(target);
        target.is_some()
    }

    /// Leaves edit mode and applies the edited values to the item with `id`.
    ///
    /// A quantity that does not parse becomes [`FALLBACK_QUANTITY`]. Returns
    /// `false` when no item carries `id`; edit mode is cleared either way.
    pub fn complete_edit(&mut self, id: ItemId, name: &str, quantity_text: &str) -> bool {
        let target = self.position(id);
        self.apply_edit(target, name, quantity_text)
    }

    /// Same as [`complete_edit`](Self::complete_edit) for the item at `index`.
    pub fn complete_edit_at(&mut self, index: usize, name: &str, quantity_text: &str) -> bool {
        self.apply_edit(Some(index), name, quantity_text)
    }

    /// Removes the item with `id` and returns it.
    pub fn delete(&mut self, id: ItemId) -> Option<ShoppingItem> {
        let index = self.position(id)?;
        Some(self.items.remove(index))
    }

    /// Removes the item at `index` and returns it.
    pub fn delete_at(&mut self, index: usize) -> Option<ShoppingItem> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Returns the first item carrying `id`.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Returns the item currently in edit mode, if any.
    #[must_use]
    pub fn editing(&self) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| item.is_editing)
    }

    /// Returns the position of the item currently in edit mode, if any.
    #[must_use]
    pub fn editing_position(&self) -> Option<usize> {
        self.items.iter().position(|item| item.is_editing)
    }

    #[must_use]
    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShoppingItem> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Id for the next appended item: the current length plus one.
    fn next_id(&self) -> ItemId {
        let len = u32::try_from(self.items.len()).unwrap_or(u32::MAX);
        ItemId::new(len.saturating_add(1))
    }

    fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    fn mark_editing(&mut self, target: Option<usize>) {
        for (index, item) in self.items.iter_mut().enumerate() {
            item.is_editing = Some(index) == target;
        }
    }

    /// Clears edit mode everywhere, then writes the edited values at `target`.
    fn apply_edit(&mut self, target: Option<usize>, name: &str, quantity_text: &str) -> bool {
        self.mark_editing(None);

        match target.and_then(|index| self.items.get_mut(index)) {
            Some(item) => {
                item.name = name.to_string();
                item.quantity = parse_quantity(quantity_text).unwrap_or(FALLBACK_QUANTITY);
                true
            }
            None => false,
        }
    }
}

impl<'a> IntoIterator for &'a ItemList {
    type Item = &'a ShoppingItem;
    type IntoIter = std::slice::Iter<'a, ShoppingItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_with(names: &[&str]) -> ItemList {
        let mut list = ItemList::new();
        for name in names {
            list.add(name, "1");
        }
        list
    }

    fn editing_count(list: &ItemList) -> usize {
        list.iter().filter(|item| item.is_editing).count()
    }

    #[test]
    fn add_appends_item_with_parsed_quantity() {
        let mut list = ItemList::new();
        let id = list.add("Milk", "2");

        assert_eq!(id, Some(ItemId::new(1)));
        assert_eq!(list.len(), 1);
        let item = &list.items()[0];
        assert_eq!(item.name, "Milk");
        assert_eq!(item.quantity, 2);
        assert!(!item.is_editing);
    }

    #[test]
    fn add_with_blank_name_is_ignored() {
        let mut list = ItemList::new();
        assert_eq!(list.add("", "2"), None);
        assert_eq!(list.add("   ", "2"), None);
        assert!(list.is_empty());
    }

    #[test]
    fn add_with_blank_quantity_is_ignored() {
        let mut list = ItemList::new();
        assert_eq!(list.add("Milk", ""), None);
        assert_eq!(list.add("Milk", " \t"), None);
        assert!(list.is_empty());
    }

    #[test]
    fn add_with_non_numeric_quantity_is_ignored() {
        let mut list = list_with(&["Bread"]);
        let before = list.clone();

        assert_eq!(list.add("Milk", "two"), None);
        assert_eq!(list, before);
    }

    #[test]
    fn add_keeps_name_untrimmed() {
        let mut list = ItemList::new();
        list.add("  Eggs ", "12");
        assert_eq!(list.items()[0].name, "  Eggs ");
    }

    #[test]
    fn ids_follow_pre_insertion_count() {
        let list = list_with(&["a", "b", "c"]);
        let ids: Vec<u32> = list.iter().map(|item| item.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn add_after_delete_can_duplicate_ids() {
        let mut list = list_with(&["a", "b", "c"]);
        list.delete(ItemId::new(1));
        let id = list.add("d", "1");

        assert_eq!(id, Some(ItemId::new(3)));
        let ids: Vec<u32> = list.iter().map(|item| item.id.value()).collect();
        assert_eq!(ids, vec![2, 3, 3]);
    }

    #[test]
    fn delete_removes_exactly_one_item() {
        let mut list = list_with(&["a", "b", "c"]);
        let removed = list.delete(ItemId::new(2)).expect("item 2 exists");

        assert_eq!(removed.name, "b");
        let names: Vec<&str> = list.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn delete_unknown_id_is_noop() {
        let mut list = list_with(&["a"]);
        assert_eq!(list.delete(ItemId::new(9)), None);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn delete_with_duplicate_ids_removes_earliest_only() {
        let mut list = list_with(&["a", "b"]);
        list.delete(ItemId::new(1));
        list.add("c", "1");
        // ids are now [2, 2]
        list.delete(ItemId::new(2));

        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].name, "c");
    }

    #[test]
    fn begin_edit_marks_single_item() {
        let mut list = list_with(&["a", "b", "c"]);
        list.begin_edit(ItemId::new(2));

        assert_eq!(editing_count(&list), 1);
        assert_eq!(list.editing().map(|item| item.name.as_str()), Some("b"));
    }

    #[test]
    fn begin_edit_moves_edit_mode_between_items() {
        let mut list = list_with(&["a", "b", "c"]);
        list.begin_edit(ItemId::new(1));
        list.begin_edit(ItemId::new(3));

        assert_eq!(editing_count(&list), 1);
        assert_eq!(list.editing().map(|item| item.id), Some(ItemId::new(3)));
    }

    #[test]
    fn begin_edit_unknown_id_clears_edit_mode() {
        let mut list = list_with(&["a", "b"]);
        list.begin_edit(ItemId::new(1));
        list.begin_edit(ItemId::new(42));

        assert_eq!(editing_count(&list), 0);
    }

    #[test]
    fn begin_edit_with_duplicate_ids_marks_one_item() {
        let mut list = list_with(&["a", "b"]);
        list.delete(ItemId::new(1));
        list.add("c", "1");
        list.begin_edit(ItemId::new(2));

        assert_eq!(editing_count(&list), 1);
        assert_eq!(list.editing().map(|item| item.name.as_str()), Some("b"));
    }

    #[test]
    fn complete_edit_updates_name_and_quantity() {
        let mut list = list_with(&["a", "b"]);
        list.begin_edit(ItemId::new(2));

        assert!(list.complete_edit(ItemId::new(2), "Butter", "5"));

        let item = list.get(ItemId::new(2)).expect("item 2 exists");
        assert_eq!(item.name, "Butter");
        assert_eq!(item.quantity, 5);
        assert_eq!(editing_count(&list), 0);
    }

    #[test]
    fn complete_edit_with_invalid_quantity_falls_back_to_one() {
        let mut list = ItemList::new();
        list.add("Milk", "4");
        list.begin_edit(ItemId::new(1));
        list.complete_edit(ItemId::new(1), "Milk", "abc");

        assert_eq!(list.items()[0].quantity, FALLBACK_QUANTITY);
    }

    #[test]
    fn complete_edit_accepts_blank_name() {
        let mut list = list_with(&["a"]);
        list.complete_edit(ItemId::new(1), "", "3");

        assert_eq!(list.items()[0].name, "");
        assert_eq!(list.items()[0].quantity, 3);
    }

    #[test]
    fn complete_edit_unknown_id_still_clears_edit_mode() {
        let mut list = list_with(&["a", "b"]);
        list.begin_edit(ItemId::new(1));

        assert!(!list.complete_edit(ItemId::new(7), "x", "2"));
        assert_eq!(editing_count(&list), 0);
        assert_eq!(list.items()[0].name, "a");
    }

    #[test]
    fn complete_edit_leaves_other_items_untouched() {
        let mut list = list_with(&["a", "b", "c"]);
        list.complete_edit(ItemId::new(2), "B", "9");

        let names: Vec<&str> = list.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["a", "B", "c"]);
        assert_eq!(list.items()[0].quantity, 1);
        assert_eq!(list.items()[2].quantity, 1);
    }

    fn names(list: &ItemList) -> Vec<&str> {
        list.iter().map(|item| item.name.as_str()).collect()
    }

    fn list_with_shared_id() -> ItemList {
        let mut list = list_with(&["a", "b"]);
        list.delete(ItemId::new(1));
        list.add("c", "1");
        list
    }

    #[test]
    fn delete_at_removes_row_sharing_an_id() {
        let mut list = list_with_shared_id();
        assert_eq!(list.items()[0].id, list.items()[1].id);

        let removed = list.delete_at(1).expect("row 1 exists");

        assert_eq!(removed.name, "c");
        assert_eq!(names(&list), vec!["b"]);
    }

    #[test]
    fn delete_at_out_of_range_is_noop() {
        let mut list = list_with(&["a"]);
        assert_eq!(list.delete_at(1), None);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn begin_edit_at_marks_row_sharing_an_id() {
        let mut list = list_with_shared_id();

        assert!(list.begin_edit_at(1));

        assert_eq!(editing_count(&list), 1);
        assert_eq!(list.editing().map(|item| item.name.as_str()), Some("c"));
        assert_eq!(list.editing_position(), Some(1));
    }

    #[test]
    fn begin_edit_at_out_of_range_clears_edit_mode() {
        let mut list = list_with(&["a", "b"]);
        list.begin_edit_at(0);

        assert!(!list.begin_edit_at(5));
        assert_eq!(editing_count(&list), 0);
    }

    #[test]
    fn complete_edit_at_updates_only_that_row() {
        let mut list = list_with_shared_id();
        list.begin_edit_at(1);

        assert!(list.complete_edit_at(1, "cream", "x"));

        assert_eq!(names(&list), vec!["b", "cream"]);
        assert_eq!(list.items()[1].quantity, FALLBACK_QUANTITY);
        assert_eq!(editing_count(&list), 0);
    }

    #[test]
    fn complete_edit_at_out_of_range_still_clears_edit_mode() {
        let mut list = list_with(&["a"]);
        list.begin_edit_at(0);

        assert!(!list.complete_edit_at(3, "x", "2"));
        assert_eq!(editing_count(&list), 0);
        assert_eq!(names(&list), vec!["a"]);
    }
}

use crate::mvi::UiState;

use super::item::{ItemId, ShoppingItem};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShoppingListState {
    /// Insertion order, rendered top to bottom.
    pub items: Vec<ShoppingItem>,
    pub is_add_dialog_open: bool,
    pub draft_name: String,
    pub draft_quantity_text: String,
    /// Row index of the single item in edit mode, if any.
    pub editing_row: Option<usize>,
    pub edit_name: String,
    pub edit_quantity_text: String,
    /// Highest id handed out so far, including deleted items.
    pub last_assigned_id: ItemId,
}

impl UiState for ShoppingListState {}

impl ShoppingListState {
    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn item(&self, id: ItemId) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn editing_index(&self) -> Option<usize> {
        self.editing_row.filter(|index| *index < self.items.len())
    }

    pub fn editing_item(&self) -> Option<&ShoppingItem> {
        self.editing_index().map(|index| &self.items[index])
    }

    pub fn is_editing_row(&self, index: usize) -> bool {
        self.editing_index() == Some(index)
    }

    pub fn is_editing(&self) -> bool {
        self.editing_index().is_some()
    }
}

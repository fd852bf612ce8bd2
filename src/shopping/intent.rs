use crate::mvi::Intent;

use super::item::ItemId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShoppingIntent {
    OpenAddDialog,
    /// Close the dialog and drop both drafts.
    CancelAddDialog,
    UpdateDraftName(String),
    UpdateDraftQuantity(String),
    /// Commit the drafts as a new item. Blank names are ignored.
    ConfirmAdd,
    BeginEdit(ItemId),
    /// Put the row at `index` in edit mode. Unlike `BeginEdit`, this picks one
    /// row even when several items share an id.
    BeginEditAt(usize),
    UpdateEditName(String),
    UpdateEditQuantity(String),
    /// Leave edit mode and write `name`/`quantity_text` into item `id`: the
    /// editing row if it carries `id`, otherwise the first match.
    /// Unparseable quantities become 1.
    SaveEdit {
        id: ItemId,
        name: String,
        quantity_text: String,
    },
    DeleteItem(ItemId),
    /// Remove the row at `index`. No-op when out of range.
    DeleteAt(usize),
}

impl Intent for ShoppingIntent {}

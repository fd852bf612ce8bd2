use serde::{Deserialize, Serialize};

use crate::mvi::Reducer;

use super::error::ShoppingError;
use super::intent::ShoppingIntent;
use super::item::{ItemId, ShoppingItem};
use super::state::ShoppingListState;

/// How `ConfirmAdd` picks the id of a new item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdPolicy {
    /// One past the highest id ever assigned. Ids are never reused.
    #[default]
    Monotonic,
    /// `items.len() + 1`. Can collide with a surviving item after a delete.
    ListLength,
}

impl IdPolicy {
    fn next_id(self, state: &ShoppingListState) -> ItemId {
        match self {
            IdPolicy::Monotonic => state.last_assigned_id + 1,
            IdPolicy::ListLength => state.items.len() as ItemId + 1,
        }
    }
}

/// Quantity used by `SaveEdit` when the text is not an integer.
const FALLBACK_EDIT_QUANTITY: i32 = 1;

pub struct ShoppingReducer {
    id_policy: IdPolicy,
}

impl ShoppingReducer {
    pub fn new(id_policy: IdPolicy) -> Self {
        Self { id_policy }
    }
}

impl Reducer for ShoppingReducer {
    type State = ShoppingListState;
    type Intent = ShoppingIntent;
    type Error = ShoppingError;

    fn reduce(
        &self,
        state: &ShoppingListState,
        intent: ShoppingIntent,
    ) -> Result<ShoppingListState, ShoppingError> {
        let mut next = state.clone();
        match intent {
            ShoppingIntent::OpenAddDialog => next.is_add_dialog_open = true,

            ShoppingIntent::CancelAddDialog => {
                next.is_add_dialog_open = false;
                next.draft_name.clear();
                next.draft_quantity_text.clear();
            }

            ShoppingIntent::UpdateDraftName(text) => next.draft_name = text,
            ShoppingIntent::UpdateDraftQuantity(text) => next.draft_quantity_text = text,

            ShoppingIntent::ConfirmAdd => {
                if next.draft_name.trim().is_empty() {
                    return Ok(next);
                }
                let quantity = next.draft_quantity_text.parse::<i32>().map_err(|source| {
                    ShoppingError::InvalidQuantity {
                        text: next.draft_quantity_text.clone(),
                        source,
                    }
                })?;
                let id = self.id_policy.next_id(&next);
                next.items.push(ShoppingItem {
                    id,
                    name: std::mem::take(&mut next.draft_name),
                    quantity,
                });
                next.last_assigned_id = next.last_assigned_id.max(id);
                next.is_add_dialog_open = false;
                next.draft_quantity_text.clear();
            }

            ShoppingIntent::BeginEdit(id) => begin_edit(&mut next, state.position(id)),
            ShoppingIntent::BeginEditAt(index) => {
                begin_edit(&mut next, (index < state.items.len()).then_some(index))
            }

            ShoppingIntent::UpdateEditName(text) => next.edit_name = text,
            ShoppingIntent::UpdateEditQuantity(text) => next.edit_quantity_text = text,

            ShoppingIntent::SaveEdit {
                id,
                name,
                quantity_text,
            } => {
                let target = state
                    .editing_index()
                    .filter(|index| state.items[*index].id == id)
                    .or_else(|| state.position(id));
                end_edit(&mut next);
                let quantity = quantity_text.parse().unwrap_or(FALLBACK_EDIT_QUANTITY);
                if let Some(item) = target.map(|index| &mut next.items[index]) {
                    item.name = name;
                    item.quantity = quantity;
                }
            }

            ShoppingIntent::DeleteItem(id) => {
                if let Some(index) = state.position(id) {
                    remove_row(&mut next, index);
                }
            }

            ShoppingIntent::DeleteAt(index) => {
                if index < state.items.len() {
                    remove_row(&mut next, index);
                }
            }
        }
        Ok(next)
    }
}

fn begin_edit(state: &mut ShoppingListState, row: Option<usize>) {
    match row {
        Some(index) => {
            let item = &state.items[index];
            state.edit_name = item.name.clone();
            state.edit_quantity_text = item.quantity.to_string();
            state.editing_row = Some(index);
        }
        None => end_edit(state),
    }
}

fn end_edit(state: &mut ShoppingListState) {
    state.editing_row = None;
    state.edit_name.clear();
    state.edit_quantity_text.clear();
}

/// Remove a row, keeping the editing marker on the same item.
fn remove_row(state: &mut ShoppingListState, index: usize) {
    state.items.remove(index);
    match state.editing_row {
        Some(editing) if editing == index => end_edit(state),
        Some(editing) if editing > index => state.editing_row = Some(editing - 1),
        _ => {}
    }
}

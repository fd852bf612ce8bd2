//! Shopping list screen: ordered items, an add dialog and an inline editor.

mod error;
mod intent;
mod item;
mod reducer;
mod state;

pub use error::ShoppingError;
pub use intent::ShoppingIntent;
pub use item::{ItemId, ShoppingItem};
pub use reducer::{IdPolicy, ShoppingReducer};
pub use state::ShoppingListState;

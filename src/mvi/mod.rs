//! Model-View-Intent primitives shared by both screens.
//!
//! ```text
//! Intent ──→ Reducer ──→ Store ──→ subscribers (render flag)
//!    ↑                                   │
//!    └──────────── key handler ←─────────┘
//! ```
//!
//! - **State**: snapshot the renderer reads, never mutated in place
//! - **Intent**: a user action forwarded by the key handler
//! - **Reducer**: pure `(state, intent) -> state`, may reject an intent
//! - **Store**: single owner of the current snapshot

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
pub use store::{Store, SubscriptionId};

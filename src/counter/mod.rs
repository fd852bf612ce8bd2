//! Counter screen: a single signed integer with increment/decrement.

mod intent;
mod reducer;
mod state;

pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use state::CounterState;

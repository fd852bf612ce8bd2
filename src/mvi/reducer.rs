use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen. It reads the
/// current snapshot and returns the next one; returning `Err` aborts the intent
/// and the store keeps the current snapshot.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;
    type Error: std::error::Error;

    fn reduce(
        &self,
        state: &Self::State,
        intent: Self::Intent,
    ) -> Result<Self::State, Self::Error>;
}

/// Marker trait for screen state snapshots.
///
/// `PartialEq` lets the store skip notifications for no-op intents.
pub trait UiState: Clone + PartialEq + Default + 'static {}

use std::fmt::Debug;

/// Marker trait for intent objects.
///
/// `Debug` is required so the store can trace every dispatch.
pub trait Intent: Debug + 'static {}

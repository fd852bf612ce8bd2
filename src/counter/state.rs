use crate::mvi::UiState;

/// No floor or ceiling; arithmetic wraps at the `i64` limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    pub count: i64,
}

impl UiState for CounterState {}

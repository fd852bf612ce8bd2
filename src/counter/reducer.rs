use std::convert::Infallible;

use crate::mvi::Reducer;

use super::intent::CounterIntent;
use super::state::CounterState;

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;
    type Error = Infallible;

    fn reduce(
        &self,
        state: &CounterState,
        intent: CounterIntent,
    ) -> Result<CounterState, Infallible> {
        let count = match intent {
            CounterIntent::Increment => state.count.wrapping_add(1),
            CounterIntent::Decrement => state.count.wrapping_sub(1),
        };
        Ok(CounterState { count })
    }
}

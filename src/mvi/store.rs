use super::reducer::Reducer;

pub type SubscriptionId = usize;

type Listener<S> = Box<dyn FnMut(&S)>;

/// Exclusive owner of one screen's state.
///
/// Intents go through [`Store::dispatch`]; subscribers are called with the new
/// snapshot after every dispatch that changed it.
pub struct Store<R: Reducer> {
    reducer: R,
    state: R::State,
    listeners: Vec<(SubscriptionId, Listener<R::State>)>,
    next_subscription: SubscriptionId,
}

impl<R: Reducer> Store<R> {
    pub fn new(reducer: R) -> Self {
        Self::with_state(reducer, R::State::default())
    }

    pub fn with_state(reducer: R, state: R::State) -> Self {
        Self {
            reducer,
            state,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&R::State) + 'static) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if the subscription was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    /// Apply an intent. Returns whether the snapshot changed.
    pub fn dispatch(&mut self, intent: R::Intent) -> Result<bool, R::Error> {
        let described = format!("{:?}", intent);
        let next = match self.reducer.reduce(&self.state, intent) {
            Ok(next) => next,
            Err(e) => {
                tracing::debug!(intent = %described, error = %e, "dispatch rejected");
                return Err(e);
            }
        };
        let changed = next != self.state;
        tracing::debug!(intent = %described, changed, "dispatch");
        if !changed {
            return Ok(false);
        }
        self.state = next;
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mvi::{Intent, UiState};
    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Total(u32);
    impl UiState for Total {}

    #[derive(Debug)]
    enum Op {
        Add(u32),
        Fail,
    }
    impl Intent for Op {}

    #[derive(Debug, thiserror::Error)]
    #[error("rejected")]
    struct Rejected;

    struct Adder;

    impl Reducer for Adder {
        type State = Total;
        type Intent = Op;
        type Error = Rejected;

        fn reduce(&self, state: &Total, intent: Op) -> Result<Total, Rejected> {
            match intent {
                Op::Add(n) => Ok(Total(state.0 + n)),
                Op::Fail => Err(Rejected),
            }
        }
    }

    fn recording_store() -> (Store<Adder>, Rc<RefCell<Vec<u32>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = Store::new(Adder);
        let sink = Rc::clone(&seen);
        store.subscribe(move |s: &Total| sink.borrow_mut().push(s.0));
        (store, seen)
    }

    #[test]
    fn subscribers_see_each_new_snapshot() {
        let (mut store, seen) = recording_store();
        assert!(store.dispatch(Op::Add(2)).unwrap());
        assert!(store.dispatch(Op::Add(3)).unwrap());
        assert_eq!(*seen.borrow(), vec![2, 5]);
        assert_eq!(store.state(), &Total(5));
    }

    #[test]
    fn unchanged_snapshot_is_not_announced() {
        let (mut store, seen) = recording_store();
        assert!(!store.dispatch(Op::Add(0)).unwrap());
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn rejected_intent_keeps_state_and_stays_silent() {
        let (mut store, seen) = recording_store();
        store.dispatch(Op::Add(4)).unwrap();
        assert!(store.dispatch(Op::Fail).is_err());
        assert_eq!(store.state(), &Total(4));
        assert_eq!(*seen.borrow(), vec![4]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let seen = Rc::new(RefCell::new(0));
        let mut store = Store::with_state(Adder, Total(10));
        let sink = Rc::clone(&seen);
        let id = store.subscribe(move |_| *sink.borrow_mut() += 1);

        store.dispatch(Op::Add(1)).unwrap();
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.dispatch(Op::Add(1)).unwrap();

        assert_eq!(*seen.borrow(), 1);
        assert_eq!(store.state(), &Total(12));
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn dispatch_trace_records_whether_state_changed() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut store = Store::new(Adder);
            store.dispatch(Op::Add(0)).unwrap();
            store.dispatch(Op::Add(7)).unwrap();
        });

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("intent=Add(0)"));
        assert!(lines[0].contains("changed=false"));
        assert!(lines[1].contains("intent=Add(7)"));
        assert!(lines[1].contains("changed=true"));
    }
}

//! Counter domain shared by scenario tests and demos

/// Counter action
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterAction {
    Increment,
    Decrement,
}

/// Counter state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CounterState {
    pub count: i64,
}

/// Pure counter reducer
pub fn counter_reducer(state: CounterState, action: &CounterAction) -> CounterState {
    match action {
        CounterAction::Increment => CounterState {
            count: state.count + 1,
        },
        CounterAction::Decrement => CounterState {
            count: state.count - 1,
        },
    }
}

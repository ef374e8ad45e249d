//! Dispatch routing
//!
//! The host store routes every dispatched message through the engine. A
//! message is either a plain domain action, which passes straight through
//! to the delegate reducer, or an optimistic envelope, which enters the
//! reconciliation state machine.

use crate::ActionEnvelope;

/// A dispatched message
#[derive(Clone, Debug)]
pub enum Message<A> {
    /// Ordinary action, reduced by the delegate with no queue or baseline
    /// effect
    Plain(A),
    /// Optimistic action, routed by its current status
    Optimistic(ActionEnvelope<A>),
}

impl<A> Message<A> {
    /// Wrap a plain domain action
    pub fn plain(action: A) -> Self {
        Message::Plain(action)
    }

    /// Wrap a payload in a fresh Pending envelope and return both the
    /// message and a handle for resolving it later
    pub fn optimistic(payload: A) -> (Self, ActionEnvelope<A>)
    where
        A: Clone,
    {
        let envelope = ActionEnvelope::new(payload);
        (Message::Optimistic(envelope.clone()), envelope)
    }
}

impl<A> From<ActionEnvelope<A>> for Message<A> {
    fn from(envelope: ActionEnvelope<A>) -> Self {
        Message::Optimistic(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ActionStatus;

    #[test]
    fn test_optimistic_returns_shared_handle() {
        let (message, handle) = Message::optimistic(3i32);

        handle.resolve_success();

        match message {
            Message::Optimistic(envelope) => {
                assert_eq!(envelope.id(), handle.id());
                assert_eq!(envelope.status(), ActionStatus::Success);
            }
            Message::Plain(_) => panic!("expected an optimistic message"),
        }
    }

    #[test]
    fn test_from_envelope() {
        let envelope = ActionEnvelope::new("save");
        let id = envelope.id();

        let message: Message<&str> = envelope.into();
        match message {
            Message::Optimistic(envelope) => assert_eq!(envelope.id(), id),
            Message::Plain(_) => panic!("expected an optimistic message"),
        }
    }
}

//! Middleware around reducer execution.
//!
//! Middleware observes every action the Store applies: `before` runs with
//! the state the reducer is about to receive, `after` with the state it
//! produced. Both run while the Store holds the write lock, so they see
//! consecutive states with nothing interleaved. Middleware cannot change the
//! action or the state.

use slicekit_core::action::ActionType;
use std::fmt::Debug;

/// Hooks run by the Store around each reducer call
pub trait Middleware<S, A>: Send + Sync {
    /// Called with the state before the reducer runs
    fn before(&self, _action: &A, _state: &S) {}

    /// Called with the state after the reducer ran
    fn after(&self, _action: &A, _state: &S) {}
}

/// Logs each action with the state before and after it
///
/// Events are emitted at `DEBUG` level under the
/// `slicekit_runtime::middleware` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggerMiddleware;

impl<S, A> Middleware<S, A> for LoggerMiddleware
where
    S: Debug,
    A: ActionType + Debug,
{
    fn before(&self, action: &A, state: &S) {
        tracing::debug!(
            action_type = action.action_type(),
            action = ?action,
            prev_state = ?state,
            "action"
        );
    }

    fn after(&self, action: &A, state: &S) {
        tracing::debug!(
            action_type = action.action_type(),
            next_state = ?state,
            "next state"
        );
    }
}

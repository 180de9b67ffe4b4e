//! Optimistic toggle reconciliation for SportConnect mutations.
//!
//! Like/unlike and follow/unfollow share one shape: flip a membership
//! immediately for responsiveness, then reconcile against the authoritative
//! store in a single atomic read-modify-write transaction. The direction of
//! the flip is re-derived inside the transaction from freshly read state,
//! which guards against lost updates under concurrent actors; a failed
//! transaction rolls the local view back to its pre-toggle snapshot.
//!
//! While a toggle is in flight for a given actor/entity pair, further
//! toggles for that pair are suppressed (no queueing, no coalescing) until
//! the in-flight one resolves. The store itself is reached only
//! through the [`TransactionalStore`] port, so the crate runs without a
//! backend in tests.

#![forbid(unsafe_code)]

mod counter;
mod op;
mod reconciler;
mod store;

pub mod test_support;

pub use counter::CounterDoc;
pub use op::{CounterKind, EntityRef, FlightKey, ToggleOp};
pub use reconciler::{MembershipView, Reconciler, ToggleError, ToggleOutcome};
pub use store::{StoreError, Transaction, TransactionalStore};

//! Optimistic toggle application with transactional reconciliation.
//!
//! Each toggle moves through `Idle → Pending → {Committed | RolledBack} →
//! Idle`. The speculative flip shows immediately in the caller's view; the
//! authoritative transaction then re-derives the direction from freshly
//! read state, so concurrent actors cannot lose updates. A failed
//! transaction restores the view bit-for-bit before the error surfaces.

use std::collections::HashSet;
use std::sync::Mutex;

use thiserror::Error;

use crate::op::{FlightKey, ToggleOp};
use crate::store::{StoreError, TransactionalStore};

/// Local/display state for one toggle surface, owned by the caller.
///
/// The reconciler mutates this in place: speculatively before the
/// transaction, and again on commit or rollback. Callers must not mutate
/// the view themselves while a toggle is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MembershipView {
    /// Whether the acting user is currently shown as a member.
    pub member: bool,
    /// The displayed count.
    pub count: u64,
}

impl MembershipView {
    /// Construct a view from the currently displayed state.
    #[must_use]
    pub fn new(member: bool, count: u64) -> Self {
        Self { member, count }
    }

    /// Flip membership and adjust the count, before the store confirms.
    fn apply_speculative(&mut self) {
        if self.member {
            self.member = false;
            self.count = self.count.saturating_sub(1);
        } else {
            self.member = true;
            self.count = self.count.saturating_add(1);
        }
    }

    /// Absorb the committed authoritative outcome.
    fn reconcile(&mut self, outcome: ToggleOutcome) {
        self.member = outcome.member;
        self.count = outcome.count;
    }
}

/// Committed result of a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// Whether the actor is a member after the commit.
    pub member: bool,
    /// Authoritative count after the commit.
    pub count: u64,
}

/// Errors surfaced by [`Reconciler::toggle`].
#[derive(Debug, Error)]
pub enum ToggleError {
    /// A toggle for the same actor and entity is still in flight; the
    /// request was suppressed and local state is untouched.
    #[error("a toggle for this entity is already in flight")]
    InFlight,
    /// The authoritative transaction failed. Local state was rolled back to
    /// the pre-toggle snapshot before this error was raised.
    #[error("toggle transaction failed")]
    Transaction {
        /// The store fault that aborted the attempt.
        #[source]
        source: StoreError,
    },
}

/// Applies toggle mutations optimistically and reconciles them against the
/// authoritative store.
///
/// The reconciler is `Send + Sync`; per (actor, entity) pair at most one
/// transaction is in flight, while toggles on distinct pairs proceed
/// independently. There is no automatic retry: a failed attempt must be
/// re-triggered by the actor.
///
/// # Examples
/// ```
/// use sportconnect_core::{ActorId, PostId};
/// use sportconnect_reconciler::test_support::MemoryCounterStore;
/// use sportconnect_reconciler::{
///     CounterDoc, EntityRef, MembershipView, Reconciler, ToggleOp,
/// };
///
/// let store = MemoryCounterStore::new()
///     .with_doc(EntityRef::likes(&PostId::new("p1")), CounterDoc::new());
/// let reconciler = Reconciler::new();
/// let op = ToggleOp::Like {
///     actor: ActorId::new("me"),
///     post: PostId::new("p1"),
/// };
///
/// let mut view = MembershipView::new(false, 0);
/// let outcome = reconciler.toggle(&store, &op, &mut view)?;
/// assert!(outcome.member);
/// assert_eq!(view.count, 1);
/// # Ok::<(), sportconnect_reconciler::ToggleError>(())
/// ```
#[derive(Debug, Default)]
pub struct Reconciler {
    in_flight: Mutex<HashSet<FlightKey>>,
}

impl Reconciler {
    /// Construct a reconciler with no toggles in flight.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Report whether a toggle for `op`'s actor/entity pair is pending.
    #[must_use]
    pub fn is_in_flight(&self, op: &ToggleOp) -> bool {
        self.in_flight
            .lock()
            .map(|held| held.contains(&op.flight_key()))
            .unwrap_or(true)
    }

    /// Perform one toggle: speculative flip, atomic reconciliation, and
    /// rollback on failure.
    ///
    /// On success the view already matches the committed outcome, silently
    /// absorbing any race-altered result. On failure the view is restored
    /// to its pre-toggle snapshot before the error propagates.
    ///
    /// # Errors
    /// [`ToggleError::InFlight`] when a toggle for the same pair has not
    /// resolved yet; [`ToggleError::Transaction`] when the store exchange
    /// fails.
    pub fn toggle<S: TransactionalStore>(
        &self,
        store: &S,
        op: &ToggleOp,
        view: &mut MembershipView,
    ) -> Result<ToggleOutcome, ToggleError> {
        let Some(_guard) = FlightGuard::acquire(&self.in_flight, op.flight_key()) else {
            return Err(ToggleError::InFlight);
        };
        let snapshot = *view;
        view.apply_speculative();
        match run_toggle_transaction(store, op) {
            Ok(outcome) => {
                view.reconcile(outcome);
                Ok(outcome)
            }
            Err(source) => {
                *view = snapshot;
                Err(ToggleError::Transaction { source })
            }
        }
    }
}

/// One atomic exchange: the toggle direction is re-derived from the freshly
/// read authoritative state, never from the caller's speculative view.
fn run_toggle_transaction<S: TransactionalStore>(
    store: &S,
    op: &ToggleOp,
) -> Result<ToggleOutcome, StoreError> {
    let primary_ref = op.primary();
    store.run_toggle(&mut |txn| {
        let mut primary = txn
            .read(&primary_ref)?
            .ok_or_else(|| StoreError::Missing {
                entity: primary_ref.clone(),
            })?;
        let joining = !primary.is_member(op.primary_member());
        if joining {
            primary.insert(op.primary_member().clone());
        } else {
            primary.remove(op.primary_member());
        }
        let outcome = ToggleOutcome {
            member: joining,
            count: primary.count(),
        };
        txn.write(&primary_ref, primary);

        if let Some(counter_ref) = op.counter() {
            // A missing counter-entity is created with default state, not
            // treated as an error.
            let mut counter = txn.read(&counter_ref)?.unwrap_or_default();
            if joining {
                counter.insert(op.counter_member().clone());
            } else {
                counter.remove(op.counter_member());
            }
            txn.write(&counter_ref, counter);
        }
        Ok(outcome)
    })
}

/// Occupies the suppression slot for one actor/entity pair, releasing it on
/// every exit path.
struct FlightGuard<'a> {
    slots: &'a Mutex<HashSet<FlightKey>>,
    key: FlightKey,
}

impl<'a> FlightGuard<'a> {
    /// Claim the slot, or `None` when a toggle for `key` is already
    /// pending. A poisoned slot set reports as pending.
    fn acquire(slots: &'a Mutex<HashSet<FlightKey>>, key: FlightKey) -> Option<Self> {
        let mut held = slots.lock().ok()?;
        if held.insert(key.clone()) {
            drop(held);
            Some(Self { slots, key })
        } else {
            None
        }
    }
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        if let Ok(mut held) = self.slots.lock() {
            held.remove(&self.key);
        }
    }
}

//! Ports onto the authoritative transactional document store.
//!
//! The engine never talks to the backend directly; the application shell
//! implements these traits over its store SDK. The contract mirrors
//! read-then-conditional-write transactions: reads happen inside the
//! transaction, writes are staged, and all staged writes commit atomically
//! or not at all.

use thiserror::Error;

use crate::counter::CounterDoc;
use crate::op::EntityRef;
use crate::reconciler::ToggleOutcome;

/// Errors surfaced by the transactional store port.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The entity being toggled no longer exists.
    #[error("{entity} no longer exists")]
    Missing {
        /// The entity that vanished mid-flight.
        entity: EntityRef,
    },
    /// The backend rejected or aborted the exchange.
    #[error("transaction aborted: {reason}")]
    Aborted {
        /// Backend-supplied description of the fault.
        reason: String,
    },
}

/// Staged view of one atomic read-modify-write exchange.
pub trait Transaction {
    /// Read the current counter document for `entity`, or `None` when the
    /// entity does not exist. Reads observe writes already staged in this
    /// transaction.
    fn read(&mut self, entity: &EntityRef) -> Result<Option<CounterDoc>, StoreError>;

    /// Stage a write of `doc` to `entity`, applied only if the whole
    /// transaction commits.
    fn write(&mut self, entity: &EntityRef, doc: CounterDoc);
}

/// Atomic access to counter documents in the authoritative store.
///
/// `run_toggle` executes `body` exactly once: there is no automatic retry,
/// and a failed body discards every staged write. Implementations decide
/// how staging maps onto their backend's transaction primitive.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
/// use std::sync::Mutex;
/// use sportconnect_reconciler::{
///     CounterDoc, EntityRef, StoreError, ToggleOutcome, Transaction, TransactionalStore,
/// };
///
/// struct OneShotStore {
///     docs: Mutex<HashMap<EntityRef, CounterDoc>>,
/// }
///
/// struct OneShotTxn {
///     base: HashMap<EntityRef, CounterDoc>,
///     staged: HashMap<EntityRef, CounterDoc>,
/// }
///
/// impl Transaction for OneShotTxn {
///     fn read(&mut self, entity: &EntityRef) -> Result<Option<CounterDoc>, StoreError> {
///         Ok(self
///             .staged
///             .get(entity)
///             .or_else(|| self.base.get(entity))
///             .cloned())
///     }
///     fn write(&mut self, entity: &EntityRef, doc: CounterDoc) {
///         self.staged.insert(entity.clone(), doc);
///     }
/// }
///
/// impl TransactionalStore for OneShotStore {
///     fn run_toggle(
///         &self,
///         body: &mut dyn FnMut(&mut dyn Transaction) -> Result<ToggleOutcome, StoreError>,
///     ) -> Result<ToggleOutcome, StoreError> {
///         let mut docs = self.docs.lock().map_err(|_| StoreError::Aborted {
///             reason: "store mutex poisoned".into(),
///         })?;
///         let mut txn = OneShotTxn {
///             base: docs.clone(),
///             staged: HashMap::new(),
///         };
///         let outcome = body(&mut txn)?;
///         docs.extend(txn.staged);
///         Ok(outcome)
///     }
/// }
/// ```
pub trait TransactionalStore: Send + Sync {
    /// Run `body` with read-then-conditional-write semantics. All staged
    /// writes commit together, or none do.
    ///
    /// # Errors
    /// Propagates the body's [`StoreError`], or an implementation-specific
    /// [`StoreError::Aborted`] when the backend rejects the commit.
    fn run_toggle(
        &self,
        body: &mut dyn FnMut(&mut dyn Transaction) -> Result<ToggleOutcome, StoreError>,
    ) -> Result<ToggleOutcome, StoreError>;
}

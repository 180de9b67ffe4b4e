//! Test-only, in-memory `TransactionalStore` implementation used by unit
//! and behaviour tests.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::counter::CounterDoc;
use crate::op::EntityRef;
use crate::reconciler::ToggleOutcome;
use crate::store::{StoreError, Transaction, TransactionalStore};

/// In-memory counter store with atomic staged commits and one-shot failure
/// injection.
///
/// Intended only for tests and examples. Writes staged by a transaction
/// body land together after the body succeeds; a failing body leaves the
/// store untouched.
#[derive(Default, Debug)]
pub struct MemoryCounterStore {
    docs: Mutex<HashMap<EntityRef, CounterDoc>>,
    fail_next: Mutex<Option<StoreError>>,
}

impl MemoryCounterStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a counter document while returning `self` for chaining.
    #[must_use]
    pub fn with_doc(self, entity: EntityRef, doc: CounterDoc) -> Self {
        self.insert(entity, doc);
        self
    }

    /// Insert or replace a counter document.
    pub fn insert(&self, entity: EntityRef, doc: CounterDoc) {
        if let Ok(mut docs) = self.docs.lock() {
            docs.insert(entity, doc);
        }
    }

    /// Read back a committed counter document.
    #[must_use]
    pub fn doc(&self, entity: &EntityRef) -> Option<CounterDoc> {
        self.docs
            .lock()
            .ok()
            .and_then(|docs| docs.get(entity).cloned())
    }

    /// Make the next transaction fail with `error` before its body runs.
    pub fn fail_next(&self, error: StoreError) {
        if let Ok(mut slot) = self.fail_next.lock() {
            *slot = Some(error);
        }
    }

    fn take_injected_failure(&self) -> Option<StoreError> {
        self.fail_next.lock().ok().and_then(|mut slot| slot.take())
    }
}

struct MemoryTransaction {
    base: HashMap<EntityRef, CounterDoc>,
    staged: HashMap<EntityRef, CounterDoc>,
}

impl Transaction for MemoryTransaction {
    fn read(&mut self, entity: &EntityRef) -> Result<Option<CounterDoc>, StoreError> {
        Ok(self
            .staged
            .get(entity)
            .or_else(|| self.base.get(entity))
            .cloned())
    }

    fn write(&mut self, entity: &EntityRef, doc: CounterDoc) {
        self.staged.insert(entity.clone(), doc);
    }
}

impl TransactionalStore for MemoryCounterStore {
    fn run_toggle(
        &self,
        body: &mut dyn FnMut(&mut dyn Transaction) -> Result<ToggleOutcome, StoreError>,
    ) -> Result<ToggleOutcome, StoreError> {
        if let Some(error) = self.take_injected_failure() {
            return Err(error);
        }
        let mut docs = self.docs.lock().map_err(|_| StoreError::Aborted {
            reason: "store mutex poisoned".into(),
        })?;
        let mut txn = MemoryTransaction {
            base: docs.clone(),
            staged: HashMap::new(),
        };
        let outcome = body(&mut txn)?;
        docs.extend(txn.staged);
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use sportconnect_core::{ActorId, PostId};

    use super::*;

    fn entity() -> EntityRef {
        EntityRef::likes(&PostId::new("p1"))
    }

    #[test]
    fn staged_writes_commit_together() {
        let store = MemoryCounterStore::new().with_doc(entity(), CounterDoc::new());
        let outcome = store
            .run_toggle(&mut |txn| {
                let mut doc = txn.read(&entity())?.unwrap_or_default();
                doc.insert(ActorId::new("a"));
                txn.write(&entity(), doc);
                Ok(ToggleOutcome {
                    member: true,
                    count: 1,
                })
            })
            .expect("transaction should commit");
        assert!(outcome.member);
        assert_eq!(store.doc(&entity()).map(|d| d.count()), Some(1));
    }

    #[test]
    fn failed_body_discards_staged_writes() {
        let store = MemoryCounterStore::new().with_doc(entity(), CounterDoc::new());
        let result = store.run_toggle(&mut |txn| {
            let mut doc = txn.read(&entity())?.unwrap_or_default();
            doc.insert(ActorId::new("a"));
            txn.write(&entity(), doc);
            Err(StoreError::Aborted {
                reason: "late fault".into(),
            })
        });
        assert!(result.is_err());
        assert_eq!(store.doc(&entity()), Some(CounterDoc::new()));
    }

    #[test]
    fn reads_observe_writes_staged_earlier_in_the_transaction() {
        let store = MemoryCounterStore::new().with_doc(entity(), CounterDoc::new());
        store
            .run_toggle(&mut |txn| {
                let mut doc = txn.read(&entity())?.unwrap_or_default();
                doc.insert(ActorId::new("a"));
                txn.write(&entity(), doc);
                let reread = txn.read(&entity())?.unwrap_or_default();
                assert!(reread.is_member(&ActorId::new("a")));
                Ok(ToggleOutcome {
                    member: true,
                    count: reread.count(),
                })
            })
            .expect("transaction should commit");
    }

    #[test]
    fn injected_failure_fires_once() {
        let store = MemoryCounterStore::new().with_doc(entity(), CounterDoc::new());
        store.fail_next(StoreError::Aborted {
            reason: "transient".into(),
        });
        let failed = store.run_toggle(&mut |_| {
            Ok(ToggleOutcome {
                member: true,
                count: 1,
            })
        });
        assert!(failed.is_err());
        let succeeded = store.run_toggle(&mut |_| {
            Ok(ToggleOutcome {
                member: true,
                count: 1,
            })
        });
        assert!(succeeded.is_ok());
    }
}

//! Moving the stored roster of a round to the roster an administrator selected.
//!
//! Membership writes are best effort: a failed delete or insert is logged and
//! counted, the remaining rows are still processed and nothing is rolled
//! back. The only hard failure is a selection that does not fit the round,
//! which is rejected before the store is touched.

use std::collections::BTreeSet;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

mod store;

pub use store::DbRosterStore;


/// Data access for round membership rows.
#[async_trait]
pub trait RosterStore: Send + Sync {
    async fn current_roster(&self, round_id: i32) -> anyhow::Result<BTreeSet<i32>>;
    async fn contains(&self, round_id: i32, participant_id: i32) -> anyhow::Result<bool>;
    async fn insert(&self, round_id: i32, participant_id: i32) -> anyhow::Result<()>;
    async fn remove(&self, round_id: i32, participant_id: i32) -> anyhow::Result<()>;
}

#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("{selected} participants selected, but the round only has room for {capacity}")]
    CapacityExceeded { selected: usize, capacity: usize },
    #[error("Could not load roster of round {round_id}: {source}")]
    Store {
        round_id: i32,
        #[source]
        source: anyhow::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterChanges {
    pub to_add: BTreeSet<i32>,
    pub to_remove: BTreeSet<i32>,
}

impl RosterChanges {
    pub fn between(current: &BTreeSet<i32>, desired: &BTreeSet<i32>) -> Self {
        RosterChanges {
            to_add: desired.difference(current).copied().collect(),
            to_remove: current.difference(desired).copied().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileOutcome {
    pub added: usize,
    pub removed: usize,
    pub failed: usize,
}

impl ReconcileOutcome {
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

pub fn check_capacity(desired: &BTreeSet<i32>, capacity: usize) -> Result<(), RosterError> {
    if desired.len() > capacity {
        return Err(RosterError::CapacityExceeded { selected: desired.len(), capacity });
    }
    Ok(())
}

pub async fn reconcile<S>(
    store: &S,
    round_id: i32,
    desired: &BTreeSet<i32>,
    current: &BTreeSet<i32>,
    capacity: usize,
) -> Result<ReconcileOutcome, RosterError> where S: RosterStore + ?Sized {
    check_capacity(desired, capacity)?;

    let changes = RosterChanges::between(current, desired);
    let mut outcome = ReconcileOutcome::default();

    if changes.is_empty() {
        debug!(round_id, "Roster already up to date");
        return Ok(outcome);
    }

    for &participant_id in &changes.to_remove {
        match store.remove(round_id, participant_id).await {
            Ok(()) => outcome.removed += 1,
            Err(err) => {
                warn!(round_id, participant_id, "Failed to remove participant from round: {}", err);
                outcome.failed += 1;
            }
        }
    }

    for &participant_id in &changes.to_add {
        match store.contains(round_id, participant_id).await {
            Ok(true) => {
                debug!(round_id, participant_id, "Participant already in round, skipping insert");
                continue;
            }
            Ok(false) => {}
            Err(err) => {
                warn!(round_id, participant_id, "Failed to check round membership: {}", err);
                outcome.failed += 1;
                continue;
            }
        }

        match store.insert(round_id, participant_id).await {
            Ok(()) => outcome.added += 1,
            Err(err) => {
                warn!(round_id, participant_id, "Failed to add participant to round: {}", err);
                outcome.failed += 1;
            }
        }
    }

    info!(
        round_id,
        added = outcome.added,
        removed = outcome.removed,
        failed = outcome.failed,
        "Reconciled round roster"
    );

    Ok(outcome)
}

/// Loads the stored roster of the round and reconciles it with `desired`.
pub async fn reconcile_round<S>(
    store: &S,
    round_id: i32,
    desired: &BTreeSet<i32>,
    capacity: usize,
) -> Result<ReconcileOutcome, RosterError> where S: RosterStore + ?Sized {
    check_capacity(desired, capacity)?;
    let current = store.current_roster(round_id).await.map_err(|source| RosterError::Store { round_id, source })?;
    reconcile(store, round_id, desired, &current, capacity).await
}


#[cfg(test)]
mod test {
    use std::sync::Mutex;

    use rand::{rngs::StdRng, Rng, SeedableRng};
    use tracing_test::traced_test;

    use super::*;

    #[derive(Default)]
    struct MemoryStore {
        rows: Mutex<BTreeSet<(i32, i32)>>,
        failing: BTreeSet<i32>,
        writes: Mutex<usize>,
    }

    impl MemoryStore {
        fn with_roster(round_id: i32, participants: &[i32]) -> Self {
            MemoryStore {
                rows: Mutex::new(participants.iter().map(|p| (round_id, *p)).collect()),
                ..Default::default()
            }
        }

        fn failing_on(mut self, participants: &[i32]) -> Self {
            self.failing = participants.iter().copied().collect();
            self
        }

        fn roster(&self, round_id: i32) -> BTreeSet<i32> {
            self.rows.lock().unwrap().iter().filter(|(r, _)| *r == round_id).map(|(_, p)| *p).collect()
        }

        fn writes(&self) -> usize {
            *self.writes.lock().unwrap()
        }
    }

    #[async_trait]
    impl RosterStore for MemoryStore {
        async fn current_roster(&self, round_id: i32) -> anyhow::Result<BTreeSet<i32>> {
            Ok(self.roster(round_id))
        }

        async fn contains(&self, round_id: i32, participant_id: i32) -> anyhow::Result<bool> {
            Ok(self.rows.lock().unwrap().contains(&(round_id, participant_id)))
        }

        async fn insert(&self, round_id: i32, participant_id: i32) -> anyhow::Result<()> {
            *self.writes.lock().unwrap() += 1;
            if self.failing.contains(&participant_id) {
                anyhow::bail!("insert rejected");
            }
            if !self.rows.lock().unwrap().insert((round_id, participant_id)) {
                anyhow::bail!("duplicate key");
            }
            Ok(())
        }

        async fn remove(&self, round_id: i32, participant_id: i32) -> anyhow::Result<()> {
            *self.writes.lock().unwrap() += 1;
            if self.failing.contains(&participant_id) {
                anyhow::bail!("delete rejected");
            }
            self.rows.lock().unwrap().remove(&(round_id, participant_id));
            Ok(())
        }
    }

    fn ids(values: &[i32]) -> BTreeSet<i32> {
        values.iter().copied().collect()
    }

    #[test]
    fn test_changes_are_disjoint() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..200 {
            let current: BTreeSet<i32> = (0..rng.gen_range(0..12)).map(|_| rng.gen_range(1..20)).collect();
            let desired: BTreeSet<i32> = (0..rng.gen_range(0..12)).map(|_| rng.gen_range(1..20)).collect();
            let changes = RosterChanges::between(&current, &desired);

            assert!(changes.to_add.is_disjoint(&changes.to_remove));
            assert!(changes.to_add.is_subset(&desired));
            assert!(changes.to_remove.is_subset(&current));
        }
    }

    #[tokio::test]
    #[traced_test]
    async fn test_swaps_single_participant() {
        let store = MemoryStore::with_roster(7, &[1, 2, 3]);

        let outcome = reconcile_round(&store, 7, &ids(&[2, 3, 4]), 10).await.unwrap();

        assert_eq!(outcome, ReconcileOutcome { added: 1, removed: 1, failed: 0 });
        assert_eq!(store.roster(7), ids(&[2, 3, 4]));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_capacity_violation_writes_nothing() {
        let store = MemoryStore::default();

        let result = reconcile_round(&store, 7, &ids(&[5, 6]), 1).await;

        assert!(matches!(result, Err(RosterError::CapacityExceeded { selected: 2, capacity: 1 })));
        assert_eq!(store.writes(), 0);
        assert!(store.roster(7).is_empty());
    }

    #[tokio::test]
    #[traced_test]
    async fn test_selection_at_capacity_is_accepted() {
        let store = MemoryStore::default();

        let outcome = reconcile_round(&store, 7, &ids(&[5, 6]), 2).await.unwrap();

        assert_eq!(outcome.added, 2);
        assert_eq!(store.roster(7), ids(&[5, 6]));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_second_run_is_a_no_op() {
        let store = MemoryStore::with_roster(7, &[1, 9]);
        let desired = ids(&[2, 9, 11]);

        reconcile_round(&store, 7, &desired, 10).await.unwrap();
        let writes_after_first_run = store.writes();
        let outcome = reconcile_round(&store, 7, &desired, 10).await.unwrap();

        assert_eq!(outcome, ReconcileOutcome::default());
        assert_eq!(store.writes(), writes_after_first_run);
        assert_eq!(store.roster(7), desired);
    }

    #[tokio::test]
    #[traced_test]
    async fn test_failed_rows_are_counted_and_others_still_applied() {
        let store = MemoryStore::with_roster(7, &[1, 2]).failing_on(&[1, 4]);

        let outcome = reconcile_round(&store, 7, &ids(&[3, 4]), 10).await.unwrap();

        assert_eq!(outcome, ReconcileOutcome { added: 1, removed: 1, failed: 2 });
        assert!(!outcome.is_clean());
        assert_eq!(store.roster(7), ids(&[1, 3]));
        assert!(logs_contain("Failed to remove participant from round"));
        assert!(logs_contain("Failed to add participant to round"));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_stale_current_set_does_not_insert_twice() {
        let store = MemoryStore::with_roster(7, &[1, 2]);

        // Caller believes the round is empty
        let outcome = reconcile(&store, 7, &ids(&[1, 2]), &BTreeSet::new(), 10).await.unwrap();

        assert_eq!(outcome, ReconcileOutcome::default());
        assert_eq!(store.writes(), 0);
    }

    #[tokio::test]
    #[traced_test]
    async fn test_rosters_of_other_rounds_are_untouched() {
        let store = MemoryStore::with_roster(7, &[1, 2]);
        store.rows.lock().unwrap().insert((8, 1));

        reconcile_round(&store, 7, &BTreeSet::new(), 10).await.unwrap();

        assert!(store.roster(7).is_empty());
        assert_eq!(store.roster(8), ids(&[1]));
    }
}

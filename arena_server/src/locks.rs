use std::sync::{Arc, Weak};

use tokio::sync::{Mutex, OwnedMutexGuard};
use weak_table::WeakValueHashMap;


/// Serializes roster changes per round. Rounds that nobody holds a guard
/// for are dropped from the table automatically.
#[derive(Clone, Default)]
pub struct RoundLocks {
    locks: Arc<Mutex<WeakValueHashMap<i32, Weak<Mutex<()>>>>>,
}

impl RoundLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn lock(&self, round_id: i32) -> OwnedMutexGuard<()> {
        let round_lock = {
            let mut locks = self.locks.lock().await;
            match locks.get(&round_id) {
                Some(round_lock) => round_lock,
                None => {
                    let round_lock = Arc::new(Mutex::new(()));
                    locks.insert(round_id, round_lock.clone());
                    round_lock
                }
            }
        };

        round_lock.lock_owned().await
    }

    #[cfg(test)]
    async fn is_tracked(&self, round_id: i32) -> bool {
        self.locks.lock().await.get(&round_id).is_some()
    }
}

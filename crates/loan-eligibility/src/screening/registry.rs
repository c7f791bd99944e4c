use std::collections::hash_map::DefaultHasher;
use std::collections::{BTreeMap, HashMap};
use std::hash::{Hash, Hasher};
use std::sync::Mutex;

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::debug;

use super::domain::{AccountState, ListRecord, ListType, ALL_LIST_TYPES};

const SHARD_COUNT: usize = 16;

/// In-memory store of the latest record per (account, list type) pair.
///
/// Accounts are partitioned across a fixed set of mutex-guarded shards keyed
/// by a hash of the account id, so traffic for distinct accounts does not
/// contend while every effect of a single [`apply`](Self::apply) call is
/// observed atomically by readers of that account.
pub struct EligibilityRegistry {
    shards: Vec<Mutex<HashMap<String, AccountState>>>,
}

impl Default for EligibilityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl EligibilityRegistry {
    pub fn new() -> Self {
        Self {
            shards: (0..SHARD_COUNT).map(|_| Mutex::new(HashMap::new())).collect(),
        }
    }

    fn shard_for(&self, account_id: &str) -> &Mutex<HashMap<String, AccountState>> {
        let mut hasher = DefaultHasher::new();
        account_id.hash(&mut hasher);
        &self.shards[hasher.finish() as usize % SHARD_COUNT]
    }

    /// Record one list event, resolving conflicts against the stored state.
    ///
    /// Base lists: insert or overwrite only when the event is strictly newer
    /// than the stored record; equal or older events are dropped, so
    /// re-sending an event never backdates a category. Delist lists: the
    /// delist slot is overwritten unconditionally, and a paired base record
    /// is replaced with a superseded copy when the delist is strictly newer.
    ///
    /// Never fails; this is the sole mutator of the registry.
    pub fn apply(
        &self,
        account_id: &str,
        list_type: ListType,
        listed_at: NaiveDateTime,
        reason: &str,
    ) {
        let mut shard = self
            .shard_for(account_id)
            .lock()
            .expect("registry shard poisoned");
        let state = shard.entry(account_id.to_string()).or_default();

        match list_type.base_counterpart() {
            Some(base) => apply_delist(state, account_id, list_type, base, listed_at, reason),
            None => apply_base(state, account_id, list_type, listed_at, reason),
        }
    }

    /// Current snapshot of every stored record for one account, possibly
    /// empty. Read-only; triggers no conflict resolution.
    pub fn account_snapshot(&self, account_id: &str) -> AccountState {
        let shard = self
            .shard_for(account_id)
            .lock()
            .expect("registry shard poisoned");
        shard.get(account_id).cloned().unwrap_or_default()
    }

    /// Presence-based counts over the whole registry, ignoring record status.
    pub fn statistics(&self) -> RegistryStatistics {
        let mut total_accounts = 0usize;
        let mut records_by_list_type: BTreeMap<ListType, u64> =
            ALL_LIST_TYPES.into_iter().map(|list| (list, 0)).collect();

        for shard in &self.shards {
            let guard = shard.lock().expect("registry shard poisoned");
            for state in guard.values() {
                if state.is_empty() {
                    continue;
                }
                total_accounts += 1;
                for list_type in state.keys() {
                    *records_by_list_type.entry(*list_type).or_insert(0) += 1;
                }
            }
        }

        RegistryStatistics {
            total_accounts,
            records_by_list_type,
        }
    }

    /// Wipe everything. Administrative/test hook.
    pub fn clear_all(&self) {
        for shard in &self.shards {
            shard.lock().expect("registry shard poisoned").clear();
        }
    }
}

fn apply_base(
    state: &mut AccountState,
    account_id: &str,
    list_type: ListType,
    listed_at: NaiveDateTime,
    reason: &str,
) {
    if let Some(existing) = state.get(&list_type) {
        if listed_at <= existing.listed_at {
            debug!(
                account = account_id,
                list = list_type.code(),
                "dropping stale base event"
            );
            return;
        }
    }

    state.insert(
        list_type,
        ListRecord::new(account_id, list_type, listed_at, reason),
    );
}

fn apply_delist(
    state: &mut AccountState,
    account_id: &str,
    delist: ListType,
    base: ListType,
    listed_at: NaiveDateTime,
    reason: &str,
) {
    // Latest applied delist always wins the delist slot, regardless of order.
    state.insert(delist, ListRecord::new(account_id, delist, listed_at, reason));

    if let Some(base_record) = state.get(&base) {
        if listed_at > base_record.listed_at {
            let cleared = base_record.superseded();
            state.insert(base, cleared);
        }
    }
}

/// Operational counters for the statistics endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryStatistics {
    pub total_accounts: usize,
    pub records_by_list_type: BTreeMap<ListType, u64>,
}

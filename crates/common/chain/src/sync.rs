use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Node sync state, reported before any block endpoint does work. Serialized
/// into the 503 response detail when the node cannot serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SyncStatus {
    #[serde(with = "serde_utils::quoted_u64")]
    pub head_slot: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub sync_distance: u64,
    pub is_syncing: bool,
    pub is_optimistic: bool,
    pub el_offline: bool,
}

#[async_trait]
pub trait SyncChecker: Send + Sync {
    async fn sync_status(&self) -> anyhow::Result<SyncStatus>;
}

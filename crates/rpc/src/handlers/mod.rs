pub mod block;
pub mod produce;

use pharos_api_types::error::ApiError;
use pharos_chain::sync::SyncChecker;

/// Every block endpoint checks sync state before reading the request body;
/// a syncing node answers 503 with its sync details and parses nothing.
pub(crate) async fn check_sync(sync_checker: &dyn SyncChecker) -> Result<(), ApiError> {
    let status = sync_checker.sync_status().await.map_err(|err| {
        ApiError::InternalError(format!("Could not check if node is syncing: {err}"))
    })?;
    if status.is_syncing {
        let details = serde_json::to_string(&status).unwrap_or_default();
        return Err(ApiError::UnderSyncing(details));
    }
    Ok(())
}

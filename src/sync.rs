use crate::error::Result;
use crate::models::AddOutcome;
use crate::tmdb::TmdbClient;
use tracing::debug;

/// Membership is fetched fresh on every call.
pub fn is_member(client: &TmdbClient, list_id: u64, media_id: u64) -> Result<bool> {
    client.item_status(list_id, media_id)
}

/// Adds `media_id` unless the list already holds it, so re-running the same
/// title file never creates duplicates.
pub fn add_item(client: &TmdbClient, list_id: u64, media_id: u64) -> Result<AddOutcome> {
    if is_member(client, list_id, media_id)? {
        debug!(list_id, media_id, "already in list, skipping add");
        return Ok(AddOutcome::AlreadyPresent);
    }

    client.add_item(list_id, media_id)?;
    Ok(AddOutcome::Added)
}

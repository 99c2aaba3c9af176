/// Session persistence in the browser's localStorage

use web_sys::Storage;

use crate::config::SESSION_STORAGE_KEY;
use crate::error::{CampusError, Result};
use crate::types::StoredSession;

fn local_storage() -> Result<Storage> {
    web_sys::window()
        .ok_or_else(|| CampusError::storage("no browser window"))?
        .local_storage()
        .map_err(|_| CampusError::storage("localStorage is not accessible"))?
        .ok_or_else(|| CampusError::storage("localStorage is disabled"))
}

pub fn load() -> Result<Option<StoredSession>> {
    let raw = local_storage()?
        .get_item(SESSION_STORAGE_KEY)
        .map_err(|_| CampusError::storage("failed to read session"))?;

    Ok(raw.map(|json| serde_json::from_str(&json)).transpose()?)
}

pub fn save(session: &StoredSession) -> Result<()> {
    let json = serde_json::to_string(session)?;
    local_storage()?
        .set_item(SESSION_STORAGE_KEY, &json)
        .map_err(|_| CampusError::storage("failed to write session"))
}

pub fn clear() -> Result<()> {
    local_storage()?
        .remove_item(SESSION_STORAGE_KEY)
        .map_err(|_| CampusError::storage("failed to remove session"))
}

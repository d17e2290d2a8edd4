use crate::errors::AppError;
use crate::models::{iso_timestamp, Settings, SettingsUpdate};
use crate::store::{LocalStore, SETTINGS_KEY};
use chrono::{DateTime, Utc};

pub fn load_settings(store: &LocalStore) -> Result<Settings, AppError> {
    Ok(store.read_json(SETTINGS_KEY)?)
}

/// Replaces the stored record wholesale.
pub fn save_settings(
    store: &mut LocalStore,
    update: SettingsUpdate,
    now: DateTime<Utc>,
) -> Result<Settings, AppError> {
    let settings = Settings {
        reminder_frequency: update.reminder_frequency,
        notifications_enabled: update.notifications_enabled,
        data_sharing: update.data_sharing,
        updated_at: Some(iso_timestamp(&now)),
    };
    store.write_json(SETTINGS_KEY, &settings)?;
    Ok(settings)
}

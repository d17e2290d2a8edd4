use crate::errors::{AppError, ValidationError};
use crate::models::{iso_timestamp, timestamp_id, JournalDraft, JournalEntry};
use crate::store::{LocalStore, JOURNAL_ENTRIES_KEY};
use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;

pub const RECENT_LIMIT: usize = 5;

pub const PROMPTS: [&str; 8] = [
    "What are three things that went well today?",
    "How did I handle challenges today?",
    "What am I most grateful for right now?",
    "What would I like to improve about today?",
    "What made me smile today?",
    "What lesson did I learn today?",
    "How did I show kindness to myself or others today?",
    "What am I looking forward to tomorrow?",
];

pub fn random_prompt() -> &'static str {
    PROMPTS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(PROMPTS[0])
}

pub fn list_entries(store: &LocalStore) -> Result<Vec<JournalEntry>, AppError> {
    Ok(store.read_json(JOURNAL_ENTRIES_KEY)?)
}

/// The last `limit` entries, newest first.
pub fn recent_entries(store: &LocalStore, limit: usize) -> Result<Vec<JournalEntry>, AppError> {
    let entries = list_entries(store)?;
    Ok(entries.into_iter().rev().take(limit).collect())
}

pub fn save_entry(
    store: &mut LocalStore,
    draft: JournalDraft,
    now: DateTime<Utc>,
) -> Result<JournalEntry, AppError> {
    let reflection = draft.reflection.trim();
    let gratitude = draft.gratitude.trim();
    if reflection.is_empty() && gratitude.is_empty() {
        return Err(ValidationError::JournalEmpty.into());
    }

    let prompt = match draft.prompt {
        Some(prompt) if !prompt.trim().is_empty() => prompt,
        _ => random_prompt().to_string(),
    };

    let entry = JournalEntry {
        id: timestamp_id(&now),
        reflection: reflection.to_string(),
        gratitude: gratitude.to_string(),
        prompt,
        date: iso_timestamp(&now),
    };
    store.append(JOURNAL_ENTRIES_KEY, entry.clone())?;
    Ok(entry)
}

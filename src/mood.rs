use crate::errors::{AppError, ValidationError};
use crate::models::{iso_timestamp, timestamp_id, MoodDraft, MoodEntry};
use crate::stats::MOOD_EMOJI;
use crate::store::{LocalStore, MOOD_ENTRIES_KEY};
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const MOOD_LABELS: [&str; 5] = ["Very Sad", "Sad", "Neutral", "Happy", "Very Happy"];

pub const MOOD_TAGS: [&str; 15] = [
    "Anxious",
    "Motivated",
    "Tired",
    "Energetic",
    "Stressed",
    "Calm",
    "Excited",
    "Overwhelmed",
    "Peaceful",
    "Frustrated",
    "Grateful",
    "Lonely",
    "Confident",
    "Worried",
    "Content",
];

#[derive(Debug, Serialize)]
pub struct MoodOption {
    pub value: u8,
    pub emoji: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MoodCatalog {
    pub moods: Vec<MoodOption>,
    pub tags: &'static [&'static str],
}

pub fn catalog() -> MoodCatalog {
    let moods = (1u8..)
        .zip(MOOD_EMOJI.iter().zip(MOOD_LABELS.iter()))
        .map(|(value, (&emoji, &label))| MoodOption {
            value,
            emoji,
            label,
        })
        .collect();
    MoodCatalog {
        moods,
        tags: &MOOD_TAGS,
    }
}

/// Label for a stored mood value; unknown values render as an empty string.
pub fn mood_label(mood: u8) -> &'static str {
    match mood {
        1..=5 => MOOD_LABELS[usize::from(mood) - 1],
        _ => "",
    }
}

pub fn list_entries(store: &LocalStore) -> Result<Vec<MoodEntry>, AppError> {
    Ok(store.read_json(MOOD_ENTRIES_KEY)?)
}

pub fn record_mood(
    store: &mut LocalStore,
    draft: MoodDraft,
    user_id: Option<&str>,
    now: DateTime<Utc>,
) -> Result<MoodEntry, AppError> {
    let mood = draft.mood.ok_or(ValidationError::MoodMissing)?;
    if !(1..=5).contains(&mood) {
        return Err(ValidationError::MoodOutOfRange(mood).into());
    }

    let mut tags: Vec<String> = Vec::with_capacity(draft.tags.len());
    for tag in draft.tags {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }

    let entry = MoodEntry {
        id: timestamp_id(&now),
        mood,
        tags,
        journal: draft.journal,
        date: iso_timestamp(&now),
        user_id: user_id.map(str::to_string),
    };
    store.append(MOOD_ENTRIES_KEY, entry.clone())?;
    Ok(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 5, 9, 15, 0).unwrap()
    }

    #[test]
    fn recording_appends_one_entry_with_fields_intact() {
        let mut store = LocalStore::new();
        record_mood(
            &mut store,
            MoodDraft {
                mood: Some(3),
                ..MoodDraft::default()
            },
            None,
            now(),
        )
        .unwrap();
        let before = list_entries(&store).unwrap().len();

        let entry = record_mood(
            &mut store,
            MoodDraft {
                mood: Some(5),
                tags: vec![],
                journal: String::new(),
            },
            Some("42"),
            now(),
        )
        .unwrap();

        let entries = list_entries(&store).unwrap();
        assert_eq!(entries.len(), before + 1);
        let stored = entries.last().unwrap();
        assert_eq!(stored, &entry);
        assert_eq!(stored.mood, 5);
        assert!(stored.tags.is_empty());
        assert_eq!(stored.journal, "");
        assert_eq!(stored.date, "2026-01-05T09:15:00.000Z");
        assert_eq!(stored.user_id.as_deref(), Some("42"));
    }

    #[test]
    fn missing_or_out_of_range_mood_is_rejected() {
        let mut store = LocalStore::new();
        let err = record_mood(&mut store, MoodDraft::default(), None, now()).unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Please select a mood");

        let draft = MoodDraft {
            mood: Some(6),
            ..MoodDraft::default()
        };
        assert!(record_mood(&mut store, draft, None, now()).is_err());
        assert!(list_entries(&store).unwrap().is_empty());
    }

    #[test]
    fn duplicate_tags_collapse() {
        let mut store = LocalStore::new();
        let draft = MoodDraft {
            mood: Some(2),
            tags: vec!["Tired".into(), "Calm".into(), "Tired".into()],
            journal: "long day".into(),
        };
        let entry = record_mood(&mut store, draft, None, now()).unwrap();
        assert_eq!(entry.tags, vec!["Tired", "Calm"]);
    }

    #[test]
    fn catalog_lists_five_moods() {
        let catalog = catalog();
        assert_eq!(catalog.moods.len(), 5);
        assert_eq!(catalog.moods[0].value, 1);
        assert_eq!(catalog.moods[4].label, "Very Happy");
        assert_eq!(catalog.tags.len(), 15);
        assert_eq!(mood_label(4), "Happy");
        assert_eq!(mood_label(0), "");
    }
}

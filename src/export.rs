//! Downloadable copies of the stored data: a JSON bundle and a plain-text report.

use crate::errors::{AppError, StoreError};
use crate::journal;
use crate::models::{iso_timestamp, parse_timestamp, JournalEntry, MoodEntry};
use crate::mood::{self, mood_label};
use crate::stats::{average_mood, round_tenth};
use crate::store::{LocalStore, JOURNAL_ENTRIES_KEY, MOOD_ENTRIES_KEY, SETTINGS_KEY};
use chrono::{DateTime, TimeZone};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt::Write;

pub const EXPORT_VERSION: &str = "1.0";
const REPORT_MOOD_LIMIT: usize = 10;
const REPORT_JOURNAL_LIMIT: usize = 5;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportBundle {
    pub mood_entries: Vec<Value>,
    pub journal_entries: Vec<Value>,
    pub settings: Map<String, Value>,
    pub exported_at: String,
    pub version: &'static str,
}

pub struct Download {
    pub filename: String,
    pub content_type: &'static str,
    pub body: String,
}

pub fn json_bundle<Tz: TimeZone>(
    store: &LocalStore,
    now: &DateTime<Tz>,
) -> Result<ExportBundle, AppError> {
    Ok(ExportBundle {
        mood_entries: store.read_json(MOOD_ENTRIES_KEY)?,
        journal_entries: store.read_json(JOURNAL_ENTRIES_KEY)?,
        settings: store.read_json(SETTINGS_KEY)?,
        exported_at: iso_timestamp(now),
        version: EXPORT_VERSION,
    })
}

pub fn json_download<Tz: TimeZone>(
    store: &LocalStore,
    now: &DateTime<Tz>,
) -> Result<Download, AppError> {
    let bundle = json_bundle(store, now)?;
    let body = serde_json::to_string_pretty(&bundle).map_err(|source| StoreError::Encode {
        key: "export".to_string(),
        source,
    })?;
    Ok(Download {
        filename: format!("mindconnect-data-{}.json", file_date(now)),
        content_type: "application/json",
        body,
    })
}

pub fn text_download<Tz: TimeZone>(
    store: &LocalStore,
    now: &DateTime<Tz>,
) -> Result<Download, AppError> {
    let moods = mood::list_entries(store)?;
    let journal = journal::list_entries(store)?;
    Ok(Download {
        filename: format!("mindconnect-report-{}.txt", file_date(now)),
        content_type: "text/plain; charset=utf-8",
        body: text_report(&moods, &journal, now),
    })
}

pub fn text_report<Tz: TimeZone>(
    moods: &[MoodEntry],
    journal: &[JournalEntry],
    now: &DateTime<Tz>,
) -> String {
    let tz = now.timezone();
    let mut out = String::new();

    out.push_str("MindConnect Wellness Report\n");
    out.push_str("================================\n\n");
    let _ = writeln!(out, "Generated on: {}\n", short_date(&now.date_naive()));

    out.push_str("MOOD TRACKING SUMMARY\n");
    out.push_str("-------------------\n");
    if moods.is_empty() {
        out.push_str("No mood entries recorded yet.\n");
    } else {
        let _ = writeln!(out, "Total entries: {}", moods.len());
        let _ = writeln!(out, "Average mood: {:.1}/5\n", round_tenth(average_mood(moods)));

        out.push_str("Recent Mood Entries:\n");
        for entry in last(moods, REPORT_MOOD_LIMIT) {
            let _ = write!(out, "{}: {}", entry_date(&entry.date, &tz), mood_label(entry.mood));
            if !entry.tags.is_empty() {
                let _ = write!(out, " (Tags: {})", entry.tags.join(", "));
            }
            out.push('\n');
        }
    }

    out.push_str("\n\nJOURNAL ENTRIES\n");
    out.push_str("-------------\n");
    if journal.is_empty() {
        out.push_str("No journal entries recorded yet.\n");
    } else {
        for entry in last(journal, REPORT_JOURNAL_LIMIT) {
            let _ = writeln!(out, "\nDate: {}", entry_date(&entry.date, &tz));
            if !entry.reflection.is_empty() {
                let _ = writeln!(out, "Reflection: {}", entry.reflection);
            }
            if !entry.gratitude.is_empty() {
                let _ = writeln!(out, "Gratitude: {}", entry.gratitude);
            }
            out.push_str("---\n");
        }
    }

    out
}

fn last<T>(items: &[T], limit: usize) -> &[T] {
    &items[items.len().saturating_sub(limit)..]
}

fn entry_date<Tz: TimeZone>(raw: &str, tz: &Tz) -> String {
    match parse_timestamp(raw) {
        Some(date) => short_date(&date.with_timezone(tz).date_naive()),
        None => "Invalid Date".to_string(),
    }
}

fn short_date(date: &chrono::NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

fn file_date<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    iso_timestamp(now)[..10].to_string()
}

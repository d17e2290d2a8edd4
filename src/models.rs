use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub created_at: String,
}

/// The public part of a [`User`], stored as the active session.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct MoodEntry {
    pub id: String,
    pub mood: u8,
    pub tags: Vec<String>,
    pub journal: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl MoodEntry {
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.date)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct JournalEntry {
    pub id: String,
    pub reflection: String,
    pub gratitude: String,
    pub prompt: String,
    pub date: String,
}

impl JournalEntry {
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.date)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ReminderFrequency {
    TwiceDaily,
    #[default]
    Daily,
    EveryOtherDay,
    Weekly,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub reminder_frequency: ReminderFrequency,
    pub notifications_enabled: bool,
    pub data_sharing: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reminder_frequency: ReminderFrequency::Daily,
            notifications_enabled: true,
            data_sharing: false,
            updated_at: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct AdminLoginRequest {
    pub password: String,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct MoodDraft {
    pub mood: Option<u8>,
    pub tags: Vec<String>,
    pub journal: String,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct JournalDraft {
    pub reflection: String,
    pub gratitude: String,
    pub prompt: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub reminder_frequency: ReminderFrequency,
    pub notifications_enabled: bool,
    pub data_sharing: bool,
}

#[derive(Debug, Serialize)]
pub struct TrendPoint {
    pub date: String,
    pub weekday: String,
    pub mood: f64,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct HomeSummary {
    pub greeting: &'static str,
    pub name: Option<String>,
    pub mood_entries: usize,
    pub days_tracked: usize,
    pub current_streak: u32,
    pub average_mood: f64,
    pub average_mood_emoji: &'static str,
}

#[derive(Debug, Serialize)]
pub struct JournalPage {
    pub prompt: &'static str,
    pub recent: Vec<JournalEntry>,
}

/// Millisecond Unix timestamp as a decimal string, used as a record id.
pub fn timestamp_id<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    now.timestamp_millis().to_string()
}

/// `YYYY-MM-DDTHH:MM:SS.mmmZ`, the shape every stored `date` field uses.
pub fn iso_timestamp<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    now.with_timezone(&Utc).to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|date| date.with_timezone(&Utc))
}

use crate::errors::AppError;
use crate::models::{MoodEntry, SessionUser, TrendPoint, User};
use crate::stats::{average_mood, flagged_users_at, mood_trend_at, round_tenth};
use crate::store::{LocalStore, MOOD_ENTRIES_KEY, USERS_KEY};
use chrono::{DateTime, Local, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Feedback {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub course: &'static str,
    pub message: &'static str,
    pub date: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct EmailTemplate {
    pub key: &'static str,
    pub label: &'static str,
    pub subject: &'static str,
    pub content: &'static str,
}

pub const FEEDBACK: [Feedback; 3] = [
    Feedback {
        id: 1,
        kind: "complaint",
        course: "Psychology 101",
        message: "The mood tracking interface could be more intuitive",
        date: "2024-01-15",
        status: "open",
    },
    Feedback {
        id: 2,
        kind: "suggestion",
        course: "Computer Science",
        message: "Would love to see more guided meditation options",
        date: "2024-01-14",
        status: "reviewed",
    },
    Feedback {
        id: 3,
        kind: "technical",
        course: "Biology",
        message: "App sometimes crashes when saving journal entries",
        date: "2024-01-13",
        status: "in-progress",
    },
];

pub static EMAIL_TEMPLATES: [EmailTemplate; 3] = [
    EmailTemplate {
        key: "wellness-check",
        label: "Wellness Check-In",
        subject: "Wellness Check-In from MindConnect",
        content: "Hi there,\n\nWe noticed you haven't logged your mood in a few days. Your mental wellness is important to us.\n\nTake a moment to check in with yourself today.\n\nBest regards,\nMindConnect Team",
    },
    EmailTemplate {
        key: "encouragement",
        label: "Encouragement",
        subject: "You're Doing Great! Keep Going",
        content: "Hi,\n\nWe wanted to remind you of the progress you've been making with your wellness journey.\n\nKeep up the great work!\n\nBest,\nMindConnect Team",
    },
    EmailTemplate {
        key: "resources",
        label: "Resource Sharing",
        subject: "Helpful Wellness Resources",
        content: "Hello,\n\nWe've compiled some additional resources that might help you on your wellness journey.\n\nRemember, seeking help is a sign of strength.\n\nTake care,\nMindConnect Team",
    },
];

#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub total_users: usize,
    pub total_mood_entries: usize,
    pub average_mood: f64,
    pub mood_trend: Vec<TrendPoint>,
    pub flagged_users: Vec<SessionUser>,
    pub feedback: Vec<Feedback>,
    pub email_templates: &'static [EmailTemplate],
}

/// Feedback for one course; `None` or `"all"` keeps everything.
pub fn feedback_for(course: Option<&str>) -> Vec<Feedback> {
    FEEDBACK
        .iter()
        .filter(|item| match course {
            None | Some("all") => true,
            Some(course) => item.course == course,
        })
        .copied()
        .collect()
}

pub fn dashboard(store: &LocalStore, course: Option<&str>) -> Result<Dashboard, AppError> {
    dashboard_at(store, course, Local::now())
}

pub fn dashboard_at(
    store: &LocalStore,
    course: Option<&str>,
    now: DateTime<Local>,
) -> Result<Dashboard, AppError> {
    let users: Vec<User> = store.read_json(USERS_KEY)?;
    let entries: Vec<MoodEntry> = store.read_json(MOOD_ENTRIES_KEY)?;

    Ok(Dashboard {
        total_users: users.len(),
        total_mood_entries: entries.len(),
        average_mood: round_tenth(average_mood(&entries)),
        mood_trend: mood_trend_at(&entries, now),
        flagged_users: flagged_users_at(&users, &entries, now.with_timezone(&Utc)),
        feedback: feedback_for(course),
        email_templates: &EMAIL_TEMPLATES,
    })
}

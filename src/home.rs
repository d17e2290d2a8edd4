use crate::auth::Session;
use crate::models::{HomeSummary, MoodEntry};
use crate::stats::{average_mood, current_streak, days_tracked, mood_emoji};
use chrono::{DateTime, Local, TimeZone, Timelike};

pub fn greeting(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Good morning",
        12..=16 => "Good afternoon",
        _ => "Good evening",
    }
}

pub fn summary(session: &Session, entries: &[MoodEntry]) -> HomeSummary {
    summary_at(session, entries, Local::now())
}

pub fn summary_at<Tz: TimeZone>(
    session: &Session,
    entries: &[MoodEntry],
    now: DateTime<Tz>,
) -> HomeSummary {
    let tz = now.timezone();
    let average = average_mood(entries);
    HomeSummary {
        greeting: greeting(now.hour()),
        name: session.user.as_ref().map(|user| user.name.clone()),
        mood_entries: entries.len(),
        days_tracked: days_tracked(entries, &tz),
        current_streak: current_streak(entries, now.date_naive(), &tz),
        average_mood: average,
        average_mood_emoji: mood_emoji(average),
    }
}

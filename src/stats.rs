use crate::models::{MoodEntry, SessionUser, TrendPoint, User};
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use std::collections::BTreeSet;

const TREND_DAYS: i64 = 7;
const FLAG_WINDOW_DAYS: i64 = 7;
const FLAG_MIN_ENTRIES: usize = 3;
const LOW_MOOD: u8 = 2;

pub const MOOD_EMOJI: [&str; 5] = ["😭", "😔", "😐", "😊", "😁"];

pub fn average_mood(entries: &[MoodEntry]) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }
    let sum: u64 = entries.iter().map(|entry| u64::from(entry.mood)).sum();
    sum as f64 / entries.len() as f64
}

/// Rounds to one decimal place, halves away from zero.
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Emoji for a rounded average; `0.0` (no entries) maps to the neutral face.
pub fn mood_emoji(average: f64) -> &'static str {
    if average <= 0.0 {
        return MOOD_EMOJI[2];
    }
    let index = (average.round() as usize).clamp(1, MOOD_EMOJI.len()) - 1;
    MOOD_EMOJI[index]
}

/// One point per calendar day in `now`'s time zone, oldest first, ending today.
pub fn mood_trend_at<Tz: TimeZone>(entries: &[MoodEntry], now: DateTime<Tz>) -> Vec<TrendPoint> {
    let tz = now.timezone();
    let today = now.date_naive();

    let mut points = Vec::with_capacity(TREND_DAYS as usize);
    for offset in (0..TREND_DAYS).rev() {
        let date = today - Duration::days(offset);
        let moods: Vec<u8> = entries
            .iter()
            .filter(|entry| local_day(entry, &tz) == Some(date))
            .map(|entry| entry.mood)
            .collect();
        let mood = if moods.is_empty() {
            0.0
        } else {
            moods.iter().map(|m| f64::from(*m)).sum::<f64>() / moods.len() as f64
        };
        points.push(TrendPoint {
            date: date.to_string(),
            weekday: date.format("%a").to_string(),
            mood,
            count: moods.len(),
        });
    }
    points
}

/// Users with at least three entries valued two or lower in the trailing week.
pub fn flagged_users_at(
    users: &[User],
    entries: &[MoodEntry],
    now: DateTime<Utc>,
) -> Vec<SessionUser> {
    let cutoff = now - Duration::days(FLAG_WINDOW_DAYS);
    users
        .iter()
        .filter(|user| {
            let low = entries
                .iter()
                .filter(|entry| entry.user_id.as_deref() == Some(user.id.as_str()))
                .filter(|entry| entry.mood <= LOW_MOOD)
                .filter(|entry| entry.timestamp().is_some_and(|date| date > cutoff))
                .count();
            low >= FLAG_MIN_ENTRIES
        })
        .map(SessionUser::from)
        .collect()
}

pub fn days_tracked<Tz: TimeZone>(entries: &[MoodEntry], tz: &Tz) -> usize {
    tracked_days(entries, tz).len()
}

/// Consecutive days with an entry, ending today. A day without an entry yet does not
/// break a run that ended yesterday.
pub fn current_streak<Tz: TimeZone>(entries: &[MoodEntry], today: NaiveDate, tz: &Tz) -> u32 {
    let days = tracked_days(entries, tz);
    let mut cursor = if days.contains(&today) {
        today
    } else {
        today - Duration::days(1)
    };

    let mut streak = 0;
    while days.contains(&cursor) {
        streak += 1;
        cursor -= Duration::days(1);
    }
    streak
}

fn tracked_days<Tz: TimeZone>(entries: &[MoodEntry], tz: &Tz) -> BTreeSet<NaiveDate> {
    entries.iter().filter_map(|entry| local_day(entry, tz)).collect()
}

fn local_day<Tz: TimeZone>(entry: &MoodEntry, tz: &Tz) -> Option<NaiveDate> {
    entry
        .timestamp()
        .map(|date| date.with_timezone(tz).date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::iso_timestamp;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 5, 12, 0, 0).unwrap()
    }

    fn entry(mood: u8, date: DateTime<Utc>, user: Option<&str>) -> MoodEntry {
        MoodEntry {
            id: date.timestamp_millis().to_string(),
            mood,
            date: iso_timestamp(&date),
            user_id: user.map(str::to_string),
            ..MoodEntry::default()
        }
    }

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            name: format!("user {id}"),
            email: format!("{id}@example.com"),
            ..User::default()
        }
    }

    #[test]
    fn average_of_entries() {
        let entries: Vec<_> = [1, 3, 5].iter().map(|m| entry(*m, now(), None)).collect();
        assert_eq!(average_mood(&entries), 3.0);
        assert_eq!(average_mood(&[]), 0.0);
    }

    #[test]
    fn tenths_round_halves_up() {
        assert_eq!(round_tenth(1.25), 1.3);
        assert_eq!(round_tenth(2.5), 2.5);
        assert_eq!(round_tenth(3.04), 3.0);
    }

    #[test]
    fn trend_buckets_by_day() {
        let entries = vec![
            entry(2, now(), None),
            entry(4, now() - Duration::hours(1), None),
            entry(5, now() - Duration::days(2), None),
            entry(1, now() - Duration::days(9), None),
        ];

        let trend = mood_trend_at(&entries, now());
        assert_eq!(trend.len(), 7);
        assert_eq!(trend[0].date, "2025-12-30");
        assert_eq!(trend[6].date, "2026-01-05");
        assert_eq!(trend[6].weekday, "Mon");
        assert_eq!(trend[6].mood, 3.0);
        assert_eq!(trend[6].count, 2);
        assert_eq!(trend[4].mood, 5.0);
        assert_eq!(trend[5].mood, 0.0);
        assert_eq!(trend.iter().map(|p| p.count).sum::<usize>(), 3);
    }

    #[test]
    fn three_recent_low_moods_flag_a_user() {
        let users = vec![user("a"), user("b")];
        let entries = vec![
            entry(1, now() - Duration::days(1), Some("a")),
            entry(2, now() - Duration::days(2), Some("a")),
            entry(2, now() - Duration::days(3), Some("a")),
            entry(1, now() - Duration::days(1), Some("b")),
            entry(2, now() - Duration::days(2), Some("b")),
            entry(5, now() - Duration::days(2), Some("b")),
        ];

        let flagged = flagged_users_at(&users, &entries, now());
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].id, "a");
    }

    #[test]
    fn old_or_anonymous_low_moods_do_not_flag() {
        let users = vec![user("a")];
        let entries = vec![
            entry(1, now() - Duration::days(1), Some("a")),
            entry(1, now() - Duration::days(2), Some("a")),
            entry(1, now() - Duration::days(8), Some("a")),
            entry(1, now() - Duration::days(1), None),
        ];
        assert!(flagged_users_at(&users, &entries, now()).is_empty());
    }

    #[test]
    fn streak_counts_consecutive_days() {
        let today = now().date_naive();
        let entries = vec![
            entry(3, now() - Duration::days(1), None),
            entry(3, now() - Duration::days(2), None),
            entry(3, now() - Duration::days(2), None),
            entry(3, now() - Duration::days(4), None),
        ];
        assert_eq!(current_streak(&entries, today, &Utc), 2);
        assert_eq!(days_tracked(&entries, &Utc), 3);

        let mut with_today = entries.clone();
        with_today.push(entry(4, now(), None));
        assert_eq!(current_streak(&with_today, today, &Utc), 3);

        assert_eq!(current_streak(&[], today, &Utc), 0);
    }

    #[test]
    fn emoji_follows_rounded_average() {
        assert_eq!(mood_emoji(0.0), "😐");
        assert_eq!(mood_emoji(1.2), "😭");
        assert_eq!(mood_emoji(3.6), "😊");
        assert_eq!(mood_emoji(5.0), "😁");
    }
}

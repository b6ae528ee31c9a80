//! Date and time utility functions
//!
//! Human-readable formatting for notification timestamps ("5m ago") and task
//! deadlines ("tomorrow", "in 12 days"). Every function takes the reference
//! time explicitly so callers and tests agree on "now".

use chrono::{DateTime, Datelike, Local, NaiveDate, Utc, Weekday};

/// Format how long ago `then` happened, relative to `now`
pub fn format_relative(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now - then;
    if elapsed.num_seconds() < 60 {
        return "just now".to_string();
    }
    if elapsed.num_minutes() < 60 {
        return format!("{}m ago", elapsed.num_minutes());
    }
    if elapsed.num_hours() < 24 {
        return format!("{}h ago", elapsed.num_hours());
    }
    match elapsed.num_days() {
        1 => "yesterday".to_string(),
        days if days < 7 => format!("{}d ago", days),
        _ => format_calendar(then.with_timezone(&Local).date_naive(), now.with_timezone(&Local).year()),
    }
}

/// Format a deadline date relative to `today`
pub fn format_deadline(date: NaiveDate, today: NaiveDate) -> String {
    let days_diff = (date - today).num_days();

    match days_diff {
        -1 => "yesterday".to_string(),
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        diff if diff > 1 && diff <= 7 => format!("next {}", weekday_name(date.weekday())),
        diff if (-7..-1).contains(&diff) => format!("last {}", weekday_name(date.weekday())),
        diff if diff > 7 && diff <= 30 => format!("in {} days", diff),
        diff if (-30..-7).contains(&diff) => format!("{} days ago", -diff),
        _ => format_calendar(date, today.year()),
    }
}

/// Format a UTC deadline against the local calendar
pub fn format_human_deadline(deadline: DateTime<Utc>) -> String {
    let local = deadline.with_timezone(&Local);
    format_deadline(local.date_naive(), Local::now().date_naive())
}

/// "Jan 15", or "Jan 15, 2025" outside the current year
fn format_calendar(date: NaiveDate, current_year: i32) -> String {
    if date.year() == current_year {
        date.format("%b %d").to_string()
    } else {
        date.format("%b %d, %Y").to_string()
    }
}

/// Get a human-readable weekday name
fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

use chrono::NaiveDateTime;

/// "N min ago" style label for a posting time, refreshed by the caller.
pub fn relative(posted: NaiveDateTime, now: NaiveDateTime) -> String {
    let minutes = (now - posted).num_minutes();
    if minutes < 1 {
        return "just now".to_string();
    }
    if minutes < 60 {
        return format!("{minutes} min ago");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return ago(hours, "hour");
    }
    let days = hours / 24;
    if days < 7 {
        return ago(days, "day");
    }
    posted.format("%Y/%m/%d").to_string()
}

fn ago(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

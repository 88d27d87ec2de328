use std::time::{SystemTime, UNIX_EPOCH};

/// Render an optional unix timestamp (seconds) as a short relative age:
/// "just now", "12m ago", "3h ago", "2d ago". Absent or unreadable
/// timestamps come back as "unknown".
pub fn relative_age(timestamp: Option<i64>) -> String {
    let Some(ts) = timestamp else {
        return "unknown".to_string();
    };

    let now = match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(dur) => dur.as_secs() as i64,
        Err(_) => return "unknown".to_string(),
    };

    // Clock skew can put a fresh item slightly in the future.
    let delta = (now - ts).max(0);

    match delta {
        d if d >= 86_400 => format!("{}d ago", d / 86_400),
        d if d >= 3_600 => format!("{}h ago", d / 3_600),
        d if d >= 60 => format!("{}m ago", d / 60),
        _ => "just now".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::relative_age;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn now_secs() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock before epoch")
            .as_secs() as i64
    }

    #[test]
    fn absent_timestamp_is_unknown() {
        assert_eq!(relative_age(None), "unknown");
    }

    #[test]
    fn recent_and_future_are_just_now() {
        let now = now_secs();
        assert_eq!(relative_age(Some(now)), "just now");
        assert_eq!(relative_age(Some(now + 60)), "just now");
        assert_eq!(relative_age(Some(now - 45)), "just now");
    }

    #[test]
    fn buckets_minutes_hours_days() {
        let now = now_secs();
        assert_eq!(relative_age(Some(now - 7 * 60)), "7m ago");
        assert_eq!(relative_age(Some(now - 5 * 3_600)), "5h ago");
        assert_eq!(relative_age(Some(now - 9 * 86_400)), "9d ago");
    }
}

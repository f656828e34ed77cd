use chrono::{DateTime, NaiveDateTime, Utc};

/// Display sentinel for accounts that never logged in.
pub const NEVER_LOGGED_IN: &str = "-";

const LAST_LOGIN_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn parse_last_login(s: &str) -> Option<DateTime<Utc>> {
    if s.trim() == NEVER_LOGGED_IN {
        return None;
    }
    NaiveDateTime::parse_from_str(s.trim(), LAST_LOGIN_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

pub fn format_last_login(last_login: Option<DateTime<Utc>>) -> String {
    match last_login {
        Some(dt) => dt.format(LAST_LOGIN_FORMAT).to_string(),
        None => NEVER_LOGGED_IN.to_string(),
    }
}

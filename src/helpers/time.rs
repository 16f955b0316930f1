use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::constants::defaults;

const RECORD_TIME_FORMAT: &str = "%Y/%m/%d %I:%M %p";

/// Render a reading timestamp as local wall-clock time, e.g. `2024/01/15 05:30 AM`
pub fn format_record_time(time: DateTime<Utc>, timezone: Tz) -> String {
    time.with_timezone(&timezone)
        .format(RECORD_TIME_FORMAT)
        .to_string()
}

/// Resolve an account timezone name, falling back to the default zone when
/// it is unset or not a known IANA name
pub fn parse_timezone(timezone: Option<&str>) -> Tz {
    let Some(name) = timezone else {
        log::debug!("No account timezone set; using {}", defaults::TIMEZONE);
        return default_timezone();
    };
    name.parse::<Tz>().unwrap_or_else(|e| {
        log::warn!(
            "Invalid account timezone '{}' ({}); using {}",
            name,
            e,
            defaults::TIMEZONE
        );
        default_timezone()
    })
}

fn default_timezone() -> Tz {
    chrono_tz::America::New_York
}

//! Timezone converter.
//!
//! Input is a wall-clock date-time without an offset. It is interpreted in the
//! source zone and rendered in the target zone with the zone abbreviation.

use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::error::{ToolError, ToolResult};

/// Accepted input layouts, tried in order.
const INPUT_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Layout of `<input type="datetime-local">`, used for the default input.
pub const INPUT_LAYOUT: &str = "%Y-%m-%dT%H:%M";
pub const OUTPUT_LAYOUT: &str = "%Y-%m-%d %H:%M:%S %Z";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimezoneInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub offset: &'static str,
}

const fn zone(id: &'static str, label: &'static str, offset: &'static str) -> TimezoneInfo {
    TimezoneInfo { id, label, offset }
}

pub const COMMON_TIMEZONES: [TimezoneInfo; 14] = [
    zone("UTC", "UTC (Coordinated Universal Time)", "+00:00"),
    zone("America/New_York", "New York (EST/EDT)", "-05:00/-04:00"),
    zone("America/Chicago", "Chicago (CST/CDT)", "-06:00/-05:00"),
    zone("America/Denver", "Denver (MST/MDT)", "-07:00/-06:00"),
    zone("America/Los_Angeles", "Los Angeles (PST/PDT)", "-08:00/-07:00"),
    zone("Europe/London", "London (GMT/BST)", "+00:00/+01:00"),
    zone("Europe/Paris", "Paris (CET/CEST)", "+01:00/+02:00"),
    zone("Europe/Berlin", "Berlin (CET/CEST)", "+01:00/+02:00"),
    zone("Asia/Tokyo", "Tokyo (JST)", "+09:00"),
    zone("Asia/Shanghai", "Shanghai (CST)", "+08:00"),
    zone("Asia/Dubai", "Dubai (GST)", "+04:00"),
    zone("Asia/Kolkata", "Mumbai (IST)", "+05:30"),
    zone("Australia/Sydney", "Sydney (AEST/AEDT)", "+10:00/+11:00"),
    zone("Pacific/Auckland", "Auckland (NZST/NZDT)", "+12:00/+13:00"),
];

/// Parses an IANA zone name such as `Europe/Paris`.
pub fn parse_zone(name: &str) -> ToolResult<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| ToolError::invalid_format(format!("unknown timezone: {name}")))
}

/// Parses `YYYY-MM-DDTHH:MM[:SS]` or the same with a space separator.
pub fn parse_local(input: &str) -> ToolResult<NaiveDateTime> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ToolError::EmptyInput);
    }
    INPUT_FORMATS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(input, layout).ok())
        .ok_or_else(|| ToolError::invalid_format(format!("unrecognized date/time: {input}")))
}

/// Interprets `local` as wall-clock time in `from` and returns the same
/// instant in `to`.
///
/// Times skipped by a DST transition are rejected; repeated times resolve to
/// the earlier instant.
pub fn convert(local: NaiveDateTime, from: Tz, to: Tz) -> ToolResult<DateTime<Tz>> {
    let instant = match from.from_local_datetime(&local) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => {
            tracing::debug!(%local, zone = %from, "ambiguous local time, using earliest");
            earliest
        }
        LocalResult::None => {
            return Err(ToolError::invalid_format(format!(
                "{local} does not exist in {from}"
            )))
        }
    };
    Ok(instant.with_timezone(&to))
}

/// String-in, string-out conversion used by the shell.
pub fn convert_str(input: &str, from: &str, to: &str) -> ToolResult<String> {
    let local = parse_local(input)?;
    let converted = convert(local, parse_zone(from)?, parse_zone(to)?)?;
    Ok(converted.format(OUTPUT_LAYOUT).to_string())
}

/// `HH:MM:SS` of `now` in `zone`.
pub fn current_time_in(zone: Tz, now: DateTime<Utc>) -> String {
    now.with_timezone(&zone).format("%H:%M:%S").to_string()
}

//! The OFX date-time grammar.
//!
//! ```text
//! YYYYMMDD[HH[MM[SS[.XXX]]]][[+|-]H[.H][:TZ]]
//! ```
//!
//! Trailing time fields may be omitted. The bracketed offset is in hours;
//! the zone abbreviation after the colon is informational and discarded.
//! Without an offset the value is UTC.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone};
use regex::Regex;
use std::sync::LazyLock;

static DATETIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})(\d{2})(\d{2})(?:(\d{2})(?:(\d{2})(?:(\d{2})(?:\.(\d{1,9}))?)?)?)?$")
        .expect("BUG: invalid DATETIME_RE regex literal")
});

static OFFSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-]?)(\d{1,2})(?:\.(\d{1,2}))?$").expect("BUG: invalid OFFSET_RE regex literal")
});

/// Parses an OFX timestamp. Blank or malformed input yields `None`.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let (stamp, offset) = match raw.find('[') {
        Some(open) => {
            let bracket = raw[open + 1..].strip_suffix(']')?;
            (raw[..open].trim_end(), parse_offset(bracket)?)
        }
        None => (raw, FixedOffset::east_opt(0)?),
    };

    let caps = DATETIME_RE.captures(stamp)?;
    let field = |index: usize| -> Option<u32> {
        match caps.get(index) {
            Some(m) => m.as_str().parse().ok(),
            None => Some(0),
        }
    };

    let date = NaiveDate::from_ymd_opt(caps[1].parse().ok()?, field(2)?, field(3)?)?;
    let nanos = match caps.get(7) {
        Some(fraction) => format!("{:0<9}", fraction.as_str()).parse().ok()?,
        None => 0,
    };
    let time = NaiveTime::from_hms_nano_opt(field(4)?, field(5)?, field(6)?, nanos)?;

    offset.from_local_datetime(&date.and_time(time)).single()
}

/// Reads `-5`, `+5:EST`, `0:GMT` or `-3.5:NST`. The abbreviation is dropped.
fn parse_offset(bracket: &str) -> Option<FixedOffset> {
    let hours = bracket.split(':').next()?.trim();
    let caps = OFFSET_RE.captures(hours)?;
    let whole: i32 = caps[2].parse().ok()?;
    let fraction_minutes = match caps.get(3) {
        Some(m) => {
            let digits = m.as_str();
            let value: i32 = digits.parse().ok()?;
            let scale = 10i32.pow(digits.len() as u32);
            value * 60 / scale
        }
        None => 0,
    };
    let seconds = (whole * 60 + fraction_minutes) * 60;
    let signed = if &caps[1] == "-" { -seconds } else { seconds };
    FixedOffset::east_opt(signed)
}

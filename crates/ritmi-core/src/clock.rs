//! Conversions between "HH:MM" clock strings and minutes since midnight.
//!
//! The engine works internally in integer minutes within `[0, 1440)` and
//! only renders clock strings at its edges.

use crate::error::ValidationError;

/// Minutes in a full day.
pub const DAY_MINUTES: i64 = 24 * 60;

/// Parse a fixed-width "HH:MM" clock string into minutes since midnight.
///
/// Inputs are expected to be pre-validated upstream; anything else is a
/// caller-contract violation and yields an error.
pub fn parse_clock(time: &str) -> Result<i64, ValidationError> {
    let (hours, minutes) = time
        .split_once(':')
        .ok_or_else(|| ValidationError::InvalidClock(time.to_string()))?;

    let hours: i64 = hours
        .parse()
        .map_err(|_| ValidationError::InvalidClock(time.to_string()))?;
    let minutes: i64 = minutes
        .parse()
        .map_err(|_| ValidationError::InvalidClock(time.to_string()))?;

    // "24:00" is accepted as the end-of-day marker produced by format_clock.
    let end_of_day = hours == 24 && minutes == 0;
    if !end_of_day && (!(0..24).contains(&hours) || !(0..60).contains(&minutes)) {
        return Err(ValidationError::InvalidClock(time.to_string()));
    }

    Ok(hours * 60 + minutes)
}

/// Format minutes since midnight as a zero-padded "HH:MM" string.
///
/// `1440` renders as `"24:00"`: the last free interval of a day ends at
/// 1440 and a block ending at midnight must read as the end of this day,
/// not the start of the next one. Values outside `[0, 1440]` are not
/// guaranteed to round-trip.
pub fn format_clock(minutes: i64) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    format!("{hours:02}:{mins:02}")
}

/// Ordering helper: minutes for a clock string, 0 when malformed.
///
/// Malformed times come from contract-violating callers; their ordering is
/// undefined, so collapsing them to midnight is acceptable.
pub(crate) fn clock_or_zero(time: &str) -> i64 {
    parse_clock(time).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_well_formed_times() {
        assert_eq!(parse_clock("00:00").unwrap(), 0);
        assert_eq!(parse_clock("09:30").unwrap(), 570);
        assert_eq!(parse_clock("23:59").unwrap(), 1439);
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!(parse_clock("").is_err());
        assert!(parse_clock("930").is_err());
        assert!(parse_clock("9:xx").is_err());
        assert!(parse_clock("25:00").is_err());
        assert!(parse_clock("12:60").is_err());
        assert!(parse_clock("24:30").is_err());
    }

    #[test]
    fn parse_accepts_end_of_day_marker() {
        assert_eq!(parse_clock("24:00").unwrap(), DAY_MINUTES);
    }

    #[test]
    fn format_zero_pads() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(570), "09:30");
        assert_eq!(format_clock(1439), "23:59");
    }

    #[test]
    fn format_end_of_day_is_24_00() {
        assert_eq!(format_clock(DAY_MINUTES), "24:00");
    }

    #[test]
    fn round_trip_within_day() {
        for m in (0..DAY_MINUTES).step_by(7) {
            assert_eq!(parse_clock(&format_clock(m)).unwrap(), m);
        }
    }
}

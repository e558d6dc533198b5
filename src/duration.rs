use time::format_description::FormatItem;
use time::macros::format_description;
use time::Time;

use crate::errors::CatalogError;
use crate::session::SessionWithTags;

/// A 12-hour clock time as written in the catalog, e.g. `01:00 PM`.
const CLOCK_12: &[FormatItem<'static>] = format_description!("[hour repr:12]:[minute] [period]");

/// Splits a duration such as `01:00 PM - 02:00 PM` into its start and
/// end, each as a 24-hour `HH:MM:SS` string.
///
/// ```
/// use sessions::duration::parse_duration;
/// let (start, end) = parse_duration("01:00 PM - 02:00 PM").unwrap();
/// assert_eq!(start, "13:00:00");
/// assert_eq!(end, "14:00:00");
/// ```
pub fn parse_duration(duration: &str) -> Result<(String, String), CatalogError> {
    let mut parts = duration.split('-');

    // Anything after a second `-` is ignored.
    let (start, end) = match (parts.next(), parts.next()) {
        (Some(start), Some(end)) => (start.trim(), end.trim()),
        _ => {
            return Err(CatalogError::MissingSeparator {
                duration: duration.to_owned(),
            })
        }
    };

    let start = parse_clock(start).map_err(|source| CatalogError::InvalidStartTime {
        value: start.to_owned(),
        source,
    })?;
    let end = parse_clock(end).map_err(|source| CatalogError::InvalidEndTime {
        value: end.to_owned(),
        source,
    })?;

    Ok((to_24_hour(start), to_24_hour(end)))
}

/// Parses `hh:mm AM`. An hour of `00` is read as `12`, so `00:30 AM`
/// is half past midnight and `00:30 PM` half past noon.
fn parse_clock(text: &str) -> Result<Time, time::error::Parse> {
    match text.strip_prefix("00:") {
        Some(rest) => Time::parse(&format!("12:{}", rest), &CLOCK_12),
        None => Time::parse(text, &CLOCK_12),
    }
}

/// Formats as `HH:MM:SS` on a 24-hour clock.
fn to_24_hour(time: Time) -> String {
    format!("{:02}:{:02}:{:02}", time.hour(), time.minute(), time.second())
}

/// Fills in `duration_start` and `duration_end` for every session.
/// Stops at the first duration that cannot be parsed, leaving later
/// sessions untouched.
pub fn normalize(sessions: &mut [SessionWithTags]) -> Result<(), CatalogError> {
    for session in sessions.iter_mut() {
        let fields = &mut session.item.additional_fields;
        let (start, end) = parse_duration(&fields.duration)?;

        fields.duration_start = start;
        fields.duration_end = end;
    }

    Ok(())
}

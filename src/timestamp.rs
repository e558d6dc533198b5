use serde::de::{self, Deserialize, Deserializer};
use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

/// The catalog's timestamp format, e.g. `2024-05-13T16:42:11+0000`.
/// Unlike RFC 3339 the offset has no colon.
pub const FORMAT: &[FormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory][offset_minute]"
);

/// Parses a timestamp in [`FORMAT`].
///
/// ```
/// use sessions::timestamp::parse;
/// let parsed = parse("2024-05-13T16:42:11-0700").unwrap();
/// assert_eq!(parsed.hour(), 16);
/// assert_eq!(parsed.offset().whole_hours(), -7);
/// ```
pub fn parse(s: &str) -> Result<OffsetDateTime, time::error::Parse> {
    OffsetDateTime::parse(s, &FORMAT)
}

/// Formats a timestamp in [`FORMAT`].
pub fn format(timestamp: &OffsetDateTime) -> Result<String, time::error::Format> {
    timestamp.format(&FORMAT)
}

/// Deserializes an optional timestamp. JSON `null` and the string
/// `"null"` both produce `None`; any other string must be in
/// [`FORMAT`]. Pair with `#[serde(default)]` so that missing fields
/// are also `None`.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<OffsetDateTime>, D::Error>
where D: Deserializer<'de> {
    let o: Option<String> = Deserialize::deserialize(deserializer)?;

    match o.as_deref() {
        None | Some("null") => Ok(None),
        Some(s) => parse(s)
            .map(Some)
            .map_err(|e| de::Error::custom(format_args!("invalid timestamp {:?}: {}", s, e))),
    }
}

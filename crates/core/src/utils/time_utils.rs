use chrono::NaiveDateTime;

use crate::constants::{SNAPSHOT_TIMESTAMP_FORMAT, SNAPSHOT_TIMESTAMP_FORMAT_ISO};
use crate::errors::Result;

/// Parses a producer timestamp.
///
/// The trading process writes `"YYYY-MM-DD HH:MM:SS"`; ISO-8601 with an
/// optional fractional second is accepted as a fallback. The timestamp is
/// taken as recorded, with no timezone conversion.
pub fn parse_snapshot_timestamp(raw: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, SNAPSHOT_TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, SNAPSHOT_TIMESTAMP_FORMAT_ISO))
        .map_err(Into::into)
}

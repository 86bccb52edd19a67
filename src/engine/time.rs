use chrono::{
    DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, SubsecRound, TimeZone, Utc,
};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimestampError {
    #[error("unrecognized timestamp: `{input}`")]
    Unrecognized { input: String },

    #[error("epoch seconds out of range: {seconds}")]
    EpochOutOfRange { seconds: i64 },
}

/// Normalize any timezone-aware instant to UTC at whole-second precision.
///
/// Sub-second precision is discarded; the offset is folded into UTC.
pub fn normalize_datetime<Tz: TimeZone>(input: &DateTime<Tz>) -> DateTime<Utc> {
    input.with_timezone(&Utc).trunc_subsecs(0)
}

/// Format an instant as the canonical `YYYY-MM-DDTHH:mm:ss` UTC string.
///
/// The instant is normalized first, so the output has no fractional
/// component; the RFC 3339 `Z` suffix is stripped.
pub fn format_datetime<Tz: TimeZone>(input: &DateTime<Tz>) -> String {
    let formatted = normalize_datetime(input).to_rfc3339_opts(SecondsFormat::Secs, true);
    match formatted.strip_suffix('Z') {
        Some(stripped) => stripped.to_owned(),
        None => formatted,
    }
}

/// Parse a timestamp string and normalize it.
///
/// Accepts RFC 3339 with any offset, the canonical zone-less form
/// (interpreted as UTC, optional fractional seconds), and date-only
/// `YYYY-MM-DD` (midnight UTC).
pub fn parse_datetime(input: &str) -> Result<DateTime<Utc>, TimestampError> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Ok(normalize_datetime(&parsed));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(normalize_datetime(&parsed.and_utc()));
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(parsed.and_time(NaiveTime::MIN).and_utc());
    }
    Err(TimestampError::Unrecognized {
        input: input.to_owned(),
    })
}

/// Current instant, already normalized to whole-second UTC.
pub fn datetime_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}

/// Interpret whole epoch seconds as an instant.
pub fn datetime_from_epoch_seconds(seconds: i64) -> Result<DateTime<Utc>, TimestampError> {
    DateTime::from_timestamp(seconds, 0).ok_or(TimestampError::EpochOutOfRange { seconds })
}

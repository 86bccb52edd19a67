use chrono::{DateTime, Utc};
use codecq::engine::time::{format_datetime, normalize_datetime, parse_datetime};

fn instant(raw: &str) -> DateTime<Utc> {
    raw.parse().expect("valid rfc3339 instant")
}

#[test]
fn normalizes_offset_datetime_to_utc() {
    let parsed = parse_datetime("2026-02-23T20:15:30+09:00").expect("valid datetime");
    assert_eq!(format_datetime(&parsed), "2026-02-23T11:15:30");
}

#[test]
fn drops_subsecond_component() {
    assert_eq!(
        format_datetime(&instant("2023-06-15T10:30:45.123Z")),
        "2023-06-15T10:30:45"
    );
}

#[test]
fn canonical_output_parses_back_to_the_normalized_instant() {
    for raw in [
        "1970-01-01T00:00:00Z",
        "1969-07-20T20:17:40.5Z",
        "2023-06-15T10:30:45.123Z",
        "2038-01-19T03:14:07.999999Z",
    ] {
        let original = instant(raw);
        let reparsed = parse_datetime(&format_datetime(&original)).expect("canonical form parses");
        assert_eq!(reparsed, normalize_datetime(&original), "input: {raw}");
    }
}

#[test]
fn invalid_datetime_is_an_error() {
    assert!(parse_datetime("not-a-datetime").is_err());
    assert!(parse_datetime("2023-13-45T99:99:99").is_err());
    assert!(parse_datetime("").is_err());
}

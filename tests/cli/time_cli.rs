use std::io::Cursor;

use codecq::cmd::time::run;

#[test]
fn time_command_pipeline_success_path() {
    let mut output = Vec::new();
    run(Cursor::new(br#""2026-02-23T20:15:30+09:00""#), &mut output)
        .expect("time command should succeed");
    assert_eq!(output, b"\"2026-02-23T11:15:30\"\n");
}

#[test]
fn time_command_is_deterministic() {
    let input = br#""2023-06-15T10:30:45.123Z""#;

    let mut first = Vec::new();
    run(Cursor::new(input), &mut first).expect("first run should succeed");

    let mut second = Vec::new();
    run(Cursor::new(input), &mut second).expect("second run should succeed");

    assert_eq!(first, second);
}

#[test]
fn time_command_rejects_malformed_json() {
    let mut output = Vec::new();
    let error = run(Cursor::new(b"{not json"), &mut output).expect_err("must not run");
    assert!(matches!(
        error,
        codecq::domain::error::TimeError::ReadInput { .. }
    ));
    assert!(output.is_empty());
}

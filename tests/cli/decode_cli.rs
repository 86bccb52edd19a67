use std::io::Cursor;

use codecq::cmd::decode::run;
use codecq::domain::Codec;

#[test]
fn decode_command_pipeline_success_path() {
    let mut output = Vec::new();
    run(Cursor::new(br#""SGVsbG8=""#), &mut output, Codec::Text).expect("decode should succeed");
    assert_eq!(output, b"\"Hello\"\n");
}

#[test]
fn decode_command_reports_malformed_payload() {
    let mut output = Vec::new();
    let error = run(
        Cursor::new(br#""not-valid-base64!!""#),
        &mut output,
        Codec::Bytes,
    )
    .expect_err("must not run");
    assert!(matches!(
        error,
        codecq::domain::error::DecodeError::Decode {
            codec: Codec::Bytes,
            ..
        }
    ));
    assert!(output.is_empty());
}

#[test]
fn decode_command_reports_invalid_utf8() {
    let mut output = Vec::new();
    let error = run(Cursor::new(b"[255,254]"), &mut output, Codec::Utf8).expect_err("must not run");
    assert!(matches!(
        error,
        codecq::domain::error::DecodeError::Decode {
            codec: Codec::Utf8,
            ..
        }
    ));
    assert!(output.is_empty());
}

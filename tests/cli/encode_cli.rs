use std::io::Cursor;

use codecq::cmd::encode::run;
use codecq::domain::Codec;

#[test]
fn encode_command_pipeline_success_path() {
    let mut output = Vec::new();
    run(Cursor::new(r#""café""#.as_bytes()), &mut output, Codec::Utf8).expect("encode should succeed");
    assert_eq!(output, b"[99,97,102,195,169]\n");
}

#[test]
fn encode_command_is_deterministic() {
    let input = br#"[0,1,2,253,254,255]"#;

    let mut first = Vec::new();
    run(Cursor::new(input), &mut first, Codec::Bytes).expect("first run should succeed");

    let mut second = Vec::new();
    run(Cursor::new(input), &mut second, Codec::Bytes).expect("second run should succeed");

    assert_eq!(first, second);
}

#[test]
fn encode_command_rejects_wrong_payload_shape() {
    let mut output = Vec::new();
    let error = run(Cursor::new(b"42"), &mut output, Codec::Text).expect_err("must not run");
    assert!(matches!(
        error,
        codecq::domain::error::EncodeError::InvalidInput {
            codec: Codec::Text,
            ..
        }
    ));
    assert!(output.is_empty());
}

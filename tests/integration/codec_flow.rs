use codecq::cmd::{decode, encode, time};
use codecq::domain::Codec;
use serde_json::json;

#[test]
fn encode_then_decode_restores_every_codec_payload() {
    let cases = [
        (Codec::Bytes, json!([72, 101, 108, 108, 111])),
        (Codec::Text, json!("café ☕")),
        (Codec::Utf8, json!("Hello")),
    ];
    for (codec, payload) in cases {
        let encoded = encode::encode_value(&payload, codec).expect("encode succeeds");
        let decoded = decode::decode_value(&encoded, codec).expect("decode succeeds");
        assert_eq!(decoded, payload, "codec: {codec}");
    }
}

#[test]
fn bytes_and_text_codecs_agree_on_utf8_payloads() {
    let text = json!("café");
    let as_text = encode::encode_value(&text, Codec::Text).expect("encode text");

    let bytes = encode::encode_value(&text, Codec::Utf8).expect("encode utf8");
    let as_bytes = encode::encode_value(&bytes, Codec::Bytes).expect("encode bytes");

    assert_eq!(as_text, as_bytes);
}

#[test]
fn canonical_timestamp_flows_through_time_twice_unchanged() {
    let first = time::canonicalize_value(&json!("2023-06-15T10:30:45.123Z")).expect("canonicalize");
    let second = time::canonicalize_value(&first).expect("canonical form is accepted");
    assert_eq!(first, second);
    assert_eq!(second, json!("2023-06-15T10:30:45"));
}

#[test]
fn epoch_seconds_and_rfc3339_inputs_agree() {
    let from_epoch = time::canonicalize_value(&json!(1686825045)).expect("epoch input");
    let from_string =
        time::canonicalize_value(&json!("2023-06-15T10:30:45Z")).expect("string input");
    assert_eq!(from_epoch, from_string);
}

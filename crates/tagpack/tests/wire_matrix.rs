mod common;

use tagpack::{encode, encode_with, Compat, EncodeError, Encoder, EncoderOptions, Mapping, Value};

fn enc(value: &Value) -> Vec<u8> {
    encode(Some(value)).unwrap().unwrap()
}

fn enc_ref(value: &Value) -> Option<Vec<u8>> {
    encode_with(EncoderOptions::new().compat(Compat::Reference), Some(value)).unwrap()
}

fn text(len: usize) -> Value {
    Value::Text("s".repeat(len))
}

fn seq(len: usize) -> Value {
    Value::Sequence(vec![Value::Null; len])
}

fn map(len: usize) -> Value {
    Value::Mapping((0..len).map(|i| (format!("k{i}"), Value::Null)).collect())
}

#[test]
fn constants_matrix() {
    assert_eq!(enc(&Value::Null), [0xc0]);
    assert_eq!(enc(&Value::Bool(true)), [0xc3]);
    assert_eq!(enc(&Value::Bool(false)), [0xc2]);
    assert_eq!(encode(None).unwrap(), None);
}

#[test]
fn integer_boundary_matrix() {
    let cases: &[(i64, &[u8])] = &[
        (0, &[0x00]),
        (1, &[0x01]),
        (127, &[0x7f]),
        (128, &[0xcc, 0x80]),
        (255, &[0xcc, 0xff]),
        (256, &[0xcd, 0x01, 0x00]),
        (65535, &[0xcd, 0xff, 0xff]),
        (65536, &[0xce, 0x00, 0x01, 0x00, 0x00]),
        (-1, &[0xff]),
        (-31, &[0xe1]),
        (-32, &[0xe0]),
        (-33, &[0xd0, 0xdf]),
        (-128, &[0xd0, 0x80]),
        (-129, &[0xd1, 0xff, 0x7f]),
        (-32768, &[0xd1, 0x80, 0x00]),
        (-32769, &[0xd2, 0xff, 0xff, 0x7f, 0xff]),
        (-2147483647, &[0xd2, 0x80, 0x00, 0x00, 0x01]),
    ];
    for (n, expected) in cases {
        assert_eq!(enc(&Value::Integer(*n)), *expected, "integer {n}");
    }
}

#[test]
fn reference_integer_matrix() {
    let cases: &[(i64, &[u8])] = &[
        (127, &[0x7f]),
        (128, &[0xd0, 0x80]),
        (255, &[0xd0, 0xff]),
        (256, &[0xd1, 0x01, 0x00]),
        (65535, &[0xd1, 0xff, 0xff]),
        (-32, &[0xe0]),
        (-32769, &[0xd2, 0xff, 0xff, 0x7f, 0xff]),
        (-2147483648, &[0x80]),
    ];
    for (n, expected) in cases {
        assert_eq!(
            enc_ref(&Value::Integer(*n)).as_deref(),
            Some(*expected),
            "integer {n}"
        );
    }
    assert_eq!(enc_ref(&Value::Integer(65536)), None);
}

#[test]
fn float_matrix() {
    assert_eq!(enc(&Value::Float(0.5)), [0xca, 0x3f, 0x00, 0x00, 0x00]);
    assert_eq!(enc(&Value::Float(-2.25)), [0xca, 0xc0, 0x10, 0x00, 0x00]);
    assert_eq!(enc(&Value::Float(f64::INFINITY)), [0xca, 0x7f, 0x80, 0x00, 0x00]);
    assert_eq!(enc(&Value::Float(100.0)), [0x64]);
    assert_eq!(enc(&Value::Float(2_147_483_648.0)), [0xca, 0x4f, 0x00, 0x00, 0x00]);
    assert_eq!(enc(&Value::Integer(-(1 << 31) - 1))[0], 0xca);
}

#[test]
fn text_boundary_matrix() {
    for len in [0usize, 1, 31] {
        let bytes = enc(&text(len));
        assert_eq!(bytes.len(), 1 + len);
        assert_eq!(bytes[0], 0xa0 | len as u8);
    }
    assert_eq!(&enc(&text(32))[..2], &[0xd9, 0x20]);
    assert_eq!(&enc(&text(255))[..2], &[0xd9, 0xff]);
    assert_eq!(&enc(&text(256))[..3], &[0xda, 0x01, 0x00]);
    assert_eq!(&enc(&text(65535))[..3], &[0xda, 0xff, 0xff]);
    let long = enc(&text(65536));
    assert_eq!(&long[..5], &[0xdb, 0x00, 0x01, 0x00, 0x00]);
    assert_eq!(long.len(), 5 + 65536);
}

#[test]
fn bytes_boundary_matrix() {
    let blob = |len: usize| Value::bytes(vec![0xabu8; len]);
    assert_eq!(enc(&blob(0)), [0xc4, 0x00]);
    assert_eq!(&enc(&blob(255))[..2], &[0xc4, 0xff]);
    assert_eq!(&enc(&blob(256))[..3], &[0xc5, 0x01, 0x00]);
    assert_eq!(&enc(&blob(65535))[..3], &[0xc5, 0xff, 0xff]);
    let long = enc(&blob(65536));
    assert_eq!(&long[..5], &[0xc6, 0x00, 0x01, 0x00, 0x00]);
    assert_eq!(long.len(), 5 + 65536);
    assert!(long[5..].iter().all(|b| *b == 0xab));
}

#[test]
fn reference_drops_long_payloads() {
    assert_eq!(enc_ref(&text(65535)).map(|b| b.len()), Some(3 + 65535));
    assert_eq!(enc_ref(&text(65536)), None);
    assert_eq!(enc_ref(&Value::bytes(vec![0u8; 65536])), None);
    let wrapped = Value::mapping([("big", text(70_000)), ("n", Value::Integer(1))]);
    assert_eq!(
        enc_ref(&wrapped),
        Some(vec![0x82, 0xa3, b'b', b'i', b'g', 0xa1, b'n', 0x01])
    );
}

#[test]
fn collection_header_matrix() {
    assert_eq!(enc(&seq(0)), [0x90]);
    assert_eq!(enc(&seq(15))[0], 0x9f);
    assert_eq!(&enc(&seq(16))[..3], &[0xdc, 0x00, 0x10]);
    assert_eq!(&enc(&seq(65535))[..3], &[0xdc, 0xff, 0xff]);
    assert_eq!(&enc(&seq(65536))[..5], &[0xdd, 0x00, 0x01, 0x00, 0x00]);

    assert_eq!(enc(&map(0)), [0x80]);
    assert_eq!(enc(&map(15))[0], 0x8f);
    assert_eq!(&enc(&map(16))[..3], &[0xde, 0x00, 0x10]);
    assert_eq!(&enc(&map(65536))[..5], &[0xdf, 0x00, 0x01, 0x00, 0x00]);
}

#[test]
fn fixarray_is_header_plus_children() {
    let items = vec![
        Value::Integer(300),
        Value::from("x"),
        Value::Float(0.5),
        Value::Null,
    ];
    let mut expected = vec![0x94];
    for item in &items {
        expected.extend(enc(item));
    }
    assert_eq!(enc(&Value::Sequence(items)), expected);
}

#[test]
fn fixmap_worked_example() {
    let value = Value::mapping([("a", Value::Integer(1)), ("b", Value::Integer(2))]);
    assert_eq!(enc(&value), [0x82, 0xa1, 0x61, 0x01, 0xa1, 0x62, 0x02]);
}

#[test]
fn mapping_keys_are_plain_text_units() {
    let key = "k".repeat(40);
    let mut mapping = Mapping::new();
    mapping.insert(key.clone(), Value::Bool(true));
    let bytes = enc(&Value::Mapping(mapping));
    let mut expected = vec![0x81];
    expected.extend(enc(&Value::Text(key)));
    expected.push(0xc3);
    assert_eq!(bytes, expected);
}

#[test]
fn nested_document() {
    let value = Value::mapping([
        ("id", Value::Integer(1000)),
        (
            "tags",
            Value::Sequence(vec![Value::from("x"), Value::from("yz")]),
        ),
        ("blob", Value::bytes(vec![1u8, 2, 3])),
        ("ok", Value::Bool(false)),
    ]);
    assert_eq!(
        enc(&value),
        [
            0x84, //
            0xa2, b'i', b'd', 0xcd, 0x03, 0xe8, //
            0xa4, b't', b'a', b'g', b's', 0x92, 0xa1, b'x', 0xa2, b'y', b'z', //
            0xa4, b'b', b'l', b'o', b'b', 0xc4, 0x03, 0x01, 0x02, 0x03, //
            0xa2, b'o', b'k', 0xc2,
        ]
    );
    assert!(common::is_single_unit(&enc(&value)));
}

#[test]
fn encoding_does_not_touch_the_source() {
    let value = Value::mapping([("list", seq(3)), ("n", Value::Float(1.25))]);
    let snapshot = value.clone();
    let first = enc(&value);
    let second = enc(&value);
    assert_eq!(value, snapshot);
    assert_eq!(first, second);
}

#[test]
fn errors_are_all_or_nothing() {
    let mut encoder = Encoder::with_options(EncoderOptions::new().max_depth(Some(2)));
    let deep = Value::Sequence(vec![Value::Sequence(vec![Value::Sequence(vec![])])]);
    assert_eq!(
        encoder.encode(Some(&deep)),
        Err(EncodeError::DepthLimit { limit: 2 })
    );
    assert_eq!(encoder.writer.x(), 0);
    assert_eq!(
        encoder.encode(Some(&Value::Sequence(vec![]))).unwrap(),
        Some(vec![0x90])
    );
}

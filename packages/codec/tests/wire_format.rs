use extrinsic_codec::{Compact, Decode, Empty, Encode, Error};

#[test]
fn length_prefixed_payload_after_discriminant() {
    let value: Option<Vec<u8>> = Some(b"abc".to_vec());
    assert_eq!(&value.encode()[..], &[0x01, 0x0c, b'a', b'b', b'c']);
}

#[test]
fn decode_consumes_exactly_one_value() {
    let mut src: &[u8] = &[0x00, 0x01, 0x07];
    assert_eq!(Option::<u8>::decode(&mut src), Ok(None));
    assert_eq!(Option::<u8>::decode(&mut src), Ok(Some(7)));
    assert!(src.is_empty());
}

#[test]
fn encoding_is_stable_across_calls() {
    let value: Result<Empty, Vec<u64>> = Err(vec![1, u64::MAX]);
    let first = value.encode();
    for _ in 0..8 {
        assert_eq!(value.encode(), first);
    }
}

#[test]
fn encode_to_appends_to_existing_buffer() {
    let mut buf = extrinsic_codec::BytesMut::new();
    0xaau8.encode_to(&mut buf);
    Compact(300u32).encode_to(&mut buf);
    assert_eq!(&buf[..], &[0xaa, 0xb1, 0x04]);
}

#[test]
fn truncated_variant_payload_underflows() {
    assert_eq!(
        Option::<u32>::decode_all(&[0x01, 0x01]),
        Err(Error::Underflow {
            needed: 4,
            remaining: 1
        })
    );
}

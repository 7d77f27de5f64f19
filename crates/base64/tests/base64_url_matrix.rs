use multipack_base64::{from_base64_url, to_base64_url};
use rand::{Rng, SeedableRng};

#[test]
fn known_vectors() {
    let cases: &[(&[u8], &str)] = &[
        (b"", ""),
        (b"f", "Zg"),
        (b"fo", "Zm8"),
        (b"foo", "Zm9v"),
        (b"foob", "Zm9vYg"),
        (b"fooba", "Zm9vYmE"),
        (b"foobar", "Zm9vYmFy"),
    ];
    for (raw, encoded) in cases {
        assert_eq!(to_base64_url(raw), *encoded);
        assert_eq!(from_base64_url(encoded).unwrap(), *raw);
    }
}

#[test]
fn binary_payload_roundtrip() {
    let payload: Vec<u8> = (0u16..=255).map(|b| b as u8).collect();
    let encoded = to_base64_url(&payload);
    assert!(!encoded.contains('='));
    assert!(!encoded.contains('+'));
    assert!(!encoded.contains('/'));
    assert_eq!(from_base64_url(&encoded).unwrap(), payload);
}

#[test]
fn random_roundtrip() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x6261_7365_3634);
    for _ in 0..200 {
        let len = rng.gen_range(0..256);
        let data: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
        let encoded = to_base64_url(&data);
        assert_eq!(from_base64_url(&encoded).unwrap(), data);
    }
}

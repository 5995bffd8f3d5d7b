use sha256_core::hash::sha256::{compress_padded, pad};
use sha256_core::{ByteOrder, Error, Sha256, sha256};

fn sha256_hex(input: &[u8]) -> String {
    sha256(input).unwrap().to_hex()
}

fn reference(input: &[u8]) -> [u8; 32] {
    use sha2::Digest as _;

    sha2::Sha256::digest(input).into()
}

fn expect_sha256_eq(input: &[u8], expected_hex: &str) {
    assert_eq!(expected_hex.len(), 64, "malformed expected digest");

    let expected = hex::decode(expected_hex).unwrap();
    let got = sha256(input).unwrap();

    assert_eq!(
        got.as_ref(),
        &expected[..],
        "Digest mismatch for input {:?}\nExpected {}\nGot      {}",
        input,
        expected_hex,
        got,
    );
}

// -------------------------------------------------------
// 1. KNOWN VECTORS
// -------------------------------------------------------

#[test]
fn sha256_empty_vector() {
    expect_sha256_eq(
        b"",
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    );
}

#[test]
fn sha256_hello_world() {
    expect_sha256_eq(
        b"hello world",
        "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9",
    );
}

#[test]
fn sha256_quick_brown_fox_with_period() {
    expect_sha256_eq(
        b"The quick brown fox jumps over the lazy dog.",
        "ef537f25c895bfa782526529a9b63d97aa631564d5d789c2b765448c8635fb6c",
    );
}

#[test]
fn sha256_abc_vector() {
    expect_sha256_eq(
        b"abc",
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    );
}

#[test]
fn sha256_two_block_vector() {
    expect_sha256_eq(
        b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    );
}

#[test]
fn sha256_million_a() {
    let buf = vec![b'a'; 1_000_000];

    expect_sha256_eq(
        &buf,
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0",
    );
}

#[test]
fn sha256_accepts_str() {
    assert_eq!(
        sha256("hello world").unwrap().to_hex(),
        sha256_hex(b"hello world")
    );
}

// -------------------------------------------------------
// 2. PADDING BOUNDARIES
// -------------------------------------------------------

#[test]
fn sha256_boundary_lengths_match_reference() {
    for len in [0, 55, 56, 63, 64, 119, 120] {
        let buf: Vec<u8> = (0..len).map(|i| (i * 7 + 3) as u8).collect();

        assert_eq!(
            sha256(&buf).unwrap().to_bytes(),
            reference(&buf),
            "len {len}"
        );
    }
}

#[test]
fn sha256_incremental_lengths_match_reference() {
    let mut buf = Vec::with_capacity(300);
    for i in 0..300 {
        assert_eq!(sha256(&buf).unwrap().to_bytes(), reference(&buf), "len {i}");
        buf.push(i as u8);
    }
}

#[test]
fn sha256_single_bytes() {
    for b in 0u8..=255 {
        assert_eq!(sha256([b]).unwrap().to_bytes(), reference(&[b]));
    }
}

// -------------------------------------------------------
// 3. GENERAL PROPERTIES
// -------------------------------------------------------

#[test]
fn sha256_is_deterministic() {
    let input = b"The quick brown fox jumps over the lazy dog.";

    assert_eq!(sha256(input).unwrap(), sha256(input).unwrap());
    assert_eq!(sha256(input).unwrap().as_bytes().len(), 32);
}

#[test]
fn sha256_avalanche_smoke() {
    let base = b"hello world".to_vec();
    let base_digest = sha256(&base).unwrap();

    for bit in 0..base.len() * 8 {
        let mut flipped = base.clone();
        flipped[bit / 8] ^= 1 << (bit % 8);

        let digest = sha256(&flipped).unwrap();
        let changed: u32 = base_digest
            .as_bytes()
            .iter()
            .zip(digest.as_bytes())
            .map(|(a, b)| (a ^ b).count_ones())
            .sum();

        assert!(
            (64..=192).contains(&changed),
            "flipping bit {bit} changed {changed} of 256 output bits"
        );
    }
}

// -------------------------------------------------------
// 4. OUTPUT BYTE ORDER
// -------------------------------------------------------

#[test]
fn sha256_little_endian_output_swaps_words() {
    let input = b"hello world";

    let be = Sha256::new().digest(input).unwrap();
    let le = Sha256::with_byte_order(ByteOrder::LittleEndian)
        .digest(input)
        .unwrap();

    assert_ne!(be, le);
    for (be_word, le_word) in be.as_bytes().chunks(4).zip(le.as_bytes().chunks(4)) {
        let mut swapped = be_word.to_vec();
        swapped.reverse();
        assert_eq!(swapped, le_word);
    }
}

#[test]
fn sha256_big_endian_flag_is_default() {
    let input = b"abc";

    assert_eq!(
        Sha256::with_byte_order(ByteOrder::from_big_endian(true))
            .digest(input)
            .unwrap(),
        sha256(input).unwrap()
    );
    assert_eq!(Sha256::default().order(), ByteOrder::BigEndian);
}

#[test]
fn sha256_digest_owned_matches_borrowed() {
    let message = b"The quick brown fox jumps over the lazy dog.".to_vec();
    let hasher = Sha256::new();

    assert_eq!(
        hasher.digest(&message).unwrap(),
        hasher.digest_owned(message.clone()).unwrap()
    );
}

// -------------------------------------------------------
// 5. PIPELINE AND INVARIANT CHECK
// -------------------------------------------------------

#[test]
fn sha256_pipeline_stages_compose() {
    let padded = pad(b"hello world".to_vec()).unwrap();
    let state = compress_padded(&padded).unwrap();

    assert_eq!(state[0], 0xb94d27b9);
    assert_eq!(state[7], 0xe2efcde9);
}

#[test]
fn sha256_rejects_unaligned_padded_input() {
    for len in [1, 63, 65, 100] {
        let err = compress_padded(&vec![0u8; len]).unwrap_err();
        assert_eq!(err, Error::InternalError { len });
        assert!(err.to_string().contains("64-byte boundary"));
    }
}

use super::*;
use crate::block::aes::Aes;
use crate::error::Error;

const NONCE: &str = "000102030405060708090a0b0c0d0e0f";

fn ctr_with_key(key_hex: &str) -> Ctr<Aes> {
    let key = hex::decode(key_hex).unwrap();
    let nonce = hex::decode(NONCE).unwrap();
    Ctr::new(Aes::new(&key).unwrap(), &nonce).unwrap()
}

#[test]
fn test_single_block_vectors() {
    // first keystream block is E(nonce) for each key size
    let cases = [
        (
            "000102030405060708090a0b0c0d0e0f",
            "0a9509b6456bf642f9ca9e53ca5ee455",
        ),
        (
            "000102030405060708090a0b0c0d0e0f1011121314151617",
            "0061bdfd42864dbfd255f3ad13ff2ea1",
        ),
        (
            "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
            "5a6f06540cfe7791f8275f360ecea89d",
        ),
    ];
    let plain = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
    for (key_hex, expected) in cases {
        let ctr = ctr_with_key(key_hex);
        let enc = ctr.encrypt(&plain).unwrap();
        assert_eq!(hex::encode(&enc), expected, "key {}", key_hex);
        assert_eq!(ctr.decrypt(&enc).unwrap(), plain);
    }
}

#[test]
fn test_partial_final_block() {
    // 25 bytes: one full block plus a 9-byte keystream prefix
    let ctr = ctr_with_key("000102030405060708090a0b0c0d0e0f");
    let plain = b"AES (key-128bit mode-CTR)";
    let enc = ctr.encrypt(plain).unwrap();
    assert_eq!(
        hex::encode(&enc),
        "4bd158956905953cdcf2a660a43a9e7a6f0c88f14b5b26c4b3"
    );
    assert_eq!(ctr.decrypt(&enc).unwrap(), plain);
}

#[test]
fn test_encrypt_equals_decrypt() {
    let ctr = ctr_with_key("000102030405060708090a0b0c0d0e0f");
    let data: Vec<u8> = (0..48).collect();
    assert_eq!(ctr.encrypt(&data).unwrap(), ctr.decrypt(&data).unwrap());
}

#[test]
fn test_counter_wraps_at_block_width() {
    // all-ones nonce: the second counter value wraps to zero, so the
    // second keystream block must be E(0^16)
    let key = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
    let ctr = Ctr::new(Aes::new(&key).unwrap(), &[0xff; 16]).unwrap();
    let plain: Vec<u8> = (0..32).collect();
    let enc = ctr.encrypt(&plain).unwrap();
    assert_eq!(
        hex::encode(&enc),
        "3c451d31ca0284246cdea892025db51cd6b02924939a4d9577569b79bdd5c666"
    );

    let aes = Aes::new(&key).unwrap();
    let mut zero_block = [0u8; 16];
    aes.encrypt_block(&mut zero_block).unwrap();
    for i in 0..16 {
        assert_eq!(enc[16 + i] ^ plain[16 + i], zero_block[i]);
    }
}

#[test]
fn test_short_nonce_is_left_padded() {
    // a short nonce reads as the same big-endian integer
    let key = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
    let short = Ctr::new(Aes::new(&key).unwrap(), &[0x01, 0x02]).unwrap();
    let mut padded_nonce = [0u8; 16];
    padded_nonce[14] = 0x01;
    padded_nonce[15] = 0x02;
    let padded = Ctr::new(Aes::new(&key).unwrap(), &padded_nonce).unwrap();

    let data = [0x55u8; 24];
    assert_eq!(short.encrypt(&data).unwrap(), padded.encrypt(&data).unwrap());
}

#[test]
fn test_oversized_nonce_rejected() {
    let key = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
    let aes = Aes::new(&key).unwrap();
    assert!(matches!(
        Ctr::new(aes, &[0u8; 17]),
        Err(Error::Length { .. })
    ));
}

#[test]
fn test_empty_input() {
    let ctr = ctr_with_key("000102030405060708090a0b0c0d0e0f");
    assert!(ctr.encrypt(&[]).unwrap().is_empty());
}

use super::*;
use crate::block::aes::Aes;
use crate::error::Error;

fn cipher() -> Ecb<Aes> {
    let key = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
    Ecb::new(Aes::new(&key).unwrap())
}

#[test]
fn test_single_block() {
    let ecb = cipher();
    let plain = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
    let enc = ecb.encrypt(&plain).unwrap();
    assert_eq!(hex::encode(&enc), "0a940bb5416ef045f1c39458c653ea5a");
    assert_eq!(ecb.decrypt(&enc).unwrap(), plain);
}

#[test]
fn test_identical_blocks_leak() {
    // the defining ECB weakness: equal plaintext blocks encrypt equally
    let ecb = cipher();
    let block = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
    let doubled = [block.clone(), block].concat();
    let enc = ecb.encrypt(&doubled).unwrap();
    assert_eq!(enc[..16], enc[16..]);
    assert_eq!(
        hex::encode(&enc),
        "0a940bb5416ef045f1c39458c653ea5a0a940bb5416ef045f1c39458c653ea5a"
    );
}

#[test]
fn test_misaligned_input_rejected() {
    let ecb = cipher();
    for len in [1usize, 15, 17, 31] {
        assert!(
            matches!(ecb.encrypt(&vec![0u8; len]), Err(Error::Length { .. })),
            "length {}",
            len
        );
        assert!(matches!(
            ecb.decrypt(&vec![0u8; len]),
            Err(Error::Length { .. })
        ));
    }
}

#[test]
fn test_empty_input() {
    let ecb = cipher();
    assert!(ecb.encrypt(&[]).unwrap().is_empty());
    assert!(ecb.decrypt(&[]).unwrap().is_empty());
}

#[test]
fn test_round_trip_multi_block() {
    let ecb = cipher();
    let plain: Vec<u8> = (0..64).collect();
    assert_eq!(ecb.decrypt(&ecb.encrypt(&plain).unwrap()).unwrap(), plain);
}

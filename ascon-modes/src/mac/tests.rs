use alloc::{
    vec,
    vec::Vec,
};

use rand::{
    rngs::StdRng,
    RngCore,
    SeedableRng,
};

use super::*;
use crate::prf::Prf;

fn seq(n: usize) -> Vec<u8> {
    (0..n).map(|i| i as u8).collect()
}

fn known_answers<V: PrfVariant>(vectors: &[(usize, &str)]) {
    let key = seq(KEY_SIZE);
    for (len, expected) in vectors {
        let message = seq(*len);
        let mut mac = Mac::<V>::new(&key).unwrap();
        mac.update(&message);
        let mut tag = [0_u8; TAG_SIZE];
        mac.finalize(&mut tag).unwrap();
        assert_eq!(hex::encode(tag), *expected, "{} {}", V::NAME, len);

        let mut one_shot = [0_u8; TAG_SIZE];
        Mac::<V>::compute_tag(&mut one_shot, &message, &key).unwrap();
        assert_eq!(tag, one_shot);
        assert!(Mac::<V>::verify_tag(&tag, &message, &key).unwrap());
    }
}

#[test]
fn mac_known_answers() {
    known_answers::<Standard>(&[
        (0, "eb1af688825d66bf2d53e135f9323315"),
        (1, "81f3c3537c5595aaa0d5780b9f88a043"),
        (6, "46012c9120f4ebc3f8d55eb8b52ff921"),
        (16, "a7915e83ee1aa71422cfd90868e22dc2"),
        (19, "c531063cb12a426c5d41aeebbe0c08e5"),
        (32, "892523d61028799c507d1644126f03ef"),
        (50, "b07a8c3b23506040c9587c4cf8a0f4c3"),
    ]);
}

#[test]
fn maca_known_answers() {
    known_answers::<Fast>(&[
        (0, "fddc38ec2e93f8b8524d88f6c5983d13"),
        (1, "628a3773caae20b059fe89280e674735"),
        (6, "aa8737292e60df602b1f304d206815b1"),
        (16, "a27166dee13a2cea58dcc18877aaaaed"),
        (23, "f08c1acea000f5a6283d793789689d48"),
        (32, "4743df62c9958fa1a281ea56ef121bf1"),
        (40, "1de1e42d311fde4fcf0f6a1265941c47"),
    ]);
}

fn split_updates<V: PrfVariant>(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut key = vec![0; KEY_SIZE];
    rng.fill_bytes(&mut key);
    let block = <V::BlockSize as generic_array::typenum::Unsigned>::USIZE;

    for n in [0, 1, block - 1, block, block + 1, block * 2, block * 3 + 7].iter().copied() {
        let mut message = vec![0; n];
        rng.fill_bytes(&mut message);
        let mut expected = [0_u8; TAG_SIZE];
        Prf::<V>::compute_tag(&mut expected, &message, &key, true).unwrap();

        for cut in 0..=n {
            let mut mac = Mac::<V>::new(&key).unwrap();
            mac.update(&message[..cut]);
            mac.update(&[0_u8; 0]);
            mac.update(&message[cut..]);
            let mut tag = [0_u8; TAG_SIZE];
            mac.finalize(&mut tag).unwrap();
            assert_eq!(tag, expected, "{} {} split at {}", V::NAME, n, cut);
        }
    }
}

#[test]
fn split_updates_match_prf_in_mac_mode() {
    split_updates::<Standard>(7);
    split_updates::<Fast>(8);
}

#[test]
fn finalize_reset_keeps_the_key() {
    let key = seq(KEY_SIZE);
    let mut mac = AsconMaca::new(&key).unwrap();
    mac.update(b"discarded");
    mac.reset();

    let mut empty = [0_u8; TAG_SIZE];
    mac.finalize_reset(&mut empty).unwrap();
    assert_eq!(hex::encode(empty), "fddc38ec2e93f8b8524d88f6c5983d13");

    mac.update(&[0_u8]);
    let mut one = [0_u8; TAG_SIZE];
    mac.finalize_reset(&mut one).unwrap();
    assert_eq!(hex::encode(one), "628a3773caae20b059fe89280e674735");

    mac.update(&[0_u8]);
    assert!(mac.verify(&one).unwrap());
}

#[test]
fn verify_is_tag_length_aware() {
    let key = seq(KEY_SIZE);
    let message = seq(12);
    let mut tag = [0_u8; TAG_SIZE];
    AsconMac::compute_tag(&mut tag, &message, &key).unwrap();

    for n in 1..=TAG_SIZE {
        assert!(AsconMac::verify_tag(&tag[..n], &message, &key).unwrap(), "prefix {}", n);
    }
    for bit in 0..TAG_SIZE * 8 {
        let mut bad = tag;
        bad[bit / 8] ^= 1 << (bit % 8);
        let mut mac = AsconMac::new(&key).unwrap();
        mac.update(&message);
        assert!(!mac.verify(&bad).unwrap(), "bit {}", bit);
    }
}

#[test]
fn lengths_are_checked() {
    let key = seq(KEY_SIZE);
    assert_eq!(
        AsconMac::new(&key[..15]).unwrap_err(),
        Error::InvalidParameterLength("key", Expected::Exactly(16), 15)
    );

    let mut mac = AsconMac::new(&key).unwrap();
    mac.update(b"kept");
    let mut tag = [0_u8; 17];
    assert_eq!(
        mac.finalize_reset(&mut tag),
        Err(Error::InvalidParameterLength("tag", Expected::Between(1, 16), 17))
    );
    assert_eq!(
        mac.finalize_reset(&mut []),
        Err(Error::InvalidParameterLength("tag", Expected::Between(1, 16), 0))
    );
    mac.finalize_reset(&mut tag[..16]).unwrap();
    assert!(AsconMac::verify_tag(&tag[..16], b"kept", &key).unwrap());

    assert_eq!(
        AsconMaca::verify_tag(&tag, b"kept", &key),
        Err(Error::InvalidParameterLength("tag", Expected::Between(1, 16), 17))
    );
}

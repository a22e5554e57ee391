use rand::RngCore;
use rustveil_core::seed::Seed;
use rustveil_core::Error;

#[test]
fn test_deterministic_rng() {
    let seed = Seed::from_hex("0x1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef")
        .unwrap();

    let mut rng1 = seed.create_deterministic_rng();
    let mut rng2 = seed.create_deterministic_rng();

    assert_eq!(rng1.next_u32(), rng2.next_u32());
    assert_eq!(rng1.next_u64(), rng2.next_u64());
}

#[test]
fn test_different_seeds_different_rngs() {
    let seed1 =
        Seed::from_hex("0x1111111111111111111111111111111111111111111111111111111111111111")
            .unwrap();
    let seed2 =
        Seed::from_hex("0x2222222222222222222222222222222222222222222222222222222222222222")
            .unwrap();

    let mut rng1 = seed1.create_deterministic_rng();
    let mut rng2 = seed2.create_deterministic_rng();

    assert_ne!(rng1.next_u64(), rng2.next_u64());
}

#[test]
fn test_hex_round_trip() {
    let hex = "0xabababababababababababababababababababababababababababababababab";
    let seed = Seed::from_hex(hex).unwrap();
    assert_eq!(seed.to_hex(), hex);
    assert_eq!(Seed::from_hex(&hex[2..]).unwrap(), seed);
}

#[test]
fn test_invalid_seeds() {
    assert!(matches!(
        Seed::from_hex("0x1234"),
        Err(Error::InvalidSeedLength(4))
    ));
    assert!(matches!(
        Seed::from_hex(&"zz".repeat(32)),
        Err(Error::InvalidSeedHex)
    ));
}

//! Tests for deterministic RNG
//!
//! CRITICAL: Determinism is sacred. Same seed MUST produce same sequence.

use seeded_rand::Rand;

#[test]
fn test_rng_next_deterministic() {
    let mut rng1 = Rand::seed(12345);
    let mut rng2 = Rand::seed(12345);

    for _ in 0..100 {
        assert_eq!(rng1.next_uint32(), rng2.next_uint32(), "RNG not deterministic!");
    }
}

#[test]
fn test_rng_mixed_calls_deterministic() {
    let mut rng1 = Rand::seed(99999);
    let mut rng2 = Rand::seed(99999);

    for i in 0..200 {
        match i % 6 {
            0 => assert_eq!(rng1.next_uint32(), rng2.next_uint32()),
            1 => assert_eq!(rng1.next_uint64(), rng2.next_uint64()),
            2 => assert_eq!(rng1.next_int63(), rng2.next_int63()),
            3 => assert_eq!(rng1.next_int31(), rng2.next_int31()),
            4 => assert_eq!(
                rng1.next_double().to_bits(),
                rng2.next_double().to_bits()
            ),
            _ => {
                let mut a = [0u8; 13];
                let mut b = [0u8; 13];
                rng1.fill(&mut a);
                rng2.fill(&mut b);
                assert_eq!(a, b);
            }
        }
    }
}

#[test]
fn test_rng_different_seeds_different_sequences() {
    let mut rng1 = Rand::seed(12345);
    let mut rng2 = Rand::seed(54321);

    assert_ne!(
        rng1.next_uint64(),
        rng2.next_uint64(),
        "Different seeds should produce different values"
    );
}

#[test]
fn test_adjacent_seeds_diverge_immediately() {
    let firsts: Vec<u64> = (1..=16).map(|s| Rand::seed(s).next_uint64()).collect();
    let unique = firsts
        .iter()
        .collect::<std::collections::HashSet<_>>()
        .len();
    assert_eq!(unique, firsts.len());
}

#[test]
fn test_next_uint64_is_two_uint32_draws() {
    let mut rng = Rand::seed(8675309);
    let mut replay = rng.clone();

    for _ in 0..100 {
        let hi = replay.next_uint32() as u64;
        let lo = replay.next_uint32() as u64;
        assert_eq!(rng.next_uint64(), (hi << 32) | lo);
    }
}

#[test]
fn test_int63_and_int31_drop_low_bit() {
    let mut rng = Rand::seed(1);
    let mut replay = rng.clone();

    for _ in 0..100 {
        assert_eq!(rng.next_int63(), (replay.next_uint64() >> 1) as i64);
        assert_eq!(rng.next_int31(), (replay.next_uint32() >> 1) as i32);
    }
}

#[test]
fn test_fill_eight_bytes_is_one_uint64() {
    let mut rng = Rand::seed(2024);
    let mut replay = rng.clone();

    let mut buf = [0u8; 8];
    rng.fill(&mut buf);
    assert_eq!(buf, replay.next_uint64().to_ne_bytes());

    // Both consumed exactly two steps
    assert_eq!(rng.next_uint32(), replay.next_uint32());
}

#[test]
fn test_fill_consumes_expected_steps() {
    // 8 * 3 + 5 bytes = 3 uint64 draws + 5 uint32 draws = 11 steps
    let mut rng = Rand::seed(555);
    let mut replay = rng.clone();

    let mut buf = [0u8; 29];
    rng.fill(&mut buf);
    for _ in 0..11 {
        replay.next_uint32();
    }
    assert_eq!(rng.next_uint32(), replay.next_uint32());
}

#[test]
fn test_rng_long_sequence_determinism() {
    let mut rng1 = Rand::seed(42);
    let mut rng2 = Rand::seed(42);

    for i in 0..1000 {
        let val1 = rng1.next_uint64();
        let val2 = rng2.next_uint64();
        assert_eq!(
            val1, val2,
            "Determinism broken at iteration {}: {} != {}",
            i, val1, val2
        );
    }
}

#[test]
fn test_rng_produces_diverse_values() {
    let mut rng = Rand::seed(12345);
    let values: Vec<u32> = (0..100).map(|_| rng.next_uint32()).collect();

    let unique_count = values
        .iter()
        .collect::<std::collections::HashSet<_>>()
        .len();
    assert!(
        unique_count > 90,
        "RNG not diverse enough: only {} unique values out of 100",
        unique_count
    );
}

#[test]
fn test_clone_resumes_mid_stream() {
    let mut rng = Rand::seed(12345);
    for _ in 0..10 {
        rng.next_uint64();
    }

    let mut resumed = rng.clone();
    for _ in 0..100 {
        assert_eq!(
            rng.next_double().to_bits(),
            resumed.next_double().to_bits()
        );
    }
}

use super::*;

#[test]
fn fnv_hash_is_stable_across_calls() {
    assert_eq!(hash_str("a red circle"), hash_str("a red circle"));
    assert_ne!(hash_str("a red circle"), hash_str("a blue circle"));
}

#[test]
fn rng_is_deterministic() {
    let mut a = Rng64::new(123);
    let mut b = Rng64::new(123);
    for _ in 0..10 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn rng_ranges_stay_in_bounds() {
    let mut rng = Rng64::new(7);
    for _ in 0..1000 {
        let f = rng.range_f64(-2.0, 3.0);
        assert!((-2.0..3.0).contains(&f));
        let u = rng.range_u32(5, 9);
        assert!((5..=9).contains(&u));
    }
    assert_eq!(rng.range_u32(4, 4), 4);
}

#[test]
fn clamp_u8_saturates() {
    assert_eq!(clamp_u8(-4.0), 0);
    assert_eq!(clamp_u8(300.0), 255);
    assert_eq!(clamp_u8(127.6), 128);
}

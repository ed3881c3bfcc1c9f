use framekit_motion::easing::{ease_in, ease_in_out, ease_out};
use framekit_motion::math::{clamp, lerp, map_range, normalize};
use proptest::prelude::*;

fn finite() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6f64
}

proptest! {
    #[test]
    fn lerp_hits_endpoints(a in finite(), b in finite()) {
        prop_assert_eq!(lerp(a, b, 0.0), a);
        prop_assert!((lerp(a, b, 1.0) - b).abs() <= 1e-9 * b.abs().max(1.0));
    }

    #[test]
    fn lerp_is_monotonic_in_t(
        a in finite(),
        b in finite(),
        t0 in 0.0..=1.0f64,
        t1 in 0.0..=1.0f64,
    ) {
        let (lo, hi) = if t0 <= t1 { (t0, t1) } else { (t1, t0) };
        let (v_lo, v_hi) = (lerp(a, b, lo), lerp(a, b, hi));
        if b >= a {
            prop_assert!(v_lo <= v_hi);
        } else {
            prop_assert!(v_lo >= v_hi);
        }
    }

    #[test]
    fn lerp_never_leaves_endpoints(a in finite(), b in finite(), t in -10.0..10.0f64) {
        let v = lerp(a, b, t);
        let eps = 1e-9 * a.abs().max(b.abs()).max(1.0);
        prop_assert!(v >= a.min(b) - eps && v <= a.max(b) + eps);
    }

    #[test]
    fn easings_stay_in_unit_range(t in 0.0..=1.0f64) {
        for v in [ease_in(t), ease_out(t), ease_in_out(t)] {
            prop_assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn clamp_is_within_bounds(v in proptest::num::f64::ANY, lo in finite(), width in 0.0..1.0e6f64) {
        let hi = lo + width;
        let c = clamp(v, lo, hi);
        prop_assert!(c >= lo && c <= hi);
    }

    #[test]
    fn map_range_agrees_with_normalize(
        v in finite(),
        in_min in finite(),
        span in 1.0..1.0e3f64,
    ) {
        let in_max = in_min + span;
        let expected = normalize(v, in_min, in_max);
        let mapped = map_range(v, in_min, in_max, 0.0, 1.0);
        prop_assert!((mapped - expected).abs() <= 1e-9 * expected.abs().max(1.0));
    }
}

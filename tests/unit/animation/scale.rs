use super::*;

#[test]
fn divide_scale_stays_in_unit_range() {
    for n in [1.0, 2.0, 4.0, 5.0] {
        let steps = 200;
        for k in 0..=steps {
            let value = n * f64::from(k) / f64::from(steps);
            for i in 0..(n as u32) {
                let d = divide_scale(value, f64::from(i), n);
                assert!((0.0..=1.0).contains(&d), "value={value} i={i} n={n} d={d}");
            }
        }
    }
}

#[test]
fn divide_scale_fills_partitions_in_order() {
    // Halfway through the second of four partitions.
    let v = 0.375;
    assert_eq!(divide_scale(v, 0.0, 4.0), 1.0);
    assert!((divide_scale(v, 1.0, 4.0) - 0.5).abs() < 1e-12);
    assert_eq!(divide_scale(v, 2.0, 4.0), 0.0);
    assert_eq!(divide_scale(v, 3.0, 4.0), 0.0);
}

#[test]
fn scale_factor_switches_at_threshold() {
    assert_eq!(scale_factor(0.0), 0.0);
    assert_eq!(scale_factor(0.5), 0.0);
    assert_eq!(scale_factor(0.509), 0.0);
    assert_eq!(scale_factor(0.51), 1.0);
    assert_eq!(scale_factor(0.75), 1.0);
    assert_eq!(scale_factor(1.0), 1.0);
    assert_eq!(scale_factor(1.019), 1.0);
}

#[test]
fn update_value_is_slow_then_fast() {
    let slow = update_value(0.2, 1.0, SLABS as f64, 1.0);
    let fast = update_value(0.8, 1.0, SLABS as f64, 1.0);
    assert!((slow - SC_GAP / 4.0).abs() < 1e-12);
    assert!((fast - SC_GAP).abs() < 1e-12);
    assert_eq!(update_value(0.8, -1.0, SLABS as f64, 1.0), -fast);
    assert_eq!(update_value(0.8, 0.0, SLABS as f64, 1.0), 0.0);
}

#[test]
fn mirror_value_blends_divisors() {
    assert_eq!(mirror_value(0.1, 4.0, 1.0), 0.25);
    assert_eq!(mirror_value(0.9, 4.0, 1.0), 1.0);
    assert_eq!(inverse(4.0), 0.25);
    assert_eq!(max_scale(0.1, 1.0, 4.0), 0.0);
}

//! Exhaustive checks of the integer path against its formula and the float path

use crate::common::{all_register_pairs, reference_counts};
use mma8451q::{FIXED_POINT_SCALE, raw_to_acceleration_mms2, raw_to_acceleration_ms2};

#[test]
fn test_mms2_matches_formula_for_every_input() {
    for (raw, msb, lsb) in all_register_pairs() {
        let expected = i64::from(reference_counts(raw)) * 980_665 / 40_960;
        assert_eq!(
            i64::from(raw_to_acceleration_mms2(msb, lsb)),
            expected,
            "raw={raw:#06x}"
        );
    }
}

#[test]
fn test_float_and_integer_paths_agree() {
    let scale = f64::from(FIXED_POINT_SCALE);
    let mut worst = 0.0f64;

    for (raw, msb, lsb) in all_register_pairs() {
        let float = f64::from(raw_to_acceleration_ms2(msb, lsb));
        let fixed = f64::from(raw_to_acceleration_mms2(msb, lsb)) / scale;
        let diff = (float - fixed).abs();
        assert!(diff < 0.0015, "raw={raw:#06x}: {float} vs {fixed}");
        worst = worst.max(diff);
    }

    // Truncation loses less than one fixed point unit
    assert!(worst < 1.0 / scale + 1e-5, "worst disagreement {worst}");
}

#[test]
fn test_integer_path_truncates_toward_zero() {
    for (raw, msb, lsb) in all_register_pairs() {
        let fixed = raw_to_acceleration_mms2(msb, lsb);
        let exact = f64::from(reference_counts(raw)) * 980_665.0 / 40_960.0;

        // |fixed| <= |exact| and they never differ by a whole unit
        assert!(f64::from(fixed.abs()) <= exact.abs() + 1e-9, "raw={raw:#06x}");
        assert!(exact.abs() - f64::from(fixed.abs()) < 1.0, "raw={raw:#06x}");
        if fixed != 0 {
            assert_eq!(fixed.signum(), i32::from(reference_counts(raw).signum()));
        }
    }
}

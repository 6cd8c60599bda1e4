//! Unit tests for 14-bit sign extension

use crate::common::{all_register_pairs, encode_counts, reference_counts};
use mma8451q::{
    FullScale, RawSample, counts_to_mms2, counts_to_ms2, raw_to_acceleration_mms2,
    raw_to_acceleration_ms2, sign_extend_14,
};

#[test]
fn test_shift_formula_matches_explicit_decode() {
    // The one-line shift form must agree with "subtract 2^14 if bit 13 is set"
    for (raw, msb, lsb) in all_register_pairs() {
        let expected = reference_counts(raw);
        assert_eq!(sign_extend_14(raw), expected, "raw={raw:#06x}");
        assert_eq!(RawSample::new(msb, lsb).counts(), expected, "raw={raw:#06x}");
    }
}

#[test]
fn test_output_range() {
    let mut min = i16::MAX;
    let mut max = i16::MIN;
    for (raw, _, _) in all_register_pairs() {
        let counts = sign_extend_14(raw);
        min = min.min(counts);
        max = max.max(counts);
    }
    assert_eq!(min, -8192);
    assert_eq!(max, 8191);
}

#[test]
fn test_padding_bits_do_not_matter() {
    // Bits 15..14 of the container carry nothing
    for raw in (0..=0x3FFFu16).step_by(13) {
        let counts = sign_extend_14(raw);
        for high in [0x4000u16, 0x8000, 0xC000] {
            assert_eq!(sign_extend_14(raw | high), counts, "raw={raw:#06x}");
        }
    }
}

#[test]
fn test_negation_symmetry() {
    for value in 1..=8191i16 {
        let (pos_msb, pos_lsb) = encode_counts(value);
        let (neg_msb, neg_lsb) = encode_counts(-value);

        let pos = RawSample::new(pos_msb, pos_lsb).counts();
        let neg = RawSample::new(neg_msb, neg_lsb).counts();
        assert_eq!(pos, -neg);

        assert_eq!(
            raw_to_acceleration_ms2(pos_msb, pos_lsb),
            -raw_to_acceleration_ms2(neg_msb, neg_lsb)
        );
        assert_eq!(
            raw_to_acceleration_mms2(pos_msb, pos_lsb),
            -raw_to_acceleration_mms2(neg_msb, neg_lsb)
        );
    }
}

#[test]
fn test_minimum_has_no_positive_counterpart() {
    // -8192 is the asymmetric extreme: its 14-bit negation wraps back to itself
    let (msb, lsb) = encode_counts(-8192);
    assert_eq!((msb, lsb), (0x20, 0x00));
    assert_eq!(RawSample::new(msb, lsb).counts(), -8192);

    let negated = (0x2000u16.wrapping_neg()) & 0x3FFF;
    assert_eq!(sign_extend_14(negated), -8192);

    // The largest positive reading is one count short of mirroring it
    assert_eq!(raw_to_acceleration_mms2(0x20, 0x00), -196_133);
    assert_eq!(raw_to_acceleration_mms2(0x1F, 0xFF), 196_109);
    assert_ne!(
        raw_to_acceleration_mms2(0x20, 0x00),
        -raw_to_acceleration_mms2(0x1F, 0xFF)
    );
}

#[test]
fn test_counts_helpers_agree_with_register_functions() {
    for (raw, msb, lsb) in all_register_pairs().step_by(11) {
        let counts = sign_extend_14(raw);
        assert_eq!(
            counts_to_ms2(counts, FullScale::G2).to_bits(),
            raw_to_acceleration_ms2(msb, lsb).to_bits()
        );
        assert_eq!(
            counts_to_mms2(counts, FullScale::G2),
            raw_to_acceleration_mms2(msb, lsb)
        );
    }
}

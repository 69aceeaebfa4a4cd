use crate::consts::{CHECKSUM_MODULUS, COLLISION_REMAINDER, PRIMARY_WEIGHTS, SECONDARY_WEIGHTS};

/// Computes the control digit for the leading digits of an IIN.
///
/// The first pass weights the digit at position `i` by `i + 1` and reduces
/// the sum modulo 11. A remainder of 10 cannot serve as a control digit, so
/// the sum is recomputed with the rotated second-pass weights. If that pass
/// also lands on 10 the payload has no valid control digit and `None` is
/// returned; such candidates are rejected outright rather than coerced.
///
/// Only the first 11 digits of the slice participate; anything beyond is
/// ignored.
pub(crate) fn control_digit(digits: &[u8]) -> Option<u8> {
    let mut check = weighted_remainder(digits, &PRIMARY_WEIGHTS);
    if check == COLLISION_REMAINDER {
        check = weighted_remainder(digits, &SECONDARY_WEIGHTS);
    }
    if check == COLLISION_REMAINDER {
        return None;
    }
    u8::try_from(check).ok()
}

fn weighted_remainder(digits: &[u8], weights: &[u32]) -> u32 {
    let sum: u32 = digits
        .iter()
        .zip(weights.iter())
        .map(|(digit, weight)| u32::from(*digit) * weight)
        .sum();
    sum % CHECKSUM_MODULUS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(s: &str) -> Vec<u8> {
        s.chars()
            .filter_map(|c| c.to_digit(10))
            .map(|d| d as u8)
            .collect()
    }

    #[test]
    fn test_first_pass() {
        // 9*1 + 1*3 + 2*4 + 9*6 + 3*7 + 1*11 = 106, 106 mod 11 = 7
        assert_eq!(control_digit(&digits("90120930001")), Some(7));
        assert_eq!(control_digit(&digits("89080140001")), Some(4));
        assert_eq!(control_digit(&digits("04101150001")), Some(2));
    }

    #[test]
    fn test_second_pass_resolves_collision() {
        // First pass sums to 76 (remainder 10); second pass sums to 112
        // (remainder 2), which becomes the control digit.
        assert_eq!(control_digit(&digits("90010130400")), Some(2));

        // First pass 142 (remainder 10), second pass 155 (remainder 1)
        assert_eq!(control_digit(&digits("99123140005")), Some(1));
    }

    #[test]
    fn test_double_collision_has_no_control_digit() {
        // Both passes land on remainder 10
        assert_eq!(control_digit(&digits("90010130080")), None);
    }

    #[test]
    fn test_trailing_digits_ignored() {
        // A full 12-digit slice yields the same result as its 11-digit payload
        assert_eq!(
            control_digit(&digits("901209300017")),
            control_digit(&digits("90120930001"))
        );
    }

    #[test]
    fn test_all_zero_payload() {
        assert_eq!(control_digit(&[0; 11]), Some(0));
    }
}

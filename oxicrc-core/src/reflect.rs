//! Bit reflection.

/// Reverse the low `w` bits of `x`.
///
/// The full word is reversed with a divide-and-conquer swap, then shifted
/// right so only the reflected low `w` bits remain. Bits of `x` above `w` are
/// discarded.
///
/// `w` must be in `1..=64`.
///
/// # Example
///
/// ```
/// use oxicrc_core::reflect;
///
/// assert_eq!(reflect(0b0001, 4), 0b1000);
/// assert_eq!(reflect(0x04C11DB7, 32), 0xEDB88320);
/// ```
#[inline]
pub const fn reflect(x: u64, w: u8) -> u64 {
    debug_assert!(matches!(w, 1..=64), "reflect width must be in 1..=64");
    let mut x = x.rotate_left(32);
    x = ((x >> 16) & 0x0000_ffff_0000_ffff) | ((x << 16) & 0xffff_0000_ffff_0000);
    x = ((x >> 8) & 0x00ff_00ff_00ff_00ff) | ((x << 8) & 0xff00_ff00_ff00_ff00);
    x = ((x >> 4) & 0x0f0f_0f0f_0f0f_0f0f) | ((x << 4) & 0xf0f0_f0f0_f0f0_f0f0);
    x = ((x >> 2) & 0x3333_3333_3333_3333) | ((x << 2) & 0xcccc_cccc_cccc_cccc);
    x = ((x >> 1) & 0x5555_5555_5555_5555) | ((x << 1) & 0xaaaa_aaaa_aaaa_aaaa);
    x >> (64 - w as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflect_known_values() {
        assert_eq!(reflect(0x42F0E1EBA9EA3693, 64), 0xC96C5795D7870F42);
        assert_eq!(reflect(0x8005, 16), 0xA001);
        assert_eq!(reflect(0x1, 1), 0x1);
        assert_eq!(reflect(0x1, 64), 0x8000_0000_0000_0000);
    }

    #[test]
    fn test_reflect_matches_reverse_bits() {
        let x = 0x0123_4567_89AB_CDEF_u64;
        assert_eq!(reflect(x, 64), x.reverse_bits());
        for w in 1..=64u8 {
            assert_eq!(reflect(x, w), x.reverse_bits() >> (64 - w as u32));
        }
    }

    #[test]
    fn test_reflect_involution() {
        let samples = [0u64, 1, 0xA5, 0xDEAD_BEEF, u64::MAX, 0x8000_0000_0000_0001];
        for w in 1..=64u8 {
            let mask = if w == 64 { u64::MAX } else { (1u64 << w) - 1 };
            for &x in &samples {
                let x = x & mask;
                assert_eq!(reflect(reflect(x, w), w), x, "width {}", w);
            }
        }
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "reflect width must be in 1..=64")]
    fn test_reflect_zero_width() {
        reflect(1, 0);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "reflect width must be in 1..=64")]
    fn test_reflect_width_too_large() {
        reflect(1, 65);
    }

    #[test]
    fn test_reflect_drops_high_bits() {
        assert_eq!(reflect(0xFF00, 8), 0);
        assert_eq!(reflect(0x1FF, 8), 0xFF);
    }
}

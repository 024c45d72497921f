//! Polynomial arithmetic over GF(2) in the internal register alignment.
//!
//! Values are residues modulo the CRC polynomial, laid out the same way as a
//! running CRC register:
//!
//! - reflected (`refin`): right-aligned, bit `w-1-j` holds the coefficient of
//!   `x^j`, so multiplying by `x` is a right shift;
//! - non-reflected: scaled to 64 bits, bit `j` holds the coefficient of `x^j`
//!   and the modulus is `P(x) * x^(64-w)`, so multiplying by `x` is a left
//!   shift.
//!
//! Scaling the non-reflected modulus by `x^(64-w)` keeps every product a
//! multiple of the same factor, so residues computed here can be XORed
//! straight into a register value.

/// Residue ring `GF(2)[x] / P(x)` for one CRC definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Ring {
    /// Internal polynomial: reflected, or shifted to the top of the word.
    poly: u64,
    width: u8,
    reflected: bool,
}

impl Ring {
    pub(crate) const fn new(poly: u64, width: u8, reflected: bool) -> Self {
        Self {
            poly,
            width,
            reflected,
        }
    }

    /// The residue of `x^0`.
    #[inline]
    pub(crate) const fn one(&self) -> u64 {
        if self.reflected {
            1 << (self.width - 1)
        } else {
            1
        }
    }

    /// Multiply `v` by `x` and reduce.
    #[inline]
    pub(crate) const fn mul_x(&self, v: u64) -> u64 {
        if self.reflected {
            if v & 1 != 0 {
                (v >> 1) ^ self.poly
            } else {
                v >> 1
            }
        } else if v & (1 << 63) != 0 {
            (v << 1) ^ self.poly
        } else {
            v << 1
        }
    }

    /// Multiply `a` by `b` modulo the polynomial.
    ///
    /// Horner's rule over the coefficients of `a`, highest degree first.
    pub(crate) fn mul(&self, a: u64, b: u64) -> u64 {
        let mut product = 0u64;
        if self.reflected {
            for bit in 0..self.width {
                product = self.mul_x(product);
                if a >> bit & 1 != 0 {
                    product ^= b;
                }
            }
        } else {
            for bit in (0..64).rev() {
                product = self.mul_x(product);
                if a >> bit & 1 != 0 {
                    product ^= b;
                }
            }
        }
        product
    }

    /// Square `a` modulo the polynomial.
    #[inline]
    pub(crate) fn square(&self, a: u64) -> u64 {
        self.mul(a, a)
    }

    /// Folding constant generator.
    ///
    /// Starts from the internal polynomial (the residue of `x^64` once the
    /// register is scaled to 64 bits) and applies `n - 64` reduction steps.
    /// `n` must be larger than 64.
    pub(crate) const fn xnmodp(&self, n: u16) -> u64 {
        let mut value = self.poly;
        let mut n = n;
        while n > 64 {
            value = self.mul_x(value);
            n -= 1;
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect;

    const XZ_POLY: u64 = 0x42F0E1EBA9EA3693;

    fn normal64() -> Ring {
        Ring::new(XZ_POLY, 64, false)
    }

    fn reflected64() -> Ring {
        Ring::new(reflect(XZ_POLY, 64), 64, true)
    }

    #[test]
    fn test_one_is_identity() {
        for ring in [normal64(), reflected64(), Ring::new(0x8408, 16, true)] {
            for v in [0u64, 1, 0x1234, 0x8000] {
                assert_eq!(ring.mul(ring.one(), v), v);
                assert_eq!(ring.mul(v, ring.one()), v);
            }
        }
    }

    #[test]
    fn test_mul_x_matches_mul() {
        for ring in [normal64(), reflected64()] {
            let x = ring.mul_x(ring.one());
            let v = 0xDEAD_BEEF_0BAD_F00D;
            assert_eq!(ring.mul(x, v), ring.mul_x(v));
        }
    }

    #[test]
    fn test_mul_commutes() {
        for ring in [normal64(), reflected64()] {
            let a = 0x0123_4567_89AB_CDEF;
            let b = 0xFEDC_BA98_7654_3210;
            assert_eq!(ring.mul(a, b), ring.mul(b, a));
        }
    }

    #[test]
    fn test_x64_reduces_to_poly() {
        // x^64 mod P is the polynomial without its leading term.
        let ring = normal64();
        let mut v = ring.one();
        for _ in 0..64 {
            v = ring.mul_x(v);
        }
        assert_eq!(v, XZ_POLY);
        assert_eq!(ring.xnmodp(64), XZ_POLY);
    }

    #[test]
    fn test_xnmodp_counts_steps() {
        let ring = reflected64();
        let mut v = ring.xnmodp(64);
        for n in 65..=80 {
            v = ring.mul_x(v);
            assert_eq!(ring.xnmodp(n), v);
        }
    }

    #[test]
    fn test_width_one_ring() {
        // P(x) = x + 1, so x == 1.
        let ring = Ring::new(1, 1, true);
        assert_eq!(ring.mul_x(ring.one()), ring.one());
        let ring = Ring::new(1 << 63, 1, false);
        assert_eq!(ring.mul(ring.one(), 1 << 63), 1 << 63);
    }
}

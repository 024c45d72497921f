//! CRC parameter derivation.
//!
//! [`CrcParams`] turns the six values of a CRC definition into everything the
//! engines need: the internal polynomial, the byte table, the two folding
//! constants and the combine table. It is built once and then only read.
//!
//! ## Internal alignment
//!
//! When `refin` is true the polynomial is reflected and the register is kept
//! right-aligned. Otherwise the polynomial is multiplied by `x^(64-w)`, which
//! puts it in the top `w` bits of the word. In the table algorithm this drops
//! bits shifted out of the register; in the fold algorithm it turns every CRC
//! into a 64-bit CRC, so one implementation serves every width.
//!
//! ## Folding constants
//!
//! `k1` and `k2` are `x^n mod P` for the fold-by-4 distance (four 128-bit
//! lanes, 512 bits) plus the 64-bit lane half. In the reflected domain the
//! exponent is lowered by one so that the carry-less product lands with the
//! correct alignment without an extra shift inside the loop.

use crate::error::{CrcError, Result};
use crate::gf2::Ring;
use crate::reflect::reflect;
use crate::table;

/// The canonical check vector.
pub const CHECK_INPUT: &[u8; 9] = b"123456789";

/// Fully derived, immutable parameters for one CRC definition.
///
/// # Example
///
/// ```
/// use oxicrc_core::{CrcParams, crc_calc};
///
/// // CRC-64/XZ
/// let params = CrcParams::new(
///     64,
///     0x42F0E1EBA9EA3693,
///     0xFFFFFFFFFFFFFFFF,
///     true,
///     true,
///     0xFFFFFFFFFFFFFFFF,
/// )
/// .unwrap();
///
/// assert_eq!(crc_calc(&params, params.init(), b"123456789"), 0x995DC9BBDF1939FA);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrcParams {
    width: u8,
    poly: u64,
    refin: bool,
    refout: bool,
    init: u64,
    xorout: u64,
    k1: u64,
    k2: u64,
    table: [u64; 256],
    combine_table: [u64; 64],
}

impl CrcParams {
    /// Derive parameters from a CRC definition.
    ///
    /// `poly`, `init` and `xorout` are given in their usual (non-reflected,
    /// right-aligned) notation and must fit in `width` bits.
    pub fn new(
        width: u8,
        poly: u64,
        init: u64,
        refin: bool,
        refout: bool,
        xorout: u64,
    ) -> Result<Self> {
        if !(1..=64).contains(&width) {
            return Err(CrcError::width_unsupported(width));
        }
        if !fits(poly, width) {
            return Err(CrcError::poly_out_of_range(poly, width));
        }
        if !fits(init, width) {
            return Err(CrcError::init_out_of_range(init, width));
        }
        if !fits(xorout, width) {
            return Err(CrcError::xorout_out_of_range(xorout, width));
        }

        let internal_poly = if refin {
            reflect(poly, width)
        } else {
            poly << (64 - width as u32)
        };
        let ring = Ring::new(internal_poly, width, refin);

        // The empty-buffer CRC is rendered with the output reflection.
        let init = (if refout { reflect(init, width) } else { init }) ^ xorout;

        let (k1, k2) = if refin {
            (ring.xnmodp(512 + 64 - 1), ring.xnmodp(512 - 1))
        } else {
            (ring.xnmodp(512 + 64), ring.xnmodp(512))
        };

        let params = Self {
            width,
            poly: internal_poly,
            refin,
            refout,
            init,
            xorout,
            k1,
            k2,
            table: build_table(internal_poly, refin),
            combine_table: build_combine_table(&ring),
        };

        tracing::debug!(
            width,
            refin,
            refout,
            "derived CRC parameters: poly={:#018x} k1={:#018x} k2={:#018x}",
            params.poly,
            params.k1,
            params.k2
        );

        Ok(params)
    }

    /// Derive parameters and verify them against a known check value.
    ///
    /// `check` is the CRC of the ASCII string `"123456789"`. A mismatch means
    /// the definition and the check value disagree.
    pub fn with_check(
        width: u8,
        poly: u64,
        init: u64,
        refin: bool,
        refout: bool,
        xorout: u64,
        check: u64,
    ) -> Result<Self> {
        let params = Self::new(width, poly, init, refin, refout, xorout)?;
        let computed = table::crc_table(&params, params.init, CHECK_INPUT);
        if computed != check {
            return Err(CrcError::check_mismatch(check, computed));
        }
        Ok(params)
    }

    /// Compute the CRC of `data` from the initial value, using the fastest
    /// available engine.
    #[inline]
    pub fn checksum(&self, data: &[u8]) -> u64 {
        crate::dispatch::crc_calc(self, self.init, data)
    }

    /// Polynomial width in bits.
    #[inline(always)]
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Internal polynomial: reflected if `refin`, else shifted to the top of
    /// the word.
    #[inline(always)]
    pub fn poly(&self) -> u64 {
        self.poly
    }

    /// Whether input bytes are reflected.
    #[inline(always)]
    pub fn refin(&self) -> bool {
        self.refin
    }

    /// Whether the result is reflected.
    #[inline(always)]
    pub fn refout(&self) -> bool {
        self.refout
    }

    /// CRC of the empty buffer; pass this as the starting `crc` value.
    #[inline(always)]
    pub fn init(&self) -> u64 {
        self.init
    }

    /// Final XOR mask.
    #[inline(always)]
    pub fn xorout(&self) -> u64 {
        self.xorout
    }

    /// Folding constant applied to the low lane half (reflected) or high
    /// lane half (non-reflected).
    #[inline(always)]
    pub fn k1(&self) -> u64 {
        self.k1
    }

    /// Folding constant applied to the other lane half.
    #[inline(always)]
    pub fn k2(&self) -> u64 {
        self.k2
    }

    /// Byte table for the table engine, in internal alignment.
    #[inline(always)]
    pub fn table(&self) -> &[u64; 256] {
        &self.table
    }

    /// `combine_table()[i]` is `x^(2^i) mod P` in internal alignment.
    #[inline(always)]
    pub fn combine_table(&self) -> &[u64; 64] {
        &self.combine_table
    }

    #[inline]
    pub(crate) fn ring(&self) -> Ring {
        Ring::new(self.poly, self.width, self.refin)
    }
}

#[inline]
const fn fits(value: u64, width: u8) -> bool {
    width >= 64 || value >> width == 0
}

/// CRC of every possible byte, eight reduction steps each.
fn build_table(poly: u64, refin: bool) -> [u64; 256] {
    let mut table = [0u64; 256];
    for (byte, entry) in table.iter_mut().enumerate() {
        let mut crc = byte as u64;
        if refin {
            for _ in 0..8 {
                crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
            }
        } else {
            crc <<= 56;
            for _ in 0..8 {
                crc = if crc & (1 << 63) != 0 {
                    (crc << 1) ^ poly
                } else {
                    crc << 1
                };
            }
        }
        *entry = crc;
    }
    table
}

/// Successive squares of `x`: entry `i` is `x^(2^i) mod P`.
fn build_combine_table(ring: &Ring) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut power = ring.mul_x(ring.one());
    for entry in table.iter_mut() {
        *entry = power;
        power = ring.square(power);
    }
    table
}

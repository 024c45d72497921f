//! CRC combination.
//!
//! Given the CRCs of two buffers `A` and `B` and the length of `B`, compute
//! the CRC of `A || B` without reading `A` again. The CRC of `A` is moved
//! forward by `8 * len(B)` bit positions with a multiplication by
//! `x^(8 * len) mod P`, then merged with the CRC of `B`.
//!
//! The shift operator is built by square-and-multiply over
//! [`CrcParams::combine_table`], so building it costs `O(log len)` ring
//! multiplications. When many CRCs are combined with the same `B` length,
//! build it once with [`crc_combine_constant`] and use [`crc_combine_fixed`].
//!
//! Both CRCs must be computed from `params.init()` as independent CRCs. The
//! seed carried by `crc2` is cancelled inside the combination, so the result
//! is exact for any `init` and `xorout`.

use crate::params::CrcParams;
use crate::table::{crc_final, crc_initial};

/// Precomputed `x^(8 * len) mod P` for one parameter set and byte length.
///
/// Only meaningful with the [`CrcParams`] it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShiftOperator(u64);

impl ShiftOperator {
    /// The operator in internal alignment.
    #[inline]
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Index of `x^8` in the combine table; one byte is `2^3` bit positions.
const BYTE_SHIFT_INDEX: usize = 3;

/// Build the shift operator for a second buffer of `len` bytes.
pub fn crc_combine_constant(params: &CrcParams, len: u64) -> ShiftOperator {
    let ring = params.ring();
    let table = params.combine_table();

    let mut op = ring.one();
    let mut index = BYTE_SHIFT_INDEX;
    let mut power = table[index];
    let mut remaining = len;
    while remaining != 0 {
        if remaining & 1 != 0 {
            op = ring.mul(power, op);
        }
        remaining >>= 1;
        index += 1;
        if remaining != 0 {
            // Lengths of 2^61 bytes and beyond run past the table.
            power = if index < table.len() {
                table[index]
            } else {
                ring.square(power)
            };
        }
    }
    ShiftOperator(op)
}

/// Combine two CRCs with a precomputed shift operator.
///
/// `op` must come from [`crc_combine_constant`] with the same `params` and
/// the length of the buffer `crc2` covers.
pub fn crc_combine_fixed(params: &CrcParams, crc1: u64, crc2: u64, op: ShiftOperator) -> u64 {
    let ring = params.ring();
    let seed = crc_initial(params, params.init());
    let shifted = ring.mul(crc_initial(params, crc1) ^ seed, op.0);
    crc_final(params, shifted ^ crc_initial(params, crc2))
}

/// CRC of `A || B` from `crc1 = CRC(A)`, `crc2 = CRC(B)` and `len = len(B)`.
///
/// # Example
///
/// ```
/// use oxicrc_core::{CrcParams, crc_calc, crc_combine};
///
/// // CRC-64/XZ
/// let params =
///     CrcParams::new(64, 0x42F0E1EBA9EA3693, u64::MAX, true, true, u64::MAX).unwrap();
/// let a = crc_calc(&params, params.init(), b"12345");
/// let b = crc_calc(&params, params.init(), b"6789");
/// assert_eq!(crc_combine(&params, a, b, 4), 0x995DC9BBDF1939FA);
/// ```
pub fn crc_combine(params: &CrcParams, crc1: u64, crc2: u64, len: u64) -> u64 {
    let op = crc_combine_constant(params, len);
    crc_combine_fixed(params, crc1, crc2, op)
}

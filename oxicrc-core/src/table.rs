//! Table-driven (Sarwate) CRC engine.
//!
//! This is the reference path: it handles every buffer on hardware without
//! carry-less multiplication, and it finishes the residue left over by the
//! fold engine.
//!
//! Register values passed between [`crc_initial`], [`crc_bytes`] and
//! [`crc_final`] are in internal alignment and mean nothing to callers.

use crate::params::CrcParams;
use crate::reflect::reflect;

/// Convert a user-facing CRC value into internal alignment.
///
/// Undo the final XOR, reflect if the input and output conventions differ,
/// and scale to the top of the word for non-reflected CRCs.
#[inline]
pub(crate) fn crc_initial(params: &CrcParams, crc: u64) -> u64 {
    let mut crc = crc ^ params.xorout();
    if params.refin() != params.refout() {
        crc = reflect(crc, params.width());
    }
    if !params.refin() {
        crc <<= 64 - params.width() as u32;
    }
    crc
}

/// Convert an internal register back into the user-facing CRC value.
#[inline]
pub(crate) fn crc_final(params: &CrcParams, crc: u64) -> u64 {
    let mut crc = crc;
    if !params.refin() {
        crc >>= 64 - params.width() as u32;
    }
    if params.refin() != params.refout() {
        crc = reflect(crc, params.width());
    }
    crc ^ params.xorout()
}

/// Feed `buf` through the byte table, one byte at a time.
#[inline]
pub(crate) fn crc_bytes(params: &CrcParams, crc: u64, buf: &[u8]) -> u64 {
    let table = params.table();
    if params.refin() {
        buf.iter().fold(crc, |crc, &byte| {
            (crc >> 8) ^ table[((crc ^ byte as u64) & 0xff) as usize]
        })
    } else {
        buf.iter().fold(crc, |crc, &byte| {
            (crc << 8) ^ table[(((crc >> 56) ^ byte as u64) & 0xff) as usize]
        })
    }
}

/// Compute a CRC with the table engine only.
///
/// `crc` is either `params.init()` to start a new computation, or the result
/// of a previous call to continue one.
///
/// # Example
///
/// ```
/// use oxicrc_core::{CrcParams, crc_table};
///
/// // CRC-32/ISO-HDLC
/// let params = CrcParams::new(32, 0x04C11DB7, 0xFFFFFFFF, true, true, 0xFFFFFFFF).unwrap();
/// assert_eq!(crc_table(&params, params.init(), b"123456789"), 0xCBF43926);
/// ```
pub fn crc_table(params: &CrcParams, crc: u64, buf: &[u8]) -> u64 {
    let crc = crc_initial(params, crc);
    let crc = crc_bytes(params, crc, buf);
    crc_final(params, crc)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Bit-at-a-time reference, MSB first, straight from the CRC definition.
    fn bitwise(
        width: u8,
        poly: u64,
        init: u64,
        refin: bool,
        refout: bool,
        xorout: u64,
        data: &[u8],
    ) -> u64 {
        let top = 1u64 << (width - 1);
        let mask = if width == 64 { u64::MAX } else { (1u64 << width) - 1 };
        let mut reg = init;
        for &byte in data {
            let byte = if refin { byte.reverse_bits() } else { byte };
            for i in (0..8).rev() {
                let feedback = (reg & top != 0) ^ (byte >> i & 1 != 0);
                reg = (reg << 1) & mask;
                if feedback {
                    reg ^= poly;
                }
            }
        }
        if refout {
            reg = reflect(reg, width);
        }
        reg ^ xorout
    }

    fn pattern(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i * 31 + 7) as u8).collect()
    }

    #[test]
    fn test_crc32_check() {
        let params = CrcParams::new(32, 0x04C11DB7, 0xFFFFFFFF, true, true, 0xFFFFFFFF).unwrap();
        assert_eq!(crc_table(&params, params.init(), b"123456789"), 0xCBF43926);
    }

    #[test]
    fn test_crc64_xz_check() {
        let params =
            CrcParams::new(64, 0x42F0E1EBA9EA3693, u64::MAX, true, true, u64::MAX).unwrap();
        assert_eq!(
            crc_table(&params, params.init(), b"123456789"),
            0x995DC9BBDF1939FA
        );
    }

    #[test]
    fn test_empty_buffer_returns_init() {
        let params = CrcParams::new(16, 0x1021, 0x1D0F, false, true, 0x00FF).unwrap();
        assert_eq!(crc_table(&params, params.init(), b""), params.init());
    }

    #[test]
    fn test_initial_final_roundtrip() {
        let definitions = [
            (5u8, 0x05u64, 0x1Fu64, true, true, 0x1Fu64),
            (16, 0x1021, 0xFFFF, false, false, 0),
            (16, 0x1021, 0x1234, true, false, 0xFFFF),
            (24, 0x864CFB, 0xB704CE, false, true, 0xABCDEF),
            (64, 0x42F0E1EBA9EA3693, u64::MAX, false, false, u64::MAX),
        ];
        for (width, poly, init, refin, refout, xorout) in definitions {
            let params = CrcParams::new(width, poly, init, refin, refout, xorout).unwrap();
            let mask = if width == 64 { u64::MAX } else { (1u64 << width) - 1 };
            for value in [0u64, 1, 0x5A5A_5A5A_5A5A_5A5A, u64::MAX] {
                let value = value & mask;
                assert_eq!(crc_final(&params, crc_initial(&params, value)), value);
            }
        }
    }

    #[test]
    fn test_matches_bitwise_reference() {
        let definitions = [
            (1u8, 0x1u64, 0x0u64, false, false, 0x0u64),
            (1, 0x1, 0x1, true, false, 0x1),
            (3, 0x3, 0x0, false, false, 0x7),
            (7, 0x09, 0x0, false, false, 0x0),
            (12, 0x80F, 0x0, false, true, 0x0),
            (16, 0x8005, 0xFFFF, true, true, 0x0),
            (32, 0x04C11DB7, 0xFFFFFFFF, false, false, 0xFFFFFFFF),
            (33, 0x1_0000_0003, 0x5, false, true, 0x1234),
            (64, 0x42F0E1EBA9EA3693, u64::MAX, true, false, 0),
        ];
        for (width, poly, init, refin, refout, xorout) in definitions {
            let params = CrcParams::new(width, poly, init, refin, refout, xorout).unwrap();
            for len in [0, 1, 9, 64, 200] {
                let data = pattern(len);
                assert_eq!(
                    crc_table(&params, params.init(), &data),
                    bitwise(width, poly, init, refin, refout, xorout, &data),
                    "width {} refin {} refout {} len {}",
                    width,
                    refin,
                    refout,
                    len
                );
            }
        }
    }

    #[test]
    fn test_chained_calls() {
        let params = CrcParams::new(32, 0x1EDC6F41, 0xFFFFFFFF, true, true, 0xFFFFFFFF).unwrap();
        let data = pattern(300);
        let whole = crc_table(&params, params.init(), &data);
        for split in [0, 1, 17, 150, 299, 300] {
            let (a, b) = data.split_at(split);
            let chained = crc_table(&params, crc_table(&params, params.init(), a), b);
            assert_eq!(chained, whole, "split at {}", split);
        }
    }
}

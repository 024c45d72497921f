//! Engine selection.
//!
//! [`crc_calc`] is the entry point most callers want: it picks the fold
//! engine when the CPU supports carry-less multiplication and the table
//! engine otherwise. Both produce bit-identical results.

use crate::cpu::hardware_acceleration_available;
use crate::params::CrcParams;
use crate::simd::FOLD_THRESHOLD;
use crate::table::{crc_bytes, crc_final, crc_initial};

/// CRC engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Byte-at-a-time lookup table. Available everywhere.
    Table,
    /// Carry-less multiplication fold-by-4 (PCLMULQDQ or PMULL).
    Clmul,
}

impl Backend {
    /// The fastest backend usable on this CPU.
    pub fn detect() -> Self {
        if hardware_acceleration_available() {
            Backend::Clmul
        } else {
            Backend::Table
        }
    }

    /// Backend name for display.
    pub fn name(&self) -> &'static str {
        match self {
            Backend::Table => "table",
            Backend::Clmul => "clmul",
        }
    }

    /// Whether this backend will actually run on the current CPU.
    ///
    /// `Clmul` requested on unsupported hardware falls back to `Table`.
    pub fn is_available(&self) -> bool {
        match self {
            Backend::Table => true,
            Backend::Clmul => hardware_acceleration_available(),
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Compute a CRC with the fastest engine available.
///
/// `crc` is either `params.init()` to start a new computation, or the result
/// of a previous call to continue one.
///
/// # Example
///
/// ```
/// use oxicrc_core::{CrcParams, crc_calc};
///
/// // CRC-32/ISO-HDLC
/// let params = CrcParams::new(32, 0x04C11DB7, 0xFFFFFFFF, true, true, 0xFFFFFFFF).unwrap();
/// let first = crc_calc(&params, params.init(), b"1234");
/// assert_eq!(crc_calc(&params, first, b"56789"), 0xCBF43926);
/// ```
#[inline]
pub fn crc_calc(params: &CrcParams, crc: u64, buf: &[u8]) -> u64 {
    crc_calc_with(Backend::Clmul, params, crc, buf)
}

/// Compute a CRC with an explicitly chosen engine.
///
/// Requesting [`Backend::Clmul`] on a CPU without carry-less multiplication
/// silently runs the table engine instead.
pub fn crc_calc_with(backend: Backend, params: &CrcParams, crc: u64, buf: &[u8]) -> u64 {
    let crc = crc_initial(params, crc);
    let crc = update_internal(backend, params, crc, buf);
    crc_final(params, crc)
}

/// Advance an internal register over `buf`.
pub(crate) fn update_internal(backend: Backend, params: &CrcParams, crc: u64, buf: &[u8]) -> u64 {
    if backend == Backend::Clmul && buf.len() >= FOLD_THRESHOLD && backend.is_available() {
        tracing::trace!(len = buf.len(), "fold engine");
        return fold(params, crc, buf);
    }
    crc_bytes(params, crc, buf)
}

#[cfg(target_arch = "x86_64")]
#[inline]
fn fold(params: &CrcParams, crc: u64, buf: &[u8]) -> u64 {
    // SAFETY: only reached after hardware_acceleration_available() returned true.
    unsafe { crate::simd::x86::crc_pclmul(params, crc, buf) }
}

#[cfg(target_arch = "aarch64")]
#[inline]
fn fold(params: &CrcParams, crc: u64, buf: &[u8]) -> u64 {
    // SAFETY: only reached after hardware_acceleration_available() returned true.
    unsafe { crate::simd::arm::crc_pmull(params, crc, buf) }
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
#[inline]
fn fold(params: &CrcParams, crc: u64, buf: &[u8]) -> u64 {
    crc_bytes(params, crc, buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::crc_table;

    fn crc64_xz() -> CrcParams {
        CrcParams::new(64, 0x42F0E1EBA9EA3693, u64::MAX, true, true, u64::MAX).unwrap()
    }

    fn crc32_bzip2() -> CrcParams {
        CrcParams::new(32, 0x04C11DB7, 0xFFFFFFFF, false, false, 0xFFFFFFFF).unwrap()
    }

    fn pattern(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i as u32).wrapping_mul(2654435761).to_le_bytes()[2]).collect()
    }

    #[test]
    fn test_backend_detect() {
        let backend = Backend::detect();
        assert!(backend.is_available());
        assert_eq!(backend == Backend::Clmul, hardware_acceleration_available());
    }

    #[test]
    fn test_backend_names() {
        assert_eq!(Backend::Table.name(), "table");
        assert_eq!(Backend::Clmul.to_string(), "clmul");
        assert!(Backend::Table.is_available());
    }

    #[test]
    fn test_empty_buffer() {
        let params = crc64_xz();
        assert_eq!(crc_calc(&params, params.init(), &[]), params.init());
        assert_eq!(crc_calc(&params, 0x1234, &[]), 0x1234);
    }

    #[test]
    fn test_backends_agree_around_threshold() {
        for params in [crc64_xz(), crc32_bzip2()] {
            for len in [0, 1, 63, 64, 127, 128, 129, 255, 256, 257, 4099] {
                let data = pattern(len);
                let reference = crc_table(&params, params.init(), &data);
                assert_eq!(crc_calc(&params, params.init(), &data), reference, "len {}", len);
                assert_eq!(
                    crc_calc_with(Backend::Table, &params, params.init(), &data),
                    reference
                );
                assert_eq!(
                    crc_calc_with(Backend::Clmul, &params, params.init(), &data),
                    reference
                );
            }
        }
    }

    #[test]
    fn test_checksum_shortcut() {
        let params = crc32_bzip2();
        assert_eq!(params.checksum(b"123456789"), 0xFC891918);
    }

    #[test]
    fn test_chaining_across_backends() {
        let params = crc64_xz();
        let data = pattern(1000);
        let (a, b) = data.split_at(300);
        let first = crc_calc_with(Backend::Table, &params, params.init(), a);
        let chained = crc_calc_with(Backend::Clmul, &params, first, b);
        assert_eq!(chained, crc_table(&params, params.init(), &data));
    }
}

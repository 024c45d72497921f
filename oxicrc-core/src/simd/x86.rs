//! x86_64 fold lane using PCLMULQDQ.
//!
//! SSSE3 provides the byte shuffle used to swap lane endianness for
//! non-reflected CRCs.

use super::{Lane, fold_by_4};
use crate::params::CrcParams;
use core::arch::x86_64::*;

/// Check if PCLMULQDQ and SSSE3 are available at runtime.
#[inline]
pub(crate) fn is_supported() -> bool {
    #[cfg(all(target_feature = "pclmulqdq", target_feature = "ssse3"))]
    {
        true
    }
    #[cfg(not(all(target_feature = "pclmulqdq", target_feature = "ssse3")))]
    {
        is_x86_feature_detected!("pclmulqdq") && is_x86_feature_detected!("ssse3")
    }
}

#[derive(Clone, Copy)]
pub(crate) struct Pclmul(__m128i);

// Baseline intrinsics are safe functions on newer toolchains.
#[allow(unused_unsafe)]
impl Lane for Pclmul {
    #[inline(always)]
    unsafe fn load(bytes: &[u8; 16]) -> Self {
        // SAFETY: `bytes` is valid for 16 bytes; loadu has no alignment requirement.
        Self(unsafe { _mm_loadu_si128(bytes.as_ptr().cast()) })
    }

    #[inline(always)]
    unsafe fn store(self) -> [u8; 16] {
        let mut out = [0u8; 16];
        // SAFETY: `out` is valid for 16 bytes; storeu has no alignment requirement.
        unsafe { _mm_storeu_si128(out.as_mut_ptr().cast(), self.0) };
        out
    }

    #[inline(always)]
    unsafe fn from_halves(hi: u64, lo: u64) -> Self {
        // SAFETY: SSE2 is part of the x86_64 baseline.
        Self(unsafe { _mm_set_epi64x(hi as i64, lo as i64) })
    }

    #[inline(always)]
    unsafe fn xor(self, other: Self) -> Self {
        // SAFETY: SSE2 is part of the x86_64 baseline.
        Self(unsafe { _mm_xor_si128(self.0, other.0) })
    }

    #[inline(always)]
    unsafe fn clmul_lo(self, k: Self) -> Self {
        // SAFETY: caller guarantees PCLMULQDQ.
        Self(unsafe { _mm_clmulepi64_si128(self.0, k.0, 0x00) })
    }

    #[inline(always)]
    unsafe fn clmul_hi(self, k: Self) -> Self {
        // SAFETY: caller guarantees PCLMULQDQ.
        Self(unsafe { _mm_clmulepi64_si128(self.0, k.0, 0x11) })
    }

    #[inline(always)]
    unsafe fn swap_bytes(self) -> Self {
        // SAFETY: caller guarantees SSSE3.
        unsafe {
            let mask = _mm_set_epi8(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15);
            Self(_mm_shuffle_epi8(self.0, mask))
        }
    }
}

/// Fold `buf` into the internal register `crc` using PCLMULQDQ.
///
/// # Safety
///
/// This function requires PCLMULQDQ and SSSE3 support.
/// Caller must verify `is_supported()` returns true.
#[target_feature(enable = "pclmulqdq", enable = "ssse3")]
pub(crate) unsafe fn crc_pclmul(params: &CrcParams, crc: u64, buf: &[u8]) -> u64 {
    // SAFETY: the features `Pclmul` needs are enabled on this function.
    unsafe { fold_by_4::<Pclmul>(params, crc, buf) }
}

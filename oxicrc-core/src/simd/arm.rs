//! aarch64 fold lane using PMULL.

use super::{Lane, fold_by_4};
use crate::params::CrcParams;
use core::arch::aarch64::*;

/// Check if PMULL (crypto extensions) is available at runtime.
#[inline]
pub(crate) fn is_supported() -> bool {
    #[cfg(target_feature = "aes")]
    {
        true
    }
    #[cfg(not(target_feature = "aes"))]
    {
        std::arch::is_aarch64_feature_detected!("aes")
    }
}

#[derive(Clone, Copy)]
pub(crate) struct Pmull(uint64x2_t);

// Baseline intrinsics are safe functions on newer toolchains.
#[allow(unused_unsafe)]
impl Lane for Pmull {
    #[inline(always)]
    unsafe fn load(bytes: &[u8; 16]) -> Self {
        // SAFETY: `bytes` is valid for 16 bytes.
        Self(unsafe { vreinterpretq_u64_u8(vld1q_u8(bytes.as_ptr())) })
    }

    #[inline(always)]
    unsafe fn store(self) -> [u8; 16] {
        let mut out = [0u8; 16];
        // SAFETY: `out` is valid for 16 bytes.
        unsafe { vst1q_u8(out.as_mut_ptr(), vreinterpretq_u8_u64(self.0)) };
        out
    }

    #[inline(always)]
    unsafe fn from_halves(hi: u64, lo: u64) -> Self {
        // SAFETY: NEON is part of the aarch64 baseline.
        Self(unsafe { vcombine_u64(vcreate_u64(lo), vcreate_u64(hi)) })
    }

    #[inline(always)]
    unsafe fn xor(self, other: Self) -> Self {
        // SAFETY: NEON is part of the aarch64 baseline.
        Self(unsafe { veorq_u64(self.0, other.0) })
    }

    #[inline(always)]
    unsafe fn clmul_lo(self, k: Self) -> Self {
        // SAFETY: caller guarantees the AES extension.
        unsafe {
            let product = vmull_p64(vgetq_lane_u64(self.0, 0), vgetq_lane_u64(k.0, 0));
            Self(vreinterpretq_u64_p128(product))
        }
    }

    #[inline(always)]
    unsafe fn clmul_hi(self, k: Self) -> Self {
        // SAFETY: caller guarantees the AES extension.
        unsafe {
            let product = vmull_p64(vgetq_lane_u64(self.0, 1), vgetq_lane_u64(k.0, 1));
            Self(vreinterpretq_u64_p128(product))
        }
    }

    #[inline(always)]
    unsafe fn swap_bytes(self) -> Self {
        // SAFETY: NEON is part of the aarch64 baseline.
        unsafe {
            let halves = vrev64q_u8(vreinterpretq_u8_u64(self.0));
            Self(vreinterpretq_u64_u8(vextq_u8(halves, halves, 8)))
        }
    }
}

/// Fold `buf` into the internal register `crc` using PMULL.
///
/// # Safety
///
/// This function requires PMULL (AES crypto extensions) support.
/// Caller must verify `is_supported()` returns true.
#[target_feature(enable = "neon", enable = "aes")]
pub(crate) unsafe fn crc_pmull(params: &CrcParams, crc: u64, buf: &[u8]) -> u64 {
    // SAFETY: the features `Pmull` needs are enabled on this function.
    unsafe { fold_by_4::<Pmull>(params, crc, buf) }
}

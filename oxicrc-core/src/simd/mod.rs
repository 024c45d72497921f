//! Carry-less multiplication fold engine.
//!
//! The buffer is treated as one large polynomial and reduced modulo the CRC
//! polynomial with multiply-by-constant steps that are data-parallel. Four
//! 128-bit lanes each hold 16 bytes; every loop iteration multiplies each
//! lane by `x^512` (split over its two 64-bit halves as `k1`/`k2`) and XORs in
//! the next 64 bytes. Reduction distributes over XOR in GF(2), so the lanes
//! never interact.
//!
//! Once fewer than 64 bytes remain the four lanes hold a 64-byte buffer
//! congruent to everything consumed so far. That residue and the tail are
//! finished with the table engine, which bounds the serial part regardless of
//! input size.
//!
//! Based on the fold-by-4 method from Intel's "Fast CRC Computation for
//! Generic Polynomials Using PCLMULQDQ Instruction", with the final Barrett
//! step replaced by the byte table.
//!
//! ## Lane layout
//!
//! Lanes are loaded little-endian. The reflected convention matches that
//! order directly. The non-reflected convention needs the most significant
//! byte first, so every load is byte-swapped, the seed register goes into the
//! high half, and the lanes are swapped back before the table engine sees
//! them.

#[cfg(target_arch = "aarch64")]
pub(crate) mod arm;
#[cfg(target_arch = "x86_64")]
pub(crate) mod x86;

use crate::params::CrcParams;
use crate::table::crc_bytes;

/// Buffers shorter than this go straight to the table engine.
pub const FOLD_THRESHOLD: usize = 128;

/// Bytes consumed per fold iteration (four lanes of 16 bytes).
const FOLD_BLOCK: usize = 64;

/// One 128-bit register of a carry-less multiply unit.
///
/// Implemented once per target architecture; the fold driver only talks to
/// this interface.
///
/// # Safety
///
/// Every method may use instructions that need CPU support. Callers must only
/// invoke them from code running on hardware where the implementation's
/// features were detected.
pub(crate) trait Lane: Copy {
    /// Load 16 bytes, little-endian, no alignment requirement.
    unsafe fn load(bytes: &[u8; 16]) -> Self;

    /// Store the lane as 16 little-endian bytes.
    unsafe fn store(self) -> [u8; 16];

    /// Build a lane from its high and low 64-bit halves.
    unsafe fn from_halves(hi: u64, lo: u64) -> Self;

    unsafe fn xor(self, other: Self) -> Self;

    /// Carry-less product of the low halves of `self` and `k`.
    unsafe fn clmul_lo(self, k: Self) -> Self;

    /// Carry-less product of the high halves of `self` and `k`.
    unsafe fn clmul_hi(self, k: Self) -> Self;

    /// Reverse the byte order of the whole lane.
    unsafe fn swap_bytes(self) -> Self;
}

/// Advance four lanes by one fold distance and absorb the next block.
///
/// `keys` pairs each lane half with the constant for its distance, so one
/// multiply per half covers both conventions.
#[inline(always)]
pub(crate) unsafe fn fold_step<L: Lane>(lanes: [L; 4], next: [L; 4], keys: L) -> [L; 4] {
    let mut out = next;
    for (lane, acc) in lanes.into_iter().zip(out.iter_mut()) {
        // SAFETY: forwarded from the caller's feature guarantee.
        unsafe {
            let hi = lane.clmul_hi(keys);
            let lo = lane.clmul_lo(keys);
            *acc = acc.xor(hi).xor(lo);
        }
    }
    out
}

#[inline(always)]
fn lane_bytes(block: &[u8], lane: usize) -> [u8; 16] {
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&block[lane * 16..lane * 16 + 16]);
    bytes
}

/// Load a 64-byte block into four lanes, in the order the convention needs.
#[inline(always)]
unsafe fn load_block<L: Lane>(block: &[u8], reflected: bool) -> [L; 4] {
    let mut lanes = [0, 1, 2, 3].map(|i| {
        // SAFETY: forwarded from the caller's feature guarantee.
        unsafe { L::load(&lane_bytes(block, i)) }
    });
    if !reflected {
        for lane in lanes.iter_mut() {
            // SAFETY: as above.
            *lane = unsafe { lane.swap_bytes() };
        }
    }
    lanes
}

/// Run the fold engine over `buf`, starting from the internal register `crc`.
///
/// Returns the internal register; the caller applies `crc_final`.
///
/// # Safety
///
/// `L` must be supported by the running CPU.
#[inline(always)]
pub(crate) unsafe fn fold_by_4<L: Lane>(params: &CrcParams, crc: u64, buf: &[u8]) -> u64 {
    if buf.len() < FOLD_THRESHOLD {
        return crc_bytes(params, crc, buf);
    }

    let reflected = params.refin();
    let (head, rest) = buf.split_at(FOLD_BLOCK);
    let mut blocks = rest.chunks_exact(FOLD_BLOCK);

    // SAFETY: the caller guarantees `L` is supported.
    let lanes = unsafe {
        let (keys, seed) = if reflected {
            (L::from_halves(params.k2(), params.k1()), L::from_halves(0, crc))
        } else {
            (L::from_halves(params.k1(), params.k2()), L::from_halves(crc, 0))
        };

        let mut lanes = load_block::<L>(head, reflected);
        lanes[0] = lanes[0].xor(seed);

        for block in &mut blocks {
            let next = load_block::<L>(block, reflected);
            lanes = fold_step(lanes, next, keys);
        }

        if !reflected {
            for lane in lanes.iter_mut() {
                *lane = lane.swap_bytes();
            }
        }
        lanes
    };

    // The seed now lives inside the lanes, so reduction starts from zero.
    let mut crc = 0;
    for lane in lanes {
        // SAFETY: as above.
        let bytes = unsafe { lane.store() };
        crc = crc_bytes(params, crc, &bytes);
    }
    crc_bytes(params, crc, blocks.remainder())
}

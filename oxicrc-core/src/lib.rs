//! # OxiCrc Core
//!
//! Generic CRC computation for any definition up to 64 bits wide, with
//! carry-less multiplication acceleration and CRC combination.
//!
//! This crate provides:
//!
//! - [`params`]: Derivation of tables and folding constants from a CRC definition
//! - [`table`]: Byte-at-a-time table engine, the portable reference path
//! - [`dispatch`]: Engine selection between the table and the fold engine
//! - [`combine`]: CRC of a concatenation from the CRCs of its parts
//! - [`catalog`]: Well-known CRC models with their check values
//! - [`digest`]: Incremental computation over data arriving in pieces
//! - [`cpu`]: One-time hardware capability detection
//! - [`error`]: Error types
//!
//! With the `parallel` feature, [`crc_parallel`] splits large buffers across
//! the rayon thread pool. With `mmap`, [`crc_file`] checksums a file through
//! a read-only memory map.
//!
//! ## Engines
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ crc_calc / Digest / crc_parallel                        │
//! ├────────────────────────────┬────────────────────────────┤
//! │ Fold engine (>= 128 bytes) │ Table engine               │
//! │ PCLMULQDQ / PMULL          │ 256-entry byte table       │
//! ├────────────────────────────┴────────────────────────────┤
//! │ CrcParams: table, k1/k2, combine table                  │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The fold engine leaves a 64-byte residue which the table engine finishes,
//! so both paths agree bit for bit on every input.
//!
//! ## Example
//!
//! ```rust
//! use oxicrc_core::{CrcParams, crc_calc, crc_combine};
//!
//! // CRC-64/XZ
//! let params = CrcParams::with_check(
//!     64,
//!     0x42F0E1EBA9EA3693,
//!     0xFFFFFFFFFFFFFFFF,
//!     true,
//!     true,
//!     0xFFFFFFFFFFFFFFFF,
//!     0x995DC9BBDF1939FA,
//! )
//! .unwrap();
//!
//! let a = crc_calc(&params, params.init(), b"Hello, ");
//! let b = crc_calc(&params, params.init(), b"World!");
//! let whole = crc_calc(&params, params.init(), b"Hello, World!");
//! assert_eq!(crc_combine(&params, a, b, 6), whole);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod combine;
pub mod cpu;
pub mod digest;
pub mod dispatch;
pub mod error;
#[cfg(feature = "mmap")]
pub mod file;
mod gf2;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod params;
pub mod reflect;
#[cfg_attr(
    not(any(target_arch = "x86_64", target_arch = "aarch64")),
    allow(dead_code)
)]
mod simd;
pub mod table;

// Re-exports for convenience
pub use catalog::{CATALOG, CrcModel, find_model};
pub use combine::{ShiftOperator, crc_combine, crc_combine_constant, crc_combine_fixed};
pub use cpu::hardware_acceleration_available;
pub use digest::Digest;
pub use dispatch::{Backend, crc_calc, crc_calc_with};
pub use error::{CrcError, Result};
#[cfg(feature = "mmap")]
pub use file::crc_file;
#[cfg(feature = "parallel")]
pub use parallel::crc_parallel;
pub use params::{CHECK_INPUT, CrcParams};
pub use reflect::reflect;
pub use simd::FOLD_THRESHOLD;
pub use table::crc_table;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::catalog::{CrcModel, find_model};
    pub use crate::combine::{crc_combine, crc_combine_constant, crc_combine_fixed};
    pub use crate::digest::Digest;
    pub use crate::dispatch::{Backend, crc_calc};
    pub use crate::error::{CrcError, Result};
    pub use crate::params::CrcParams;
}

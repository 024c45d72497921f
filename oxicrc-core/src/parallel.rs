//! Multi-threaded CRC over large buffers (requires `parallel` feature).
//!
//! The buffer is cut into equal chunks whose CRCs are computed independently
//! on the rayon thread pool, then merged left to right with
//! [`crc_combine_fixed`]. All full chunks share one shift operator; the last,
//! shorter chunk gets its own.

use crate::combine::{crc_combine_constant, crc_combine_fixed};
use crate::dispatch::crc_calc;
use crate::params::CrcParams;
use rayon::prelude::*;

/// Chunk size used when the caller passes zero.
pub const DEFAULT_CHUNK_SIZE: usize = 1 << 20;

/// Compute a CRC on the rayon thread pool.
///
/// Produces exactly the same value as [`crc_calc`] with the same arguments.
/// `chunk_size` of zero selects [`DEFAULT_CHUNK_SIZE`]. Buffers no larger
/// than one chunk are computed on the calling thread.
///
/// # Example
///
/// ```
/// use oxicrc_core::{CrcModel, crc_calc, crc_parallel};
///
/// let params = CrcModel::CRC_64_NVME.params().unwrap();
/// let data = vec![0xA5u8; 10_000];
/// assert_eq!(
///     crc_parallel(&params, params.init(), &data, 1024),
///     crc_calc(&params, params.init(), &data)
/// );
/// ```
pub fn crc_parallel(params: &CrcParams, crc: u64, buf: &[u8], chunk_size: usize) -> u64 {
    let chunk_size = if chunk_size == 0 {
        DEFAULT_CHUNK_SIZE
    } else {
        chunk_size
    };
    if buf.len() <= chunk_size {
        return crc_calc(params, crc, buf);
    }

    let (first, rest) = buf.split_at(chunk_size);
    let chunks: Vec<&[u8]> = rest.chunks(chunk_size).collect();
    tracing::trace!(chunks = chunks.len() + 1, chunk_size, "parallel CRC");

    let (head, partials) = rayon::join(
        || crc_calc(params, crc, first),
        || {
            chunks
                .par_iter()
                .map(|chunk| crc_calc(params, params.init(), chunk))
                .collect::<Vec<u64>>()
        },
    );

    let full_shift = crc_combine_constant(params, chunk_size as u64);
    let mut acc = head;
    for (chunk, partial) in chunks.iter().zip(partials) {
        let op = if chunk.len() == chunk_size {
            full_shift
        } else {
            crc_combine_constant(params, chunk.len() as u64)
        };
        acc = crc_combine_fixed(params, acc, partial, op);
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;
    use crate::table::crc_table;

    fn pattern(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i ^ (i >> 7)) as u8).collect()
    }

    #[test]
    fn test_parallel_matches_serial() {
        let data = pattern(10_007);
        for model in CATALOG {
            let params = model.params().unwrap();
            let expected = crc_table(&params, params.init(), &data);
            for chunk_size in [1000, 4096, 10_007, 20_000] {
                assert_eq!(
                    crc_parallel(&params, params.init(), &data, chunk_size),
                    expected,
                    "{} chunk {}",
                    model.name,
                    chunk_size
                );
            }
        }
    }

    #[test]
    fn test_parallel_chained_start() {
        let params = crate::catalog::CrcModel::CRC_32_BZIP2.params().unwrap();
        let data = pattern(5000);
        let start = crc_table(&params, params.init(), b"prefix");
        assert_eq!(
            crc_parallel(&params, start, &data, 333),
            crc_table(&params, start, &data)
        );
    }

    #[test]
    fn test_parallel_small_and_default_chunk() {
        let params = crate::catalog::CrcModel::CRC_64_XZ.params().unwrap();
        assert_eq!(crc_parallel(&params, params.init(), &[], 0), params.init());
        assert_eq!(
            crc_parallel(&params, params.init(), b"123456789", 0),
            0x995DC9BBDF1939FA
        );
        assert_eq!(
            crc_parallel(&params, params.init(), b"123456789", 1),
            0x995DC9BBDF1939FA
        );
    }
}

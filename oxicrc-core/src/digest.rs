//! Running CRC over data that arrives in pieces.

use crate::dispatch::{Backend, update_internal};
use crate::params::CrcParams;
use crate::table::{crc_final, crc_initial};

/// Incremental CRC computation.
///
/// Keeps the register in internal alignment between updates, so the
/// conversion at either end runs once instead of once per chunk.
///
/// # Example
///
/// ```
/// use oxicrc_core::{CrcModel, Digest};
///
/// let params = CrcModel::CRC_32_ISCSI.params().unwrap();
/// let mut digest = Digest::new(&params);
/// digest.update(b"1234");
/// digest.update(b"56789");
/// assert_eq!(digest.value(), 0xE3069283);
/// ```
#[derive(Debug, Clone)]
pub struct Digest<'p> {
    params: &'p CrcParams,
    backend: Backend,
    state: u64,
}

impl<'p> Digest<'p> {
    /// Start a new computation using the fastest engine.
    pub fn new(params: &'p CrcParams) -> Self {
        Self::with_backend(params, Backend::detect())
    }

    /// Start a new computation with an explicit engine.
    pub fn with_backend(params: &'p CrcParams, backend: Backend) -> Self {
        Self {
            params,
            backend,
            state: crc_initial(params, params.init()),
        }
    }

    /// Feed more data.
    pub fn update(&mut self, data: &[u8]) {
        self.state = update_internal(self.backend, self.params, self.state, data);
    }

    /// CRC of everything fed so far. Does not consume the digest.
    pub fn value(&self) -> u64 {
        crc_final(self.params, self.state)
    }

    /// Forget all data fed so far.
    pub fn reset(&mut self) {
        self.state = crc_initial(self.params, self.params.init());
    }

    /// Parameters this digest computes with.
    pub fn params(&self) -> &'p CrcParams {
        self.params
    }

    /// Engine in use.
    pub fn backend(&self) -> Backend {
        self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CrcModel;
    use crate::table::crc_table;

    #[test]
    fn test_digest_empty() {
        let params = CrcModel::CRC_16_IBM_SDLC.params().unwrap();
        let digest = Digest::new(&params);
        assert_eq!(digest.value(), params.init());
    }

    #[test]
    fn test_digest_chunked() {
        let params = CrcModel::CRC_64_WE.params().unwrap();
        let data: Vec<u8> = (0..5000u32).map(|i| (i % 251) as u8).collect();
        let expected = crc_table(&params, params.init(), &data);
        for backend in [Backend::Table, Backend::Clmul] {
            for chunk in [1, 7, 128, 1000] {
                let mut digest = Digest::with_backend(&params, backend);
                for piece in data.chunks(chunk) {
                    digest.update(piece);
                }
                assert_eq!(digest.value(), expected, "{} chunk {}", backend, chunk);
            }
        }
    }

    #[test]
    fn test_digest_reset() {
        let params = CrcModel::CRC_32_ISO_HDLC.params().unwrap();
        let mut digest = Digest::new(&params);
        digest.update(b"garbage");
        digest.reset();
        digest.update(b"123456789");
        assert_eq!(digest.value(), 0xCBF43926);
        assert_eq!(digest.params(), &params);
    }

    #[test]
    fn test_value_does_not_consume() {
        let params = CrcModel::CRC_8_SMBUS.params().unwrap();
        let mut digest = Digest::new(&params);
        digest.update(b"1234");
        let _ = digest.value();
        digest.update(b"56789");
        assert_eq!(digest.value(), 0xF4);
    }
}

//! Memory-mapped file checksums (requires `mmap` feature).
//!
//! # Safety
//!
//! Memory-mapped files can change under the mapping if another process
//! modifies them. The mapping is read-only; a concurrent writer can only
//! make the resulting CRC stale, not unsound for this process's own memory.

use crate::digest::Digest;
use crate::dispatch::crc_calc;
use crate::error::Result;
use crate::params::CrcParams;
use memmap2::Mmap;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

const READ_BUFFER: usize = 64 * 1024;

/// Compute the CRC of a whole file.
///
/// Regular files are memory-mapped; empty ones return `params.init()`
/// without creating a mapping. Anything else (pipes, character devices,
/// procfs entries) reports no reliable length and is read to the end.
///
/// # Example
///
/// ```no_run
/// use oxicrc_core::{CrcModel, crc_file};
///
/// let params = CrcModel::CRC_32_ISO_HDLC.params().unwrap();
/// let crc = crc_file(&params, "archive.bin").unwrap();
/// println!("{:08x}", crc);
/// ```
pub fn crc_file<P: AsRef<Path>>(params: &CrcParams, path: P) -> Result<u64> {
    let file = File::open(path.as_ref())?;
    let metadata = file.metadata()?;
    if !metadata.is_file() {
        tracing::trace!(path = %path.as_ref().display(), "streaming non-regular file");
        return crc_stream(params, file);
    }
    let len = metadata.len();
    if len == 0 {
        return Ok(params.init());
    }
    // SAFETY: Read-only mapping, caller responsible for file stability
    let mmap = unsafe { Mmap::map(&file)? };
    tracing::trace!(path = %path.as_ref().display(), len, "mapped file");
    Ok(crc_calc(params, params.init(), &mmap))
}

fn crc_stream<R: Read>(params: &CrcParams, mut reader: R) -> Result<u64> {
    let mut digest = Digest::new(params);
    let mut buf = vec![0u8; READ_BUFFER];
    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => digest.update(&buf[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(digest.value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CrcModel;
    use crate::error::CrcError;
    use std::io::Write;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("oxicrc_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_crc_file_check_vector() {
        let path = temp_path("check");
        {
            let mut file = File::create(&path).unwrap();
            file.write_all(b"123456789").unwrap();
        }
        let params = CrcModel::CRC_32_ISO_HDLC.params().unwrap();
        assert_eq!(crc_file(&params, &path).unwrap(), 0xCBF43926);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_crc_file_large() {
        let path = temp_path("large");
        let data: Vec<u8> = (0..100_000u32).map(|i| (i * 7) as u8).collect();
        std::fs::write(&path, &data).unwrap();
        let params = CrcModel::CRC_64_XZ.params().unwrap();
        assert_eq!(
            crc_file(&params, &path).unwrap(),
            crate::table::crc_table(&params, params.init(), &data)
        );
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_crc_file_empty() {
        let path = temp_path("empty");
        File::create(&path).unwrap();
        let params = CrcModel::CRC_16_IBM_SDLC.params().unwrap();
        assert_eq!(crc_file(&params, &path).unwrap(), params.init());
        std::fs::remove_file(&path).unwrap();
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_crc_file_procfs_is_read() {
        let path = "/proc/version";
        let contents = std::fs::read(path).unwrap();
        assert!(!contents.is_empty());
        assert_eq!(std::fs::metadata(path).unwrap().len(), 0);

        let params = CrcModel::CRC_32_ISO_HDLC.params().unwrap();
        let crc = crc_file(&params, path).unwrap();
        assert_ne!(crc, params.init());
        assert_eq!(crc, crate::table::crc_table(&params, params.init(), &contents));
    }

    #[test]
    fn test_crc_stream_matches_calc() {
        let data: Vec<u8> = (0..200_000u32).map(|i| (i % 251) as u8).collect();
        let params = CrcModel::CRC_64_XZ.params().unwrap();
        assert_eq!(
            crc_stream(&params, &data[..]).unwrap(),
            crc_calc(&params, params.init(), &data)
        );
        assert_eq!(crc_stream(&params, io::empty()).unwrap(), params.init());
    }

    #[test]
    fn test_crc_file_missing() {
        let params = CrcModel::CRC_8_SMBUS.params().unwrap();
        let result = crc_file(&params, temp_path("does_not_exist"));
        assert!(matches!(result, Err(CrcError::Io(_))));
    }
}

//! Sum command implementation.

use super::model::ModelArgs;
use crate::utils::{create_progress_bar, format_crc};
use oxicrc_core::{Backend, CrcParams, Digest, crc_file, crc_parallel};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

const READ_BUFFER: usize = 64 * 1024;

/// How files are read and hashed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SumMode {
    /// Memory-map and use the fastest engine.
    Mapped,
    /// Read the whole file and split it across threads.
    Parallel,
    /// Stream through the table engine only.
    Table,
}

/// Options for the sum command.
pub struct SumOptions<'a> {
    pub files: &'a [PathBuf],
    pub model: &'a ModelArgs,
    pub json: bool,
    pub mode: SumMode,
    pub chunk_size: usize,
    pub progress: bool,
}

#[derive(Debug, Serialize)]
struct SumJson {
    file: String,
    model: String,
    crc: String,
    size: u64,
}

pub fn cmd_sum(options: &SumOptions) -> Result<(), Box<dyn std::error::Error>> {
    let selected = options.model.resolve()?;
    let params = &selected.params;
    let width = params.width();

    if options.files.is_empty() {
        let (crc, size) = sum_stdin(params, options.mode, options.chunk_size)?;
        return emit(options.json, &selected.name, "-", crc, size, width);
    }

    let pb = create_progress_bar(
        options.files.len() as u64,
        options.progress && options.files.len() > 1,
    );
    let mut results = Vec::with_capacity(options.files.len());
    for path in options.files {
        pb.set_message(path.display().to_string());
        let size = std::fs::metadata(path)?.len();
        let crc = sum_file(params, path, options.mode, options.chunk_size)?;
        tracing::debug!(file = %path.display(), size, "checksummed");
        results.push((path.display().to_string(), crc, size));
        pb.inc(1);
    }
    pb.finish_and_clear();

    if options.json {
        let entries: Vec<SumJson> = results
            .into_iter()
            .map(|(file, crc, size)| SumJson {
                file,
                model: selected.name.clone(),
                crc: format_crc(crc, width),
                size,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for (file, crc, _) in results {
            println!("{}  {}", format_crc(crc, width), file);
        }
    }
    Ok(())
}

fn sum_file(
    params: &CrcParams,
    path: &Path,
    mode: SumMode,
    chunk_size: usize,
) -> Result<u64, Box<dyn std::error::Error>> {
    match mode {
        SumMode::Mapped => Ok(crc_file(params, path)?),
        SumMode::Parallel => {
            let data = std::fs::read(path)?;
            Ok(crc_parallel(params, params.init(), &data, chunk_size))
        }
        SumMode::Table => {
            let reader = BufReader::new(File::open(path)?);
            Ok(sum_reader(params, Backend::Table, reader)?.0)
        }
    }
}

fn sum_stdin(params: &CrcParams, mode: SumMode, chunk_size: usize) -> io::Result<(u64, u64)> {
    let stdin = io::stdin().lock();
    match mode {
        SumMode::Mapped => sum_reader(params, Backend::detect(), stdin),
        SumMode::Table => sum_reader(params, Backend::Table, stdin),
        SumMode::Parallel => sum_buffered(params, stdin, chunk_size),
    }
}

/// Read everything, then split it across threads.
fn sum_buffered<R: Read>(params: &CrcParams, mut reader: R, chunk_size: usize) -> io::Result<(u64, u64)> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    Ok((crc_parallel(params, params.init(), &data, chunk_size), data.len() as u64))
}

/// Stream a reader through a digest; returns the CRC and the byte count.
fn sum_reader<R: Read>(params: &CrcParams, backend: Backend, mut reader: R) -> io::Result<(u64, u64)> {
    let mut digest = Digest::with_backend(params, backend);
    let mut buf = vec![0u8; READ_BUFFER];
    let mut total = 0u64;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        digest.update(&buf[..n]);
        total += n as u64;
    }
    Ok((digest.value(), total))
}

fn emit(
    json: bool,
    model: &str,
    file: &str,
    crc: u64,
    size: u64,
    width: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let entry = SumJson {
            file: file.to_string(),
            model: model.to_string(),
            crc: format_crc(crc, width),
            size,
        };
        println!("{}", serde_json::to_string_pretty(&[entry])?);
    } else {
        println!("{}  {}", format_crc(crc, width), file);
    }
    Ok(())
}

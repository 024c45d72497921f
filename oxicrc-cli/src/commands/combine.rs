//! Combine command implementation.

use super::model::ModelArgs;
use crate::utils::format_crc;
use oxicrc_core::crc_combine;

pub fn cmd_combine(
    crc1: u64,
    crc2: u64,
    len: u64,
    model: &ModelArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let selected = model.resolve()?;
    let params = &selected.params;
    let width = params.width();
    let mask = if width == 64 { u64::MAX } else { (1u64 << width) - 1 };
    if crc1 & !mask != 0 || crc2 & !mask != 0 {
        return Err(format!("CRC values must fit in {} bits", width).into());
    }

    let combined = crc_combine(params, crc1, crc2, len);
    tracing::debug!(len, model = %selected.name, "combined");
    println!("{}", format_crc(combined, width));
    Ok(())
}

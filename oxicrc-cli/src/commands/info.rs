//! Info command implementation.

use super::model::ModelArgs;
use crate::utils::format_crc;
use oxicrc_core::{
    Backend, FOLD_THRESHOLD,
    cpu::{NO_SIMD_ENV, simd_disabled_by_env},
    hardware_acceleration_available,
};

pub fn cmd_info(model: &ModelArgs) -> Result<(), Box<dyn std::error::Error>> {
    let selected = model.resolve()?;
    let params = &selected.params;
    let width = params.width();

    println!("Model:          {}", selected.name);
    if let Some(entry) = model.catalog_model() {
        if !entry.aliases.is_empty() {
            println!("Aliases:        {}", entry.aliases.join(", "));
        }
        println!("Check:          {}", format_crc(entry.check, width));
    }
    println!("Width:          {}", width);
    println!("RefIn/RefOut:   {}/{}", params.refin(), params.refout());
    println!("XorOut:         {}", format_crc(params.xorout(), width));
    println!("Empty CRC:      {}", format_crc(params.init(), width));
    println!();
    println!("Internal poly:  {:#018x}", params.poly());
    println!("Fold k1:        {:#018x}", params.k1());
    println!("Fold k2:        {:#018x}", params.k2());
    println!("Fold threshold: {} bytes", FOLD_THRESHOLD);
    println!();
    println!(
        "CLMUL:          {}",
        if hardware_acceleration_available() {
            "available"
        } else {
            "unavailable"
        }
    );
    println!("Backend:        {}", Backend::detect());
    if simd_disabled_by_env() {
        println!("                ({} is set)", NO_SIMD_ENV);
    }
    Ok(())
}

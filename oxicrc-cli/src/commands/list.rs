//! List command implementation.

use crate::utils::format_crc;
use oxicrc_core::{CATALOG, CrcModel};
use serde::Serialize;

/// JSON serializable catalog entry.
#[derive(Debug, Serialize)]
struct ModelJson {
    name: &'static str,
    aliases: &'static [&'static str],
    width: u8,
    poly: String,
    init: String,
    refin: bool,
    refout: bool,
    xorout: String,
    check: String,
}

impl ModelJson {
    fn from_model(model: &CrcModel) -> Self {
        let hex = |value| format!("0x{}", format_crc(value, model.width));
        Self {
            name: model.name,
            aliases: model.aliases,
            width: model.width,
            poly: hex(model.poly),
            init: hex(model.init),
            refin: model.refin,
            refout: model.refout,
            xorout: hex(model.xorout),
            check: hex(model.check),
        }
    }
}

pub fn cmd_list(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let models: Vec<ModelJson> = CATALOG.iter().map(ModelJson::from_model).collect();
        println!("{}", serde_json::to_string_pretty(&models)?);
        return Ok(());
    }

    println!(
        "{:<18} {:>5} {:>18} {:>18} {:>5} {:>6} {:>18} {:>18}",
        "Name", "Width", "Poly", "Init", "RefIn", "RefOut", "XorOut", "Check"
    );
    println!("{}", "-".repeat(113));
    for model in CATALOG {
        println!(
            "{:<18} {:>5} {:>18} {:>18} {:>5} {:>6} {:>18} {:>18}",
            model.name,
            model.width,
            format_crc(model.poly, model.width),
            format_crc(model.init, model.width),
            model.refin,
            model.refout,
            format_crc(model.xorout, model.width),
            format_crc(model.check, model.width),
        );
    }
    println!("\n{} models", CATALOG.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_json() {
        let json = serde_json::to_value(ModelJson::from_model(&CrcModel::CRC_16_ARC)).unwrap();
        assert_eq!(json["name"], "CRC-16/ARC");
        assert_eq!(json["poly"], "0x8005");
        assert_eq!(json["check"], "0xbb3d");
        assert_eq!(json["refin"], true);
    }
}

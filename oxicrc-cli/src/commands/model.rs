//! CRC model selection shared by the commands.
//!
//! A model comes from, in order of precedence: a JSON definition file, the
//! explicit definition flags, or a catalog name (default `CRC-32/ISO-HDLC`).

use crate::utils::parse_u64;
use clap::Args;
use oxicrc_core::{CrcModel, CrcParams, find_model};
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};

/// Catalog model used when nothing is selected.
pub const DEFAULT_MODEL: &str = "CRC-32/ISO-HDLC";

/// Model selection flags.
#[derive(Debug, Clone, Default, Args)]
pub struct ModelArgs {
    /// Catalog model name or alias (see `oxicrc list`)
    #[arg(short, long, conflicts_with_all = ["width", "model_file"])]
    pub model: Option<String>,

    /// JSON file with a CRC definition
    #[arg(long, conflicts_with = "width")]
    pub model_file: Option<PathBuf>,

    /// Polynomial width in bits (1-64)
    #[arg(long, requires = "poly")]
    pub width: Option<u8>,

    /// Generator polynomial (decimal or 0x hex)
    #[arg(long, value_parser = parse_u64, requires = "width")]
    pub poly: Option<u64>,

    /// Initial register value
    #[arg(long, value_parser = parse_u64, default_value = "0")]
    pub init: u64,

    /// Reflect input bytes
    #[arg(long)]
    pub refin: bool,

    /// Reflect the result
    #[arg(long)]
    pub refout: bool,

    /// Final XOR value
    #[arg(long, value_parser = parse_u64, default_value = "0")]
    pub xorout: u64,

    /// Expected CRC of "123456789", verified before use
    #[arg(long, value_parser = parse_u64)]
    pub check: Option<u64>,
}

/// A resolved model: display name plus derived parameters.
pub struct Selected {
    pub name: String,
    pub params: CrcParams,
}

/// CRC definition as stored in a model file.
///
/// Numbers may be JSON integers or `"0x..."` strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelFile {
    #[serde(default)]
    pub name: Option<String>,
    pub width: u8,
    #[serde(deserialize_with = "de_number")]
    pub poly: u64,
    #[serde(default, deserialize_with = "de_number")]
    pub init: u64,
    #[serde(default)]
    pub refin: bool,
    #[serde(default)]
    pub refout: bool,
    #[serde(default, deserialize_with = "de_number")]
    pub xorout: u64,
    #[serde(default, deserialize_with = "de_opt_number")]
    pub check: Option<u64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Number {
    Int(u64),
    Text(String),
}

impl Number {
    fn value<E: serde::de::Error>(self) -> Result<u64, E> {
        match self {
            Number::Int(value) => Ok(value),
            Number::Text(text) => parse_u64(&text).map_err(E::custom),
        }
    }
}

fn de_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    Number::deserialize(deserializer)?.value()
}

fn de_opt_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    Option::<Number>::deserialize(deserializer)?
        .map(Number::value)
        .transpose()
}

impl ModelFile {
    /// Load a definition from a JSON file.
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    fn build(&self, fallback_name: &str) -> Result<Selected, Box<dyn std::error::Error>> {
        let params = build_params(
            self.width,
            self.poly,
            self.init,
            self.refin,
            self.refout,
            self.xorout,
            self.check,
        )?;
        Ok(Selected {
            name: self.name.clone().unwrap_or_else(|| fallback_name.to_string()),
            params,
        })
    }
}

impl ModelArgs {
    /// Resolve the selection into parameters.
    pub fn resolve(&self) -> Result<Selected, Box<dyn std::error::Error>> {
        if let Some(path) = &self.model_file {
            let file = ModelFile::load(path)?;
            tracing::debug!(path = %path.display(), "loaded model file");
            return file.build(&path.display().to_string());
        }

        if let (Some(width), Some(poly)) = (self.width, self.poly) {
            let params = build_params(
                width,
                poly,
                self.init,
                self.refin,
                self.refout,
                self.xorout,
                self.check,
            )?;
            return Ok(Selected {
                name: "custom".to_string(),
                params,
            });
        }

        let model = find_model(self.model.as_deref().unwrap_or(DEFAULT_MODEL))?;
        Ok(Selected {
            name: model.name.to_string(),
            params: model.params()?,
        })
    }

    /// The catalog entry when the selection is a catalog name.
    pub fn catalog_model(&self) -> Option<&'static CrcModel> {
        if self.model_file.is_some() || self.width.is_some() {
            return None;
        }
        find_model(self.model.as_deref().unwrap_or(DEFAULT_MODEL)).ok()
    }
}

fn build_params(
    width: u8,
    poly: u64,
    init: u64,
    refin: bool,
    refout: bool,
    xorout: u64,
    check: Option<u64>,
) -> oxicrc_core::Result<CrcParams> {
    match check {
        Some(check) => CrcParams::with_check(width, poly, init, refin, refout, xorout, check),
        None => CrcParams::new(width, poly, init, refin, refout, xorout),
    }
}

//! Catalog of well-known CRC models.
//!
//! Each [`CrcModel`] is the usual six-value definition plus the check value
//! published for it (the CRC of `"123456789"`). Names follow the
//! [CRC RevEng catalogue](https://reveng.sourceforge.io/crc-catalogue/).

use crate::error::{CrcError, Result};
use crate::params::CrcParams;

/// A named CRC definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrcModel {
    /// Canonical name.
    pub name: &'static str,
    /// Other names the model is known by.
    pub aliases: &'static [&'static str],
    /// Polynomial width in bits.
    pub width: u8,
    /// Generator polynomial, non-reflected, without the leading term.
    pub poly: u64,
    /// Initial register value.
    pub init: u64,
    /// Reflect input bytes.
    pub refin: bool,
    /// Reflect the final register.
    pub refout: bool,
    /// Final XOR mask.
    pub xorout: u64,
    /// CRC of `"123456789"`.
    pub check: u64,
}

impl CrcModel {
    /// `CRC-3/GSM`.
    pub const CRC_3_GSM: Self = Self {
        name: "CRC-3/GSM",
        aliases: &[],
        width: 3,
        poly: 0x3,
        init: 0,
        refin: false,
        refout: false,
        xorout: 0x7,
        check: 0x4,
    };

    /// `CRC-4/G-704`.
    pub const CRC_4_G_704: Self = Self {
        name: "CRC-4/G-704",
        aliases: &["CRC-4/ITU"],
        width: 4,
        poly: 0x3,
        init: 0,
        refin: true,
        refout: true,
        xorout: 0,
        check: 0x7,
    };

    /// `CRC-5/USB`.
    pub const CRC_5_USB: Self = Self {
        name: "CRC-5/USB",
        aliases: &[],
        width: 5,
        poly: 0x05,
        init: 0x1F,
        refin: true,
        refout: true,
        xorout: 0x1F,
        check: 0x19,
    };

    /// `CRC-6/G-704`.
    pub const CRC_6_G_704: Self = Self {
        name: "CRC-6/G-704",
        aliases: &["CRC-6/ITU"],
        width: 6,
        poly: 0x03,
        init: 0,
        refin: true,
        refout: true,
        xorout: 0,
        check: 0x06,
    };

    /// `CRC-7/MMC`.
    pub const CRC_7_MMC: Self = Self {
        name: "CRC-7/MMC",
        aliases: &["CRC-7"],
        width: 7,
        poly: 0x09,
        init: 0,
        refin: false,
        refout: false,
        xorout: 0,
        check: 0x75,
    };

    /// `CRC-8/SMBUS`.
    pub const CRC_8_SMBUS: Self = Self {
        name: "CRC-8/SMBUS",
        aliases: &["CRC-8"],
        width: 8,
        poly: 0x07,
        init: 0,
        refin: false,
        refout: false,
        xorout: 0,
        check: 0xF4,
    };

    /// `CRC-8/MAXIM-DOW`.
    pub const CRC_8_MAXIM_DOW: Self = Self {
        name: "CRC-8/MAXIM-DOW",
        aliases: &["CRC-8/MAXIM", "DOW-CRC"],
        width: 8,
        poly: 0x31,
        init: 0,
        refin: true,
        refout: true,
        xorout: 0,
        check: 0xA1,
    };

    /// `CRC-8/AUTOSAR`.
    pub const CRC_8_AUTOSAR: Self = Self {
        name: "CRC-8/AUTOSAR",
        aliases: &[],
        width: 8,
        poly: 0x2F,
        init: 0xFF,
        refin: false,
        refout: false,
        xorout: 0xFF,
        check: 0xDF,
    };

    /// `CRC-10/ATM`.
    pub const CRC_10_ATM: Self = Self {
        name: "CRC-10/ATM",
        aliases: &["CRC-10", "CRC-10/I-610"],
        width: 10,
        poly: 0x233,
        init: 0,
        refin: false,
        refout: false,
        xorout: 0,
        check: 0x199,
    };

    /// `CRC-12/DECT`.
    pub const CRC_12_DECT: Self = Self {
        name: "CRC-12/DECT",
        aliases: &["X-CRC-12"],
        width: 12,
        poly: 0x80F,
        init: 0,
        refin: false,
        refout: false,
        xorout: 0,
        check: 0xF5B,
    };

    /// `CRC-15/CAN`.
    pub const CRC_15_CAN: Self = Self {
        name: "CRC-15/CAN",
        aliases: &["CRC-15"],
        width: 15,
        poly: 0x4599,
        init: 0,
        refin: false,
        refout: false,
        xorout: 0,
        check: 0x059E,
    };

    /// `CRC-16/ARC`.
    pub const CRC_16_ARC: Self = Self {
        name: "CRC-16/ARC",
        aliases: &["ARC", "CRC-16", "CRC-16/LHA", "CRC-IBM"],
        width: 16,
        poly: 0x8005,
        init: 0,
        refin: true,
        refout: true,
        xorout: 0,
        check: 0xBB3D,
    };

    /// `CRC-16/IBM-3740`.
    pub const CRC_16_IBM_3740: Self = Self {
        name: "CRC-16/IBM-3740",
        aliases: &["CRC-16/AUTOSAR", "CRC-16/CCITT-FALSE"],
        width: 16,
        poly: 0x1021,
        init: 0xFFFF,
        refin: false,
        refout: false,
        xorout: 0,
        check: 0x29B1,
    };

    /// `CRC-16/KERMIT`.
    pub const CRC_16_KERMIT: Self = Self {
        name: "CRC-16/KERMIT",
        aliases: &["CRC-16/CCITT", "CRC-16/CCITT-TRUE", "KERMIT"],
        width: 16,
        poly: 0x1021,
        init: 0,
        refin: true,
        refout: true,
        xorout: 0,
        check: 0x2189,
    };

    /// `CRC-16/XMODEM`.
    pub const CRC_16_XMODEM: Self = Self {
        name: "CRC-16/XMODEM",
        aliases: &["CRC-16/ACORN", "CRC-16/LTE", "XMODEM", "ZMODEM"],
        width: 16,
        poly: 0x1021,
        init: 0,
        refin: false,
        refout: false,
        xorout: 0,
        check: 0x31C3,
    };

    /// `CRC-16/MODBUS`.
    pub const CRC_16_MODBUS: Self = Self {
        name: "CRC-16/MODBUS",
        aliases: &["MODBUS"],
        width: 16,
        poly: 0x8005,
        init: 0xFFFF,
        refin: true,
        refout: true,
        xorout: 0,
        check: 0x4B37,
    };

    /// `CRC-16/IBM-SDLC`.
    pub const CRC_16_IBM_SDLC: Self = Self {
        name: "CRC-16/IBM-SDLC",
        aliases: &["CRC-16/ISO-HDLC", "CRC-16/X-25", "X-25"],
        width: 16,
        poly: 0x1021,
        init: 0xFFFF,
        refin: true,
        refout: true,
        xorout: 0xFFFF,
        check: 0x906E,
    };

    /// `CRC-16/USB`.
    pub const CRC_16_USB: Self = Self {
        name: "CRC-16/USB",
        aliases: &[],
        width: 16,
        poly: 0x8005,
        init: 0xFFFF,
        refin: true,
        refout: true,
        xorout: 0xFFFF,
        check: 0xB4C8,
    };

    /// `CRC-24/OPENPGP`.
    pub const CRC_24_OPENPGP: Self = Self {
        name: "CRC-24/OPENPGP",
        aliases: &["CRC-24"],
        width: 24,
        poly: 0x864CFB,
        init: 0xB704CE,
        refin: false,
        refout: false,
        xorout: 0,
        check: 0x21CF02,
    };

    /// `CRC-31/PHILIPS`.
    pub const CRC_31_PHILIPS: Self = Self {
        name: "CRC-31/PHILIPS",
        aliases: &[],
        width: 31,
        poly: 0x04C11DB7,
        init: 0x7FFFFFFF,
        refin: false,
        refout: false,
        xorout: 0x7FFFFFFF,
        check: 0x0CE9E46C,
    };

    /// `CRC-32/ISO-HDLC`.
    pub const CRC_32_ISO_HDLC: Self = Self {
        name: "CRC-32/ISO-HDLC",
        aliases: &["CRC-32", "CRC-32/ADCCP", "CRC-32/V-42", "CRC-32/XZ", "PKZIP"],
        width: 32,
        poly: 0x04C11DB7,
        init: 0xFFFFFFFF,
        refin: true,
        refout: true,
        xorout: 0xFFFFFFFF,
        check: 0xCBF43926,
    };

    /// `CRC-32/BZIP2`.
    pub const CRC_32_BZIP2: Self = Self {
        name: "CRC-32/BZIP2",
        aliases: &["CRC-32/AAL5", "CRC-32/DECT-B", "B-CRC-32"],
        width: 32,
        poly: 0x04C11DB7,
        init: 0xFFFFFFFF,
        refin: false,
        refout: false,
        xorout: 0xFFFFFFFF,
        check: 0xFC891918,
    };

    /// `CRC-32/MPEG-2`.
    pub const CRC_32_MPEG_2: Self = Self {
        name: "CRC-32/MPEG-2",
        aliases: &[],
        width: 32,
        poly: 0x04C11DB7,
        init: 0xFFFFFFFF,
        refin: false,
        refout: false,
        xorout: 0,
        check: 0x0376E6E7,
    };

    /// `CRC-32/ISCSI`.
    pub const CRC_32_ISCSI: Self = Self {
        name: "CRC-32/ISCSI",
        aliases: &["CRC-32C", "CRC-32/CASTAGNOLI", "CRC-32/INTERLAKEN"],
        width: 32,
        poly: 0x1EDC6F41,
        init: 0xFFFFFFFF,
        refin: true,
        refout: true,
        xorout: 0xFFFFFFFF,
        check: 0xE3069283,
    };

    /// `CRC-32/CKSUM`.
    pub const CRC_32_CKSUM: Self = Self {
        name: "CRC-32/CKSUM",
        aliases: &["CKSUM", "CRC-32/POSIX"],
        width: 32,
        poly: 0x04C11DB7,
        init: 0,
        refin: false,
        refout: false,
        xorout: 0xFFFFFFFF,
        check: 0x765E7680,
    };

    /// `CRC-32/JAMCRC`.
    pub const CRC_32_JAMCRC: Self = Self {
        name: "CRC-32/JAMCRC",
        aliases: &["JAMCRC"],
        width: 32,
        poly: 0x04C11DB7,
        init: 0xFFFFFFFF,
        refin: true,
        refout: true,
        xorout: 0,
        check: 0x340BC6D9,
    };

    /// `CRC-40/GSM`.
    pub const CRC_40_GSM: Self = Self {
        name: "CRC-40/GSM",
        aliases: &[],
        width: 40,
        poly: 0x00_0482_0009,
        init: 0,
        refin: false,
        refout: false,
        xorout: 0xFF_FFFF_FFFF,
        check: 0xD4_164F_C646,
    };

    /// `CRC-64/ECMA-182`.
    pub const CRC_64_ECMA_182: Self = Self {
        name: "CRC-64/ECMA-182",
        aliases: &["CRC-64"],
        width: 64,
        poly: 0x42F0_E1EB_A9EA_3693,
        init: 0,
        refin: false,
        refout: false,
        xorout: 0,
        check: 0x6C40_DF5F_0B49_7347,
    };

    /// `CRC-64/GO-ISO`.
    pub const CRC_64_GO_ISO: Self = Self {
        name: "CRC-64/GO-ISO",
        aliases: &[],
        width: 64,
        poly: 0x0000_0000_0000_001B,
        init: 0xFFFF_FFFF_FFFF_FFFF,
        refin: true,
        refout: true,
        xorout: 0xFFFF_FFFF_FFFF_FFFF,
        check: 0xB909_56C7_75A4_1001,
    };

    /// `CRC-64/MS`.
    pub const CRC_64_MS: Self = Self {
        name: "CRC-64/MS",
        aliases: &[],
        width: 64,
        poly: 0x259C_84CB_A642_6349,
        init: 0xFFFF_FFFF_FFFF_FFFF,
        refin: true,
        refout: true,
        xorout: 0,
        check: 0x75D4_B74F_024E_CEEA,
    };

    /// `CRC-64/NVME`.
    pub const CRC_64_NVME: Self = Self {
        name: "CRC-64/NVME",
        aliases: &[],
        width: 64,
        poly: 0xAD93_D235_94C9_3659,
        init: 0xFFFF_FFFF_FFFF_FFFF,
        refin: true,
        refout: true,
        xorout: 0xFFFF_FFFF_FFFF_FFFF,
        check: 0xAE8B_1486_0A79_9888,
    };

    /// `CRC-64/REDIS`.
    pub const CRC_64_REDIS: Self = Self {
        name: "CRC-64/REDIS",
        aliases: &[],
        width: 64,
        poly: 0xAD93_D235_94C9_35A9,
        init: 0,
        refin: true,
        refout: true,
        xorout: 0,
        check: 0xE9C6_D914_C4B8_D9CA,
    };

    /// `CRC-64/WE`.
    pub const CRC_64_WE: Self = Self {
        name: "CRC-64/WE",
        aliases: &[],
        width: 64,
        poly: 0x42F0_E1EB_A9EA_3693,
        init: 0xFFFF_FFFF_FFFF_FFFF,
        refin: false,
        refout: false,
        xorout: 0xFFFF_FFFF_FFFF_FFFF,
        check: 0x62EC_59E3_F1A4_F00A,
    };

    /// `CRC-64/XZ`.
    pub const CRC_64_XZ: Self = Self {
        name: "CRC-64/XZ",
        aliases: &["CRC-64/GO-ECMA"],
        width: 64,
        poly: 0x42F0_E1EB_A9EA_3693,
        init: 0xFFFF_FFFF_FFFF_FFFF,
        refin: true,
        refout: true,
        xorout: 0xFFFF_FFFF_FFFF_FFFF,
        check: 0x995D_C9BB_DF19_39FA,
    };

    /// Derive parameters for this model, verifying the check value.
    pub fn params(&self) -> Result<CrcParams> {
        CrcParams::with_check(
            self.width,
            self.poly,
            self.init,
            self.refin,
            self.refout,
            self.xorout,
            self.check,
        )
    }

    /// Whether `name` is this model's name or one of its aliases,
    /// ignoring ASCII case.
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
    }
}

/// Every model in the catalog, ordered by width.
pub const CATALOG: &[CrcModel] = &[
    CrcModel::CRC_3_GSM,
    CrcModel::CRC_4_G_704,
    CrcModel::CRC_5_USB,
    CrcModel::CRC_6_G_704,
    CrcModel::CRC_7_MMC,
    CrcModel::CRC_8_SMBUS,
    CrcModel::CRC_8_MAXIM_DOW,
    CrcModel::CRC_8_AUTOSAR,
    CrcModel::CRC_10_ATM,
    CrcModel::CRC_12_DECT,
    CrcModel::CRC_15_CAN,
    CrcModel::CRC_16_ARC,
    CrcModel::CRC_16_IBM_3740,
    CrcModel::CRC_16_KERMIT,
    CrcModel::CRC_16_XMODEM,
    CrcModel::CRC_16_MODBUS,
    CrcModel::CRC_16_IBM_SDLC,
    CrcModel::CRC_16_USB,
    CrcModel::CRC_24_OPENPGP,
    CrcModel::CRC_31_PHILIPS,
    CrcModel::CRC_32_ISO_HDLC,
    CrcModel::CRC_32_BZIP2,
    CrcModel::CRC_32_MPEG_2,
    CrcModel::CRC_32_ISCSI,
    CrcModel::CRC_32_CKSUM,
    CrcModel::CRC_32_JAMCRC,
    CrcModel::CRC_40_GSM,
    CrcModel::CRC_64_ECMA_182,
    CrcModel::CRC_64_GO_ISO,
    CrcModel::CRC_64_MS,
    CrcModel::CRC_64_NVME,
    CrcModel::CRC_64_REDIS,
    CrcModel::CRC_64_WE,
    CrcModel::CRC_64_XZ,
];

/// Look up a model by name or alias, ignoring ASCII case.
pub fn find_model(name: &str) -> Result<&'static CrcModel> {
    let name = name.trim();
    CATALOG
        .iter()
        .find(|model| model.matches(name))
        .ok_or_else(|| CrcError::unknown_model(name))
}

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::error::{Error, Result};

pub const VENDOR_ID: u16 = 0x0b57;

/// Supported tablets, keyed by USB product id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u16)]
pub enum VariantId {
    Am3m = 0x8528,
    Am0605 = 0x8503,
    Am0806 = 0x8502,
    Am0906 = 0x852b,
    Am1107 = 0x8505,
    Am1209 = 0x8501,
    Rl0604 = 0x851f,
    Rl0504 = 0x851d,
    Gp0806 = 0x8039,
    Gp0806b = 0x8511,
    Gp0605 = 0x8512,
    Gp0605a = 0x803a,
    Gp0504 = 0x8037,
    Nxs1513 = 0x8030,
    Gp0906 = 0x8521,
    AppIv0906 = 0x8532,
}

/// Report layout shared by a group of variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Default,
    Gp0504,
    Gp0906,
    AppIv0906,
    Am0906,
}

impl VariantId {
    pub const ALL: [VariantId; 16] = [
        Self::Am3m,
        Self::Am0605,
        Self::Am0806,
        Self::Am0906,
        Self::Am1107,
        Self::Am1209,
        Self::Rl0604,
        Self::Rl0504,
        Self::Gp0806,
        Self::Gp0806b,
        Self::Gp0605,
        Self::Gp0605a,
        Self::Gp0504,
        Self::Nxs1513,
        Self::Gp0906,
        Self::AppIv0906,
    ];

    pub fn from_usb_ids(vendor: u16, product: u16) -> Result<Self> {
        if vendor != VENDOR_ID {
            return Err(Error::UnsupportedDevice { vendor, product });
        }
        Self::try_from(product).map_err(|e| Error::UnsupportedDevice {
            vendor,
            product: e.number,
        })
    }

    pub fn product_id(self) -> u16 {
        self.into()
    }

    pub fn family(self) -> Family {
        match self {
            Self::Gp0906 => Family::Gp0906,
            Self::Am0906 => Family::Am0906,
            Self::AppIv0906 => Family::AppIv0906,
            Self::Gp0504 => Family::Gp0504,
            _ => Family::Default,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Am3m => "Hanvon Art Master III",
            Self::Am0605 => "Hanvon Art Master AM0605",
            Self::Am0806 => "Hanvon Art Master AM0806",
            Self::Am0906 => "Hanvon Art Master IV AM0906",
            Self::Am1107 => "Hanvon Art Master AM1107",
            Self::Am1209 => "Hanvon Art Master AM1209",
            Self::Rl0604 => "Hanvon Rollick RL0604",
            Self::Rl0504 => "Hanvon Rollick RL0504",
            Self::Gp0806 => "Hanvon Graphicpal GP0806",
            Self::Gp0806b => "Hanvon Graphicpal GP0806B",
            Self::Gp0605 => "Hanvon Graphicpal GP0605",
            Self::Gp0605a => "Hanvon Graphicpal GP0605A",
            Self::Gp0504 => "Hanvon Graphicpal GP0504",
            Self::Nxs1513 => "Hanvon Nilox NXS1513",
            Self::Gp0906 => "Hanvon Graphicpal III GP0906",
            Self::AppIv0906 => "Hanvon Art Painter Pro IV AppIV0906",
        }
    }
}

impl std::fmt::Display for VariantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:04x}:{:04x})", self.name(), VENDOR_ID, self.product_id())
    }
}

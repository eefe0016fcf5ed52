use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::tablet_driver::{VENDOR_ID, VariantId};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub log_level: String,
    pub device: DeviceConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeviceConfig {
    /// Bind only this product id.
    pub product: Option<u16>,
    pub read_timeout_ms: u64,
    /// Reports buffered between the reader and the router.
    pub queue_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            device: DeviceConfig::default(),
        }
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            product: None,
            read_timeout_ms: 250,
            queue_depth: 64,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        text.parse()
    }

    /// The variant the user pinned, if any.
    pub fn variant(&self) -> Result<Option<VariantId>> {
        self.device
            .product
            .map(|product| VariantId::from_usb_ids(VENDOR_ID, product))
            .transpose()
    }
}

impl DeviceConfig {
    /// Never zero; libusb treats a zero timeout as no timeout at all.
    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms.max(1))
    }
}

impl std::str::FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

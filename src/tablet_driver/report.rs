use num_enum::TryFromPrimitive;

use crate::error::{Error, Result};

/// Every Hanvon interrupt transfer is exactly this long.
pub const REPORT_LEN: usize = 10;

/// One interrupt transfer as received from the tablet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawReport([u8; REPORT_LEN]);

impl RawReport {
    pub const fn new(bytes: [u8; REPORT_LEN]) -> Self {
        Self(bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let array = bytes
            .try_into()
            .map_err(|_| Error::InvalidReportLength {
                expected: REPORT_LEN,
                got: bytes.len(),
            })?;
        Ok(Self(array))
    }

    pub fn bytes(&self) -> &[u8; REPORT_LEN] {
        &self.0
    }

    /// Report-type discriminator.
    pub fn kind(&self) -> u8 {
        self.0[0]
    }

    pub fn byte(&self, offset: usize) -> u8 {
        self.0[offset]
    }

    pub fn be16(&self, offset: usize) -> u16 {
        u16::from_be_bytes([self.0[offset], self.0[offset + 1]])
    }

    pub fn le16(&self, offset: usize) -> u16 {
        u16::from_le_bytes([self.0[offset], self.0[offset + 1]])
    }
}

impl From<[u8; REPORT_LEN]> for RawReport {
    fn from(bytes: [u8; REPORT_LEN]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for RawReport {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(bytes)
    }
}

/// Report types seen on the wire. Not every family sends every type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u8)]
pub enum ReportType {
    /// Pad keys and slider (AM/RL/GP), or pen keys with position (AM0906, AppIV).
    Buttons = 0x01,
    /// Pen position, pressure and tilt.
    Pen = 0x02,
    /// Tablet body keys (GP0906, AM0906, AppIV).
    TabletButtons = 0x0c,
}

impl RawReport {
    /// `None` for reserved or unknown discriminators.
    pub fn report_type(&self) -> Option<ReportType> {
        ReportType::try_from(self.kind()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endianness_accessors() {
        let report = RawReport::new([0x01, 0x01, 0x34, 0x12, 0, 0, 0, 0, 0, 0]);
        assert_eq!(report.le16(2), 0x1234);
        assert_eq!(report.be16(2), 0x3412);
    }

    #[test]
    fn from_slice_checks_length() {
        assert!(RawReport::from_slice(&[0u8; REPORT_LEN]).is_ok());
        assert!(matches!(
            RawReport::from_slice(&[0u8; 8]),
            Err(Error::InvalidReportLength { expected: 10, got: 8 })
        ));
        assert!(RawReport::try_from(&[0u8; 64][..]).is_err());
    }

    #[test]
    fn report_types() {
        let mut bytes = [0u8; REPORT_LEN];
        bytes[0] = 0x02;
        assert_eq!(RawReport::new(bytes).report_type(), Some(ReportType::Pen));
        bytes[0] = 0x0c;
        assert_eq!(
            RawReport::new(bytes).report_type(),
            Some(ReportType::TabletButtons)
        );
        bytes[0] = 0xff;
        assert_eq!(RawReport::new(bytes).report_type(), None);
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unsupported device {vendor:04x}:{product:04x}")]
    UnsupportedDevice { vendor: u16, product: u16 },

    #[error("report must be {expected} bytes, got {got}")]
    InvalidReportLength { expected: usize, got: usize },

    #[error("no interrupt IN endpoint on interface {0}")]
    NoEndpoint(u8),

    #[error("device disconnected")]
    NoDevice,

    #[error("usb: {0}")]
    Usb(#[from] rusb::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
}

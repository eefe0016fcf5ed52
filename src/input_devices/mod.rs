/// USB interrupt transport
pub mod usb;

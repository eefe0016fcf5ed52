use std::time::Duration;

use rusb::{Context, Device, DeviceHandle, Direction, TransferType, UsbContext};
use tokio::sync::{mpsc, watch};

use crate::error::{Error, Result};
use crate::tablet_driver::{REPORT_LEN, RawReport, VariantId};

/// The pen endpoint lives on the first interface.
const INTERFACE: u8 = 0;

/// Every attached tablet we can drive, optionally narrowed to one variant.
pub fn discover(
    context: &Context,
    only: Option<VariantId>,
) -> Result<Vec<(Device<Context>, VariantId)>> {
    let mut found = Vec::new();
    for device in context.devices()?.iter() {
        let desc = match device.device_descriptor() {
            Ok(desc) => desc,
            Err(e) => {
                tracing::debug!("skipping device: {}", e);
                continue;
            }
        };
        let Ok(variant) = VariantId::from_usb_ids(desc.vendor_id(), desc.product_id()) else {
            continue;
        };
        if only.is_some_and(|only| only != variant) {
            continue;
        }
        tracing::info!(
            bus = device.bus_number(),
            address = device.address(),
            "found {}",
            variant
        );
        found.push((device, variant));
    }
    Ok(found)
}

/// An opened tablet with its interrupt IN endpoint claimed.
pub struct UsbTablet {
    handle: DeviceHandle<Context>,
    variant: VariantId,
    endpoint: u8,
    phys: String,
}

impl UsbTablet {
    pub fn open(device: Device<Context>, variant: VariantId) -> Result<Self> {
        let endpoint = interrupt_in_endpoint(&device)?;
        let phys = phys_path(&device);

        let mut handle = device.open()?;
        if let Err(e) = handle.set_auto_detach_kernel_driver(true) {
            tracing::debug!("kernel driver auto-detach unavailable: {}", e);
        }
        handle.claim_interface(INTERFACE)?;
        tracing::info!(endpoint, %phys, "opened {}", variant);

        Ok(Self {
            handle,
            variant,
            endpoint,
            phys,
        })
    }

    pub fn variant(&self) -> VariantId {
        self.variant
    }

    pub fn phys(&self) -> &str {
        &self.phys
    }

    /// One interrupt transfer. `Ok(None)` when nothing arrived in time or the
    /// transfer was not a whole report.
    pub fn read_report(&self, timeout: Duration) -> Result<Option<RawReport>> {
        let mut buf = [0u8; REPORT_LEN];
        match self.handle.read_interrupt(self.endpoint, &mut buf, timeout) {
            Ok(REPORT_LEN) => Ok(Some(RawReport::new(buf))),
            Ok(n) => {
                tracing::debug!(len = n, "short transfer dropped");
                Ok(None)
            }
            Err(rusb::Error::Timeout) => Ok(None),
            Err(rusb::Error::NoDevice) => Err(Error::NoDevice),
            Err(e) => Err(e.into()),
        }
    }

    /// Read reports into `reports` until shutdown is signalled, the receiver
    /// goes away or the device disappears. Blocks the calling thread.
    pub fn run(
        self,
        reports: mpsc::Sender<RawReport>,
        shutdown: watch::Receiver<bool>,
        timeout: Duration,
    ) -> Result<()> {
        while !*shutdown.borrow() {
            let report = match self.read_report(timeout) {
                Ok(Some(report)) => report,
                Ok(None) => continue,
                Err(Error::NoDevice) => {
                    tracing::info!("{} disconnected", self.variant);
                    return Err(Error::NoDevice);
                }
                Err(Error::Usb(e)) if resubmittable(e) => {
                    tracing::warn!("nonzero transfer status: {}", e);
                    continue;
                }
                Err(e) => return Err(e),
            };
            if reports.blocking_send(report).is_err() {
                break;
            }
        }
        tracing::debug!("{} reader stopped", self.variant);
        Ok(())
    }
}

/// Errors after which the next transfer is worth issuing.
fn resubmittable(e: rusb::Error) -> bool {
    matches!(
        e,
        rusb::Error::Pipe | rusb::Error::Overflow | rusb::Error::Interrupted | rusb::Error::Busy
    )
}

fn interrupt_in_endpoint<T: UsbContext>(device: &Device<T>) -> Result<u8> {
    let config = device.active_config_descriptor()?;
    config
        .interfaces()
        .filter(|interface| interface.number() == INTERFACE)
        .flat_map(|interface| interface.descriptors())
        .flat_map(|desc| desc.endpoint_descriptors().collect::<Vec<_>>())
        .find(|ep| ep.direction() == Direction::In && ep.transfer_type() == TransferType::Interrupt)
        .map(|ep| ep.address())
        .ok_or(Error::NoEndpoint(INTERFACE))
}

/// `usb-<bus>-<port path>/input0`, like the kernel's physical path.
fn phys_path<T: UsbContext>(device: &Device<T>) -> String {
    let ports = device
        .port_numbers()
        .map(|ports| {
            ports
                .iter()
                .map(u8::to_string)
                .collect::<Vec<_>>()
                .join(".")
        })
        .unwrap_or_else(|_| device.address().to_string());
    format!("usb-{:03}-{}/input0", device.bus_number(), ports)
}

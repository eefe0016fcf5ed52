use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context as _, Result, bail};
use clap::Parser;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::Level;

use hanvond::config::Config;
use hanvond::event_dispatcher::{EventSink, LogSink, UinputSink};
use hanvond::event_router::Router;
use hanvond::input_devices::usb::{self, UsbTablet};
use hanvond::tablet_driver::{Capabilities, VENDOR_ID, VariantId};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only bind this product id (hex, e.g. 8528)
    #[arg(short, long, value_parser = parse_product)]
    product: Option<u16>,

    /// Log decoded frames instead of creating a uinput device
    #[arg(long)]
    dry_run: bool,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_product(s: &str) -> Result<u16, std::num::ParseIntError> {
    u16::from_str_radix(s.trim_start_matches("0x"), 16)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => Config::default(),
    };
    if args.product.is_some() {
        config.device.product = args.product;
    }

    let level = match args.verbose {
        0 => Level::from_str(&config.log_level)
            .with_context(|| format!("log_level {:?}", config.log_level))?,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let only = config.variant()?;
    let context = rusb::Context::new().context("initialising libusb")?;
    let devices = usb::discover(&context, only)?;
    if devices.is_empty() {
        bail!("no supported tablet found (vendor {:04x})", VENDOR_ID);
    }

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let mut tasks = Vec::new();
    for (device, variant) in devices {
        let tablet = match UsbTablet::open(device, variant) {
            Ok(tablet) => tablet,
            Err(e) => {
                tracing::error!("cannot open {}: {}", variant, e);
                continue;
            }
        };
        tasks.extend(spawn_connection(tablet, &config, args.dry_run, shutdown_rx.clone()));
    }
    if tasks.is_empty() {
        bail!("no tablet could be opened");
    }

    let all = wait_all(tasks);
    tokio::pin!(all);
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutting down");
            shutdown_tx.send_replace(true);
            all.await;
        }
        _ = &mut all => {}
    }
    Ok(())
}

/// Reader and router for one tablet, joined by a bounded queue.
fn spawn_connection(
    tablet: UsbTablet,
    config: &Config,
    dry_run: bool,
    shutdown: watch::Receiver<bool>,
) -> [JoinHandle<()>; 2] {
    let variant = tablet.variant();
    let phys = tablet.phys().to_owned();
    let timeout = config.device.read_timeout();
    let (tx, rx) = mpsc::channel(config.device.queue_depth.max(1));

    let reader = tokio::task::spawn_blocking(move || {
        if let Err(e) = tablet.run(tx, shutdown, timeout) {
            tracing::warn!("{}: {}", variant, e);
        }
    });

    let router = tokio::task::spawn_blocking(move || {
        let sink = match make_sink(variant, &phys, dry_run) {
            Ok(sink) => sink,
            Err(e) => {
                tracing::error!("{}: {:#}", variant, e);
                return;
            }
        };
        match Router::new(variant, sink).run(rx) {
            Ok(router) => tracing::info!("{} closed after {} reports", variant, router.reports()),
            Err(e) => tracing::error!("{}: sink failed: {}", variant, e),
        }
    });

    [reader, router]
}

fn make_sink(variant: VariantId, phys: &str, dry_run: bool) -> Result<Box<dyn EventSink>> {
    if dry_run {
        return Ok(Box::new(LogSink::new()));
    }
    let caps = Capabilities::for_variant(variant);
    let sink = UinputSink::new(variant, &caps, phys).context("creating uinput device")?;
    Ok(Box::new(sink))
}

async fn wait_all(tasks: Vec<JoinHandle<()>>) {
    for task in tasks {
        if let Err(e) = task.await {
            tracing::error!("connection task failed: {}", e);
        }
    }
}

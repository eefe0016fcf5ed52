//! Where decoded events leave the driver.

mod log_sink;
mod uinput;

pub use log_sink::LogSink;
pub use uinput::{UinputSink, event_code};

use std::io;

use crate::event_model::NormalizedEvent;

/// Consumer of decoded frames.
///
/// `emit` is called for each event of a report, in order, then `sync` once
/// to close the frame.
pub trait EventSink {
    fn emit(&mut self, event: &NormalizedEvent) -> io::Result<()>;
    fn sync(&mut self) -> io::Result<()>;
}

impl<S: EventSink + ?Sized> EventSink for Box<S> {
    fn emit(&mut self, event: &NormalizedEvent) -> io::Result<()> {
        (**self).emit(event)
    }

    fn sync(&mut self) -> io::Result<()> {
        (**self).sync()
    }
}

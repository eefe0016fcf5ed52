use std::io;

use crate::event_model::NormalizedEvent;

use super::EventSink;

/// Prints frames instead of injecting them. Used by `--dry-run`.
#[derive(Debug, Default)]
pub struct LogSink {
    frame: Vec<NormalizedEvent>,
    frames: u64,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn frames(&self) -> u64 {
        self.frames
    }
}

impl EventSink for LogSink {
    fn emit(&mut self, event: &NormalizedEvent) -> io::Result<()> {
        self.frame.push(*event);
        Ok(())
    }

    fn sync(&mut self) -> io::Result<()> {
        self.frames += 1;
        if !self.frame.is_empty() {
            tracing::info!(frame = self.frames, events = ?self.frame);
        }
        self.frame.clear();
        Ok(())
    }
}

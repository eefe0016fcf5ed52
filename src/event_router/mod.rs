//! One connection's path from raw reports to the sink.

use std::io;

use tokio::sync::mpsc;

use crate::event_dispatcher::EventSink;
use crate::tablet_driver::{DecoderFn, DecoderState, RawReport, VariantId, select_decoder};

/// Owns the decode state of a single tablet. Reports are routed one at a
/// time; nothing here is shared with other connections.
pub struct Router<S> {
    variant: VariantId,
    decoder: DecoderFn,
    state: DecoderState,
    sink: S,
    reports: u64,
}

impl<S: EventSink> Router<S> {
    pub fn new(variant: VariantId, sink: S) -> Self {
        Self {
            variant,
            decoder: select_decoder(variant),
            state: DecoderState::new(),
            sink,
            reports: 0,
        }
    }

    pub fn variant(&self) -> VariantId {
        self.variant
    }

    pub fn state(&self) -> &DecoderState {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn reports(&self) -> u64 {
        self.reports
    }

    /// Decode `report`, forward its events and close the frame. Returns the
    /// number of events forwarded.
    pub fn route(&mut self, report: &RawReport) -> io::Result<usize> {
        let events = (self.decoder)(report, &mut self.state);
        for event in &events {
            self.sink.emit(event)?;
        }
        self.sink.sync()?;
        self.reports += 1;
        Ok(events.len())
    }

    /// Route reports until every sender is gone. Blocks the calling thread.
    pub fn run(mut self, mut reports: mpsc::Receiver<RawReport>) -> io::Result<Self> {
        while let Some(report) = reports.blocking_recv() {
            self.route(&report)?;
        }
        tracing::debug!(variant = %self.variant, reports = self.reports, "router stopped");
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_model::{ButtonId, NormalizedEvent};

    #[derive(Default)]
    struct Frames {
        open: Vec<NormalizedEvent>,
        closed: Vec<Vec<NormalizedEvent>>,
    }

    impl EventSink for Frames {
        fn emit(&mut self, event: &NormalizedEvent) -> io::Result<()> {
            self.open.push(*event);
            Ok(())
        }

        fn sync(&mut self) -> io::Result<()> {
            self.closed.push(std::mem::take(&mut self.open));
            Ok(())
        }
    }

    #[test]
    fn every_report_is_one_frame() {
        let mut router = Router::new(VariantId::Am1107, Frames::default());
        router
            .route(&RawReport::new([0x01, 0x55, 0x10, 0, 0, 0, 0, 0, 0, 0]))
            .unwrap();
        router
            .route(&RawReport::new([0x01, 0x55, 0x11, 0, 0, 0, 0, 0, 0, 0]))
            .unwrap();
        router.route(&RawReport::new([0xff; 10])).unwrap();

        let frames = &router.sink().closed;
        assert_eq!(frames.len(), 3);
        assert!(frames[0].is_empty());
        assert_eq!(frames[1], vec![NormalizedEvent::wheel(1)]);
        assert!(frames[2].is_empty());
        assert_eq!(router.reports(), 3);
        assert_eq!(router.state().previous_wheel_position, 0x11);
    }

    #[test]
    fn run_drains_channel() {
        let (tx, rx) = mpsc::channel(4);
        tx.try_send(RawReport::new([0x0c, 0, 0, 0x01, 0, 0, 0, 0, 0, 0]))
            .unwrap();
        drop(tx);

        let router = Router::new(VariantId::Gp0906, Frames::default())
            .run(rx)
            .unwrap();
        assert_eq!(router.reports(), 1);
        assert_eq!(
            router.sink().closed[0][0],
            NormalizedEvent::button(ButtonId::Btn0, true)
        );
    }
}

//! Art Master IV (AM0906).
//!
//! Everything about the pen arrives in the `0x01` report, little-endian, with
//! a full 16-bit pressure value. The body keys and the ring sensor share the
//! `0x0c` report; the ring is not decoded.

use crate::event_model::{ButtonId, NormalizedEvent};
use crate::tablet_driver::report::{RawReport, ReportType};
use crate::tablet_driver::state::DecoderState;

use super::{STYLUS_KEYS, push_bits, push_position};

pub const MAX_X: u16 = 0x5750;
pub const MAX_Y: u16 = 0x3692;

/// Nominal pressure ceiling; the field itself is a full `u16`.
pub const MAX_PRESSURE: u16 = 0x7ff;

const BODY_KEYS: [(ButtonId, u8); 8] = [
    (ButtonId::Btn0, 0x01),
    (ButtonId::Btn1, 0x02),
    (ButtonId::Btn2, 0x04),
    (ButtonId::Btn3, 0x08),
    (ButtonId::Btn4, 0x10),
    (ButtonId::Btn5, 0x20),
    (ButtonId::Btn6, 0x40),
    (ButtonId::Btn7, 0x80),
];

pub fn decode(report: &RawReport, _state: &mut DecoderState) -> Vec<NormalizedEvent> {
    let mut out = Vec::new();
    match report.report_type() {
        Some(ReportType::Buttons) => {
            push_position(&mut out, report.le16(2), report.le16(4), (MAX_X, MAX_Y));
            push_bits(&mut out, report.byte(1), &STYLUS_KEYS);
            // Not shifted, unlike every other family.
            out.push(NormalizedEvent::pressure(report.le16(6)));
        }
        Some(ReportType::TabletButtons) => push_bits(&mut out, report.byte(3), &BODY_KEYS),
        _ => tracing::debug!(kind = report.kind(), "unhandled am0906 report type"),
    }
    out
}

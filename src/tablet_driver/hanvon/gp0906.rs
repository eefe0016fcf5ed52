//! Graphicpal III (GP0906).
//!
//! `[type][status][x be16][y be16][pressure be16][tilt]`, with the body keys
//! on a separate `0x0c` report.

use crate::event_model::{ButtonId, NormalizedEvent};
use crate::tablet_driver::report::{RawReport, ReportType};
use crate::tablet_driver::state::DecoderState;

use super::{PRESSURE_SHIFT, push_bits, push_position};

pub const MAX_X: u16 = 0x27de;
pub const MAX_Y: u16 = 0x1cfe;

/// All three set while the pen is in range.
const IN_RANGE: u8 = 0xe0;
const PRESSURE_VALID: u8 = 0x01;
const SIDE_KEY_VALID: u8 = 0x04;

const PEN_ENTERS: u8 = 0xc2;
const PEN_LEAVES: u8 = 0x80;

pub fn decode(report: &RawReport, _state: &mut DecoderState) -> Vec<NormalizedEvent> {
    match report.report_type() {
        Some(ReportType::Pen) => pen_report(report),
        Some(ReportType::TabletButtons) => {
            let mut out = Vec::with_capacity(4);
            push_bits(
                &mut out,
                report.byte(3),
                &[
                    (ButtonId::LEFT_PAD[0], 0x01),
                    (ButtonId::LEFT_PAD[1], 0x02),
                    (ButtonId::LEFT_PAD[2], 0x04),
                    (ButtonId::LEFT_PAD[3], 0x08),
                ],
            );
            out
        }
        _ => Vec::new(),
    }
}

fn pen_report(report: &RawReport) -> Vec<NormalizedEvent> {
    let status = report.byte(1);
    let mut out = Vec::new();

    if status & IN_RANGE != IN_RANGE {
        // Proximity changes carry no usable sample.
        match status {
            PEN_ENTERS => tracing::trace!("pen enters"),
            PEN_LEAVES => tracing::trace!("pen leaves"),
            _ => {}
        }
        return out;
    }

    if status & PRESSURE_VALID != 0 {
        out.push(NormalizedEvent::pressure(report.be16(6) >> PRESSURE_SHIFT));
    }
    if status & SIDE_KEY_VALID != 0 {
        push_bits(&mut out, status, &[(ButtonId::Right, 0x02)]);
    }
    push_position(&mut out, report.be16(2), report.be16(4), (MAX_X, MAX_Y));
    // The tip is a body key on this model, driven by the pressure high byte.
    out.push(NormalizedEvent::button(ButtonId::LEFT_PAD[0], report.byte(6) != 0));
    out
}

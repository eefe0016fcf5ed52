//! AM/RL/GP/NXS layout, used by most products, and the GP0504 tweak of it.
//!
//! Pen report (`0x02`):
//!
//! | Byte | Meaning                                                 |
//! |------|---------------------------------------------------------|
//! | 1    | status: bit0 tip, bit1 side key, bit5 eraser, high nibble in range |
//! | 2-3  | X, big-endian                                           |
//! | 4-5  | Y, big-endian                                           |
//! | 6-7  | pressure, big-endian, top 10 bits                       |
//! | 7    | tilt X in the low 6 bits                                |
//! | 8    | tilt Y                                                  |

use crate::event_model::{Axis, ButtonId, NormalizedEvent};
use crate::tablet_driver::report::{RawReport, ReportType};
use crate::tablet_driver::state::DecoderState;

use super::{PRESSURE_SHIFT, pad_report, push_bits, push_position};

pub const MAX_X: u16 = 0x27de;
pub const MAX_Y: u16 = 0x1cfe;
pub const MAX_TILT_X: u8 = 0x3f;

/// GP0504 reports the tip from the pressure byte instead of the status bit.
pub const GP0504_TOUCH_THRESHOLD: u8 = 68;

pub fn decode(report: &RawReport, state: &mut DecoderState) -> Vec<NormalizedEvent> {
    decode_with_tip(report, state, |report| report.byte(1) & 0x01 != 0)
}

pub fn decode_gp0504(report: &RawReport, state: &mut DecoderState) -> Vec<NormalizedEvent> {
    decode_with_tip(report, state, |report| report.byte(6) > GP0504_TOUCH_THRESHOLD)
}

fn decode_with_tip(
    report: &RawReport,
    state: &mut DecoderState,
    tip: impl Fn(&RawReport) -> bool,
) -> Vec<NormalizedEvent> {
    match report.report_type() {
        Some(ReportType::Buttons) => pad_report(report, state),
        Some(ReportType::Pen) => pen_report(report, tip(report)),
        _ => Vec::new(),
    }
}

fn pen_report(report: &RawReport, tip: bool) -> Vec<NormalizedEvent> {
    let status = report.byte(1);
    let mut out = Vec::with_capacity(8);

    if status & 0xf0 != 0 {
        push_position(&mut out, report.be16(2), report.be16(4), (MAX_X, MAX_Y));
        out.push(NormalizedEvent::tilt(Axis::X, report.byte(7) & MAX_TILT_X));
        out.push(NormalizedEvent::tilt(Axis::Y, report.byte(8)));
        out.push(NormalizedEvent::pressure(report.be16(6) >> PRESSURE_SHIFT));
    }

    out.push(NormalizedEvent::button(ButtonId::Left, tip));
    push_bits(&mut out, status, &[(ButtonId::Right, 0x02), (ButtonId::ERASER, 0x20)]);
    out
}

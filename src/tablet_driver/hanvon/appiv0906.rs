//! Art Painter Pro IV (AppIV0906).
//!
//! The `0x01` report carries little-endian coordinates with the pen keys, the
//! `0x02` report big-endian coordinates with pressure.

use crate::event_model::{ButtonId, NormalizedEvent};
use crate::tablet_driver::report::{RawReport, ReportType};
use crate::tablet_driver::state::DecoderState;

use super::{PRESSURE_SHIFT, STYLUS_KEYS, push_bits, push_position};

pub const MAX_X: u16 = 0x5750;
pub const MAX_Y: u16 = 0x3692;

const PRESSURE_VALID: u8 = 0x01;

const BODY_KEYS: [(ButtonId, u8); 7] = [
    (ButtonId::Btn1, 0x01),
    (ButtonId::Btn2, 0x02),
    (ButtonId::Btn3, 0x04),
    (ButtonId::Btn4, 0x08),
    (ButtonId::Btn5, 0x10),
    (ButtonId::Btn6, 0x20),
    (ButtonId::Btn7, 0x40),
];

pub fn decode(report: &RawReport, _state: &mut DecoderState) -> Vec<NormalizedEvent> {
    let mut out = Vec::new();
    match report.report_type() {
        Some(ReportType::Buttons) => {
            push_position(&mut out, report.le16(2), report.le16(4), (MAX_X, MAX_Y));
            push_bits(&mut out, report.byte(1), &STYLUS_KEYS);
        }
        Some(ReportType::Pen) => {
            push_position(&mut out, report.be16(2), report.be16(4), (MAX_X, MAX_Y));
            if report.byte(1) & PRESSURE_VALID != 0 {
                out.push(NormalizedEvent::pressure(report.be16(6) >> PRESSURE_SHIFT));
            }
        }
        Some(ReportType::TabletButtons) => push_bits(&mut out, report.byte(3), &BODY_KEYS),
        None => {}
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_model::Axis;

    #[test]
    fn key_report_is_little_endian() {
        let mut state = DecoderState::new();
        let report = RawReport::new([0x01, 0x05, 0x50, 0x57, 0x00, 0x00, 0, 0, 0, 0]);
        assert_eq!(
            decode(&report, &mut state),
            vec![
                NormalizedEvent::position(Axis::X, 0xffff),
                NormalizedEvent::position(Axis::Y, 0),
                NormalizedEvent::button(ButtonId::Left, true),
                NormalizedEvent::button(ButtonId::Right, false),
                NormalizedEvent::button(ButtonId::Middle, true),
                NormalizedEvent::button(ButtonId::Btn0, false),
            ]
        );
    }

    #[test]
    fn pen_report_is_big_endian() {
        let mut state = DecoderState::new();
        let report = RawReport::new([0x02, 0x01, 0x57, 0x50, 0x36, 0x92, 0xff, 0xc0, 0, 0]);
        assert_eq!(
            decode(&report, &mut state),
            vec![
                NormalizedEvent::position(Axis::X, 0xffff),
                NormalizedEvent::position(Axis::Y, 0xffff),
                NormalizedEvent::pressure(1023),
            ]
        );
    }

    #[test]
    fn pressure_needs_valid_bit() {
        let mut state = DecoderState::new();
        let report = RawReport::new([0x02, 0x00, 0, 0, 0, 0, 0xff, 0xc0, 0, 0]);
        let events = decode(&report, &mut state);
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| matches!(e, NormalizedEvent::AbsolutePosition { .. })));
    }

    #[test]
    fn body_keys_skip_btn0() {
        let mut state = DecoderState::new();
        let report = RawReport::new([0x0c, 0, 0, 0xff, 0, 0, 0, 0, 0, 0]);
        let events = decode(&report, &mut state);
        assert_eq!(events.len(), 7);
        assert_eq!(events[0], NormalizedEvent::button(ButtonId::Btn1, true));
        assert_eq!(events[6], NormalizedEvent::button(ButtonId::Btn7, true));
        assert!(!events.contains(&NormalizedEvent::button(ButtonId::Btn0, true)));
    }
}

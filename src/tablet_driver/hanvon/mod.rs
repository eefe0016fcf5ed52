//! Report decoders for the Hanvon families.
//!
//! Every decoder has the same shape: the first report byte picks a
//! sub-handler, unknown types decode to nothing. Layouts are reverse
//! engineered and differ in endianness, scaling and which bits gate which
//! fields, so each family keeps its own constants even where they match.

pub mod am0906;
pub mod appiv0906;
pub mod default;
pub mod gp0906;

use crate::event_model::{ABS_POSITION_MAX, Axis, ButtonId, NormalizedEvent};

use super::report::RawReport;
use super::state::DecoderState;

/// `report_buttons` treats a byte with this high nibble as key flags.
const PAD_KEY_MARKER: u8 = 0xa0;

/// Highest slider sample; bytes above it that are not key flags are ignored.
const SLIDER_MAX: u8 = 0x3f;

/// Pen keys in the status byte of the 0906 `0x01` report.
pub(crate) const STYLUS_KEYS: [(ButtonId, u8); 4] = [
    (ButtonId::Left, 0x01),
    (ButtonId::Right, 0x02),
    (ButtonId::Middle, 0x04),
    (ButtonId::Btn0, 0x08),
];

/// Shift that turns the 16-bit pressure field into 10 bits.
pub(crate) const PRESSURE_SHIFT: u32 = 6;

/// Scale a raw coordinate into `0..=ABS_POSITION_MAX`.
///
/// Readings past the declared maximum saturate.
pub(crate) fn scale(raw: u16, max: u16) -> u16 {
    let scaled = u32::from(raw) * u32::from(ABS_POSITION_MAX) / u32::from(max);
    u16::try_from(scaled).unwrap_or(ABS_POSITION_MAX)
}

pub(crate) fn push_position(out: &mut Vec<NormalizedEvent>, x: u16, y: u16, max: (u16, u16)) {
    out.push(NormalizedEvent::position(Axis::X, scale(x, max.0)));
    out.push(NormalizedEvent::position(Axis::Y, scale(y, max.1)));
}

/// Report each `(key, mask)` pair as pressed when `mask` is set in `byte`.
pub(crate) fn push_bits(out: &mut Vec<NormalizedEvent>, byte: u8, keys: &[(ButtonId, u8)]) {
    out.extend(
        keys.iter()
            .map(|&(id, mask)| NormalizedEvent::button(id, byte & mask != 0)),
    );
}

/// Decode one pad byte: either three key flags or a slider sample.
///
/// Key flags map bits 1..3 onto `pad[1..4]`; `pad[0]` is never reported
/// here.
pub fn report_buttons(
    out: &mut Vec<NormalizedEvent>,
    pad: &[ButtonId; 4],
    byte: u8,
    state: &mut DecoderState,
) {
    if byte & 0xf0 == PAD_KEY_MARKER {
        push_bits(out, byte, &[(pad[1], 0x02), (pad[2], 0x04), (pad[3], 0x08)]);
    } else if byte <= SLIDER_MAX {
        if let Some(delta) = state.wheel_sample(i32::from(byte)) {
            out.push(NormalizedEvent::wheel(delta));
        }
        tracing::debug!(sample = byte, "slider area change");
    }
}

/// Left pad and right pad key report shared by the AM/RL/GP layouts.
pub(crate) fn pad_report(report: &RawReport, state: &mut DecoderState) -> Vec<NormalizedEvent> {
    const LEFT_SIDE: u8 = 0x55;
    const RIGHT_SIDE: u8 = 0xaa;

    let mut out = Vec::new();
    if report.byte(1) == LEFT_SIDE {
        report_buttons(&mut out, &ButtonId::LEFT_PAD, report.byte(2), state);
    }
    if report.byte(3) == RIGHT_SIDE {
        report_buttons(&mut out, &ButtonId::RIGHT_PAD, report.byte(4), state);
    }
    out
}

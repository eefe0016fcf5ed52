//! Hanvon report decoding.
//!
//! [`select_decoder`] maps a [`VariantId`] to the pure function that turns
//! one [`RawReport`] into events. The only state carried between reports is
//! the slider position in [`DecoderState`].

pub mod capability;
pub mod device_table;
pub mod hanvon;
pub mod report;
pub mod state;

pub use capability::Capabilities;
pub use device_table::{Family, VENDOR_ID, VariantId};
pub use report::{REPORT_LEN, RawReport, ReportType};
pub use state::{DecoderState, WHEEL_THRESHOLD};

use crate::event_model::NormalizedEvent;

pub type DecoderFn = fn(&RawReport, &mut DecoderState) -> Vec<NormalizedEvent>;

pub fn select_decoder(variant: VariantId) -> DecoderFn {
    match variant.family() {
        Family::Default => hanvon::default::decode,
        Family::Gp0504 => hanvon::default::decode_gp0504,
        Family::Gp0906 => hanvon::gp0906::decode,
        Family::AppIv0906 => hanvon::appiv0906::decode,
        Family::Am0906 => hanvon::am0906::decode,
    }
}

/// Decode one report with the decoder for `variant`.
pub fn decode(
    variant: VariantId,
    report: &RawReport,
    state: &mut DecoderState,
) -> Vec<NormalizedEvent> {
    select_decoder(variant)(report, state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_model::{Axis, ButtonId};

    #[test]
    fn unknown_discriminator_is_empty_everywhere() {
        let report = RawReport::new([0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]);
        for variant in VariantId::ALL {
            let mut state = DecoderState::new();
            assert!(decode(variant, &report, &mut state).is_empty(), "{variant}");
            assert_eq!(state, DecoderState::new());
        }
    }

    #[test]
    fn default_family_scaling_bounds() {
        let mut state = DecoderState::new();
        let max = RawReport::new([0x02, 0x10, 0x27, 0xde, 0x1c, 0xfe, 0, 0, 0, 0]);
        let events = decode(VariantId::Am3m, &max, &mut state);
        assert_eq!(events[0], NormalizedEvent::position(Axis::X, 65535));
        assert_eq!(events[1], NormalizedEvent::position(Axis::Y, 65535));

        let zero = RawReport::new([0x02, 0x10, 0, 0, 0, 0, 0, 0, 0, 0]);
        let events = decode(VariantId::Am3m, &zero, &mut state);
        assert_eq!(events[0], NormalizedEvent::position(Axis::X, 0));
        assert_eq!(events[1], NormalizedEvent::position(Axis::Y, 0));
    }

    #[test]
    fn endianness_diverges_between_families() {
        let mut state = DecoderState::new();
        let am0906 = RawReport::new([0x01, 0x01, 0x34, 0x12, 0, 0, 0, 0, 0, 0]);
        let events = decode(VariantId::Am0906, &am0906, &mut state);
        assert_eq!(
            events[0],
            NormalizedEvent::position(Axis::X, hanvon::scale(0x1234, hanvon::am0906::MAX_X))
        );

        let pen = RawReport::new([0x02, 0x10, 0x34, 0x12, 0, 0, 0, 0, 0, 0]);
        let events = decode(VariantId::Am3m, &pen, &mut state);
        assert_eq!(
            events[0],
            NormalizedEvent::position(Axis::X, hanvon::scale(0x3412, hanvon::default::MAX_X))
        );
    }

    #[test]
    fn status_guard_is_decoupled_from_keys() {
        let mut state = DecoderState::new();
        let report = RawReport::new([0x02, 0x03, 0x12, 0x34, 0x05, 0x06, 0xff, 0xff, 0x7f, 0]);
        for variant in [VariantId::Am3m, VariantId::Gp0504] {
            let events = decode(variant, &report, &mut state);
            assert!(events.iter().all(|e| !e.is_pen_sample()), "{variant}");
            assert!(events.contains(&NormalizedEvent::button(ButtonId::Right, true)));
        }
    }

    #[test]
    fn same_input_same_output_with_fresh_state() {
        let reports = [
            RawReport::new([0x01, 0x55, 0x20, 0xaa, 0x21, 0, 0, 0, 0, 0]),
            RawReport::new([0x02, 0xf1, 0x12, 0x34, 0x05, 0x06, 0xff, 0xff, 0x7f, 0]),
            RawReport::new([0x0c, 0, 0, 0xa5, 0, 0, 0, 0, 0, 0]),
        ];
        for variant in VariantId::ALL {
            for report in &reports {
                let first = decode(variant, report, &mut DecoderState::new());
                let second = decode(variant, report, &mut DecoderState::new());
                assert_eq!(first, second, "{variant}");
            }
        }
    }

    #[test]
    fn dispatch_covers_every_family() {
        let pen = RawReport::new([0x02, 0xf1, 0x12, 0x34, 0x05, 0x06, 0xff, 0xff, 0x7f, 0]);
        let mut state = DecoderState::new();
        // Default emits tilt, GP0906 and AppIV do not, AM0906 ignores 0x02.
        let tilt = |variant| {
            decode(variant, &pen, &mut DecoderState::new())
                .iter()
                .any(|e| matches!(e, NormalizedEvent::Tilt { .. }))
        };
        assert!(tilt(VariantId::Am3m));
        assert!(tilt(VariantId::Gp0504));
        assert!(!tilt(VariantId::Gp0906));
        assert!(!tilt(VariantId::AppIv0906));
        assert!(decode(VariantId::Am0906, &pen, &mut state).is_empty());
    }
}

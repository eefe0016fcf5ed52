use crate::event_model::{ABS_POSITION_MAX, ButtonId};

use super::device_table::{Family, VariantId};
use super::hanvon::{am0906, default};

/// A key declared on the virtual device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ToolPen,
    Touch,
    Button(ButtonId),
}

/// Declared for every model, whether or not it has the physical key.
pub const KEYS: &[Key] = &[
    Key::ToolPen,
    Key::Touch,
    Key::Button(ButtonId::Left),
    Key::Button(ButtonId::Right),
    Key::Button(ButtonId::Middle),
    Key::Button(ButtonId::Btn0),
    Key::Button(ButtonId::Btn1),
    Key::Button(ButtonId::Btn2),
    Key::Button(ButtonId::Btn3),
    Key::Button(ButtonId::Btn4),
    Key::Button(ButtonId::Btn5),
    Key::Button(ButtonId::Btn6),
    Key::Button(ButtonId::Btn7),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbsAxis {
    X,
    Y,
    TiltX,
    TiltY,
    Pressure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbsRange {
    pub min: i32,
    pub max: i32,
    pub fuzz: i32,
}

impl AbsRange {
    const fn new(max: i32, fuzz: i32) -> Self {
        Self { min: 0, max, fuzz }
    }
}

pub const MAX_TILT_Y: u8 = 0x7f;
pub const MAX_PRESSURE: u16 = 0x3ff;

/// Everything the sink must know before the first event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capabilities {
    pub keys: &'static [Key],
    pub axes: [(AbsAxis, AbsRange); 5],
    pub wheel: bool,
}

impl Capabilities {
    pub fn for_variant(variant: VariantId) -> Self {
        let pressure_max = match variant.family() {
            Family::Am0906 => am0906::MAX_PRESSURE,
            _ => MAX_PRESSURE,
        };
        Self {
            keys: KEYS,
            axes: [
                (AbsAxis::X, AbsRange::new(i32::from(ABS_POSITION_MAX), 4)),
                (AbsAxis::Y, AbsRange::new(i32::from(ABS_POSITION_MAX), 4)),
                (AbsAxis::TiltX, AbsRange::new(i32::from(default::MAX_TILT_X), 0)),
                (AbsAxis::TiltY, AbsRange::new(i32::from(MAX_TILT_Y), 0)),
                (AbsAxis::Pressure, AbsRange::new(i32::from(pressure_max), 0)),
            ],
            wheel: true,
        }
    }

    #[cfg(test)]
    fn range(&self, axis: AbsAxis) -> Option<AbsRange> {
        self.axes
            .iter()
            .find(|(a, _)| *a == axis)
            .map(|(_, range)| *range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressure_range_depends_on_family() {
        let caps = Capabilities::for_variant(VariantId::Am0906);
        assert_eq!(caps.range(AbsAxis::Pressure).map(|r| r.max), Some(2047));
        for variant in VariantId::ALL {
            if variant != VariantId::Am0906 {
                let caps = Capabilities::for_variant(variant);
                assert_eq!(caps.range(AbsAxis::Pressure).map(|r| r.max), Some(1023));
            }
        }
    }

    #[test]
    fn fixed_ranges() {
        let caps = Capabilities::for_variant(VariantId::Am3m);
        assert_eq!(caps.range(AbsAxis::X), Some(AbsRange { min: 0, max: 65535, fuzz: 4 }));
        assert_eq!(caps.range(AbsAxis::Y), Some(AbsRange { min: 0, max: 65535, fuzz: 4 }));
        assert_eq!(caps.range(AbsAxis::TiltX).map(|r| r.max), Some(63));
        assert_eq!(caps.range(AbsAxis::TiltY).map(|r| r.max), Some(127));
        assert!(caps.wheel);
    }

    #[test]
    fn every_button_is_declared() {
        for id in ButtonId::ALL {
            assert!(KEYS.contains(&Key::Button(id)), "{id:?}");
        }
        assert!(KEYS.contains(&Key::ToolPen));
        assert!(KEYS.contains(&Key::Touch));
    }
}

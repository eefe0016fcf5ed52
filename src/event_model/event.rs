/// Full range of a scaled absolute position.
pub const ABS_POSITION_MAX: u16 = 0xffff;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

/// Every key a Hanvon tablet can report.
///
/// `Btn0..Btn3` are the left pad, `Btn4..Btn7` the right pad (AM1107, AM1209,
/// AM0906). The pen tip is reported as `Left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonId {
    Left,
    Right,
    Middle,
    Btn0,
    Btn1,
    Btn2,
    Btn3,
    Btn4,
    Btn5,
    Btn6,
    Btn7,
}

impl ButtonId {
    pub const LEFT_PAD: [ButtonId; 4] = [Self::Btn0, Self::Btn1, Self::Btn2, Self::Btn3];
    pub const RIGHT_PAD: [ButtonId; 4] = [Self::Btn4, Self::Btn5, Self::Btn6, Self::Btn7];
    /// The stylus eraser shares the first left pad key.
    pub const ERASER: ButtonId = Self::Btn0;

    pub const ALL: [ButtonId; 11] = [
        Self::Left,
        Self::Right,
        Self::Middle,
        Self::Btn0,
        Self::Btn1,
        Self::Btn2,
        Self::Btn3,
        Self::Btn4,
        Self::Btn5,
        Self::Btn6,
        Self::Btn7,
    ];
}

/// One decoded unit of tablet input.
///
/// A report decodes to an ordered list of these, which the sink applies as
/// a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizedEvent {
    /// Position scaled to `0..=ABS_POSITION_MAX`.
    AbsolutePosition { axis: Axis, value: u16 },
    /// Raw tilt, X is `0..=63`, Y nominally `0..=127`.
    Tilt { axis: Axis, value: u8 },
    Pressure { value: u16 },
    /// Current key state. Reported on every report that carries the key,
    /// not only on change.
    Button { id: ButtonId, pressed: bool },
    WheelDelta { delta: i32 },
}

impl NormalizedEvent {
    pub fn position(axis: Axis, value: u16) -> Self {
        Self::AbsolutePosition { axis, value }
    }

    pub fn tilt(axis: Axis, value: u8) -> Self {
        Self::Tilt { axis, value }
    }

    pub fn pressure(value: u16) -> Self {
        Self::Pressure { value }
    }

    pub fn button(id: ButtonId, pressed: bool) -> Self {
        Self::Button { id, pressed }
    }

    pub fn wheel(delta: i32) -> Self {
        Self::WheelDelta { delta }
    }

    /// Position, tilt and pressure are pen samples; keys and the wheel are not.
    #[cfg(test)]
    pub(crate) fn is_pen_sample(&self) -> bool {
        matches!(
            self,
            Self::AbsolutePosition { .. } | Self::Tilt { .. } | Self::Pressure { .. }
        )
    }
}

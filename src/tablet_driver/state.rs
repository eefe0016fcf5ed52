/// Wheel samples further apart than this are treated as a jump, not motion.
pub const WHEEL_THRESHOLD: i32 = 4;

/// Below any valid slider sample, so the first sample never yields a delta.
const WHEEL_SENTINEL: i32 = -WHEEL_THRESHOLD - 1;

/// Decode history for one connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderState {
    pub previous_wheel_position: i32,
}

impl DecoderState {
    pub fn new() -> Self {
        Self {
            previous_wheel_position: WHEEL_SENTINEL,
        }
    }

    /// Feed one slider sample. Returns the delta when it is small enough to
    /// be real motion; the stored position moves to `sample` either way so a
    /// single jump does not suppress the samples after it.
    pub fn wheel_sample(&mut self, sample: i32) -> Option<i32> {
        let delta = sample - self.previous_wheel_position;
        self.previous_wheel_position = sample;
        (delta.abs() < WHEEL_THRESHOLD).then_some(delta)
    }
}

impl Default for DecoderState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_never_fires() {
        let mut state = DecoderState::new();
        assert_eq!(state.wheel_sample(0), None);
        assert_eq!(state.previous_wheel_position, 0);
    }

    #[test]
    fn jump_is_suppressed_but_tracked() {
        let mut state = DecoderState {
            previous_wheel_position: 10,
        };
        assert_eq!(state.wheel_sample(13), Some(3));
        assert_eq!(state.wheel_sample(50), None);
        assert_eq!(state.previous_wheel_position, 50);
        assert_eq!(state.wheel_sample(52), Some(2));
        assert_eq!(state.wheel_sample(48), None);
        assert_eq!(state.wheel_sample(45), Some(-3));
    }
}

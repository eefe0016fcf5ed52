mod event;

pub use event::{ABS_POSITION_MAX, Axis, ButtonId, NormalizedEvent};

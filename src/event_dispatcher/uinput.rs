use std::io;

use evdev_rs::enums::{BusType, EV_ABS, EV_KEY, EV_REL, EV_SYN, EventCode, EventType};
use evdev_rs::{
    AbsInfo, DeviceWrapper, EnableCodeData, InputEvent, TimeVal, UInputDevice, UninitDevice,
};

use crate::event_model::{Axis, ButtonId, NormalizedEvent};
use crate::tablet_driver::capability::{AbsAxis, AbsRange, Capabilities, Key};
use crate::tablet_driver::{VENDOR_ID, VariantId};

pub const DEVICE_NAME: &str = "Hanvon tablet";

/// Injects frames into the kernel through a virtual input device.
pub struct UinputSink {
    device: UInputDevice,
    time: TimeVal,
}

impl UinputSink {
    /// Create the virtual device and declare `caps` on it.
    pub fn new(variant: VariantId, caps: &Capabilities, phys: &str) -> io::Result<Self> {
        let dev = UninitDevice::new()
            .ok_or_else(|| io::Error::other("libevdev_new failed"))?;
        dev.set_name(DEVICE_NAME);
        dev.set_phys(phys);
        dev.set_bustype(BusType::BUS_USB as u16);
        dev.set_vendor_id(VENDOR_ID);
        dev.set_product_id(variant.product_id());

        for ty in [EventType::EV_KEY, EventType::EV_ABS, EventType::EV_REL] {
            dev.enable_event_type(&ty)?;
        }
        for key in caps.keys {
            dev.enable_event_code(&EventCode::EV_KEY(key_code(*key)), None)?;
        }
        for (axis, range) in &caps.axes {
            dev.enable_event_code(
                &EventCode::EV_ABS(abs_code(*axis)),
                Some(EnableCodeData::AbsInfo(abs_info(range))),
            )?;
        }
        if caps.wheel {
            dev.enable_event_code(&EventCode::EV_REL(EV_REL::REL_WHEEL), None)?;
        }

        let device = UInputDevice::create_from_device(&dev)?;
        tracing::info!(
            devnode = device.devnode().unwrap_or("?"),
            "{} registered as {}",
            variant,
            DEVICE_NAME
        );
        Ok(Self {
            device,
            time: TimeVal::new(0, 0),
        })
    }

    fn write(&self, code: EventCode, value: i32) -> io::Result<()> {
        self.device
            .write_event(&InputEvent::new(&self.time, &code, value))
    }
}

impl super::EventSink for UinputSink {
    fn emit(&mut self, event: &NormalizedEvent) -> io::Result<()> {
        match event_code(event) {
            Some((code, value)) => self.write(code, value),
            None => Ok(()),
        }
    }

    fn sync(&mut self) -> io::Result<()> {
        self.write(EventCode::EV_SYN(EV_SYN::SYN_REPORT), 0)
    }
}

/// Kernel event for a decoded event. Zero wheel deltas map to nothing, the
/// input core would drop them anyway.
pub fn event_code(event: &NormalizedEvent) -> Option<(EventCode, i32)> {
    let mapped = match *event {
        NormalizedEvent::AbsolutePosition { axis, value } => {
            let code = match axis {
                Axis::X => EV_ABS::ABS_X,
                Axis::Y => EV_ABS::ABS_Y,
            };
            (EventCode::EV_ABS(code), i32::from(value))
        }
        NormalizedEvent::Tilt { axis, value } => {
            let code = match axis {
                Axis::X => EV_ABS::ABS_TILT_X,
                Axis::Y => EV_ABS::ABS_TILT_Y,
            };
            (EventCode::EV_ABS(code), i32::from(value))
        }
        NormalizedEvent::Pressure { value } => {
            (EventCode::EV_ABS(EV_ABS::ABS_PRESSURE), i32::from(value))
        }
        NormalizedEvent::Button { id, pressed } => {
            (EventCode::EV_KEY(button_code(id)), i32::from(pressed))
        }
        NormalizedEvent::WheelDelta { delta: 0 } => return None,
        NormalizedEvent::WheelDelta { delta } => (EventCode::EV_REL(EV_REL::REL_WHEEL), delta),
    };
    Some(mapped)
}

fn button_code(id: ButtonId) -> EV_KEY {
    match id {
        ButtonId::Left => EV_KEY::BTN_LEFT,
        ButtonId::Right => EV_KEY::BTN_RIGHT,
        ButtonId::Middle => EV_KEY::BTN_MIDDLE,
        ButtonId::Btn0 => EV_KEY::BTN_0,
        ButtonId::Btn1 => EV_KEY::BTN_1,
        ButtonId::Btn2 => EV_KEY::BTN_2,
        ButtonId::Btn3 => EV_KEY::BTN_3,
        ButtonId::Btn4 => EV_KEY::BTN_4,
        ButtonId::Btn5 => EV_KEY::BTN_5,
        ButtonId::Btn6 => EV_KEY::BTN_6,
        ButtonId::Btn7 => EV_KEY::BTN_7,
    }
}

fn key_code(key: Key) -> EV_KEY {
    match key {
        Key::ToolPen => EV_KEY::BTN_TOOL_PEN,
        Key::Touch => EV_KEY::BTN_TOUCH,
        Key::Button(id) => button_code(id),
    }
}

fn abs_code(axis: AbsAxis) -> EV_ABS {
    match axis {
        AbsAxis::X => EV_ABS::ABS_X,
        AbsAxis::Y => EV_ABS::ABS_Y,
        AbsAxis::TiltX => EV_ABS::ABS_TILT_X,
        AbsAxis::TiltY => EV_ABS::ABS_TILT_Y,
        AbsAxis::Pressure => EV_ABS::ABS_PRESSURE,
    }
}

fn abs_info(range: &AbsRange) -> AbsInfo {
    AbsInfo {
        value: 0,
        minimum: range.min,
        maximum: range.max,
        fuzz: range.fuzz,
        flat: 0,
        resolution: 0,
    }
}

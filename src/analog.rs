//! Stateless conversion from a cleaned D-pad sample to analog joystick values

use crate::dpad::{DpadDirection, DpadState};

/// The analog value reported when Up or Left is held.
pub const JOYSTICK_MIN: u16 = 0;

/// The analog value reported when neither direction of an axis is held.
pub const JOYSTICK_MID: u16 = 0x7FFF;

/// The analog value reported when Down or Right is held.
pub const JOYSTICK_MAX: u16 = 0xFFFF;

/// Converts the horizontal D-pad axis into an analog X value.
///
/// Expects a cleaned sample: an uncleaned Left + Right pair falls back to
/// [`JOYSTICK_MID`], the same as a released axis.
#[must_use]
pub fn dpad_to_analog_x(dpad: DpadState) -> u16 {
    match (
        dpad.pressed(DpadDirection::Left),
        dpad.pressed(DpadDirection::Right),
    ) {
        (true, false) => JOYSTICK_MIN,
        (false, true) => JOYSTICK_MAX,
        _ => JOYSTICK_MID,
    }
}

/// Converts the vertical D-pad axis into an analog Y value.
///
/// Expects a cleaned sample: an uncleaned Up + Down pair falls back to
/// [`JOYSTICK_MID`], the same as a released axis.
#[must_use]
pub fn dpad_to_analog_y(dpad: DpadState) -> u16 {
    match (
        dpad.pressed(DpadDirection::Up),
        dpad.pressed(DpadDirection::Down),
    ) {
        (true, false) => JOYSTICK_MIN,
        (false, true) => JOYSTICK_MAX,
        _ => JOYSTICK_MID,
    }
}

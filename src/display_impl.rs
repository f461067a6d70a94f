//! Containment module for boring implementations of the [`Display`] trait

use crate::dpad::{DpadAxis, DpadDirection, DpadState};
use crate::socd::SocdMode;
use std::fmt::Display;

impl Display for DpadDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl Display for DpadAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl Display for SocdMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl Display for DpadState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_neutral() {
            return write!(f, "Neutral");
        }

        // The held directions, separated by "+"
        let mut string = String::default();
        for direction in DpadDirection::ALL {
            if self.pressed(direction) {
                if !string.is_empty() {
                    string.push('+');
                }
                string.push_str(&direction.to_string());
            }
        }
        write!(f, "{string}")
    }
}

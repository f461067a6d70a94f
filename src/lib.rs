#![forbid(missing_docs)]
#![forbid(unsafe_code)]
#![warn(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

pub mod analog;
mod display_impl;
pub mod dpad;
pub mod errors;
pub mod four_way;
pub mod pipeline;
pub mod press_order;
pub mod socd;

/// Everything you need to get started
pub mod prelude {
    pub use crate::analog::{dpad_to_analog_x, dpad_to_analog_y};
    pub use crate::dpad::{DpadAxis, DpadDirection, DpadState};
    pub use crate::four_way::FourWayFilter;
    pub use crate::pipeline::DpadCleaner;
    pub use crate::socd::{SocdCleaner, SocdMode};
}

//! The standard per-tick processing chain for a D-pad sample

use crate::dpad::DpadState;
use crate::four_way::FourWayFilter;
use crate::socd::{SocdCleaner, SocdMode};
use bevy::utils::Instant;

/// The full D-pad processing chain: an optional [`FourWayFilter`] followed by
/// a [`SocdCleaner`].
///
/// This mirrors the order a controller firmware applies per sample: diagonals
/// are suppressed first (when 4-way lever emulation is enabled), then the
/// remaining opposing pairs are arbitrated under the selected [`SocdMode`].
///
/// ```rust
/// use socd_cleaner::prelude::*;
/// use std::time::Instant;
///
/// let mut dpad = DpadCleaner::default()
///     .with_four_way_mode(true)
///     .with_socd_mode(SocdMode::SecondInputPriority);
///
/// let raw = DpadState::from(DpadDirection::Down).press(DpadDirection::Right);
/// let clean = dpad.process(raw, Instant::now());
/// assert!(clean.direction_bits().count_ones() <= 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DpadCleaner {
    four_way_mode: bool,
    socd_mode: SocdMode,
    four_way: FourWayFilter,
    socd: SocdCleaner,
}

impl DpadCleaner {
    /// Creates a cleaner with 4-way lever emulation disabled and the default
    /// [`SocdMode`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables 4-way lever emulation.
    #[must_use]
    pub fn with_four_way_mode(mut self, enabled: bool) -> Self {
        self.four_way_mode = enabled;
        self
    }

    /// Selects the SOCD resolution mode.
    #[must_use]
    pub fn with_socd_mode(mut self, mode: SocdMode) -> Self {
        self.socd_mode = mode;
        self
    }

    /// Is 4-way lever emulation enabled?
    #[must_use]
    pub fn four_way_mode(&self) -> bool {
        self.four_way_mode
    }

    /// Returns the selected SOCD resolution mode.
    pub fn socd_mode(&self) -> SocdMode {
        self.socd_mode
    }

    /// Changes the SOCD resolution mode for subsequent samples.
    pub fn set_socd_mode(&mut self, mode: SocdMode) {
        self.socd_mode = mode;
    }

    /// Runs one raw sample through the chain.
    pub fn process(&mut self, dpad: DpadState, now: Instant) -> DpadState {
        let dpad = if self.four_way_mode {
            self.four_way.filter(dpad)
        } else {
            dpad
        };
        self.socd.clean(self.socd_mode, dpad, now)
    }
}

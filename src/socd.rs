//! Per-axis arbitration of simultaneous opposing cardinal directions (SOCD)

use crate::dpad::{DpadAxis, DpadDirection, DpadState};
use bevy::prelude::Reflect;
use bevy::utils::{Duration, Instant};
use serde::{Deserialize, Serialize};

/// How should opposing directions asserted at the same time be resolved?
///
/// The discriminants match the values stored by controller firmware
/// configuration; see [`SocdMode::try_from`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
#[must_use]
pub enum SocdMode {
    /// Up always wins an Up + Down conflict.
    ///
    /// There is no built-in equivalent for the horizontal axis: Left + Right
    /// under this mode resolves like [`SocdMode::Neutral`] unless a direction
    /// is remembered.
    UpPriority,

    /// A conflict always resolves to no direction on that axis.
    Neutral,

    /// The direction pressed more recently wins, inferred as the opposite of
    /// the last single direction held on the axis.
    SecondInputPriority,

    /// The direction pressed first keeps winning for as long as both are held.
    FirstInputPriority,

    /// No cleaning at all: the input is echoed unchanged and no state is
    /// recorded. The only mode whose output may contain both directions of
    /// an axis.
    Bypass,
}

impl Default for SocdMode {
    fn default() -> Self {
        SocdMode::UpPriority
    }
}

impl TryFrom<u8> for SocdMode {
    type Error = crate::errors::InvalidSocdMode;

    /// Decodes the discriminant used by firmware configuration storage.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::UpPriority),
            1 => Ok(Self::Neutral),
            2 => Ok(Self::SecondInputPriority),
            3 => Ok(Self::FirstInputPriority),
            4 => Ok(Self::Bypass),
            invalid => Err(crate::errors::InvalidSocdMode(invalid)),
        }
    }
}

impl From<SocdMode> for u8 {
    fn from(mode: SocdMode) -> Self {
        match mode {
            SocdMode::UpPriority => 0,
            SocdMode::Neutral => 1,
            SocdMode::SecondInputPriority => 2,
            SocdMode::FirstInputPriority => 3,
            SocdMode::Bypass => 4,
        }
    }
}

/// The default span of the near-simultaneous-press neutral window.
pub const DEFAULT_NEUTRAL_WINDOW: Duration = Duration::from_millis(10);

/// Per-axis memory of the last clean single-direction activation.
///
/// `last_input` is recorded only when exactly one direction of the axis is
/// active; a fully released axis clears the remembered direction but leaves
/// the timestamp alone, so the neutral window is always measured from the
/// last single-direction activation rather than from the last sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct AxisTracker {
    last_input: Option<Instant>,
    last_direction: Option<DpadDirection>,
}

impl AxisTracker {
    /// The tracker state before any direction has been seen
    const NEW: AxisTracker = AxisTracker {
        last_input: None,
        last_direction: None,
    };

    /// Records a clean single-direction activation.
    fn activate(&mut self, direction: DpadDirection, now: Instant) -> DpadDirection {
        self.last_direction = Some(direction);
        self.last_input = Some(now);
        direction
    }

    /// Is `now` within `window` of the last single-direction activation?
    fn within_window(&self, now: Instant, window: Duration) -> bool {
        self.last_input
            .map_or(false, |last| now.saturating_duration_since(last) <= window)
    }
}

/// A stateful cleaner that resolves SOCD conflicts on both D-pad axes.
///
/// Each axis is resolved independently under the selected [`SocdMode`],
/// with one exception applied first: a conflict arriving within
/// [`DEFAULT_NEUTRAL_WINDOW`] of a clean single-direction press on the same
/// axis is treated as mechanical switch bounce and forced to neutral.
///
/// Construct one cleaner per controller, keep it alive for the lifetime of
/// the controller, and call [`SocdCleaner::clean`] once per sample:
///
/// ```rust
/// use socd_cleaner::prelude::*;
/// use std::time::Instant;
///
/// let mut cleaner = SocdCleaner::default();
/// let conflict = DpadState::from(DpadDirection::Left).press(DpadDirection::Right);
///
/// let clean = cleaner.clean(SocdMode::Neutral, conflict, Instant::now());
/// assert!(clean.is_neutral());
/// ```
///
/// The clock is injected by the caller and must be monotonic: `now` must
/// never decrease across calls on the same cleaner. This is a documented
/// precondition rather than a runtime check, since the cleaner sits on a
/// real-time input path and the caller fully controls the clock.
#[derive(Debug, Clone, PartialEq)]
pub struct SocdCleaner {
    vertical: AxisTracker,
    horizontal: AxisTracker,
    neutral_window: Duration,
}

impl Default for SocdCleaner {
    fn default() -> Self {
        Self::new()
    }
}

impl SocdCleaner {
    /// Creates a cleaner with no remembered directions and the
    /// [`DEFAULT_NEUTRAL_WINDOW`].
    pub const fn new() -> Self {
        Self {
            vertical: AxisTracker::NEW,
            horizontal: AxisTracker::NEW,
            neutral_window: DEFAULT_NEUTRAL_WINDOW,
        }
    }

    /// Sets the span of the near-simultaneous-press neutral window.
    #[must_use]
    pub const fn with_neutral_window(mut self, window: Duration) -> Self {
        self.neutral_window = window;
        self
    }

    /// Returns the span of the near-simultaneous-press neutral window.
    #[must_use]
    pub const fn neutral_window(&self) -> Duration {
        self.neutral_window
    }

    /// Resolves one D-pad sample under the given mode.
    ///
    /// For every mode except [`SocdMode::Bypass`], the output never has both
    /// directions of an axis set. Non-directional bits pass through
    /// unchanged. Every non-`Bypass` call updates the per-axis trackers;
    /// `Bypass` touches no state at all.
    pub fn clean(&mut self, mode: SocdMode, dpad: DpadState, now: Instant) -> DpadState {
        if mode == SocdMode::Bypass {
            return dpad;
        }

        let mut cleaned = DpadState::from_bits(dpad.button_bits());
        for axis in DpadAxis::axes() {
            if let Some(direction) = self.clean_axis(mode, axis, dpad, now) {
                cleaned = cleaned.press(direction);
            }
        }
        cleaned
    }

    /// Resolves a single axis, updating its tracker.
    fn clean_axis(
        &mut self,
        mode: SocdMode,
        axis: DpadAxis,
        dpad: DpadState,
        now: Instant,
    ) -> Option<DpadDirection> {
        let window = self.neutral_window;
        let negative = axis.negative();
        let positive = axis.positive();
        let tracker = match axis {
            DpadAxis::Vertical => &mut self.vertical,
            DpadAxis::Horizontal => &mut self.horizontal,
        };

        match (dpad.pressed(negative), dpad.pressed(positive)) {
            // Released axis: forget the direction but not the timestamp.
            (false, false) => {
                tracker.last_direction = None;
                None
            }
            (true, false) => Some(tracker.activate(negative, now)),
            (false, true) => Some(tracker.activate(positive, now)),
            // The SOCD condition.
            (true, true) => {
                if tracker.within_window(now, window) {
                    // Near-simultaneous activation is switch bounce, not intent.
                    tracker.last_direction = None;
                    return None;
                }

                match mode {
                    SocdMode::UpPriority if axis == DpadAxis::Vertical => {
                        tracker.last_direction = Some(DpadDirection::Up);
                        Some(DpadDirection::Up)
                    }
                    SocdMode::SecondInputPriority if tracker.last_direction.is_some() => {
                        // The newer press is whichever was not already held.
                        tracker.last_direction.map(|last| last.opposite())
                    }
                    SocdMode::FirstInputPriority if tracker.last_direction.is_some() => {
                        tracker.last_direction
                    }
                    _ => {
                        tracker.last_direction = None;
                        None
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use DpadDirection::*;
    use SocdMode::*;

    fn state(directions: &[DpadDirection]) -> DpadState {
        directions
            .iter()
            .fold(DpadState::NEUTRAL, |state, &direction| {
                state.press(direction)
            })
    }

    /// A fixed time origin plus an offset, so scenarios read in milliseconds.
    fn at(origin: Instant, millis: u64) -> Instant {
        origin + Duration::from_millis(millis)
    }

    #[test]
    fn bypass_echoes_input_and_touches_no_state() {
        let mut cleaner = SocdCleaner::default();
        let pristine = cleaner.clone();
        let origin = Instant::now();

        for bits in 0..=u8::MAX {
            let input = DpadState::from_bits(bits);
            assert_eq!(cleaner.clean(Bypass, input, at(origin, bits as u64)), input);
        }
        assert_eq!(cleaner, pristine);
    }

    #[test]
    fn output_never_contains_an_opposing_pair() {
        let origin = Instant::now();
        for mode in [UpPriority, Neutral, SecondInputPriority, FirstInputPriority] {
            let mut cleaner = SocdCleaner::default();
            for bits in 0..=DpadState::DIRECTION_MASK {
                let cleaned = cleaner.clean(mode, DpadState::from_bits(bits), at(origin, 50 * bits as u64));
                for axis in DpadAxis::axes() {
                    assert_ne!(
                        cleaned.axis_bits(axis),
                        axis.mask(),
                        "{mode:?} left both bits of {axis:?} set for input {bits:#06b}"
                    );
                }
            }
        }
    }

    #[test]
    fn up_priority_forces_up_on_the_vertical_axis() {
        let mut cleaner = SocdCleaner::default();
        let origin = Instant::now();

        let cleaned = cleaner.clean(UpPriority, state(&[Up, Down]), at(origin, 0));
        assert_eq!(cleaned, state(&[Up]));
    }

    #[test]
    fn up_priority_has_no_horizontal_equivalent() {
        let mut cleaner = SocdCleaner::default();
        let origin = Instant::now();

        // No remembered direction: the conflict resolves to neutral.
        let cleaned = cleaner.clean(UpPriority, state(&[Left, Right]), at(origin, 0));
        assert!(cleaned.is_neutral());
    }

    #[test]
    fn neutral_mode_always_clears_the_conflicted_axis() {
        let mut cleaner = SocdCleaner::default();
        let origin = Instant::now();

        cleaner.clean(Neutral, state(&[Left]), at(origin, 0));
        let cleaned = cleaner.clean(Neutral, state(&[Left, Right]), at(origin, 50));
        assert!(cleaned.is_neutral());
    }

    #[test]
    fn conflict_within_the_window_is_treated_as_bounce() {
        let mut cleaner = SocdCleaner::default();
        let origin = Instant::now();

        assert_eq!(
            cleaner.clean(UpPriority, state(&[Up]), at(origin, 0)),
            state(&[Up])
        );
        // 5 ms later: still inside the 10 ms window, so no winner.
        assert!(cleaner
            .clean(UpPriority, state(&[Up, Down]), at(origin, 5))
            .is_neutral());
    }

    #[test]
    fn window_expiry_restores_the_selected_policy() {
        let mut cleaner = SocdCleaner::default();
        let origin = Instant::now();

        cleaner.clean(UpPriority, state(&[Up]), at(origin, 0));
        let cleaned = cleaner.clean(UpPriority, state(&[Up, Down]), at(origin, 20));
        assert_eq!(cleaned, state(&[Up]));
    }

    #[test]
    fn bounce_handling_resets_the_remembered_direction() {
        let mut cleaner = SocdCleaner::default();
        let origin = Instant::now();

        cleaner.clean(FirstInputPriority, state(&[Up]), at(origin, 0));
        // Bounce clears the memory of the Up press...
        cleaner.clean(FirstInputPriority, state(&[Up, Down]), at(origin, 5));
        // ...so a later conflict has no first input to fall back on.
        let cleaned = cleaner.clean(FirstInputPriority, state(&[Up, Down]), at(origin, 50));
        assert!(cleaned.is_neutral());
    }

    #[test]
    fn window_is_measured_from_the_last_single_activation() {
        let mut cleaner = SocdCleaner::default();
        let origin = Instant::now();

        cleaner.clean(UpPriority, state(&[Up]), at(origin, 0));
        // A fully released sample does not refresh the timestamp.
        cleaner.clean(UpPriority, DpadState::NEUTRAL, at(origin, 5));
        // 8 ms after the activation at t=0: still within the window.
        assert!(cleaner
            .clean(UpPriority, state(&[Up, Down]), at(origin, 8))
            .is_neutral());
        // Well past it: the policy decides again.
        assert_eq!(
            cleaner.clean(UpPriority, state(&[Up, Down]), at(origin, 30)),
            state(&[Up])
        );
    }

    #[test]
    fn first_input_priority_keeps_the_original_direction() {
        let mut cleaner = SocdCleaner::default();
        let origin = Instant::now();

        cleaner.clean(FirstInputPriority, state(&[Up]), at(origin, 0));
        let cleaned = cleaner.clean(FirstInputPriority, state(&[Up, Down]), at(origin, 50));
        assert_eq!(cleaned, state(&[Up]));

        // The tracker is unchanged while both stay held; re-resolving yields
        // the same winner.
        let cleaned = cleaner.clean(FirstInputPriority, state(&[Up, Down]), at(origin, 60));
        assert_eq!(cleaned, state(&[Up]));
    }

    #[test]
    fn second_input_priority_inverts_the_remembered_direction() {
        let mut cleaner = SocdCleaner::default();
        let origin = Instant::now();

        cleaner.clean(SecondInputPriority, state(&[Up]), at(origin, 0));
        let cleaned = cleaner.clean(SecondInputPriority, state(&[Up, Down]), at(origin, 50));
        assert_eq!(cleaned, state(&[Down]));

        let cleaned = cleaner.clean(SecondInputPriority, state(&[Up, Down]), at(origin, 60));
        assert_eq!(cleaned, state(&[Down]));
    }

    #[test]
    fn horizontal_priority_modes_follow_the_remembered_direction() {
        let mut cleaner = SocdCleaner::default();
        let origin = Instant::now();

        cleaner.clean(FirstInputPriority, state(&[Right]), at(origin, 0));
        assert_eq!(
            cleaner.clean(FirstInputPriority, state(&[Left, Right]), at(origin, 50)),
            state(&[Right])
        );

        let mut cleaner = SocdCleaner::default();
        cleaner.clean(SecondInputPriority, state(&[Right]), at(origin, 0));
        assert_eq!(
            cleaner.clean(SecondInputPriority, state(&[Left, Right]), at(origin, 50)),
            state(&[Left])
        );
    }

    #[test]
    fn axes_are_resolved_independently() {
        let mut cleaner = SocdCleaner::default();
        let origin = Instant::now();

        cleaner.clean(SecondInputPriority, state(&[Left]), at(origin, 0));
        // Vertical conflict with no vertical memory, horizontal conflict with
        // Left remembered: only the horizontal axis finds a winner.
        let cleaned = cleaner.clean(
            SecondInputPriority,
            state(&[Up, Down, Left, Right]),
            at(origin, 50),
        );
        assert_eq!(cleaned, state(&[Right]));
    }

    #[test]
    fn releasing_an_axis_forgets_its_direction() {
        let mut cleaner = SocdCleaner::default();
        let origin = Instant::now();

        cleaner.clean(FirstInputPriority, state(&[Up]), at(origin, 0));
        cleaner.clean(FirstInputPriority, DpadState::NEUTRAL, at(origin, 20));
        // Nothing remembered: the conflict resolves to neutral.
        assert!(cleaner
            .clean(FirstInputPriority, state(&[Up, Down]), at(origin, 50))
            .is_neutral());
    }

    #[test]
    fn button_bits_pass_through() {
        let mut cleaner = SocdCleaner::default();
        let origin = Instant::now();

        let input = DpadState::from_bits(0b1100_0000).press(Up).press(Down);
        let cleaned = cleaner.clean(Neutral, input, at(origin, 0));
        assert_eq!(cleaned.button_bits(), 0b1100_0000);
        assert!(cleaned.is_neutral());
    }

    #[test]
    fn custom_neutral_window_is_honored() {
        let mut cleaner = SocdCleaner::new().with_neutral_window(Duration::from_millis(50));
        let origin = Instant::now();

        cleaner.clean(UpPriority, state(&[Up]), at(origin, 0));
        assert!(cleaner
            .clean(UpPriority, state(&[Up, Down]), at(origin, 40))
            .is_neutral());
        assert_eq!(
            cleaner.clean(UpPriority, state(&[Up, Down]), at(origin, 100)),
            state(&[Up])
        );
    }

    #[test]
    fn mode_serializes_as_a_unit_variant() {
        use serde_test::{assert_tokens, Token};

        assert_tokens(
            &SocdMode::SecondInputPriority,
            &[Token::UnitVariant {
                name: "SocdMode",
                variant: "SecondInputPriority",
            }],
        );
    }

    #[test]
    fn mode_discriminants_round_trip() {
        for mode in [
            UpPriority,
            Neutral,
            SecondInputPriority,
            FirstInputPriority,
            Bypass,
        ] {
            assert_eq!(SocdMode::try_from(u8::from(mode)), Ok(mode));
        }
        assert!(SocdMode::try_from(5).is_err());
    }
}

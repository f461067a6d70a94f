//! Diagonal suppression for D-pads that should behave like a 4-way lever

use crate::dpad::{DpadDirection, DpadState};
use crate::press_order::PressOrder;

/// A stateful filter that restricts a D-pad to one direction at a time,
/// emulating a 4-position mechanical lever.
///
/// The filter tracks which directions are currently held and in what order
/// they were activated; the most recently activated direction that is still
/// held wins. Releasing it reveals the direction activated before it, which
/// is not necessarily the original press order beyond the last one held.
///
/// Construct one filter per controller and feed it every raw sample:
///
/// ```rust
/// use socd_cleaner::prelude::*;
///
/// let mut filter = FourWayFilter::default();
///
/// let down = DpadState::from(DpadDirection::Down);
/// assert_eq!(filter.filter(down), down);
///
/// // Adding Right while Down is held: the newer press wins.
/// let diagonal = down.press(DpadDirection::Right);
/// assert_eq!(filter.filter(diagonal), DpadDirection::Right.into());
///
/// // Releasing Right reveals Down again.
/// assert_eq!(filter.filter(down), down);
/// ```
///
/// All state is pure runtime state; there is nothing to reset between
/// samples or sessions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FourWayFilter {
    /// Whether each direction (indexed by [`DpadDirection::index`]) is
    /// currently considered held.
    held: [bool; 4],
    /// Directions currently held, most recently activated last.
    order: PressOrder<DpadDirection, 4>,
}

impl FourWayFilter {
    /// Creates a filter with no directions held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters a raw sample down to at most one directional bit.
    ///
    /// Directions are evaluated in the fixed order of [`DpadDirection::ALL`],
    /// so when two directions first appear in the same sample, the one
    /// evaluated last wins the tie (Right over Left, Down over Up).
    ///
    /// Non-directional bits pass through unchanged.
    pub fn filter(&mut self, dpad: DpadState) -> DpadState {
        for direction in DpadDirection::ALL {
            self.track(dpad, direction);
        }

        let winner = self.order.last().map_or(0, |direction| direction.mask());
        DpadState::from_bits(dpad.button_bits() | winner)
    }

    /// Synchronizes one direction's held flag and history entry with the sample.
    fn track(&mut self, dpad: DpadState, direction: DpadDirection) {
        let held = &mut self.held[direction.index()];
        if dpad.pressed(direction) {
            if !*held {
                self.order.push(direction);
                *held = true;
            }
        } else if *held {
            self.order.remove(&direction);
            *held = false;
        }
    }
}

//! Value types for working with D-pad directions, axes and raw switch bitmasks

use bevy::prelude::Reflect;
use serde::{Deserialize, Serialize};

/// The four cardinal directions of a D-pad.
///
/// Each direction corresponds to one switch contact and one bit in a
/// [`DpadState`]. "No direction" is expressed as `Option<DpadDirection>`
/// (or a neutral [`DpadState`]) rather than as an extra variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
#[must_use]
pub enum DpadDirection {
    /// Upward direction.
    Up,

    /// Downward direction.
    Down,

    /// Leftward direction.
    Left,

    /// Rightward direction.
    Right,
}

impl DpadDirection {
    /// All four directions, in the fixed evaluation order used by the
    /// [`FourWayFilter`](crate::four_way::FourWayFilter).
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the position of this direction in [`DpadDirection::ALL`].
    ///
    /// Used for indexing per-direction storage; the value has no other meaning.
    #[must_use]
    #[inline]
    pub const fn index(&self) -> usize {
        match self {
            Self::Up => 0,
            Self::Down => 1,
            Self::Left => 2,
            Self::Right => 3,
        }
    }

    /// Returns the bit representing this direction in a [`DpadState`].
    #[must_use]
    #[inline]
    pub const fn mask(&self) -> u8 {
        1 << self.index()
    }

    /// Returns the opposing direction on the same axis.
    #[inline]
    pub const fn opposite(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the [`DpadAxis`] this direction belongs to.
    #[inline]
    pub const fn axis(&self) -> DpadAxis {
        match self {
            Self::Up | Self::Down => DpadAxis::Vertical,
            Self::Left | Self::Right => DpadAxis::Horizontal,
        }
    }
}

/// One of the two independent axes of a D-pad.
///
/// The axes never interact: SOCD cleaning resolves each one on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
#[must_use]
pub enum DpadAxis {
    /// The {[`Up`](DpadDirection::Up), [`Down`](DpadDirection::Down)} pair.
    Vertical,

    /// The {[`Left`](DpadDirection::Left), [`Right`](DpadDirection::Right)} pair.
    Horizontal,
}

impl DpadAxis {
    /// Returns both axes.
    #[inline]
    pub const fn axes() -> [Self; 2] {
        [Self::Vertical, Self::Horizontal]
    }

    /// Returns the negative and positive [`DpadDirection`]s for this axis.
    ///
    /// "Negative" matches the analog convention where Up and Left map to the
    /// minimum joystick value.
    #[inline]
    pub const fn directions(&self) -> [DpadDirection; 2] {
        [self.negative(), self.positive()]
    }

    /// Returns the negative [`DpadDirection`] for this axis.
    #[inline]
    pub const fn negative(&self) -> DpadDirection {
        match self {
            Self::Vertical => DpadDirection::Up,
            Self::Horizontal => DpadDirection::Left,
        }
    }

    /// Returns the positive [`DpadDirection`] for this axis.
    #[inline]
    pub const fn positive(&self) -> DpadDirection {
        match self {
            Self::Vertical => DpadDirection::Down,
            Self::Horizontal => DpadDirection::Right,
        }
    }

    /// Returns the combined bitmask of both directions on this axis.
    #[must_use]
    #[inline]
    pub const fn mask(&self) -> u8 {
        self.negative().mask() | self.positive().mask()
    }
}

/// A raw or cleaned D-pad sample, one bit per switch contact.
///
/// The low four bits are the directional bits (see [`DpadDirection::mask`]);
/// raw hardware may set any combination of them, including opposing pairs.
/// The high four bits are reserved for buttons sampled in the same byte and
/// are passed through untouched by every component in this crate.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect, Serialize, Deserialize,
)]
#[must_use]
pub struct DpadState(u8);

impl DpadState {
    /// The state with no directional bits set.
    pub const NEUTRAL: DpadState = DpadState(0);

    /// The bits of the word that carry directional state.
    pub const DIRECTION_MASK: u8 = 0b0000_1111;

    /// Creates a state from a raw byte, keeping all bits as-is.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Returns the underlying byte.
    #[must_use]
    #[inline]
    pub const fn bits(&self) -> u8 {
        self.0
    }

    /// Is the given direction's bit set?
    #[must_use]
    #[inline]
    pub const fn pressed(&self, direction: DpadDirection) -> bool {
        self.0 & direction.mask() != 0
    }

    /// Returns this state with the given direction's bit set.
    #[inline]
    pub const fn press(self, direction: DpadDirection) -> Self {
        Self(self.0 | direction.mask())
    }

    /// Returns this state with the given direction's bit cleared.
    #[inline]
    pub const fn release(self, direction: DpadDirection) -> Self {
        Self(self.0 & !direction.mask())
    }

    /// Returns only the directional bits.
    #[must_use]
    #[inline]
    pub const fn direction_bits(&self) -> u8 {
        self.0 & Self::DIRECTION_MASK
    }

    /// Returns only the reserved non-directional bits.
    #[must_use]
    #[inline]
    pub const fn button_bits(&self) -> u8 {
        self.0 & !Self::DIRECTION_MASK
    }

    /// Returns the directional bits restricted to one axis.
    #[must_use]
    #[inline]
    pub const fn axis_bits(&self, axis: DpadAxis) -> u8 {
        self.0 & axis.mask()
    }

    /// Returns this state with both directions of the given axis cleared.
    #[inline]
    pub const fn with_axis_cleared(self, axis: DpadAxis) -> Self {
        Self(self.0 & !axis.mask())
    }

    /// Are all four directional bits clear?
    ///
    /// Reserved button bits do not affect neutrality.
    #[must_use]
    #[inline]
    pub const fn is_neutral(&self) -> bool {
        self.direction_bits() == 0
    }
}

impl From<u8> for DpadState {
    fn from(bits: u8) -> Self {
        Self::from_bits(bits)
    }
}

impl From<DpadState> for u8 {
    fn from(state: DpadState) -> Self {
        state.bits()
    }
}

impl From<DpadDirection> for DpadState {
    fn from(direction: DpadDirection) -> Self {
        Self::NEUTRAL.press(direction)
    }
}

//! Errors that may occur when decoding stored configuration values

use derive_more::{Display, Error};

/// The stored discriminant did not correspond to any
/// [`SocdMode`](crate::socd::SocdMode)
///
/// Produced by the [`TryFrom<u8>`] implementation on
/// [`SocdMode`](crate::socd::SocdMode) when decoding a mode selector
/// persisted by configuration storage.
///
/// In almost all cases, the correct way to handle this error is to fall back
/// to the default mode.
#[derive(Debug, Clone, Copy, Error, Display, PartialEq, Eq)]
#[display(fmt = "invalid SOCD mode discriminant: {}", _0)]
pub struct InvalidSocdMode(
    /// The discriminant that could not be decoded
    #[error(not(source))]
    pub u8,
);

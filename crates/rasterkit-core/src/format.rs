//! Pixel formats: how a flat component stream maps onto pixels.
//!
//! # Types
//!
//! - [`PixelFormat`] - Interleaved, planar (reserved) or undefined layout
//! - [`Interleaved`] - Ordered channels whose values sit contiguously per pixel
//! - [`Planar`] - Placeholder for plane-separated layouts; cannot decode yet
//!
//! # Decoding
//!
//! ```rust
//! use rasterkit_core::{known, ComponentValue, Error};
//!
//! let stream: Vec<ComponentValue> = [10u8, 20, 30, 40].map(ComponentValue::from).to_vec();
//!
//! // One RGB8 pixel consumes the first three values, the fourth is left over
//! let pixel = known::RGB8.pixel_from(&stream)?;
//! assert_eq!(pixel.len(), 3);
//!
//! // Not enough values for a pixel
//! let err = known::RGB8.pixel_from(&stream[3..]).unwrap_err();
//! assert_eq!(err, Error::InsufficientComponents { expected: 3, actual: 1 });
//! # Ok::<(), Error>(())
//! ```

use crate::channel::Channel;
use crate::error::{Error, Result};
use crate::pixel::{Component, Pixel};
use crate::value::ComponentValue;
use std::borrow::Cow;
use std::fmt;

/// Interleaved layout: one pixel's values are contiguous, in channel order.
///
/// Channels are held as a `Cow` so that well-known layouts are `const`
/// values borrowing a static slice, while ad hoc layouts own their list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Interleaved {
    channels: Cow<'static, [Channel]>,
}

impl Interleaved {
    /// Create an interleaved layout from an owned channel list.
    pub fn new(channels: Vec<Channel>) -> Self {
        Self {
            channels: Cow::Owned(channels),
        }
    }

    /// Create an interleaved layout borrowing a static channel list.
    pub const fn from_static(channels: &'static [Channel]) -> Self {
        Self {
            channels: Cow::Borrowed(channels),
        }
    }

    /// Channels in stream order.
    #[inline]
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// Number of raw components making up one pixel.
    #[inline]
    pub fn components_per_pixel(&self) -> usize {
        self.channels.len()
    }

    /// Sum of the declared channel widths, in `u64` so no width overflows it.
    pub fn bits_per_pixel(&self) -> u64 {
        self.channels.iter().map(|c| u64::from(c.bit_width())).sum()
    }

    /// Decode one pixel from the front of `components`.
    ///
    /// Uses exactly the first [`components_per_pixel`](Self::components_per_pixel)
    /// values, pairing each with its channel. Anything after that is ignored.
    ///
    /// # Errors
    ///
    /// [`Error::InsufficientComponents`] if fewer values are available than
    /// one pixel needs. No partial pixel is produced.
    pub fn pixel_from(&self, components: &[ComponentValue]) -> Result<Pixel> {
        let expected = self.components_per_pixel();
        let Some(values) = components.get(..expected) else {
            return Err(Error::insufficient_components(expected, components.len()));
        };

        Ok(self
            .channels
            .iter()
            .zip(values)
            .map(|(&channel, &value)| Component::new(channel, value))
            .collect())
    }
}

impl From<Vec<Channel>> for Interleaved {
    fn from(channels: Vec<Channel>) -> Self {
        Self::new(channels)
    }
}

impl fmt::Display for Interleaved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, channel) in self.channels.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{channel}")?;
        }
        f.write_str("]")
    }
}

/// Plane-separated layout.
///
/// Reserved: carries no plane description and has no decode capability.
/// Decoding through it fails with [`Error::UndecodableFormat`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Planar;

/// Layout of raw component values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// Values for one pixel are contiguous, in channel order.
    Interleaved(Interleaved),
    /// Values are split across planes. Not decodable yet.
    Planar(Planar),
    /// No format is known, e.g. a buffer built directly from pixels.
    #[default]
    Undefined,
}

impl PixelFormat {
    /// Interleaved format over an owned channel list.
    pub fn interleaved(channels: Vec<Channel>) -> Self {
        Self::Interleaved(Interleaved::new(channels))
    }

    /// Interleaved format over a static channel list.
    pub const fn interleaved_static(channels: &'static [Channel]) -> Self {
        Self::Interleaved(Interleaved::from_static(channels))
    }

    /// Channels of an interleaved format; empty otherwise.
    pub fn channels(&self) -> &[Channel] {
        match self {
            Self::Interleaved(layout) => layout.channels(),
            Self::Planar(_) | Self::Undefined => &[],
        }
    }

    /// Raw components per pixel: the channel count for interleaved, else 0.
    pub fn components_per_pixel(&self) -> usize {
        match self {
            Self::Interleaved(layout) => layout.components_per_pixel(),
            Self::Planar(_) | Self::Undefined => 0,
        }
    }

    /// Sum of declared channel widths; 0 for planar and undefined.
    pub fn bits_per_pixel(&self) -> u64 {
        match self {
            Self::Interleaved(layout) => layout.bits_per_pixel(),
            Self::Planar(_) | Self::Undefined => 0,
        }
    }

    /// Whether [`pixel_from`](Self::pixel_from) can decode with this format.
    #[inline]
    pub fn is_decodable(&self) -> bool {
        matches!(self, Self::Interleaved(_))
    }

    /// Whether this is the reserved planar layout.
    #[inline]
    pub fn is_planar(&self) -> bool {
        matches!(self, Self::Planar(_))
    }

    /// Whether no format is known.
    #[inline]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Layout name: "interleaved", "planar" or "undefined".
    pub const fn layout_name(&self) -> &'static str {
        match self {
            Self::Interleaved(_) => "interleaved",
            Self::Planar(_) => "planar",
            Self::Undefined => "undefined",
        }
    }

    /// Decode one pixel from the front of `components`.
    ///
    /// # Errors
    ///
    /// - [`Error::InsufficientComponents`] if an interleaved format needs more
    ///   values than are available.
    /// - [`Error::UndecodableFormat`] for planar and undefined formats, which
    ///   would otherwise consume zero values per pixel.
    pub fn pixel_from(&self, components: &[ComponentValue]) -> Result<Pixel> {
        match self {
            Self::Interleaved(layout) => layout.pixel_from(components),
            Self::Planar(_) | Self::Undefined => {
                Err(Error::undecodable_format(self.layout_name()))
            }
        }
    }
}

impl From<Interleaved> for PixelFormat {
    fn from(layout: Interleaved) -> Self {
        Self::Interleaved(layout)
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interleaved(layout) => write!(f, "interleaved {layout}"),
            Self::Planar(_) | Self::Undefined => f.write_str(self.layout_name()),
        }
    }
}

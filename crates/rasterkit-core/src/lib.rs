//! # rasterkit-core
//!
//! A declarative model of arbitrarily formatted pixel data.
//!
//! Instead of fixing a pixel type up front, callers describe a layout as a
//! list of channels, each with a name and a binary form (unsigned, signed or
//! float at some bit width), and decode flat streams of raw component values
//! through it:
//!
//! - [`Channel`] - Channel name plus binary form; resolves to a [`StorageKind`]
//! - [`ComponentValue`] - Raw value tagged with its exact numeric kind
//! - [`Component`], [`Pixel`] - Decoded values and ordered pixels
//! - [`PixelFormat`] - Interleaved, planar (reserved) or undefined layouts
//! - [`PixelBuffer`] - Row-major grid with a checked `width * height` invariant
//! - [`known`] - Well-known formats such as [`known::RGBA8`] and [`known::RGB10A2`]
//!
//! ## Example
//!
//! ```rust
//! use rasterkit_core::prelude::*;
//!
//! let stream: Vec<ComponentValue> = [255u8, 0, 0, 255, 0, 0, 255, 128]
//!     .map(ComponentValue::from)
//!     .to_vec();
//! let buffer = PixelBuffer::from_components(known::RGBA8, &stream, 2, 1)?;
//!
//! let [r, g, b, a] = buffer.pixel(0, 0).unwrap().display_rgba();
//! assert_eq!((r, g, b, a), (1.0, 0.0, 0.0, 1.0));
//! # Ok::<(), Error>(())
//! ```
//!
//! ## Scope
//!
//! The crate performs no I/O and no pixel processing. Values are never
//! coerced: a component keeps the numeric kind it was supplied in, even when
//! that differs from its channel's resolved storage kind.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod channel;
pub mod error;
pub mod format;
pub mod known;
pub mod pixel;
pub mod value;

// Re-exports for convenience
pub use buffer::PixelBuffer;
pub use channel::{BinaryForm, Channel, ChannelName};
pub use error::{Error, Result};
pub use format::{Interleaved, PixelFormat, Planar};
pub use pixel::{Component, Pixel};
pub use value::{ComponentValue, StorageKind};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use rasterkit_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::buffer::PixelBuffer;
    pub use crate::channel::{BinaryForm, Channel, ChannelName};
    pub use crate::error::{Error, Result};
    pub use crate::format::{Interleaved, PixelFormat, Planar};
    pub use crate::known;
    pub use crate::pixel::{Component, Pixel};
    pub use crate::value::{ComponentValue, StorageKind};
}

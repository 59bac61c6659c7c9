//! Error types for rasterkit-core operations.
//!
//! Every failure in the core is a structural validation failure raised
//! synchronously while a pixel is decoded or a buffer is constructed. Nothing
//! is retried, nothing is partially built, and nothing is logged on the way
//! out: the error is handed to the immediate caller as-is.
//!
//! # Usage
//!
//! ```rust
//! use rasterkit_core::{Error, PixelBuffer};
//!
//! let err = PixelBuffer::new(Vec::new(), 2, 3).unwrap_err();
//! assert!(matches!(
//!     err,
//!     Error::MismatchedBufferSize { expected: 0, actual: 6 }
//! ));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::format::PixelFormat::pixel_from`] - Component stream decoding
//! - [`crate::buffer::PixelBuffer`] - Buffer construction

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while decoding pixels or constructing a buffer.
///
/// # Categories
///
/// - **Size errors**: [`MismatchedBufferSize`](Error::MismatchedBufferSize),
///   [`InsufficientComponents`](Error::InsufficientComponents)
/// - **Format errors**: [`UndecodableFormat`](Error::UndecodableFormat)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The number of pixels does not match the declared buffer area.
    ///
    /// `expected` carries the number of pixels that were supplied (or
    /// decoded), `actual` carries `width * height`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rasterkit_core::Error;
    ///
    /// let err = Error::mismatched_buffer_size(4, 6);
    /// assert_eq!(err.to_string(), "mismatched buffer size: 4 pixels for an area of 6");
    /// ```
    #[error("mismatched buffer size: {expected} pixels for an area of {actual}")]
    MismatchedBufferSize {
        /// Pixel count that was supplied
        expected: usize,
        /// Declared area (width * height)
        actual: usize,
    },

    /// Fewer raw components remain than one pixel of the format requires.
    #[error("insufficient components: expected {expected}, got {actual}")]
    InsufficientComponents {
        /// Components per pixel of the format
        expected: usize,
        /// Components that were available
        actual: usize,
    },

    /// The format has no decode capability.
    ///
    /// Raised for [`PixelFormat::Planar`](crate::PixelFormat::Planar), whose
    /// decoding is not implemented yet, and for
    /// [`PixelFormat::Undefined`](crate::PixelFormat::Undefined), which
    /// describes no layout at all.
    #[error("cannot decode components with {format} pixel format")]
    UndecodableFormat {
        /// Name of the layout that was asked to decode
        format: &'static str,
    },
}

impl Error {
    /// Creates an [`Error::MismatchedBufferSize`] error.
    #[inline]
    pub fn mismatched_buffer_size(expected: usize, actual: usize) -> Self {
        Self::MismatchedBufferSize { expected, actual }
    }

    /// Creates an [`Error::InsufficientComponents`] error.
    #[inline]
    pub fn insufficient_components(expected: usize, actual: usize) -> Self {
        Self::InsufficientComponents { expected, actual }
    }

    /// Creates an [`Error::UndecodableFormat`] error.
    #[inline]
    pub fn undecodable_format(format: &'static str) -> Self {
        Self::UndecodableFormat { format }
    }

    /// Returns `true` if this error reports a count that did not line up.
    #[inline]
    pub fn is_size_error(&self) -> bool {
        matches!(
            self,
            Self::MismatchedBufferSize { .. } | Self::InsufficientComponents { .. }
        )
    }

    /// Returns `true` if this error reports a layout that cannot decode.
    #[inline]
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::UndecodableFormat { .. })
    }
}

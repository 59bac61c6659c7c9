//! Rectangular pixel buffers.
//!
//! A [`PixelBuffer`] is a flat, row-major list of [`Pixel`]s plus its width
//! and height. The pixel at `(x, y)` lives at index `y * width + x`.
//!
//! There are two ways in, and no way to mutate afterwards:
//!
//! - [`PixelBuffer::new`] - wrap already-built pixels
//! - [`PixelBuffer::from_components`] - decode a flat component stream
//!   through a [`PixelFormat`]
//!
//! Both check `pixels.len() == width * height` before returning; a buffer
//! that exists always satisfies it.
//!
//! # Usage
//!
//! ```rust
//! use rasterkit_core::{known, ComponentValue, PixelBuffer};
//!
//! let components: Vec<ComponentValue> =
//!     [10u8, 20, 30, 40, 50, 60].map(ComponentValue::from).to_vec();
//! let buffer = PixelBuffer::from_components(known::RGB8, &components, 2, 1)?;
//!
//! assert_eq!(buffer.pixel_count(), 2);
//! let second = buffer.pixel(1, 0).unwrap();
//! assert_eq!(second.blue().unwrap().value, ComponentValue::U8(60));
//! # Ok::<(), rasterkit_core::Error>(())
//! ```
//!
//! # Memory Layout
//!
//! ```text
//! pixels: [p(0,0) p(1,0) ... p(w-1,0)]  <- Row 0
//!         [p(0,1) p(1,1) ... p(w-1,1)]  <- Row 1
//!         ...
//! ```

use crate::error::{Error, Result};
use crate::format::PixelFormat;
use crate::pixel::Pixel;
use crate::value::ComponentValue;
use tracing::trace;

/// Immutable grid of pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    /// Pixels, row-major
    pixels: Vec<Pixel>,
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Format the pixels were decoded with, or `Undefined`
    pixel_format: PixelFormat,
}

impl PixelBuffer {
    /// Creates a buffer from already-built pixels.
    ///
    /// The format is recorded as [`PixelFormat::Undefined`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::MismatchedBufferSize`] with `expected` set to
    /// `pixels.len()` and `actual` to `width * height` when they differ.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rasterkit_core::{Error, Pixel, PixelBuffer};
    ///
    /// let pixels = vec![Pixel::default(); 4];
    /// assert!(PixelBuffer::new(pixels.clone(), 2, 2).is_ok());
    /// assert_eq!(
    ///     PixelBuffer::new(pixels, 2, 3).unwrap_err(),
    ///     Error::MismatchedBufferSize { expected: 4, actual: 6 }
    /// );
    /// ```
    pub fn new(pixels: Vec<Pixel>, width: u32, height: u32) -> Result<Self> {
        check_area(&pixels, width, height)?;
        trace!(width, height, pixels = pixels.len(), "PixelBuffer::new");
        Ok(Self {
            pixels,
            width,
            height,
            pixel_format: PixelFormat::Undefined,
        })
    }

    /// Decodes a flat, interleaved component stream into a buffer.
    ///
    /// Pixels are decoded front to back, one
    /// [`components_per_pixel`](PixelFormat::components_per_pixel) slice at a
    /// time, until the stream is exhausted.
    ///
    /// # Errors
    ///
    /// - The first decode failure is returned unchanged and any pixels decoded
    ///   so far are discarded: [`Error::InsufficientComponents`] for a short
    ///   trailing pixel, [`Error::UndecodableFormat`] for planar or undefined
    ///   formats.
    /// - [`Error::MismatchedBufferSize`] if the number of decoded pixels is not
    ///   `width * height`.
    pub fn from_components(
        pixel_format: PixelFormat,
        components: &[ComponentValue],
        width: u32,
        height: u32,
    ) -> Result<Self> {
        let pixels = decode_all(&pixel_format, components)?;
        check_area(&pixels, width, height)?;
        trace!(
            width,
            height,
            pixels = pixels.len(),
            format = %pixel_format,
            "PixelBuffer::from_components"
        );
        Ok(Self {
            pixels,
            width,
            height,
            pixel_format,
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Dimensions as `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// All pixels, row-major.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Format the pixels were decoded with.
    #[inline]
    pub fn pixel_format(&self) -> &PixelFormat {
        &self.pixel_format
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Returns `true` if the buffer has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// The pixel at `(x, y)`, or `None` if out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<&Pixel> {
        if x < self.width && y < self.height {
            self.pixels.get(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Rows of pixels, top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Pixel]> + '_ {
        // Zero width means zero pixels, so the chunk size only needs to be non-zero.
        self.pixels.chunks(self.width.max(1) as usize)
    }

    /// Consumes the buffer, returning its pixels.
    #[inline]
    pub fn into_pixels(self) -> Vec<Pixel> {
        self.pixels
    }
}

/// Decode every pixel in `components`, stopping at the first failure.
fn decode_all(format: &PixelFormat, components: &[ComponentValue]) -> Result<Vec<Pixel>> {
    let step = format.components_per_pixel();
    let mut pixels = Vec::with_capacity(components.len().checked_div(step).unwrap_or(0));
    let mut remaining = components;
    while !remaining.is_empty() {
        pixels.push(format.pixel_from(remaining)?);
        // A layout with no channels never advances
        if step == 0 {
            return Err(Error::undecodable_format(format.layout_name()));
        }
        remaining = &remaining[step..];
    }
    Ok(pixels)
}

fn check_area(pixels: &[Pixel], width: u32, height: u32) -> Result<()> {
    let area = width as usize * height as usize;
    if pixels.len() != area {
        return Err(Error::mismatched_buffer_size(pixels.len(), area));
    }
    Ok(())
}

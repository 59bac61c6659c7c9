//! Well-known interleaved pixel formats.
//!
//! Every format here is a `const` [`PixelFormat`] over a static channel list,
//! so using one costs nothing at runtime. [`lookup`] resolves a format by
//! name from a fixed table; there is no dynamic registration.
//!
//! Bridges to other graphics APIs map their own format constants onto these
//! values (or onto [`PixelFormat::Undefined`] when nothing matches).
//!
//! # Example
//!
//! ```rust
//! use rasterkit_core::known;
//!
//! let format = known::lookup("RGB10A2").unwrap();
//! assert_eq!(format, known::RGB10A2);
//! assert_eq!(format.bits_per_pixel(), 32);
//! ```

use crate::channel::{Channel, ChannelName};
use crate::format::PixelFormat;

const R8: Channel = Channel::unsigned(ChannelName::Red, 8);
const G8: Channel = Channel::unsigned(ChannelName::Green, 8);
const B8: Channel = Channel::unsigned(ChannelName::Blue, 8);
const A8: Channel = Channel::unsigned(ChannelName::Alpha, 8);
const Y8: Channel = Channel::unsigned(ChannelName::Luminance, 8);

const RGBA8_CHANNELS: &[Channel] = &[R8, G8, B8, A8];
const BGRA8_CHANNELS: &[Channel] = &[B8, G8, R8, A8];
const ARGB8_CHANNELS: &[Channel] = &[A8, R8, G8, B8];
const RGB8_CHANNELS: &[Channel] = &[R8, G8, B8];
const RGB10A2_CHANNELS: &[Channel] = &[
    Channel::unsigned(ChannelName::Red, 10),
    Channel::unsigned(ChannelName::Green, 10),
    Channel::unsigned(ChannelName::Blue, 10),
    Channel::unsigned(ChannelName::Alpha, 2),
];
const RGB565_CHANNELS: &[Channel] = &[
    Channel::unsigned(ChannelName::Red, 5),
    Channel::unsigned(ChannelName::Green, 6),
    Channel::unsigned(ChannelName::Blue, 5),
];
const RGBA16_CHANNELS: &[Channel] = &[
    Channel::unsigned(ChannelName::Red, 16),
    Channel::unsigned(ChannelName::Green, 16),
    Channel::unsigned(ChannelName::Blue, 16),
    Channel::unsigned(ChannelName::Alpha, 16),
];
const RGBA16F_CHANNELS: &[Channel] = &[
    Channel::float(ChannelName::Red, 16),
    Channel::float(ChannelName::Green, 16),
    Channel::float(ChannelName::Blue, 16),
    Channel::float(ChannelName::Alpha, 16),
];
const RGBA32F_CHANNELS: &[Channel] = &[
    Channel::float(ChannelName::Red, 32),
    Channel::float(ChannelName::Green, 32),
    Channel::float(ChannelName::Blue, 32),
    Channel::float(ChannelName::Alpha, 32),
];
const ALPHA8_CHANNELS: &[Channel] = &[A8];
const LUMINANCE8_CHANNELS: &[Channel] = &[Y8];
const LUMINANCE_ALPHA8_CHANNELS: &[Channel] = &[Y8, A8];
const LUMINANCE32F_CHANNELS: &[Channel] = &[Channel::float(ChannelName::Luminance, 32)];
const YCBCR8_CHANNELS: &[Channel] = &[
    Y8,
    Channel::unsigned(ChannelName::ChrominanceBlue, 8),
    Channel::unsigned(ChannelName::ChrominanceRed, 8),
];

/// 8-bit RGBA.
pub const RGBA8: PixelFormat = PixelFormat::interleaved_static(RGBA8_CHANNELS);

/// 8-bit BGRA.
pub const BGRA8: PixelFormat = PixelFormat::interleaved_static(BGRA8_CHANNELS);

/// 8-bit ARGB.
pub const ARGB8: PixelFormat = PixelFormat::interleaved_static(ARGB8_CHANNELS);

/// 8-bit RGB.
pub const RGB8: PixelFormat = PixelFormat::interleaved_static(RGB8_CHANNELS);

/// Packed 10-10-10-2 RGBA.
pub const RGB10A2: PixelFormat = PixelFormat::interleaved_static(RGB10A2_CHANNELS);

/// Packed 5-6-5 RGB.
pub const RGB565: PixelFormat = PixelFormat::interleaved_static(RGB565_CHANNELS);

/// 16-bit unsigned RGBA.
pub const RGBA16: PixelFormat = PixelFormat::interleaved_static(RGBA16_CHANNELS);

/// Half-float RGBA.
pub const RGBA16F: PixelFormat = PixelFormat::interleaved_static(RGBA16F_CHANNELS);

/// Single-float RGBA.
pub const RGBA32F: PixelFormat = PixelFormat::interleaved_static(RGBA32F_CHANNELS);

/// 8-bit alpha only.
pub const ALPHA8: PixelFormat = PixelFormat::interleaved_static(ALPHA8_CHANNELS);

/// 8-bit luminance.
pub const LUMINANCE8: PixelFormat = PixelFormat::interleaved_static(LUMINANCE8_CHANNELS);

/// 8-bit luminance with alpha.
pub const LUMINANCE_ALPHA8: PixelFormat =
    PixelFormat::interleaved_static(LUMINANCE_ALPHA8_CHANNELS);

/// Single-float luminance.
pub const LUMINANCE32F: PixelFormat = PixelFormat::interleaved_static(LUMINANCE32F_CHANNELS);

/// 8-bit Y'CbCr, full resolution chroma.
pub const YCBCR8: PixelFormat = PixelFormat::interleaved_static(YCBCR8_CHANNELS);

/// Name table backing [`lookup`] and [`all`].
static TABLE: [(&str, PixelFormat); 14] = [
    ("rgba8", RGBA8),
    ("bgra8", BGRA8),
    ("argb8", ARGB8),
    ("rgb8", RGB8),
    ("rgb10a2", RGB10A2),
    ("rgb565", RGB565),
    ("rgba16", RGBA16),
    ("rgba16f", RGBA16F),
    ("rgba32f", RGBA32F),
    ("alpha8", ALPHA8),
    ("luminance8", LUMINANCE8),
    ("luminance-alpha8", LUMINANCE_ALPHA8),
    ("luminance32f", LUMINANCE32F),
    ("ycbcr8", YCBCR8),
];

/// Well-known format by name, case-insensitively. `_` and `-` are equivalent.
pub fn lookup(name: &str) -> Option<PixelFormat> {
    let name = name.trim().to_ascii_lowercase().replace('_', "-");
    TABLE
        .iter()
        .find(|(entry, _)| *entry == name)
        .map(|(_, format)| format.clone())
}

/// All well-known formats with their names, in table order.
pub fn all() -> impl Iterator<Item = (&'static str, &'static PixelFormat)> {
    TABLE.iter().map(|(name, format)| (*name, format))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::StorageKind;

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("rgba8"), Some(RGBA8));
        assert_eq!(lookup("BGRA8"), Some(BGRA8));
        assert_eq!(lookup("luminance_alpha8"), Some(LUMINANCE_ALPHA8));
        assert_eq!(lookup(" ycbcr8 "), Some(YCBCR8));
        assert_eq!(lookup("cmyk8"), None);
    }

    #[test]
    fn test_table_names_are_unique() {
        let mut names: Vec<_> = all().map(|(name, _)| name).collect();
        let len = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), len);
    }

    #[test]
    fn test_every_entry_is_decodable() {
        for (name, format) in all() {
            assert!(format.is_decodable(), "{name}");
            assert!(format.components_per_pixel() > 0, "{name}");
            assert_eq!(lookup(name).as_ref(), Some(format));
        }
    }

    #[test]
    fn test_packed_layouts() {
        assert_eq!(RGB10A2.components_per_pixel(), 4);
        assert_eq!(RGB10A2.bits_per_pixel(), 32);
        let storage: Vec<_> = RGB10A2.channels().iter().map(Channel::storage_type).collect();
        assert_eq!(
            storage,
            [StorageKind::U16, StorageKind::U16, StorageKind::U16, StorageKind::U8]
        );
        assert_eq!(RGB565.bits_per_pixel(), 16);
        assert_eq!(RGBA16F.channels()[0].storage_type(), StorageKind::F16);
        assert_eq!(ALPHA8.components_per_pixel(), 1);
    }

    #[test]
    fn test_channel_order() {
        let names: Vec<_> = BGRA8.channels().iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            [ChannelName::Blue, ChannelName::Green, ChannelName::Red, ChannelName::Alpha]
        );
    }
}

//! Channel identity and binary representation.
//!
//! A [`Channel`] names one color or luminance slot of a pixel and states how
//! its values are meant to be represented: unsigned integer, signed integer
//! or floating point, at a requested bit width. The requested width need not
//! be byte-aligned (10-bit, 5-bit and 2-bit channels are all fine); it is
//! resolved to the smallest concrete [`StorageKind`] that can hold it.
//!
//! # Resolution rules
//!
//! | Binary form | Requested width | Storage kind |
//! |-------------|-----------------|--------------|
//! | unsigned    | 1..=8 / 9..=16 / 17..=32 / 33..=64 | u8 / u16 / u32 / u64 |
//! | signed      | 1..=8 / 9..=16 / 17..=32 / 33..=64 | i8 / i16 / i32 / i64 |
//! | float       | 1..=16 / 17..=32 | f16 / f32 |
//! | any         | 0 or wider than the largest candidate | largest candidate |
//!
//! # Usage
//!
//! ```rust
//! use rasterkit_core::{BinaryForm, Channel, ChannelName, StorageKind};
//!
//! // Packed 10-bit red needs 16-bit storage
//! let red = Channel::new(ChannelName::Red, BinaryForm::UnsignedInteger(10));
//! assert_eq!(red.bit_width(), 10);
//! assert_eq!(red.storage_type(), StorageKind::U16);
//!
//! // Width 0 falls back to the widest kind
//! assert_eq!(BinaryForm::FloatingPoint(0).storage_type(), StorageKind::F64);
//! ```

use crate::value::StorageKind;
use std::fmt;

/// Name of a color or luminance channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelName {
    /// Red.
    Red,
    /// Green.
    Green,
    /// Blue.
    Blue,
    /// Alpha (coverage / opacity).
    Alpha,
    /// Luminance (Y).
    Luminance,
    /// Blue-difference chroma (Cb).
    ChrominanceBlue,
    /// Red-difference chroma (Cr).
    ChrominanceRed,
}

impl ChannelName {
    /// All channel names, in declaration order.
    pub const ALL: [ChannelName; 7] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Alpha,
        Self::Luminance,
        Self::ChrominanceBlue,
        Self::ChrominanceRed,
    ];

    /// Short code used in channel lists ("r", "g", "b", "a", "y", "cb", "cr").
    pub const fn short(&self) -> &'static str {
        match self {
            Self::Red => "r",
            Self::Green => "g",
            Self::Blue => "b",
            Self::Alpha => "a",
            Self::Luminance => "y",
            Self::ChrominanceBlue => "cb",
            Self::ChrominanceRed => "cr",
        }
    }

    /// Parse a short code or full name, case-insensitively.
    ///
    /// ```rust
    /// use rasterkit_core::ChannelName;
    /// assert_eq!(ChannelName::parse("cb"), Some(ChannelName::ChrominanceBlue));
    /// assert_eq!(ChannelName::parse("Alpha"), Some(ChannelName::Alpha));
    /// assert_eq!(ChannelName::parse("z"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|name| name.short() == s || name.full() == s)
    }

    const fn full(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Alpha => "alpha",
            Self::Luminance => "luminance",
            Self::ChrominanceBlue => "chrominance-blue",
            Self::ChrominanceRed => "chrominance-red",
        }
    }
}

impl fmt::Display for ChannelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full())
    }
}

/// Intended binary representation of a channel, with its requested width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryForm {
    /// Unsigned integer of the given bit width.
    UnsignedInteger(u32),
    /// Two's complement signed integer of the given bit width.
    SignedInteger(u32),
    /// IEEE 754 float of the given bit width.
    FloatingPoint(u32),
}

impl BinaryForm {
    /// Requested width in bits, exactly as declared.
    #[inline]
    pub const fn bit_width(&self) -> u32 {
        match *self {
            Self::UnsignedInteger(bits) | Self::SignedInteger(bits) | Self::FloatingPoint(bits) => {
                bits
            }
        }
    }

    /// Resolves to the smallest storage kind that holds the requested width.
    ///
    /// Total and deterministic: a width of 0, or one wider than every
    /// candidate, resolves to the widest kind of the same numeric family.
    pub const fn storage_type(&self) -> StorageKind {
        match *self {
            Self::UnsignedInteger(bits) => smallest_fit(&StorageKind::UNSIGNED, bits),
            Self::SignedInteger(bits) => smallest_fit(&StorageKind::SIGNED, bits),
            Self::FloatingPoint(bits) => match bits {
                1..=16 => StorageKind::F16,
                17..=32 => StorageKind::F32,
                _ => StorageKind::F64,
            },
        }
    }

    /// Parse a compact code such as `"u8"`, `"i16"`, `"f16"` or `"u10"`.
    ///
    /// # Example
    /// ```rust
    /// use rasterkit_core::BinaryForm;
    /// assert_eq!(BinaryForm::from_code("u10"), Some(BinaryForm::UnsignedInteger(10)));
    /// assert_eq!(BinaryForm::from_code("f32"), Some(BinaryForm::FloatingPoint(32)));
    /// assert_eq!(BinaryForm::from_code("x8"), None);
    /// ```
    pub fn from_code(s: &str) -> Option<Self> {
        let s = s.trim();
        let (tag, bits) = s.split_at_checked(1)?;
        let bits: u32 = bits.parse().ok()?;
        match tag {
            "u" | "U" => Some(Self::UnsignedInteger(bits)),
            "i" | "I" => Some(Self::SignedInteger(bits)),
            "f" | "F" => Some(Self::FloatingPoint(bits)),
            _ => None,
        }
    }
}

impl fmt::Display for BinaryForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsignedInteger(bits) => write!(f, "u{bits}"),
            Self::SignedInteger(bits) => write!(f, "i{bits}"),
            Self::FloatingPoint(bits) => write!(f, "f{bits}"),
        }
    }
}

/// First candidate whose native width holds `bits`, else the last candidate.
const fn smallest_fit(candidates: &[StorageKind; 4], bits: u32) -> StorageKind {
    if bits == 0 {
        return candidates[3];
    }
    let mut i = 0;
    while i < candidates.len() {
        if candidates[i].bits() >= bits {
            return candidates[i];
        }
        i += 1;
    }
    candidates[3]
}

/// A named channel and its intended binary representation.
///
/// Channels are plain values: two channels are the same channel when both
/// name and binary form match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Channel {
    /// Which slot of the pixel this channel fills.
    pub name: ChannelName,
    /// How the channel's values are represented.
    pub binary_form: BinaryForm,
}

impl Channel {
    /// Create a channel.
    #[inline]
    pub const fn new(name: ChannelName, binary_form: BinaryForm) -> Self {
        Self { name, binary_form }
    }

    /// Unsigned integer channel of `bits` width.
    #[inline]
    pub const fn unsigned(name: ChannelName, bits: u32) -> Self {
        Self::new(name, BinaryForm::UnsignedInteger(bits))
    }

    /// Signed integer channel of `bits` width.
    #[inline]
    pub const fn signed(name: ChannelName, bits: u32) -> Self {
        Self::new(name, BinaryForm::SignedInteger(bits))
    }

    /// Floating-point channel of `bits` width.
    #[inline]
    pub const fn float(name: ChannelName, bits: u32) -> Self {
        Self::new(name, BinaryForm::FloatingPoint(bits))
    }

    /// Requested width in bits.
    #[inline]
    pub const fn bit_width(&self) -> u32 {
        self.binary_form.bit_width()
    }

    /// Resolved storage kind.
    #[inline]
    pub const fn storage_type(&self) -> StorageKind {
        self.binary_form.storage_type()
    }

    /// Parse `"<name>:<code>"`, e.g. `"r:u8"` or `"alpha:f16"`.
    pub fn parse(s: &str) -> Option<Self> {
        let (name, code) = s.split_once(':')?;
        Some(Self::new(
            ChannelName::parse(name.trim())?,
            BinaryForm::from_code(code)?,
        ))
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name.short(), self.binary_form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uint(bits: u32) -> StorageKind {
        BinaryForm::UnsignedInteger(bits).storage_type()
    }

    fn int(bits: u32) -> StorageKind {
        BinaryForm::SignedInteger(bits).storage_type()
    }

    fn float(bits: u32) -> StorageKind {
        BinaryForm::FloatingPoint(bits).storage_type()
    }

    #[test]
    fn test_unsigned_boundaries() {
        assert_eq!(uint(0), StorageKind::U64);
        assert_eq!(uint(1), StorageKind::U8);
        assert_eq!(uint(8), StorageKind::U8);
        assert_eq!(uint(9), StorageKind::U16);
        assert_eq!(uint(10), StorageKind::U16);
        assert_eq!(uint(16), StorageKind::U16);
        assert_eq!(uint(17), StorageKind::U32);
        assert_eq!(uint(32), StorageKind::U32);
        assert_eq!(uint(33), StorageKind::U64);
        assert_eq!(uint(64), StorageKind::U64);
        assert_eq!(uint(65), StorageKind::U64);
        assert_eq!(uint(u32::MAX), StorageKind::U64);
    }

    #[test]
    fn test_signed_boundaries() {
        assert_eq!(int(0), StorageKind::I64);
        assert_eq!(int(2), StorageKind::I8);
        assert_eq!(int(8), StorageKind::I8);
        assert_eq!(int(9), StorageKind::I16);
        assert_eq!(int(16), StorageKind::I16);
        assert_eq!(int(17), StorageKind::I32);
        assert_eq!(int(32), StorageKind::I32);
        assert_eq!(int(33), StorageKind::I64);
        assert_eq!(int(64), StorageKind::I64);
        assert_eq!(int(1000), StorageKind::I64);
    }

    #[test]
    fn test_float_ranges() {
        assert_eq!(float(0), StorageKind::F64);
        assert_eq!(float(1), StorageKind::F16);
        assert_eq!(float(16), StorageKind::F16);
        assert_eq!(float(17), StorageKind::F32);
        assert_eq!(float(32), StorageKind::F32);
        assert_eq!(float(33), StorageKind::F64);
        assert_eq!(float(64), StorageKind::F64);
        assert_eq!(float(128), StorageKind::F64);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        for bits in 0..=70 {
            for form in [
                BinaryForm::UnsignedInteger(bits),
                BinaryForm::SignedInteger(bits),
                BinaryForm::FloatingPoint(bits),
            ] {
                let kind = form.storage_type();
                assert_eq!(kind, form.storage_type());
                if (1..=64).contains(&bits) {
                    assert!(kind.bits() >= bits, "{form} resolved to {kind}");
                }
            }
        }
    }

    #[test]
    fn test_channel_accessors() {
        let alpha = Channel::unsigned(ChannelName::Alpha, 2);
        assert_eq!(alpha.bit_width(), 2);
        assert_eq!(alpha.storage_type(), StorageKind::U8);
        assert_eq!(alpha.to_string(), "a:u2");
        assert_eq!(Channel::float(ChannelName::Red, 16).storage_type(), StorageKind::F16);
    }

    #[test]
    fn test_channel_equality_by_content() {
        let a = Channel::unsigned(ChannelName::Red, 8);
        let b = Channel::new(ChannelName::Red, BinaryForm::UnsignedInteger(8));
        assert_eq!(a, b);
        assert_ne!(a, Channel::signed(ChannelName::Red, 8));
        assert_ne!(a, Channel::unsigned(ChannelName::Green, 8));
    }

    #[test]
    fn test_channel_parse() {
        assert_eq!(Channel::parse("r:u8"), Some(Channel::unsigned(ChannelName::Red, 8)));
        assert_eq!(
            Channel::parse("cr:i10"),
            Some(Channel::signed(ChannelName::ChrominanceRed, 10))
        );
        assert_eq!(Channel::parse("r8"), None);
        assert_eq!(Channel::parse("q:u8"), None);
        assert_eq!(Channel::parse("r:"), None);
    }
}

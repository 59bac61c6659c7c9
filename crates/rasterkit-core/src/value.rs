//! Concrete numeric kinds for raw component values.
//!
//! A component value may be any fixed-width integer or float. Rather than
//! erase the type, values travel as a closed tagged union so that
//! normalization can dispatch on the exact kind that was stored.
//!
//! # Types
//!
//! - [`StorageKind`] - The tag: which concrete numeric type a value has
//! - [`ComponentValue`] - The value itself, tagged with its kind
//!
//! # Example
//!
//! ```rust
//! use rasterkit_core::{ComponentValue, StorageKind};
//!
//! let v = ComponentValue::from(255u8);
//! assert_eq!(v.kind(), StorageKind::U8);
//! assert_eq!(v.normalized(), 1.0);
//! ```

use half::f16;
use std::fmt;

/// Concrete fixed-width numeric storage type.
///
/// This is both the result of resolving a channel's requested bit width
/// (see [`crate::Channel::storage_type`]) and the tag carried by every
/// [`ComponentValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKind {
    /// 8-bit unsigned integer.
    U8,
    /// 16-bit unsigned integer.
    U16,
    /// 32-bit unsigned integer.
    U32,
    /// 64-bit unsigned integer.
    U64,
    /// 8-bit signed integer.
    I8,
    /// 16-bit signed integer.
    I16,
    /// 32-bit signed integer.
    I32,
    /// 64-bit signed integer.
    I64,
    /// 16-bit half-precision float.
    F16,
    /// 32-bit single-precision float.
    F32,
    /// 64-bit double-precision float.
    F64,
}

impl StorageKind {
    /// Unsigned integer candidates in ascending width.
    pub const UNSIGNED: [StorageKind; 4] = [Self::U8, Self::U16, Self::U32, Self::U64];

    /// Signed integer candidates in ascending width.
    pub const SIGNED: [StorageKind; 4] = [Self::I8, Self::I16, Self::I32, Self::I64];

    /// Native width in bits.
    #[inline]
    pub const fn bits(&self) -> u32 {
        match self {
            Self::U8 | Self::I8 => 8,
            Self::U16 | Self::I16 | Self::F16 => 16,
            Self::U32 | Self::I32 | Self::F32 => 32,
            Self::U64 | Self::I64 | Self::F64 => 64,
        }
    }

    /// Whether this is a floating-point kind.
    #[inline]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::F16 | Self::F32 | Self::F64)
    }

    /// Whether this is a signed integer kind.
    #[inline]
    pub const fn is_signed(&self) -> bool {
        matches!(self, Self::I8 | Self::I16 | Self::I32 | Self::I64)
    }

    /// Whether this is an integer kind.
    #[inline]
    pub const fn is_integer(&self) -> bool {
        !self.is_float()
    }

    /// Short name for display.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F16 => "f16",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A raw component value of one concrete numeric kind.
///
/// The variant is the value's exact runtime kind. It is deliberately
/// independent of the channel a value is attached to: no coercion happens
/// when a [`crate::Component`] is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ComponentValue {
    /// 8-bit unsigned integer.
    U8(u8),
    /// 16-bit unsigned integer.
    U16(u16),
    /// 32-bit unsigned integer.
    U32(u32),
    /// 64-bit unsigned integer.
    U64(u64),
    /// 8-bit signed integer.
    I8(i8),
    /// 16-bit signed integer.
    I16(i16),
    /// 32-bit signed integer.
    I32(i32),
    /// 64-bit signed integer.
    I64(i64),
    /// 16-bit half-precision float.
    F16(f16),
    /// 32-bit single-precision float.
    F32(f32),
    /// 64-bit double-precision float.
    F64(f64),
}

impl ComponentValue {
    /// The concrete kind of this value.
    #[inline]
    pub const fn kind(&self) -> StorageKind {
        match self {
            Self::U8(_) => StorageKind::U8,
            Self::U16(_) => StorageKind::U16,
            Self::U32(_) => StorageKind::U32,
            Self::U64(_) => StorageKind::U64,
            Self::I8(_) => StorageKind::I8,
            Self::I16(_) => StorageKind::I16,
            Self::I32(_) => StorageKind::I32,
            Self::I64(_) => StorageKind::I64,
            Self::F16(_) => StorageKind::F16,
            Self::F32(_) => StorageKind::F32,
            Self::F64(_) => StorageKind::F64,
        }
    }

    /// The raw value widened to `f64`.
    ///
    /// 64-bit integers above 2^53 lose precision.
    #[inline]
    pub fn to_f64(self) -> f64 {
        match self {
            Self::U8(v) => f64::from(v),
            Self::U16(v) => f64::from(v),
            Self::U32(v) => f64::from(v),
            Self::U64(v) => v as f64,
            Self::I8(v) => f64::from(v),
            Self::I16(v) => f64::from(v),
            Self::I32(v) => f64::from(v),
            Self::I64(v) => v as f64,
            Self::F16(v) => v.to_f64(),
            Self::F32(v) => f64::from(v),
            Self::F64(v) => v,
        }
    }

    /// Greatest finite value of this value's exact kind, as `f64`.
    #[inline]
    pub fn kind_max(&self) -> f64 {
        match self {
            Self::U8(_) => f64::from(u8::MAX),
            Self::U16(_) => f64::from(u16::MAX),
            Self::U32(_) => f64::from(u32::MAX),
            Self::U64(_) => u64::MAX as f64,
            Self::I8(_) => f64::from(i8::MAX),
            Self::I16(_) => f64::from(i16::MAX),
            Self::I32(_) => f64::from(i32::MAX),
            Self::I64(_) => i64::MAX as f64,
            Self::F16(_) => f16::MAX.to_f64(),
            Self::F32(_) => f64::from(f32::MAX),
            Self::F64(_) => f64::MAX,
        }
    }

    /// Fraction of this kind's representable maximum.
    ///
    /// Integers divide by the maximum of their exact integer type, floats by
    /// the greatest finite value of their exact float type. Signed values are
    /// not remapped, so a negative value yields a negative fraction.
    #[inline]
    pub fn normalized(self) -> f64 {
        self.to_f64() / self.kind_max()
    }
}

impl fmt::Display for ComponentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::U8(v) => write!(f, "{v}"),
            Self::U16(v) => write!(f, "{v}"),
            Self::U32(v) => write!(f, "{v}"),
            Self::U64(v) => write!(f, "{v}"),
            Self::I8(v) => write!(f, "{v}"),
            Self::I16(v) => write!(f, "{v}"),
            Self::I32(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::F16(v) => write!(f, "{v}"),
            Self::F32(v) => write!(f, "{v}"),
            Self::F64(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! impl_from_primitive {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for ComponentValue {
                #[inline]
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

impl_from_primitive! {
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    f16 => F16,
    f32 => F32,
    f64 => F64,
}

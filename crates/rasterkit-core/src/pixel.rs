//! Components and pixels.
//!
//! A [`Component`] is one raw value tied to the [`Channel`] that describes
//! it. A [`Pixel`] is an ordered list of components. Order matters: lookups
//! such as [`Pixel::red`] return the *first* component with a matching
//! channel name, and a pixel may legitimately carry duplicates or no
//! components at all.
//!
//! # Example
//!
//! ```rust
//! use rasterkit_core::{Channel, ChannelName, Component, Pixel};
//!
//! let pixel = Pixel::new(vec![
//!     Component::new(Channel::unsigned(ChannelName::Red, 8), 255u8),
//!     Component::new(Channel::unsigned(ChannelName::Alpha, 8), 0u8),
//! ]);
//! assert_eq!(pixel.bit_depth(), 16);
//! assert_eq!(pixel.red().map(|c| c.normalized_value()), Some(1.0));
//! assert!(pixel.green().is_none());
//! ```
//!
//! # Value and storage kind
//!
//! A component's value keeps whatever numeric kind the caller supplied. It is
//! not coerced to the channel's resolved [`StorageKind`], and the two may
//! differ; [`Component::is_native`] tells whether they agree.

use crate::channel::{Channel, ChannelName};
use crate::value::{ComponentValue, StorageKind};
use std::fmt;

/// One decoded value and the channel that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Component {
    /// Channel describing this value.
    pub channel: Channel,
    /// Raw value, in the numeric kind it was supplied in.
    pub value: ComponentValue,
}

impl Component {
    /// Create a component. The value is stored as given.
    #[inline]
    pub fn new(channel: Channel, value: impl Into<ComponentValue>) -> Self {
        Self {
            channel,
            value: value.into(),
        }
    }

    /// Channel name shortcut.
    #[inline]
    pub fn name(&self) -> ChannelName {
        self.channel.name
    }

    /// The value's exact numeric kind.
    #[inline]
    pub fn value_kind(&self) -> StorageKind {
        self.value.kind()
    }

    /// Whether the value's kind equals the channel's resolved storage kind.
    #[inline]
    pub fn is_native(&self) -> bool {
        self.value.kind() == self.channel.storage_type()
    }

    /// The value as a fraction of its own kind's representable maximum.
    ///
    /// Dispatches on the value's kind, not on the channel's storage kind.
    /// See [`ComponentValue::normalized`].
    #[inline]
    pub fn normalized_value(&self) -> f64 {
        self.value.normalized()
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.channel.name.short(), self.value)
    }
}

/// An ordered collection of components.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pixel {
    components: Vec<Component>,
}

impl Pixel {
    /// Create a pixel from its components, in order.
    #[inline]
    pub fn new(components: Vec<Component>) -> Self {
        Self { components }
    }

    /// Components in order.
    #[inline]
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Number of components.
    #[inline]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if the pixel has no components.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Sum of every component's declared channel width.
    ///
    /// Widths are `u32` but any width is legal, so the sum is taken in `u64`.
    pub fn bit_depth(&self) -> u64 {
        self.components
            .iter()
            .map(|c| u64::from(c.channel.bit_width()))
            .sum()
    }

    /// First component whose channel has the given name.
    pub fn component(&self, name: ChannelName) -> Option<&Component> {
        self.components.iter().find(|c| c.channel.name == name)
    }

    /// First red component.
    #[inline]
    pub fn red(&self) -> Option<&Component> {
        self.component(ChannelName::Red)
    }

    /// First green component.
    #[inline]
    pub fn green(&self) -> Option<&Component> {
        self.component(ChannelName::Green)
    }

    /// First blue component.
    #[inline]
    pub fn blue(&self) -> Option<&Component> {
        self.component(ChannelName::Blue)
    }

    /// First alpha component.
    #[inline]
    pub fn alpha(&self) -> Option<&Component> {
        self.component(ChannelName::Alpha)
    }

    /// Normalized `[r, g, b, a]` for display.
    ///
    /// Missing color channels read as 0.0 and missing alpha as 1.0 (opaque).
    /// A pixel with none of red, green or blue but with a luminance channel
    /// is shown as gray at that luminance.
    pub fn display_rgba(&self) -> [f64; 4] {
        let fraction = |c: Option<&Component>| c.map(Component::normalized_value);
        let (r, g, b) = (
            fraction(self.red()),
            fraction(self.green()),
            fraction(self.blue()),
        );
        let a = fraction(self.alpha()).unwrap_or(1.0);

        match (r, g, b, fraction(self.component(ChannelName::Luminance))) {
            (None, None, None, Some(y)) => [y, y, y, a],
            (r, g, b, _) => [r.unwrap_or(0.0), g.unwrap_or(0.0), b.unwrap_or(0.0), a],
        }
    }
}

impl From<Vec<Component>> for Pixel {
    fn from(components: Vec<Component>) -> Self {
        Self::new(components)
    }
}

impl FromIterator<Component> for Pixel {
    fn from_iter<I: IntoIterator<Item = Component>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, c) in self.components.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str("}")
    }
}

//! Byte-packed RGBA color values.
//!
//! [`Color`] is an immutable 8-bit-per-channel RGBA sample plus the
//! arithmetic needed to move pixels between formats: packed-int
//! conversion, alpha-over compositing, and luma reduction.

use core::fmt;
use core::hash::{Hash, Hasher};

use rgb::{Gray, Rgb, Rgba};

use crate::format::PixelFormat;

/// One RGBA sample with 8-bit unsigned channels.
///
/// Immutable by construction — every operation returns a new value.
/// Equality compares all four channels; the hash is the XOR of the
/// channels (collision-prone but deterministic, intended for cache
/// keys rather than uniform distribution).
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = fully opaque).
    pub a: u8,
}

impl Color {
    /// Bit position of the alpha channel in a packed-int pixel.
    pub const A_SHIFT: u32 = 24;
    /// Bit position of the red channel in a packed-int pixel.
    pub const R_SHIFT: u32 = 16;
    /// Bit position of the green channel in a packed-int pixel.
    pub const G_SHIFT: u32 = 8;
    /// Bit position of the blue channel in a packed-int pixel.
    pub const B_SHIFT: u32 = 0;

    /// Opaque black (0, 0, 0, 255). Shared by blend callers as the
    /// default backdrop.
    pub const BLACK: Color = Color::gray(0);

    /// Create a color from all four channels.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color (alpha = 255).
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Create an opaque gray color with r = g = b = `value`.
    #[inline]
    pub const fn gray(value: u8) -> Self {
        Self::rgb(value, value, value)
    }

    /// Map a channel byte to a normalized value in [0, 1].
    #[inline]
    pub fn normalize(channel: u8) -> f64 {
        channel as f64 / 255.0
    }

    /// Map a normalized value back to a channel byte.
    ///
    /// Rounds half-up and saturates: the clamp runs before the
    /// narrowing cast, so out-of-range inputs pin to 0 or 255 rather
    /// than wrapping.
    #[inline]
    pub fn quantize(value: f64) -> u8 {
        (value * 255.0 + 0.5).clamp(0.0, 255.0) as u8
    }

    /// Pack into a 32-bit ARGB integer: A in bits 31:24, R 23:16,
    /// G 15:8, B 7:0. Independent of host byte order.
    #[inline]
    pub const fn to_packed(self) -> u32 {
        (self.a as u32) << Self::A_SHIFT
            | (self.r as u32) << Self::R_SHIFT
            | (self.g as u32) << Self::G_SHIFT
            | (self.b as u32) << Self::B_SHIFT
    }

    /// Unpack from a 32-bit ARGB integer.
    #[inline]
    pub const fn from_packed(packed: u32) -> Self {
        Self {
            r: (packed >> Self::R_SHIFT) as u8,
            g: (packed >> Self::G_SHIFT) as u8,
            b: (packed >> Self::B_SHIFT) as u8,
            a: (packed >> Self::A_SHIFT) as u8,
        }
    }

    /// Composite `self` over `backdrop` using `self.a` as the blend
    /// weight: `channel = src * srcA + dst * (1 - srcA)` in normalized
    /// space, each channel rounded through [`quantize`](Self::quantize).
    ///
    /// The result alpha is `max(self.a, backdrop.a)`, not the standard
    /// alpha-over formula: the backdrop is treated as always present,
    /// so blending only ever flattens transparency, never adds it.
    pub fn blend_over(self, backdrop: Color) -> Color {
        let src = Self::normalize(self.a);
        let dst = 1.0 - src;
        let mix = |s: u8, d: u8| Self::quantize(Self::normalize(s) * src + Self::normalize(d) * dst);
        Color {
            r: mix(self.r, backdrop.r),
            g: mix(self.g, backdrop.g),
            b: mix(self.b, backdrop.b),
            a: self.a.max(backdrop.a),
        }
    }

    /// Collapse RGB to a single luminance byte using the standard luma
    /// weights `0.2989 R + 0.5870 G + 0.1140 B`, rounded half-up.
    ///
    /// Operates on the raw 0–255 channel values; alpha is ignored.
    pub fn luma(self) -> u8 {
        (self.r as f64 * 0.2989 + self.g as f64 * 0.5870 + self.b as f64 * 0.1140 + 0.5) as u8
    }

    /// Reformat a color read from a `from`-format buffer for writing
    /// into a `to`-format buffer.
    ///
    /// Equal formats are an identity. Otherwise the color is first
    /// flattened over `backdrop` when the source carried real alpha
    /// ([`PackedArgb`](PixelFormat::PackedArgb)), then collapsed to
    /// gray when the destination is [`Gray8`](PixelFormat::Gray8).
    /// RGB to ARGB passes through unchanged (alpha already 255).
    pub fn convert(self, from: PixelFormat, to: PixelFormat, backdrop: Color) -> Color {
        if from == to {
            return self;
        }
        let flat = if from == PixelFormat::PackedArgb {
            self.blend_over(backdrop)
        } else {
            self
        };
        if to == PixelFormat::Gray8 {
            Color::gray(flat.luma())
        } else {
            flat
        }
    }
}

impl Hash for Color {
    /// XOR of the four channels. Cheap and deterministic; equal colors
    /// hash equal, but distinct colors collide freely.
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u8(self.r ^ self.g ^ self.b ^ self.a);
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r:{:03} g:{:03} b:{:03} a:{:03}", self.r, self.g, self.b, self.a)
    }
}

impl From<u32> for Color {
    #[inline]
    fn from(packed: u32) -> Self {
        Self::from_packed(packed)
    }
}

impl From<Color> for u32 {
    #[inline]
    fn from(color: Color) -> Self {
        color.to_packed()
    }
}

// Interop with the `rgb` crate's typed pixels.

impl From<Rgba<u8>> for Color {
    #[inline]
    fn from(px: Rgba<u8>) -> Self {
        Self::rgba(px.r, px.g, px.b, px.a)
    }
}

impl From<Rgb<u8>> for Color {
    #[inline]
    fn from(px: Rgb<u8>) -> Self {
        Self::rgb(px.r, px.g, px.b)
    }
}

impl From<Gray<u8>> for Color {
    #[inline]
    fn from(px: Gray<u8>) -> Self {
        Self::gray(px.value())
    }
}

impl From<Color> for Rgba<u8> {
    #[inline]
    fn from(color: Color) -> Self {
        Rgba {
            r: color.r,
            g: color.g,
            b: color.b,
            a: color.a,
        }
    }
}

impl From<Color> for Rgb<u8> {
    #[inline]
    fn from(color: Color) -> Self {
        Rgb {
            r: color.r,
            g: color.g,
            b: color.b,
        }
    }
}

//! Byte-packed RGBA color values and pixel buffer representation
//! conversions.
//!
//! This crate moves pixel data between three in-memory representations
//! of the same logical pixel sequence:
//!
//! - interleaved bytes tagged with a [`PixelFormat`] (RGB, ARGB, or
//!   8-bit gray),
//! - packed 32-bit ARGB integers,
//! - discrete [`Color`] records.
//!
//! [`Color`] carries the per-pixel arithmetic: packed-int conversion,
//! alpha-over compositing (ARGB sources are flattened over a backdrop
//! when leaving the ARGB format), and luma reduction for gray
//! destinations. [`PixelBuffer`] dispatches single-pixel reads and
//! writes over its representation and drives whole-buffer conversion,
//! either into a caller-supplied buffer or a freshly allocated one.
//!
//! [`nonzero_bounds`] is a small auxiliary: the bounding box of
//! nonzero cells in a byte mask.
//!
//! Blending is gamma-naive sRGB-ish arithmetic; there is no color
//! management, no SIMD, and no bit depth other than 8-bit channels.

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

mod buffer;
mod color;
mod format;
mod mask;

pub use buffer::{BufferKind, ConvertError, PixelBuffer};
pub use color::Color;
pub use format::PixelFormat;
pub use mask::{Rect, nonzero_bounds};

// Re-exports for callers working with typed pixels and 2D views.
pub use imgref::{Img, ImgRef, ImgVec};
pub use rgb;
pub use rgb::{Gray, Rgb, Rgba};

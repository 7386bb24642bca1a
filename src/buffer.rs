//! Pixel buffer representations and whole-buffer conversion.
//!
//! A [`PixelBuffer`] holds the same logical pixel sequence in one of
//! three interchangeable representations: raw interleaved bytes, packed
//! ARGB integers, or [`Color`] records. Reads and writes dispatch on
//! the variant tag; conversion walks every pixel through
//! [`Color::convert`].

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::color::Color;
use crate::format::PixelFormat;

// ---------------------------------------------------------------------------
// ConvertError
// ---------------------------------------------------------------------------

/// Errors from pixel buffer operations.
///
/// There is no recovery or retry: errors propagate to the immediate
/// caller, and a whole-buffer conversion that fails mid-loop leaves the
/// destination unspecified past the last index it wrote.
///
/// Implements [`core::error::Error`] so callers can wrap it in their
/// own error types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConvertError {
    /// A numeric format tag matched no supported format.
    UnsupportedFormat {
        /// The tag as declared by the collaborator.
        tag: u32,
    },
    /// Index-times-stride arithmetic landed outside the buffer.
    OutOfBounds {
        /// Requested pixel index.
        index: usize,
        /// Element length of the buffer.
        len: usize,
    },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedFormat { tag } => write!(f, "unsupported pixel format tag {tag}"),
            Self::OutOfBounds { index, len } => {
                write!(f, "pixel index {index} out of bounds for buffer of length {len}")
            }
        }
    }
}

impl core::error::Error for ConvertError {}

// ---------------------------------------------------------------------------
// PixelBuffer
// ---------------------------------------------------------------------------

/// Which representation a [`PixelBuffer`] uses (or should be
/// allocated with).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BufferKind {
    /// Interleaved bytes, layout fixed by a [`PixelFormat`].
    Bytes,
    /// One packed 32-bit ARGB integer per pixel.
    Packed,
    /// One [`Color`] record per pixel.
    Colors,
}

/// A pixel sequence in one of three interchangeable representations.
///
/// Buffers are fixed-length once allocated; conversion never resizes
/// one, it only writes in place or allocates a fresh buffer sized to
/// the source pixel count.
///
/// Not internally synchronized — concurrent writers, or readers racing
/// a writer, must be serialized by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PixelBuffer {
    /// Interleaved channel bytes; interpretation depends on the format
    /// tag passed to each operation.
    Bytes(Vec<u8>),
    /// Packed ARGB integers (see [`Color::to_packed`] for the layout).
    Packed(Vec<u32>),
    /// Discrete color records.
    Colors(Vec<Color>),
}

impl PixelBuffer {
    /// Allocate a zeroed buffer of `kind` sized for `pixels` pixels.
    ///
    /// Byte buffers get `pixels * format.stride()` bytes; the format is
    /// ignored for the other kinds. Color buffers fill with
    /// [`Color::BLACK`].
    pub fn alloc(kind: BufferKind, format: PixelFormat, pixels: usize) -> PixelBuffer {
        match kind {
            BufferKind::Bytes => PixelBuffer::Bytes(vec![0; pixels * format.stride()]),
            BufferKind::Packed => PixelBuffer::Packed(vec![0; pixels]),
            BufferKind::Colors => PixelBuffer::Colors(vec![Color::BLACK; pixels]),
        }
    }

    /// The representation this buffer uses.
    #[inline]
    pub const fn kind(&self) -> BufferKind {
        match self {
            Self::Bytes(_) => BufferKind::Bytes,
            Self::Packed(_) => BufferKind::Packed,
            Self::Colors(_) => BufferKind::Colors,
        }
    }

    /// Number of whole pixels held, interpreting a byte buffer with
    /// `format`.
    ///
    /// For byte buffers this is truncating division by the stride:
    /// trailing bytes short of a full pixel are silently dropped, as
    /// a length that is not a stride multiple is a caller precondition
    /// violation rather than an error.
    #[inline]
    pub fn num_pixels(&self, format: PixelFormat) -> usize {
        match self {
            Self::Bytes(buf) => buf.len() / format.stride(),
            Self::Packed(buf) => buf.len(),
            Self::Colors(buf) => buf.len(),
        }
    }

    /// Raw byte view, if this is a byte buffer.
    #[inline]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(buf) => Some(buf),
            _ => None,
        }
    }

    /// Packed-int view, if this is a packed buffer.
    #[inline]
    pub fn as_packed(&self) -> Option<&[u32]> {
        match self {
            Self::Packed(buf) => Some(buf),
            _ => None,
        }
    }

    /// Color-record view, if this is a color buffer.
    #[inline]
    pub fn as_colors(&self) -> Option<&[Color]> {
        match self {
            Self::Colors(buf) => Some(buf),
            _ => None,
        }
    }

    /// Read the pixel at `index` as a [`Color`].
    ///
    /// The format tag is only consulted for byte buffers; packed
    /// buffers always unpack ARGB integers and color buffers return
    /// the element directly.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::OutOfBounds`] when `index * stride`
    /// plus the pixel's stride exceeds the buffer length.
    pub fn read(&self, format: PixelFormat, index: usize) -> Result<Color, ConvertError> {
        match self {
            Self::Bytes(buf) => {
                let offset = byte_offset(buf.len(), index, format.stride())?;
                Ok(match format {
                    PixelFormat::PackedRgb => {
                        Color::rgb(buf[offset], buf[offset + 1], buf[offset + 2])
                    }
                    PixelFormat::PackedArgb => Color::rgba(
                        buf[offset],
                        buf[offset + 1],
                        buf[offset + 2],
                        buf[offset + 3],
                    ),
                    PixelFormat::Gray8 => Color::gray(buf[offset]),
                })
            }
            Self::Packed(buf) => buf
                .get(index)
                .copied()
                .map(Color::from_packed)
                .ok_or(ConvertError::OutOfBounds {
                    index,
                    len: buf.len(),
                }),
            Self::Colors(buf) => buf.get(index).copied().ok_or(ConvertError::OutOfBounds {
                index,
                len: buf.len(),
            }),
        }
    }

    /// Write `color` into the pixel at `index`.
    ///
    /// Symmetric inverse of [`read`](Self::read). A Gray8 byte buffer
    /// stores `color.r`, which for colors built by
    /// [`Color::gray`] is the luminance byte.
    ///
    /// # Errors
    ///
    /// Same bounds behavior as [`read`](Self::read).
    pub fn write(
        &mut self,
        color: Color,
        format: PixelFormat,
        index: usize,
    ) -> Result<(), ConvertError> {
        match self {
            Self::Bytes(buf) => {
                let offset = byte_offset(buf.len(), index, format.stride())?;
                match format {
                    PixelFormat::PackedRgb => {
                        buf[offset] = color.r;
                        buf[offset + 1] = color.g;
                        buf[offset + 2] = color.b;
                    }
                    PixelFormat::PackedArgb => {
                        buf[offset] = color.r;
                        buf[offset + 1] = color.g;
                        buf[offset + 2] = color.b;
                        buf[offset + 3] = color.a;
                    }
                    PixelFormat::Gray8 => buf[offset] = color.r,
                }
                Ok(())
            }
            Self::Packed(buf) => {
                let len = buf.len();
                let slot = buf
                    .get_mut(index)
                    .ok_or(ConvertError::OutOfBounds { index, len })?;
                *slot = color.to_packed();
                Ok(())
            }
            Self::Colors(buf) => {
                let len = buf.len();
                let slot = buf
                    .get_mut(index)
                    .ok_or(ConvertError::OutOfBounds { index, len })?;
                *slot = color;
                Ok(())
            }
        }
    }

    /// Convert every pixel of `self` into `dest`, in place.
    ///
    /// `dest` must already be sized for `self.num_pixels(format)`
    /// pixels in `dest_format`'s layout; a smaller destination fails
    /// with [`ConvertError::OutOfBounds`] at the first index it cannot
    /// hold, leaving later state unspecified. `backdrop` is the opaque
    /// background used when flattening ARGB sources (see
    /// [`Color::convert`]).
    pub fn convert_into(
        &self,
        format: PixelFormat,
        dest: &mut PixelBuffer,
        dest_format: PixelFormat,
        backdrop: Color,
    ) -> Result<(), ConvertError> {
        let pixels = self.num_pixels(format);
        for index in 0..pixels {
            let color = self.read(format, index)?.convert(format, dest_format, backdrop);
            dest.write(color, dest_format, index)?;
        }
        Ok(())
    }

    /// Convert into a freshly allocated buffer of `dest_kind` sized to
    /// this buffer's pixel count.
    pub fn convert(
        &self,
        format: PixelFormat,
        dest_kind: BufferKind,
        dest_format: PixelFormat,
        backdrop: Color,
    ) -> Result<PixelBuffer, ConvertError> {
        let mut dest = PixelBuffer::alloc(dest_kind, dest_format, self.num_pixels(format));
        self.convert_into(format, &mut dest, dest_format, backdrop)?;
        Ok(dest)
    }
}

/// Byte offset of pixel `index` at `stride` bytes per pixel, checked
/// against `len` so the whole pixel fits.
fn byte_offset(len: usize, index: usize, stride: usize) -> Result<usize, ConvertError> {
    let err = ConvertError::OutOfBounds { index, len };
    let offset = index.checked_mul(stride).ok_or(err)?;
    let end = offset.checked_add(stride).ok_or(err)?;
    if end > len {
        return Err(err);
    }
    Ok(offset)
}

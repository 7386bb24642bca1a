//! Pixel format tags.

use crate::buffer::ConvertError;

/// Byte-buffer pixel format.
///
/// The tag fixes the per-pixel byte layout and stride of a byte
/// buffer; packed-int and [`Color`](crate::Color) buffers carry their
/// layout in the element type and only consult the tag when deciding
/// conversion policy.
///
/// Discriminants are the wire tags exchanged with external
/// collaborators (see [`from_tag`](Self::from_tag)).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum PixelFormat {
    /// 3 bytes per pixel: `[R, G, B]`, alpha implicitly 255.
    PackedRgb = 1,
    /// 4 bytes per pixel: `[R, G, B, A]`.
    PackedArgb = 2,
    /// 1 byte per pixel: a single luminance value for all of R, G, B,
    /// alpha implicitly 255.
    Gray8 = 10,
}

impl PixelFormat {
    /// Bytes consumed per pixel in a byte buffer of this format.
    #[inline]
    pub const fn stride(self) -> usize {
        match self {
            Self::PackedRgb => 3,
            Self::PackedArgb => 4,
            Self::Gray8 => 1,
        }
    }

    /// Whether the format stores a real alpha channel.
    #[inline]
    pub const fn has_alpha(self) -> bool {
        matches!(self, Self::PackedArgb)
    }

    /// Resolve a numeric format tag declared by an external
    /// collaborator.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::UnsupportedFormat`] for any tag that is
    /// not one of the three supported formats.
    pub const fn from_tag(tag: u32) -> Result<Self, ConvertError> {
        match tag {
            1 => Ok(Self::PackedRgb),
            2 => Ok(Self::PackedArgb),
            10 => Ok(Self::Gray8),
            _ => Err(ConvertError::UnsupportedFormat { tag }),
        }
    }

    /// The numeric wire tag for this format.
    #[inline]
    pub const fn tag(self) -> u32 {
        self as u32
    }
}

impl core::fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::PackedRgb => "packed RGB",
            Self::PackedArgb => "packed ARGB",
            Self::Gray8 => "gray8",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strides() {
        assert_eq!(PixelFormat::PackedRgb.stride(), 3);
        assert_eq!(PixelFormat::PackedArgb.stride(), 4);
        assert_eq!(PixelFormat::Gray8.stride(), 1);
    }

    #[test]
    fn alpha() {
        assert!(!PixelFormat::PackedRgb.has_alpha());
        assert!(PixelFormat::PackedArgb.has_alpha());
        assert!(!PixelFormat::Gray8.has_alpha());
    }

    #[test]
    fn tag_round_trip() {
        for format in [
            PixelFormat::PackedRgb,
            PixelFormat::PackedArgb,
            PixelFormat::Gray8,
        ] {
            assert_eq!(PixelFormat::from_tag(format.tag()), Ok(format));
        }
    }

    #[test]
    fn unknown_tag_rejected() {
        assert_eq!(
            PixelFormat::from_tag(0),
            Err(ConvertError::UnsupportedFormat { tag: 0 })
        );
        assert_eq!(
            PixelFormat::from_tag(3),
            Err(ConvertError::UnsupportedFormat { tag: 3 })
        );
        assert_eq!(
            PixelFormat::from_tag(u32::MAX),
            Err(ConvertError::UnsupportedFormat { tag: u32::MAX })
        );
    }

    #[test]
    fn display_names() {
        use alloc::string::ToString;
        assert_eq!(PixelFormat::PackedRgb.to_string(), "packed RGB");
        assert_eq!(PixelFormat::PackedArgb.to_string(), "packed ARGB");
        assert_eq!(PixelFormat::Gray8.to_string(), "gray8");
    }
}

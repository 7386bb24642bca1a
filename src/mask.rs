//! Bounding box of nonzero mask cells.

use imgref::ImgRef;

/// An axis-aligned rectangle in mask coordinates.
///
/// `width` and `height` are signed so an empty result can be
/// represented: [`Rect::EMPTY`] carries negative extents, and callers
/// should treat any rect with `width < 0` as "no match".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Leftmost matching column.
    pub x: i32,
    /// Topmost matching row.
    pub y: i32,
    /// Horizontal extent, `max_x - min_x`.
    pub width: i32,
    /// Vertical extent, `max_y - min_y`.
    pub height: i32,
}

impl Rect {
    /// The "no nonzero cell" sentinel.
    pub const EMPTY: Rect = Rect {
        x: 0,
        y: 0,
        width: -1,
        height: -1,
    };

    /// Whether this rect is the empty sentinel (negative extent).
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width < 0 || self.height < 0
    }
}

/// Find the minimal box around all nonzero cells of a byte mask.
///
/// Scans the mask row-major in a single pass. The extents are the
/// coordinate spans `max - min`, so a single nonzero cell yields a
/// zero-width, zero-height rect at that cell. An all-zero mask yields
/// [`Rect::EMPTY`].
pub fn nonzero_bounds(mask: ImgRef<'_, u8>) -> Rect {
    let mut min_x = i32::MAX;
    let mut max_x = i32::MIN;
    let mut min_y = i32::MAX;
    let mut max_y = i32::MIN;
    for (y, row) in mask.rows().enumerate() {
        for (x, &cell) in row.iter().enumerate() {
            if cell != 0 {
                min_x = min_x.min(x as i32);
                max_x = max_x.max(x as i32);
                min_y = min_y.min(y as i32);
                max_y = max_y.max(y as i32);
            }
        }
    }
    if max_x < min_x {
        return Rect::EMPTY;
    }
    Rect {
        x: min_x,
        y: min_y,
        width: max_x - min_x,
        height: max_y - min_y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use imgref::Img;

    #[test]
    fn all_zero_mask_is_empty() {
        let mask = Img::new(vec![0u8; 16], 4, 4);
        let rect = nonzero_bounds(mask.as_ref());
        assert!(rect.is_empty());
        assert_eq!(rect, Rect::EMPTY);
    }

    #[test]
    fn single_cell() {
        let mut data = vec![0u8; 16];
        data[2 * 4 + 1] = 0xFF;
        let mask = Img::new(data, 4, 4);
        let rect = nonzero_bounds(mask.as_ref());
        assert_eq!(
            rect,
            Rect {
                x: 1,
                y: 2,
                width: 0,
                height: 0
            }
        );
        assert!(!rect.is_empty());
    }

    #[test]
    fn spanning_cells() {
        // Nonzero at (1, 0) and (3, 2).
        let mut data = vec![0u8; 4 * 3];
        data[1] = 1;
        data[2 * 4 + 3] = 7;
        let mask = Img::new(data, 4, 3);
        assert_eq!(
            nonzero_bounds(mask.as_ref()),
            Rect {
                x: 1,
                y: 0,
                width: 2,
                height: 2
            }
        );
    }

    #[test]
    fn full_mask() {
        let mask = Img::new(vec![1u8; 4 * 3], 4, 3);
        assert_eq!(
            nonzero_bounds(mask.as_ref()),
            Rect {
                x: 0,
                y: 0,
                width: 3,
                height: 2
            }
        );
    }

    #[test]
    fn stride_padding_ignored() {
        // 2x2 mask carved out of a wider buffer; padding bytes are
        // nonzero but outside the view.
        let data = vec![
            1, 0, 9, 9, //
            0, 1, 9, 9, //
        ];
        let mask = Img::new_stride(data, 2, 2, 4);
        assert_eq!(
            nonzero_bounds(mask.as_ref()),
            Rect {
                x: 0,
                y: 0,
                width: 1,
                height: 1
            }
        );
    }
}

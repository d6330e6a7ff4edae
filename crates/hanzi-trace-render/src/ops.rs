//! Raster morphology helpers shared by the glyph backends and the scorer.

/// One 3x3 max-dilation pass over a square buffer, separable: horizontal max
/// into `tmp`, vertical max into `dst`.
pub fn dilate3x3_max(src: &[u8], side: usize, tmp: &mut [u8], dst: &mut [u8]) {
    debug_assert_eq!(src.len(), side * side);
    debug_assert_eq!(tmp.len(), src.len());
    debug_assert_eq!(dst.len(), src.len());
    if side == 0 {
        return;
    }
    // Horizontal max3 into tmp.
    for y in 0..side {
        let row = y * side;
        if side == 1 {
            tmp[row] = src[row];
            continue;
        }
        tmp[row] = src[row].max(src[row + 1]);
        for x in 1..side - 1 {
            let i = row + x;
            tmp[i] = src[i - 1].max(src[i]).max(src[i + 1]);
        }
        tmp[row + side - 1] = src[row + side - 2].max(src[row + side - 1]);
    }
    // Vertical max3 into dst.
    for x in 0..side {
        if side == 1 {
            dst[x] = tmp[x];
            continue;
        }
        dst[x] = tmp[x].max(tmp[x + side]);
        for y in 1..side - 1 {
            let i = y * side + x;
            dst[i] = tmp[i - side].max(tmp[i]).max(tmp[i + side]);
        }
        let i = (side - 1) * side + x;
        dst[i] = tmp[i].max(tmp[i - side]);
    }
}

/// Dilates `src` by a Chebyshev radius, one 3x3 pass per unit of radius.
///
/// Edges clamp, so ink never wraps or leaks out of the buffer.
pub fn dilate_chebyshev(src: &[u8], side: usize, radius: usize) -> Vec<u8> {
    let mut out = src.to_vec();
    if radius == 0 || side == 0 {
        return out;
    }
    let mut tmp = vec![0u8; src.len()];
    let mut scratch = vec![0u8; src.len()];
    for _ in 0..radius {
        scratch.copy_from_slice(&out);
        dilate3x3_max(&scratch, side, &mut tmp, &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_zero_is_identity() {
        let mut src = vec![0u8; 25];
        src[12] = 255;
        assert_eq!(dilate_chebyshev(&src, 5, 0), src);
    }

    #[test]
    fn single_pixel_grows_to_a_chebyshev_square() {
        let mut src = vec![0u8; 49];
        src[3 * 7 + 3] = 200;
        let out = dilate_chebyshev(&src, 7, 2);
        for y in 0..7 {
            for x in 0..7 {
                let expected = if (3i32 - x as i32).abs() <= 2 && (3i32 - y as i32).abs() <= 2 {
                    200
                } else {
                    0
                };
                assert_eq!(out[y * 7 + x], expected, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn edge_pixels_clamp_instead_of_wrapping() {
        let mut src = vec![0u8; 16];
        src[0] = 90;
        let out = dilate_chebyshev(&src, 4, 1);
        assert_eq!(out[0], 90);
        assert_eq!(out[1], 90);
        assert_eq!(out[4], 90);
        assert_eq!(out[5], 90);
        // Opposite corner stays clear.
        assert_eq!(out[15], 0);
    }
}

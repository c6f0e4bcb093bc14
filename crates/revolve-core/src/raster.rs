//! 3-channel 8-bit raster buffer with a scanline polygon fill.

/// Bytes per pixel.
pub const CHANNELS: usize = 3;

/// Row-major RGB8 image buffer. Row 0 is the top row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureRaster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl TextureRaster {
    /// Create a zero-initialized (black) raster.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; width as usize * height as usize * CHANNELS],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw pixel bytes (row-major, 3 bytes per pixel).
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Calculate size in bytes.
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Pixel at `(x, y)`, or `None` outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = self.offset(x, y);
        Some([
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
        ])
    }

    /// Number of pixels that are not pure black.
    pub fn filled_pixel_count(&self) -> usize {
        self.data
            .chunks_exact(CHANNELS)
            .filter(|px| px.iter().any(|&c| c != 0))
            .count()
    }

    /// Fill the interior of a closed polygon with a solid color.
    ///
    /// Uses an even-odd scanline fill sampled at pixel centers: a pixel is
    /// set when its center `(x + 0.5, y + 0.5)` lies inside the polygon.
    /// The last vertex connects back to the first. Vertices outside the
    /// raster are allowed; spans are clipped.
    pub fn fill_polygon(&mut self, polygon: &[[i32; 2]], color: [u8; 3]) {
        if polygon.len() < 3 || self.width == 0 {
            return;
        }

        let max_x = f64::from(self.width - 1);
        let mut crossings: Vec<f64> = Vec::with_capacity(polygon.len());

        for y in 0..self.height {
            let scan_y = f64::from(y) + 0.5;

            crossings.clear();
            for (k, a) in polygon.iter().enumerate() {
                let b = polygon[(k + 1) % polygon.len()];
                let (ay, by) = (f64::from(a[1]), f64::from(b[1]));
                // Half-open rule: each edge counts for ay <= scan_y < by (or reversed).
                if (ay <= scan_y) != (by <= scan_y) {
                    let t = (scan_y - ay) / (by - ay);
                    crossings.push(f64::from(a[0]) + t * f64::from(b[0] - a[0]));
                }
            }
            crossings.sort_by(f64::total_cmp);

            for span in crossings.chunks_exact(2) {
                let x_start = (span[0] - 0.5).ceil().max(0.0);
                let x_end = (span[1] - 0.5).floor().min(max_x);
                if x_start > x_end {
                    continue;
                }
                for x in x_start as u32..=x_end as u32 {
                    let offset = self.offset(x, y);
                    self.data[offset..offset + CHANNELS].copy_from_slice(&color);
                }
            }
        }
    }

    /// Mirror the raster top-to-bottom in place.
    pub fn flip_vertical(&mut self) {
        let row_len = self.width as usize * CHANNELS;
        let height = self.height as usize;
        for y in 0..height / 2 {
            let (upper, lower) = self.data.split_at_mut((height - 1 - y) * row_len);
            upper[y * row_len..(y + 1) * row_len].swap_with_slice(&mut lower[..row_len]);
        }
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [u8; 3] = [255, 255, 255];

    #[test]
    fn test_new_is_black() {
        let r = TextureRaster::new(4, 3);
        assert_eq!(r.size_bytes(), 4 * 3 * 3);
        assert_eq!(r.filled_pixel_count(), 0);
    }

    #[test]
    fn test_pixel_out_of_bounds() {
        let r = TextureRaster::new(4, 3);
        assert_eq!(r.pixel(3, 2), Some([0, 0, 0]));
        assert_eq!(r.pixel(4, 0), None);
        assert_eq!(r.pixel(0, 3), None);
    }

    #[test]
    fn test_fill_full_rectangle() {
        let mut r = TextureRaster::new(8, 6);
        r.fill_polygon(&[[0, 0], [8, 0], [8, 6], [0, 6]], WHITE);
        assert_eq!(r.filled_pixel_count(), 48);
    }

    #[test]
    fn test_fill_inner_rectangle() {
        let mut r = TextureRaster::new(10, 10);
        r.fill_polygon(&[[2, 3], [6, 3], [6, 8], [2, 8]], WHITE);
        assert_eq!(r.filled_pixel_count(), 4 * 5);
        assert_eq!(r.pixel(2, 3), Some(WHITE));
        assert_eq!(r.pixel(5, 7), Some(WHITE));
        assert_eq!(r.pixel(6, 3), Some([0, 0, 0]));
        assert_eq!(r.pixel(2, 8), Some([0, 0, 0]));
    }

    #[test]
    fn test_fill_clips_to_raster() {
        let mut r = TextureRaster::new(4, 4);
        r.fill_polygon(&[[-5, -5], [20, -5], [20, 20], [-5, 20]], WHITE);
        assert_eq!(r.filled_pixel_count(), 16);
    }

    #[test]
    fn test_fill_triangle_is_partial() {
        let mut r = TextureRaster::new(10, 10);
        r.fill_polygon(&[[0, 0], [10, 0], [0, 5]], WHITE);
        // Hypotenuse x = 10 - 2 * y: rows hold 9, 7, 5, 3, 1 pixels.
        assert_eq!(r.pixel(0, 0), Some(WHITE));
        assert_eq!(r.pixel(8, 0), Some(WHITE));
        assert_eq!(r.pixel(9, 0), Some([0, 0, 0]));
        assert_eq!(r.pixel(0, 4), Some(WHITE));
        assert_eq!(r.pixel(1, 4), Some([0, 0, 0]));
        assert_eq!(r.pixel(0, 5), Some([0, 0, 0]));
        assert_eq!(r.filled_pixel_count(), 25);
    }

    #[test]
    fn test_fill_degenerate_polygon_is_noop() {
        let mut r = TextureRaster::new(4, 4);
        r.fill_polygon(&[[0, 0], [4, 4]], WHITE);
        assert_eq!(r.filled_pixel_count(), 0);
    }

    #[test]
    fn test_flip_vertical() {
        let mut r = TextureRaster::new(3, 3);
        r.fill_polygon(&[[0, 0], [3, 0], [3, 1], [0, 1]], WHITE);
        assert_eq!(r.pixel(1, 0), Some(WHITE));

        r.flip_vertical();
        assert_eq!(r.pixel(1, 0), Some([0, 0, 0]));
        assert_eq!(r.pixel(1, 2), Some(WHITE));
        assert_eq!(r.filled_pixel_count(), 3);
    }
}

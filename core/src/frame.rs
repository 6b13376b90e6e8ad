use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// # Frame Buffer
/// The 64x32 monochrome display, stored row-major with one bool per pixel.
///
/// Pixels are only ever changed by XORing sprites onto the buffer or clearing it.
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pixels: [bool; DISPLAY_WIDTH * DISPLAY_HEIGHT],
}

impl FrameBuffer {
    pub fn new() -> Self {
        FrameBuffer {
            pixels: [false; DISPLAY_WIDTH * DISPLAY_HEIGHT],
        }
    }

    pub fn clear(&mut self) {
        self.pixels = [false; DISPLAY_WIDTH * DISPLAY_HEIGHT];
    }

    /// Whether the pixel at column `x`, row `y` is lit
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.pixels[y * DISPLAY_WIDTH + x]
    }

    pub fn pixels(&self) -> &[bool] {
        &self.pixels
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.pixels.chunks(DISPLAY_WIDTH)
    }

    /// XORs `sprite` onto the buffer with its top left corner at (`x`, `y`).
    ///
    /// Each byte of `sprite` is one 8 pixel row, most significant bit leftmost.
    /// The starting position wraps around the display, but the sprite itself is
    /// clipped at the right and bottom edges rather than wrapping.
    ///
    /// Returns whether any lit pixel was erased.
    pub fn draw_sprite(&mut self, x: u8, y: u8, sprite: &[u8]) -> bool {
        let x0 = usize::from(x) % DISPLAY_WIDTH;
        let y0 = usize::from(y) % DISPLAY_HEIGHT;
        let mut collision = false;

        for (row, &byte) in sprite.iter().enumerate() {
            let y = y0 + row;
            if y >= DISPLAY_HEIGHT {
                break;
            }
            for bit in 0..8 {
                let x = x0 + bit;
                if x >= DISPLAY_WIDTH {
                    break;
                }
                let sprite_pixel = byte & (0x80 >> bit) != 0;
                let pixel = &mut self.pixels[y * DISPLAY_WIDTH + x];
                collision |= *pixel && sprite_pixel;
                *pixel ^= sprite_pixel;
            }
        }

        collision
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().map(|&p| if p { '#' } else { '.' }).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(frame: &FrameBuffer) -> Vec<(usize, usize)> {
        (0..DISPLAY_HEIGHT)
            .flat_map(|y| (0..DISPLAY_WIDTH).map(move |x| (x, y)))
            .filter(|&(x, y)| frame.get(x, y))
            .collect()
    }

    #[test]
    fn test_draws_sprite() {
        let mut frame = FrameBuffer::new();
        // the 0 glyph
        let collision = frame.draw_sprite(1, 1, &[0xF0, 0x90, 0x90, 0x90, 0xF0]);
        assert!(!collision);
        assert!(frame.get(1, 1) && frame.get(4, 1));
        assert!(frame.get(1, 2) && !frame.get(2, 2) && !frame.get(3, 2) && frame.get(4, 2));
        assert!(frame.get(1, 5) && frame.get(4, 5));
        assert_eq!(lit(&frame).len(), 14);
    }

    #[test]
    fn test_xors_with_existing_pixels() {
        let mut frame = FrameBuffer::new();
        frame.draw_sprite(0, 0, &[0b0101_0000]);
        let collision = frame.draw_sprite(0, 0, &[0b1100_0000]);
        assert!(collision);
        assert_eq!(lit(&frame), vec![(0, 0), (3, 0)]);
    }

    #[test]
    fn test_redraw_erases_and_collides() {
        let mut frame = FrameBuffer::new();
        let sprite = [0xFF, 0x81, 0xFF];
        assert!(!frame.draw_sprite(10, 10, &sprite));
        assert!(frame.draw_sprite(10, 10, &sprite));
        assert!(lit(&frame).is_empty());
    }

    #[test]
    fn test_clips_at_right_edge() {
        let mut frame = FrameBuffer::new();
        frame.draw_sprite(60, 0, &[0xFF, 0xFF]);
        let expected: Vec<(usize, usize)> = (0..2)
            .flat_map(|y| (60..64).map(move |x| (x, y)))
            .collect();
        let mut actual = lit(&frame);
        actual.sort_by_key(|&(x, y)| (y, x));
        assert_eq!(actual, expected);
        assert!(!frame.get(0, 0));
    }

    #[test]
    fn test_clips_at_bottom_edge() {
        let mut frame = FrameBuffer::new();
        frame.draw_sprite(0, 30, &[0x80, 0x80, 0x80, 0x80]);
        assert_eq!(lit(&frame), vec![(0, 30), (0, 31)]);
    }

    #[test]
    fn test_wraps_start_position() {
        let mut frame = FrameBuffer::new();
        // 66 % 64 == 2, 33 % 32 == 1
        frame.draw_sprite(66, 33, &[0x80]);
        assert_eq!(lit(&frame), vec![(2, 1)]);
    }

    #[test]
    fn test_clear() {
        let mut frame = FrameBuffer::new();
        frame.draw_sprite(0, 0, &[0xFF]);
        frame.clear();
        assert!(lit(&frame).is_empty());
    }
}

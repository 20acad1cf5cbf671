use crate::color::Color;
use serde::{Deserialize, Serialize};

/// A rectangular grid of RGBA pixels, stored row-major.
///
/// The buffer is owned by exactly one drawing surface at a time; operations
/// like [`crate::fill::flood_fill`] borrow it mutably for the duration of the
/// call and never retain a reference past it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl PixelBuffer {
    /// Create a buffer of the given dimensions, cleared to transparent
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Color::TRANSPARENT)
    }

    /// Create a buffer of the given dimensions, cleared to one color
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns true if `(x, y)` names a pixel inside the buffer
    pub fn in_bounds(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Read the pixel at `(x, y)`, or `None` if out of bounds
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        self.index_of(x, y).map(|i| self.pixels[i])
    }

    /// Mutable access to the pixel at `(x, y)`, or `None` if out of bounds
    pub fn get_mut(&mut self, x: u32, y: u32) -> Option<&mut Color> {
        self.index_of(x, y).map(|i| &mut self.pixels[i])
    }

    /// Write the pixel at `(x, y)`. Writes outside the buffer are ignored.
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        if let Some(i) = self.index_of(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Overwrite every pixel with `color` (the "clear canvas" edit)
    pub fn fill_with(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// The raw pixel contents, row-major
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Replace this buffer's contents with another's, adopting its dimensions
    pub fn copy_from(&mut self, other: &PixelBuffer) {
        self.width = other.width;
        self.height = other.height;
        self.pixels.clear();
        self.pixels.extend_from_slice(&other.pixels);
    }

    fn index_of(&self, x: u32, y: u32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some((y as usize) * (self.width as usize) + (x as usize))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_and_set_round_trip() {
        let mut buffer = PixelBuffer::new(4, 3);
        assert_eq!(buffer.get(3, 2), Some(Color::TRANSPARENT));

        buffer.set(3, 2, Color::BLACK);
        assert_eq!(buffer.get(3, 2), Some(Color::BLACK));
        assert_eq!(buffer.get(2, 2), Some(Color::TRANSPARENT));
    }

    #[test]
    fn out_of_bounds_reads_and_writes_are_rejected() {
        let mut buffer = PixelBuffer::new(4, 3);
        assert_eq!(buffer.get(4, 0), None);
        assert_eq!(buffer.get(0, 3), None);

        buffer.set(4, 0, Color::BLACK);
        assert!(buffer.pixels().iter().all(|&p| p == Color::TRANSPARENT));
    }

    #[test]
    fn fill_with_clears_every_pixel() {
        let mut buffer = PixelBuffer::filled(5, 5, Color::WHITE);
        buffer.fill_with(Color::BLACK);
        assert!(buffer.pixels().iter().all(|&p| p == Color::BLACK));
    }
}

// src/canvas.rs

use crate::geometry::Point2;

pub type Rgba = [u8; 4];

pub const WHITE: Rgba = [255, 255, 255, 255];
pub const BLACK: Rgba = [0, 0, 0, 255];

/// CPU-side RGBA8 pixel buffer, row-major with the origin at the top left.
#[derive(Clone, Debug)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
    background: Rgba,
    foreground: Rgba,
    dirty: bool,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Rgba, foreground: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![background; (width as usize) * (height as usize)],
            background,
            foreground,
            dirty: true,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self) {
        self.pixels.fill(self.background);
        self.dirty = true;
    }

    /// Reallocates to the new size; the contents are cleared.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels.resize((width as usize) * (height as usize), self.background);
        self.dirty = true;
    }

    /// Marks the pixel under `point` with the foreground color. Points off
    /// the buffer (including the right/bottom edge lines) are ignored.
    pub fn plot(&mut self, point: Point2) -> bool {
        match self.index_of(point) {
            Some(idx) => {
                self.pixels[idx] = self.foreground;
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y as usize) * (self.width as usize) + x as usize])
        } else {
            None
        }
    }

    /// Number of pixels currently holding the foreground color.
    pub fn marked_pixels(&self) -> usize {
        self.pixels.iter().filter(|p| **p == self.foreground).count()
    }

    /// Tightly packed rows, `4 * width` bytes each.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Returns whether the buffer changed since the last call.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    fn index_of(&self, point: Point2) -> Option<usize> {
        if !point.is_finite() || point.x < 0.0 || point.y < 0.0 {
            return None;
        }
        let (x, y) = (point.x.floor() as u64, point.y.floor() as u64);
        if x >= self.width as u64 || y >= self.height as u64 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + x as usize)
    }
}

//! Drawing surface for procedural artwork.

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::types::{Colour, Point, Shape};

/// A mutable RGBA pixel buffer that shapes are drawn onto.
///
/// Every pixel is initialised by [`Canvas::new`], so the alpha channel is
/// always defined. Call [`Canvas::into_image`] to hand the finished buffer on.
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create a canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Colour) -> Self {
        Self {
            image: ImageBuffer::from_pixel(width, height, background.into()),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Get a pixel, or `None` outside the canvas.
    pub fn get(&self, x: u32, y: u32) -> Option<Colour> {
        self.image.get_pixel_checked(x, y).map(|&p| p.into())
    }

    /// Rasterise a shape. A pixel is painted when its centre is covered.
    ///
    /// Painting replaces the pixel outright, alpha included: a translucent
    /// fill leaves translucent pixels behind rather than blending.
    pub fn draw(&mut self, shape: &Shape) {
        let rgba: Rgba<u8> = shape.colour().into();
        let bounds = shape.bounds();
        let (Some(x_range), Some(y_range)) = (
            pixel_span(bounds.left, bounds.right, self.width()),
            pixel_span(bounds.top, bounds.bottom, self.height()),
        ) else {
            return;
        };

        for y in y_range {
            for x in x_range.clone() {
                let centre = Point::new(x as f32 + 0.5, y as f32 + 0.5);
                if !shape.covers(centre) {
                    continue;
                }
                self.image.put_pixel(x, y, rgba);
            }
        }
    }

    /// Draw shapes in order.
    pub fn draw_all<'a>(&mut self, shapes: impl IntoIterator<Item = &'a Shape>) {
        for shape in shapes {
            self.draw(shape);
        }
    }

    /// Finish drawing and take the pixel buffer.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

/// Pixel indices whose centres can fall in `[lo, hi]`, clipped to `0..limit`.
fn pixel_span(lo: f32, hi: f32, limit: u32) -> Option<std::ops::Range<u32>> {
    if !(lo.is_finite() && hi.is_finite()) || hi < lo {
        return None;
    }
    let start = lo.floor().max(0.0) as u32;
    let end = (hi.ceil().max(0.0) as u32).min(limit);
    (start < end).then_some(start..end)
}

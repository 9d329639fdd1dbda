//! Procedural DOTO icon: angel wings, halo and a checkmark on brand red.
//!
//! Every measurement is a fraction of the edge length `N`, so the artwork
//! scales to any size. Layers are drawn back to front:
//!
//! 1. background fill
//! 2. shadow ellipse below centre
//! 3. left and right wings, eight feathers each
//! 4. white rounded frame
//! 5. grey ring inside the frame
//! 6. red checkmark with round joints
//! 7. halo glow and halo ring above the frame
//!
//! Shapes replace the pixels they cover, so the halo glow leaves a
//! translucent band in the finished icon.

use std::f32::consts::PI;

use image::RgbaImage;

use crate::types::{Colour, Point, Rect, Shape};

use super::Canvas;

/// Feathers per wing.
pub const FEATHER_COUNT: usize = 8;

/// Sweep angle of the first feather, in radians.
const FEATHER_BASE_ANGLE: f32 = -0.5;

/// Angle added per feather index.
const FEATHER_ANGLE_STEP: f32 = 0.15;

/// First feather length as a fraction of the wing width.
const FEATHER_BASE_LENGTH: f32 = 0.7;

/// Length added per feather index, as a fraction of the wing width.
const FEATHER_LENGTH_STEP: f32 = 0.04;

/// Feathers are flattened vertically by this factor.
const FEATHER_VERTICAL_SQUASH: f32 = 0.6;

/// Derived measurements for an icon of edge length `size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconGeometry {
    pub size: u32,
    /// Drawable extent once padding is removed.
    pub icon: f32,
    /// Horizontal and vertical centre line (integer-aligned).
    pub center: f32,
    /// Side of the white frame.
    pub frame: f32,
}

impl IconGeometry {
    pub fn new(size: u32) -> Self {
        let n = size as f32;
        let padding = n * 0.1;
        let icon = n - padding * 2.0;
        Self {
            size,
            icon,
            center: (size / 2) as f32,
            frame: icon * 0.55,
        }
    }

    /// Stroke widths are whole pixels, truncated.
    fn stroke(&self, fraction: f32) -> f32 {
        (self.size as f32 * fraction).trunc()
    }

    /// Centre of the frame, ring and checkmark.
    pub fn frame_center(&self) -> Point {
        Point::new(self.center, self.center + self.icon * 0.02)
    }

    fn wing_width(&self) -> f32 {
        self.icon * 0.35
    }

    fn wing_height(&self) -> f32 {
        self.icon * 0.3
    }

    /// Shared pivot the feathers of one wing fan out from.
    pub fn wing_pivot(&self, side: WingSide) -> Point {
        let offset = self.icon * 0.35;
        let y = self.center - self.icon * 0.05;
        match side {
            WingSide::Left => Point::new(self.center - offset, y),
            WingSide::Right => Point::new(self.center + offset, y),
        }
    }
}

/// Which wing a feather belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WingSide {
    Left,
    Right,
}

/// One feather of a wing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Feather {
    pub index: usize,
    /// Sweep angle. The right wing negates the left.
    pub angle: f32,
    pub length: f32,
    pub thickness: f32,
    pub start: Point,
    pub end: Point,
}

impl Feather {
    fn new(geometry: &IconGeometry, side: WingSide, index: usize) -> Self {
        let i = index as f32;
        let sweep = FEATHER_BASE_ANGLE + i * FEATHER_ANGLE_STEP;
        let length = geometry.wing_width() * (FEATHER_BASE_LENGTH + i * FEATHER_LENGTH_STEP);

        // Left feathers point away from the centre, so rotate by half a turn.
        let (angle, heading) = match side {
            WingSide::Left => (sweep, PI + sweep),
            WingSide::Right => (-sweep, -sweep),
        };

        let start = geometry.wing_pivot(side);
        let end = start.offset(
            heading.cos() * length,
            heading.sin() * length * FEATHER_VERTICAL_SQUASH,
        );

        Self {
            index,
            angle,
            length,
            thickness: geometry.wing_height() * 0.12,
            start,
            end,
        }
    }

    /// The ellipse that draws this feather.
    pub fn shape(&self) -> Shape {
        Shape::Ellipse {
            bounds: Rect::spanning(self.start, self.end)
                .outset(self.thickness, self.thickness / 2.0),
            fill: Colour::WING,
        }
    }
}

/// All feathers of one wing, innermost angle first.
pub fn feathers(geometry: &IconGeometry, side: WingSide) -> Vec<Feather> {
    (0..FEATHER_COUNT)
        .map(|index| Feather::new(geometry, side, index))
        .collect()
}

/// The full list of shapes making up the icon, in paint order.
pub fn icon_shapes(geometry: &IconGeometry) -> Vec<Shape> {
    let g = geometry;
    let mut shapes = Vec::with_capacity(4 + FEATHER_COUNT * 2 + 10);

    // Shadow/base
    shapes.push(Shape::Ellipse {
        bounds: Rect::centered(
            Point::new(g.center, g.center + g.icon * 0.35),
            g.icon * 0.9,
            g.icon * 0.25,
        ),
        fill: Colour::SHADOW_BLUE,
    });

    for side in [WingSide::Left, WingSide::Right] {
        shapes.extend(feathers(g, side).iter().map(Feather::shape));
    }

    let frame_center = g.frame_center();
    shapes.push(Shape::RoundedRect {
        bounds: Rect::centered(frame_center, g.frame, g.frame),
        radius: g.frame * 0.22,
        fill: Colour::WHITE,
    });

    let ring_diameter = g.frame * 0.35 * 2.0;
    shapes.push(Shape::Ring {
        bounds: Rect::centered(frame_center, ring_diameter, ring_diameter),
        width: g.stroke(0.015),
        colour: Colour::RING_GREY,
    });

    shapes.extend(checkmark_shapes(g));
    shapes.extend(halo_shapes(g));

    shapes
}

/// The three checkmark points: left tip, bottom joint, right tip.
pub fn checkmark_points(geometry: &IconGeometry) -> [Point; 3] {
    let c = geometry.frame_center();
    let s = geometry.frame * 0.35;
    [
        c.offset(-s * 0.35, s * 0.05),
        c.offset(-s * 0.05, s * 0.35),
        c.offset(s * 0.45, -s * 0.35),
    ]
}

fn checkmark_shapes(geometry: &IconGeometry) -> Vec<Shape> {
    let width = geometry.stroke(0.06);
    let [p1, p2, p3] = checkmark_points(geometry);
    let colour = Colour::BRAND_RED;

    let mut shapes = vec![
        Shape::Line {
            from: p1,
            to: p2,
            width,
            colour,
        },
        Shape::Line {
            from: p2,
            to: p3,
            width,
            colour,
        },
    ];
    // Round caps and the joint
    shapes.extend([p1, p2, p3].map(|p| Shape::disc(p, width, colour)));
    shapes
}

fn halo_shapes(geometry: &IconGeometry) -> [Shape; 3] {
    let g = geometry;
    let thickness = g.stroke(0.02);
    let halo = Rect::centered(
        Point::new(g.center, g.center - g.icon * 0.38),
        g.frame * 0.5,
        g.frame * 0.12,
    );

    [
        Shape::Ellipse {
            bounds: halo.outset(thickness, thickness),
            fill: Colour::HALO_GLOW,
        },
        Shape::Ellipse {
            bounds: halo,
            fill: Colour::HALO_BLUE,
        },
        // Punch out the middle so the halo reads as a ring
        Shape::Ellipse {
            bounds: halo.inset(thickness, thickness / 2.0),
            fill: Colour::BRAND_RED,
        },
    ]
}

/// Draw the master icon at `size`×`size`.
pub fn compose_icon(size: u32) -> RgbaImage {
    let geometry = IconGeometry::new(size);
    let mut canvas = Canvas::new(size, size, Colour::BRAND_RED);
    canvas.draw_all(&icon_shapes(&geometry));
    canvas.into_image()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn pixel(img: &RgbaImage, x: f32, y: f32) -> Colour {
        (*img.get_pixel(x as u32, y as u32)).into()
    }

    #[test]
    fn test_compose_dimensions() {
        for size in [1, 16, 48, 100, 257] {
            let img = compose_icon(size);
            assert_eq!(img.dimensions(), (size, size), "size {}", size);
        }
    }

    #[test]
    fn test_compose_zero_is_empty() {
        let img = compose_icon(0);
        assert_eq!(img.dimensions(), (0, 0));
    }

    #[test]
    fn test_only_the_glow_is_translucent() {
        let img = compose_icon(128);
        let translucent: Vec<Colour> = img
            .pixels()
            .map(|&p| Colour::from(p))
            .filter(|c| !c.is_opaque())
            .collect();

        assert!(!translucent.is_empty());
        assert!(translucent.iter().all(|&c| c == Colour::HALO_GLOW));
    }

    #[test]
    fn test_compose_is_deterministic() {
        assert_eq!(compose_icon(96).as_raw(), compose_icon(96).as_raw());
    }

    #[test]
    fn test_wing_angles_are_mirrored() {
        let g = IconGeometry::new(1024);
        let left = feathers(&g, WingSide::Left);
        let right = feathers(&g, WingSide::Right);

        assert_eq!(left.len(), FEATHER_COUNT);
        assert_eq!(right.len(), FEATHER_COUNT);

        for (l, r) in left.iter().zip(&right) {
            assert_eq!(l.index, r.index);
            assert!((l.angle + r.angle).abs() < EPSILON, "feather {}", l.index);
            assert!((l.length - r.length).abs() < EPSILON);
        }
    }

    #[test]
    fn test_wing_endpoints_reflect_about_center() {
        for size in [64, 512, 1024] {
            let g = IconGeometry::new(size);
            let left = feathers(&g, WingSide::Left);
            let right = feathers(&g, WingSide::Right);

            for (l, r) in left.iter().zip(&right) {
                assert!((g.center - l.start.x - (r.start.x - g.center)).abs() < EPSILON);
                assert!((g.center - l.end.x - (r.end.x - g.center)).abs() < EPSILON);
                assert!((l.end.y - r.end.y).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn test_feathers_grow_and_fan() {
        let g = IconGeometry::new(1024);
        let left = feathers(&g, WingSide::Left);

        for pair in left.windows(2) {
            assert!(pair[1].length > pair[0].length);
            assert!((pair[1].angle - pair[0].angle - FEATHER_ANGLE_STEP).abs() < EPSILON);
        }
        // Left feathers extend outward
        assert!(left.iter().all(|f| f.end.x < f.start.x));
    }

    #[test]
    fn test_checkmark_points() {
        let g = IconGeometry::new(1000);
        let [p1, p2, p3] = checkmark_points(&g);
        // Bottom joint is lowest, right tip is highest
        assert!(p2.y > p1.y);
        assert!(p3.y < p1.y);
        assert!(p1.x < p2.x && p2.x < p3.x);
    }

    #[test]
    fn test_layer_colours() {
        let img = compose_icon(1024);
        let g = IconGeometry::new(1024);
        let frame = g.frame_center();

        // Background corner
        assert_eq!(pixel(&img, 0.0, 0.0), Colour::BRAND_RED);

        // Shadow below the frame
        assert_eq!(
            pixel(&img, g.center, g.center + g.icon * 0.35),
            Colour::SHADOW_BLUE
        );

        // Frame interior, outside the ring
        assert_eq!(
            pixel(&img, frame.x - g.frame * 0.42, frame.y),
            Colour::WHITE
        );

        // Checkmark passes near the frame centre
        assert_eq!(pixel(&img, frame.x, frame.y), Colour::BRAND_RED);

        // Left wing near its pivot
        let pivot = g.wing_pivot(WingSide::Left);
        assert_eq!(pixel(&img, pivot.x - 5.0, pivot.y), Colour::WING);
    }

    #[test]
    fn test_halo_is_a_ring_with_glow() {
        let img = compose_icon(1024);
        let g = IconGeometry::new(1024);
        let halo_y = g.center - g.icon * 0.38;
        let half_width = g.frame * 0.25;

        // Hollow middle
        assert_eq!(pixel(&img, g.center, halo_y), Colour::BRAND_RED);

        // Ring band just inside the outer edge
        assert_eq!(
            pixel(&img, g.center - half_width + 10.0, halo_y),
            Colour::HALO_BLUE
        );

        // Glow band just outside the outer edge keeps its own alpha
        assert_eq!(
            pixel(&img, g.center - half_width - 10.0, halo_y),
            Colour::HALO_GLOW
        );
        assert_eq!(
            pixel(&img, g.center + half_width + 10.0, halo_y),
            Colour::HALO_GLOW
        );
    }
}

//! Shape descriptors for procedural artwork.
//!
//! A shape is an ephemeral primitive: it is built, handed to
//! [`Canvas::draw`](crate::render::Canvas::draw) and dropped. The canvas
//! samples [`Shape::covers`] at pixel centres `(x + 0.5, y + 0.5)`.

use super::{Colour, Point, Rect};

/// A geometric primitive with its paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Filled ellipse inscribed in `bounds`.
    Ellipse { bounds: Rect, fill: Colour },

    /// Ellipse outline. The stroke grows inward from `bounds`.
    Ring {
        bounds: Rect,
        width: f32,
        colour: Colour,
    },

    /// Filled rectangle with circular corners of `radius`.
    RoundedRect {
        bounds: Rect,
        radius: f32,
        fill: Colour,
    },

    /// Line segment with butt ends. Round caps are drawn separately as discs.
    Line {
        from: Point,
        to: Point,
        width: f32,
        colour: Colour,
    },
}

impl Shape {
    /// A filled circle of the given diameter centred on `center`.
    pub fn disc(center: Point, diameter: f32, fill: Colour) -> Self {
        Shape::Ellipse {
            bounds: Rect::centered(center, diameter, diameter),
            fill,
        }
    }

    /// The paint colour.
    pub fn colour(&self) -> Colour {
        match *self {
            Shape::Ellipse { fill, .. } | Shape::RoundedRect { fill, .. } => fill,
            Shape::Ring { colour, .. } | Shape::Line { colour, .. } => colour,
        }
    }

    /// Bounding box of every pixel the shape can cover.
    pub fn bounds(&self) -> Rect {
        match *self {
            Shape::Ellipse { bounds, .. }
            | Shape::Ring { bounds, .. }
            | Shape::RoundedRect { bounds, .. } => bounds,
            Shape::Line {
                from, to, width, ..
            } => {
                let half = width / 2.0;
                Rect::spanning(from, to).outset(half, half)
            }
        }
    }

    /// Check whether `p` lies inside the shape.
    pub fn covers(&self, p: Point) -> bool {
        match *self {
            Shape::Ellipse { bounds, .. } => in_ellipse(bounds, p),

            Shape::Ring { bounds, width, .. } => {
                if !in_ellipse(bounds, p) {
                    return false;
                }
                let inner = bounds.inset(width, width);
                inner.is_empty() || !in_ellipse(inner, p)
            }

            Shape::RoundedRect { bounds, radius, .. } => {
                if !bounds.contains(p) {
                    return false;
                }
                let r = radius
                    .min(bounds.width() / 2.0)
                    .min(bounds.height() / 2.0)
                    .max(0.0);
                // Distance to the rectangle shrunk by the radius
                let cx = p.x.clamp(bounds.left + r, bounds.right - r);
                let cy = p.y.clamp(bounds.top + r, bounds.bottom - r);
                let (dx, dy) = (p.x - cx, p.y - cy);
                dx * dx + dy * dy <= r * r
            }

            Shape::Line {
                from, to, width, ..
            } => {
                if width <= 0.0 {
                    return false;
                }
                distance_across_segment(p, from, to).is_some_and(|d| d <= width / 2.0)
            }
        }
    }
}

fn in_ellipse(bounds: Rect, p: Point) -> bool {
    if bounds.is_empty() {
        return false;
    }
    let c = bounds.center();
    let rx = bounds.width() / 2.0;
    let ry = bounds.height() / 2.0;
    let nx = (p.x - c.x) / rx;
    let ny = (p.y - c.y) / ry;
    nx * nx + ny * ny <= 1.0
}

/// Perpendicular distance from `p` to the segment `a`-`b`, or `None` when `p`
/// projects outside the segment (butt ends).
fn distance_across_segment(p: Point, a: Point, b: Point) -> Option<f32> {
    let (vx, vy) = (b.x - a.x, b.y - a.y);
    let len_sq = vx * vx + vy * vy;
    if len_sq == 0.0 {
        return None;
    }
    let t = ((p.x - a.x) * vx + (p.y - a.y) * vy) / len_sq;
    if !(0.0..=1.0).contains(&t) {
        return None;
    }
    let (qx, qy) = (a.x + t * vx, a.y + t * vy);
    Some(((p.x - qx).powi(2) + (p.y - qy).powi(2)).sqrt())
}

//! Colour type and brand constants.

use std::fmt;

use image::Rgba;

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Brand red, `#DC2626`. Icon and splash background.
    pub const BRAND_RED: Self = Self::rgb(220, 38, 38);

    /// Shadow/base blue, `#2563EB`.
    pub const SHADOW_BLUE: Self = Self::rgb(37, 99, 235);

    /// Off-white wing feathers, `#F8FAFC`.
    pub const WING: Self = Self::rgb(248, 250, 252);

    /// Light grey ring inside the frame, `#F3F4F6`.
    pub const RING_GREY: Self = Self::rgb(243, 244, 246);

    /// Halo light blue, `#BAE6FD`.
    pub const HALO_BLUE: Self = Self::rgb(186, 230, 253);

    /// Halo glow: halo blue at alpha 100.
    pub const HALO_GLOW: Self = Self::new(186, 230, 253, 100);

    /// Convert to RGBA tuple.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Check if the colour is fully transparent.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }
}

impl From<Colour> for Rgba<u8> {
    fn from(colour: Colour) -> Self {
        Rgba(colour.to_rgba())
    }
}

impl From<Rgba<u8>> for Colour {
    fn from(pixel: Rgba<u8>) -> Self {
        let [r, g, b, a] = pixel.0;
        Colour::new(r, g, b, a)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

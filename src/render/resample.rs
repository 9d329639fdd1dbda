//! Resampling the master into derived artwork.

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::types::export::{SPLASH_HEIGHT, SPLASH_LIFT, SPLASH_WIDTH};
use crate::types::Colour;

/// Resize to a `size`×`size` square with Lanczos3, keeping alpha.
pub fn resize_square(master: &RgbaImage, size: u32) -> RgbaImage {
    imageops::resize(master, size, size, FilterType::Lanczos3)
}

/// Top-left corner of an `icon_size` icon on the splash screen:
/// centred horizontally, lifted above the vertical centre.
pub fn splash_origin(icon_size: u32) -> (i64, i64) {
    let x = (SPLASH_WIDTH as i64 - icon_size as i64) / 2;
    let y = (SPLASH_HEIGHT as i64 - icon_size as i64) / 2 - SPLASH_LIFT as i64;
    (x, y)
}

/// Build the portrait splash screen with the master pasted on brand red.
///
/// The icon is alpha-composited, so transparent parts of the master show
/// the background.
pub fn compose_splash(master: &RgbaImage, icon_size: u32) -> RgbaImage {
    let mut splash = RgbaImage::from_pixel(SPLASH_WIDTH, SPLASH_HEIGHT, Colour::BRAND_RED.into());
    let icon = resize_square(master, icon_size);
    let (x, y) = splash_origin(icon_size);
    imageops::overlay(&mut splash, &icon, x, y);
    splash
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::compose_icon;
    use crate::types::Pipeline;
    use image::Rgba;

    #[test]
    fn test_resize_square() {
        let master = compose_icon(256);
        for size in [16, 48, 192] {
            assert_eq!(resize_square(&master, size).dimensions(), (size, size));
        }
    }

    #[test]
    fn test_resize_preserves_alpha() {
        let master = RgbaImage::from_pixel(64, 64, Rgba([10, 20, 30, 0]));
        let small = resize_square(&master, 8);
        assert!(small.pixels().all(|p| p.0[3] == 0));
    }

    #[test]
    fn test_splash_origin_in_bounds() {
        for pipeline in [Pipeline::Compose, Pipeline::Resize] {
            let size = pipeline.splash_icon_size();
            let (x, y) = splash_origin(size);
            assert!(x >= 0 && y >= 0);
            assert!(x + size as i64 <= SPLASH_WIDTH as i64);
            assert!(y + size as i64 <= SPLASH_HEIGHT as i64);
        }
        assert_eq!(splash_origin(600), (342, 889));
        assert_eq!(splash_origin(800), (242, 789));
    }

    #[test]
    fn test_compose_splash() {
        let master = RgbaImage::from_pixel(64, 64, Colour::WHITE.into());
        let splash = compose_splash(&master, 600);

        assert_eq!(splash.dimensions(), (SPLASH_WIDTH, SPLASH_HEIGHT));
        assert_eq!(Colour::from(*splash.get_pixel(0, 0)), Colour::BRAND_RED);
        assert_eq!(Colour::from(*splash.get_pixel(642, 1189)), Colour::WHITE);
        // Below the pasted icon
        assert_eq!(Colour::from(*splash.get_pixel(642, 1600)), Colour::BRAND_RED);
    }

    fn assert_close(actual: Rgba<u8>, expected: [u8; 4], tolerance: u8) {
        for (a, e) in actual.0.iter().zip(expected) {
            assert!((*a).abs_diff(e) <= tolerance, "{:?} vs {:?}", actual.0, expected);
        }
    }

    #[test]
    fn test_splash_blends_translucent_icon_onto_background() {
        let master = RgbaImage::from_pixel(64, 64, Colour::HALO_GLOW.into());
        let splash = compose_splash(&master, 600);

        // 100/255 of the glow over opaque brand red
        assert_close(*splash.get_pixel(642, 1189), [207, 113, 122, 255], 2);
    }

    #[test]
    fn test_splash_shows_red_through_halo_glow() {
        let master = compose_icon(1024);
        let size = Pipeline::Compose.splash_icon_size();
        let splash = compose_splash(&master, size);

        // Middle of the glow band, left of the halo, in master coordinates
        let g = crate::render::IconGeometry::new(1024);
        let (gx, gy) = (g.center - g.frame * 0.25 - 10.0, g.center - g.icon * 0.38);
        assert_eq!(Colour::from(*master.get_pixel(gx as u32, gy as u32)), Colour::HALO_GLOW);

        let scale = size as f32 / 1024.0;
        let (ox, oy) = splash_origin(size);
        let x = ox as u32 + (gx * scale) as u32;
        let y = oy as u32 + (gy * scale) as u32;

        assert_close(*splash.get_pixel(x, y), [207, 113, 122, 255], 4);
    }

    #[test]
    fn test_splash_transparent_icon_shows_background() {
        let master = RgbaImage::from_pixel(64, 64, Rgba([0, 0, 0, 0]));
        let splash = compose_splash(&master, 800);
        assert!(splash
            .pixels()
            .all(|p| Colour::from(*p) == Colour::BRAND_RED));
    }
}

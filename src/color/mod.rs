mod hue;

use smart_leds::RGB8;
use smart_leds::hsv::Hsv as HSV;

pub use hue::{HUE_AQUA, HUE_BLUE, HUE_GREEN, HUE_ORANGE, HUE_PINK, HUE_PURPLE, HUE_RED, HUE_YELLOW, HueRange};
pub use smart_leds::hsv::hsv2rgb;

use crate::math8::scale8;

pub type Rgb = RGB8;
pub type Hsv = HSV;

/// Pure red, the color of the solid mode
pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };

/// Fully saturated color with the given hue and value
pub const fn saturated(hue: u8, val: u8) -> Hsv {
    Hsv { hue, sat: 255, val }
}

/// Scale every pixel of the frame by a global brightness
///
/// 255 leaves the frame untouched, 0 blanks it.
pub fn scale_frame(frame: &mut [Rgb], brightness: u8) {
    if brightness == 255 {
        return;
    }

    if brightness == 0 {
        for pixel in frame.iter_mut() {
            *pixel = Rgb::default();
        }
        return;
    }

    for pixel in frame.iter_mut() {
        pixel.r = scale8(pixel.r, brightness);
        pixel.g = scale8(pixel.g, brightness);
        pixel.b = scale8(pixel.b, brightness);
    }
}

use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Colour of an RGB bulb before anything was requested.
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// Divide by 255 without a division, exact for `v <= 255 * 255`.
#[inline]
pub const fn div255(v: u32) -> u32 {
    ((v << 8) + v + 255) >> 16
}

/// Scale an 8-bit component by an 8-bit level (255 = 1.0).
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn scale_by_level(component: u8, level: u8) -> u8 {
    div255(component as u32 * level as u32) as u8
}

/// How an RGB bulb derives a white output from its colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComputedWhite {
    /// No white is synthesised
    #[default]
    Disabled,
    /// White is removed from the colour channels: truer colours, less light
    BetterColor,
    /// Colour channels keep the white part: more light, paler colours
    BetterBrightness,
}

/// Extract the common white part of `color`.
///
/// Returns the colour to drive on the RGB channels and the white intensity.
pub const fn split_white(color: Rgb, mode: ComputedWhite) -> (Rgb, u8) {
    let white = min3(color.r, color.g, color.b);
    match mode {
        ComputedWhite::Disabled => (color, 0),
        ComputedWhite::BetterColor => (
            Rgb {
                r: color.r - white,
                g: color.g - white,
                b: color.b - white,
            },
            white,
        ),
        ComputedWhite::BetterBrightness => (color, white),
    }
}

const fn min3(a: u8, b: u8, c: u8) -> u8 {
    let ab = if a < b { a } else { b };
    if ab < c { ab } else { c }
}

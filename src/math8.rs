//! 8-bit waveform math ported from `FastLED`'s `lib8tion`.

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Triangle wave: 0..=127 rises to 0..=254, 128..=255 falls back to 0
#[inline]
pub const fn triwave8(input: u8) -> u8 {
    let folded = if input & 0x80 != 0 { 255 - input } else { input };
    folded << 1
}

/// Ease in out quadratic
#[inline]
pub const fn ease_in_out_quad(i: u8) -> u8 {
    let j = if i & 0x80 != 0 { 255 - i } else { i };
    let jj = scale8(j, j);
    let jj2 = jj << 1;
    if i & 0x80 == 0 { jj2 } else { 255 - jj2 }
}

/// Quadrature wave, shaped roughly like `|sin|` over one byte period
///
/// `quadwave8(0) == 0`, peaks at 255 around 127/128 and returns to 0.
#[inline]
pub const fn quadwave8(input: u8) -> u8 {
    ease_in_out_quad(triwave8(input))
}

/// Clamp a value into `[low, high]`
#[inline]
pub const fn clamp8(value: u8, low: u8, high: u8) -> u8 {
    if value > high {
        high
    } else if value < low {
        low
    } else {
        value
    }
}

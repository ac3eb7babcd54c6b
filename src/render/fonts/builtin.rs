//! Compiled-in 5x7 bitmap font, the last resort when no outline font can be loaded.
//!
//! Covers ASCII letters, digits and a little punctuation. Lowercase letters
//! are drawn as uppercase; every other character is drawn as a hollow box.
//! Glyphs are scaled by whole pixels so they stay crisp.

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal cells per character, including the one-cell gap.
const ADVANCE: u32 = GLYPH_WIDTH + 1;

type Glyph = [u8; GLYPH_HEIGHT as usize];

const MISSING: Glyph = [0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111];

/// Rows top to bottom; bit 4 is the leftmost column.
pub fn glyph(ch: char) -> &'static Glyph {
    match ch.to_ascii_uppercase() {
        'A' => &[0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => &[0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => &[0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100],
        'E' => &[0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => &[0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => &[0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => &[0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => &[0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => &[0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => &[0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => &[0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => &[0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => &[0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => &[0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => &[0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => &[0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => &[0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => &[0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => &[0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => &[0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => &[0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => &[0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100],
        'Z' => &[0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => &[0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => &[0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => &[0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => &[0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => &[0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => &[0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => &[0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => &[0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => &[0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => &[0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ' ' => &[0; 7],
        '.' => &[0, 0, 0, 0, 0, 0b01100, 0b01100],
        ',' => &[0, 0, 0, 0, 0b01100, 0b00100, 0b01000],
        '!' => &[0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0, 0b00100],
        '?' => &[0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0, 0b00100],
        '-' => &[0, 0, 0, 0b11111, 0, 0, 0],
        ':' => &[0, 0b01100, 0b01100, 0, 0b01100, 0b01100, 0],
        _ => &MISSING,
    }
}

/// Whole-pixel magnification used for an em size. Cell height is 8 (7 rows + 1 gap).
pub fn pixel_scale(size: f32) -> u32 {
    ((size / (GLYPH_HEIGHT + 1) as f32).floor() as u32).max(1)
}

/// Width in pixels of `text` at `size`, without the trailing gap.
pub fn text_width(text: &str, size: f32) -> f32 {
    let n = text.chars().count() as u32;
    if n == 0 {
        return 0.0;
    }
    let scale = pixel_scale(size);
    (n * ADVANCE * scale - scale) as f32
}

/// Glyphs sit on the baseline; there are no descenders.
pub fn ascent(size: f32) -> f32 {
    (GLYPH_HEIGHT * pixel_scale(size)) as f32
}

/// Calls `plot(x, y)` for every lit pixel of `text` with the pen (left edge, baseline) at
/// `(origin_x, origin_y)`. Coordinates may fall outside the surface.
pub fn rasterize(text: &str, size: f32, origin_x: i32, origin_y: i32, mut plot: impl FnMut(i32, i32)) {
    let scale = pixel_scale(size) as i32;
    let top = origin_y - GLYPH_HEIGHT as i32 * scale;

    for (i, ch) in text.chars().enumerate() {
        let left = origin_x + i as i32 * ADVANCE as i32 * scale;
        for (row, bits) in glyph(ch).iter().enumerate() {
            for col in 0..GLYPH_WIDTH as i32 {
                if bits & (1 << (GLYPH_WIDTH as i32 - 1 - col)) == 0 {
                    continue;
                }
                let x0 = left + col * scale;
                let y0 = top + row as i32 * scale;
                for dy in 0..scale {
                    for dx in 0..scale {
                        plot(x0 + dx, y0 + dy);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_maps_to_uppercase_and_unknown_to_box() {
        assert_eq!(glyph('s'), glyph('S'));
        assert_eq!(glyph('남'), &MISSING);
    }

    #[test]
    fn scale_follows_em_size() {
        assert_eq!(pixel_scale(48.0), 6);
        assert_eq!(pixel_scale(16.0), 2);
        assert_eq!(pixel_scale(3.0), 1);
    }

    #[test]
    fn width_excludes_trailing_gap() {
        // 3 glyphs * 6 cells * 6 px - 6 px gap
        assert_eq!(text_width("SOS", 48.0), 102.0);
        assert_eq!(text_width("", 48.0), 0.0);
    }

    #[test]
    fn rasterize_stays_within_measured_box() {
        let (mut min_x, mut max_x, mut min_y, mut max_y) = (i32::MAX, i32::MIN, i32::MAX, i32::MIN);
        rasterize("SOS", 16.0, 10, 30, |x, y| {
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        });
        assert_eq!(min_x, 10);
        assert_eq!(max_x, 10 + text_width("SOS", 16.0) as i32 - 1);
        assert_eq!(min_y, 30 - ascent(16.0) as i32);
        assert_eq!(max_y, 29);
    }
}

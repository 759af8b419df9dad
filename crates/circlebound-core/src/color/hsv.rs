use crate::consts::HUE_MAX;

/// Convert one BGR pixel to 8-bit HSV.
///
/// Hue is stored in half-degrees (0..=179) so a full turn fits in a byte;
/// saturation and value span 0..=255.
pub fn bgr_to_hsv(b: u8, g: u8, r: u8) -> (u8, u8, u8) {
    let max = b.max(g).max(r);
    let min = b.min(g).min(r);
    let v = max;

    if max == 0 {
        return (0, 0, 0);
    }

    let delta = (max - min) as f32;
    let s = (255.0 * delta / max as f32).round() as u8;

    if delta == 0.0 {
        return (0, s, v);
    }

    let (bf, gf, rf) = (b as f32, g as f32, r as f32);
    let mut hue_deg = if max == r {
        60.0 * (gf - bf) / delta
    } else if max == g {
        120.0 + 60.0 * (bf - rf) / delta
    } else {
        240.0 + 60.0 * (rf - gf) / delta
    };
    if hue_deg < 0.0 {
        hue_deg += 360.0;
    }

    let h = (hue_deg / 2.0).round() as u16;
    let h = if h > HUE_MAX as u16 { 0 } else { h as u8 };

    (h, s, v)
}

/// Straight-alpha RGBA color as entered in the editor.
///
/// Invariant:
/// - `r`, `g`, `b` are byte channels (`0`–`255`); out-of-range input is clamped
///   once, at the boundary, by [`Color::clamped`].
/// - `a` is nominally in `[0, 1]` but is not validated. The shader ignores it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

impl Color {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0.0)
    }

    /// Builds a color from unvalidated numeric input (e.g. a text field).
    ///
    /// Channels are rounded and clamped to `0..=255`, alpha to `[0, 1]`.
    /// Non-finite values collapse to `0`.
    pub fn clamped(r: f64, g: f64, b: f64, a: f64) -> Self {
        fn channel(v: f64) -> u8 {
            if v.is_finite() { v.round().clamp(0.0, 255.0) as u8 } else { 0 }
        }
        let a = if a.is_finite() { a.clamp(0.0, 1.0) as f32 } else { 0.0 };
        Self::new(channel(r), channel(g), channel(b), a)
    }

    /// Parses `#rgb` or `#rrggbb` (leading `#` optional). Alpha is set to `1.0`.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            3 => {
                let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
                Some(Self::rgb(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            6 => {
                let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
                Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?))
            }
            _ => None,
        }
    }

    /// `#rrggbb` in lowercase. Alpha is dropped.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// CSS functional notation, e.g. `rgba(255, 0, 0, 0.5)`.
    pub fn to_css(self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }

    /// Rasterizer-ready RGB in `[0, 1]`.
    #[inline]
    pub fn to_rgb_f32(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    /// Rasterizer-ready RGBA; alpha is clamped to `[0, 1]`.
    #[inline]
    pub fn to_rgba_f32(self) -> [f32; 4] {
        let [r, g, b] = self.to_rgb_f32();
        let a = if self.a.is_finite() { self.a.clamp(0.0, 1.0) } else { 0.0 };
        [r, g, b, a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── normalization ─────────────────────────────────────────────────────

    #[test]
    fn rgb_f32_normalizes_bytes() {
        assert_eq!(Color::rgb(255, 0, 51).to_rgb_f32(), [1.0, 0.0, 0.2]);
    }

    #[test]
    fn rgba_f32_clamps_alpha() {
        assert_eq!(Color::new(0, 0, 0, 3.0).to_rgba_f32()[3], 1.0);
        assert_eq!(Color::new(0, 0, 0, -1.0).to_rgba_f32()[3], 0.0);
        assert_eq!(Color::new(0, 0, 0, f32::NAN).to_rgba_f32()[3], 0.0);
    }

    // ── boundary clamping ─────────────────────────────────────────────────

    #[test]
    fn clamped_limits_out_of_range_input() {
        let c = Color::clamped(300.0, -20.0, 127.6, 1.5);
        assert_eq!(c, Color::new(255, 0, 128, 1.0));
    }

    #[test]
    fn clamped_handles_non_finite() {
        let c = Color::clamped(f64::NAN, f64::INFINITY, 10.0, f64::NAN);
        assert_eq!(c, Color::new(0, 0, 10, 0.0));
    }

    // ── hex / css ─────────────────────────────────────────────────────────

    #[test]
    fn hex_long_form() {
        assert_eq!(Color::from_hex("#ff8000"), Some(Color::rgb(255, 128, 0)));
        assert_eq!(Color::from_hex("FF8000"), Some(Color::rgb(255, 128, 0)));
    }

    #[test]
    fn hex_short_form_expands_nibbles() {
        assert_eq!(Color::from_hex("#f80"), Some(Color::rgb(255, 136, 0)));
    }

    #[test]
    fn hex_rejects_garbage() {
        assert_eq!(Color::from_hex("#ff80"), None);
        assert_eq!(Color::from_hex("#gg0000"), None);
        assert_eq!(Color::from_hex("#ééé"), None);
    }

    #[test]
    fn hex_output_is_lowercase_and_padded() {
        assert_eq!(Color::rgb(10, 0, 255).to_hex(), "#0a00ff");
    }

    #[test]
    fn css_output() {
        assert_eq!(Color::new(255, 0, 0, 0.5).to_css(), "rgba(255, 0, 0, 0.5)");
        assert_eq!(Color::rgb(1, 2, 3).to_css(), "rgba(1, 2, 3, 1)");
    }
}

use std::fmt;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// 8 bit RGBA color, premultiplied by alpha.
///
/// Straight (un-premultiplied) sources are converted when the color is
/// constructed, see [`Color::from_argb`] and [`Color::from_unpremultiplied`].
/// [`Color::new`] stores the channels verbatim.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromBytes, IntoBytes, Immutable, KnownLayout)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0, 255);
    pub const WHITE: Color = Color::new(255, 255, 255, 255);
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);

    /// Channels are taken as already premultiplied.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Premultiplies straight channels by `a / 255`.
    pub fn from_unpremultiplied(r: u8, g: u8, b: u8, a: u8) -> Self {
        if a == 255 {
            return Color { r, g, b, a };
        }

        let af = f64::from(a) / 255.0;
        let scale = |c: u8| (f64::from(c) * af).round() as u8;

        Color {
            r: scale(r),
            g: scale(g),
            b: scale(b),
            a,
        }
    }

    /// Packed straight color in `0xAARRGGBB` order.
    pub fn from_argb(argb: u32) -> Self {
        Color::from_unpremultiplied(
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
            (argb >> 24) as u8,
        )
    }

    /// Linear blend towards `other`.
    ///
    /// Ratios at or outside `[0, 1]` return the matching endpoint unchanged,
    /// so gradient stops stay exact.
    pub fn interpolated_to(self, other: Color, ratio: f64) -> Color {
        if ratio <= 0.0 {
            return self;
        }

        if ratio >= 1.0 {
            return other;
        }

        let t = ratio;
        let rt = 1.0 - ratio;
        let mix = |from: u8, to: u8| (rt * f64::from(from) + t * f64::from(to)).round() as u8;

        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    /// Opaque black.
    fn default() -> Self {
        Color::BLACK
    }
}

/// Straight `[r, g, b, a]` bytes, as design-system palettes hand them out.
impl From<[u8; 4]> for Color {
    fn from(c: [u8; 4]) -> Self {
        Color::from_unpremultiplied(c[0], c[1], c[2], c[3])
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "C({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_opaque_black() {
        assert_eq!(Color::default(), Color::new(0, 0, 0, 255));
    }

    #[test]
    fn explicit_channels_are_verbatim() {
        let c = Color::new(200, 100, 50, 128);
        assert_eq!(c.to_array(), [200, 100, 50, 128]);
    }

    #[test]
    fn packed_source_is_premultiplied() {
        let c = Color::from_argb(0x80_c8_64_32);
        assert_eq!(c, Color::new(100, 50, 25, 128));
    }

    #[test]
    fn opaque_source_passes_through() {
        assert_eq!(Color::from_argb(0xff_12_34_56), Color::new(0x12, 0x34, 0x56, 255));
        assert_eq!(Color::from([1, 2, 3, 255]), Color::new(1, 2, 3, 255));
    }

    #[test]
    fn fully_transparent_source_is_zeroed() {
        assert_eq!(Color::from([255, 255, 255, 0]), Color::TRANSPARENT);
    }

    #[test]
    fn interpolation_midpoint() {
        let c = Color::new(0, 0, 0, 255).interpolated_to(Color::new(255, 100, 10, 255), 0.5);
        assert_eq!(c, Color::new(128, 50, 5, 255));
    }

    #[test]
    fn interpolation_clamps_ratio() {
        let from = Color::new(1, 2, 3, 4);
        let to = Color::new(250, 251, 252, 253);

        assert_eq!(from.interpolated_to(to, -3.0), from);
        assert_eq!(from.interpolated_to(to, 0.0), from);
        assert_eq!(from.interpolated_to(to, 1.0), to);
        assert_eq!(from.interpolated_to(to, 7.5), to);
    }

    #[test]
    fn display() {
        assert_eq!(Color::new(1, 2, 3, 4).to_string(), "C(1,2,3,4)");
    }
}

use super::LinearScale;
use serde::{Serialize, Serializer};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const WHITE: Rgb = Rgb {
    r: 0xff,
    g: 0xff,
    b: 0xff,
};

impl Rgb {
    /// channel-wise interpolation toward `other`. `t` is clamped to [0, 1].
    pub fn lerp(&self, other: &Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// maps a metric's domain onto a two-color gradient for display emphasis:
/// the best value takes the full accent color, the worst fades to the far
/// end. collapsed domains pin every option to the accent.
#[derive(Debug, Clone, Copy)]
pub struct ColorScale {
    scale: LinearScale,
    from: Rgb,
    to: Rgb,
}

impl ColorScale {
    pub fn new(domain: (f64, f64), from: Rgb, to: Rgb) -> ColorScale {
        ColorScale {
            scale: LinearScale::new(domain, (0.0, 1.0)),
            from,
            to,
        }
    }

    pub fn apply(&self, value: f64) -> Rgb {
        self.from.lerp(&self.to, self.scale.fraction(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AMBER: Rgb = Rgb {
        r: 0xf5,
        g: 0xa8,
        b: 0x1c,
    };

    #[test]
    fn test_gradient_endpoints() {
        let scale = ColorScale::new((0.0, 10.0), AMBER, WHITE);
        assert_eq!(scale.apply(0.0), AMBER);
        assert_eq!(scale.apply(10.0), WHITE);
    }

    #[test]
    fn test_midpoint_blend() {
        let black = Rgb { r: 0, g: 0, b: 0 };
        let scale = ColorScale::new((0.0, 1.0), black, WHITE);
        let mid = scale.apply(0.5);
        assert_eq!(mid, Rgb { r: 128, g: 128, b: 128 });
    }

    #[test]
    fn test_collapsed_domain_pins_accent() {
        let scale = ColorScale::new((5.0, 5.0), AMBER, WHITE);
        assert_eq!(scale.apply(5.0), AMBER);
    }

    #[test]
    fn test_hex_display() {
        assert_eq!(AMBER.to_string(), "#f5a81c");
        assert_eq!(WHITE.to_string(), "#ffffff");
    }
}

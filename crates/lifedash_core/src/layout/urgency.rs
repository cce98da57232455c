//! Urgency color ramp and glow.
//!
//! # Responsibility
//! - Map days-from-now onto a three-band HSL ramp.
//! - Map days-from-now onto a tiered glow intensity.
//!
//! # Invariants
//! - Band A (`d <= 7`) is a flat urgent orange.
//! - Band B (`7 < d <= 14`) interpolates linearly; Band C (`d > 14`)
//!   interpolates on a log curve up to the horizon.
//! - Each band agrees with its neighbour at the 7 and 14 day seams.
//! - Glow always uses the Band A color; only its alpha varies.

use crate::config::{LayoutConfig, FAR_BAND_START_DAYS};

/// Last day of the flat urgent band.
pub const URGENT_BAND_END_DAYS: f64 = 7.0;

const URGENT: Hsl = Hsl {
    hue: 25.0,
    saturation: 92.0,
    lightness: 55.0,
};
const NEAR_END: Hsl = Hsl {
    hue: 30.0,
    saturation: 67.0,
    lightness: 50.0,
};
const FAR_END: Hsl = Hsl {
    hue: 220.0,
    saturation: 8.0,
    lightness: 35.0,
};

const URGENT_GLOW: f64 = 0.4;
const NEAR_GLOW: f64 = 0.2;

/// Hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    fn lerp(from: Hsl, to: Hsl, t: f64) -> Hsl {
        Hsl {
            hue: from.hue + (to.hue - from.hue) * t,
            saturation: from.saturation + (to.saturation - from.saturation) * t,
            lightness: from.lightness + (to.lightness - from.lightness) * t,
        }
    }

    /// CSS color string; `hsla(...)` when an opacity override is given.
    ///
    /// Fixed precision keeps the output byte-stable across runs.
    pub fn to_css(self, opacity: Option<f64>) -> String {
        match opacity {
            Some(alpha) => format!(
                "hsla({:.1}, {:.1}%, {:.1}%, {:.2})",
                self.hue,
                self.saturation,
                self.lightness,
                alpha.clamp(0.0, 1.0)
            ),
            None => format!(
                "hsl({:.1}, {:.1}%, {:.1}%)",
                self.hue, self.saturation, self.lightness
            ),
        }
    }
}

/// Band A: flat urgent color.
pub fn band_a() -> Hsl {
    URGENT
}

/// Band B at `t = (d - 7) / 7`.
pub fn band_b(t: f64) -> Hsl {
    Hsl::lerp(URGENT, NEAR_END, t.clamp(0.0, 1.0))
}

/// Band C at `t = ln(d - 14 + 1) / ln(max_days - 14 + 1)`.
pub fn band_c(t: f64) -> Hsl {
    Hsl::lerp(NEAR_END, FAR_END, t.clamp(0.0, 1.0))
}

/// Ramp color for `days` from now.
pub fn urgency_hsl(days: f64, config: &LayoutConfig) -> Hsl {
    if days <= URGENT_BAND_END_DAYS {
        band_a()
    } else if days <= FAR_BAND_START_DAYS {
        band_b((days - URGENT_BAND_END_DAYS) / (FAR_BAND_START_DAYS - URGENT_BAND_END_DAYS))
    } else {
        let span = config.max_days - FAR_BAND_START_DAYS + 1.0;
        band_c((days - FAR_BAND_START_DAYS + 1.0).ln() / span.ln())
    }
}

/// Ramp color as a CSS string with an optional alpha override.
pub fn urgency_color(days: f64, opacity: Option<f64>, config: &LayoutConfig) -> String {
    urgency_hsl(days, config).to_css(opacity)
}

/// Glow alpha: strong inside a week, faint in week two, none beyond.
pub fn glow_intensity(days: f64) -> f64 {
    if days <= URGENT_BAND_END_DAYS {
        URGENT_GLOW
    } else if days <= FAR_BAND_START_DAYS {
        NEAR_GLOW
    } else {
        0.0
    }
}

/// Glow color; `"transparent"` once the item is past two weeks out.
pub fn glow_color(days: f64) -> String {
    let intensity = glow_intensity(days);
    if intensity == 0.0 {
        return "transparent".to_string();
    }
    URGENT.to_css(Some(intensity))
}

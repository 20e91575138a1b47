use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};
use strum::{Display as StrumDisplay, EnumIter};

/// Angle of the centered (active) row.
pub const CENTER: f64 = PI;

pub const VISIBLE_START: f64 = FRAC_PI_4;
pub const VISIBLE_END: f64 = 7.0 * FRAC_PI_4;

pub const MAX_FONT_SIZE: f64 = 36.0;
pub const MIN_FONT_SIZE: f64 = 28.0;

const MAX_FADE: f64 = 0.7;

pub fn normalize(angle: f64) -> f64 {
    let normalized = angle % TAU;
    let normalized = if normalized < 0.0 {
        normalized + TAU
    } else {
        normalized
    };
    // tiny negative remainders round up to exactly TAU
    if normalized >= TAU { 0.0 } else { normalized }
}

pub fn distance_from_center(angle: f64) -> f64 {
    (normalize(angle) - CENTER).abs()
}

/// Items outside the visible arc sit on the back of the wheel and are not drawn at all.
pub fn is_visible(angle: f64) -> bool {
    let normalized = normalize(angle);
    normalized > VISIBLE_START && normalized < VISIBLE_END
}

pub fn opacity(angle: f64) -> f64 {
    let distance = distance_from_center(angle);
    1.0 - (distance / FRAC_PI_2 * MAX_FADE).min(MAX_FADE)
}

pub fn font_size(angle: f64, item_spacing: f64) -> f64 {
    let t = (distance_from_center(angle) / (2.0 * item_spacing)).clamp(0.0, 1.0);
    MAX_FONT_SIZE - t * (MAX_FONT_SIZE - MIN_FONT_SIZE)
}

pub fn font_weight(angle: f64, item_spacing: f64) -> FontWeight {
    FontWeight::for_distance(distance_from_center(angle), item_spacing)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, StrumDisplay, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum FontWeight {
    Regular,
    Medium,
    Semibold,
    Bold,
}

impl FontWeight {
    const TIERS: [(f64, FontWeight); 3] = [
        (0.3, FontWeight::Bold),
        (0.6, FontWeight::Semibold),
        (1.0, FontWeight::Medium),
    ];

    pub fn for_distance(distance: f64, item_spacing: f64) -> Self {
        Self::TIERS
            .iter()
            .find(|(threshold, _)| distance < threshold * item_spacing)
            .map_or(Self::Regular, |(_, weight)| *weight)
    }

    pub fn numeric(&self) -> u16 {
        match self {
            Self::Regular => 400,
            Self::Medium => 500,
            Self::Semibold => 600,
            Self::Bold => 700,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    const EPS: f64 = 1e-9;
    const SPACING: f64 = TAU / 18.0;

    #[test]
    fn test_normalize_range() {
        let cases = [
            0.0,
            PI,
            -PI,
            TAU,
            -TAU,
            7.5,
            -7.5,
            1e6,
            -1e6,
            -1e-17,
            123.456,
        ];
        for angle in cases {
            let normalized = normalize(angle);
            assert!(
                (0.0..TAU).contains(&normalized),
                "normalize({angle}) = {normalized}"
            );
        }
    }

    #[test]
    fn test_normalize_is_periodic() {
        for i in -40..40 {
            let angle = i as f64 * 0.37;
            let a = normalize(angle);
            let b = normalize(angle + TAU);
            let diff = (a - b).abs();
            // values straddling zero may land on opposite ends of the range
            assert!(diff < EPS || (TAU - diff) < EPS, "angle {angle}: {a} vs {b}");
        }
    }

    #[test]
    fn test_visibility_window() {
        assert!(is_visible(PI));
        assert!(is_visible(PI + 3.0 * FRAC_PI_4 - 0.01));
        assert!(!is_visible(FRAC_PI_4));
        assert!(!is_visible(VISIBLE_END));
        assert!(!is_visible(0.0));
        assert!(!is_visible(-0.1));
        assert!(is_visible(PI - TAU));
    }

    #[test]
    fn test_opacity_curve() {
        assert!((opacity(PI) - 1.0).abs() < EPS);
        assert!((opacity(PI + FRAC_PI_2) - 0.3).abs() < EPS);
        assert!((opacity(0.0) - 0.3).abs() < EPS);

        let mut previous = opacity(PI);
        for step in 1..=100 {
            let value = opacity(PI + step as f64 * 0.03);
            assert!(value <= previous + EPS);
            assert!(value >= 0.3 - EPS);
            previous = value;
        }
    }

    #[test]
    fn test_font_size_curve() {
        assert!((font_size(PI, SPACING) - 36.0).abs() < EPS);
        assert!((font_size(PI + SPACING, SPACING) - 32.0).abs() < EPS);
        assert!((font_size(PI - 2.0 * SPACING, SPACING) - 28.0).abs() < EPS);
        assert!((font_size(PI + 5.0 * SPACING, SPACING) - 28.0).abs() < EPS);
    }

    #[test]
    fn test_font_weight_tiers() {
        let cases = [
            (0.0, FontWeight::Bold),
            (0.29, FontWeight::Bold),
            (0.31, FontWeight::Semibold),
            (0.59, FontWeight::Semibold),
            (0.61, FontWeight::Medium),
            (0.99, FontWeight::Medium),
            (1.01, FontWeight::Regular),
            (4.0, FontWeight::Regular),
        ];
        for (fraction, expected) in cases {
            assert_eq!(
                font_weight(PI + fraction * SPACING, SPACING),
                expected,
                "fraction {fraction}"
            );
        }
    }

    #[test]
    fn test_font_weight_ordering() {
        let weights: Vec<u16> = FontWeight::iter().map(|w| w.numeric()).collect();
        assert_eq!(weights, vec![400, 500, 600, 700]);
        assert_eq!(FontWeight::Semibold.to_string(), "semibold");
    }
}

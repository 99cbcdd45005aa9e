pub mod earnings_chart;
pub mod forecast_chart;

pub use earnings_chart::{EarningsChart, EarningsStyle};
pub use forecast_chart::ForecastChart;

use plotters::style::RGBColor;

const FALLBACK_COLOR: RGBColor = RGBColor(79, 70, 229);

/// Parse a `#rrggbb` colour. Anything else maps to the indigo fallback.
pub fn hex_to_rgb(hex: &str) -> RGBColor {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 {
        return FALLBACK_COLOR;
    }

    let channel = |range: std::ops::Range<usize>| {
        digits.get(range).and_then(|pair| u8::from_str_radix(pair, 16).ok())
    };
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => RGBColor(r, g, b),
        _ => FALLBACK_COLOR,
    }
}

/// Day label for an integer tick, empty between ticks
pub fn day_label(days: &[String], x: f64) -> String {
    let nearest = x.round();
    if (x - nearest).abs() > 1e-6 || nearest < 0.0 {
        return String::new();
    }
    days.get(nearest as usize).cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#ef4444"), RGBColor(239, 68, 68));
        assert_eq!(hex_to_rgb("10b981"), RGBColor(16, 185, 129));
        assert_eq!(hex_to_rgb("#abc"), FALLBACK_COLOR);
        assert_eq!(hex_to_rgb("#zz0000"), FALLBACK_COLOR);
    }

    #[test]
    fn test_day_label() {
        let days = vec!["Mon".to_string(), "Tue".to_string()];
        assert_eq!(day_label(&days, 1.0), "Tue");
        assert_eq!(day_label(&days, 0.5), "");
        assert_eq!(day_label(&days, 5.0), "");
        assert_eq!(day_label(&days, -1.0), "");
    }
}
